//! Right pane: properties of the selected document.

use dbv_browser::render_document;
use dbv_model::Document;
use iced::widget::{button, column, scrollable, text};
use iced::{Element, Length};

use crate::component::property_tree;
use crate::message::Message;
use crate::theme::{SPACING_SM, TEXT_BODY, TEXT_TITLE, button_ghost};

pub fn view_properties<'a>(document: &Document, key_width: f32) -> Element<'a, Message> {
    let back = button(text("\u{2190} Back to list").size(TEXT_BODY))
        .on_press(Message::BackToList)
        .padding([4.0, 8.0])
        .style(button_ghost);

    let tree = property_tree(&render_document(document), key_width);

    column![
        back,
        text(format!("Properties for {}:", document.id())).size(TEXT_TITLE),
        scrollable(tree).height(Length::Fill),
    ]
    .spacing(SPACING_SM)
    .into()
}
