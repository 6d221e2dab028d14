//! View module for the document store viewer.
//!
//! Views are pure functions of [`ViewState`]: a toolbar over two panes, with
//! an optional notice banner between them.

mod document_list;
mod properties;
mod toolbar;
mod type_list;

use dbv_browser::{Notice, ViewState};
use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Element, Length};

use crate::component::Placeholder;
use crate::message::Message;
use crate::settings::DisplaySettings;
use crate::theme::{
    DOCUMENT_PANE_PORTION, SPACING_MD, SPACING_SM, TEXT_BODY, TEXT_CAPTION, TYPE_PANE_PORTION,
    button_ghost, notice_banner, pane_bordered, pane_surface,
};

/// Main view function - the whole window.
pub fn view_main<'a>(state: &'a ViewState, display: &DisplaySettings) -> Element<'a, Message> {
    let mut content = column![toolbar::view_toolbar(state)].spacing(SPACING_MD);

    if let Some(notice) = &state.notice {
        content = content.push(view_notice(notice));
    }

    let types = container(type_list::view_type_list(state))
        .width(Length::FillPortion(TYPE_PANE_PORTION))
        .height(Length::Fill)
        .padding(SPACING_SM)
        .style(pane_surface);

    let documents = container(view_right_pane(state, display))
        .width(Length::FillPortion(DOCUMENT_PANE_PORTION))
        .height(Length::Fill)
        .padding(SPACING_MD)
        .style(pane_bordered);

    content = content.push(row![types, documents].spacing(SPACING_MD).height(Length::Fill));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_MD)
        .into()
}

fn view_right_pane<'a>(state: &'a ViewState, display: &DisplaySettings) -> Element<'a, Message> {
    if state.path.is_none() {
        return Placeholder::new("Click 'Open DB' to select a database directory.").view();
    }
    if state.selected_type.is_none() {
        return Placeholder::new("Select a document type from the left").view();
    }
    match &state.selected_document {
        Some(document) => properties::view_properties(document, display.property_key_width),
        None => document_list::view_document_list(state),
    }
}

fn view_notice(notice: &Notice) -> Element<'_, Message> {
    let mut body = column![text(notice.message.as_str()).size(TEXT_BODY)].spacing(2.0);
    if let Some(suggestion) = &notice.suggestion {
        body = body.push(text(suggestion.as_str()).size(TEXT_CAPTION));
    }

    let dismiss = button(text("Dismiss").size(TEXT_CAPTION))
        .on_press(Message::DismissNotice)
        .padding([4.0, 10.0])
        .style(button_ghost);

    container(
        row![body, space::horizontal(), dismiss]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([SPACING_SM, SPACING_MD])
    .style(notice_banner)
    .into()
}
