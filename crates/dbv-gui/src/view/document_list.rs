//! Right pane: documents of the selected type.

use dbv_browser::ViewState;
use iced::widget::{button, column, row, scrollable, space, text, text_input};
use iced::{Alignment, Element, Length};

use crate::component::{Placeholder, SelectableRow, pagination_bar};
use crate::message::Message;
use crate::theme::{
    SPACING_SM, TEXT_BODY, TEXT_CAPTION, TEXT_TITLE, button_secondary, divider, text_error,
    text_muted,
};

pub fn view_document_list(state: &ViewState) -> Element<'_, Message> {
    let total = state.documents.len();

    let header = row![
        text("Documents").size(TEXT_TITLE),
        space::horizontal(),
        text(format!("Found: {total}"))
            .size(TEXT_CAPTION)
            .style(text_muted),
    ]
    .align_y(Alignment::Center);

    let filter = row![
        text_input("WHERE clause, e.g. age > 30", &state.filter_draft)
            .on_input(Message::FilterChanged)
            .on_submit(Message::FilterSubmitted)
            .padding([8.0, 12.0])
            .size(TEXT_BODY)
            .width(Length::Fill),
        button(text("Filter").size(TEXT_BODY))
            .on_press(Message::FilterSubmitted)
            .padding([8.0, 16.0])
            .style(button_secondary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let pagination = pagination_bar(
        &state.pagination,
        total,
        Message::PreviousPage,
        Message::NextPage,
    );

    column![
        header,
        filter,
        pagination,
        divider(),
        view_rows(state)
    ]
    .spacing(SPACING_SM)
    .height(Length::Fill)
    .into()
}

fn view_rows(state: &ViewState) -> Element<'_, Message> {
    if let Some(error) = &state.query_error {
        return text(error.as_str())
            .size(TEXT_BODY)
            .style(text_error)
            .into();
    }
    if state.documents_loading {
        return Placeholder::new("Loading...").top_aligned().view();
    }
    if state.documents.is_empty() {
        return Placeholder::new("No documents match filter")
            .top_aligned()
            .view();
    }

    let rows = state.visible_documents().iter().map(|document| {
        SelectableRow::new(document.id(), Message::DocumentSelected(document.id().to_string()))
            .view()
    });
    scrollable(column(rows).spacing(2.0))
        .height(Length::Fill)
        .into()
}
