//! Toolbar with the database path and open/close actions.

use dbv_browser::{ConnectionStatus, ViewState};
use iced::widget::{button, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme::{
    SPACING_SM, TEXT_BODY, TEXT_CAPTION, button_primary, button_secondary, text_muted,
    toolbar_surface,
};

pub fn view_toolbar(state: &ViewState) -> Element<'_, Message> {
    // No on_input: the path only changes through the picker.
    let path = text_input("No database selected", state.path.as_deref().unwrap_or_default())
        .padding([8.0, 12.0])
        .size(TEXT_BODY)
        .width(Length::Fill);

    let open_label = match state.connection {
        ConnectionStatus::Opening => "Opening...",
        ConnectionStatus::Closed | ConnectionStatus::Open => "Open DB",
    };
    let open = button(text(open_label).size(TEXT_BODY))
        .on_press(Message::OpenDatabaseClicked)
        .padding([8.0, 16.0])
        .style(button_primary);

    let close = button(text("Close DB").size(TEXT_BODY))
        .on_press_maybe(
            state
                .path
                .is_some()
                .then_some(Message::CloseDatabaseClicked),
        )
        .padding([8.0, 16.0])
        .style(button_secondary);

    container(
        row![
            text("Database Path").size(TEXT_CAPTION).style(text_muted),
            path,
            open,
            close,
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(SPACING_SM)
    .style(toolbar_surface)
    .into()
}
