//! Left pane: distinct document types.

use dbv_browser::{ConnectionStatus, ViewState};
use iced::widget::{column, scrollable, text};
use iced::{Element, Length};

use crate::component::{Placeholder, SelectableRow};
use crate::message::Message;
use crate::theme::{SPACING_SM, SPACING_XS, TEXT_TITLE};

pub fn view_type_list(state: &ViewState) -> Element<'_, Message> {
    let body: Element<'_, Message> = match state.connection {
        ConnectionStatus::Closed => Placeholder::new("Database closed").top_aligned().view(),
        ConnectionStatus::Opening => Placeholder::new("Loading...").top_aligned().view(),
        ConnectionStatus::Open if state.document_types.is_empty() => {
            Placeholder::new("No documents").top_aligned().view()
        }
        ConnectionStatus::Open => {
            let selected = state.selected_type.as_deref();
            let rows = state.document_types.iter().map(|type_name| {
                SelectableRow::new(type_name.as_str(), Message::TypeSelected(type_name.clone()))
                    .selected(selected == Some(type_name.as_str()))
                    .view()
            });
            scrollable(column(rows).spacing(2.0).padding([0.0, SPACING_XS]))
                .height(Length::Fill)
                .into()
        }
    };

    column![text("Document Types").size(TEXT_TITLE), body]
        .spacing(SPACING_SM)
        .into()
}
