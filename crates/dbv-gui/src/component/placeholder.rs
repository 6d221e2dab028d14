//! Centered hint text for empty panes.
//!
//! # Usage
//!
//! ```rust,ignore
//! Placeholder::new("Select a document type from the left").view()
//!
//! Placeholder::new("Database closed").top_aligned().view()
//! ```

use iced::widget::{container, text};
use iced::{Element, Length};

use crate::theme::{SPACING_LG, TEXT_BODY, text_muted};

/// Muted message filling the available space.
pub struct Placeholder {
    message: String,
    centered: bool,
}

impl Placeholder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            centered: true,
        }
    }

    /// Place the message at the top of the pane instead of the middle.
    pub fn top_aligned(mut self) -> Self {
        self.centered = false;
        self
    }

    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let content = text(self.message).size(TEXT_BODY).style(text_muted);

        if self.centered {
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(SPACING_LG)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            container(content)
                .width(Length::Fill)
                .padding(SPACING_LG)
                .center_x(Length::Fill)
                .into()
        }
    }
}
