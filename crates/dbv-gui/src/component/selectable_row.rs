//! Selectable row component for the type and document lists.
//!
//! # Usage
//!
//! ```rust,ignore
//! SelectableRow::new("user", Message::TypeSelected("user".into()))
//!     .selected(selected_type == Some("user"))
//!     .view()
//! ```

use iced::widget::{button, row, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::theme::{BORDER_RADIUS_SM, BORDER_WIDTH_THIN, SPACING_SM, SPACING_XS, TEXT_BODY};

/// A clickable list row with hover and selection states.
pub struct SelectableRow<M> {
    label: String,
    selected: bool,
    on_click: M,
}

impl<M: Clone> SelectableRow<M> {
    /// Create a new selectable row.
    pub fn new(label: impl Into<String>, on_click: M) -> Self {
        Self {
            label: label.into(),
            selected: false,
            on_click,
        }
    }

    /// Set selection state.
    pub fn selected(mut self, is_selected: bool) -> Self {
        self.selected = is_selected;
        self
    }

    /// Build the element.
    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let is_selected = self.selected;

        let content = row![text(self.label).size(TEXT_BODY)].align_y(Alignment::Center);

        button(content.padding([SPACING_XS, SPACING_SM]))
            .on_press(self.on_click)
            .width(Length::Fill)
            .style(move |theme: &Theme, status| {
                let palette = theme.extended_palette();
                let background = if is_selected {
                    Some(palette.primary.weak.color.into())
                } else {
                    match status {
                        button::Status::Hovered | button::Status::Pressed => {
                            Some(palette.background.strong.color.into())
                        }
                        button::Status::Active | button::Status::Disabled => None,
                    }
                };
                let (text_color, border_color) = if is_selected {
                    (palette.primary.weak.text, palette.primary.base.color)
                } else {
                    (palette.background.base.text, Color::TRANSPARENT)
                };

                button::Style {
                    background,
                    text_color,
                    border: Border {
                        radius: BORDER_RADIUS_SM.into(),
                        color: border_color,
                        width: if is_selected { BORDER_WIDTH_THIN } else { 0.0 },
                    },
                    ..Default::default()
                }
            })
            .into()
    }
}
