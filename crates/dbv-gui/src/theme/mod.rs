//! Theme module for the document store viewer.
//!
//! - Theme creation (`viewer_theme`)
//! - Spacing and sizing constants (`spacing`)
//! - Widget style functions (`style`)

pub mod spacing;
pub mod style;

pub use spacing::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_THIN, DOCUMENT_PANE_PORTION, SECTION_INDENT,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, TEXT_BODY, TEXT_CAPTION, TEXT_TITLE,
    TYPE_PANE_PORTION,
};
pub use style::{
    array_box, button_ghost, button_primary, button_secondary, divider, notice_banner,
    pane_bordered, pane_surface, text_error, text_muted, toolbar_surface,
};

use iced::theme::Palette;
use iced::{Color, Theme};

use crate::constants::APP_NAME;

/// Light theme used by the application.
pub fn viewer_theme() -> Theme {
    Theme::custom(APP_NAME.to_string(), palette())
}

fn palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.98, 0.99),
        text: Color::from_rgb(0.10, 0.10, 0.12),
        primary: Color::from_rgb(0.16, 0.42, 0.78),
        success: Color::from_rgb(0.20, 0.70, 0.40),
        warning: Color::from_rgb(0.95, 0.65, 0.05),
        danger: Color::from_rgb(0.85, 0.25, 0.25),
    }
}
