//! Widget style functions.
//!
//! Style functions receive `&Theme` and derive every color from its extended
//! palette:
//!
//! ```rust,ignore
//! button(text("Open DB")).style(button_primary)
//! container(content).style(pane_bordered)
//! ```

use iced::widget::{button, container, rule, text};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::spacing::{BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_THIN};

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let (background, text_color, shadow) = match status {
        button::Status::Active => (
            palette.primary.base.color,
            palette.primary.base.text,
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
        ),
        button::Status::Hovered => (
            palette.primary.strong.color,
            palette.primary.strong.text,
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.18),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
        ),
        button::Status::Pressed => (
            palette.primary.strong.color,
            palette.primary.strong.text,
            Shadow::default(),
        ),
        button::Status::Disabled => (
            palette.background.strong.color,
            Color {
                a: 0.6,
                ..palette.background.base.text
            },
            Shadow::default(),
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow,
        ..Default::default()
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let (background, text_color, border_color) = match status {
        button::Status::Active => (
            palette.background.base.color,
            palette.background.base.text,
            palette.background.strong.color,
        ),
        button::Status::Hovered => (
            palette.background.weak.color,
            palette.background.base.text,
            palette.primary.base.color,
        ),
        button::Status::Pressed => (
            palette.background.strong.color,
            palette.background.base.text,
            palette.primary.base.color,
        ),
        button::Status::Disabled => (
            palette.background.weak.color,
            palette.background.strong.color,
            palette.background.weak.color,
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: border_color,
        },
        ..Default::default()
    }
}

/// Ghost button style - text-only navigation such as "Back".
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette.primary.base.color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Toolbar strip across the top of the window.
pub fn toolbar_surface(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: BORDER_WIDTH_THIN,
            radius: 0.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

/// Filled pane (type list).
pub fn pane_surface(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outlined pane (documents and properties).
pub fn pane_bordered(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: BORDER_WIDTH_THIN,
            radius: BORDER_RADIUS_MD.into(),
        },
        ..Default::default()
    }
}

/// Box around a rendered array.
pub fn array_box(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: BORDER_WIDTH_THIN,
            radius: BORDER_RADIUS_SM.into(),
        },
        ..Default::default()
    }
}

/// Banner for failed operations.
pub fn notice_banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: Some(palette.danger.weak.text),
        border: Border {
            color: palette.danger.base.color,
            width: BORDER_WIDTH_THIN,
            radius: BORDER_RADIUS_SM.into(),
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT AND RULES
// =============================================================================

/// Secondary text (counts, labels, hints).
pub fn text_muted(theme: &Theme) -> text::Style {
    let base = theme.extended_palette().background.base.text;
    text::Style {
        color: Some(Color { a: 0.6, ..base }),
    }
}

/// Inline error text.
pub fn text_error(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}

/// Thin horizontal separator.
pub fn divider<'a, M: 'a>() -> iced::Element<'a, M> {
    rule::horizontal(1)
        .style(|theme: &Theme| rule::Style {
            color: theme.extended_palette().background.strong.color,
            radius: 0.0.into(),
            fill_mode: rule::FillMode::Full,
            snap: true,
        })
        .into()
}
