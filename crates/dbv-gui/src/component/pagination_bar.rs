//! Range label with Previous/Next buttons.

use dbv_browser::Pagination;
use iced::widget::{button, row, space, text};
use iced::{Alignment, Element};

use crate::theme::{SPACING_SM, TEXT_CAPTION, button_secondary, text_muted};

/// Pagination controls for a list of `total` items.
///
/// Buttons are disabled at the first and last page.
pub fn pagination_bar<'a, M: Clone + 'a>(
    pagination: &Pagination,
    total: usize,
    on_previous: M,
    on_next: M,
) -> Element<'a, M> {
    let previous = button(text("Previous").size(TEXT_CAPTION))
        .on_press_maybe(pagination.has_previous().then_some(on_previous))
        .padding([4.0, 10.0])
        .style(button_secondary);

    let next = button(text("Next").size(TEXT_CAPTION))
        .on_press_maybe(pagination.has_next(total).then_some(on_next))
        .padding([4.0, 10.0])
        .style(button_secondary);

    row![
        text(pagination.range_label(total))
            .size(TEXT_CAPTION)
            .style(text_muted),
        space::horizontal(),
        previous,
        next,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}
