//! Widget form of a rendered document.
//!
//! Scalar properties sit in a two-column row with the key in a fixed-width
//! column. Nested objects and arrays get a header row and an indented body;
//! arrays are boxed, one labelled item per row.

use dbv_browser::{ArrayItem, ObjectEntry, VisualNode};
use iced::font::Weight;
use iced::widget::{column, container, row, text};
use iced::{Element, Font, Length, Padding};

use crate::theme::{
    SECTION_INDENT, SPACING_SM, SPACING_XS, TEXT_BODY, array_box, divider, text_muted,
};

const KEY_FONT: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

/// Build the widget tree for `node`.
///
/// `key_width` is the width of the key column, in pixels.
pub fn property_tree<'a, M: 'a>(node: &VisualNode, key_width: f32) -> Element<'a, M> {
    match node {
        VisualNode::Text(value) => text(value.clone()).size(TEXT_BODY).into(),
        VisualNode::Object { entries, .. } => column(
            entries
                .iter()
                .map(|entry| object_entry(entry, key_width)),
        )
        .spacing(SPACING_XS)
        .width(Length::Fill)
        .into(),
        VisualNode::Array { items, .. } => {
            let mut list = column![].spacing(SPACING_XS);
            for item in items {
                list = list.push(array_item(item, key_width));
                if item.separated {
                    list = list.push(divider());
                }
            }
            container(list)
                .padding(SPACING_SM)
                .width(Length::Fill)
                .style(array_box)
                .into()
        }
    }
}

fn object_entry<'a, M: 'a>(entry: &ObjectEntry, key_width: f32) -> Element<'a, M> {
    match entry {
        ObjectEntry::Field { key, value } => row![
            text(key.clone())
                .size(TEXT_BODY)
                .font(KEY_FONT)
                .width(Length::Fixed(key_width)),
            text(value.clone()).size(TEXT_BODY),
        ]
        .spacing(SPACING_SM)
        .into(),
        ObjectEntry::Section { key, body } => column![
            text(format!("{key}:")).size(TEXT_BODY).font(KEY_FONT),
            indented(property_tree(body, key_width)),
        ]
        .spacing(SPACING_XS)
        .into(),
        ObjectEntry::Separator => divider(),
    }
}

fn array_item<'a, M: 'a>(item: &ArrayItem, key_width: f32) -> Element<'a, M> {
    let label = text(item.label.clone()).size(TEXT_BODY).style(text_muted);
    match &item.body {
        VisualNode::Text(value) => row![label, text(value.clone()).size(TEXT_BODY)]
            .spacing(SPACING_SM)
            .into(),
        nested => column![label, indented(property_tree(nested, key_width))]
            .spacing(SPACING_XS)
            .into(),
    }
}

fn indented<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    container(content)
        .padding(Padding::new(0.0).left(SECTION_INDENT))
        .width(Length::Fill)
        .into()
}
