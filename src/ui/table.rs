/// Property table widgets
///
/// Draws a `TableView` with iced. Every control maps to a `Message`; no state
/// is kept here.
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, column, container, pick_list, row, scrollable, text, Column, Row, Space};
use iced::{Alignment, Color, Element, Length, Theme};

use super::model::{BodyCell, BodyRow, HeaderCell, TableView};
use crate::state::data::ColumnKey;
use crate::state::table::SortDirection;
use crate::Message;

const COLUMN_WIDTH: f32 = 170.0;
/// Width of the slot a collapsed column keeps
const COLLAPSED_WIDTH: f32 = 32.0;
const CELL_PADDING: u16 = 8;
/// Opacity of a sort arrow that is not the active sort
const INACTIVE_ALPHA: f32 = 0.4;

/// Tag selector row
pub fn filter_bar(view: &TableView) -> Element<'static, Message> {
    row![
        text("Filter By Aggregation Tag"),
        pick_list(
            view.tag_options.clone(),
            Some(view.selected_tag.clone()),
            Message::TagSelected,
        ),
    ]
    .spacing(24)
    .align_y(Alignment::Center)
    .into()
}

/// Header and body, scrollable in both directions
pub fn table(view: TableView) -> Element<'static, Message> {
    let header = Row::with_children(view.header.into_iter().map(header_cell));
    let body = Column::with_children(view.rows.into_iter().map(body_row));

    scrollable(column![header, body])
        .direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header_cell(cell: HeaderCell) -> Element<'static, Message> {
    // A collapsed column keeps a narrow slot with only its expand toggle
    if cell.collapsed {
        return container(collapse_toggle(cell.key, true))
            .width(Length::Fixed(COLLAPSED_WIDTH))
            .padding(CELL_PADDING)
            .into();
    }

    let sort_controls = column![
        sort_button("▲", cell.key.clone(), SortDirection::Ascending, cell.ascending_active),
        sort_button("▼", cell.key.clone(), SortDirection::Descending, cell.descending_active),
    ];

    let mut content = row![sort_controls, text(cell.label).width(Length::Fill)]
        .spacing(8)
        .align_y(Alignment::Center);

    if cell.collapsible {
        content = content.push(collapse_toggle(cell.key, false));
    }

    container(content)
        .width(Length::Fixed(COLUMN_WIDTH))
        .padding(CELL_PADDING)
        .into()
}

fn sort_button(
    glyph: &'static str,
    key: ColumnKey,
    direction: SortDirection,
    active: bool,
) -> Element<'static, Message> {
    button(text(glyph).size(12))
        .on_press(Message::SortBy(key, direction))
        .padding(0)
        .style(move |theme: &Theme, status| {
            let mut style = button::text(theme, status);
            if !active {
                style.text_color = Color {
                    a: style.text_color.a * INACTIVE_ALPHA,
                    ..style.text_color
                };
            }
            style
        })
        .into()
}

fn collapse_toggle(key: ColumnKey, collapsed: bool) -> Element<'static, Message> {
    let glyph = if collapsed { "»" } else { "«" };

    button(text(glyph))
        .on_press(Message::ToggleColumn(key))
        .padding(0)
        .style(button::text)
        .into()
}

fn body_row(row: BodyRow) -> Element<'static, Message> {
    Row::with_children(row.cells.into_iter().map(body_cell)).into()
}

fn body_cell(cell: BodyCell) -> Element<'static, Message> {
    if cell.hidden {
        return container(Space::new(Length::Fill, Length::Shrink))
            .width(Length::Fixed(COLLAPSED_WIDTH))
            .padding(CELL_PADDING)
            .into();
    }

    container(text(cell.text))
        .width(Length::Fixed(COLUMN_WIDTH))
        .padding(CELL_PADDING)
        .into()
}
