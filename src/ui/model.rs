/// View model of the property table
///
/// A plain-data projection of the dataset and table state. The iced view only
/// draws what is in here.
use std::fmt;

use crate::state::data::{ColumnKey, PropertyRecord};
use crate::state::dataset::Dataset;
use crate::state::table::{distinct_tag_values, SortDirection, TableState};

/// Shown for missing or falsy values
pub const MISSING_VALUE: &str = "N/A";

/// Entry of the tag selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOption {
    /// No filter
    All,
    Tag(String),
}

impl TagOption {
    /// The filter string this option stands for
    pub fn filter(&self) -> &str {
        match self {
            TagOption::All => "",
            TagOption::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for TagOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagOption::All => f.write_str("-- Select an Aggregation Tag --"),
            TagOption::Tag(tag) => f.write_str(tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: ColumnKey,
    pub label: String,
    /// Ascending control is the active sort
    pub ascending_active: bool,
    /// Descending control is the active sort
    pub descending_active: bool,
    /// Column offers a collapse/expand toggle
    pub collapsible: bool,
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyCell {
    pub text: String,
    /// Cell keeps its slot but is not shown
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    pub id: String,
    pub cells: Vec<BodyCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<BodyRow>,
    pub tag_options: Vec<TagOption>,
    pub selected_tag: TagOption,
    pub total: usize,
}

impl TableView {
    /// Project the dataset through the current table state
    pub fn project(dataset: &Dataset, state: &TableState) -> Self {
        let columns = dataset.columns();

        let header = columns
            .iter()
            .map(|key| HeaderCell {
                key: key.clone(),
                label: column_label(key),
                ascending_active: state.is_sorted_by(key, SortDirection::Ascending),
                descending_active: state.is_sorted_by(key, SortDirection::Descending),
                collapsible: !key.is_always_visible(),
                collapsed: state.is_collapsed(key),
            })
            .collect();

        let rows = state
            .visible_rows(dataset.records())
            .into_iter()
            .map(|record| BodyRow {
                id: record
                    .identifier()
                    .display_text()
                    .unwrap_or_else(|| MISSING_VALUE.to_string()),
                cells: columns
                    .iter()
                    .map(|key| BodyCell {
                        text: cell_text(record, key),
                        hidden: state.is_collapsed(key),
                    })
                    .collect(),
            })
            .collect();

        let tag_options = std::iter::once(TagOption::All)
            .chain(
                distinct_tag_values(dataset.records())
                    .into_iter()
                    .map(TagOption::Tag),
            )
            .collect();

        let selected_tag = match state.tag_filter() {
            "" => TagOption::All,
            tag => TagOption::Tag(tag.to_string()),
        };

        Self {
            header,
            rows,
            tag_options,
            selected_tag,
            total: dataset.len(),
        }
    }
}

/// Human-readable column label: a space before every interior capital,
/// then each word capitalised. `archipelagoId` becomes `Archipelago Id`.
pub fn column_label(key: &ColumnKey) -> String {
    let mut spaced = String::with_capacity(key.as_str().len() + 4);
    for (i, c) in key.as_str().chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    spaced
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Text of one cell. Picture lists show their first filename; missing or
/// falsy values show `N/A`.
pub fn cell_text(record: &PropertyRecord, key: &ColumnKey) -> String {
    record
        .get(key.as_str())
        .display_text()
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{FieldValue, Picture, IDENTIFIER_FIELD, TAG_FIELD};

    fn dataset() -> Dataset {
        Dataset::from_json_str(
            r#"{"data":{"propertiesPage":{"properties":[
                {"__typename":"Property","archipelagoId":"p-1","aggregationTag":"A","price":3,
                 "pictures":[{"filename":"a.jpg"},{"filename":"b.jpg"}]},
                {"__typename":"Property","archipelagoId":"p-2","aggregationTag":"B","price":null,
                 "pictures":[{"filename":"c.jpg"}]},
                {"__typename":"Property","archipelagoId":"p-3","aggregationTag":"A","price":2,
                 "pictures":[]}
            ]}}}"#,
        )
        .unwrap()
    }

    fn column(view: &TableView, name: &str) -> usize {
        view.header
            .iter()
            .position(|cell| cell.key.as_str() == name)
            .unwrap()
    }

    #[test]
    fn test_labels() {
        assert_eq!(column_label(&ColumnKey::new("archipelagoId")), "Archipelago Id");
        assert_eq!(column_label(&ColumnKey::new("aggregationTag")), "Aggregation Tag");
        assert_eq!(column_label(&ColumnKey::new("price")), "Price");
        assert_eq!(column_label(&ColumnKey::new("URL")), "U R L");
    }

    #[test]
    fn test_missing_field_renders_placeholder() {
        let record = PropertyRecord::new(vec![(
            IDENTIFIER_FIELD.to_string(),
            FieldValue::Text("p-9".to_string()),
        )]);
        assert_eq!(cell_text(&record, &ColumnKey::new("price")), "N/A");
    }

    #[test]
    fn test_pictures_render_first_filename() {
        let record = PropertyRecord::new(vec![(
            "pictures".to_string(),
            FieldValue::Pictures(vec![
                Picture { filename: "a.jpg".to_string() },
                Picture { filename: "b.jpg".to_string() },
            ]),
        )]);
        assert_eq!(cell_text(&record, &ColumnKey::new("pictures")), "a.jpg");
    }

    #[test]
    fn test_projection_of_unsorted_table() {
        let view = TableView::project(&dataset(), &TableState::new());

        assert_eq!(view.total, 3);
        assert_eq!(view.header.len(), 4);
        assert!(view.header.iter().all(|cell| !cell.ascending_active && !cell.descending_active));

        let ids: Vec<&str> = view.rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["p-1", "p-2", "p-3"]);

        let price = column(&view, "price");
        let pictures = column(&view, "pictures");
        assert_eq!(view.rows[1].cells[price].text, "N/A");
        assert_eq!(view.rows[0].cells[pictures].text, "a.jpg");
        assert_eq!(view.rows[2].cells[pictures].text, "N/A");
    }

    #[test]
    fn test_exempt_columns_have_no_toggle() {
        let view = TableView::project(&dataset(), &TableState::new());
        assert!(!view.header[column(&view, IDENTIFIER_FIELD)].collapsible);
        assert!(!view.header[column(&view, TAG_FIELD)].collapsible);
        assert!(view.header[column(&view, "price")].collapsible);
    }

    #[test]
    fn test_active_sort_control() {
        let mut state = TableState::new();
        state.sort_by(ColumnKey::new("price"), SortDirection::Descending);
        let view = TableView::project(&dataset(), &state);

        let price = &view.header[column(&view, "price")];
        assert!(price.descending_active);
        assert!(!price.ascending_active);
        assert!(!view.header[column(&view, IDENTIFIER_FIELD)].descending_active);

        let ids: Vec<&str> = view.rows.iter().map(|row| row.id.as_str()).collect();
        // null sorts last ascending, so first descending
        assert_eq!(ids, vec!["p-2", "p-1", "p-3"]);
    }

    #[test]
    fn test_collapsed_column_keeps_its_cells() {
        let mut state = TableState::new();
        state.toggle_column_visibility(&ColumnKey::new("price"));
        let view = TableView::project(&dataset(), &state);

        let price = column(&view, "price");
        assert!(view.header[price].collapsed);
        for row in &view.rows {
            assert_eq!(row.cells.len(), view.header.len());
            assert!(row.cells[price].hidden);
        }
        assert!(!view.rows[0].cells[column(&view, TAG_FIELD)].hidden);
    }

    #[test]
    fn test_tag_options_and_selection() {
        let mut state = TableState::new();
        let view = TableView::project(&dataset(), &state);
        assert_eq!(
            view.tag_options,
            vec![
                TagOption::All,
                TagOption::Tag("A".to_string()),
                TagOption::Tag("B".to_string())
            ]
        );
        assert_eq!(view.selected_tag, TagOption::All);

        state.set_tag_filter("b");
        let view = TableView::project(&dataset(), &state);
        assert_eq!(view.selected_tag, TagOption::Tag("b".to_string()));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, "p-2");
    }

    #[test]
    fn test_empty_dataset_projects_nothing() {
        let view = TableView::project(&Dataset::default(), &TableState::new());
        assert!(view.header.is_empty());
        assert!(view.rows.is_empty());
        assert_eq!(view.tag_options, vec![TagOption::All]);
    }
}
