/// Table state controller
///
/// Holds the sort, filter and column visibility state of the property table
/// and derives the visible rows from it. The derived sequences are never
/// cached: `visible_rows` recomputes filter and sort from its inputs.
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::data::{ColumnKey, PropertyRecord};

/// Sort direction of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// UI state of the table: sort field and direction, tag filter and
/// collapsed columns. Any combination is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    sort_field: Option<ColumnKey>,
    sort_direction: SortDirection,
    tag_filter: String,
    collapsed: HashMap<ColumnKey, bool>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tag filter. An empty string shows every record.
    pub fn set_tag_filter(&mut self, tag: impl Into<String>) {
        self.tag_filter = tag.into();
        debug!("Tag filter set to {:?}", self.tag_filter);
    }

    /// Sort by `field` in `direction`
    pub fn sort_by(&mut self, field: ColumnKey, direction: SortDirection) {
        debug!("Sorting by {} ({})", field, direction);
        self.sort_field = Some(field);
        self.sort_direction = direction;
    }

    /// Flip the collapsed flag of a column. The identifier and tag columns
    /// are left untouched.
    pub fn toggle_column_visibility(&mut self, key: &ColumnKey) {
        if key.is_always_visible() {
            debug!("Ignoring collapse toggle on {}", key);
            return;
        }

        let collapsed = self.collapsed.entry(key.clone()).or_insert(false);
        *collapsed = !*collapsed;
        debug!("Column {} collapsed: {}", key, collapsed);
    }

    pub fn is_collapsed(&self, key: &ColumnKey) -> bool {
        !key.is_always_visible() && self.collapsed.get(key).copied().unwrap_or(false)
    }

    pub fn sort_field(&self) -> Option<&ColumnKey> {
        self.sort_field.as_ref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn tag_filter(&self) -> &str {
        &self.tag_filter
    }

    /// Whether `field` is sorted in `direction` right now
    pub fn is_sorted_by(&self, field: &ColumnKey, direction: SortDirection) -> bool {
        self.sort_field.as_ref() == Some(field) && self.sort_direction == direction
    }

    /// Rows to display: records filtered by tag, then sorted
    pub fn visible_rows<'a>(&self, records: &'a [PropertyRecord]) -> Vec<&'a PropertyRecord> {
        let mut rows = apply_filter(records, &self.tag_filter);
        if let Some(field) = &self.sort_field {
            sort_records(&mut rows, field, self.sort_direction);
        }
        rows
    }
}

/// Records whose tag equals `tag`, ignoring case. An empty tag keeps all
/// records. Input order is preserved.
pub fn apply_filter<'a>(records: &'a [PropertyRecord], tag: &str) -> Vec<&'a PropertyRecord> {
    if tag.is_empty() {
        return records.iter().collect();
    }

    let wanted = tag.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .tag()
                .is_some_and(|value| value.to_lowercase() == wanted)
        })
        .collect()
}

/// Stable sort of `rows` by the value of `field`
pub fn sort_records(rows: &mut [&PropertyRecord], field: &ColumnKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare_rows(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Unique tag values in first-seen order
pub fn distinct_tag_values(records: &[PropertyRecord]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in records.iter().filter_map(PropertyRecord::tag) {
        if !tags.iter().any(|seen| seen == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Compare two records by the value of `field`
pub fn compare_rows(a: &PropertyRecord, b: &PropertyRecord, field: &ColumnKey) -> Ordering {
    a.get(field.as_str()).compare(b.get(field.as_str()))
}
