/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Loading the property document (dataset.rs)
/// - Sort, filter and column visibility of the table (table.rs)

pub mod data;
pub mod dataset;
pub mod table;
