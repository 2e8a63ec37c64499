/// User interface module
///
/// - `model.rs` projects the dataset and table state into plain view data
/// - `table.rs` draws that view data with iced widgets

pub mod model;
pub mod table;
