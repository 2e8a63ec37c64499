use std::fs::File;

use iced::widget::{column, container, text};
use iced::{Element, Length, Task, Theme};
use log::{error, info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

mod error;
mod settings;
mod state;
mod ui;

use settings::{Settings, ThemeChoice};
use state::data::ColumnKey;
use state::dataset::Dataset;
use state::table::{SortDirection, TableState};
use ui::model::{TableView, TagOption};

/// Main application state
struct PropertyTable {
    /// The records shown in the table, loaded once at startup
    dataset: Dataset,
    /// Sort, filter and collapsed columns
    table: TableState,
    settings: Settings,
    /// Set when the configured data file could not be loaded
    load_error: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked a sort arrow in a column header
    SortBy(ColumnKey, SortDirection),
    /// User clicked a column's collapse/expand toggle
    ToggleColumn(ColumnKey),
    /// User picked an entry in the tag selector
    TagSelected(TagOption),
}

impl PropertyTable {
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let loaded = match &settings.data_path {
            Some(path) => Dataset::load(path),
            None => Dataset::bundled(),
        };

        let (dataset, load_error) = match loaded {
            Ok(dataset) => (dataset, None),
            Err(e) => {
                error!("Could not load properties: {}", e);
                (Dataset::default(), Some(e.to_string()))
            }
        };

        info!(
            "Property table initialized with {} properties and {} columns",
            dataset.len(),
            dataset.columns().len()
        );

        (
            PropertyTable {
                dataset,
                table: TableState::new(),
                settings,
                load_error,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SortBy(field, direction) => self.table.sort_by(field, direction),
            Message::ToggleColumn(key) => self.table.toggle_column_visibility(&key),
            Message::TagSelected(option) => self.table.set_tag_filter(option.filter()),
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let view = TableView::project(&self.dataset, &self.table);

        let status = match &self.load_error {
            Some(e) => format!("Could not load properties: {}", e),
            None => format!("Showing {} of {} properties", view.rows.len(), view.total),
        };

        let content = column![
            text("Sample App").size(32),
            ui::table::filter_bar(&view),
            text(status).size(14),
            ui::table::table(view),
        ]
        .spacing(16)
        .padding(24);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

fn main() -> iced::Result {
    let (settings, settings_error) = Settings::load();
    init_logging(settings.log_level());

    if let Some(e) = settings_error {
        warn!("Ignoring settings file: {}", e);
    }

    iced::application("Property Table", PropertyTable::update, PropertyTable::view)
        .theme(PropertyTable::theme)
        .centered()
        .run_with(move || PropertyTable::new(settings))
}

/// Log to <cache dir>/property-table/property-table.log, or to the terminal
/// when the file cannot be created.
fn init_logging(level: LevelFilter) {
    let log_file = settings::log_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        File::create(dir.join("property-table.log")).ok()
    });

    let result = match log_file {
        Some(file) => WriteLogger::init(level, Config::default(), file),
        None => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
