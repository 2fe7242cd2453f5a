//! Column layout for resource tables.

use egui_extras::Column;
use payables_states::{ColumnResizeController, ColumnSpec};

pub const SELECT_WIDTH: f32 = 28.0;
pub const ACTIONS_MIN_WIDTH: f32 = 170.0;
pub const DEFAULT_COLUMN_WIDTH: f32 = 140.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 26.0;
/// Width of the grab area at the right edge of a header cell.
pub const RESIZE_HANDLE_WIDTH: f32 = 6.0;

/// A data column of a resource table.
#[derive(Debug, Clone, Copy)]
pub struct TableColumn {
    pub key: &'static str,
    pub title: &'static str,
    pub initial_width: Option<f32>,
    pub min_width: f32,
}

impl TableColumn {
    pub const fn new(key: &'static str, title: &'static str, initial_width: f32) -> Self {
        Self {
            key,
            title,
            initial_width: Some(initial_width),
            min_width: 60.0,
        }
    }

    /// A column that starts at the layout default width.
    pub const fn auto(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            initial_width: None,
            min_width: 60.0,
        }
    }

    pub const fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn spec(&self) -> ColumnSpec {
        ColumnSpec::new(self.key, self.initial_width, self.min_width)
    }
}

pub fn resize_controller(columns: &[TableColumn]) -> ColumnResizeController {
    ColumnResizeController::new(columns.iter().map(TableColumn::spec).collect())
}

/// Selection checkbox, one exact column per data column, then actions.
pub fn table_columns(columns: &[TableColumn], resize: &ColumnResizeController) -> Vec<Column> {
    let mut layout = Vec::with_capacity(columns.len() + 2);
    layout.push(Column::exact(SELECT_WIDTH));
    layout.extend(
        columns
            .iter()
            .map(|column| Column::exact(resize.width_or(column.key, DEFAULT_COLUMN_WIDTH))),
    );
    layout.push(Column::remainder().at_least(ACTIONS_MIN_WIDTH));
    layout
}
