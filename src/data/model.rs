use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// One of the two chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

// ---------------------------------------------------------------------------
// Row / Dataset
// ---------------------------------------------------------------------------

/// One parsed line: a numeric cell per column, `NaN` where the text did not parse.
pub type Row = Vec<f64>;

/// An immutable table of numeric rows sharing one arity.
///
/// A new upload builds a new `Dataset`; nothing mutates one in place.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Row>,
    labels: Vec<String>,
}

impl Dataset {
    /// Build a dataset, forcing every row to `labels.len()` cells.
    ///
    /// Short rows are padded with `NaN`, long rows truncated.
    pub fn new(mut rows: Vec<Row>, labels: Vec<String>) -> Self {
        let arity = labels.len();
        for row in &mut rows {
            row.resize(arity, f64::NAN);
        }
        Dataset { rows, labels }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column labels, one per column.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, column: usize) -> Option<&str> {
        self.labels.get(column).map(String::as_str)
    }

    /// Number of columns.
    pub fn arity(&self) -> usize {
        self.labels.len()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column in row order; `NaN` for a column the rows do not have.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(column).copied().unwrap_or(f64::NAN))
    }
}

/// Synthetic label for an unnamed column (`index` is 0-based).
pub fn default_label(index: usize) -> String {
    format!("Column {}", index + 1)
}

// ---------------------------------------------------------------------------
// ColumnSelection
// ---------------------------------------------------------------------------

/// Which dataset columns feed the X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub x: usize,
    pub y: usize,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self { x: 0, y: 1 }
    }
}

impl ColumnSelection {
    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, column: usize) {
        match axis {
            Axis::X => self.x = column,
            Axis::Y => self.y = column,
        }
    }
}
