use thiserror::Error;

use crate::data::model::Axis;
use crate::slicer::InstanceId;

/// Caller-side mistakes surfaced by the slicing engine.
///
/// Data problems (bad cells, empty columns, degenerate domains) are never
/// errors; they resolve to fallbacks inside the engine.
#[derive(Debug, Error)]
pub enum SlicerError {
    #[error("column {index} is out of range for the {axis} axis (dataset has {arity} columns)")]
    ColumnOutOfRange {
        axis: Axis,
        index: usize,
        arity: usize,
    },

    #[error("no chart instance with id {0}")]
    UnknownInstance(InstanceId),

    #[error("delimiter {0:?} is not a single-byte ASCII character")]
    InvalidDelimiter(char),
}
