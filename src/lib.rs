//! Graph Slicer: load a numeric CSV, draw it as a line chart and slice it
//! with draggable reference markers to get live distance / range readouts.
//!
//! The slicing engine ([`slicer`]) and the ingestion layer ([`data`]) are
//! UI-agnostic; [`app`] and [`ui`] wire them into an eframe window.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod slicer;
pub mod state;
pub mod ui;

pub use config::SlicerConfig;
pub use data::model::{Axis, ColumnSelection, Dataset};
pub use error::SlicerError;
pub use slicer::{ChartInstance, ChartRegistry, InstanceId, Measurement};
