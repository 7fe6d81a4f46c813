use std::sync::Arc;

use super::domain::{AxisDomain, DomainManager, YDomainMode, default_domain};
use super::drag::{DragController, PointerEvent};
use super::markers::{MarkerId, MarkerSet};
use super::measurement::{Measurement, measure};
use super::transform::{CoordinateTransform, Margin, Viewport};
use crate::config::SlicerConfig;
use crate::data::loader::parse_text;
use crate::data::model::{Axis, ColumnSelection, Dataset};
use crate::error::SlicerError;

/// Fractions of the X domain where the X markers land after a reset.
const X_MARKER_SEED: [f64; 2] = [0.3, 0.7];

// ---------------------------------------------------------------------------
// ChartInstance
// ---------------------------------------------------------------------------

/// One self-contained slicer: dataset, domains, markers, drag state and the
/// latest measurement.
///
/// Every mutating method recomputes the measurement before returning, so
/// [`ChartInstance::measurement`] is always current.
#[derive(Debug, Clone)]
pub struct ChartInstance {
    config: Arc<SlicerConfig>,
    dataset: Dataset,
    columns: ColumnSelection,
    domains: DomainManager,
    markers: MarkerSet,
    drag: DragController,
    viewport: Viewport,
    margin: Margin,
    measurement: Measurement,
}

impl Default for ChartInstance {
    fn default() -> Self {
        Self::new(Arc::new(SlicerConfig::default()))
    }
}

impl ChartInstance {
    pub fn new(config: Arc<SlicerConfig>) -> Self {
        let mut instance = Self {
            dataset: Dataset::default(),
            columns: config.default_columns,
            domains: DomainManager::new(config.default_x_domain, config.default_y_domain),
            markers: MarkerSet::new(config.default_x_markers, config.default_y_markers),
            drag: DragController::default(),
            viewport: config.viewport,
            margin: config.margin,
            measurement: Measurement::default(),
            config,
        };
        instance.recompute();
        instance
    }

    // -- read access ------------------------------------------------------

    pub fn config(&self) -> &SlicerConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn columns(&self) -> ColumnSelection {
        self.columns
    }

    pub fn domain(&self, axis: Axis) -> AxisDomain {
        self.domains.domain(axis)
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Transform for the current viewport, margin and domains.
    pub fn transform(&self) -> CoordinateTransform {
        CoordinateTransform::new(
            self.viewport,
            self.margin,
            self.domains.domain(Axis::X),
            self.domains.domain(Axis::Y),
        )
    }

    /// Finite `[x, y]` pairs of the selected columns, in row order.
    pub fn series(&self) -> Vec<[f64; 2]> {
        self.dataset
            .column(self.columns.x)
            .zip(self.dataset.column(self.columns.y))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| [x, y])
            .collect()
    }

    // -- ingestion --------------------------------------------------------

    /// Parse `text` with this instance's ingest options and adopt the result.
    pub fn ingest_text(&mut self, text: &str) {
        let dataset = parse_text(text, &self.config.ingest);
        self.apply_dataset(dataset);
    }

    /// Replace the dataset wholesale and re-derive default domains and X markers.
    pub fn apply_dataset(&mut self, dataset: Dataset) {
        self.drag.cancel();
        self.dataset = dataset;

        let arity = self.dataset.arity();
        if arity > 0 {
            for axis in Axis::ALL {
                let column = self.columns.get(axis);
                if column >= arity {
                    log::warn!(
                        "{axis} column {column} not present in a {arity}-column dataset, using {}",
                        arity - 1
                    );
                    self.columns.set(axis, arity - 1);
                }
            }
        }

        self.reset_axis(Axis::X);
        match self.config.y_domain_mode {
            YDomainMode::DataDriven => self.reset_axis(Axis::Y),
            YDomainMode::Fixed { min, max } => self.domains.set_domain(Axis::Y, min, max),
        }
        self.recompute();
    }

    // -- edits ------------------------------------------------------------

    /// Point `axis` at another column. With data loaded, that axis' domain
    /// (and for X, the markers) is re-derived from the new column.
    pub fn select_column(&mut self, axis: Axis, column: usize) -> Result<(), SlicerError> {
        let arity = self.dataset.arity();
        if arity > 0 && column >= arity {
            return Err(SlicerError::ColumnOutOfRange {
                axis,
                index: column,
                arity,
            });
        }
        self.columns.set(axis, column);
        if !self.dataset.is_empty() {
            match (axis, self.config.y_domain_mode) {
                (Axis::Y, YDomainMode::Fixed { .. }) => {}
                _ => self.reset_axis(axis),
            }
        }
        self.recompute();
        Ok(())
    }

    /// Store a domain as typed. Markers stay where they are, even outside it.
    pub fn set_domain(&mut self, axis: Axis, min: f64, max: f64) {
        self.domains.set_domain(axis, min, max);
        self.recompute();
    }

    /// Direct numeric or slider entry: written as given, never clamped.
    pub fn set_marker(&mut self, id: MarkerId, value: f64) -> bool {
        let changed = self.markers.set(id, value);
        self.recompute();
        changed
    }

    pub fn set_viewport(&mut self, viewport: Viewport, margin: Margin) {
        self.viewport = viewport;
        self.margin = margin;
    }

    /// Feed one pointer event through the drag state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let transform = self.transform();
        let changed = self.drag.handle(event, &transform, &mut self.markers);
        if changed {
            self.recompute();
        }
        changed
    }

    /// The marker whose line is closest to the pixel position, within the
    /// configured tolerance.
    pub fn marker_at(&self, px: f64, py: f64) -> Option<MarkerId> {
        let transform = self.transform();
        let tolerance = self.config.hit_tolerance_px;
        MarkerId::all()
            .filter_map(|id| {
                let value = self.markers.get(id)?;
                let distance = match id.axis {
                    Axis::X => (transform.to_pixel(value, 0.0)?[0] - px).abs(),
                    Axis::Y => (transform.to_pixel(0.0, value)?[1] - py).abs(),
                };
                (distance <= tolerance).then_some((id, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    // -- internals --------------------------------------------------------

    fn reset_axis(&mut self, axis: Axis) {
        let domain = default_domain(
            &self.dataset,
            self.columns.get(axis),
            self.config.fallback_domain,
        );
        self.domains.set_domain(axis, domain.min, domain.max);
        if axis == Axis::X {
            self.markers
                .set_pair(Axis::X, X_MARKER_SEED.map(|t| domain.lerp(t)));
        }
    }

    fn recompute(&mut self) {
        self.measurement = measure(&self.markers, &self.dataset, self.columns);
    }
}
