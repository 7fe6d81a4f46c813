use serde::{Deserialize, Serialize};

use crate::data::model::{Axis, Dataset};

// ---------------------------------------------------------------------------
// AxisDomain
// ---------------------------------------------------------------------------

/// Visible numeric range of one axis.
///
/// `min <= max` is expected but not enforced: manual edits may store any
/// pair. Consumers check [`AxisDomain::is_degenerate`] before dividing by the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the range cannot be mapped onto pixels: empty, inverted or non-finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.min.is_finite() && self.max.is_finite() && self.max > self.min)
    }

    /// Clamp `value` into `[min, max]`.
    ///
    /// Unlike `f64::clamp` this does not panic on an inverted range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Point at fraction `t` of the range (`0.0` → min, `1.0` → max).
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + self.span() * t
    }

    /// Tight range over the finite values, or `None` if there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| match acc {
                None => Some(Self::new(v, v)),
                Some(d) => Some(Self::new(d.min.min(v), d.max.max(v))),
            })
    }
}

/// Data-driven default for one column, `fallback` when it holds no finite value.
pub fn default_domain(dataset: &Dataset, column: usize, fallback: AxisDomain) -> AxisDomain {
    AxisDomain::from_values(dataset.column(column)).unwrap_or(fallback)
}

// ---------------------------------------------------------------------------
// YDomainMode
// ---------------------------------------------------------------------------

/// How the Y range is chosen when data arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum YDomainMode {
    /// Min/max of the selected Y column.
    DataDriven,
    /// Always this range, regardless of data.
    Fixed { min: f64, max: f64 },
}

// ---------------------------------------------------------------------------
// DomainManager
// ---------------------------------------------------------------------------

/// The X and Y domains of one chart, independently settable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainManager {
    x: AxisDomain,
    y: AxisDomain,
}

impl DomainManager {
    pub fn new(x: AxisDomain, y: AxisDomain) -> Self {
        Self { x, y }
    }

    pub fn domain(&self, axis: Axis) -> AxisDomain {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Store a new range as given. Markers are not touched.
    pub fn set_domain(&mut self, axis: Axis, min: f64, max: f64) {
        let domain = AxisDomain::new(min, max);
        match axis {
            Axis::X => self.x = domain,
            Axis::Y => self.y = domain,
        }
    }
}
