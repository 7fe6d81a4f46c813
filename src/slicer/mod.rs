//! Interactive slicing engine.
//!
//! ```text
//!   Dataset ──► domain (defaults) ──► transform ◄── viewport + margin
//!      │                                 │
//!      │                 pointer events ─┴─► drag ──► markers
//!      │                                                 │
//!      └──────────────────────► measurement ◄────────────┘
//! ```
//!
//! [`ChartInstance`] owns one copy of all of the above; [`ChartRegistry`]
//! holds several side by side.

pub mod domain;
pub mod drag;
pub mod instance;
pub mod markers;
pub mod measurement;
pub mod registry;
pub mod transform;

pub use domain::{AxisDomain, YDomainMode};
pub use drag::{DragState, PointerEvent};
pub use instance::ChartInstance;
pub use markers::{MarkerId, MarkerSet};
pub use measurement::Measurement;
pub use registry::{ChartRegistry, InstanceId};
pub use transform::{CoordinateTransform, Margin, Viewport};
