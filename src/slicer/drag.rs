use super::markers::{MarkerId, MarkerSet};
use super::transform::CoordinateTransform;
use crate::data::model::Axis;

/// Pointer input from the rendering layer, positions in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed on a marker.
    Down(MarkerId),
    Move { x: f64, y: f64 },
    Up,
    /// Pointer left the chart viewport.
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(MarkerId),
}

/// Turns pointer events into clamped marker writes.
///
/// At most one marker is dragged at a time per chart.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Drop any drag in progress.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Advance the state machine. Returns `true` when `markers` changed.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        transform: &CoordinateTransform,
        markers: &mut MarkerSet,
    ) -> bool {
        match (self.state, event) {
            (DragState::Idle, PointerEvent::Down(id)) => {
                if markers.get(id).is_none() {
                    return false;
                }
                log::debug!("drag start on {} marker {}", id.axis, id.index);
                self.state = DragState::Dragging(id);
                false
            }
            (DragState::Dragging(id), PointerEvent::Move { x, y }) => {
                // Degenerate domain: the pointer has no data position.
                let Some(point) = transform.to_data(x, y) else {
                    return false;
                };
                let raw = match id.axis {
                    Axis::X => point[0],
                    Axis::Y => point[1],
                };
                let value = transform.domain(id.axis).clamp(raw);
                markers.set(id, value)
            }
            (DragState::Dragging(id), PointerEvent::Up | PointerEvent::Leave) => {
                log::debug!("drag end on {} marker {}", id.axis, id.index);
                self.state = DragState::Idle;
                false
            }
            // Second press while dragging, or moves with nothing held.
            _ => false,
        }
    }
}
