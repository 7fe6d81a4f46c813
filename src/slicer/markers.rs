use crate::data::model::Axis;

/// Markers per axis. Every window is bounded by a pair.
pub const MARKERS_PER_AXIS: usize = 2;

/// Identifies one reference line: its axis and its slot in that axis' pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId {
    pub axis: Axis,
    pub index: usize,
}

impl MarkerId {
    pub const fn new(axis: Axis, index: usize) -> Self {
        Self { axis, index }
    }

    /// All four markers, X pair first.
    pub fn all() -> impl Iterator<Item = MarkerId> {
        Axis::ALL
            .into_iter()
            .flat_map(|axis| (0..MARKERS_PER_AXIS).map(move |i| MarkerId::new(axis, i)))
    }
}

/// Two scalar positions per axis.
///
/// Slots are not ordered: after a drag slot 1 may sit below slot 0. Readers
/// that need a range use [`MarkerSet::ordered`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSet {
    x: [f64; MARKERS_PER_AXIS],
    y: [f64; MARKERS_PER_AXIS],
}

impl MarkerSet {
    pub fn new(x: [f64; MARKERS_PER_AXIS], y: [f64; MARKERS_PER_AXIS]) -> Self {
        Self { x, y }
    }

    pub fn pair(&self, axis: Axis) -> [f64; MARKERS_PER_AXIS] {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn pair_mut(&mut self, axis: Axis) -> &mut [f64; MARKERS_PER_AXIS] {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn get(&self, id: MarkerId) -> Option<f64> {
        self.pair(id.axis).get(id.index).copied()
    }

    /// Write one marker as given (no clamping). Returns `false` for an index
    /// outside the pair.
    pub fn set(&mut self, id: MarkerId, value: f64) -> bool {
        match self.pair_mut(id.axis).get_mut(id.index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn set_pair(&mut self, axis: Axis, values: [f64; MARKERS_PER_AXIS]) {
        *self.pair_mut(axis) = values;
    }

    /// `(low, high)` regardless of slot order.
    pub fn ordered(&self, axis: Axis) -> (f64, f64) {
        let [a, b] = self.pair(axis);
        (a.min(b), a.max(b))
    }

    /// Absolute gap between the two markers of `axis`.
    pub fn distance(&self, axis: Axis) -> f64 {
        let [a, b] = self.pair(axis);
        (b - a).abs()
    }
}
