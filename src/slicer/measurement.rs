use super::markers::MarkerSet;
use crate::data::model::{Axis, ColumnSelection, Dataset, Row};

/// Statistics for the current marker window.
///
/// Always rebuilt from scratch by [`measure`]; never patched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurement {
    /// Gap between the two X markers.
    pub x_distance: f64,
    /// Gap between the two Y markers.
    pub y_distance: f64,
    /// Largest Y value inside the X window, `0.0` when the window is empty.
    pub window_max: f64,
    /// Smallest Y value inside the X window, `0.0` when the window is empty.
    pub window_min: f64,
    /// Rows whose X value falls inside the window.
    pub window_len: usize,
}

/// Rows whose `x_column` value lies in `[low, high]` (inclusive).
pub fn window_rows(
    dataset: &Dataset,
    x_column: usize,
    (low, high): (f64, f64),
) -> impl Iterator<Item = &Row> + '_ {
    dataset.rows().iter().filter(move |row| {
        row.get(x_column)
            .is_some_and(|&x| x >= low && x <= high)
    })
}

/// Derive the measurement for a chart. Pure, full pass over the dataset.
///
/// An empty dataset gives the all-zero snapshot.
pub fn measure(markers: &MarkerSet, dataset: &Dataset, columns: ColumnSelection) -> Measurement {
    if dataset.is_empty() {
        return Measurement::default();
    }

    let mut window_len = 0;
    let mut extremes: Option<(f64, f64)> = None;
    for row in window_rows(dataset, columns.x, markers.ordered(Axis::X)) {
        window_len += 1;
        let Some(&y) = row.get(columns.y) else {
            continue;
        };
        if y.is_nan() {
            continue;
        }
        extremes = Some(match extremes {
            None => (y, y),
            Some((lo, hi)) => (lo.min(y), hi.max(y)),
        });
    }
    let (window_min, window_max) = extremes.unwrap_or((0.0, 0.0));

    Measurement {
        x_distance: markers.distance(Axis::X),
        y_distance: markers.distance(Axis::Y),
        window_max,
        window_min,
        window_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(f64, f64)]) -> Dataset {
        Dataset::new(
            rows.iter().map(|&(x, y)| vec![x, y]).collect(),
            vec!["x".into(), "y".into()],
        )
    }

    #[test]
    fn window_is_inclusive() {
        let ds = dataset(&[(0.0, 1.0), (1.0, 5.0), (2.0, 3.0)]);
        let m = measure(
            &MarkerSet::new([1.0, 2.0], [0.0, 0.0]),
            &ds,
            ColumnSelection::default(),
        );
        assert_eq!(m.window_len, 2);
        assert_eq!(m.window_max, 5.0);
        assert_eq!(m.window_min, 3.0);
    }

    #[test]
    fn empty_window_reports_zero() {
        let ds = dataset(&[(0.0, -4.0), (10.0, -2.0)]);
        let m = measure(
            &MarkerSet::new([3.0, 4.0], [1.0, 1.5]),
            &ds,
            ColumnSelection::default(),
        );
        assert_eq!(m.window_len, 0);
        assert_eq!(m.window_max, 0.0);
        assert_eq!(m.window_min, 0.0);
        assert_eq!(m.x_distance, 1.0);
        assert_eq!(m.y_distance, 0.5);
    }

    #[test]
    fn nan_cells_are_skipped() {
        let ds = dataset(&[(1.0, f64::NAN), (f64::NAN, 100.0), (2.0, 7.0)]);
        let m = measure(
            &MarkerSet::new([0.0, 5.0], [0.0, 0.0]),
            &ds,
            ColumnSelection::default(),
        );
        assert_eq!(m.window_len, 2);
        assert_eq!(m.window_max, 7.0);
        assert_eq!(m.window_min, 7.0);
    }

    #[test]
    fn window_of_only_nan_y_is_zero_not_nan() {
        let ds = dataset(&[(1.0, f64::NAN)]);
        let m = measure(
            &MarkerSet::new([0.0, 5.0], [0.0, 0.0]),
            &ds,
            ColumnSelection::default(),
        );
        assert_eq!(m.window_max, 0.0);
        assert_eq!(m.window_min, 0.0);
    }

    #[test]
    fn empty_dataset_is_all_zero() {
        let m = measure(
            &MarkerSet::new([20.0, 60.0], [0.06, 0.12]),
            &Dataset::default(),
            ColumnSelection::default(),
        );
        assert_eq!(m, Measurement::default());
    }

    #[test]
    fn swapped_columns() {
        let ds = dataset(&[(10.0, 1.0), (20.0, 2.0), (30.0, 3.0)]);
        let m = measure(
            &MarkerSet::new([1.5, 3.0], [0.0, 0.0]),
            &ds,
            ColumnSelection { x: 1, y: 0 },
        );
        assert_eq!(m.window_max, 30.0);
        assert_eq!(m.window_min, 20.0);
    }
}
