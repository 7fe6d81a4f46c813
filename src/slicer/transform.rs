use serde::{Deserialize, Serialize};

use super::domain::AxisDomain;
use crate::data::model::Axis;

// ---------------------------------------------------------------------------
// Viewport geometry
// ---------------------------------------------------------------------------

/// Pixel size of the whole chart widget, axes included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

/// Insets between the viewport edge and the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 60.0,
            left: 60.0,
        }
    }
}

// ---------------------------------------------------------------------------
// CoordinateTransform
// ---------------------------------------------------------------------------

/// Maps between viewport pixels (origin top-left, y down) and data space.
///
/// Both directions return `None` instead of dividing by zero when a domain
/// is degenerate or the plotting area has no extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    viewport: Viewport,
    margin: Margin,
    x: AxisDomain,
    y: AxisDomain,
}

impl CoordinateTransform {
    pub fn new(viewport: Viewport, margin: Margin, x: AxisDomain, y: AxisDomain) -> Self {
        Self {
            viewport,
            margin,
            x,
            y,
        }
    }

    pub fn domain(&self, axis: Axis) -> AxisDomain {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn plot_width(&self) -> f64 {
        self.viewport.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.viewport.height - self.margin.top - self.margin.bottom
    }

    /// Pixels per data unit on each axis.
    fn scales(&self) -> Option<(f64, f64)> {
        if self.x.is_degenerate() || self.y.is_degenerate() {
            return None;
        }
        let (w, h) = (self.plot_width(), self.plot_height());
        if !(w > 0.0 && h > 0.0) {
            return None;
        }
        Some((w / self.x.span(), h / self.y.span()))
    }

    pub fn is_defined(&self) -> bool {
        self.scales().is_some()
    }

    /// Pixel position → `[x, y]` in data units.
    pub fn to_data(&self, px: f64, py: f64) -> Option<[f64; 2]> {
        let (x_scale, y_scale) = self.scales()?;
        Some([
            (px - self.margin.left) / x_scale + self.x.min,
            self.y.max - (py - self.margin.top) / y_scale,
        ])
    }

    /// `[x, y]` in data units → pixel position.
    pub fn to_pixel(&self, x: f64, y: f64) -> Option<[f64; 2]> {
        let (x_scale, y_scale) = self.scales()?;
        Some([
            (x - self.x.min) * x_scale + self.margin.left,
            (self.y.max - y) * y_scale + self.margin.top,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(x: AxisDomain, y: AxisDomain) -> CoordinateTransform {
        CoordinateTransform::new(Viewport::default(), Margin::default(), x, y)
    }

    #[test]
    fn plot_corners_map_to_domain_corners() {
        let t = transform(AxisDomain::new(0.0, 100.0), AxisDomain::new(0.0, 0.2));
        let top_left = t.to_data(60.0, 20.0).unwrap();
        assert!((top_left[0] - 0.0).abs() < 1e-12);
        assert!((top_left[1] - 0.2).abs() < 1e-12);
        let bottom_right = t.to_data(800.0 - 30.0, 400.0 - 60.0).unwrap();
        assert!((bottom_right[0] - 100.0).abs() < 1e-9);
        assert!(bottom_right[1].abs() < 1e-12);
    }

    #[test]
    fn round_trip() {
        let t = transform(AxisDomain::new(-3.0, 17.5), AxisDomain::new(1e-3, 4.0));
        for &(px, py) in &[(0.0, 0.0), (60.0, 20.0), (123.4, 321.0), (799.0, 399.0), (-50.0, 900.0)] {
            let d = t.to_data(px, py).unwrap();
            let p = t.to_pixel(d[0], d[1]).unwrap();
            assert!((p[0] - px).abs() < 1e-9, "x {px} -> {}", p[0]);
            assert!((p[1] - py).abs() < 1e-9, "y {py} -> {}", p[1]);
        }
    }

    #[test]
    fn degenerate_domain_fails_closed() {
        let t = transform(AxisDomain::new(5.0, 5.0), AxisDomain::new(0.0, 1.0));
        assert!(!t.is_defined());
        assert_eq!(t.to_data(100.0, 100.0), None);
        assert_eq!(t.to_pixel(5.0, 0.5), None);

        let inverted = transform(AxisDomain::new(0.0, 1.0), AxisDomain::new(1.0, 0.0));
        assert_eq!(inverted.to_data(100.0, 100.0), None);
    }

    #[test]
    fn viewport_smaller_than_margin_fails_closed() {
        let t = CoordinateTransform::new(
            Viewport {
                width: 50.0,
                height: 50.0,
            },
            Margin::default(),
            AxisDomain::new(0.0, 1.0),
            AxisDomain::new(0.0, 1.0),
        );
        assert_eq!(t.to_data(10.0, 10.0), None);
    }
}
