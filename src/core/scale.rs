use crate::core::DataPoint;

/// Min/max of the values inside one rendered window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Returns `None` for an empty window.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Option<Self> {
        let first = points.first()?.value();
        let (min, max) = points
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), point| {
                (min.min(point.value()), max.max(point.value()))
            });
        Some(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.max == self.min
    }
}

/// Maps `value` to a y coordinate where `bottom_base` is the axis baseline and
/// `0` the top of the plot.
///
/// A flat range divides zero by zero. That result, and any other non-finite
/// one, is replaced by `0` for non-zero values and by `bottom_base` for zero
/// values.
#[must_use]
pub fn resolve_y(value: f64, range: ValueRange, bottom_base: f64, graph_height: f64) -> f64 {
    let y = bottom_base - (value - range.min) / range.span() * graph_height;
    if y.is_finite() {
        y
    } else if value == 0.0 {
        bottom_base
    } else {
        0.0
    }
}

/// Maps a window index to its x coordinate; NaN collapses to `0`.
#[must_use]
pub fn resolve_x(index: usize, dx: f64) -> f64 {
    let x = dx * index as f64;
    if x.is_nan() { 0.0 } else { x }
}
