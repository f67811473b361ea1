use crate::core::Viewport;

/// Space reserved under the plot for the bottom axis labels.
pub const BOTTOM_LABEL_RESERVE: f64 = 22.0;

/// Geometry shared by every primitive of one draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayout {
    pub width: f64,
    pub bottom_base: f64,
    pub graph_height: f64,
    /// Horizontal distance between consecutive points.
    pub dx: f64,
    /// Distance between horizontal grid rows.
    pub hy: f64,
}

impl GraphLayout {
    /// Computes the layout for `count` visible points.
    ///
    /// The step is widened by `dx / (count - 1)` so the last point lands on
    /// the right edge; a single point keeps the plain step.
    #[must_use]
    pub fn new(viewport: Viewport, count: usize) -> Self {
        let bottom_base = viewport.height - BOTTOM_LABEL_RESERVE;
        let mut dx = viewport.width / count as f64;
        if count > 1 {
            dx += dx / (count - 1) as f64;
        }
        let hy = (bottom_base / 3.0) * 1.5;

        Self {
            width: viewport.width,
            bottom_base,
            graph_height: bottom_base,
            dx,
            hy,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn layout_for_three_points() {
        let layout = GraphLayout::new(Viewport::new(300.0, 150.0), 3);
        assert_relative_eq!(layout.bottom_base, 128.0);
        assert_relative_eq!(layout.graph_height, 128.0);
        assert_relative_eq!(layout.dx, 150.0);
        assert_relative_eq!(layout.hy, 64.0);
    }

    #[test]
    fn single_point_skips_step_inflation() {
        let layout = GraphLayout::new(Viewport::new(300.0, 150.0), 1);
        assert_relative_eq!(layout.dx, 300.0);
    }
}
