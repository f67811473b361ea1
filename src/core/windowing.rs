use crate::core::DataPoint;

/// Returns the most recent `min(max_visible_entries, len)` points, preserving order.
#[must_use]
pub fn visible_window(points: &[DataPoint], max_visible_entries: usize) -> &[DataPoint] {
    let count = max_visible_entries.min(points.len());
    &points[points.len() - count..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(len: usize) -> Vec<DataPoint> {
        (0..len)
            .map(|i| DataPoint::new(format!("p{i}"), i as f64))
            .collect()
    }

    #[test]
    fn keeps_whole_series_when_shorter_than_cap() {
        let points = series(4);
        assert_eq!(visible_window(&points, 10), points.as_slice());
    }

    #[test]
    fn keeps_latest_entries_when_longer_than_cap() {
        let points = series(12);
        let window = visible_window(&points, 10);
        assert_eq!(window.len(), 10);
        assert_eq!(window[0].label(), "p2");
        assert_eq!(window[9].label(), "p11");
    }

    #[test]
    fn zero_cap_yields_empty_window() {
        let points = series(3);
        assert!(visible_window(&points, 0).is_empty());
    }
}
