/// Formats a value for the top labels: `2.5m`, `1.5k`, or a plain integer.
#[must_use]
pub fn compact_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        return format!("{:.1}m", value / 1_000_000.0);
    }
    if value >= 1_000.0 {
        return format!("{:.1}k", value / 1_000.0);
    }

    let rounded = value.round();
    if rounded == 0.0 {
        // Avoid printing `-0` for small negative values.
        return "0".to_owned();
    }
    format!("{rounded:.0}")
}

#[cfg(test)]
mod tests {
    use super::compact_value;

    #[test]
    fn plain_values_drop_decimals() {
        assert_eq!(compact_value(500.0), "500");
        assert_eq!(compact_value(15.4), "15");
        assert_eq!(compact_value(-0.2), "0");
        assert_eq!(compact_value(-1500.0), "-1500");
    }

    #[test]
    fn thousands_and_millions_are_suffixed() {
        assert_eq!(compact_value(1_500.0), "1.5k");
        assert_eq!(compact_value(1_000.0), "1.0k");
        assert_eq!(compact_value(2_500_000.0), "2.5m");
    }
}
