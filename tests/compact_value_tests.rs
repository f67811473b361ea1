use line_graph_rs::compact_value;

#[test]
fn compacts_documented_examples() {
    assert_eq!(compact_value(500.0), "500");
    assert_eq!(compact_value(1_500.0), "1.5k");
    assert_eq!(compact_value(2_500_000.0), "2.5m");
}

#[test]
fn rounds_at_suffix_precision() {
    assert_eq!(compact_value(999.4), "999");
    assert_eq!(compact_value(12_345.0), "12.3k");
    assert_eq!(compact_value(999_999.0), "1000.0k");
    assert_eq!(compact_value(1_000_000.0), "1.0m");
}
