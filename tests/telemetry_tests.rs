use line_graph_rs::telemetry::init_default_tracing;

#[test]
fn default_tracing_installs_at_most_once() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}
