#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use line_graph_rs::ChartError;
use line_graph_rs::api::{LineGraph, LineGraphConfig};
use line_graph_rs::core::{DataPoint, Viewport};
use line_graph_rs::render::{CairoRenderer, Color};

fn quarter() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Jan", 10.0),
        DataPoint::new("Feb", 20.0),
        DataPoint::new("Mar", 15.0),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_paints_every_command() {
    let renderer = CairoRenderer::new(300, 150).expect("renderer");
    let mut graph = LineGraph::new(
        renderer,
        LineGraphConfig::default(),
        Viewport::new(300.0, 150.0),
    )
    .expect("graph init");

    graph.set_data(quarter()).expect("render");
    let stats = graph.renderer().last_stats();

    assert_eq!(stats.lines_drawn, 8);
    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.texts_drawn, 6);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let mut graph = LineGraph::new(
        renderer,
        LineGraphConfig::default(),
        Viewport::new(320.0, 200.0),
    )
    .expect("graph init");
    graph.set_data(quarter()).expect("render");

    let surface = ImageSurface::create(Format::ARgb32, 320, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    graph
        .render_on_cairo_context(&context)
        .expect("render on context");

    assert_eq!(graph.renderer().last_stats().circles_drawn, 3);
}

#[test]
fn clear_color_is_validated() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    renderer
        .set_clear_color(Some(Color::rgb(1.0, 1.0, 1.0)))
        .expect("white");
    assert!(renderer.set_clear_color(Some(Color::rgb(2.0, 0.0, 0.0))).is_err());
}
