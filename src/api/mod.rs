mod graph_config;
mod label_format;
mod line_graph;
mod render_frame_builder;

pub use graph_config::LineGraphConfig;
pub use label_format::compact_value;
pub use line_graph::LineGraph;
pub use render_frame_builder::{
    GRID_LINE_WIDTH, LABEL_BOX_HEIGHT, MARKER_STROKE_WIDTH, MAX_HORIZONTAL_GRID_LINES,
    TOP_LABEL_OFFSET, build_line_graph_frame,
};
