use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{LineGraph, LineGraphConfig};
use crate::core::{DataPoint, Viewport};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

/// Embeds a `LineGraph` into a GTK4 `DrawingArea`.
///
/// Input changes only queue a redraw. The draw callback stores the allocated
/// size and paints once, straight onto the widget's cairo context.
pub struct GtkLineGraph {
    area: gtk::DrawingArea,
    graph: Rc<RefCell<LineGraph<CairoRenderer>>>,
}

impl GtkLineGraph {
    pub fn new(config: LineGraphConfig) -> ChartResult<Self> {
        // The widget never paints offscreen; it draws on the context GTK hands
        // to the draw callback.
        let renderer = CairoRenderer::new(1, 1)?;
        let graph = LineGraph::new(renderer, config, Viewport::default())?;
        let graph = Rc::new(RefCell::new(graph));

        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);

        let draw_graph = Rc::clone(&graph);
        area.set_draw_func(move |_area, context, width, height| {
            let mut graph = draw_graph.borrow_mut();
            let viewport = Viewport::new(f64::from(width), f64::from(height));
            if let Err(err) = graph.set_viewport(viewport) {
                warn!(error = %err, "line graph resize failed");
                return;
            }
            if let Err(err) = graph.render_on_cairo_context(context) {
                warn!(error = %err, "line graph draw failed");
            }
        });

        Ok(Self { area, graph })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Replaces the series and schedules a redraw.
    pub fn set_data(&self, series: Vec<DataPoint>) -> ChartResult<()> {
        self.graph.borrow_mut().replace_data(series);
        self.area.queue_draw();
        Ok(())
    }

    /// Replaces the config and schedules a redraw.
    pub fn set_config(&self, config: LineGraphConfig) -> ChartResult<()> {
        self.graph.borrow_mut().replace_config(config)?;
        self.area.queue_draw();
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> LineGraphConfig {
        self.graph.borrow().config()
    }
}
