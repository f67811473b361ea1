use tracing::{debug, trace, warn};

use crate::core::{DataPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::{LineGraphConfig, build_line_graph_frame};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Host-facing line graph widget.
///
/// `LineGraph` owns the series, the config, the host viewport and the last
/// painted frame. Every input-changing call re-renders synchronously; nothing
/// is recomputed implicitly.
pub struct LineGraph<R: Renderer> {
    renderer: R,
    config: LineGraphConfig,
    series: Vec<DataPoint>,
    viewport: Viewport,
    last_frame: RenderFrame,
    /// Inputs changed since `last_frame` was painted.
    dirty: bool,
}

impl<R: Renderer> LineGraph<R> {
    pub fn new(renderer: R, config: LineGraphConfig, viewport: Viewport) -> ChartResult<Self> {
        config.validate()?;
        validate_viewport(viewport)?;

        Ok(Self {
            renderer,
            config,
            series: Vec::new(),
            viewport,
            last_frame: RenderFrame::new(viewport),
            dirty: false,
        })
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.series
    }

    #[must_use]
    pub fn config(&self) -> LineGraphConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Frame currently shown by the backend.
    #[must_use]
    pub fn last_frame(&self) -> &RenderFrame {
        &self.last_frame
    }

    /// Whether `last_frame` lags behind the current inputs.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the whole series and renders it.
    pub fn set_data(&mut self, series: Vec<DataPoint>) -> ChartResult<()> {
        self.replace_data(series);
        self.render()
    }

    /// Replaces the whole series without painting; the next render picks it up.
    pub fn replace_data(&mut self, series: Vec<DataPoint>) {
        debug!(
            count = series.len(),
            max_visible = self.config.max_visible_entries,
            "replace line graph data"
        );
        self.series = series;
        self.dirty = true;
    }

    /// Stores a new host size without painting.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        validate_viewport(viewport)?;
        if viewport != self.viewport {
            trace!(
                width = viewport.width,
                height = viewport.height,
                "store line graph viewport"
            );
            self.viewport = viewport;
            self.dirty = true;
        }
        Ok(())
    }

    /// Host hook for a data replacement event.
    pub fn on_data_replaced(&mut self, series: Vec<DataPoint>) -> ChartResult<()> {
        self.set_data(series)
    }

    /// Host hook for a resize/layout event.
    ///
    /// Renders only when there is data to lay out; an empty graph just drops
    /// whatever it painted before.
    pub fn on_viewport_changed(&mut self, viewport: Viewport) -> ChartResult<()> {
        validate_viewport(viewport)?;
        if viewport == self.viewport && !self.dirty {
            trace!("viewport unchanged, keeping last frame");
            return Ok(());
        }

        debug!(
            width = viewport.width,
            height = viewport.height,
            "line graph viewport changed"
        );
        self.viewport = viewport;
        if self.series.is_empty() {
            self.last_frame = RenderFrame::new(viewport);
            self.dirty = false;
            return Ok(());
        }
        self.render()
    }

    /// Validates and replaces the config, then renders.
    pub fn set_config(&mut self, config: LineGraphConfig) -> ChartResult<()> {
        self.replace_config(config)?;
        self.render()
    }

    /// Validates and replaces the config without painting.
    pub fn replace_config(&mut self, config: LineGraphConfig) -> ChartResult<()> {
        config.validate()?;
        debug!(?config, "replace line graph config");
        self.config = config;
        self.dirty = true;
        Ok(())
    }

    /// Builds the frame for the current inputs without painting it.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        build_line_graph_frame(&self.series, &self.config, self.viewport)
    }

    /// Rebuilds the frame and hands it to the backend.
    ///
    /// The last painted frame is only replaced once the backend accepts the
    /// new one.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        if let Err(err) = self.renderer.render(&frame) {
            warn!(error = %err, "renderer rejected line graph frame");
            return Err(err);
        }
        self.commit(frame);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        if let Err(err) = self.renderer.render_on_cairo_context(context, &frame) {
            warn!(error = %err, "cairo context rejected line graph frame");
            return Err(err);
        }
        self.commit(frame);
        Ok(())
    }

    fn commit(&mut self, frame: RenderFrame) {
        trace!(
            commands = frame.len(),
            lines = frame.lines().count(),
            circles = frame.circles().count(),
            texts = frame.texts().count(),
            "line graph frame rendered"
        );
        self.last_frame = frame;
        self.dirty = false;
    }
}

fn validate_viewport(viewport: Viewport) -> ChartResult<()> {
    if viewport.is_valid() {
        Ok(())
    } else {
        Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}
