use kurbo::{BezPath, Cap, Join, PathEl, Point, Shape, Stroke, StrokeOpts};

use crate::foundation::core::Rgba8;
use crate::raster::compositor::LayerKind;
use crate::raster::font;
use crate::raster::postfx::PostFx;

const TOLERANCE: f64 = 0.1;

/// How a primitive is painted. Each draw call carries its own paint; nothing persists between
/// calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Paint {
    /// Solid fill.
    Fill(Rgba8),
    /// Round-capped outline of `width` pixels.
    Stroke { colour: Rgba8, width: f64 },
}

impl Paint {
    pub(crate) fn fill(colour: Rgba8) -> Self {
        Self::Fill(colour)
    }

    pub(crate) fn stroke(colour: Rgba8, width: f64) -> Self {
        Self::Stroke { colour, width }
    }
}

/// Kind of a recorded primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Filled shape.
    Fill,
    /// Stroked outline.
    Stroke,
    /// Bitmap-font text run.
    Text,
    /// Whole-surface pixel pass.
    PostProcess,
}

/// Record of everything one render drew, attributed to layers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawLog {
    primitives: Vec<(LayerKind, PrimitiveKind)>,
    named: Vec<(LayerKind, &'static str)>,
}

impl DrawLog {
    /// Every primitive in draw order.
    pub fn primitives(&self) -> &[(LayerKind, PrimitiveKind)] {
        &self.primitives
    }

    /// Number of primitives drawn by `layer`.
    pub fn count_in(&self, layer: LayerKind) -> usize {
        self.primitives.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Named draw calls (accessories) in draw order.
    pub fn named_calls(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.named.iter().map(|(_, name)| *name)
    }

    /// How many times `name` was drawn.
    pub fn count_named(&self, name: &str) -> usize {
        self.named.iter().filter(|(_, n)| *n == name).count()
    }

    /// Total number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// `true` when nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Drawing target of one render: a `vello_cpu` context plus the draw log.
pub(crate) struct Painter {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    layer: LayerKind,
    log: DrawLog,
    post: Option<PostFx>,
}

impl Painter {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
            layer: LayerKind::Background,
            log: DrawLog::default(),
            post: None,
        }
    }

    pub(crate) fn begin_layer(&mut self, layer: LayerKind) {
        self.layer = layer;
    }

    pub(crate) fn draw(&mut self, shape: &impl Shape, paint: Paint) {
        match paint {
            Paint::Fill(colour) => {
                let path = shape.to_path(TOLERANCE);
                self.fill_cpu(&path, colour);
                self.record(PrimitiveKind::Fill);
            }
            Paint::Stroke { colour, width } => {
                let style = Stroke::new(width.max(0.1))
                    .with_caps(Cap::Round)
                    .with_join(Join::Round);
                let outline = kurbo::stroke(
                    shape.path_elements(TOLERANCE),
                    &style,
                    &StrokeOpts::default(),
                    TOLERANCE,
                );
                self.fill_cpu(&outline, colour);
                self.record(PrimitiveKind::Stroke);
            }
        }
    }

    /// Bitmap-font text with its top-left corner at `origin`.
    pub(crate) fn text(&mut self, text: &str, origin: Point, cell: f64, colour: Rgba8) {
        let path = font::text_path(text, origin, cell);
        self.fill_cpu(&path, colour);
        self.record(PrimitiveKind::Text);
    }

    /// Record a named draw call for the current layer.
    pub(crate) fn named(&mut self, name: &'static str) {
        self.log.named.push((self.layer, name));
    }

    /// Schedule a whole-surface pass to run after rasterization. The last one wins.
    pub(crate) fn post(&mut self, fx: PostFx) {
        self.post = Some(fx);
        self.record(PrimitiveKind::PostProcess);
    }

    /// Rasterize everything drawn so far.
    pub(crate) fn finish(mut self) -> (vello_cpu::Pixmap, DrawLog, Option<PostFx>) {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        (pixmap, self.log, self.post)
    }

    fn fill_cpu(&mut self, path: &BezPath, colour: Rgba8) {
        if colour.a == 0 || path.elements().is_empty() {
            return;
        }
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            colour.r, colour.g, colour.b, colour.a,
        ));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn record(&mut self, kind: PrimitiveKind) {
        self.log.primitives.push((self.layer, kind));
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/painter.rs"]
mod tests;
