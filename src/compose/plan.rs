use std::sync::Arc;

use crate::{
    assets::text::TextBrush,
    foundation::core::{Canvas, Point, Rect, Rgba8, Vec2},
};

/// Backend-agnostic render plan for one card: an ordered list of draw
/// operations against a square canvas.
#[derive(Clone, Debug)]
pub struct CardPlan {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Draw operations in strict execution order.
    pub ops: Vec<DrawOp>,
}

/// Which prepared image an op refers to.
///
/// Plans reference images by slot rather than by value so a plan stays a
/// small, inspectable description; slots are resolved against
/// [`crate::PreparedCardAssets`] at execute time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSlot {
    /// The background photo.
    Background,
    /// The author avatar.
    Avatar,
}

/// One draw operation.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Draw an image scaled into `rect`.
    Image {
        /// Image to draw.
        slot: ImageSlot,
        /// Destination rectangle in canvas coordinates.
        rect: Rect,
    },
    /// Fill a circle with a straight-alpha color at the given opacity.
    FillCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Fill color.
        color: Rgba8,
        /// Extra opacity applied on top of the color's alpha.
        opacity: f32,
    },
    /// Draw an image scaled into `rect`, clipped to a circle.
    ImageInCircle {
        /// Image to draw.
        slot: ImageSlot,
        /// Destination rectangle in canvas coordinates.
        rect: Rect,
        /// Clip-circle center.
        center: Point,
        /// Clip-circle radius.
        radius: f64,
    },
    /// Draw a shaped text block, optionally with a blurred shadow halo.
    Text {
        /// Shaped lines and placement.
        block: TextBlock,
        /// Fill color for the glyphs.
        color: Rgba8,
        /// Halo parameters for the shadow pass; `None` for the crisp pass.
        shadow: Option<TextShadow>,
    },
}

/// A shaped, placed title block ready for glyph rasterization.
#[derive(Clone)]
pub struct TextBlock {
    /// Pen x-origin shared by all lines.
    pub origin_x: f64,
    /// Final font size the lines were shaped at.
    pub font_size: f32,
    /// Shaped lines with their baseline positions.
    pub lines: Vec<ShapedLine>,
    /// Font bytes backing the glyph outlines.
    pub font_bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for TextBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBlock")
            .field("origin_x", &self.origin_x)
            .field("font_size", &self.font_size)
            .field("lines", &self.lines.len())
            .field("font_bytes_len", &self.font_bytes.len())
            .finish()
    }
}

/// One shaped line plus the absolute baseline it is drawn on.
#[derive(Clone)]
pub struct ShapedLine {
    /// Parley layout for the line.
    pub layout: Arc<parley::Layout<TextBrush>>,
    /// Absolute baseline y-position in canvas coordinates.
    pub baseline: f64,
}

impl std::fmt::Debug for ShapedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedLine")
            .field("layout_ptr", &Arc::as_ptr(&self.layout))
            .field("baseline", &self.baseline)
            .finish()
    }
}

/// Soft halo drawn behind the title for legibility: the block is stamped at
/// each offset (plus unoffset), gaussian-blurred, and composited at reduced
/// opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct TextShadow {
    /// Stamp offsets relative to the block position.
    pub offsets: [Vec2; 8],
    /// Gaussian blur radius in pixels.
    pub blur_radius_px: u32,
    /// Gaussian sigma.
    pub sigma: f32,
    /// Opacity of the composited halo.
    pub opacity: f32,
}
