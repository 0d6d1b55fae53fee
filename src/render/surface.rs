use crate::{
    assets::store::{PreparedCardAssets, PreparedImage},
    compose::plan::{CardPlan, DrawOp, ImageSlot, TextBlock, TextShadow},
    foundation::{
        core::{Point, Rect, Rgba8},
        error::{CardError, CardResult},
    },
};

/// One rendered card in row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, row-major RGBA8.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

/// Mutable raster target a [`CardPlan`] is replayed against.
///
/// A surface is exclusively borrowed for the duration of one
/// [`execute_plan`] call; renders targeting the same surface are serialized
/// by the borrow.
pub trait Surface {
    /// Draw `image` scaled into `rect`.
    fn draw_image(&mut self, image: &PreparedImage, rect: Rect) -> CardResult<()>;

    /// Fill a circle with `color` at `opacity`.
    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Rgba8,
        opacity: f32,
    ) -> CardResult<()>;

    /// Draw `image` scaled into `rect`, clipped to the given circle.
    fn draw_image_in_circle(
        &mut self,
        image: &PreparedImage,
        rect: Rect,
        center: Point,
        radius: f64,
    ) -> CardResult<()>;

    /// Draw a shaped text block, with a blurred halo when `shadow` is set.
    fn fill_text(
        &mut self,
        block: &TextBlock,
        color: Rgba8,
        shadow: Option<&TextShadow>,
    ) -> CardResult<()>;
}

/// Replay `plan` against `surface` in order, resolving image slots from
/// `assets`.
pub fn execute_plan<S: Surface + ?Sized>(
    surface: &mut S,
    plan: &CardPlan,
    assets: &PreparedCardAssets,
) -> CardResult<()> {
    for op in &plan.ops {
        match op {
            DrawOp::Image { slot, rect } => {
                surface.draw_image(resolve_slot(assets, *slot)?, *rect)?;
            }
            DrawOp::FillCircle {
                center,
                radius,
                color,
                opacity,
            } => {
                surface.fill_circle(*center, *radius, *color, *opacity)?;
            }
            DrawOp::ImageInCircle {
                slot,
                rect,
                center,
                radius,
            } => {
                surface.draw_image_in_circle(resolve_slot(assets, *slot)?, *rect, *center, *radius)?;
            }
            DrawOp::Text {
                block,
                color,
                shadow,
            } => {
                surface.fill_text(block, *color, shadow.as_ref())?;
            }
        }
    }
    Ok(())
}

fn resolve_slot(assets: &PreparedCardAssets, slot: ImageSlot) -> CardResult<&PreparedImage> {
    let image = match slot {
        ImageSlot::Background => assets.background(),
        ImageSlot::Avatar => assets.avatar(),
    };
    image.ok_or_else(|| CardError::render(format!("image slot {slot:?} was not prepared")))
}
