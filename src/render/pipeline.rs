use crate::{
    assets::store::PreparedCardAssets,
    card::model::CardSpec,
    compose::compositor::compose_card,
    foundation::error::CardResult,
    render::cpu::CpuSurface,
    render::surface::{FrameRGBA, Surface, execute_plan},
};

/// Compose + execute one card against a caller-provided surface.
///
/// This is the primary "one-shot" API for producing a card on an existing
/// surface:
///
/// 1. [`compose_card`]
/// 2. [`execute_plan`]
///
/// The surface is exclusively borrowed for the whole render; callers wanting
/// several cards on one surface are serialized by that borrow.
pub fn render_card<S: Surface + ?Sized>(
    spec: &CardSpec,
    assets: &PreparedCardAssets,
    surface: &mut S,
) -> CardResult<()> {
    let plan = compose_card(spec, assets)?;
    execute_plan(surface, &plan, assets)
}

/// Render one card on a fresh CPU surface and read back the pixels.
///
/// `clear_rgba` is the straight-alpha clear color; `None` clears to
/// transparent. Returns **premultiplied** RGBA8.
pub fn render_card_to_frame(
    spec: &CardSpec,
    assets: &PreparedCardAssets,
    clear_rgba: Option<[u8; 4]>,
) -> CardResult<FrameRGBA> {
    let plan = compose_card(spec, assets)?;
    let mut surface = CpuSurface::new(plan.canvas, clear_rgba)?;
    execute_plan(&mut surface, &plan, assets)?;
    Ok(surface.into_frame())
}
