use std::sync::Arc;

use tracing::warn;

use crate::{
    assets::{store::PreparedCardAssets, text::TextLayoutEngine},
    card::model::CardSpec,
    compose::{
        pattern_paint,
        plan::{CardPlan, DrawOp, ImageSlot, ShapedLine, TextBlock, TextShadow},
    },
    foundation::{
        core::{Canvas, Point, Rect, Vec2},
        error::{CardError, CardResult},
    },
    layout::{fit::fit_within, gravity::resolve_gravity, text_fit::fit_text_block},
    pattern::automaton,
};

/// Cells per row of the decorative pattern grid.
pub const PATTERN_GRID_WIDTH: usize = 30;
/// Generations run for the decorative pattern grid.
pub const PATTERN_GENERATIONS: usize = 70;
/// The avatar is fit into `1/AVATAR_FRACTION` of the canvas on each axis.
pub const AVATAR_FRACTION: f64 = 7.0;

const AVATAR_MARGIN_DIVISOR: f64 = 40.0;
const PATTERN_REGION_MARGINS: f64 = 3.0;
const BACKDROP_RADIUS_FACTOR: f64 = 1.2;
const BACKDROP_OPACITY: f32 = 0.4;
const RING_RADIUS_FACTOR: f64 = 1.05;
const TEXT_PADDING_DIVISOR: f64 = 30.0;
const NOMINAL_FONT_SIZE: f32 = 42.0;
const SHADOW_STEP_DIVISOR: f64 = 300.0;
const SHADOW_OPACITY: f32 = 0.4;

/// Compose one card into an ordered [`CardPlan`].
///
/// Strict draw order: background photo (fit + gravity), decorative dot
/// pattern, avatar badge (backdrop disc, ring disc, circularly clipped
/// image), then the title block twice (blurred halo pass, crisp pass).
/// Missing optional inputs skip their steps; a missing background leaves the
/// plan empty. No optional step failure aborts composition of what is
/// present.
#[tracing::instrument(skip(spec, assets))]
pub fn compose_card(spec: &CardSpec, assets: &PreparedCardAssets) -> CardResult<CardPlan> {
    spec.validate()?;
    let canvas = Canvas::square(spec.dimension)?;
    let dim = canvas.dim();
    let mut ops = Vec::new();

    let Some(background) = assets.background() else {
        warn!("no background image prepared, rendering nothing");
        return Ok(CardPlan { canvas, ops });
    };

    let scaled = fit_within(
        f64::from(background.width),
        f64::from(background.height),
        dim,
        dim,
    )?;
    let offset = resolve_gravity(
        dim - scaled.width,
        dim - scaled.height,
        spec.gravity.as_deref(),
    );
    ops.push(DrawOp::Image {
        slot: ImageSlot::Background,
        rect: Rect::new(
            offset.x,
            offset.y,
            offset.x + scaled.width,
            offset.y + scaled.height,
        ),
    });

    if let Some(avatar) = assets.avatar() {
        push_avatar_ops(spec, canvas, avatar.width, avatar.height, &mut ops)?;
    }

    if let Some(lines) = spec.title_lines() {
        match build_title_ops(spec, assets, canvas, &lines) {
            Ok(mut title_ops) => ops.append(&mut title_ops),
            Err(e) => warn!(error = %e, "title could not be laid out, skipping text"),
        }
    }

    Ok(CardPlan { canvas, ops })
}

/// Pattern region + bordered circular avatar badge, anchored bottom-right.
fn push_avatar_ops(
    spec: &CardSpec,
    canvas: Canvas,
    natural_w: u32,
    natural_h: u32,
    ops: &mut Vec<DrawOp>,
) -> CardResult<()> {
    let dim = canvas.dim();
    let scaled = fit_within(
        f64::from(natural_w),
        f64::from(natural_h),
        dim / AVATAR_FRACTION,
        dim / AVATAR_FRACTION,
    )?;

    let margin = dim / AVATAR_MARGIN_DIVISOR;
    let x = dim - scaled.width - margin;
    let y = dim - scaled.height - margin;
    let center = Point::new(
        (x + scaled.width / 2.0).floor(),
        (y + scaled.height / 2.0).floor(),
    );
    let radius = scaled.width.max(scaled.height).floor() / 2.0;

    let region_top = y - PATTERN_REGION_MARGINS * margin;
    let fill_height = dim - region_top;
    let grid = automaton::generate(PATTERN_GRID_WIDTH, PATTERN_GENERATIONS, &spec.pattern_seed)?;
    pattern_paint::paint_grid(&grid, canvas, fill_height, ops)?;

    ops.push(DrawOp::FillCircle {
        center,
        radius: BACKDROP_RADIUS_FACTOR * radius,
        color: spec.background_color.to_rgba8(),
        opacity: BACKDROP_OPACITY,
    });
    ops.push(DrawOp::FillCircle {
        center,
        radius: RING_RADIUS_FACTOR * radius,
        color: spec.foreground_color.to_rgba8(),
        opacity: 1.0,
    });
    ops.push(DrawOp::ImageInCircle {
        slot: ImageSlot::Avatar,
        rect: Rect::new(x, y, x + scaled.width, y + scaled.height),
        center,
        radius,
    });
    Ok(())
}

/// Shape and place the title, returning the halo pass followed by the crisp
/// pass. Any failure here is recoverable at the call site.
fn build_title_ops(
    spec: &CardSpec,
    assets: &PreparedCardAssets,
    canvas: Canvas,
    lines: &[&str],
) -> CardResult<Vec<DrawOp>> {
    let font = assets
        .font()
        .ok_or_else(|| CardError::layout("no font prepared for the title"))?;

    let mut engine = TextLayoutEngine::new();
    engine.register_font(&font.bytes)?;

    let dim = canvas.dim();
    let padding = dim / TEXT_PADDING_DIVISOR;
    let fitted = fit_text_block(lines, dim, dim, padding, NOMINAL_FONT_SIZE, &mut engine)?;

    let mut shaped = Vec::with_capacity(lines.len());
    for (line, &baseline) in lines.iter().zip(&fitted.baselines) {
        shaped.push(ShapedLine {
            layout: Arc::new(engine.layout_line(line, fitted.font_size)?),
            baseline,
        });
    }
    let block = TextBlock {
        origin_x: fitted.origin.x,
        font_size: fitted.font_size,
        lines: shaped,
        font_bytes: font.bytes.clone(),
    };

    let step1 = dim / SHADOW_STEP_DIVISOR;
    let step2 = 2.0 * step1;
    let shadow = TextShadow {
        offsets: [
            Vec2::new(step1, step1),
            Vec2::new(step1, -step1),
            Vec2::new(-step1, step1),
            Vec2::new(-step1, -step1),
            Vec2::new(step2, step2),
            Vec2::new(step2, -step2),
            Vec2::new(-step2, step2),
            Vec2::new(-step2, -step2),
        ],
        blur_radius_px: (dim / SHADOW_STEP_DIVISOR).ceil().max(1.0) as u32,
        sigma: ((dim / SHADOW_STEP_DIVISOR).ceil().max(1.0) / 2.0) as f32,
        opacity: SHADOW_OPACITY,
    };

    Ok(vec![
        DrawOp::Text {
            block: block.clone(),
            color: spec.background_color.to_rgba8(),
            shadow: Some(shadow),
        },
        DrawOp::Text {
            block,
            color: spec.foreground_color.to_rgba8(),
            shadow: None,
        },
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
