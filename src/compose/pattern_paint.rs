use crate::{
    compose::plan::DrawOp,
    foundation::{
        core::{Canvas, Point, Rgba8},
        error::{CardError, CardResult},
    },
    pattern::automaton::Grid,
};

const MAX_ALPHA: f32 = 0.65;
const MIN_ALPHA: f32 = 0.15;
const PCT_THRESHOLD: f64 = 0.15;
const DOT_COLOR: Rgba8 = Rgba8::opaque(100, 150, 180);

/// Emit dot ops for a pattern grid anchored at the canvas's bottom-right.
///
/// Rows step one cell size leftward from the right edge; cells step one cell
/// size downward from `canvas_height - fill_height`. Only live cells inside
/// the wedge `(1 - cell/width) * (row/rows) < 0.15` are drawn, with alpha
/// ramping from 0.65 at the threshold boundary down to 0.15, so the cluster
/// fades out toward the top-left instead of filling the grid.
pub fn paint_grid(
    grid: &Grid,
    canvas: Canvas,
    fill_height: f64,
    ops: &mut Vec<DrawOp>,
) -> CardResult<()> {
    if fill_height <= 0.0 {
        return Err(CardError::validation("pattern fill height must be > 0"));
    }

    let rows = grid.rows();
    let width = grid.width();
    let cell_size = fill_height / width as f64;

    for row_idx in 0..rows {
        for cell_idx in 0..width {
            let ipct = row_idx as f64 / rows as f64;
            let jpct = 1.0 - cell_idx as f64 / width as f64;
            if jpct * ipct >= PCT_THRESHOLD || grid.get(row_idx, cell_idx) == 0 {
                continue;
            }

            let alpha =
                (1.0 - (jpct * ipct) / PCT_THRESHOLD) as f32 * (MAX_ALPHA - MIN_ALPHA) + MIN_ALPHA;
            let center = Point::new(
                f64::from(canvas.width) - row_idx as f64 * cell_size + cell_size / 2.0,
                f64::from(canvas.height) - fill_height
                    + cell_idx as f64 * cell_size
                    + cell_size / 2.0,
            );
            ops.push(DrawOp::FillCircle {
                center,
                radius: cell_size / 2.0,
                color: DOT_COLOR,
                opacity: alpha,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pattern_paint.rs"]
mod tests;
