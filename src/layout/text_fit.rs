use crate::foundation::{
    core::Point,
    error::{CardError, CardResult},
};

/// Spacing multiplier between consecutive title lines.
pub(crate) const LINE_SPACING: f64 = 1.3;

/// Horizontal and vertical extents of one measured line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    /// Rightmost ink extent from the pen origin.
    pub right: f64,
    /// Leftmost ink extent from the pen origin (negative for overhanging
    /// glyphs).
    pub left: f64,
    /// Ascent above the baseline; used as the line-height proxy.
    pub ascent: f64,
}

/// Text-measurement capability consumed by [`fit_text_block`].
pub trait TextMeasurer {
    /// Measure one line at `font_size`.
    fn measure(&mut self, line: &str, font_size: f32) -> CardResult<LineMetrics>;
}

/// Resolved title layout: a font size and per-line baselines that fit the
/// padded box.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedText {
    /// Final font size (floored to a whole number).
    pub font_size: f32,
    /// Scale applied to the nominal measurements.
    pub scale: f64,
    /// Top-left pen origin of the block.
    pub origin: Point,
    /// Vertical advance between consecutive baselines, excluding spacing.
    pub line_advance: f64,
    /// Absolute baseline y-positions, one per line.
    pub baselines: Vec<f64>,
}

/// Autosize a title block so it fits inside `(box_w - 2*padding,
/// box_h - 2*padding)`.
///
/// Every line is measured at `nominal_size`; the nominal block is then
/// scaled by the smaller of the per-axis factors (the text block keeps its
/// aspect), the font size is floored, and the x-origin compensates for
/// glyphs that overhang left of the pen origin. The realized block is
/// guaranteed to stay inside the padded box for any line set with positive
/// measured extents.
pub fn fit_text_block(
    lines: &[&str],
    box_w: f64,
    box_h: f64,
    padding: f64,
    nominal_size: f32,
    measurer: &mut dyn TextMeasurer,
) -> CardResult<FittedText> {
    if lines.is_empty() {
        return Err(CardError::layout("text block requires at least one line"));
    }
    if box_w <= 0.0 || box_h <= 0.0 {
        return Err(CardError::validation("text box must be > 0"));
    }
    if padding < 0.0 {
        return Err(CardError::validation("text padding must be >= 0"));
    }
    if !nominal_size.is_finite() || nominal_size <= 0.0 {
        return Err(CardError::validation("nominal font size must be > 0"));
    }

    let mut right = f64::MIN;
    let mut left = 0.0f64;
    let mut line_height = f64::MIN;
    for line in lines {
        let m = measurer.measure(line, nominal_size)?;
        right = right.max(m.right);
        left = left.min(m.left);
        line_height = line_height.max(m.ascent);
    }
    if right <= 0.0 || line_height <= 0.0 {
        return Err(CardError::layout("title lines have no measurable extent"));
    }

    let n = lines.len() as f64;
    let block_height = line_height * (n + (n - 1.0) * (LINE_SPACING - 1.0));
    let hscale = (box_w - padding * 2.0) / right;
    let vscale = (box_h - padding * 2.0) / block_height;
    let scale = hscale.min(vscale);

    let font_size = (scale * f64::from(nominal_size)).floor();
    if font_size < 1.0 {
        return Err(CardError::layout("text box too small for a readable title"));
    }

    let line_advance = line_height * scale;
    let origin = Point::new(padding + left * scale, padding);
    let baselines = (0..lines.len())
        .map(|idx| origin.y + line_advance * (1.0 + LINE_SPACING * idx as f64))
        .collect();

    Ok(FittedText {
        font_size: font_size as f32,
        scale,
        origin,
        line_advance,
        baselines,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text_fit.rs"]
mod tests;
