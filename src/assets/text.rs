use crate::{
    foundation::error::{CardError, CardResult},
    layout::text_fit::{LineMetrics, TextMeasurer},
};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Stateful helper for shaping title lines from raw font bytes.
///
/// The engine must have a font registered before lines can be shaped or
/// measured; system font discovery is deliberately off, so the registered
/// bytes are the only face Parley can resolve.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: Option<String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family: None,
        }
    }

    /// Register a font from raw bytes; subsequent shaping uses its primary
    /// family.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> CardResult<()> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CardError::validation("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CardError::validation("registered font family has no name"))?
            .to_string();
        self.family = Some(family_name);
        Ok(())
    }

    /// Primary family name of the registered font, if any.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Shape one line of text at `size_px` using the registered font.
    pub fn layout_line(
        &mut self,
        line: &str,
        size_px: f32,
    ) -> CardResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CardError::validation("font size must be finite and > 0"));
        }
        let family = self
            .family
            .clone()
            .ok_or_else(|| CardError::validation("no font registered for text shaping"))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, line, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<TextBrush> = builder.build(line);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasurer for TextLayoutEngine {
    fn measure(&mut self, line: &str, font_size: f32) -> CardResult<LineMetrics> {
        let layout = self.layout_line(line, font_size)?;
        let ascent = layout
            .lines()
            .next()
            .map(|l| f64::from(l.metrics().ascent))
            .unwrap_or(0.0);
        Ok(LineMetrics {
            right: f64::from(layout.full_width()),
            // Parley positions the pen origin at x = 0 and exposes no
            // negative left bearing.
            left: 0.0,
            ascent,
        })
    }
}
