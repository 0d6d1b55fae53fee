use crate::{
    assets::color::ColorDef,
    foundation::error::{CardError, CardResult},
};

/// A complete social-card render request.
///
/// A spec is a pure data model that can be built programmatically or
/// deserialized from JSON. Rendering a spec is performed by the pipeline:
/// [`crate::compose_card`] + [`crate::execute_plan`], or the one-shot
/// [`crate::render_card_to_frame`].
///
/// The canvas is always square with side [`CardSpec::dimension`]. Optional
/// sources that are absent (or fail to decode) skip their draw steps; only a
/// missing background leaves the card empty.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CardSpec {
    /// Side length of the square canvas in pixels.
    pub dimension: u32,
    /// Title text; embedded `\n` characters split lines.
    #[serde(default)]
    pub title: Option<String>,
    /// Store-relative path of the background photo.
    #[serde(default)]
    pub background_source: Option<String>,
    /// Store-relative path of the author avatar image.
    #[serde(default)]
    pub avatar_source: Option<String>,
    /// Store-relative path of the title font (TTF/OTF).
    #[serde(default)]
    pub font_source: Option<String>,
    /// Title and avatar-ring color.
    #[serde(default = "default_foreground")]
    pub foreground_color: ColorDef,
    /// Halo and avatar-backdrop color.
    #[serde(default = "default_background")]
    pub background_color: ColorDef,
    /// Placement keyword for the background photo (e.g. `"north"`,
    /// `"south east"`, `"center"`).
    #[serde(default)]
    pub gravity: Option<String>,
    /// Seed string for the decorative dot pattern.
    #[serde(default = "default_pattern_seed")]
    pub pattern_seed: String,
}

fn default_foreground() -> ColorDef {
    ColorDef::rgba(0.0, 0.0, 0.0, 1.0)
}

fn default_background() -> ColorDef {
    ColorDef::rgba(1.0, 1.0, 1.0, 0.7)
}

fn default_pattern_seed() -> String {
    "linkcard".to_string()
}

impl CardSpec {
    /// Minimal spec with only a dimension set; optional inputs empty.
    pub fn new(dimension: u32) -> Self {
        Self {
            dimension,
            title: None,
            background_source: None,
            avatar_source: None,
            font_source: None,
            foreground_color: default_foreground(),
            background_color: default_background(),
            gravity: None,
            pattern_seed: default_pattern_seed(),
        }
    }

    /// Validate caller-contract invariants.
    pub fn validate(&self) -> CardResult<()> {
        if self.dimension == 0 {
            return Err(CardError::validation("card dimension must be > 0"));
        }
        Ok(())
    }

    /// Title split into lines, or `None` when the title is absent or empty.
    pub fn title_lines(&self) -> Option<Vec<&str>> {
        let title = self.title.as_deref()?;
        if title.is_empty() {
            return None;
        }
        Some(title.split('\n').collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/model.rs"]
mod tests;
