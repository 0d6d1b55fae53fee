//! Linkcard is a programmatic social-card image composition and rendering engine.
//!
//! Given a background photo, an optional author avatar, and an optional
//! multi-line title, Linkcard renders one square raster card: the photo is
//! fit and placed by a gravity keyword, a deterministic cellular-automaton
//! dot pattern fades in behind a circular avatar badge, and the title is
//! autosized to fit the padded canvas and drawn with a soft halo.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build a [`CardSpec`] (programmatically or from JSON)
//! 2. **Prepare**: `CardSpec -> PreparedCardAssets` (all IO front-loaded)
//! 3. **Compose**: `CardSpec + assets -> CardPlan` (ordered draw ops)
//! 4. **Execute**: `CardPlan -> Surface` (CPU backend) `-> FrameRGBA`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the same spec, assets, and pattern seed
//!   produce bit-identical pixels on every run and platform.
//! - **No IO in composition or rendering**: external IO is front-loaded in
//!   [`PreparedCardAssets`].
//! - **Premultiplied RGBA8** end-to-end: the CPU surface reads back
//!   premultiplied pixels.
//!
//! Missing optional inputs degrade the card instead of failing it: an
//! undecodable avatar or title simply leaves that layer out, with a
//! `tracing` warning.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod card;
mod compose;
mod foundation;
mod layout;
mod pattern;
mod render;

pub use assets::color::ColorDef;
pub use assets::decode::decode_image;
pub use assets::store::{PreparedCardAssets, PreparedFont, PreparedImage, normalize_rel_path};
pub use assets::text::{TextBrush, TextLayoutEngine};
pub use card::model::CardSpec;
pub use compose::compositor::{
    AVATAR_FRACTION, PATTERN_GENERATIONS, PATTERN_GRID_WIDTH, compose_card,
};
pub use compose::pattern_paint::paint_grid;
pub use compose::plan::{CardPlan, DrawOp, ImageSlot, ShapedLine, TextBlock, TextShadow};
pub use foundation::core::{Affine, BezPath, Canvas, Circle, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{CardError, CardResult};
pub use layout::fit::{ScaledSize, fit_within};
pub use layout::gravity::{Gravity, resolve_gravity};
pub use layout::text_fit::{FittedText, LineMetrics, TextMeasurer, fit_text_block};
pub use pattern::automaton::{Grid, generate};
pub use render::cpu::CpuSurface;
pub use render::pipeline::{render_card, render_card_to_frame};
pub use render::surface::{FrameRGBA, Surface, execute_plan};
