use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use tracing::warn;

use crate::{
    assets::decode,
    card::model::CardSpec,
    foundation::error::{CardError, CardResult},
};

/// Prepared raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Raw font bytes used for title shaping and glyph rasterization.
#[derive(Clone, Debug)]
pub struct PreparedFont {
    /// Original font file bytes (TTF/OTF).
    pub bytes: Arc<Vec<u8>>,
}

/// Immutable store of the decoded inputs for one card render.
///
/// This front-loads IO/decoding so the compose and render stages stay
/// deterministic and IO-free. A source that fails to read or decode leaves
/// its slot empty with a warning; the compositor then skips the dependent
/// draw steps.
#[derive(Clone, Debug, Default)]
pub struct PreparedCardAssets {
    background: Option<PreparedImage>,
    avatar: Option<PreparedImage>,
    font: Option<PreparedFont>,
}

impl PreparedCardAssets {
    /// Prepare all sources referenced by `spec` using filesystem root `root`.
    pub fn prepare(spec: &CardSpec, root: impl Into<PathBuf>) -> CardResult<Self> {
        let root = root.into();

        let background = spec
            .background_source
            .as_deref()
            .and_then(|src| load_image_slot(&root, src, "background"));
        let avatar = spec
            .avatar_source
            .as_deref()
            .and_then(|src| load_image_slot(&root, src, "avatar"));
        let font = spec.font_source.as_deref().and_then(|src| {
            match read_rel_bytes(&root, src) {
                Ok(bytes) => Some(PreparedFont {
                    bytes: Arc::new(bytes),
                }),
                Err(e) => {
                    warn!(source = src, error = %e, "font source unreadable, title will be skipped");
                    None
                }
            }
        });

        Ok(Self {
            background,
            avatar,
            font,
        })
    }

    /// Build a store from already-decoded parts (in-memory pipelines, tests).
    pub fn from_parts(
        background: Option<PreparedImage>,
        avatar: Option<PreparedImage>,
        font: Option<PreparedFont>,
    ) -> Self {
        Self {
            background,
            avatar,
            font,
        }
    }

    /// Decoded background image, if the source was present and decodable.
    pub fn background(&self) -> Option<&PreparedImage> {
        self.background.as_ref()
    }

    /// Decoded avatar image, if the source was present and decodable.
    pub fn avatar(&self) -> Option<&PreparedImage> {
        self.avatar.as_ref()
    }

    /// Font bytes, if the source was present and readable.
    pub fn font(&self) -> Option<&PreparedFont> {
        self.font.as_ref()
    }
}

fn load_image_slot(root: &Path, source: &str, slot: &str) -> Option<PreparedImage> {
    let bytes = match read_rel_bytes(root, source) {
        Ok(b) => b,
        Err(e) => {
            warn!(source, slot, error = %e, "image source unreadable, slot left empty");
            return None;
        }
    };
    match decode::decode_image(&bytes) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!(source, slot, error = %e, "image decode failed, slot left empty");
            None
        }
    }
}

fn read_rel_bytes(root: &Path, source: &str) -> CardResult<Vec<u8>> {
    let norm = normalize_rel_path(source)?;
    let path = root.join(Path::new(&norm));
    std::fs::read(&path)
        .with_context(|| format!("read asset bytes from '{}'", path.display()))
        .map_err(CardError::from)
}

/// Normalize and validate store-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and
/// rejects absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> CardResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CardError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(CardError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CardError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CardError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
