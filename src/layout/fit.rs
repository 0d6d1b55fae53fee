use crate::foundation::error::{CardError, CardResult};

/// Result of fitting an image into a bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledSize {
    /// Scaled width.
    pub width: f64,
    /// Scaled height.
    pub height: f64,
}

/// Uniformly scale `natural_w x natural_h` to fit inside `max_w x max_h`.
///
/// "Fit inside" semantics: aspect-preserving, never crops, never exceeds the
/// box on either axis, touches it on at least one. Non-positive inputs are a
/// caller contract violation.
pub fn fit_within(natural_w: f64, natural_h: f64, max_w: f64, max_h: f64) -> CardResult<ScaledSize> {
    if natural_w <= 0.0 || natural_h <= 0.0 {
        return Err(CardError::validation("natural image size must be > 0"));
    }
    if max_w <= 0.0 || max_h <= 0.0 {
        return Err(CardError::validation("fit box must be > 0"));
    }

    let scale = (max_w / natural_w).min(max_h / natural_h);
    Ok(ScaledSize {
        width: natural_w * scale,
        height: natural_h * scale,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
