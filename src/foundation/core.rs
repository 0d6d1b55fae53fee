use crate::foundation::error::{CardError, CardResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};

/// Square output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a square canvas with side length `dimension`.
    pub fn square(dimension: u32) -> CardResult<Self> {
        if dimension == 0 {
            return Err(CardError::validation("canvas dimension must be > 0"));
        }
        Ok(Self {
            width: dimension,
            height: dimension,
        })
    }

    /// Side length of a square canvas as `f64`.
    pub fn dim(self) -> f64 {
        f64::from(self.width)
    }
}

/// Straight-alpha RGBA8 color (r,g,b NOT multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from r/g/b channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiplied RGBA8 bytes, with `opacity` folded into alpha.
    pub fn to_premul(self, opacity: f32) -> [u8; 4] {
        use crate::foundation::math::mul_div255_u8;

        let op = ((opacity.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16;
        let a = mul_div255_u8(u16::from(self.a), op);
        let af = u16::from(a);
        [
            mul_div255_u8(u16::from(self.r), af),
            mul_div255_u8(u16::from(self.g), af),
            mul_div255_u8(u16::from(self.b), af),
            a,
        ]
    }
}
