use crate::foundation::{
    error::{CardError, CardResult},
    math::mul_div255_u8,
};

pub(crate) type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied RGBA8 pixels with extra `opacity` on the
/// source.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Composite `src` over `dst` pixel-for-pixel.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> CardResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(CardError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite `src` over `dst` displaced by `(dx, dy)` pixels; source pixels
/// falling outside the buffer are dropped.
pub(crate) fn stamp_over(
    dst: &mut [u8],
    src: &[u8],
    width: u32,
    height: u32,
    dx: i32,
    dy: i32,
) -> CardResult<()> {
    let expected = (width as usize) * (height as usize) * 4;
    if dst.len() != expected || src.len() != expected {
        return Err(CardError::render(
            "stamp_over expects width*height*4 rgba8 buffers",
        ));
    }

    let w = width as i32;
    let h = height as i32;
    for sy in 0..h {
        let ty = sy + dy;
        if ty < 0 || ty >= h {
            continue;
        }
        for sx in 0..w {
            let tx = sx + dx;
            if tx < 0 || tx >= w {
                continue;
            }
            let si = ((sy * w + sx) as usize) * 4;
            let di = ((ty * w + tx) as usize) * 4;
            let out = over(
                [dst[di], dst[di + 1], dst[di + 2], dst[di + 3]],
                [src[si], src[si + 1], src[si + 2], src[si + 3]],
                1.0,
            );
            dst[di..di + 4].copy_from_slice(&out);
        }
    }
    Ok(())
}
