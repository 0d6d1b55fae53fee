use crate::{
    assets::store::PreparedImage,
    compose::plan::{TextBlock, TextShadow},
    foundation::{
        core::{Canvas, Point, Rect, Rgba8},
        error::{CardError, CardResult},
    },
    render::{blur, composite},
    render::surface::{FrameRGBA, Surface},
};

/// CPU raster surface backed by a `vello_cpu` pixmap.
///
/// Each surface op rasterizes through a short-lived render context and is
/// composited over the persistent pixmap, so pixel-level passes (the title
/// halo) interleave with vector drawing in strict plan order.
pub struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuSurface {
    /// Allocate a surface for `canvas`, cleared to `clear_rgba` (straight
    /// alpha) or transparent.
    pub fn new(canvas: Canvas, clear_rgba: Option<[u8; 4]>) -> CardResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CardError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CardError::render("surface height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        if let Some([r, g, b, a]) = clear_rgba {
            let premul = Rgba8 { r, g, b, a }.to_premul(1.0);
            for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
                px.copy_from_slice(&premul);
            }
        }

        Ok(Self {
            width,
            height,
            pixmap,
        })
    }

    /// Read back the rendered pixels (premultiplied RGBA8).
    pub fn into_frame(self) -> FrameRGBA {
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn scene(
        &mut self,
        draw: impl FnOnce(&mut vello_cpu::RenderContext) -> CardResult<()>,
    ) -> CardResult<()> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        draw(&mut ctx)?;
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
        Ok(())
    }
}

impl Surface for CpuSurface {
    fn draw_image(&mut self, image: &PreparedImage, rect: Rect) -> CardResult<()> {
        let paint = image_paint(image)?;
        let (nat_w, nat_h) = (f64::from(image.width), f64::from(image.height));
        self.scene(|ctx| {
            ctx.set_transform(affine_to_cpu(
                kurbo::Affine::translate((rect.x0, rect.y0))
                    * kurbo::Affine::scale_non_uniform(rect.width() / nat_w, rect.height() / nat_h),
            ));
            ctx.set_paint(paint);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, nat_w, nat_h));
            Ok(())
        })
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Rgba8,
        opacity: f32,
    ) -> CardResult<()> {
        let path = circle_path(center, radius);
        self.scene(|ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            if opacity < 1.0 {
                ctx.push_opacity_layer(opacity);
            }
            ctx.fill_path(&path);
            if opacity < 1.0 {
                ctx.pop_layer();
            }
            Ok(())
        })
    }

    fn draw_image_in_circle(
        &mut self,
        image: &PreparedImage,
        rect: Rect,
        center: Point,
        radius: f64,
    ) -> CardResult<()> {
        let paint = image_paint(image)?;
        let (nat_w, nat_h) = (f64::from(image.width), f64::from(image.height));
        let path = circle_path(center, radius);
        self.scene(|ctx| {
            // Filling the circle with the image paint scopes the clip to
            // this one op.
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint_transform(affine_to_cpu(
                kurbo::Affine::translate((rect.x0, rect.y0))
                    * kurbo::Affine::scale_non_uniform(rect.width() / nat_w, rect.height() / nat_h),
            ));
            ctx.set_paint(paint);
            ctx.fill_path(&path);
            Ok(())
        })
    }

    fn fill_text(
        &mut self,
        block: &TextBlock,
        color: Rgba8,
        shadow: Option<&TextShadow>,
    ) -> CardResult<()> {
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(block.font_bytes.as_ref().clone()),
            0,
        );

        let Some(shadow) = shadow else {
            return self.scene(|ctx| draw_text_block(ctx, block, &font, color));
        };

        // Halo pass: rasterize the block offscreen, stamp it at every
        // offset plus unoffset, blur, then composite at reduced opacity.
        let mut text_pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        draw_text_block(&mut ctx, block, &font, color)?;
        ctx.flush();
        ctx.render_to_pixmap(&mut text_pixmap);

        let (w, h) = (u32::from(self.width), u32::from(self.height));
        let text_bytes = text_pixmap.data_as_u8_slice();
        let mut halo = vec![0u8; text_bytes.len()];
        composite::over_in_place(&mut halo, text_bytes, 1.0)?;
        for offset in &shadow.offsets {
            composite::stamp_over(
                &mut halo,
                text_bytes,
                w,
                h,
                offset.x.round() as i32,
                offset.y.round() as i32,
            )?;
        }

        let blurred = blur::blur_rgba8_premul(&halo, w, h, shadow.blur_radius_px, shadow.sigma)?;
        composite::over_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            &blurred,
            shadow.opacity,
        )
    }
}

fn draw_text_block(
    ctx: &mut vello_cpu::RenderContext,
    block: &TextBlock,
    font: &vello_cpu::peniko::FontData,
    color: Rgba8,
) -> CardResult<()> {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));

    for line in &block.lines {
        let Some(first) = line.layout.lines().next() else {
            continue;
        };
        let layout_baseline = f64::from(first.metrics().baseline);
        ctx.set_transform(affine_to_cpu(kurbo::Affine::translate((
            block.origin_x,
            line.baseline - layout_baseline,
        ))));

        for item in first.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    Ok(())
}

fn image_paint(image: &PreparedImage) -> CardResult<vello_cpu::Image> {
    let pixmap = premul_bytes_to_pixmap(image.rgba8_premul.as_slice(), image.width, image.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CardResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CardError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CardError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn circle_path(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    use kurbo::Shape;

    let path = kurbo::Circle::new(center, radius).to_path(0.1);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            kurbo::PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            kurbo::PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            kurbo::PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            kurbo::PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            kurbo::PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}
