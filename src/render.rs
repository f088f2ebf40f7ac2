use folio_core::{AlphaMask, Particle, TextBlock, TextRasterizer};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draws text on an off-screen 2D canvas and reads back its alpha channel.
pub struct CanvasRasterizer {
    document: web::Document,
}

impl CanvasRasterizer {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl TextRasterizer for CanvasRasterizer {
    type Error = anyhow::Error;

    fn rasterize(
        &mut self,
        block: &TextBlock,
        width: u32,
        height: u32,
    ) -> anyhow::Result<AlphaMask> {
        let canvas: web::HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = context_2d(&canvas)?;

        ctx.set_fill_style_str("black");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_font(&block.style.css_font());

        let anchors = block.line_anchors(width as f32, height as f32);
        for (line, anchor) in block.lines.iter().zip(anchors) {
            ctx.fill_text(line, anchor.x as f64, anchor.y as f64)
                .map_err(|e| anyhow::anyhow!("fillText: {:?}", e))?;
        }

        let image = ctx
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .map_err(|e| anyhow::anyhow!("getImageData: {:?}", e))?;
        Ok(AlphaMask::from_rgba(width, height, &image.data())?)
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
fn css_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Clear the canvas and draw every particle as a filled square.
pub fn paint(ctx: &web::CanvasRenderingContext2d, width: u32, height: u32, particles: &[Particle]) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    let mut current: Option<[u8; 3]> = None;
    for p in particles {
        if current != Some(p.color) {
            ctx.set_fill_style_str(&css_color(p.color));
            current = Some(p.color);
        }
        ctx.fill_rect(
            p.position.x.floor() as f64,
            p.position.y.floor() as f64,
            p.size as f64,
            p.size as f64,
        );
    }
}
