//! Particle text mounted over the bio paragraph.

use crate::constants::*;
use crate::content::BIO_LINES;
use crate::dom;
use crate::events;
use crate::frame::{ParticleFrame, ParticleLoop};
use crate::input;
use crate::render::{self, CanvasRasterizer};
use folio_core::{AlphaMask, ParticleField, PointerState, TextBlock, TextStyle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

struct Layout {
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    rasterizer: CanvasRasterizer,
    field: Rc<RefCell<ParticleField>>,
}

impl Layout {
    /// Resize the canvas to the container and replace the particle batch.
    fn rebuild(&mut self) {
        let width = (self.container.client_width() as f64 * CANVAS_OVERSCAN) as u32;
        let height = (self.container.client_height() as f64 * CANVAS_OVERSCAN) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let block = TextBlock::new(&BIO_LINES, text_style(&self.container));
        let mut field = self.field.borrow_mut();
        match field.configure(&mut self.rasterizer, &block, width, height) {
            Ok(n) => log::info!("[particles] {} particles at {}x{}", n, width, height),
            Err(e) => {
                log::error!("[particles] rasterize failed: {:?}", e);
                field.load_mask(&AlphaMask::blank(width, height));
            }
        }
    }
}

fn text_style(container: &web::HtmlElement) -> TextStyle {
    let mut style = TextStyle::default();
    let computed = web::window().and_then(|w| w.get_computed_style(container).ok().flatten());
    if let Some(computed) = computed {
        if let Some(px) = computed
            .get_property_value("font-size")
            .ok()
            .as_deref()
            .and_then(input::parse_px)
        {
            style.font_size_px = px * PARTICLE_FONT_SCALE;
        }
        if let Ok(family) = computed.get_property_value("font-family") {
            if !family.trim().is_empty() {
                style.font_family = family;
            }
        }
    }
    style
}

fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let style = canvas.style();
    for (k, v) in [
        ("position", "absolute"),
        ("top", "-50%"),
        ("left", "-50%"),
        ("width", "200%"),
        ("height", "200%"),
        ("z-index", CANVAS_Z_INDEX),
        ("pointer-events", "auto"),
    ] {
        _ = style.set_property(k, v);
    }

    let positioned = web::window()
        .and_then(|w| w.get_computed_style(container).ok().flatten())
        .and_then(|s| s.get_property_value("position").ok())
        .map(|p| p != "static")
        .unwrap_or(false);
    if !positioned {
        _ = container.style().set_property("position", "relative");
    }

    // The canvas replaces the visible text.
    let children = container.children();
    for i in 0..children.length() {
        if let Some(child) = children.item(i).and_then(|c| c.dyn_into::<web::HtmlElement>().ok()) {
            _ = child.style().set_property("opacity", "0");
        }
    }

    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

async fn fonts_ready(document: &web::Document) {
    match document.fonts().ready() {
        Ok(promise) => {
            let promise: js_sys::Promise = promise;
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[particles] fonts.ready rejected: {:?}", e);
            }
        }
        Err(e) => log::warn!("[particles] fonts.ready unavailable: {:?}", e),
    }
}

/// Mount the particle text. A page without the target element is not an
/// error; the effect is simply skipped.
pub async fn mount(document: web::Document) -> anyhow::Result<()> {
    let Some(container) = dom::html_by_id(&document, PARTICLE_TEXT_ID) else {
        log::warn!("[particles] #{} not found; skipping", PARTICLE_TEXT_ID);
        return Ok(());
    };
    let canvas = create_canvas(&document, &container)?;
    let ctx = render::context_2d(&canvas)?;

    let field = Rc::new(RefCell::new(ParticleField::default()));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let frame_loop = ParticleLoop::new(Rc::new(RefCell::new(ParticleFrame {
        field: field.clone(),
        pointer: pointer.clone(),
        ctx,
        active_since: None,
    })));

    let layout = Rc::new(RefCell::new(Layout {
        container,
        canvas: canvas.clone(),
        rasterizer: CanvasRasterizer::new(document.clone()),
        field: field.clone(),
    }));

    // Metrics of a fallback font would give the wrong mask.
    fonts_ready(&document).await;
    layout.borrow_mut().rebuild();
    frame_loop.wake();

    {
        let layout = layout.clone();
        let frame_loop = frame_loop.clone();
        events::wire_resize(move || {
            layout.borrow_mut().rebuild();
            frame_loop.wake();
        });
    }

    events::wire_particle_pointer(events::ParticlePointerWiring {
        canvas,
        field,
        pointer,
        frame_loop,
    });
    Ok(())
}
