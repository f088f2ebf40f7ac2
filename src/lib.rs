#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::frame::{PageFrame, ParallaxTargets};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod content;
mod dom;
mod events;
mod flip;
mod frame;
mod input;
mod overlay;
mod render;
mod sphere;
mod text_field;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn parallax_targets(document: &web::Document) -> ParallaxTargets {
    ParallaxTargets {
        cursor: dom::html_by_selector(document, CURSOR_SELECTOR),
        hero: dom::html_all(document, HERO_PARALLAX_SELECTOR),
        skills_text: dom::html_by_id(document, SKILLS_TEXT_ID),
        sphere_wrapper: dom::html_by_id(document, SPHERE_WRAPPER_ID),
        glitch_text: dom::html_by_selector(document, GLITCH_TEXT_SELECTOR),
        contact: dom::html_all(document, CONTACT_PARALLAX_SELECTOR),
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Cursor + parallax
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_mouse_tracking(&document, mouse.clone());
    frame::start_page_loop(Rc::new(RefCell::new(PageFrame {
        document: document.clone(),
        mouse,
        targets: parallax_targets(&document),
        section: None,
    })));

    // Sphere + zoom overlay
    let overlay = overlay::ZoomOverlay::find(&document);
    match &overlay {
        Some(o) => o.wire(),
        None => log::warn!("[overlay] zoom overlay not found; cards will not open"),
    }
    if let Err(e) = sphere::mount(&document, overlay) {
        log::error!("[sphere] {:?}", e);
    }

    flip::schedule_intro(&document);

    // Particle text waits for fonts, so it goes last.
    if let Err(e) = text_field::mount(document).await {
        log::error!("[particles] {:?}", e);
    }
    Ok(())
}
