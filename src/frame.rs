use crate::constants::HERO_SCALE_Y;
use crate::constants::SECTION_SELECTOR;
use crate::dom;
use crate::input::{self, MouseState};
use crate::render;
use folio_core::parallax::{self, Section};
use folio_core::{FieldState, ParticleField, PointerState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements moved by the cursor/parallax frame. Any of them may be absent
/// from the page; missing ones are skipped.
pub struct ParallaxTargets {
    pub cursor: Option<web::HtmlElement>,
    pub hero: Vec<web::HtmlElement>,
    pub skills_text: Option<web::HtmlElement>,
    pub sphere_wrapper: Option<web::HtmlElement>,
    pub glitch_text: Option<web::HtmlElement>,
    /// Contact elements; `data-speed` is read every frame.
    pub contact: Vec<web::HtmlElement>,
}

pub struct PageFrame {
    pub document: web::Document,
    pub mouse: Rc<RefCell<MouseState>>,
    pub targets: ParallaxTargets,
    pub section: Option<Section>,
}

impl PageFrame {
    pub fn frame(&mut self) {
        let ms = {
            let mut ms = self.mouse.borrow_mut();
            let snapshot = *ms;
            ms.moved = false;
            snapshot
        };
        if ms.moved {
            self.section = self.section_under(ms.x, ms.y);
        }

        let pointer = ms.pos();
        if let Some(cursor) = &self.targets.cursor {
            let at = parallax::cursor_offset(pointer);
            dom::set_transform(cursor, &dom::translate3d(at.x, at.y));
        }

        let Some(section) = self.section else {
            return;
        };
        let (vw, vh) = dom::viewport_size();
        let center = input::viewport_center(vw, vh);
        match section {
            Section::Hero => {
                let d = parallax::hero_offset(pointer, center);
                let value = format!("{} scaleY({})", dom::translate3d(d.x, d.y), HERO_SCALE_Y);
                for el in &self.targets.hero {
                    dom::set_transform(el, &value);
                }
            }
            Section::Skills => {
                let offsets = parallax::skills_offsets(pointer, center);
                if let Some(el) = &self.targets.skills_text {
                    dom::set_transform(el, &dom::translate3d(offsets.text.x, offsets.text.y));
                }
                if let Some(el) = &self.targets.sphere_wrapper {
                    dom::set_transform(el, &dom::translate3d(offsets.sphere.x, offsets.sphere.y));
                }
            }
            Section::Projects => {
                if let Some(el) = &self.targets.glitch_text {
                    let d = parallax::projects_offset(pointer, center);
                    let style = el.style();
                    _ = style.set_property("--para-x", &format!("{}px", d.x));
                    _ = style.set_property("--para-y", &format!("{}px", d.y));
                }
            }
            Section::Contact => {
                for el in &self.targets.contact {
                    let speed = parallax::parse_speed(el.get_attribute("data-speed").as_deref());
                    let d = parallax::contact_offset(pointer, center, speed);
                    dom::set_transform(el, &dom::translate3d(d.x, d.y));
                }
            }
        }
    }

    fn section_under(&self, x: f32, y: f32) -> Option<Section> {
        let el = self.document.element_from_point(x, y)?;
        let section = el.closest(SECTION_SELECTOR).ok().flatten()?;
        Section::from_id(&section.id())
    }
}

/// Cursor and parallax run for the lifetime of the page.
pub fn start_page_loop(frame_ctx: Rc<RefCell<PageFrame>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub struct ParticleFrame {
    pub field: Rc<RefCell<ParticleField>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub active_since: Option<Instant>,
}

impl ParticleFrame {
    pub fn frame(&mut self) -> FieldState {
        let started = *self.active_since.get_or_insert_with(Instant::now);
        let pointer = *self.pointer.borrow();
        let mut field = self.field.borrow_mut();
        let state = field.step(&pointer);
        render::paint(&self.ctx, field.width(), field.height(), field.particles());
        if state == FieldState::Idle {
            log::debug!(
                "[particles] settled after {:?} ({} particles)",
                started.elapsed(),
                field.len()
            );
            self.active_since = None;
        }
        state
    }
}

/// Frame loop for the particle text that stops itself once the field is
/// idle and is restarted with [`ParticleLoop::wake`].
#[derive(Clone)]
pub struct ParticleLoop {
    running: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl ParticleLoop {
    pub fn new(frame_ctx: Rc<RefCell<ParticleFrame>>) -> Self {
        let running = Rc::new(Cell::new(false));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            match frame_ctx.borrow_mut().frame() {
                FieldState::Active => request_frame(&tick_clone),
                FieldState::Idle => running_tick.set(false),
            }
        }) as Box<dyn FnMut()>));
        Self { running, tick }
    }

    /// Schedule a frame unless the loop is already running.
    pub fn wake(&self) {
        if self.running.replace(true) {
            return;
        }
        request_frame(&self.tick);
    }
}
