use crate::constants::POINTER_MARGIN_PX;
use crate::dom;
use crate::frame::ParticleLoop;
use crate::input::{self, MouseState};
use folio_core::{ParticleField, PointerState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Record the raw client position for the cursor/parallax frame.
pub fn wire_mouse_tracking(document: &web::Document, mouse: Rc<RefCell<MouseState>>) {
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let mut ms = mouse.borrow_mut();
        ms.x = ev.client_x() as f32;
        ms.y = ev.client_y() as f32;
        ms.moved = true;
    });
}

#[derive(Clone)]
pub struct ParticlePointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<ParticleField>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub frame_loop: ParticleLoop,
}

/// Track the pointer around the particle canvas. Inside the margin the
/// pointer is stored in canvas-local pixels and the loop is woken; outside
/// it the pointer is cleared so the field can settle.
pub fn wire_particle_pointer(w: ParticlePointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "mousemove", move |ev: web::MouseEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let rect = dom::field_rect(&w.canvas);
        let local = input::pointer_in_field(client, &rect, POINTER_MARGIN_PX);

        let pointer = {
            let mut p = w.pointer.borrow_mut();
            p.set(local);
            *p
        };
        if pointer.is_active() {
            if w.field.borrow_mut().notify_pointer(&pointer) {
                log::debug!("[particles] pointer woke the field");
            }
            w.frame_loop.wake();
        }
    });
}
