use crate::dom;
use web_sys as web;

/// Run `on_resize` for every window resize.
pub fn wire_resize(mut on_resize: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "resize", move |_ev: web::Event| on_resize());
}
