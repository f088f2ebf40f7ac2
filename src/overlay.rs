use crate::constants::*;
use crate::dom;
use folio_core::ZoomedCard;
use web_sys as web;

/// Full-screen backdrop holding an enlarged copy of a sphere card.
#[derive(Clone)]
pub struct ZoomOverlay {
    overlay: web::HtmlElement,
    card: web::HtmlElement,
}

impl ZoomOverlay {
    pub fn find(document: &web::Document) -> Option<Self> {
        Some(Self {
            overlay: dom::html_by_id(document, ZOOM_OVERLAY_ID)?,
            card: dom::html_by_id(document, ZOOM_CARD_ID)?,
        })
    }

    /// Backdrop click closes; clicks on the card itself do not.
    pub fn wire(&self) {
        let this = self.clone();
        dom::add_listener(&self.overlay, "click", move |_ev: web::Event| this.hide());
        dom::add_listener(&self.card, "click", |ev: web::Event| ev.stop_propagation());
    }

    pub fn show(&self, inner_html: &str, zoomed: &ZoomedCard) {
        self.card.set_class_name(&format!(
            "{} scale-90 {}",
            ZOOM_CARD_BASE_CLASS,
            zoomed.parity.class_name()
        ));
        self.card.set_inner_html(inner_html);

        if zoomed.show_back {
            if let Some(wrapper) = self.child(".flip-wrapper") {
                dom::set_transform(&wrapper, "rotateY(180deg)");
            }
            if let Some(back) = self.child(".flip-wrapper .back") {
                _ = back.style().set_property("backface-visibility", "visible");
            }
        }

        let cl = self.overlay.class_list();
        for c in OVERLAY_HIDDEN_CLASSES {
            _ = cl.remove_1(c);
        }
        _ = cl.add_1(OVERLAY_VISIBLE_CLASS);
        let card_cl = self.card.class_list();
        _ = card_cl.remove_1("scale-90");
        _ = card_cl.add_1("scale-100");
        log::info!("[overlay] zoom card {}", zoomed.index + 1);
    }

    pub fn hide(&self) {
        let cl = self.overlay.class_list();
        for c in OVERLAY_HIDDEN_CLASSES {
            _ = cl.add_1(c);
        }
        _ = cl.remove_1(OVERLAY_VISIBLE_CLASS);
        let card_cl = self.card.class_list();
        _ = card_cl.add_1("scale-90");
        _ = card_cl.remove_1("scale-100");
    }

    fn child(&self, selector: &str) -> Option<web::HtmlElement> {
        use wasm_bindgen::JsCast;
        self.card
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }
}
