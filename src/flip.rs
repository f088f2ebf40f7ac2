//! Hero intro: each line flips from its placeholder to the target text.

use crate::constants::{HERO_LINE_IDS, HERO_SUBTEXT_ID};
use crate::content::HERO_TARGETS;
use crate::dom;
use folio_core::flip::{flip_plan, FlipCell, IntroStep, INTRO_TIMELINE};
use wasm_bindgen::JsCast;
use web_sys as web;

const NBSP: &str = "\u{a0}";

fn span(document: &web::Document, class: &str, text: &str) -> Option<web::HtmlElement> {
    let el = document
        .create_element("span")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    Some(el)
}

fn cell_faces(cell: &FlipCell) -> (String, String) {
    let front = cell.front.map(String::from).unwrap_or_else(|| NBSP.to_string());
    let back = match cell.back {
        Some(' ') => NBSP.to_string(),
        Some(c) => c.to_string(),
        None => String::new(),
    };
    (front, back)
}

fn animate_line(document: &web::Document, line: &web::HtmlElement, target: &str) {
    let plan = flip_plan(&line.inner_text(), target);
    line.set_inner_html("");

    let mut cells = Vec::with_capacity(plan.len());
    for cell in &plan {
        let (front_text, back_text) = cell_faces(cell);
        let (Some(wrapper), Some(front), Some(back)) = (
            span(document, "char-wrapper", ""),
            span(document, "front", &front_text),
            span(document, "back", &back_text),
        ) else {
            log::warn!("[flip] could not create character spans");
            return;
        };
        _ = wrapper
            .style()
            .set_property("transition-delay", &format!("{}ms", cell.delay_ms));
        _ = wrapper.append_child(&front);
        _ = wrapper.append_child(&back);
        _ = line.append_child(&wrapper);
        cells.push((wrapper, front, cell.collapse_at_ms));
    }

    // Force a reflow so the transition starts from the initial faces.
    let _ = line.offset_height();

    for (wrapper, front, collapse_at_ms) in cells {
        _ = wrapper.class_list().add_1("flipping");
        dom::set_timeout(collapse_at_ms, move || {
            _ = front.class_list().add_1("collapsed");
        });
    }
}

fn reveal_subtext(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HERO_SUBTEXT_ID) {
        let cl = el.class_list();
        _ = cl.remove_2("opacity-0", "-translate-y-4");
        _ = cl.add_2("opacity-100", "translate-y-0");
    }
}

/// Queue the intro steps relative to now.
pub fn schedule_intro(document: &web::Document) {
    for (step, at_ms) in INTRO_TIMELINE {
        let document = document.clone();
        dom::set_timeout(at_ms, move || match step {
            IntroStep::Line(n) => {
                let (Some(id), Some(target)) = (HERO_LINE_IDS.get(n), HERO_TARGETS.get(n)) else {
                    return;
                };
                if let Some(line) = dom::html_by_id(&document, id) {
                    animate_line(&document, &line, target);
                }
            }
            IntroStep::RevealSubtext => reveal_subtext(&document),
        });
    }
}
