//! DOM side of the skills sphere: one element per laid-out card.

use crate::constants::SPHERE_CONTAINER_ID;
use crate::content::{SKILLS, SPHERE_IMAGES};
use crate::dom;
use crate::overlay::ZoomOverlay;
use folio_core::constants::{SPHERE_CARD_COUNT, SPHERE_DISPLAY_RADIUS};
use folio_core::{layout, CardContent, SphereCard};
use web_sys as web;

fn card_html(card: &SphereCard) -> String {
    let number = card.number_label();
    match card.content {
        CardContent::Flip { skill } => {
            let s = &SKILLS[skill];
            format!(
                r#"<div class="flip-wrapper">
    <div class="card-face front">
        <span class="number">{number}</span>
        <span class="label">{title}</span>
        <span class="sub">{sub}</span>
    </div>
    <div class="card-face back">
        <h3>{title}</h3>
        <p class="text-xs leading-relaxed mt-2 text-center font-mono opacity-80">{details}</p>
    </div>
</div>"#,
                title = s.title,
                sub = s.sub,
                details = s.details.join("<br>"),
            )
        }
        CardContent::Image { image } => format!(
            r#"<div class="card-face front">
    <img src="{src}" class="skill-img" alt="Visual" style="object-fit: cover; width: 100%; height: 100%; border-radius: inherit;">
    <span class="number" style="position: absolute; bottom: 5px; right: 10px; font-size: 1.5rem; color: white; mix-blend-mode: overlay;">{number}</span>
</div>"#,
            src = SPHERE_IMAGES[image],
        ),
    }
}

/// Build the sphere cards. Without a container the sphere is skipped.
pub fn mount(document: &web::Document, overlay: Option<ZoomOverlay>) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id(SPHERE_CONTAINER_ID) else {
        log::warn!("[sphere] #{} not found; skipping", SPHERE_CONTAINER_ID);
        return Ok(());
    };
    let cards = layout(SPHERE_CARD_COUNT, SKILLS.len(), SPHERE_IMAGES.len())?;

    for card in cards {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create card: {:?}", e))?;
        el.set_class_name(&format!("sphere-card {}", card.parity().class_name()));
        let html = card_html(&card);
        el.set_inner_html(&html);
        _ = el.set_attribute(
            "style",
            &format!("transform: {}", card.transform(SPHERE_DISPLAY_RADIUS)),
        );

        if let Some(overlay) = overlay.clone() {
            let zoomed = card.zoom();
            dom::add_listener(&el, "click", move |ev: web::Event| {
                ev.stop_propagation();
                overlay.show(&html, &zoomed);
            });
        }

        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append card: {:?}", e))?;
    }
    log::info!("[sphere] mounted {} cards", SPHERE_CARD_COUNT);
    Ok(())
}
