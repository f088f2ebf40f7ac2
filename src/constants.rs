// Page wiring and tuning constants for the web frontend.

// Element ids / selectors
pub const CURSOR_SELECTOR: &str = ".custom-cursor";
pub const SECTION_SELECTOR: &str = ".section";
pub const HERO_PARALLAX_SELECTOR: &str = "#hero .parallax-text";
pub const CONTACT_PARALLAX_SELECTOR: &str = "#contact .parallax-element";
pub const SKILLS_TEXT_ID: &str = "parallax-text";
pub const SPHERE_WRAPPER_ID: &str = "sphereWrapper";
pub const SPHERE_CONTAINER_ID: &str = "sphereContainer";
pub const GLITCH_TEXT_SELECTOR: &str = ".glitch-text";
pub const PARTICLE_TEXT_ID: &str = "magnetic-text";
pub const ZOOM_OVERLAY_ID: &str = "zoom-overlay";
pub const ZOOM_CARD_ID: &str = "zoom-card";
pub const HERO_LINE_IDS: [&str; 3] = ["hero-line-1", "hero-line-2", "hero-line-3"];
pub const HERO_SUBTEXT_ID: &str = "hero-subtext";

// Particle canvas
// The canvas covers 200% of its container so particles can fly past the text.
pub const CANVAS_OVERSCAN: f64 = 2.0;
// Pointer counts as "near" the field within this many CSS px of the canvas.
pub const POINTER_MARGIN_PX: f32 = 100.0;
// Rasterized text is drawn this much larger than the container's font size.
pub const PARTICLE_FONT_SCALE: f32 = 1.2;
pub const CANVAS_Z_INDEX: &str = "50";

// Hero parallax keeps a slight vertical stretch
pub const HERO_SCALE_Y: f32 = 1.1;

// Zoom overlay classes
pub const OVERLAY_HIDDEN_CLASSES: [&str; 2] = ["opacity-0", "pointer-events-none"];
pub const OVERLAY_VISIBLE_CLASS: &str = "pointer-events-auto";
pub const ZOOM_CARD_BASE_CLASS: &str = "relative w-[300px] h-[400px] md:w-[350px] md:h-[480px] transform-gpu transition-transform duration-300 sphere-card-clone";
