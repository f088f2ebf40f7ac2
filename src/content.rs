use folio_core::Skill;

pub const SKILLS: [Skill; 6] = [
    Skill {
        title: "MVP PLANNING",
        sub: "STRATEGY",
        details: &["User-first workflows", "System-level thinking"],
    },
    Skill {
        title: "DEVELOPMENT",
        sub: "CODE",
        details: &["HTML, CSS, JS", "Python (Basics/Auto)", "Frontend Logic"],
    },
    Skill {
        title: "DESIGN",
        sub: "UI/UX",
        details: &["UI/UX Fundamentals", "Figma & Canva", "Visual Hierarchy"],
    },
    Skill {
        title: "AI & EXP.",
        sub: "R&D",
        details: &["AI & Content Tools", "Workflow Automation", "Realism Experiments"],
    },
    Skill {
        title: "STARTUP OPS",
        sub: "EXECUTION",
        details: &["Early-stage execution", "Branding & Positioning", "Team Coordination"],
    },
    Skill {
        title: "PHOTOGRAPHY",
        sub: "VISUALS",
        details: &["Visual Storytelling", "Composition & Lighting", "Editing & Color Grading"],
    },
];

pub const SPHERE_IMAGES: [&str; 5] = [
    "gallery/sphere/20220729_173021.jpg",
    "gallery/sphere/IMG-20220805-WA0018.jpg",
    "gallery/sphere/IMG-20240908-WA0040.jpg",
    "gallery/sphere/IMG20240610205908.jpg",
    "gallery/sphere/IMG20240610205931.jpg",
];

pub const HERO_TARGETS: [&str; 3] = ["I'M Arcane", "RKN", "RITESH KUMAR ACHAL"];

pub const BIO_LINES: [&str; 4] = [
    "I'm a hands-on builder",
    "who enjoys working where",
    "technology, design,",
    "and ideas meet.",
];
