//! Button.
//!
//! Layers (scope `button`), in flatten order:
//! `semantic`, `surface`, `shadow`, `shape`, `size`, `hover`, `active`,
//! `layout`, `override`.
//!
//! Signals are consumed once they fire, so a preset that sets `ghost`
//! styling swallows the plain `ghost` surface signal.

use crate::config::ResolverConfig;
use crate::resolver::{Preset, Resolver};
use crate::types::Props;

use super::{pick, Element};

const SCOPE: &str = "button";

// =============================================================================
// Presets
// =============================================================================

fn cta() -> Preset {
    Preset::new()
        .write(SCOPE, "semantic", "bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold")
        .write(SCOPE, "size", "px-8 py-4 text-lg")
        .write(SCOPE, "shape", "rounded-full")
        .write(SCOPE, "shadow", "shadow-lg shadow-purple-500/25")
        .write(SCOPE, "hover", "hover:scale-105 hover:shadow-xl transition-all duration-200")
        .write(SCOPE, "active", "active:scale-95")
}

fn destructive() -> Preset {
    Preset::new()
        .write(SCOPE, "semantic", "bg-red-600 text-white border-2 border-red-700")
        .write(SCOPE, "hover", "hover:bg-red-700 transition-all duration-200")
        .write(SCOPE, "active", "active:scale-95 active:bg-red-800")
        .write(SCOPE, "shape", "rounded-lg")
}

fn minimal() -> Preset {
    Preset::new()
        .write(SCOPE, "semantic", "bg-gray-100 text-gray-800 border border-gray-300")
        .write(SCOPE, "hover", "hover:bg-gray-200 transition-all duration-200")
        .write(SCOPE, "active", "active:bg-gray-300")
        .write(SCOPE, "shape", "rounded-md")
        .write(SCOPE, "shadow", "shadow-sm")
}

fn social() -> Preset {
    Preset::new()
        .write(SCOPE, "semantic", "bg-white text-gray-700 border border-gray-200")
        .write(SCOPE, "hover", "hover:bg-gray-50 hover:shadow-md transition-all duration-200")
        .write(SCOPE, "active", "active:bg-gray-100")
        .write(SCOPE, "shape", "rounded-full")
        .write(SCOPE, "size", "px-4 py-4")
}

fn fab() -> Preset {
    Preset::new()
        .write(SCOPE, "semantic", "bg-blue-500 text-white")
        .write(SCOPE, "hover", "hover:bg-blue-600 hover:scale-110 transition-all duration-200")
        .write(SCOPE, "active", "active:scale-95")
        .write(SCOPE, "shape", "rounded-full")
        .write(SCOPE, "size", "px-4 py-4")
        .write(SCOPE, "shadow", "shadow-lg shadow-blue-500/30")
}

fn premium() -> Preset {
    Preset::new()
        .write(SCOPE, "semantic", "bg-gradient-to-r from-yellow-400 to-orange-500 text-white")
        .write(SCOPE, "surface", "border-2 border-yellow-300")
        .write(SCOPE, "hover", "hover:scale-105 hover:shadow-xl hover:shadow-yellow-400/40 transition-all duration-300")
        .write(SCOPE, "active", "active:scale-95")
        .write(SCOPE, "shape", "rounded-lg")
}

fn ghost() -> Preset {
    Preset::new()
        .write(SCOPE, "semantic", "text-gray-600 hover:text-gray-800")
        .write(SCOPE, "surface", "bg-transparent hover:bg-gray-100")
        .write(SCOPE, "hover", "transition-all duration-200")
        .write(SCOPE, "active", "active:bg-gray-200")
        .write(SCOPE, "shape", "rounded-md")
}

// =============================================================================
// Signal tables
// =============================================================================

const SURFACES: &[(&str, &str)] = &[
    ("ghost", "bg-transparent"),
    ("outline", "border border-current"),
    ("link", "bg-transparent underline p-0"),
    ("glass", "bg-white/10 backdrop-blur-md border border-white/20"),
    ("gradient", "bg-gradient-to-r from-blue-500 to-purple-600"),
    ("gradientRadial", "bg-gradient-radial from-pink-400 to-purple-600"),
    ("textured", "bg-gradient-to-br from-gray-100 to-gray-200"),
    ("neon", "bg-black border-2 border-cyan-400 shadow-lg shadow-cyan-400/50"),
    ("metallic", "bg-gradient-to-br from-gray-300 to-gray-500 shadow-inner"),
    ("holographic", "bg-gradient-to-r from-purple-400 via-pink-500 to-red-500"),
    ("matte", "bg-gray-800 shadow-none"),
    ("glossy", "bg-gradient-to-b from-white/20 to-transparent"),
];

const HOVERS: &[(&str, &str)] = &[
    ("hoverEnlarge", "hover:scale-105 transition-transform duration-200"),
    ("hoverShrink", "hover:scale-95 transition-transform duration-200"),
    ("hoverLift", "hover:-translate-y-0.5 transition-all duration-200"),
    ("hoverGlow", "hover:shadow-lg hover:shadow-blue-500/20 transition-all duration-300"),
    ("hoverBounce", "hover:animate-bounce"),
    ("hoverRotate", "hover:rotate-3 transition-transform duration-200"),
    ("hoverSlide", "hover:translate-x-1 transition-transform duration-200"),
    ("hoverFade", "hover:opacity-80 transition-opacity duration-200"),
    ("hoverBorder", "hover:border-2 hover:border-blue-400 transition-all duration-200"),
];

const ACTIVES: &[(&str, &str)] = &[
    ("activeShrink", "active:scale-95 transition-transform"),
    ("activePulse", "active:animate-pulse"),
    ("activeDepth", "active:translate-y-0.5"),
    ("activeRipple", "active:ring-4 active:ring-blue-400/50"),
    ("activeExplode", "active:scale-110 active:shadow-2xl"),
    ("activeSpin", "active:animate-spin"),
    ("activeFlash", "active:bg-white active:text-black transition-colors duration-100"),
    ("activeGlow", "active:shadow-lg active:shadow-green-400/50"),
];

// =============================================================================
// Component
// =============================================================================

/// Renders a `<button>`.
///
/// Content: `children`. Native attributes: `disabled`, `onClick`, `type`.
/// Escape hatch: `className` replaces the `override` layer.
pub fn button(props: &Props) -> Element {
    let r = Resolver::new(props).config(ResolverConfig::new().consume_signals(true));

    let semantic = r.layer(SCOPE, "semantic");
    let surface = r.layer(SCOPE, "surface");
    let _shadow = r.layer(SCOPE, "shadow");
    let shape = r.layer(SCOPE, "shape");
    let size = r.layer(SCOPE, "size");
    let hover = r.layer(SCOPE, "hover");
    let active = r.layer(SCOPE, "active");
    let layout = r.layer(SCOPE, "layout");
    let escape = r.layer(SCOPE, "override");

    shape.set("rounded-xs");
    surface.set("shadow-xl");
    size.set("px-4 py-2 text-base");
    semantic.set("bg-black text-white");

    r.apply_preset_if("cta", &cta());
    r.apply_preset_if("destructive", &destructive());
    r.apply_preset_if("minimal", &minimal());
    r.apply_preset_if("social", &social());
    r.apply_preset_if("fab", &fab());
    r.apply_preset_if("premium", &premium());
    r.apply_preset_if("ghost", &ghost());

    r.signal(&semantic, "primary", "bg-blue-500 text-neutral-100");
    r.signal(&semantic, "secondary", "bg-pink-800 text-neutral-100");
    r.signal(&semantic, "success", "bg-green-500 text-white");
    r.signal(&semantic, "warning", "bg-yellow-500 text-black");
    r.signal(&semantic, "danger", "bg-red-500 text-white");
    r.signal(&semantic, "info", "bg-cyan-500 text-white");

    r.signal(&size, "xs", "px-2 py-1 text-xs");
    r.signal(&size, "sm", "px-3 py-1.5 text-sm");
    r.signal(&size, "md", "px-4 py-2 text-base");
    r.signal(&size, "lg", "px-6 py-3 text-lg");
    r.signal(&size, "xl", "px-8 py-4 text-xl");

    r.signal(&shape, "pill", "rounded-full");
    r.signal(&shape, "rounded", "rounded-lg");
    r.signal(&shape, "square", "rounded-none");
    r.signal(&shape, "circle", "rounded-full aspect-square p-0");

    for (key, class) in SURFACES {
        r.signal(&surface, key, class);
    }

    r.signal(&layout, "block", "w-full");
    r.signal(&layout, "inline", "inline-flex");
    r.signal(&layout, "center", "mx-auto");

    for (key, class) in HOVERS {
        r.signal(&hover, key, class);
    }
    for (key, class) in ACTIVES {
        r.signal(&active, key, class);
    }
    if r.flag("activeNone") {
        active.clear();
        r.take("activeNone");
    }

    if let Some(class) = r.prop("className").filter(|p| p.is_truthy()) {
        if let Some(class) = class.as_str() {
            escape.set(class);
        }
        r.take("className");
    }

    r.data("children");
    r.data("disabled");
    r.data("onClick");
    r.data("type");

    Element::new("button")
        .class(r.classes(SCOPE))
        .attrs(pick(&r, &["disabled", "onClick", "type"]))
        .content(r.datum("children"))
}
