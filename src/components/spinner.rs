//! Spinner.
//!
//! One scope, layers in flatten order:
//! `layout`, `size`, `color`, `border`, `animation`, `visibility`, `escape`.

use crate::resolver::Resolver;
use crate::types::{Prop, Props};

use super::Element;

const SCOPE: &str = "spinner";

const SIZES: &[(&str, &str)] = &[
    ("xs", "w-3 h-3 border"),
    ("sm", "w-4 h-4 border-2"),
    ("md", "w-6 h-6 border-2"),
    ("lg", "w-8 h-8 border-4"),
    ("xl", "w-12 h-12 border-4"),
];

const COLORS: &[(&str, &str)] = &[
    ("light", "border-white/30 border-t-white"),
    ("primary", "border-blue-600/30 border-t-blue-500"),
    ("danger", "border-red-600/30 border-t-red-500"),
];

/// Renders a loading indicator with `role="status"`.
///
/// `ariaLabel` is forwarded as `aria-label`, which defaults to `"loading"`.
pub fn spinner(props: &Props) -> Element {
    let r = Resolver::new(props);

    let layout = r.layer(SCOPE, "layout");
    let size = r.layer(SCOPE, "size");
    let color = r.layer(SCOPE, "color");
    let border = r.layer(SCOPE, "border");
    let animation = r.layer(SCOPE, "animation");
    let visibility = r.layer(SCOPE, "visibility");
    let escape = r.layer(SCOPE, "escape");

    layout.set("inline-flex items-center justify-center");
    size.set("w-6 h-6");
    color.set("border-black/20 border-t-black");
    border.set("border-2 rounded-full");
    animation.set("animate-spin");
    visibility.set("opacity-100");

    for (key, class) in SIZES {
        size.set_if(r.flag(key), *class);
    }
    for (key, class) in COLORS {
        color.set_if(r.flag(key), *class);
    }

    border.set_if(r.flag("thin"), "border rounded-full");
    border.set_if(r.flag("thick"), "border-4 rounded-full");

    animation.set_if(r.flag("spinSlow"), "animate-spin [animation-duration:1.5s]");
    animation.set_if(r.flag("spinFast"), "animate-spin [animation-duration:.6s]");

    layout.set_if(r.flag("inline"), "inline-flex");
    layout.set_if(r.flag("block"), "block mx-auto");
    layout.set_if(r.flag("centered"), "flex mx-auto");
    visibility.set_if(r.flag("transparent"), "opacity-25");

    for key in ["class", "className"] {
        if let Some(class) = r.prop(key).as_ref().and_then(Prop::as_str) {
            escape.set(class);
        }
    }

    r.data_from("aria-label", "ariaLabel");

    Element::new("div")
        .class(r.classes(SCOPE))
        .attr("role", "status")
        .attr(
            "aria-label",
            r.datum("aria-label").unwrap_or_else(|| Prop::from("loading")),
        )
}
