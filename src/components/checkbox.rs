//! CheckBox.
//!
//! Holds one `checked` state entry (priority 1) initialized from
//! `defaultChecked`; a `checked` prop controls the rendered value instead.
//! The input's `onChange` handler takes the new value as its argument, or
//! toggles when called without a boolean.

use crate::config::Presence;
use crate::resolver::{Instance, Resolver};
use crate::types::{Prop, Props};

use super::{join_class, pick, Element};

const TONES: &[(&str, &str)] = &[
    ("primary", "border-blue-600 checked:bg-blue-50 checked:border-blue-600"),
    ("secondary", "border-gray-600 checked:bg-gray-50 checked:border-gray-600"),
    ("danger", "border-red-600 checked:bg-red-50 checked:border-red-600"),
    ("success", "border-green-600 checked:bg-green-50 checked:border-green-600"),
    ("warning", "border-yellow-600 checked:bg-yellow-50 checked:border-yellow-600"),
    ("info", "border-cyan-600 checked:bg-cyan-50 checked:border-cyan-600"),
    ("dark", "border-gray-600 checked:bg-gray-700 checked:border-gray-500"),
    ("light", "border-gray-300 checked:bg-gray-100 checked:border-gray-400"),
    ("neutral", "border-gray-400 checked:bg-gray-200 checked:border-gray-500"),
    ("ghost", "border-transparent bg-transparent checked:bg-transparent checked:border-transparent"),
    ("outline", "border-2 bg-transparent checked:bg-transparent"),
    ("filled", "border-transparent bg-gray-100 checked:bg-gray-200"),
    ("glass", "border-white/20 bg-white/10 backdrop-blur-sm checked:bg-white/20"),
    ("minimal", "border-gray-200 bg-transparent checked:border-gray-400 checked:bg-gray-50"),
];

// (signal, label size, box size)
const SIZES: &[(&str, &str, &str)] = &[
    ("xs", "text-xs", "h-2 w-2 checked:after:text-[4px]"),
    ("sm", "text-sm", "h-3 w-3 checked:after:text-[8px]"),
    ("md", "text-md", "h-4 w-4 checked:after:text-[10px]"),
    ("lg", "text-lg", "h-5 w-5 checked:after:text-[12px]"),
];

const LABEL_FONTS: &[(&str, &str)] = &[
    ("labelBold", "font-bold"),
    ("labelSemibold", "font-semibold"),
    ("labelMedium", "font-medium"),
    ("labelRegular", "font-normal"),
    ("labelLight", "font-light"),
    ("labelThin", "font-thin"),
    ("labelUppercase", "uppercase"),
    ("labelLowercase", "lowercase"),
    ("labelCapitalize", "capitalize"),
    ("labelItalic", "italic"),
    ("labelUnderline", "underline"),
    ("labelLineThrough", "line-through"),
];

const NATIVE: &[&str] = &[
    "name",
    "value",
    "form",
    "tabIndex",
    "disabled",
    "aria-label",
    "aria-labelledby",
    "aria-describedby",
    "aria-invalid",
];

/// Renders a checkbox for one render of `instance`.
pub fn checkbox(props: &Props, instance: &Instance) -> Element {
    let r = Resolver::with_instance(props, instance);

    let container_base = r.layer("container", "base");
    let container_color = r.layer("container", "color");
    let container_size = r.layer("container", "size");
    let container_layout = r.layer("container", "layout");

    let box_base = r.layer("checkbox", "base");
    let box_color = r.layer("checkbox", "color");
    let box_size = r.layer("checkbox", "size");
    let box_layout = r.layer("checkbox", "layout");
    let box_checked = r.layer("checkbox", "checked");
    let box_border = r.layer("checkbox", "border");
    let box_shape = r.layer("checkbox", "shape");
    let box_interactive = r.layer("checkbox", "interactive");

    let label_base = r.layer("label", "base");
    let label_color = r.layer("label", "color");
    let label_font = r.layer("label", "font");
    let label_size = r.layer("label", "size");
    let label_layout = r.layer("label", "layout");

    container_base.set("relative flex justify-center items-center");
    container_color.set("bg-transparent");
    container_size.set("h-full w-full");
    container_layout.set("flex-row gap-2");

    box_base.set("relative inset-0 appearance-none cursor-pointer");
    box_color.set("border-gray-300 bg-transparent");
    box_size.set("h-3 w-3 checked:after:text-[8px]");
    box_border.set("border-2");
    box_shape.set("rounded-sm");
    box_layout.set("transition-all duration-200");
    box_checked.set(
        "checked:after:leading-none checked:border-blue-600 checked:bg-gray-300 \
         checked:after:content-['✓'] checked:after:absolute checked:after:top-1/2 \
         checked:after:left-1/2 checked:after:-translate-x-1/2 checked:after:-translate-y-1/2",
    );

    label_base.set("relative flex items-center cursor-pointer");
    label_color.set("text-gray-800");
    label_font.set("font-light");
    label_size.set("text-sm");
    label_layout.set("left-0");

    for (key, class) in TONES {
        box_color.set_if(r.flag(key), *class);
    }

    box_shape.set_if(r.flag("square"), "rounded-none");
    box_shape.set_if(r.flag("rounded"), "rounded-sm");
    box_shape.set_if(r.flag("pill"), "rounded-full");

    box_interactive.set_if(r.flag("loading"), "opacity-50 cursor-wait");
    box_interactive.set_if(r.flag("readonly"), "cursor-not-allowed opacity-60");

    box_border.set_if(r.flag("borderNone"), "border-0");
    box_border.set_if(r.flag("borderThick"), "border-4");
    box_border.set_if(r.flag("borderDashed"), "border-2 border-dashed");

    for (key, text, size) in SIZES {
        if r.flag(key) {
            label_size.set(*text);
            box_size.set(*size);
        }
    }

    container_layout.set_if(r.flag("labelTop"), "flex-col-reverse gap-2");
    container_layout.set_if(r.flag("labelBottom"), "flex-col gap-2");
    label_layout.set_if(r.flag("labelLeft"), "left-0 order-last");
    label_layout.set_if(r.flag("labelRight"), "right-0 order-first");
    label_layout.set_if(r.flag("labelStart"), "order-first gap-2");
    label_layout.set_if(r.flag("labelEnd"), "order-last gap-2");

    for (key, class) in LABEL_FONTS {
        label_font.set_if(r.flag(key), *class);
    }

    for name in ["id", "label", "onChange", "disabled", "name", "value", "form", "tabIndex", "className"] {
        r.data(name);
    }
    r.data_from("aria-label", "ariaLabel");
    r.data_from("aria-labelledby", "ariaLabelledBy");
    r.data_from("aria-describedby", "ariaDescribedBy");
    r.data_from("aria-invalid", "ariaInvalid");
    r.data_with("checked", "checked", Presence::Defined);
    r.data_with("defaultChecked", "defaultChecked", Presence::Defined);

    let initial = r
        .datum("defaultChecked")
        .and_then(|p| p.as_bool())
        .unwrap_or(false);
    r.state_with("checked", 1, initial);
    let state = r.active("checked");

    let checked = r
        .datum("checked")
        .and_then(|p| p.as_bool())
        .or_else(|| state.as_ref().map(|s| s.get()))
        .unwrap_or(false);

    let user_change = r.datum("onChange");
    let on_change = Prop::callback(move |arg| {
        let next = arg.as_bool().unwrap_or(!checked);
        if let Some(state) = &state {
            state.set(next);
        }
        if let Some(handler) = &user_change {
            handler.call(&Prop::Bool(next));
        }
    });

    let mut input = Element::new("input")
        .class(format!("peer {}", r.classes("checkbox")))
        .attrs(pick(&r, NATIVE))
        .attr("type", "checkbox")
        .attr("checked", checked)
        .attr("onChange", on_change);
    if let Some(id) = r.datum("id") {
        input = input.attr("id", id);
    }

    let mut root = Element::new("div")
        .class(join_class(r.classes("container"), r.datum("className")))
        .child(input);

    let label = r.datum("label");
    if label.is_some() {
        let mut el = Element::new("label")
            .class(r.classes("label"))
            .content(label);
        if let Some(id) = r.datum("id") {
            el = el.attr("for", id);
        }
        root = root.child(el);
    }

    root
}
