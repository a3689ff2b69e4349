//! Switch.
//!
//! Holds one `checked` state entry (priority 1) initialized from
//! `defaultChecked`. A `checked` prop, when given, controls the rendered
//! value instead of the internal state.

use crate::config::Presence;
use crate::resolver::{Instance, Resolver};
use crate::types::{Prop, Props};

use super::{join_class, pick, Element};

const NATIVE: &[&str] = &[
    "id",
    "name",
    "value",
    "disabled",
    "required",
    "readOnly",
    "aria-label",
    "aria-labelledby",
    "aria-describedby",
    "aria-invalid",
];

/// Renders a switch for one render of `instance`.
///
/// The rendered `<button>` carries an `onClick` handler that flips the
/// state and then calls the caller's `onClick` with the new value.
pub fn switch(props: &Props, instance: &Instance) -> Element {
    let r = Resolver::with_instance(props, instance);

    let container_base = r.layer("container", "base");
    let container_size = r.layer("container", "size");
    let container_color = r.layer("container", "color");
    let container_layout = r.layer("container", "layout");

    let button_base = r.layer("button", "base");
    let button_size = r.layer("button", "size");
    let button_color = r.layer("button", "color");
    let button_shape = r.layer("button", "shape");
    let button_layout = r.layer("button", "layout");
    let button_checked = r.layer("button", "checked");
    let button_interactive = r.layer("button", "interactive");

    let thumb_base = r.layer("thumb", "base");
    let thumb_color = r.layer("thumb", "color");
    let thumb_shape = r.layer("thumb", "shape");
    let thumb_size = r.layer("thumb", "size");
    let thumb_layout = r.layer("thumb", "layout");
    let thumb_position = r.layer("thumb", "position");
    let thumb_interactive = r.layer("thumb", "interactive");

    let label_base = r.layer("label", "base");
    let label_color = r.layer("label", "color");
    let label_layout = r.layer("label", "layout");
    let label_size = r.layer("label", "size");

    container_base.set("relative");
    container_size.set("h-4 w-8");
    container_color.set("bg-transparent");
    container_layout.set("flex flex-row items-center justify-center gap-2 w-full");

    button_base.set("relative transition-colors duration-500 cursor-pointer");
    button_size.set("h-4 w-8");
    button_color.set("bg-gray-200");
    button_shape.set("rounded-full");
    button_layout.set("inline-flex items-center");
    button_checked.set("checked:bg-blue-600");

    thumb_base.set("absolute transition-transform duration-500");
    thumb_color.set("bg-white");
    thumb_shape.set("rounded-full");
    thumb_size.set("h-4 w-4");
    thumb_layout.set("inline-block");
    thumb_position.set("translate-x-0");

    label_base.set("cursor-pointer shrink-0");
    label_color.set("text-gray-700");
    label_size.set("text-sm font-light");

    label_layout.set_if(r.flag("labelLeft"), "order-first mr-2");
    label_layout.set_if(r.flag("labelRight"), "order-last ml-2");
    if r.flag("labelTop") {
        container_layout.set("flex flex-col-reverse items-center justify-center gap-2 h-full w-full");
        label_layout.set("w-full text-center");
    }
    if r.flag("labelBottom") {
        container_layout.set("flex flex-col items-center justify-center gap-2 h-full w-full");
        label_layout.set("w-full text-center");
    }
    label_base.set_if(r.flag("labelHidden"), "absolute opacity-0 pointer-events-none");

    let sizes = [
        ("xs", "h-3 w-6", "h-3 w-3", "translate-x-3"),
        ("sm", "h-4 w-8", "h-4 w-4", "translate-x-4"),
        ("md", "h-5 w-10", "h-5 w-5", "translate-x-5"),
        ("lg", "h-6 w-12", "h-6 w-6", "translate-x-6"),
        ("xl", "h-7 w-14", "h-7 w-7", "translate-x-7"),
    ];
    let mut checked_offset = "translate-x-4";
    for (key, track, knob, offset) in sizes {
        if r.flag(key) {
            container_size.set(track);
            button_size.set(track);
            thumb_size.set(knob);
            checked_offset = offset;
        }
    }

    if r.flag("square") {
        button_shape.set("rounded-md");
        thumb_shape.set("rounded-md");
    }
    if r.flag("pill") {
        button_shape.set("rounded-full");
        thumb_shape.set("rounded-full");
    }
    if r.flag("disabled") {
        button_interactive.set("cursor-not-allowed opacity-40");
        thumb_interactive.set("opacity-40");
    }

    for name in ["id", "label", "name", "value", "disabled", "required", "readOnly", "className", "onClick"] {
        r.data(name);
    }
    r.data_from("aria-label", "ariaLabel");
    r.data_from("aria-labelledby", "ariaLabelledBy");
    r.data_from("aria-describedby", "ariaDescribedBy");
    r.data_from("aria-invalid", "ariaInvalid");
    r.data_with("checked", "checked", Presence::Defined);
    r.data_with("defaultChecked", "defaultChecked", Presence::Defined);
    r.data_with("aria-checked", "ariaChecked", Presence::Defined);

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

    if checked {
        thumb_position.set(checked_offset);
        button_color.set("bg-blue-600");
    }

    let user_click = r.datum("onClick");
    let on_click = Prop::callback(move |_| {
        let next = match &state {
            Some(state) => {
                state.toggle();
                state.get()
            }
            None => !checked,
        };
        if let Some(handler) = &user_click {
            handler.call(&Prop::Bool(next));
        }
    });

    let label = r.datum("label");
    let mut root = Element::new("div")
        .class(join_class(r.classes("container"), r.datum("className")))
        .child(
            Element::new("button")
                .class(r.classes("button"))
                .attrs(pick(&r, NATIVE))
                .attr("type", "button")
                .attr("role", "switch")
                .attr("aria-checked", r.datum("aria-checked").unwrap_or(Prop::Bool(checked)))
                .attr("onClick", on_click)
                .child(Element::new("span").class(r.classes("thumb"))),
        );

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

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn thumb(el: &Element) -> &Element {
        el.find("span").unwrap()
    }

    fn checked(el: &Element) -> bool {
        el.find("button")
            .and_then(|b| b.get_attr("aria-checked"))
            .and_then(Prop::as_bool)
            .unwrap()
    }

    #[test]
    fn test_unchecked_by_default() {
        let instance = Instance::new();
        let el = switch(&Props::new(), &instance);
        assert!(!checked(&el));
        assert!(thumb(&el).class.contains("translate-x-0"));
        assert!(el.find("label").is_none());
    }

    #[test]
    fn test_default_checked_initializes_state() {
        let instance = Instance::new();
        let el = switch(&Props::new().set("defaultChecked", true).set("lg", true), &instance);
        assert!(checked(&el));
        assert!(thumb(&el).class.contains("translate-x-6"));
        assert!(el.find("button").unwrap().class.contains("bg-blue-600"));
    }

    #[test]
    fn test_click_toggles_across_renders() {
        let instance = Instance::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let props = Props::new().set(
            "onClick",
            Prop::callback(move |v| seen_clone.borrow_mut().push(v.as_bool())),
        );

        let el = switch(&props, &instance);
        el.find("button").unwrap().fire("onClick", &Prop::Null);

        let el = switch(&props, &instance);
        assert!(checked(&el));
        assert!(thumb(&el).class.contains("translate-x-4"));

        el.find("button").unwrap().fire("onClick", &Prop::Null);
        let el = switch(&props, &instance);
        assert!(!checked(&el));

        assert_eq!(*seen.borrow(), vec![Some(true), Some(false)]);
        assert_eq!(instance.slot_count(), 1);
    }

    #[test]
    fn test_controlled_checked_false_wins_over_state() {
        let instance = Instance::new();
        let el = switch(
            &Props::new().set("checked", false).set("defaultChecked", true),
            &instance,
        );
        assert!(!checked(&el));
    }

    #[test]
    fn test_label_and_aria() {
        let instance = Instance::new();
        let el = switch(
            &Props::new()
                .set("label", "Wi-Fi")
                .set("id", "wifi")
                .set("ariaLabel", "Toggle Wi-Fi")
                .set("labelLeft", true),
            &instance,
        );
        let label = el.find("label").unwrap();
        assert_eq!(label.text(), Some("Wi-Fi"));
        assert_eq!(label.get_attr("for").and_then(Prop::as_str), Some("wifi"));
        assert!(label.class.ends_with("order-first mr-2 text-sm font-light"));

        let button = el.find("button").unwrap();
        assert_eq!(button.get_attr("aria-label").and_then(Prop::as_str), Some("Toggle Wi-Fi"));
        assert!(button.get_attr("ariaLabel").is_none());
    }

    #[test]
    fn test_aria_checked_overrides_state() {
        let instance = Instance::new();
        let el = switch(&Props::new().set("ariaChecked", "mixed"), &instance);
        let button = el.find("button").unwrap();
        assert_eq!(button.get_attr("aria-checked").and_then(Prop::as_str), Some("mixed"));
        assert!(button.get_attr("ariaChecked").is_none());
    }

    #[test]
    fn test_track_and_thumb_layers() {
        let instance = Instance::new();
        let el = switch(&Props::new(), &instance);
        assert_eq!(
            el.find("button").unwrap().class,
            "relative transition-colors duration-500 cursor-pointer h-4 w-8 bg-gray-200 \
             rounded-full inline-flex items-center checked:bg-blue-600"
        );
        assert_eq!(
            thumb(&el).class,
            "absolute transition-transform duration-500 bg-white rounded-full h-4 w-4 \
             inline-block translate-x-0"
        );
    }

    #[test]
    fn test_disabled_styles_and_attr() {
        let instance = Instance::new();
        let el = switch(&Props::new().set("disabled", true), &instance);
        let button = el.find("button").unwrap();
        assert!(button.class.ends_with("cursor-not-allowed opacity-40"));
        assert_eq!(button.get_attr("disabled").and_then(Prop::as_bool), Some(true));
        assert!(thumb(&el).class.ends_with("opacity-40"));
    }
}
