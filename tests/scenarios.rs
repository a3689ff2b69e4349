//! End-to-end resolver scenarios.

use signal_layers::{Instance, Prop, Props, Resolver, ResolverConfig};

#[test]
fn overwrite_keeps_only_last_value() {
    let r = Resolver::new(&Props::new());
    let color = r.layer("root", "color");
    color.set("red");
    color.set("blue");
    assert_eq!(r.classes("root"), "blue");
}

#[test]
fn flatten_follows_declaration_order() {
    let r = Resolver::new(&Props::new());
    let size = r.layer("root", "size");
    let color = r.layer("root", "color");
    color.set("c1");
    size.set("s1");
    assert_eq!(r.classes("root"), "s1 c1");
}

#[test]
fn style_trigger_is_not_passed_through() {
    let r = Resolver::new(&Props::new().set("primary", true).set("label", "Go"));
    let semantic = r.layer("root", "semantic");
    semantic.set_if(r.flag("primary"), "bg-blue-500");
    r.data("label");

    let bag = r.data_bag();
    assert_eq!(bag.len(), 1);
    assert_eq!(bag.get("label").and_then(Prop::as_str), Some("Go"));
    assert!(!bag.contains("primary"));
}

#[test]
fn higher_priority_entry_becomes_active() {
    let r = Resolver::new(&Props::new());
    r.state_with("hoverActive", 0, false);
    r.state_with("clickActive", 1, false);
    let active = r.active_state().unwrap();
    assert_eq!(active.name(), "clickActive");
}

#[test]
fn empty_props_flatten_to_empty_strings() {
    let r = Resolver::new(&Props::new());
    r.layer("root", "size");
    r.layer("label", "color");
    assert_eq!(r.classes("root"), "");
    assert_eq!(r.classes("label"), "");
    assert_eq!(r.classes("never-declared"), "");
}

#[test]
fn state_cells_survive_rerender() {
    let instance = Instance::new();

    let first = Resolver::with_instance(&Props::new(), &instance);
    first.state("reactHover");
    first.state_with("reactClick", 1, false);
    let click = first.active("reactClick").unwrap();
    click.set(true);

    let second = Resolver::with_instance(&Props::new(), &instance);
    second.state("reactHover");
    second.state_with("reactClick", 1, false);
    let again = second.active("reactClick").unwrap();

    assert!(again.ptr_eq(&click));
    assert!(again.get());
    assert_eq!(instance.slot_count(), 2);
}

#[test]
fn consumed_signals_leave_unknown_ones() {
    let props = Props::new()
        .set("primary", true)
        .set("children", "Go")
        .set("mystery", true);
    let r = Resolver::new(&props).config(ResolverConfig::new().consume_signals(true));

    let semantic = r.layer("button", "semantic");
    r.signal(&semantic, "primary", "bg-blue-500");
    r.data("children");

    assert_eq!(r.remaining(), vec!["mystery".to_string()]);
    assert_eq!(props.len(), 3);
}

#[test]
fn props_from_json_drive_a_component() {
    let props = Props::from_json_str(r#"{"primary": true, "sm": true, "children": "Save"}"#)
        .unwrap();
    let el = signal_layers::button(&props);
    assert_eq!(el.text(), Some("Save"));
    assert!(el.class.contains("bg-blue-500"));
    assert!(el.class.contains("text-sm"));
}

#[test]
fn holding_a_view_does_not_block_the_resolver() {
    let r = Resolver::new(&Props::new().set("label", "Go").set("title", "Hi"));
    let layer = r.layer("root", "size");

    let bag = r.data_bag();
    let view = r.layers();
    r.data("title");
    layer.set("px-4");

    assert!(bag.is_empty());
    assert_eq!(view.classes("root"), "");
    assert_eq!(r.classes("root"), "px-4");
}

#[test]
fn json_props_keep_document_order() {
    let props = Props::from_json_str(r#"{"zeta": true, "alpha": true, "mid": 1}"#).unwrap();
    let r = Resolver::new(&props);
    assert_eq!(r.remaining(), vec!["zeta", "alpha", "mid"]);
}
