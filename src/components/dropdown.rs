//! Dropdown.
//!
//! Two state entries compete for control of the menu: `reactHover` and
//! `reactClick`. Both cells are allocated every render at priority 0, in the
//! same order, and only then promoted:
//!
//! - `reactHover` gets priority 1 when the `reactHover` signal is set
//! - `reactClick` always gets priority 1
//!
//! With equal priorities the first promotion wins, so hover mode takes over
//! when requested and click mode is the fallback.

use bitflags::bitflags;

use crate::resolver::{Instance, Resolver, StateHandle};
use crate::types::{Prop, Props};

use super::{button, join_class, Element};

bitflags! {
    /// Interactions that can hold the menu open.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Trigger: u8 {
        const HOVER = 1 << 0;
        const CLICK = 1 << 1;
    }
}

/// User interactions routed to a rendered dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    MouseEnter,
    MouseLeave,
    TriggerClick,
    /// Click on the n-th visible menu item.
    ItemClick(usize),
}

const OPEN_BY: &str = "data-open-by";

/// Renders a dropdown for one render of `instance`.
///
/// Data: `items` (list of maps with `label`, optional `href` and
/// `onItemSelect`), `menuName`, `onMenuClick`, `className`.
pub fn dropdown(props: &Props, instance: &Instance) -> Element {
    let r = Resolver::with_instance(props, instance);

    let root_base = r.layer("root", "base");
    let root_layout = r.layer("root", "layout");
    let trigger_base = r.layer("trigger", "base");
    let _trigger_layout = r.layer("trigger", "layout");
    let menu_base = r.layer("menu", "base");
    let menu_size = r.layer("menu", "size");
    let menu_layout = r.layer("menu", "layout");
    let menu_shape = r.layer("menu", "shape");
    let menu_shadow = r.layer("menu", "shadow");
    let menu_color = r.layer("menu", "color");
    let menu_position = r.layer("menu", "position");
    let menu_animation = r.layer("menu", "animation");
    let menu_visibility = r.layer("menu", "visibility");
    let item_base = r.layer("item", "base");
    let item_hover = r.layer("item", "hover");

    root_base.set("relative");
    root_layout.set("inline-block");
    trigger_base.set("cursor-pointer select-none p-2");
    menu_base.set("absolute z-50");
    menu_layout.set("flex flex-col");
    menu_shape.set("rounded-lg");
    menu_shadow.set("shadow-lg");
    menu_color.set("bg-white text-gray-800");
    menu_visibility.set("opacity-100 pointer-events-auto");
    menu_animation.set("transition-all duration-200");
    menu_position.set("top-full left-0");
    menu_size.set("min-w-40 text-sm");
    item_base.set("px-4 py-2 whitespace-nowrap");
    item_hover.set("hover:bg-gray-100 hover:rounded-lg cursor-pointer");

    let positions = [
        ("bottom", "top-full left-0"),
        ("top", "bottom-full left-0"),
        ("right", "left-full top-0"),
        ("left", "right-full top-0"),
        ("start", "left-0"),
        ("center", "-left-10"),
        ("end", "right-0"),
    ];
    for (key, class) in positions {
        menu_position.set_if(r.flag(key), class);
    }

    let sizes = [
        ("xs", "min-w-28 text-xs"),
        ("sm", "min-w-36 text-sm"),
        ("md", "min-w-44 text-base"),
        ("lg", "min-w-56 text-lg"),
        ("xl", "min-w-64 text-xl"),
    ];
    for (key, class) in sizes {
        menu_size.set_if(r.flag(key), class);
    }

    root_layout.set_if(r.flag("block"), "block w-full");
    root_layout.set_if(r.flag("inline"), "inline-block");
    root_layout.set_if(r.flag("centered"), "mx-auto");

    if r.flag("disabled") {
        trigger_base.set("opacity-50 pointer-events-none");
        menu_visibility.set("hidden");
    }

    for name in ["items", "menuName", "onMenuClick", "className"] {
        r.data(name);
    }

    r.state("reactHover");
    r.state("reactClick");
    if r.flag("reactHover") {
        r.state_with("reactHover", 1, false);
    }
    r.state_with("reactClick", 1, false);

    let hover = r.active("reactHover");
    let click = r.active("reactClick");

    let mut open_by = Trigger::empty();
    open_by.set(Trigger::HOVER, hover.as_ref().is_some_and(|s| s.get()));
    open_by.set(Trigger::CLICK, click.as_ref().is_some_and(|s| s.get()));

    let mut root = Element::new("div")
        .class(join_class(r.classes("root"), r.datum("className")))
        .attr(OPEN_BY, u32::from(open_by.bits()));

    if let Some(hover) = hover {
        let enter = hover.clone();
        root = root
            .attr("onMouseEnter", Prop::callback(move |_| enter.set(true)))
            .attr("onMouseLeave", Prop::callback(move |_| hover.set(false)));
    }

    let menu_click = r.datum("onMenuClick");
    let toggle = click.clone();
    let trigger = button(
        &Props::new()
            .set("className", r.classes("trigger"))
            .set("activeNone", true)
            .set("children", r.datum("menuName"))
            .set(
                "onClick",
                Prop::callback(move |_| {
                    if let Some(click) = &toggle {
                        click.toggle();
                    }
                    if let Some(handler) = &menu_click {
                        handler.call(&Prop::Null);
                    }
                }),
            ),
    );

    let mut menu = Element::new("div").class(r.classes("menu"));
    if !open_by.is_empty() {
        let items = r.datum("items");
        let item_class = r.classes("item");
        for item in items.as_ref().and_then(Prop::as_list).unwrap_or_default() {
            let Some(item) = item.as_map() else {
                continue;
            };
            menu = menu.child(menu_item(item, &item_class, click.clone()));
        }
    }

    root.child(trigger).child(menu)
}

/// A link item navigates on its own: clicking it neither closes the menu nor
/// calls `onItemSelect`.
fn menu_item(item: &Props, class: &str, click: Option<StateHandle>) -> Element {
    let el = Element::new("div")
        .class(class)
        .attr("role", "menuitem")
        .content(item.get("label").cloned());

    if let Some(href) = item.get("href").filter(|h| h.is_truthy()) {
        return el.attr("href", href.clone());
    }

    let on_select = item.get("onItemSelect").cloned();
    el.attr(
        "onClick",
        Prop::callback(move |_| {
            if let Some(click) = &click {
                click.set(false);
            }
            if let Some(handler) = &on_select {
                handler.call(&Prop::Null);
            }
        }),
    )
}

/// Interactions currently holding the menu open.
pub fn open_by(el: &Element) -> Trigger {
    let bits = el
        .get_attr(OPEN_BY)
        .and_then(Prop::as_number)
        .unwrap_or(0.0);
    Trigger::from_bits_truncate(bits as u8)
}

/// Routes `event` to the handlers of a rendered dropdown.
///
/// Events without a matching handler are ignored.
pub fn dispatch(el: &Element, event: DropdownEvent) {
    match event {
        DropdownEvent::MouseEnter => el.fire("onMouseEnter", &Prop::Null),
        DropdownEvent::MouseLeave => el.fire("onMouseLeave", &Prop::Null),
        DropdownEvent::TriggerClick => {
            if let Some(trigger) = el.find("button") {
                trigger.fire("onClick", &Prop::Null);
            }
        }
        DropdownEvent::ItemClick(index) => {
            if let Some(item) = menu_items(el).get(index) {
                item.fire("onClick", &Prop::Null);
            }
        }
    }
}

/// Visible menu items of a rendered dropdown.
pub fn menu_items(el: &Element) -> Vec<&Element> {
    el.children
        .get(1)
        .map(|menu| menu.children.iter().collect())
        .unwrap_or_default()
}
