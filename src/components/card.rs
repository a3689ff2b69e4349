//! Card.
//!
//! Scopes: `card`, `image`, `title`, `description`, `button`. The same layer
//! name (`size`, `layout`, `base`) appears in several scopes without
//! colliding.

use crate::resolver::Resolver;
use crate::types::{Prop, Props};

use super::{button, Element};

/// Renders a card with optional image, title, description and action button.
///
/// Data: `image`, `imageName`, `title`, `description`, `buttonLabel`,
/// `onButtonClick`.
pub fn card(props: &Props) -> Element {
    let r = Resolver::new(props);

    let base = r.layer("card", "base");
    let layout = r.layer("card", "layout");
    let spacing = r.layer("card", "spacing");
    let border = r.layer("card", "border");
    let shadow = r.layer("card", "shadow");
    let hover = r.layer("card", "hover");
    let animation = r.layer("card", "animation");

    base.set("bg-gray-800 text-white rounded-lg");
    layout.set("flex flex-col justify-items-start");
    spacing.set("p-0 gap-4");
    border.set("border-0");
    shadow.set("shadow-2xl shadow-gray-800/80");
    hover.set("hover:scale-100");
    animation.set("transition-all duration-300");

    let image_base = r.layer("image", "base");
    let image_size = r.layer("image", "size");
    let image_aspect = r.layer("image", "aspect");
    image_base.set("rounded-lg object-cover");
    image_size.set("w-full h-auto");
    image_aspect.set("aspect-auto");

    let title_base = r.layer("title", "base");
    let title_size = r.layer("title", "size");
    let title_layout = r.layer("title", "layout");
    title_base.set("font-light font-sans px-4 py-0");
    title_size.set("text-2xl");

    let description_base = r.layer("description", "base");
    let description_size = r.layer("description", "size");
    let description_layout = r.layer("description", "layout");
    description_base.set("font-light font-sans px-4 py-0");
    description_size.set("text-lg");

    r.layer("button", "base").set("font-sans mb-2 cursor-pointer");

    hover.set_if(r.flag("interactive"), "cursor-pointer hover:scale-[1.01]");

    let sizes = [
        ("xs", "text-md", "text-xs", "gap-2", "w-auto h-24"),
        ("sm", "text-lg", "text-md", "gap-4", "w-auto h-32"),
        ("md", "text-2xl", "text-lg", "gap-6", "w-auto h-48"),
        ("lg", "text-3xl", "text-xl", "gap-8", "w-auto h-64"),
        ("xl", "text-4xl", "text-2xl", "gap-10", "w-auto h-96"),
    ];
    for (key, title, description, gap, image) in sizes {
        if r.flag(key) {
            title_size.set(title);
            description_size.set(description);
            spacing.set(gap);
            image_size.set(image);
        }
    }

    let alignments = [
        ("centered", "text-center"),
        ("rightAligned", "text-right"),
        ("leftAligned", "text-left"),
    ];
    for (key, class) in alignments {
        if r.flag(key) {
            title_layout.set(class);
            description_layout.set(class);
        }
    }

    if r.flag("imageCircle") {
        image_base.set("rounded-full aspect-square p-0 object-cover");
        layout.set("flex flex-col justify-center items-center");
    }
    image_aspect.set_if(r.flag("imageLandscape"), "aspect-video");

    if r.flag("transparent") {
        base.set("bg-transparent");
        shadow.set("shadow-none");
    }

    for name in ["image", "imageName", "title", "description", "buttonLabel", "onButtonClick"] {
        r.data(name);
    }

    let mut root = Element::new("div").class(r.classes("card"));

    if let Some(src) = r.datum("image") {
        let alt = r.datum("imageName").unwrap_or(Prop::from(""));
        root = root.child(
            Element::new("img")
                .class(r.classes("image"))
                .attr("src", src)
                .attr("alt", alt),
        );
    }

    if let Some(title) = r.datum("title") {
        root = root.child(
            Element::new("h2")
                .class(r.classes("title"))
                .content(Some(title)),
        );
    }

    if let Some(description) = r.datum("description") {
        root = root.child(
            Element::new("p")
                .class(r.classes("description"))
                .content(Some(description)),
        );
    }

    if let Some(label) = r.datum("buttonLabel") {
        let mut button_props = Props::new()
            .set("children", label)
            .set("className", r.classes("button"));
        if let Some(on_click) = r.datum("onButtonClick") {
            button_props.insert("onClick", on_click);
        }
        root = root.child(button(&button_props));
    }

    root
}
