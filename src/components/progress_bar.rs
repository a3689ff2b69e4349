//! ProgressBar.
//!
//! `value` and `max` are forwarded with [`Presence::Defined`], so a progress
//! of `0` is kept instead of being read as "not set".

use crate::config::{Presence, ResolverConfig};
use crate::resolver::Resolver;
use crate::types::{Prop, Props};

use super::Element;

const SCOPE: &str = "progress";
const DEFAULT_MAX: f64 = 100.0;

const TRACK_ROUNDED: &str = "[&::-webkit-progress-bar]:rounded-full \
                             [&::-webkit-progress-value]:rounded-full \
                             [&::-moz-progress-bar]:rounded-full";
const TRACK_SQUARE: &str = "[&::-webkit-progress-bar]:rounded-none \
                            [&::-webkit-progress-value]:rounded-none \
                            [&::-moz-progress-bar]:rounded-none";

fn fill(color: &str) -> String {
    format!(
        "[&::-webkit-progress-bar]:bg-slate-300 \
         [&::-webkit-progress-value]:bg-{color} \
         [&::-moz-progress-bar]:bg-{color}"
    )
}

/// Reads a numeric prop, accepting numeric strings.
fn number(prop: Option<Prop>) -> Option<f64> {
    match prop? {
        Prop::Number(n) if n.is_finite() => Some(n),
        Prop::Str(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Renders a `<progress>` element.
///
/// `value` is clamped to `0..=max`; `max` defaults to 100.
pub fn progress_bar(props: &Props) -> Element {
    let r = Resolver::new(props).config(
        ResolverConfig::new()
            .presence(Presence::Defined)
            .consume_signals(true),
    );

    let base = r.layer(SCOPE, "base");
    let size = r.layer(SCOPE, "size");
    let color = r.layer(SCOPE, "color");
    let shape = r.layer(SCOPE, "shape");
    let layout = r.layer(SCOPE, "layout");
    let escape = r.layer(SCOPE, "escape");

    base.set(
        "[&::-webkit-progress-bar]:transition-all \
         [&::-webkit-progress-value]:transition-all \
         [&::-moz-progress-bar]:transition-all",
    );
    shape.set(TRACK_ROUNDED);
    color.set(fill("violet-400"));
    size.set("h-2 w-32");
    layout.set("block");

    r.signal(&size, "sm", "h-1 w-16");
    r.signal(&size, "md", "h-2 w-32");
    r.signal(&size, "lg", "h-3 w-48");
    r.signal(&size, "xl", "h-4 w-64");
    r.signal(&size, "responsive", "h-2 w-full");

    r.signal(&shape, "square", TRACK_SQUARE);

    r.signal(&color, "primary", &fill("blue-500"));
    r.signal(&color, "success", &fill("green-500"));
    r.signal(&color, "danger", &fill("red-500"));
    r.signal(&color, "neutral", &fill("gray-500"));

    r.signal(&layout, "inline", "inline-block");
    r.signal(&layout, "block", "block");
    r.signal(&layout, "centered", "mx-auto");

    r.signal(&color, "transparent", "[&::-webkit-progress-bar]:bg-transparent");

    for key in ["class", "className"] {
        if let Some(class) = r.prop(key).filter(Prop::is_truthy) {
            if let Some(class) = class.as_str() {
                escape.set(class);
            }
            r.take(key);
        }
    }

    r.data("value");
    r.data("max");

    let max = number(r.datum("max"))
        .filter(|m| *m > 0.0)
        .unwrap_or(DEFAULT_MAX);
    let value = number(r.datum("value")).unwrap_or(0.0).clamp(0.0, max);

    Element::new("progress")
        .class(r.classes(SCOPE))
        .attr("value", value)
        .attr("max", max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr_number(el: &Element, key: &str) -> Option<f64> {
        el.get_attr(key).and_then(Prop::as_number)
    }

    #[test]
    fn test_zero_value_is_kept() {
        let el = progress_bar(&Props::new().set("value", 0));
        assert_eq!(attr_number(&el, "value"), Some(0.0));
        assert_eq!(attr_number(&el, "max"), Some(100.0));
    }

    #[test]
    fn test_value_clamped_to_max() {
        let el = progress_bar(&Props::new().set("value", 150).set("max", 120));
        assert_eq!(attr_number(&el, "value"), Some(120.0));

        let el = progress_bar(&Props::new().set("value", -5));
        assert_eq!(attr_number(&el, "value"), Some(0.0));
    }

    #[test]
    fn test_numeric_string_value() {
        let el = progress_bar(&Props::new().set("value", "42.5"));
        assert_eq!(attr_number(&el, "value"), Some(42.5));

        let el = progress_bar(&Props::new().set("value", "lots"));
        assert_eq!(attr_number(&el, "value"), Some(0.0));
    }

    #[test]
    fn test_default_classes() {
        let el = progress_bar(&Props::new());
        assert!(el.class.contains("h-2 w-32"));
        assert!(el.class.contains("bg-violet-400"));
        assert!(el.class.ends_with("block"));
    }

    #[test]
    fn test_color_and_size_signals() {
        let el = progress_bar(&Props::new().set("success", true).set("lg", true).set("square", true));
        assert!(el.class.contains("h-3 w-48"));
        assert!(el.class.contains("bg-green-500"));
        assert!(!el.class.contains("bg-violet-400"));
        assert!(el.class.contains("rounded-none"));
        assert!(!el.class.contains("rounded-full"));
    }

    #[test]
    fn test_class_name_escape() {
        let el = progress_bar(&Props::new().set("className", "my-2"));
        assert!(el.class.ends_with("block my-2"));
    }
}
