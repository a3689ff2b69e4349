//! Pass-through data.
//!
//! Values forwarded verbatim from the working props into the data bag:
//! children, callbacks, ARIA attributes, literal field values. They never
//! take part in class resolution.

use crate::config::Presence;
use crate::types::Props;

/// Copies `source[key]` into `dest[name]` when it passes `presence`.
///
/// The value is cloned as a [`Prop`](crate::Prop), so reference-counted
/// values keep their identity. Returns whether anything was forwarded.
pub fn forward(source: &Props, dest: &mut Props, name: &str, key: &str, presence: Presence) -> bool {
    match source.get(key) {
        Some(value) if presence.admits(value) => {
            dest.insert(name, value.clone());
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prop;

    #[test]
    fn test_forward_truthy() {
        let source = Props::new().set("label", "Go").set("primary", true);
        let mut dest = Props::new();

        assert!(forward(&source, &mut dest, "label", "label", Presence::Truthy));
        assert_eq!(dest.get("label").and_then(Prop::as_str), Some("Go"));
        assert!(!dest.contains("primary"));
    }

    #[test]
    fn test_forward_renames() {
        let source = Props::new().set("ariaLabel", "Close");
        let mut dest = Props::new();

        assert!(forward(&source, &mut dest, "aria-label", "ariaLabel", Presence::Truthy));
        assert!(dest.contains("aria-label"));
        assert!(!dest.contains("ariaLabel"));
    }

    #[test]
    fn test_truthy_drops_zero_defined_keeps_it() {
        let source = Props::new().set("value", 0);
        let mut dest = Props::new();

        assert!(!forward(&source, &mut dest, "value", "value", Presence::Truthy));
        assert!(dest.is_empty());

        assert!(forward(&source, &mut dest, "value", "value", Presence::Defined));
        assert_eq!(dest.get("value").and_then(Prop::as_number), Some(0.0));
    }

    #[test]
    fn test_missing_key() {
        let mut dest = Props::new();
        assert!(!forward(&Props::new(), &mut dest, "x", "x", Presence::Defined));
        assert!(dest.is_empty());
    }

    #[test]
    fn test_callback_identity_preserved() {
        let on_click = Prop::callback(|_| {});
        let source = Props::new().set("onClick", on_click.clone());
        let mut dest = Props::new();

        forward(&source, &mut dest, "onClick", "onClick", Presence::Truthy);
        assert!(dest.get("onClick").unwrap().same(&on_click));
    }
}
