//! Property tests for the resolver's layer, data and state contracts.

use proptest::prelude::*;
use signal_layers::{Prop, Props, Resolver};

fn token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,10}"
}

/// Distinct layer names with one value each.
fn layer_values() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[a-z]{1,6}", token(), 1..8)
        .prop_map(|m| m.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn scalar_prop() -> impl Strategy<Value = Prop> {
    prop_oneof![
        Just(Prop::Null),
        any::<bool>().prop_map(Prop::Bool),
        (-3i32..3).prop_map(Prop::from),
        "[a-z]{0,3}".prop_map(Prop::from),
    ]
}

proptest! {
    #[test]
    fn last_write_wins(v1 in token(), v2 in token()) {
        let r = Resolver::new(&Props::new());
        let layer = r.layer("root", "color");
        layer.set(v1);
        layer.set(v2.clone());
        prop_assert_eq!(r.classes("root"), v2);
    }

    #[test]
    fn writes_do_not_cross_layers(
        layers in layer_values(),
        target in any::<prop::sample::Index>(),
        value in token(),
    ) {
        let r = Resolver::new(&Props::new());
        let handles: Vec<_> = layers.iter().map(|(name, _)| r.layer("root", name)).collect();
        for (handle, (_, v)) in handles.iter().zip(&layers) {
            handle.set(v.as_str());
        }

        let i = target.index(layers.len());
        handles[i].set(value.as_str());

        for (j, (handle, (_, v))) in handles.iter().zip(&layers).enumerate() {
            if j != i {
                prop_assert_eq!(handle.get(), Some(v.clone()));
            }
        }
        prop_assert_eq!(handles[i].get(), Some(value));
    }

    #[test]
    fn flatten_uses_declaration_order(
        layers in layer_values(),
        shift in any::<usize>(),
    ) {
        let r = Resolver::new(&Props::new());
        let handles: Vec<_> = layers.iter().map(|(name, _)| r.layer("root", name)).collect();

        // Write in a rotated order so write order differs from declaration order.
        let shift = shift % layers.len();
        for k in 0..layers.len() {
            let i = (k + shift) % layers.len();
            handles[i].set("placeholder");
            handles[i].set(layers[i].1.as_str());
        }

        let expected: Vec<&str> = layers.iter().map(|(_, v)| v.as_str()).collect();
        prop_assert_eq!(r.classes("root"), expected.join(" "));
    }

    #[test]
    fn flatten_drops_empty_and_unset(
        entries in prop::collection::vec(prop::option::of(prop_oneof![Just(String::new()), token()]), 0..8),
    ) {
        let r = Resolver::new(&Props::new());
        for (i, value) in entries.iter().enumerate() {
            let layer = r.layer("root", &format!("l{i}"));
            if let Some(value) = value {
                layer.set(value.as_str());
            }
        }

        let expected: Vec<&str> = entries
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .collect();
        prop_assert_eq!(r.classes("root"), expected.join(" "));
    }

    #[test]
    fn passthrough_fidelity(value in scalar_prop()) {
        let r = Resolver::new(&Props::new().set("field", value.clone()));
        r.data("field");

        match r.datum("field") {
            Some(forwarded) => {
                prop_assert!(value.is_truthy());
                prop_assert!(forwarded.same(&value));
            }
            None => prop_assert!(!value.is_truthy()),
        }
        prop_assert!(r.datum("absent").is_none());
    }

    #[test]
    fn highest_priority_is_active(order in Just(vec![0, 1, 2]).prop_shuffle()) {
        let r = Resolver::new(&Props::new());
        for p in &order {
            r.state_with(&format!("p{p}"), *p, false);
        }
        let active = r.active_state().map(|s| s.name().to_string());
        prop_assert_eq!(active.as_deref(), Some("p2"));
    }

    #[test]
    fn equal_priority_keeps_first(priority in prop_oneof![-5i32..0, 1i32..6]) {
        let r = Resolver::new(&Props::new());
        r.state_with("first", priority, false);
        r.state_with("second", priority, false);
        let active = r.active_state().map(|s| s.name().to_string());
        prop_assert_eq!(active.as_deref(), Some("first"));
    }

    #[test]
    fn one_cell_per_name(repeats in 1usize..6, priorities in prop::collection::vec(-2i32..3, 6)) {
        let r = Resolver::new(&Props::new());
        r.state_with("open", priorities[0], false);
        let first = r.hook("open").unwrap();
        for p in priorities.iter().take(repeats) {
            r.state_with("open", *p, true);
        }
        let last = r.hook("open").unwrap();

        prop_assert!(first.ptr_eq(&last));
        prop_assert_eq!(r.instance().slot_count(), 1);
        prop_assert!(!last.get());
    }
}

#[test]
fn callbacks_pass_through_by_reference() {
    let f = Prop::callback(|_| {});
    let r = Resolver::new(&Props::new().set("onClick", f.clone()));
    r.data("onClick");
    assert!(r.datum("onClick").unwrap().same(&f));
}
