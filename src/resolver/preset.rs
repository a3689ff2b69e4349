//! Composite signals.
//!
//! A preset bundles several layer writes behind one signal, e.g. a `cta`
//! button that sets semantic, size, shape and shadow together.

/// One `(scope, layer, class)` write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetWrite {
    pub scope: String,
    pub layer: String,
    pub class: String,
}

/// An ordered list of layer writes.
///
/// ```rust
/// use signal_layers::{Preset, Props, Resolver};
///
/// let cta = Preset::new()
///     .write("root", "semantic", "bg-blue-600 text-white")
///     .write("root", "shape", "rounded-full");
///
/// let r = Resolver::new(&Props::new().set("cta", true));
/// r.apply_preset_if("cta", &cta);
/// assert_eq!(r.classes("root"), "bg-blue-600 text-white rounded-full");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preset {
    writes: Vec<PresetWrite>,
}

impl Preset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(mut self, scope: &str, layer: &str, class: &str) -> Self {
        self.writes.push(PresetWrite {
            scope: scope.to_string(),
            layer: layer.to_string(),
            class: class.to_string(),
        });
        self
    }

    pub fn writes(&self) -> &[PresetWrite] {
        &self.writes
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}
