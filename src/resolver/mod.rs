//! Signal Resolver.
//!
//! Turns a bag of intent flags into one class string per scope, a bag of
//! pass-through data, and an arbitrated set of reactive state entries.
//!
//! A [`Resolver`] lives for one render. It owns a copy of the caller's props,
//! so consuming signals never touches caller data. Views handed back to the
//! caller are snapshots: holding one never blocks a later write.
//!
//! # Example
//!
//! ```rust
//! use signal_layers::{Props, Resolver};
//!
//! let props = Props::new().set("primary", true).set("label", "Go");
//! let r = Resolver::new(&props);
//!
//! let semantic = r.layer("root", "semantic");
//! let size = r.layer("root", "size");
//!
//! semantic.set("bg-black text-white");
//! size.set("px-4 py-2");
//! semantic.set_if(r.flag("primary"), "bg-blue-500 text-white");
//!
//! r.data("label");
//!
//! assert_eq!(r.classes("root"), "bg-blue-500 text-white px-4 py-2");
//! assert!(r.datum("label").is_some());
//! assert!(r.datum("primary").is_none());
//! ```

pub mod layers;
pub mod passthrough;
pub mod preset;
pub mod reactive;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{Presence, ResolverConfig};
use crate::types::{Prop, Props};

pub use layers::{flatten, Layer, LayerStore, ScopeLayers};
pub use preset::{Preset, PresetWrite};
pub use reactive::{Instance, StateHandle};

use reactive::StateRegistry;

// =============================================================================
// Resolver
// =============================================================================

/// Per-render resolution state.
pub struct Resolver {
    config: ResolverConfig,
    props: RefCell<Props>,
    layers: Rc<RefCell<LayerStore>>,
    data: RefCell<Props>,
    states: RefCell<StateRegistry>,
    instance: Instance,
}

impl Resolver {
    /// Creates a resolver over a copy of `props`.
    ///
    /// State entries get a private instance and do not persist. Use
    /// [`Resolver::with_instance`] for components with interactive state.
    pub fn new(props: &Props) -> Self {
        Self::with_instance(props, &Instance::new())
    }

    /// Creates a resolver for one render of `instance`.
    pub fn with_instance(props: &Props, instance: &Instance) -> Self {
        instance.begin_render();
        Self {
            config: ResolverConfig::default(),
            props: RefCell::new(props.clone()),
            layers: Rc::new(RefCell::new(LayerStore::new())),
            data: RefCell::new(Props::new()),
            states: RefCell::new(StateRegistry::default()),
            instance: instance.clone(),
        }
    }

    /// Replaces the configuration.
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn resolver_config(&self) -> &ResolverConfig {
        &self.config
    }

    // =========================================================================
    // Props
    // =========================================================================

    /// Snapshot of the working copy of the props.
    pub fn props(&self) -> Props {
        self.props.borrow().clone()
    }

    /// True when `key` is present and truthy in the working props.
    pub fn flag(&self, key: &str) -> bool {
        self.props.borrow().is_truthy(key)
    }

    /// Clone of a working prop.
    pub fn prop(&self, key: &str) -> Option<Prop> {
        self.props.borrow().get(key).cloned()
    }

    /// Removes a signal from the working props.
    pub fn take(&self, key: &str) -> Option<Prop> {
        self.props.borrow_mut().remove(key)
    }

    /// Keys still in the working props, in order.
    pub fn remaining(&self) -> Vec<String> {
        self.props.borrow().keys().map(str::to_string).collect()
    }

    fn consume(&self, key: &str) {
        if self.config.consume_signals {
            self.take(key);
        }
    }

    // =========================================================================
    // Layers
    // =========================================================================

    /// Declares layer `(scope, name)` and returns its setter.
    ///
    /// The first declaration fixes the layer's position in the scope's class
    /// string. Declaring again returns a setter for the same holder.
    pub fn layer(&self, scope: &str, name: &str) -> Layer {
        Layer::declare(&self.layers, scope, name)
    }

    /// Writes `value` to `layer` if signal `key` is set.
    ///
    /// The signal is consumed when `consume_signals` is on.
    pub fn signal(&self, layer: &Layer, key: &str, value: &str) -> bool {
        if !self.flag(key) {
            return false;
        }
        layer.set(value);
        self.consume(key);
        true
    }

    /// Applies every write of `preset` in order.
    pub fn apply_preset(&self, preset: &Preset) {
        for write in preset.writes() {
            self.layer(&write.scope, &write.layer).set(write.class.as_str());
        }
    }

    /// Applies `preset` if signal `key` is set.
    pub fn apply_preset_if(&self, key: &str, preset: &Preset) -> bool {
        if !self.flag(key) {
            return false;
        }
        self.apply_preset(preset);
        self.consume(key);
        true
    }

    /// Resolved class string of `scope`.
    pub fn classes(&self, scope: &str) -> String {
        self.layers.borrow().classes(scope)
    }

    /// Snapshot of all layers.
    pub fn layers(&self) -> LayerStore {
        self.layers.borrow().clone()
    }

    // =========================================================================
    // Pass-through data
    // =========================================================================

    /// Forwards prop `name` under the same name.
    pub fn data(&self, name: &str) -> bool {
        self.data_from(name, name)
    }

    /// Forwards prop `key` under `name`, using the configured presence.
    pub fn data_from(&self, name: &str, key: &str) -> bool {
        self.data_with(name, key, self.config.presence)
    }

    /// Forwards prop `key` under `name` with an explicit presence policy.
    pub fn data_with(&self, name: &str, key: &str, presence: Presence) -> bool {
        let forwarded = passthrough::forward(
            &self.props.borrow(),
            &mut self.data.borrow_mut(),
            name,
            key,
            presence,
        );
        if forwarded {
            self.consume(key);
        }
        forwarded
    }

    /// A forwarded value.
    pub fn datum(&self, name: &str) -> Option<Prop> {
        self.data.borrow().get(name).cloned()
    }

    /// Snapshot of the whole pass-through bag.
    pub fn data_bag(&self) -> Props {
        self.data.borrow().clone()
    }

    // =========================================================================
    // Reactive state
    // =========================================================================

    /// Registers state `name` with priority `0` and initial `false`.
    pub fn state(&self, name: &str) {
        self.state_with(name, 0, false);
    }

    /// Registers state `name`.
    ///
    /// The cell is allocated once per name per render. A nonzero `priority`
    /// makes this the active entry if it beats the current one strictly.
    pub fn state_with(&self, name: &str, priority: i32, initial: bool) {
        self.states
            .borrow_mut()
            .register(&self.instance, name, priority, initial);
    }

    /// Handle of any registered entry, active or not.
    pub fn hook(&self, name: &str) -> Option<StateHandle> {
        self.states.borrow().handle(name)
    }

    /// Handle of `name` if it is the active entry.
    pub fn active(&self, name: &str) -> Option<StateHandle> {
        self.states.borrow().active(name)
    }

    /// The active entry, if any.
    pub fn active_state(&self) -> Option<StateHandle> {
        self.states.borrow().active_handle()
    }

    /// Priority of the active entry, if any.
    pub fn active_priority(&self) -> Option<i32> {
        self.states.borrow().active_priority()
    }

    /// Current value of the active entry named `name`, `false` otherwise.
    pub fn is_active_on(&self, name: &str) -> bool {
        self.active(name).is_some_and(|s| s.get())
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }
}
