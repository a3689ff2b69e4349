//! Scoped style layers.
//!
//! A layer is a single-value slot identified by `(scope, name)`. Every write
//! replaces the previous value. Scopes keep their layers in declaration
//! order, and that order drives [`flatten`].
//!
//! Both levels use [`IndexMap`] so iteration order is insertion order
//! regardless of hashing.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::trace;

// =============================================================================
// ScopeLayers - Layers of one sub-part
// =============================================================================

/// The layers of one scope, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeLayers {
    layers: IndexMap<String, Option<String>>,
}

impl ScopeLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the holder for `name` if it does not exist yet.
    pub fn declare(&mut self, name: &str) {
        if !self.layers.contains_key(name) {
            self.layers.insert(name.to_string(), None);
        }
    }

    /// Replaces the value of `name`, declaring it first if needed.
    pub fn write(&mut self, name: &str, value: Option<String>) {
        *self.layers.entry(name.to_string()).or_default() = value;
    }

    /// Current value of a layer. `None` if undeclared or unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.layers.get(name).and_then(|v| v.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    /// Layer names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Space-joined values in declaration order, empty values skipped.
    pub fn flatten(&self) -> String {
        flatten(self)
    }
}

/// Joins the non-empty values of one scope with single spaces.
pub fn flatten(scope: &ScopeLayers) -> String {
    scope
        .layers
        .values()
        .filter_map(|v| v.as_deref())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// LayerStore - Two-level ordered map
// =============================================================================

/// All scopes of one render, in the order they were first touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerStore {
    scopes: IndexMap<String, ScopeLayers>,
}

impl LayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a scope, creating it if needed.
    pub fn scope_or_create(&mut self, scope: &str) -> &mut ScopeLayers {
        self.scopes.entry(scope.to_string()).or_default()
    }

    pub fn scope(&self, scope: &str) -> Option<&ScopeLayers> {
        self.scopes.get(scope)
    }

    pub fn scope_names(&self) -> impl Iterator<Item = &str> {
        self.scopes.keys().map(String::as_str)
    }

    pub fn declare(&mut self, scope: &str, name: &str) {
        self.scope_or_create(scope).declare(name);
    }

    pub fn write(&mut self, scope: &str, name: &str, value: Option<String>) {
        self.scope_or_create(scope).write(name, value);
    }

    pub fn value(&self, scope: &str, name: &str) -> Option<&str> {
        self.scope(scope).and_then(|s| s.get(name))
    }

    /// Flattened classes of a scope. Unknown scopes give `""`.
    pub fn classes(&self, scope: &str) -> String {
        self.scope(scope).map(flatten).unwrap_or_default()
    }
}

// =============================================================================
// Layer - Setter handle
// =============================================================================

/// Setter for one declared layer.
///
/// Obtained from [`Resolver::layer`](crate::Resolver::layer). Handles are
/// cheap to clone and all write into the same store.
#[derive(Debug, Clone)]
pub struct Layer {
    store: Rc<RefCell<LayerStore>>,
    scope: Rc<str>,
    name: Rc<str>,
}

impl Layer {
    /// Declares `(scope, name)` in `store` and returns its setter.
    pub(crate) fn declare(store: &Rc<RefCell<LayerStore>>, scope: &str, name: &str) -> Self {
        store.borrow_mut().declare(scope, name);
        Self {
            store: Rc::clone(store),
            scope: Rc::from(scope),
            name: Rc::from(name),
        }
    }

    /// Replaces this layer's value.
    pub fn set(&self, value: impl Into<String>) {
        let value = value.into();
        trace!(scope = %self.scope, layer = %self.name, value = %value, "layer write");
        self.store
            .borrow_mut()
            .write(&self.scope, &self.name, Some(value));
    }

    /// Replaces this layer's value when `condition` holds.
    pub fn set_if(&self, condition: bool, value: impl Into<String>) -> bool {
        if condition {
            self.set(value);
        }
        condition
    }

    /// Empties this layer so it contributes nothing.
    pub fn clear(&self) {
        self.store.borrow_mut().write(&self.scope, &self.name, None);
    }

    /// Current value, if any.
    pub fn get(&self) -> Option<String> {
        self.store
            .borrow()
            .value(&self.scope, &self.name)
            .map(str::to_string)
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Rc<RefCell<LayerStore>> {
        Rc::new(RefCell::new(LayerStore::new()))
    }

    #[test]
    fn test_last_write_wins() {
        let store = store();
        let color = Layer::declare(&store, "root", "color");
        color.set("red");
        color.set("blue");
        assert_eq!(store.borrow().classes("root"), "blue");
    }

    #[test]
    fn test_declaration_order_not_write_order() {
        let store = store();
        let size = Layer::declare(&store, "root", "size");
        let color = Layer::declare(&store, "root", "color");
        color.set("c1");
        size.set("s1");
        assert_eq!(store.borrow().classes("root"), "s1 c1");
    }

    #[test]
    fn test_redeclare_reuses_holder() {
        let store = store();
        let a = Layer::declare(&store, "root", "size");
        a.set("s1");
        let b = Layer::declare(&store, "root", "size");
        assert_eq!(b.get().as_deref(), Some("s1"));
        assert_eq!(store.borrow().scope("root").unwrap().len(), 1);
    }

    #[test]
    fn test_layers_are_independent() {
        let store = store();
        let size = Layer::declare(&store, "root", "size");
        let color = Layer::declare(&store, "root", "color");
        color.set("c1");
        size.set("s1");
        size.set("s2");
        assert_eq!(color.get().as_deref(), Some("c1"));
    }

    #[test]
    fn test_scopes_are_independent() {
        let store = store();
        let root_size = Layer::declare(&store, "root", "size");
        let label_size = Layer::declare(&store, "label", "size");
        root_size.set("p-4");
        label_size.set("text-sm");
        assert_eq!(store.borrow().classes("root"), "p-4");
        assert_eq!(store.borrow().classes("label"), "text-sm");
    }

    #[test]
    fn test_flatten_skips_empty_and_unset() {
        let store = store();
        let a = Layer::declare(&store, "root", "a");
        let _b = Layer::declare(&store, "root", "b");
        let c = Layer::declare(&store, "root", "c");
        a.set("");
        c.set("x");
        assert_eq!(store.borrow().classes("root"), "x");
    }

    #[test]
    fn test_clear() {
        let store = store();
        let a = Layer::declare(&store, "root", "a");
        a.set("x");
        a.clear();
        assert_eq!(a.get(), None);
        assert_eq!(store.borrow().classes("root"), "");
    }

    #[test]
    fn test_unknown_scope_is_empty() {
        assert_eq!(LayerStore::new().classes("nowhere"), "");
        assert_eq!(flatten(&ScopeLayers::new()), "");
    }

    #[test]
    fn test_set_if() {
        let store = store();
        let shape = Layer::declare(&store, "root", "shape");
        assert!(!shape.set_if(false, "rounded-full"));
        assert_eq!(shape.get(), None);
        assert!(shape.set_if(true, "rounded-none"));
        assert_eq!(shape.get().as_deref(), Some("rounded-none"));
    }
}
