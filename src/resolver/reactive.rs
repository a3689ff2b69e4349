//! Reactive state entries.
//!
//! State cells live in an [`Instance`], which plays the role of a mounted
//! component: cells persist across renders and are handed out in call order,
//! the same way a hook-based host allocates state slots. Each render
//! registers entries by name in a per-render registry, which memoizes the
//! allocation per name and arbitrates which entry is active.
//!
//! # Arbitration
//!
//! Entries registered with priority `0` are allocated but never become
//! active. A nonzero priority activates the entry when nothing is active yet
//! or when it is strictly greater than the active priority. Ties keep the
//! first registered entry.
//!
//! ```rust
//! use signal_layers::{Props, Resolver};
//!
//! let r = Resolver::new(&Props::new());
//! r.state("hover");
//! r.state("click");
//! r.state_with("hover", 1, false);
//! r.state_with("click", 1, false);
//!
//! // Equal priority: the first registration stays active.
//! assert_eq!(r.active_state().map(|s| s.name().to_string()), Some("hover".into()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use spark_signals::{signal, Signal};
use tracing::{debug, warn};

// =============================================================================
// StateHandle
// =============================================================================

/// Accessor for one persistent state cell.
///
/// Clones share the same cell. Use [`StateHandle::ptr_eq`] to compare
/// identity.
#[derive(Clone)]
pub struct StateHandle {
    name: Rc<str>,
    cell: Rc<Signal<bool>>,
}

impl StateHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> bool {
        self.cell.get()
    }

    pub fn set(&self, value: bool) {
        self.cell.set(value);
    }

    pub fn toggle(&self) {
        self.set(!self.get());
    }

    /// The underlying signal, for deriveds and effects.
    pub fn signal(&self) -> &Signal<bool> {
        &self.cell
    }

    /// True when both handles point at the same cell.
    pub fn ptr_eq(&self, other: &StateHandle) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl std::fmt::Debug for StateHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateHandle")
            .field("name", &self.name)
            .field("value", &self.get())
            .finish()
    }
}

// =============================================================================
// Instance - Persistent slots of one mounted component
// =============================================================================

#[derive(Default)]
struct Slots {
    cells: Vec<Rc<Signal<bool>>>,
    cursor: usize,
    renders: usize,
}

/// A mounted component: owns state cells across renders.
///
/// Cells are identified by allocation order within a render, not by name.
/// Every render must therefore register its entries in the same order.
#[derive(Clone, Default)]
pub struct Instance {
    slots: Rc<RefCell<Slots>>,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a render: the next allocation gets slot `0` again.
    ///
    /// Called by [`Resolver::with_instance`](crate::Resolver::with_instance).
    pub fn begin_render(&self) {
        let mut slots = self.slots.borrow_mut();
        if slots.renders > 0 && slots.cursor != slots.cells.len() {
            warn!(
                used = slots.cursor,
                allocated = slots.cells.len(),
                "state order changed between renders"
            );
        }
        slots.cursor = 0;
        slots.renders += 1;
    }

    /// Number of cells allocated so far.
    pub fn slot_count(&self) -> usize {
        self.slots.borrow().cells.len()
    }

    /// Number of renders started on this instance.
    pub fn renders(&self) -> usize {
        self.slots.borrow().renders
    }

    /// Returns the cell at the cursor, creating it with `initial` on first use.
    fn next_cell(&self, initial: bool) -> Rc<Signal<bool>> {
        let mut slots = self.slots.borrow_mut();
        let index = slots.cursor;
        slots.cursor += 1;

        if let Some(cell) = slots.cells.get(index) {
            return Rc::clone(cell);
        }

        if slots.renders > 1 {
            warn!(slot = index, "state allocated after the first render");
        }
        let cell = Rc::new(signal(initial));
        slots.cells.push(Rc::clone(&cell));
        cell
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = self.slots.borrow();
        f.debug_struct("Instance")
            .field("cells", &slots.cells.len())
            .field("renders", &slots.renders)
            .finish()
    }
}

// =============================================================================
// StateRegistry - Per-render registration and arbitration
// =============================================================================

struct Entry {
    handle: StateHandle,
    initial: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Active {
    name: String,
    priority: i32,
}

/// Entries registered during one render.
#[derive(Default)]
pub(crate) struct StateRegistry {
    entries: IndexMap<String, Entry>,
    active: Option<Active>,
}

impl StateRegistry {
    /// Registers `name`, allocating its cell on the first call this render.
    pub(crate) fn register(&mut self, instance: &Instance, name: &str, priority: i32, initial: bool) {
        match self.entries.get(name) {
            Some(entry) if entry.initial != initial => {
                debug!(state = name, "initial value ignored, entry already registered");
            }
            Some(_) => {}
            None => {
                let handle = StateHandle {
                    name: Rc::from(name),
                    cell: instance.next_cell(initial),
                };
                self.entries
                    .insert(name.to_string(), Entry { handle, initial });
            }
        }

        if priority != 0 && self.active.as_ref().is_none_or(|a| priority > a.priority) {
            debug!(state = name, priority, "state entry activated");
            self.active = Some(Active {
                name: name.to_string(),
                priority,
            });
        }
    }

    /// Handle for any registered entry.
    pub(crate) fn handle(&self, name: &str) -> Option<StateHandle> {
        self.entries.get(name).map(|e| e.handle.clone())
    }

    /// Handle for `name` only if it is the active entry.
    pub(crate) fn active(&self, name: &str) -> Option<StateHandle> {
        match &self.active {
            Some(active) if active.name == name => self.handle(name),
            _ => None,
        }
    }

    pub(crate) fn active_handle(&self) -> Option<StateHandle> {
        self.active.as_ref().and_then(|a| self.handle(&a.name))
    }

    pub(crate) fn active_priority(&self) -> Option<i32> {
        self.active.as_ref().map(|a| a.priority)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
