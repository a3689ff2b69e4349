//! # signal-layers
//!
//! Signal-driven class resolution for utility-CSS component libraries.
//!
//! Components receive a bag of "signal" props (boolean intent flags plus
//! content and native attributes). A [`Resolver`] turns them into:
//!
//! - one class string per scope, built from named single-value layers
//!   where the last write wins
//! - a bag of pass-through data forwarded verbatim
//! - an arbitrated set of reactive state entries backed by
//!   [spark-signals](https://github.com/RLabs-Inc/spark-signals)
//!
//! ## Example
//!
//! ```rust
//! use signal_layers::{Props, Resolver};
//!
//! let props = Props::new().set("lg", true).set("children", "Save");
//! let r = Resolver::new(&props);
//!
//! let size = r.layer("root", "size");
//! let color = r.layer("root", "color");
//!
//! color.set("bg-black text-white");
//! size.set("px-4 py-2");
//! size.set_if(r.flag("lg"), "px-6 py-3 text-lg");
//! r.data("children");
//!
//! assert_eq!(r.classes("root"), "px-6 py-3 text-lg bg-black text-white");
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Prop values and the props bag
//! - [`resolver`] - Layers, pass-through data, reactive state, presets
//! - [`config`] - Resolver options (presence policy, signal consumption)
//! - [`components`] - Reference components built on the resolver

pub mod components;
pub mod config;
pub mod error;
pub mod resolver;
pub mod types;

pub use types::*;

pub use config::{Presence, ResolverConfig};
pub use error::{ConfigError, PropsError};

pub use resolver::{
    flatten, Instance, Layer, LayerStore, Preset, PresetWrite, Resolver, ScopeLayers,
    StateHandle,
};

pub use components::{
    button, card, checkbox, dropdown, progress_bar, spinner, switch, DropdownEvent, Element,
    Trigger,
};
