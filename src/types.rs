//! Core types for signal-layers.
//!
//! - [`Prop`] - a dynamically typed prop value
//! - [`Props`] - an insertion-ordered bag of props
//! - [`Callback`] - a shared callback carried as a prop

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{json_kind, PropsError};

// =============================================================================
// Callback
// =============================================================================

/// Callback carried through props (click handlers, select handlers, ...).
///
/// Receives the value the component reports, or [`Prop::Null`].
pub type Callback = Rc<dyn Fn(&Prop)>;

// =============================================================================
// Prop - A single prop value
// =============================================================================

/// A prop value.
///
/// Reference-counted variants (`Map`, `Callback`, `Object`) keep their
/// identity when a bag is copied, so forwarded values are the same
/// allocation the caller passed in.
#[derive(Clone, Default)]
pub enum Prop {
    /// Explicitly empty value.
    #[default]
    Null,
    /// Boolean flag, the usual shape of a signal.
    Bool(bool),
    /// Numeric value (min, max, progress, ...).
    Number(f64),
    /// String value (labels, class names, ids, ...).
    Str(String),
    /// Ordered list of values (menu items, ...).
    List(Vec<Prop>),
    /// Nested bag.
    Map(Rc<Props>),
    /// Callback function.
    Callback(Callback),
    /// Opaque host value (rendered children, refs, ...).
    Object(Rc<dyn Any>),
}

impl Prop {
    /// Wrap a closure as a callback prop.
    pub fn callback(f: impl Fn(&Prop) + 'static) -> Self {
        Self::Callback(Rc::new(f))
    }

    /// Wrap an arbitrary host value as an opaque prop.
    pub fn object<T: Any>(value: T) -> Self {
        Self::Object(Rc::new(value))
    }

    /// Truthiness as signals see it.
    ///
    /// `Null`, `false`, `0`, `NaN` and `""` are falsy. Everything else is
    /// truthy, including empty lists and empty maps.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::List(_) | Self::Map(_) | Self::Callback(_) | Self::Object(_) => true,
        }
    }

    /// Anything but `Null`.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Null)
    }

    /// Identity comparison.
    ///
    /// Scalars and lists compare by value; maps, callbacks and objects
    /// compare by pointer.
    pub fn same(&self, other: &Prop) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same(y))
            }
            (Self::Map(a), Self::Map(b)) => Rc::ptr_eq(a, b),
            (Self::Callback(a), Self::Callback(b)) => Rc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Prop]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Props> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            Self::Callback(f) => Some(f),
            _ => None,
        }
    }

    /// Downcast an opaque object.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Object(obj) => obj.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Call the value if it is a callback. Other values are ignored.
    pub fn call(&self, arg: &Prop) {
        if let Self::Callback(f) = self {
            f(arg);
        }
    }

    fn from_json_value(key: &str, value: &Value) -> Result<Self, PropsError> {
        Ok(match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.as_f64().ok_or_else(|| PropsError::Number {
                key: key.to_string(),
            })?),
            Value::String(s) => Self::Str(s.clone()),
            Value::Array(items) => Self::List(
                items
                    .iter()
                    .map(|item| Self::from_json_value(key, item))
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(_) => Self::Map(Rc::new(Props::from_json(value)?)),
        })
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::Object(_) => f.write_str("Object(..)"),
        }
    }
}

// =============================================================================
// From implementations for ergonomic construction
// =============================================================================

impl From<bool> for Prop {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Prop {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Prop {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u32> for Prop {
    fn from(n: u32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Prop {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Prop {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Prop>> for Prop {
    fn from(items: Vec<Prop>) -> Self {
        Self::List(items)
    }
}

impl From<Props> for Prop {
    fn from(props: Props) -> Self {
        Self::Map(Rc::new(props))
    }
}

impl From<Callback> for Prop {
    fn from(f: Callback) -> Self {
        Self::Callback(f)
    }
}

/// `None` is `Null`.
impl<T: Into<Prop>> From<Option<T>> for Prop {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

// =============================================================================
// Props - Insertion-ordered bag
// =============================================================================

/// A bag of props keyed by name.
///
/// Iteration follows insertion order.
///
/// # Example
///
/// ```rust
/// use signal_layers::Props;
///
/// let props = Props::new()
///     .set("primary", true)
///     .set("label", "Go");
///
/// assert!(props.get("primary").is_some_and(|p| p.is_truthy()));
/// assert_eq!(props.get("label").and_then(|p| p.as_str()), Some("Go"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Props {
    entries: IndexMap<String, Prop>,
}

impl Props {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prop, returning the bag for chaining.
    pub fn set(mut self, key: &str, value: impl Into<Prop>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    /// Inserts a prop in place, returning the previous value.
    pub fn insert(&mut self, key: &str, value: impl Into<Prop>) -> Option<Prop> {
        self.entries.insert(key.to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Prop> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a prop, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Prop> {
        self.entries.shift_remove(key)
    }

    /// True when the key is present and truthy.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(Prop::is_truthy)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prop)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds a bag from a JSON object.
    ///
    /// Nested objects become [`Prop::Map`], arrays become [`Prop::List`].
    pub fn from_json(value: &Value) -> Result<Self, PropsError> {
        let Value::Object(map) = value else {
            return Err(PropsError::NotAnObject {
                found: json_kind(value),
            });
        };

        let mut props = Self::new();
        for (key, value) in map {
            props.insert(key, Prop::from_json_value(key, value)?);
        }
        Ok(props)
    }

    /// Parses a JSON string into a bag.
    pub fn from_json_str(s: &str) -> Result<Self, PropsError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }
}

impl<K: Into<String>, V: Into<Prop>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
