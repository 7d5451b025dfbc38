use std::collections::HashMap;
use thiserror::Error;

/// Error raised by a host while reading a single property entry.
///
/// Host project models are known to fail per-entry (transient access errors
/// unrelated to the validity of the rest of the bag), so this error is always
/// recovered locally by [`read_properties`] and never escalates on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("property read failed: {0}")]
pub struct PropertyReadError(pub String);

/// Value of a single host property entry.
///
/// Host bags are untyped; this is the small tagged subset resolution cares
/// about. Only `Text` values are usable as path candidates. `Bag` carries a
/// nested property set (the host exposes the active build configuration this
/// way on some project types).
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Flag(bool),
    Bag(PropertyBag),
    Null,
}

impl PropertyValue {
    /// Return the textual value, or `None` for non-text entries.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Return the nested bag, or `None` for non-bag entries.
    pub fn as_bag(&self) -> Option<&PropertyBag> {
        match self {
            PropertyValue::Bag(b) => Some(b),
            _ => None,
        }
    }
}

/// A host-provided enumerable of `(name, value)` property entries.
///
/// Contract: entries must be enumerated on the host's single serialized
/// coordination thread (the same thread the host uses for all UI-model
/// access). Callers must not enumerate concurrently with other host-model
/// access from a different thread. Individual entries may fail to read;
/// such failures are reported inline rather than aborting enumeration.
pub trait PropertySource {
    fn entries(&self) -> Box<dyn Iterator<Item = Result<(String, PropertyValue), PropertyReadError>> + '_>;
}

/// Read-only mapping from property name to value describing one host-model
/// entity (project, item, or configuration). Enumeration order is irrelevant
/// to resolution; resolution never mutates a bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    map: HashMap<String, PropertyValue>,
}

impl PropertyBag {
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.map.get(name)
    }

    /// Textual value for `name`, or `None` if absent or not text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropertyValue::as_text)
    }

    /// Nested bag for `name`, or `None` if absent or not a bag.
    pub fn bag(&self, name: &str) -> Option<&PropertyBag> {
        self.get(name).and_then(PropertyValue::as_bag)
    }
}

impl FromIterator<(String, PropertyValue)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        PropertyBag {
            map: iter.into_iter().collect(),
        }
    }
}

/// Read every entry `source` exposes into an in-memory [`PropertyBag`].
///
/// Behaviour:
/// - An absent (`None`) source yields an empty bag rather than failing.
/// - An entry whose read fails is skipped; the read continues with the next
///   entry. The skip is logged at debug level.
/// - Later entries win on duplicate names (host bags have unique keys, so
///   this does not arise in practice).
pub fn read_properties(source: Option<&dyn PropertySource>) -> PropertyBag {
    let Some(source) = source else {
        return PropertyBag::default();
    };

    let mut map = HashMap::new();
    for entry in source.entries() {
        match entry {
            Ok((name, value)) => {
                map.insert(name, value);
            }
            Err(e) => {
                tracing::debug!("skipping unreadable property entry: {e}");
            }
        }
    }
    PropertyBag { map }
}
