//! Access to live objects for value probing.
//!
//! The renderer never knows how an object is laid out. Whatever owns the live instance (a
//! debugger, an emulator, a deserialized snapshot) exposes it through [`Inspect`], and the
//! renderer only ever reads fields and properties or invokes zero-argument methods by name.
//!
//! [`ObjectSnapshot`] is a ready-made implementation backed by captured name/value pairs, which
//! is also what custom attribute instances are usually built from.

use crate::{metadata::typesystem::Value, Error, Result};

/// A live object whose members can be read by name.
///
/// Every method has a default that reports [`Error::MemberNotFound`], so implementors only
/// provide what they can actually serve. Implementations may fail or even panic; the renderer
/// treats both as "no value" and never lets either escape a render call.
pub trait Inspect: Send + Sync {
    /// Read the current value of a field
    ///
    /// # Errors
    /// Returns an error if the field does not exist or cannot be read.
    fn read_field(&self, name: &str) -> Result<Value> {
        Err(Error::MemberNotFound(name.to_string()))
    }

    /// Read the current value of a property through its getter
    ///
    /// # Errors
    /// Returns an error if the property does not exist or its getter faults.
    fn read_property(&self, name: &str) -> Result<Value> {
        Err(Error::MemberNotFound(name.to_string()))
    }

    /// Invoke a method that takes no arguments and return its result
    ///
    /// # Errors
    /// Returns an error if the method does not exist or faults.
    fn invoke(&self, method: &str) -> Result<Value> {
        Err(Error::MemberNotFound(method.to_string()))
    }
}

/// An [`Inspect`] implementation over captured values.
///
/// Members are kept in insertion order.
///
/// # Examples
///
/// ```rust
/// use cilreflect::metadata::{Inspect, ObjectSnapshot, typesystem::Value};
///
/// let person = ObjectSnapshot::new()
///     .with_field("Count", 42i64)
///     .with_property("Name", "Bob")
///     .with_result("GetName", "Bob");
///
/// assert_eq!(person.read_field("Count")?, Value::I8(42));
/// assert!(person.read_field("Missing").is_err());
/// # Ok::<(), cilreflect::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSnapshot {
    fields: Vec<(String, Value)>,
    properties: Vec<(String, Value)>,
    results: Vec<(String, Value)>,
}

impl ObjectSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a field value
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Capture a property value
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Capture the result of a zero-argument method
    #[must_use]
    pub fn with_result(mut self, method: impl Into<String>, value: impl Into<Value>) -> Self {
        self.results.push((method.into(), value.into()));
        self
    }

    /// Names of all captured fields, in insertion order
    #[cfg(test)]
    pub(crate) fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Names of all captured properties, in insertion order
    #[cfg(test)]
    pub(crate) fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }

    fn lookup(entries: &[(String, Value)], name: &str) -> Result<Value> {
        entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| Error::MemberNotFound(name.to_string()))
    }
}

impl Inspect for ObjectSnapshot {
    fn read_field(&self, name: &str) -> Result<Value> {
        Self::lookup(&self.fields, name)
    }

    fn read_property(&self, name: &str) -> Result<Value> {
        Self::lookup(&self.properties, name)
    }

    fn invoke(&self, method: &str) -> Result<Value> {
        Self::lookup(&self.results, method)
    }
}
