//! CustomAttribute-specific types and data structures.
//!
//! An attribute instance is rendered by reading its declared properties and fields back from
//! the attribute object itself, so the instance keeps the declared member names next to an
//! [`Inspect`] handle on the object they are read from.

use std::{fmt, sync::Arc};

use crate::metadata::{
    inspect::{Inspect, ObjectSnapshot},
    typesystem::{TypeRef, Value},
};

/// A reference-counted pointer to an `AnnotationInstance`
pub type AnnotationRc = Arc<AnnotationInstance>;
/// A vector that holds a list of `AnnotationInstance` instances for storage on parent objects
pub type AnnotationList = Arc<boxcar::Vec<AnnotationRc>>;

/// Create an empty, shareable annotation list
#[must_use]
pub fn new_annotation_list() -> AnnotationList {
    Arc::new(boxcar::Vec::new())
}

/// Represents an instantiated custom attribute attached to a type, member or parameter
pub struct AnnotationInstance {
    /// The attribute type
    pub ty: TypeRef,
    /// Public properties declared by the attribute type, in declaration order
    pub properties: Vec<String>,
    /// Public fields declared by the attribute type, in declaration order
    pub fields: Vec<String>,
    /// The attribute object the property and field values are read from
    pub target: Arc<dyn Inspect>,
}

impl AnnotationInstance {
    /// Create a new attribute instance over an arbitrary attribute object
    ///
    /// ## Arguments
    /// * `ty`         - The attribute type
    /// * `properties` - Declared property names, in order
    /// * `fields`     - Declared field names, in order
    /// * `target`     - The object the values are read from
    pub fn new(
        ty: TypeRef,
        properties: Vec<String>,
        fields: Vec<String>,
        target: Arc<dyn Inspect>,
    ) -> Self {
        AnnotationInstance {
            ty,
            properties,
            fields,
            target,
        }
    }

    /// Start building an attribute instance from captured values
    ///
    /// ## Arguments
    /// * `ty` - The attribute type
    #[must_use]
    pub fn builder(ty: TypeRef) -> AnnotationBuilder {
        AnnotationBuilder {
            ty,
            snapshot: ObjectSnapshot::new(),
            properties: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Returns `true` if the attribute type declares any property or field
    #[must_use]
    pub fn has_members(&self) -> bool {
        !self.properties.is_empty() || !self.fields.is_empty()
    }
}

impl fmt::Debug for AnnotationInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationInstance")
            .field("ty", &self.ty)
            .field("properties", &self.properties)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AnnotationInstance`]s whose values are known up front.
///
/// # Examples
///
/// ```rust
/// use cilreflect::metadata::{customattributes::AnnotationInstance, typesystem::TypeRef};
///
/// let obsolete = AnnotationInstance::builder(TypeRef::new("System", "ObsoleteAttribute"))
///     .property("Message", "use Bar instead")
///     .property("IsError", false)
///     .build();
///
/// assert_eq!(obsolete.properties, vec!["Message", "IsError"]);
/// assert!(obsolete.fields.is_empty());
/// ```
pub struct AnnotationBuilder {
    ty: TypeRef,
    snapshot: ObjectSnapshot,
    properties: Vec<String>,
    fields: Vec<String>,
}

impl AnnotationBuilder {
    /// Declare a property and its value
    #[must_use]
    pub fn property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.properties.push(name.to_string());
        self.snapshot = self.snapshot.with_property(name, value);
        self
    }

    /// Declare a field and its value
    #[must_use]
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.push(name.to_string());
        self.snapshot = self.snapshot.with_field(name, value);
        self
    }

    /// Finish the instance
    #[must_use]
    pub fn build(self) -> AnnotationRc {
        Arc::new(AnnotationInstance {
            ty: self.ty,
            properties: self.properties,
            fields: self.fields,
            target: Arc::new(self.snapshot),
        })
    }
}
