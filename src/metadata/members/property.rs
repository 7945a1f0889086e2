use crate::metadata::{
    customattributes::{new_annotation_list, AnnotationList, AnnotationRc},
    method::MethodFlags,
    typesystem::TypeRef,
};

/// Represents a property declaration.
///
/// A property has no access flags of its own; the qualifiers shown for it are those of its
/// first accessor, which is why the accessor flags are kept in accessor order.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// The property name
    pub name: String,
    /// The type that declares this property
    pub declaring_type: TypeRef,
    /// The declared property type
    pub property_type: TypeRef,
    /// A getter exists
    pub can_read: bool,
    /// A setter exists
    pub can_write: bool,
    /// Flags of the accessors, getter first when present
    pub accessors: Vec<MethodFlags>,
    /// Custom attributes applied to this property
    pub custom_attributes: AnnotationList,
}

impl PropertyDescriptor {
    /// Create a property without accessors or attributes
    ///
    /// ## Arguments
    /// * `name`           - The property name
    /// * `declaring_type` - The type that declares the property
    /// * `property_type`  - The declared property type
    pub fn new(name: impl Into<String>, declaring_type: TypeRef, property_type: TypeRef) -> Self {
        PropertyDescriptor {
            name: name.into(),
            declaring_type,
            property_type,
            can_read: false,
            can_write: false,
            accessors: Vec::new(),
            custom_attributes: new_annotation_list(),
        }
    }

    /// Add a getter with the given flags
    #[must_use]
    pub fn with_getter(mut self, flags: MethodFlags) -> Self {
        self.can_read = true;
        self.accessors.push(flags);
        self
    }

    /// Add a setter with the given flags
    #[must_use]
    pub fn with_setter(mut self, flags: MethodFlags) -> Self {
        self.can_write = true;
        self.accessors.push(flags);
        self
    }

    /// Append a custom attribute
    #[must_use]
    pub fn with_attribute(self, attribute: AnnotationRc) -> Self {
        self.custom_attributes.push(attribute);
        self
    }

    /// Flags of the accessor that drives the property's qualifiers
    #[must_use]
    pub fn primary_accessor(&self) -> Option<&MethodFlags> {
        self.accessors.first()
    }
}
