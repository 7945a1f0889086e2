//! Method and constructor descriptors.
//!
//! Methods and constructors share the same flag groups ([`MethodFlags`]) which also describe
//! property and event accessors. The descriptors here are what the walker hands to the
//! renderer; they carry the declared shape only, values are obtained by probing a live
//! instance at render time.
//!
//! # Key Types
//! - [`MethodDescriptor`] - A method with return type, parameters and return-value attributes
//! - [`ConstructorDescriptor`] - An instance or type initializer
//! - [`MethodFlags`] - Access, modifiers and implementation options
//!
//! # Examples
//!
//! ```rust
//! use cilreflect::metadata::{
//!     method::{MethodAccessFlags, MethodDescriptor, MethodFlags, MethodModifiers},
//!     typesystem::TypeRef,
//! };
//!
//! let method = MethodDescriptor::new(
//!     "GetName",
//!     TypeRef::new("Example", "Person"),
//!     MethodFlags::new(MethodAccessFlags::PUBLIC, MethodModifiers::HIDE_BY_SIG),
//!     TypeRef::new("System", "String"),
//! );
//! assert!(method.is_zero_arg());
//! assert!(!method.is_special_name());
//! ```

mod types;

pub use types::*;

use crate::metadata::{
    customattributes::{new_annotation_list, AnnotationList, AnnotationRc},
    members::ParamDescriptor,
    typesystem::TypeRef,
};

/// Name of every instance constructor
pub const CONSTRUCTOR_NAME: &str = ".ctor";
/// Name of every type initializer
pub const TYPE_INITIALIZER_NAME: &str = ".cctor";

/// Represents a method declaration
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    /// The method name
    pub name: String,
    /// The type that declares this method
    pub declaring_type: TypeRef,
    /// Access, modifiers and implementation options
    pub flags: MethodFlags,
    /// The declared return type
    pub return_type: TypeRef,
    /// The parameters, in sequence order (the return parameter is not included)
    pub params: Vec<ParamDescriptor>,
    /// Custom attributes applied to the method
    pub custom_attributes: AnnotationList,
    /// Custom attributes applied to the return value
    pub return_attributes: AnnotationList,
}

impl MethodDescriptor {
    /// Create a method without parameters or attributes
    ///
    /// ## Arguments
    /// * `name`           - The method name
    /// * `declaring_type` - The type that declares the method
    /// * `flags`          - The method flags
    /// * `return_type`    - The declared return type
    pub fn new(
        name: impl Into<String>,
        declaring_type: TypeRef,
        flags: MethodFlags,
        return_type: TypeRef,
    ) -> Self {
        MethodDescriptor {
            name: name.into(),
            declaring_type,
            flags,
            return_type,
            params: Vec::new(),
            custom_attributes: new_annotation_list(),
            return_attributes: new_annotation_list(),
        }
    }

    /// Append a parameter
    #[must_use]
    pub fn with_param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    /// Append a custom attribute to the method
    #[must_use]
    pub fn with_attribute(self, attribute: AnnotationRc) -> Self {
        self.custom_attributes.push(attribute);
        self
    }

    /// Append a custom attribute to the return value
    #[must_use]
    pub fn with_return_attribute(self, attribute: AnnotationRc) -> Self {
        self.return_attributes.push(attribute);
        self
    }

    /// The method is compiler-synthesized (accessor, operator, event add/remove)
    #[must_use]
    pub fn is_special_name(&self) -> bool {
        self.flags.is_special_name()
    }

    /// The method can be invoked without arguments
    #[must_use]
    pub fn is_zero_arg(&self) -> bool {
        self.params.is_empty()
    }
}

/// Represents an instance constructor or type initializer
#[derive(Debug, Clone)]
pub struct ConstructorDescriptor {
    /// `.ctor` or `.cctor`
    pub name: String,
    /// The type being constructed
    pub declaring_type: TypeRef,
    /// Access, modifiers and implementation options
    pub flags: MethodFlags,
    /// The parameters, in sequence order
    pub params: Vec<ParamDescriptor>,
    /// Custom attributes applied to the constructor
    pub custom_attributes: AnnotationList,
}

impl ConstructorDescriptor {
    /// Create an instance constructor without parameters or attributes
    ///
    /// ## Arguments
    /// * `declaring_type` - The type being constructed
    /// * `flags`          - The constructor flags
    pub fn new(declaring_type: TypeRef, flags: MethodFlags) -> Self {
        ConstructorDescriptor {
            name: CONSTRUCTOR_NAME.to_string(),
            declaring_type,
            flags,
            params: Vec::new(),
            custom_attributes: new_annotation_list(),
        }
    }

    /// Append a parameter
    #[must_use]
    pub fn with_param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    /// Append a custom attribute
    #[must_use]
    pub fn with_attribute(self, attribute: AnnotationRc) -> Self {
        self.custom_attributes.push(attribute);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::members::ParamAttributes;

    #[test]
    fn test_flags_from_raw() {
        // public virtual hidebysig newslot, internalcall
        let flags = MethodFlags::from_raw(0x0006 | 0x0040 | 0x0080 | 0x0100, 0x1000);
        assert!(flags.is_public());
        assert!(flags.is_virtual());
        assert!(!flags.is_abstract());
        assert!(flags.is_internal_call());
        assert!(flags.modifiers.contains(MethodModifiers::HIDE_BY_SIG));
    }

    #[test]
    fn test_access_is_exact() {
        let fam_or_assem = MethodFlags::new(MethodAccessFlags::FAM_OR_ASSEM, MethodModifiers::empty());
        assert!(!fam_or_assem.is_family());
        assert!(!fam_or_assem.is_assembly());
        assert!(!fam_or_assem.is_public());

        let family = MethodFlags::new(MethodAccessFlags::FAMILY, MethodModifiers::empty());
        assert!(family.is_family());
        assert!(!family.is_private());

        let private = MethodFlags::new(MethodAccessFlags::PRIVATE, MethodModifiers::empty());
        assert!(private.is_private());
        assert!(!private.is_assembly());
    }

    #[test]
    fn test_default_flags() {
        let flags = MethodFlags::default();
        assert_eq!(flags.access, MethodAccessFlags::COMPILER_CONTROLLED);
        assert!(flags.modifiers.is_empty());
        assert!(flags.impl_options.is_empty());
        assert!(!flags.is_public() && !flags.is_private());
    }

    #[test]
    fn test_method_shape() {
        let method = MethodDescriptor::new(
            "get_Name",
            TypeRef::new("A", "B"),
            MethodFlags::new(MethodAccessFlags::PUBLIC, MethodModifiers::SPECIAL_NAME),
            TypeRef::new("System", "String"),
        );
        assert!(method.is_special_name());
        assert!(method.is_zero_arg());

        let method = method.with_param(ParamDescriptor::new(
            "index",
            TypeRef::new("System", "Int32"),
            ParamAttributes::IN,
        ));
        assert!(!method.is_zero_arg());
    }

    #[test]
    fn test_constructor_names() {
        let ctor = ConstructorDescriptor::new(
            TypeRef::new("A", "B"),
            MethodFlags::new(MethodAccessFlags::PUBLIC, MethodModifiers::SPECIAL_NAME),
        );
        assert_eq!(ctor.name, ".ctor");
        assert_ne!(ctor.name, TYPE_INITIALIZER_NAME);
    }
}
