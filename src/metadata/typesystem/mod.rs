//! Type descriptors and runtime values for rendering.
//!
//! This module provides the type-level half of the descriptor model handed to the renderer by
//! an external metadata walker, plus the [`Value`] representation used for probed runtime data.
//!
//! # Key Components
//!
//! - [`TypeRef`]: Lightweight namespace + name reference to a type
//! - [`TypeDescriptor`]: A complete type declaration (flags, category, annotations, base, interfaces)
//! - [`TypeCategory`]: The kind of declaration a type is (class, enum, struct, interface)
//! - [`TypeAttributes`]: Raw `TypeAttributes` flag constants (ECMA-335 §II.23.1.15)
//! - [`Value`], [`ValueKind`], [`Decimal`]: Probed values and their literal-encoding kinds
//!
//! # Examples
//!
//! ```rust
//! use cilreflect::metadata::typesystem::{TypeAttributes, TypeCategory, TypeDescriptor, TypeRef};
//!
//! let ty = TypeDescriptor::new(
//!     "Example",
//!     "Foo",
//!     TypeAttributes::PUBLIC | TypeAttributes::SEALED,
//!     TypeCategory::Class,
//! )
//! .with_base(TypeRef::new("System", "Object"));
//!
//! assert_eq!(ty.fullname(), "Example.Foo");
//! assert!(ty.is_public() && ty.is_sealed());
//! ```

mod primitives;

use std::fmt;

use strum::{Display, EnumIter};

pub use primitives::{Decimal, Value, ValueKind};

use crate::metadata::customattributes::{new_annotation_list, AnnotationList, AnnotationRc};

#[allow(non_snake_case)]
/// All possible flags for `TypeAttributes` that are relevant for rendering
pub mod TypeAttributes {
    /// Mask for extracting type visibility information.
    pub const VISIBILITY_MASK: u32 = 0x0000_0007;
    /// Type has no public scope (internal to assembly).
    pub const NOT_PUBLIC: u32 = 0x0000_0000;
    /// Type has public scope (visible outside assembly).
    pub const PUBLIC: u32 = 0x0000_0001;
    /// Nested type with public visibility.
    pub const NESTED_PUBLIC: u32 = 0x0000_0002;
    /// Nested type with private visibility.
    pub const NESTED_PRIVATE: u32 = 0x0000_0003;
    /// Nested type with family (protected) visibility.
    pub const NESTED_FAMILY: u32 = 0x0000_0004;
    /// Nested type with assembly (internal) visibility.
    pub const NESTED_ASSEMBLY: u32 = 0x0000_0005;
    /// Nested type with family AND assembly visibility.
    pub const NESTED_FAM_AND_ASSEM: u32 = 0x0000_0006;
    /// Nested type with family OR assembly visibility.
    pub const NESTED_FAM_OR_ASSEM: u32 = 0x0000_0007;
    /// Type is an interface.
    pub const INTERFACE: u32 = 0x0000_0020;
    /// Type is abstract and cannot be instantiated.
    pub const ABSTRACT: u32 = 0x0000_0080;
    /// Type cannot be derived from.
    pub const SEALED: u32 = 0x0000_0100;
    /// Type name has special meaning to the runtime.
    pub const SPECIAL_NAME: u32 = 0x0000_0400;
    /// Type can be serialized.
    pub const SERIALIZABLE: u32 = 0x0000_2000;
}

/// The category of a type declaration, which selects the keyword it is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TypeCategory {
    /// A reference type (`class`)
    Class,
    /// An enumeration
    Enum,
    /// A value type other than an enumeration (`struct`)
    ValueType,
    /// An interface
    Interface,
    /// Anything the walker could not classify
    Unknown,
}

impl TypeCategory {
    /// Returns `true` for categories the runtime treats as value types (structs and enums)
    #[must_use]
    pub fn is_value_type(self) -> bool {
        matches!(self, TypeCategory::ValueType | TypeCategory::Enum)
    }
}

/// A reference to a type by namespace and simple name.
///
/// Member descriptors use this for field, property, return, parameter and handler types; the
/// type itself does not need to be described for it to be referenced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// `TypeNamespace` (can be empty, e.g. for nested or generic parameter types)
    pub namespace: String,
    /// `TypeName`
    pub name: String,
}

impl TypeRef {
    /// Create a new type reference
    ///
    /// ## Arguments
    /// * `namespace` - The namespace of the type, may be empty
    /// * `name`      - The simple name of the type
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Returns the full name (Namespace.Name) of the type, or just the name without a namespace
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

/// Represents a type declaration as seen by the renderer.
///
/// Constructed once per rendering request by the walker and never mutated while rendering.
/// The annotation list is append-only and can be shared with other descriptors.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// `TypeNamespace`
    pub namespace: String,
    /// `TypeName`
    pub name: String,
    /// Flags (a 4-byte bitmask of type `TypeAttributes`, §II.23.1.15)
    pub flags: u32,
    /// What kind of declaration this is
    pub category: TypeCategory,
    /// All custom attributes this type has, in discovery order
    pub custom_attributes: AnnotationList,
    /// This types base aka 'extends', if any
    pub base: Option<TypeRef>,
    /// All interfaces this type implements, in walker order
    pub interfaces: Vec<TypeRef>,
}

impl TypeDescriptor {
    /// Create a new type descriptor without base type, interfaces or annotations
    ///
    /// ## Arguments
    /// * `namespace` - The namespace of the type
    /// * `name`      - The simple name of the type
    /// * `flags`     - Raw `TypeAttributes`
    /// * `category`  - The kind of declaration
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        flags: u32,
        category: TypeCategory,
    ) -> Self {
        TypeDescriptor {
            namespace: namespace.into(),
            name: name.into(),
            flags,
            category,
            custom_attributes: new_annotation_list(),
            base: None,
            interfaces: Vec::new(),
        }
    }

    /// Set the base type
    #[must_use]
    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    /// Append an implemented interface
    #[must_use]
    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Append a custom attribute
    #[must_use]
    pub fn with_attribute(self, attribute: AnnotationRc) -> Self {
        self.custom_attributes.push(attribute);
        self
    }

    /// Returns the full name (Namespace.Name) of the type
    #[must_use]
    pub fn fullname(&self) -> String {
        self.as_ref_type().fullname()
    }

    /// Returns a [`TypeRef`] pointing at this type
    #[must_use]
    pub fn as_ref_type(&self) -> TypeRef {
        TypeRef::new(self.namespace.clone(), self.name.clone())
    }

    /// Top-level public or nested public visibility
    #[must_use]
    pub fn is_public(&self) -> bool {
        let visibility = self.flags & TypeAttributes::VISIBILITY_MASK;
        visibility == TypeAttributes::PUBLIC || visibility == TypeAttributes::NESTED_PUBLIC
    }

    /// The type cannot be derived from
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.flags & TypeAttributes::SEALED != 0
    }

    /// The type cannot be instantiated
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.flags & TypeAttributes::ABSTRACT != 0
    }

    /// The type is marked serializable
    #[must_use]
    pub fn is_serializable(&self) -> bool {
        self.flags & TypeAttributes::SERIALIZABLE != 0
    }
}
