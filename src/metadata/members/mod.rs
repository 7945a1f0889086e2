//! Member descriptors handed to the renderer.
//!
//! A type's members arrive as an ordered sequence of [`MemberDescriptor`]s, one variant per
//! member shape. The walker decides which members are surfaced and in which order; nothing
//! here filters or sorts.
//!
//! # Key Types
//! - [`MemberDescriptor`] - The tagged union over all member shapes
//! - [`FieldDescriptor`] / [`FieldAttributes`] - Fields and enumeration constants
//! - [`ParamDescriptor`] / [`ParamAttributes`] - Method and constructor parameters
//! - [`PropertyDescriptor`] - Properties and their accessor flags
//! - [`EventDescriptor`] - Events and their add accessor
//!
//! Methods and constructors live in [`crate::metadata::method`].
//!
//! # Examples
//!
//! ```rust
//! use cilreflect::metadata::{
//!     members::{FieldAttributes, FieldDescriptor, MemberDescriptor},
//!     typesystem::TypeRef,
//! };
//!
//! let member: MemberDescriptor = FieldDescriptor::new(
//!     "Count",
//!     TypeRef::new("Example", "Counter"),
//!     FieldAttributes::PRIVATE,
//!     TypeRef::new("System", "Int64"),
//! )
//! .into();
//!
//! assert_eq!(member.name(), Some("Count"));
//! ```

mod event;
mod field;
mod param;
mod property;

pub use event::EventDescriptor;
pub use field::{FieldAttributes, FieldDescriptor};
pub use param::{ParamAttributes, ParamDescriptor};
pub use property::PropertyDescriptor;

use crate::metadata::{
    customattributes::AnnotationList,
    method::{ConstructorDescriptor, MethodDescriptor},
    typesystem::TypeRef,
};

/// One member of a type, as supplied by the walker
#[derive(Debug, Clone)]
pub enum MemberDescriptor {
    /// Instance constructor or type initializer
    Constructor(ConstructorDescriptor),
    /// Field or enumeration constant
    Field(FieldDescriptor),
    /// Property
    Property(PropertyDescriptor),
    /// Method
    Method(MethodDescriptor),
    /// Event
    Event(EventDescriptor),
    /// A parameter rendered on its own
    Parameter(ParamDescriptor),
    /// A note on a method's return value
    ReturnValue {
        /// Free-form description supplied by the walker
        description: Option<String>,
    },
    /// Anything the walker could not classify
    Other {
        /// Free-form description supplied by the walker
        description: Option<String>,
    },
}

impl MemberDescriptor {
    /// The member name, or `None` for descriptive nodes
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            MemberDescriptor::Constructor(ctor) => Some(&ctor.name),
            MemberDescriptor::Field(field) => Some(&field.name),
            MemberDescriptor::Property(property) => Some(&property.name),
            MemberDescriptor::Method(method) => Some(&method.name),
            MemberDescriptor::Event(event) => Some(&event.name),
            MemberDescriptor::Parameter(param) => Some(&param.name),
            MemberDescriptor::ReturnValue { .. } | MemberDescriptor::Other { .. } => None,
        }
    }

    /// The declaring type, where the member has one
    #[must_use]
    pub fn declaring_type(&self) -> Option<&TypeRef> {
        match self {
            MemberDescriptor::Constructor(ctor) => Some(&ctor.declaring_type),
            MemberDescriptor::Field(field) => Some(&field.declaring_type),
            MemberDescriptor::Property(property) => Some(&property.declaring_type),
            MemberDescriptor::Method(method) => Some(&method.declaring_type),
            MemberDescriptor::Event(event) => Some(&event.declaring_type),
            MemberDescriptor::Parameter(_)
            | MemberDescriptor::ReturnValue { .. }
            | MemberDescriptor::Other { .. } => None,
        }
    }

    /// The custom attributes attached to the member, where it can carry any
    #[must_use]
    pub fn custom_attributes(&self) -> Option<&AnnotationList> {
        match self {
            MemberDescriptor::Constructor(ctor) => Some(&ctor.custom_attributes),
            MemberDescriptor::Field(field) => Some(&field.custom_attributes),
            MemberDescriptor::Property(property) => Some(&property.custom_attributes),
            MemberDescriptor::Method(method) => Some(&method.custom_attributes),
            MemberDescriptor::Parameter(param) => Some(&param.custom_attributes),
            MemberDescriptor::Event(_)
            | MemberDescriptor::ReturnValue { .. }
            | MemberDescriptor::Other { .. } => None,
        }
    }
}

impl From<ConstructorDescriptor> for MemberDescriptor {
    fn from(value: ConstructorDescriptor) -> Self {
        MemberDescriptor::Constructor(value)
    }
}

impl From<FieldDescriptor> for MemberDescriptor {
    fn from(value: FieldDescriptor) -> Self {
        MemberDescriptor::Field(value)
    }
}

impl From<PropertyDescriptor> for MemberDescriptor {
    fn from(value: PropertyDescriptor) -> Self {
        MemberDescriptor::Property(value)
    }
}

impl From<MethodDescriptor> for MemberDescriptor {
    fn from(value: MethodDescriptor) -> Self {
        MemberDescriptor::Method(value)
    }
}

impl From<EventDescriptor> for MemberDescriptor {
    fn from(value: EventDescriptor) -> Self {
        MemberDescriptor::Event(value)
    }
}

impl From<ParamDescriptor> for MemberDescriptor {
    fn from(value: ParamDescriptor) -> Self {
        MemberDescriptor::Parameter(value)
    }
}
