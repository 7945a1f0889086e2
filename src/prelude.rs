//! # cilreflect Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the cilreflect library. Import this module to get quick access to the descriptor
//! model and the renderers.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all cilreflect operations
pub use crate::Error;

/// The result type used throughout cilreflect
pub use crate::Result;

// ================================================================================================
// Type System
// ================================================================================================

/// Type descriptors, references and their flags
pub use crate::metadata::typesystem::{TypeAttributes, TypeCategory, TypeDescriptor, TypeRef};

/// Values read from metadata or from a live instance
pub use crate::metadata::typesystem::{Decimal, Value, ValueKind};

// ================================================================================================
// Members
// ================================================================================================

/// Fields, parameters, properties and events
pub use crate::metadata::members::{
    EventDescriptor, FieldAttributes, FieldDescriptor, MemberDescriptor, ParamAttributes,
    ParamDescriptor, PropertyDescriptor,
};

/// Methods, constructors and their flag groups
pub use crate::metadata::method::{
    ConstructorDescriptor, MethodAccessFlags, MethodDescriptor, MethodFlags, MethodImplOptions,
    MethodModifiers,
};

// ================================================================================================
// Custom Attributes
// ================================================================================================

/// Attribute instances and their shared list
pub use crate::metadata::customattributes::{
    new_annotation_list, AnnotationBuilder, AnnotationInstance, AnnotationList, AnnotationRc,
};

// ================================================================================================
// Live Objects
// ================================================================================================

/// The seam through which a live instance is probed
pub use crate::metadata::{Inspect, ObjectSnapshot};

// ================================================================================================
// Rendering
// ================================================================================================

/// Renderers and their configuration
pub use crate::render::{MemberRenderer, RenderConfig, TypeRenderer};

/// Language profiles
pub use crate::render::{
    BasicFamilyProfile, CFamilyProfile, ConstructorNaming, LanguageProfile, LiteralTable,
    ProfileRc, ProfileRegistry, ProfileToken, TableProfile, TokenTable,
};
