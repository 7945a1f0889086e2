//! Pseudo-source rendering of type and member descriptors.
//!
//! This module turns the descriptor model from [`crate::metadata`] into human-readable
//! declarations in a chosen target syntax. It is a documentation renderer: the output reads
//! like source code but is not guaranteed to compile.
//!
//! # Architecture
//!
//! The renderer is written once against the [`LanguageProfile`] contract; everything that
//! differs between target syntaxes lives in the profile's [`TokenTable`] and
//! [`LiteralTable`]. Rendering is split into small, independently usable pieces:
//!
//! - [`QualifierAssembler`] - Ordered access and modality qualifiers per declaration kind
//! - [`ValueEncoder`] - Literal notation for values, recursing into nested annotations
//! - [`ValueProbe`] - Fail-soft reads and zero-argument invocations on a live instance
//! - [`MemberRenderer`] - One rule per member shape
//! - [`TypeRenderer`] - Type header, base type, interfaces and whole documents
//!
//! # Failure Model
//!
//! No render call returns an error or panics because of the inspected object. A value that
//! cannot be obtained is simply not shown; a faulting annotation member shows
//! `<exception/>`; a missing base type or description becomes a comment or placeholder.
//! Errors only arise around the engine, when building or registering profiles.
//!
//! # Examples
//!
//! ```rust
//! use cilreflect::{
//!     metadata::{
//!         members::MemberDescriptor,
//!         method::{MethodAccessFlags, MethodDescriptor, MethodFlags, MethodModifiers},
//!         typesystem::{TypeAttributes, TypeCategory, TypeDescriptor, TypeRef},
//!         ObjectSnapshot,
//!     },
//!     render::{ProfileRegistry, RenderConfig, TypeRenderer},
//! };
//!
//! let registry = ProfileRegistry::with_defaults();
//! let profile = registry.get("cfamily")?;
//!
//! let ty = TypeDescriptor::new("Example", "Person", TypeAttributes::PUBLIC, TypeCategory::Class)
//!     .with_base(TypeRef::new("System", "Object"));
//! let members = vec![MemberDescriptor::Method(MethodDescriptor::new(
//!     "GetName",
//!     ty.as_ref_type(),
//!     MethodFlags::new(MethodAccessFlags::PUBLIC, MethodModifiers::HIDE_BY_SIG),
//!     TypeRef::new("System", "String"),
//! ))];
//!
//! let instance = ObjectSnapshot::new().with_result("GetName", "Bob");
//! let renderer = TypeRenderer::new(profile.as_ref(), RenderConfig::default()).with_instance(&instance);
//!
//! assert_eq!(
//!     renderer.render_document(&ty, &members),
//!     vec![
//!         "public class Example.Person",
//!         ": Object",
//!         "public System.String GetName () // = \"Bob\"",
//!     ]
//! );
//! # Ok::<(), cilreflect::Error>(())
//! ```

mod annotations;
mod config;
mod encoder;
mod literals;
mod members;
mod presets;
mod probe;
mod profile;
mod qualifiers;
mod registry;
mod types;

pub use annotations::{AnnotationWriter, INTERNAL_CALL, RETURN_PREFIX, SERIALIZABLE};
pub use config::{RenderConfig, DEFAULT_MAX_ANNOTATION_DEPTH};
pub use encoder::{ValueEncoder, FAULT_MARKER, NULL_LITERAL};
pub use literals::{Affix, LiteralTable};
pub use members::{MemberRenderer, NO_DESCRIPTION};
pub use presets::{BasicFamilyProfile, CFamilyProfile, BASIC_FAMILY, C_FAMILY};
pub use probe::ValueProbe;
pub use profile::{
    ConstructorNaming, LanguageProfile, ProfileToken, TableProfile, TokenTable, TokenTableBuilder,
};
pub use qualifiers::QualifierAssembler;
pub use registry::{ProfileRc, ProfileRegistry};
pub use types::{TypeRenderer, UNKNOWN_TYPE_KEYWORD};
