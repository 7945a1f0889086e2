//! The descriptor model consumed by the renderer.
//!
//! Everything in this module is read-only from the renderer's point of view: an external
//! metadata walker builds the descriptors once per rendering request, and rendering never
//! mutates them. Live values are reached through the [`Inspect`] seam.
//!
//! # Key Components
//!
//! - [`typesystem`] - Type references, type descriptors and runtime values
//! - [`members`] - Field, parameter, property and event descriptors plus [`members::MemberDescriptor`]
//! - [`method`] - Method and constructor descriptors and their flag groups
//! - [`customattributes`] - Custom attribute instances and annotation lists
//! - [`Inspect`] - Read-only access to a live object for value probing
//!
//! # Examples
//!
//! ```rust
//! use cilreflect::metadata::{
//!     members::{FieldAttributes, FieldDescriptor},
//!     typesystem::{TypeAttributes, TypeCategory, TypeDescriptor, TypeRef},
//!     Inspect, ObjectSnapshot,
//! };
//!
//! let ty = TypeDescriptor::new("Example", "Counter", TypeAttributes::PUBLIC, TypeCategory::Class);
//! let count = FieldDescriptor::new(
//!     "Count",
//!     ty.as_ref_type(),
//!     FieldAttributes::PRIVATE,
//!     TypeRef::new("System", "Int64"),
//! );
//! let instance = ObjectSnapshot::new().with_field("Count", 42i64);
//!
//! assert!(instance.read_field(&count.name).is_ok());
//! ```

/// Implementation of custom attribute instances
pub mod customattributes;
/// Access to live objects
pub mod inspect;
/// Implementation of field, parameter, property and event descriptors
pub mod members;
/// Implementation of method and constructor descriptors
pub mod method;
/// Implementation of the type descriptors and values
pub mod typesystem;

pub use inspect::{Inspect, ObjectSnapshot};
