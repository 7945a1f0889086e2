//! Custom attribute instances attached to types, members and parameters.
//!
//! Custom attributes are metadata annotations whose values are themselves objects: an
//! attribute instance exposes public properties and fields that are read back and rendered as
//! `name=value` pairs. Attribute values may in turn be attribute instances, which are rendered
//! recursively.
//!
//! # Key Types
//!
//! - [`AnnotationInstance`] - One attribute application
//! - [`AnnotationBuilder`] - Builds instances from values known up front
//! - [`AnnotationList`] - Append-only list of attributes stored on the owning descriptor
//!
//! # Examples
//!
//! ```rust
//! use cilreflect::metadata::{
//!     customattributes::{new_annotation_list, AnnotationInstance},
//!     typesystem::TypeRef,
//! };
//!
//! let list = new_annotation_list();
//! list.push(AnnotationInstance::builder(TypeRef::new("System", "FlagsAttribute")).build());
//! assert_eq!(list.count(), 1);
//! ```
//!
//! # Ordering
//!
//! Rendering always lists properties before fields, each group in declared order. Walkers
//! that build instances through [`AnnotationInstance::new`] are responsible for supplying the
//! names in declaration order.

mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{typesystem::TypeRef, typesystem::Value, Inspect},
        Error,
    };
    use std::sync::Arc;

    #[test]
    fn test_builder_keeps_declared_order() {
        let attr = AnnotationInstance::builder(TypeRef::new("Test", "SampleAttribute"))
            .field("F1", 3i32)
            .property("P1", 1i32)
            .property("P2", 2i32)
            .build();

        assert_eq!(attr.properties, vec!["P1", "P2"]);
        assert_eq!(attr.fields, vec!["F1"]);
        assert!(attr.has_members());

        assert_eq!(attr.target.read_property("P2").unwrap(), Value::I4(2));
        assert_eq!(attr.target.read_field("F1").unwrap(), Value::I4(3));
    }

    #[test]
    fn test_marker_attribute_has_no_members() {
        let attr = AnnotationInstance::builder(TypeRef::new("System", "SerializableAttribute"))
            .build();
        assert!(!attr.has_members());
    }

    #[test]
    fn test_custom_target() {
        struct Faulty;
        impl Inspect for Faulty {
            fn read_property(&self, _name: &str) -> crate::Result<Value> {
                Err(Error::Faulted("getter threw".to_string()))
            }
        }

        let attr = AnnotationInstance::new(
            TypeRef::new("Test", "FaultyAttribute"),
            vec!["Broken".to_string()],
            Vec::new(),
            Arc::new(Faulty),
        );
        assert!(matches!(
            attr.target.read_property("Broken"),
            Err(Error::Faulted(_))
        ));
    }

    #[test]
    fn test_shared_list() {
        let list = new_annotation_list();
        let shared = list.clone();
        shared.push(AnnotationInstance::builder(TypeRef::new("A", "One")).build());
        shared.push(AnnotationInstance::builder(TypeRef::new("A", "Two")).build());

        let names: Vec<String> = list.iter().map(|(_, attr)| attr.ty.name.clone()).collect();
        assert_eq!(names, vec!["One", "Two"]);
    }

    #[test]
    fn test_debug_output() {
        let attr = AnnotationInstance::builder(TypeRef::new("A", "B"))
            .property("X", 1i32)
            .build();
        let debug = format!("{:?}", attr);
        assert!(debug.contains("AnnotationInstance"));
        assert!(debug.contains("\"X\""));
    }
}
