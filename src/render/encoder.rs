//! Literal encoding of probed values.
//!
//! [`ValueEncoder::encode`] is total: every [`Value`] yields text. The notation is selected by
//! the value's [`ValueKind`] through the profile's [`crate::render::LiteralTable`]; `null` is
//! always spelled `null`. Nested annotation instances are re-read member by member and encoded
//! recursively, down to [`RenderConfig::max_annotation_depth`].

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{
    metadata::{
        customattributes::AnnotationInstance,
        typesystem::{Value, ValueKind},
    },
    render::{LanguageProfile, RenderConfig},
    Error, Result,
};

/// Text emitted for the null reference, in every profile
pub const NULL_LITERAL: &str = "null";
/// Text emitted for an annotation member whose read faulted
pub const FAULT_MARKER: &str = "<exception/>";

/// Encodes values in the literal notation of a profile
pub struct ValueEncoder<'a> {
    profile: &'a dyn LanguageProfile,
    config: &'a RenderConfig,
}

impl<'a> ValueEncoder<'a> {
    /// Create an encoder for a profile
    ///
    /// ## Arguments
    /// * `profile` - Supplies the literal table
    /// * `config`  - Supplies the annotation depth limit
    pub fn new(profile: &'a dyn LanguageProfile, config: &'a RenderConfig) -> Self {
        ValueEncoder { profile, config }
    }

    /// Encode a value
    #[must_use]
    pub fn encode(&self, value: &Value) -> String {
        self.encode_at(value, 0)
    }

    /// Encode the property and field values of an annotation as `name=value` pairs
    ///
    /// Properties come first, then fields, each in declared order. A member whose read fails
    /// or panics is shown as [`FAULT_MARKER`]. A panic still passes through the process panic
    /// hook before it is caught.
    #[must_use]
    pub fn encode_members(&self, annotation: &AnnotationInstance) -> String {
        self.members_at(annotation, 0)
    }

    fn encode_at(&self, value: &Value, depth: usize) -> String {
        let Some(kind) = value.kind() else {
            return NULL_LITERAL.to_string();
        };

        if let Value::Annotation(annotation) = value {
            return match self.check_depth(depth) {
                Ok(()) => self.nested(annotation, depth + 1),
                Err(error) => {
                    log::debug!(
                        "Encoding {} as a type reference: {}",
                        annotation.ty.fullname(),
                        error
                    );
                    self.profile
                        .literals()
                        .wrap(ValueKind::Object, &annotation.ty.fullname())
                }
            };
        }

        self.profile.literals().wrap(kind, &value.to_string())
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.config.max_annotation_depth {
            return Err(Error::RecursionLimit(self.config.max_annotation_depth));
        }
        Ok(())
    }

    fn nested(&self, annotation: &AnnotationInstance, depth: usize) -> String {
        let name = annotation.ty.fullname();
        if annotation.has_members() {
            format!("{}({})", name, self.members_at(annotation, depth))
        } else {
            name
        }
    }

    fn members_at(&self, annotation: &AnnotationInstance, depth: usize) -> String {
        let target = annotation.target.as_ref();
        let properties = annotation
            .properties
            .iter()
            .map(|name| self.member(name, depth, || target.read_property(name)));
        let fields = annotation
            .fields
            .iter()
            .map(|name| self.member(name, depth, || target.read_field(name)));

        properties.chain(fields).collect::<Vec<_>>().join(", ")
    }

    fn member(&self, name: &str, depth: usize, read: impl FnOnce() -> Result<Value>) -> String {
        match catch_unwind(AssertUnwindSafe(read)) {
            Ok(Ok(value)) => format!("{}={}", name, self.encode_at(&value, depth)),
            Ok(Err(error)) => {
                log::debug!("Annotation member '{}' faulted: {}", name, error);
                format!("{}={}", name, FAULT_MARKER)
            }
            Err(_) => {
                log::trace!("Annotation member '{}' panicked", name);
                format!("{}={}", name, FAULT_MARKER)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            customattributes::{AnnotationInstance, AnnotationRc},
            typesystem::{Decimal, TypeRef},
            Inspect,
        },
        render::{BasicFamilyProfile, CFamilyProfile},
    };
    use std::sync::{Arc, OnceLock};

    fn c_family(value: &Value) -> String {
        let profile = CFamilyProfile::new();
        let config = RenderConfig::default();
        ValueEncoder::new(&profile, &config).encode(value)
    }

    #[test]
    fn test_null() {
        assert_eq!(c_family(&Value::Null), "null");

        let basic = BasicFamilyProfile::new();
        let config = RenderConfig::default();
        assert_eq!(ValueEncoder::new(&basic, &config).encode(&Value::Null), "null");
    }

    #[test]
    fn test_kind_notation() {
        assert_eq!(c_family(&Value::Char('x')), "'x'");
        assert_eq!(
            c_family(&Value::Decimal(Decimal::new(150, 2).unwrap())),
            "1.50m"
        );
        assert_eq!(c_family(&Value::R8(2.5)), "2.5d");
        assert_eq!(c_family(&Value::I8(42)), "42L");
        assert_eq!(c_family(&Value::R4(0.5)), "0.5f");
        assert_eq!(c_family(&Value::string("Bob")), "\"Bob\"");
        assert_eq!(c_family(&Value::U4(7)), "7U");
        assert_eq!(c_family(&Value::U8(7)), "7UL");
        assert_eq!(
            c_family(&Value::Type(TypeRef::new("System", "String"))),
            "typeof(System.String)"
        );
    }

    #[test]
    fn test_other_kinds_are_unadorned() {
        assert_eq!(c_family(&Value::I4(-3)), "-3");
        assert_eq!(c_family(&Value::Boolean(false)), "false");
        assert_eq!(c_family(&Value::U1(255)), "255");
        assert_eq!(
            c_family(&Value::enumeration(
                TypeRef::new("System", "AttributeTargets"),
                "Class"
            )),
            "Class"
        );
    }

    #[test]
    fn test_basic_notation() {
        let basic = BasicFamilyProfile::new();
        let config = RenderConfig::default();
        let encoder = ValueEncoder::new(&basic, &config);
        assert_eq!(encoder.encode(&Value::Char('x')), "\"x\"c");
        assert_eq!(encoder.encode(&Value::I8(42)), "42L");
        assert_eq!(encoder.encode(&Value::U4(1)), "1UI");
        assert_eq!(
            encoder.encode(&Value::Type(TypeRef::new("System", "Int32"))),
            "GetType(System.Int32)"
        );
    }

    #[test]
    fn test_members_order() {
        let attr = AnnotationInstance::builder(TypeRef::new("Test", "SampleAttribute"))
            .property("P1", 1i64)
            .field("F1", "three")
            .property("P2", 'c')
            .build();

        let profile = CFamilyProfile::new();
        let config = RenderConfig::default();
        assert_eq!(
            ValueEncoder::new(&profile, &config).encode_members(&attr),
            "P1=1L, P2='c', F1=\"three\""
        );
    }

    #[test]
    fn test_members_fault() {
        struct Faulty;
        impl Inspect for Faulty {
            fn read_property(&self, name: &str) -> crate::Result<Value> {
                match name {
                    "Ok" => Ok(Value::I4(1)),
                    "Panics" => panic!("getter blew up"),
                    _ => Err(Error::Faulted("getter threw".to_string())),
                }
            }
        }

        let attr = AnnotationInstance::new(
            TypeRef::new("Test", "FaultyAttribute"),
            vec!["Ok".into(), "Throws".into(), "Panics".into()],
            vec!["Missing".into()],
            Arc::new(Faulty),
        );

        let profile = CFamilyProfile::new();
        let config = RenderConfig::default();
        assert_eq!(
            ValueEncoder::new(&profile, &config).encode_members(&attr),
            "Ok=1, Throws=<exception/>, Panics=<exception/>, Missing=<exception/>"
        );
    }

    #[test]
    fn test_nested_annotation() {
        let inner = AnnotationInstance::builder(TypeRef::new("Test", "InnerAttribute"))
            .property("Level", 2i32)
            .build();
        let marker = AnnotationInstance::builder(TypeRef::new("Test", "MarkerAttribute")).build();

        assert_eq!(
            c_family(&Value::Annotation(inner)),
            "Test.InnerAttribute(Level=2)"
        );
        assert_eq!(c_family(&Value::Annotation(marker)), "Test.MarkerAttribute");
    }

    #[test]
    fn test_self_referencing_annotation_is_bounded() {
        // An attribute object whose property returns the attribute itself
        struct Cyclic {
            this: OnceLock<AnnotationRc>,
        }
        impl Inspect for Cyclic {
            fn read_property(&self, _name: &str) -> crate::Result<Value> {
                self.this
                    .get()
                    .cloned()
                    .map(Value::Annotation)
                    .ok_or_else(|| Error::MemberNotFound("Self".to_string()))
            }
        }

        let cyclic = Arc::new(Cyclic {
            this: OnceLock::new(),
        });
        let attr = Arc::new(AnnotationInstance::new(
            TypeRef::new("Test", "LoopAttribute"),
            vec!["Self".into()],
            Vec::new(),
            cyclic.clone(),
        ));
        cyclic.this.set(attr.clone()).unwrap();

        let profile = CFamilyProfile::new();
        let config = RenderConfig {
            max_annotation_depth: 2,
            ..RenderConfig::default()
        };
        let encoded = ValueEncoder::new(&profile, &config).encode(&Value::Annotation(attr));
        assert_eq!(
            encoded,
            "Test.LoopAttribute(Self=Test.LoopAttribute(Self=typeof(Test.LoopAttribute)))"
        );
    }
}
