//! Best-effort value probing against a live instance.
//!
//! Every read goes through one guard that turns both `Err` results and panics raised by the
//! [`Inspect`] implementation into `None`. Nothing a probed object does can abort a render.
//!
//! Catching a panic does not silence it: the process panic hook still runs first, and the
//! default hook prints the panic message to stderr. Callers rendering untrusted objects can
//! install a quiet hook with [`std::panic::set_hook`] around the render.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{
    metadata::{
        members::{FieldDescriptor, PropertyDescriptor},
        method::MethodDescriptor,
        typesystem::Value,
        Inspect,
    },
    render::RenderConfig,
    Error, Result,
};

/// Reads values for fields, properties and zero-argument methods
///
/// Without an instance only compile-time constants are produced. Static fields, static
/// properties and static methods are probed like instance members: supply an [`Inspect`]
/// that serves the static context of the type, or one that serves both.
///
/// A panicking [`Inspect`] yields `None`, but the panic hook still reports it.
///
/// # Examples
///
/// ```rust
/// use cilreflect::{
///     metadata::{
///         method::{MethodAccessFlags, MethodDescriptor, MethodFlags, MethodModifiers},
///         typesystem::{TypeRef, Value},
///         Inspect,
///     },
///     render::{RenderConfig, ValueProbe},
/// };
///
/// struct Exploding;
/// impl Inspect for Exploding {
///     fn invoke(&self, _method: &str) -> cilreflect::Result<Value> {
///         panic!("invocation failed")
///     }
/// }
///
/// let method = MethodDescriptor::new(
///     "Detonate",
///     TypeRef::new("Example", "Bomb"),
///     MethodFlags::new(MethodAccessFlags::PUBLIC, MethodModifiers::STATIC),
///     TypeRef::new("System", "Int32"),
/// );
/// let config = RenderConfig::default();
///
/// let previous = std::panic::take_hook();
/// std::panic::set_hook(Box::new(|_| {}));
/// let result = ValueProbe::new(Some(&Exploding), &config).invoke(&method);
/// std::panic::set_hook(previous);
///
/// assert_eq!(result, None);
/// ```
pub struct ValueProbe<'a> {
    instance: Option<&'a dyn Inspect>,
    config: &'a RenderConfig,
}

impl<'a> ValueProbe<'a> {
    /// Create a probe
    ///
    /// ## Arguments
    /// * `instance` - The live object, or static context, members are read from
    /// * `config`   - Selects which member categories are probed
    pub fn new(instance: Option<&'a dyn Inspect>, config: &'a RenderConfig) -> Self {
        ValueProbe { instance, config }
    }

    /// The value of a field: its compile-time constant, else the instance's current value
    #[must_use]
    pub fn read_field(&self, field: &FieldDescriptor) -> Option<Value> {
        if let Some(constant) = &field.constant {
            return Some(constant.clone());
        }
        if !self.config.probe_fields {
            return None;
        }

        Self::guarded(&field.name, || self.source()?.read_field(&field.name))
    }

    /// The value returned by a property's getter
    #[must_use]
    pub fn read_property(&self, property: &PropertyDescriptor) -> Option<Value> {
        if !property.can_read || !self.config.probe_properties {
            return None;
        }

        Self::guarded(&property.name, || self.source()?.read_property(&property.name))
    }

    /// The result of invoking a method that takes no arguments
    ///
    /// The method is invoked at most once per call, never retried.
    #[must_use]
    pub fn invoke(&self, method: &MethodDescriptor) -> Option<Value> {
        if !method.is_zero_arg() || !self.config.invoke_methods {
            return None;
        }

        Self::guarded(&method.name, || self.source()?.invoke(&method.name))
    }

    fn source(&self) -> Result<&'a dyn Inspect> {
        self.instance.ok_or(Error::InstanceRequired)
    }

    fn guarded(member: &str, read: impl FnOnce() -> Result<Value>) -> Option<Value> {
        match catch_unwind(AssertUnwindSafe(read)) {
            Ok(Ok(value)) => Some(value),
            Ok(Err(error)) => {
                log::debug!("No value for '{}': {}", member, error);
                None
            }
            Err(_) => {
                log::trace!("Probing '{}' panicked", member);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            members::{FieldAttributes, ParamAttributes, ParamDescriptor},
            method::{MethodAccessFlags, MethodFlags, MethodModifiers},
            typesystem::TypeRef,
            ObjectSnapshot,
        },
        test::{HostileInstance, Hostility},
    };

    fn owner() -> TypeRef {
        TypeRef::new("Example", "Person")
    }

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, owner(), FieldAttributes::PRIVATE, TypeRef::new("System", "Int64"))
    }

    fn getter() -> MethodFlags {
        MethodFlags::new(MethodAccessFlags::PUBLIC, MethodModifiers::SPECIAL_NAME)
    }

    fn method(name: &str) -> MethodDescriptor {
        MethodDescriptor::new(
            name,
            owner(),
            MethodFlags::new(MethodAccessFlags::PUBLIC, MethodModifiers::empty()),
            TypeRef::new("System", "String"),
        )
    }

    #[test]
    fn test_field_reads() {
        let instance = ObjectSnapshot::new().with_field("Count", 42i64);
        let config = RenderConfig::default();
        let probe = ValueProbe::new(Some(&instance), &config);

        assert_eq!(probe.read_field(&field("Count")), Some(Value::I8(42)));
        assert_eq!(probe.read_field(&field("Missing")), None);
    }

    #[test]
    fn test_field_constant_needs_no_instance() {
        let config = RenderConfig::metadata_only();
        let probe = ValueProbe::new(None, &config);

        let constant = field("Max").with_constant(10i64);
        assert_eq!(probe.read_field(&constant), Some(Value::I8(10)));
        assert_eq!(probe.read_field(&field("Count")), None);
    }

    #[test]
    fn test_missing_instance_reports_instance_required() {
        let config = RenderConfig::default();
        let probe = ValueProbe::new(None, &config);
        assert!(matches!(probe.source(), Err(Error::InstanceRequired)));

        let property =
            PropertyDescriptor::new("Name", owner(), TypeRef::new("System", "String")).with_getter(getter());
        assert_eq!(probe.read_property(&property), None);
        assert_eq!(probe.invoke(&method("GetName")), None);
    }

    #[test]
    fn test_static_context_serves_static_members() {
        let statics = ObjectSnapshot::new()
            .with_field("Instances", 3i64)
            .with_result("Create", "fresh");
        let config = RenderConfig::default();
        let probe = ValueProbe::new(Some(&statics), &config);

        let counter = FieldDescriptor::new(
            "Instances",
            owner(),
            FieldAttributes::PRIVATE | FieldAttributes::STATIC,
            TypeRef::new("System", "Int64"),
        );
        let create = MethodDescriptor::new(
            "Create",
            owner(),
            MethodFlags::new(MethodAccessFlags::PUBLIC, MethodModifiers::STATIC),
            TypeRef::new("System", "String"),
        );
        assert_eq!(probe.read_field(&counter), Some(Value::I8(3)));
        assert_eq!(probe.invoke(&create), Some(Value::string("fresh")));
    }

    #[test]
    fn test_property_requires_getter() {
        let instance = ObjectSnapshot::new().with_property("Name", "Bob");
        let config = RenderConfig::default();
        let probe = ValueProbe::new(Some(&instance), &config);

        let readable =
            PropertyDescriptor::new("Name", owner(), TypeRef::new("System", "String")).with_getter(getter());
        assert_eq!(probe.read_property(&readable), Some(Value::string("Bob")));

        let write_only =
            PropertyDescriptor::new("Name", owner(), TypeRef::new("System", "String")).with_setter(getter());
        assert_eq!(probe.read_property(&write_only), None);
    }

    #[test]
    fn test_invoke_zero_arg_only() {
        let instance = ObjectSnapshot::new().with_result("GetName", "Bob");
        let config = RenderConfig::default();
        let probe = ValueProbe::new(Some(&instance), &config);

        assert_eq!(probe.invoke(&method("GetName")), Some(Value::string("Bob")));

        let with_args = method("GetName").with_param(ParamDescriptor::new(
            "x",
            TypeRef::new("System", "Int32"),
            ParamAttributes::IN,
        ));
        assert_eq!(probe.invoke(&with_args), None);
    }

    #[test]
    fn test_config_disables_probes() {
        let instance = ObjectSnapshot::new()
            .with_field("Count", 1i64)
            .with_property("Name", "Bob")
            .with_result("GetName", "Bob");
        let config = RenderConfig::metadata_only();
        let probe = ValueProbe::new(Some(&instance), &config);

        let property =
            PropertyDescriptor::new("Name", owner(), TypeRef::new("System", "String")).with_getter(getter());
        assert_eq!(probe.read_field(&field("Count")), None);
        assert_eq!(probe.read_property(&property), None);
        assert_eq!(probe.invoke(&method("GetName")), None);
    }

    #[test]
    fn test_failures_never_propagate() {
        let config = RenderConfig::default();
        let property =
            PropertyDescriptor::new("Name", owner(), TypeRef::new("System", "String")).with_getter(getter());

        for mode in [Hostility::Fault, Hostility::Panic] {
            let instance = HostileInstance::new(mode);
            let probe = ValueProbe::new(Some(&instance), &config);

            assert_eq!(probe.read_field(&field("Count")), None);
            assert_eq!(probe.read_property(&property), None);
            assert_eq!(probe.invoke(&method("GetName")), None);

            // not retried
            assert_eq!(instance.reads(), 2);
            assert_eq!(instance.invocations(), 1);
        }
    }

    #[test]
    fn test_no_instance() {
        let config = RenderConfig::default();
        let probe = ValueProbe::new(None, &config);
        assert_eq!(probe.invoke(&method("GetName")), None);
    }
}
