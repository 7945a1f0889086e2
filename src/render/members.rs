//! Per-shape member rendering.
//!
//! [`MemberRenderer::render`] dispatches over [`MemberDescriptor`] and composes annotations,
//! qualifiers and the shape-specific body. Values are only shown when the probe produces one;
//! a failed probe leaves no trace in the output.

use crate::{
    metadata::{
        customattributes::AnnotationList,
        members::{
            EventDescriptor, FieldDescriptor, MemberDescriptor, ParamAttributes, ParamDescriptor,
            PropertyDescriptor,
        },
        method::{ConstructorDescriptor, MethodDescriptor, MethodFlags},
        Inspect,
    },
    render::{
        annotations::{AnnotationWriter, INTERNAL_CALL, RETURN_PREFIX},
        LanguageProfile, ProfileToken, QualifierAssembler, RenderConfig, ValueEncoder, ValueProbe,
    },
};

/// Placeholder for descriptive nodes without a description
pub const NO_DESCRIPTION: &str = "<null other description/>";

/// Parameter flag abbreviations, in emission order
const PARAM_FLAGS: [(u32, &str); 7] = [
    (ParamAttributes::IN, "in"),
    (ParamAttributes::OUT, "out"),
    (ParamAttributes::LCID, "lcid"),
    (ParamAttributes::RETVAL, "retval"),
    (ParamAttributes::OPTIONAL, "optional"),
    (ParamAttributes::HAS_DEFAULT, "hasdefault"),
    (ParamAttributes::HAS_FIELD_MARSHAL, "hasfieldmarshal"),
];

/// Renders members in the syntax of one profile
///
/// # Examples
///
/// ```rust
/// use cilreflect::{
///     metadata::{
///         members::{FieldAttributes, FieldDescriptor},
///         typesystem::TypeRef,
///         ObjectSnapshot,
///     },
///     render::{CFamilyProfile, MemberRenderer, RenderConfig},
/// };
///
/// let profile = CFamilyProfile::new();
/// let instance = ObjectSnapshot::new().with_field("Count", 42i64);
/// let renderer = MemberRenderer::new(&profile, RenderConfig::default()).with_instance(&instance);
///
/// let count = FieldDescriptor::new(
///     "Count",
///     TypeRef::new("Example", "Counter"),
///     FieldAttributes::PRIVATE,
///     TypeRef::new("System", "Int64"),
/// );
/// assert_eq!(renderer.render_field(&count), "private System.Int64 Count = 42L;");
/// ```
#[derive(Clone, Copy)]
pub struct MemberRenderer<'a> {
    profile: &'a dyn LanguageProfile,
    config: RenderConfig,
    instance: Option<&'a dyn Inspect>,
}

impl<'a> MemberRenderer<'a> {
    /// Create a renderer without a live instance
    ///
    /// ## Arguments
    /// * `profile` - The target syntax
    /// * `config`  - Probing and encoding options
    pub fn new(profile: &'a dyn LanguageProfile, config: RenderConfig) -> Self {
        MemberRenderer {
            profile,
            config,
            instance: None,
        }
    }

    /// Probe values against a live instance
    ///
    /// The instance may equally be the static context of the type, which is how static
    /// fields and static zero-argument methods get values.
    #[must_use]
    pub fn with_instance(mut self, instance: &'a dyn Inspect) -> Self {
        self.instance = Some(instance);
        self
    }

    /// The active profile
    #[must_use]
    pub fn profile(&self) -> &'a dyn LanguageProfile {
        self.profile
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The live instance, if any
    #[must_use]
    pub fn instance(&self) -> Option<&'a dyn Inspect> {
        self.instance
    }

    /// Render any member
    #[must_use]
    pub fn render(&self, member: &MemberDescriptor) -> String {
        match member {
            MemberDescriptor::Constructor(ctor) => self.render_constructor(ctor),
            MemberDescriptor::Field(field) => self.render_field(field),
            MemberDescriptor::Property(property) => self.render_property(property),
            MemberDescriptor::Method(method) => self.render_method(method),
            MemberDescriptor::Event(event) => self.render_event(event),
            MemberDescriptor::Parameter(param) => self.render_parameter(param),
            MemberDescriptor::ReturnValue { description } => {
                self.render_return_value(description.as_deref())
            }
            MemberDescriptor::Other { description } => self.render_other(description.as_deref()),
        }
    }

    /// `[attrs]\n<qualifiers><ctor name> (<params>)`
    #[must_use]
    pub fn render_constructor(&self, ctor: &ConstructorDescriptor) -> String {
        let mut out = String::new();
        self.write_method_attributes(&mut out, &ctor.flags, &ctor.custom_attributes);
        out.push_str(&self.qualifiers().method_like(&ctor.flags));
        out.push_str(&self.profile.constructor_name(ctor));
        out.push(' ');
        out.push_str(&self.render_parameters(&ctor.params));
        out
    }

    /// `[attrs]\n<qualifiers><type> <name>[ = <value>]<terminator>`
    ///
    /// Enumeration constants render as `<name>[ = <value>]<separator>`.
    #[must_use]
    pub fn render_field(&self, field: &FieldDescriptor) -> String {
        let encoder = self.encoder();
        let mut out = String::new();
        self.annotations(&encoder)
            .write_list(&mut out, &field.custom_attributes, "", true);

        let declared = !field.is_enum_constant();
        if declared {
            out.push_str(&self.qualifiers().field(field));
            out.push_str(&self.profile.type_name(&field.field_type));
            out.push(' ');
        }

        out.push_str(&field.name);

        if let Some(value) = self.probe().read_field(field) {
            out.push_str(" = ");
            out.push_str(&encoder.encode(&value));
        }

        out.push_str(self.profile.token(if declared {
            ProfileToken::StatementTerminator
        } else {
            ProfileToken::StatementSeparator
        }));
        out
    }

    /// `[attrs]\n[return: attrs]\n<qualifiers><declaration>[ <comment> = <result>]`
    ///
    /// The declaration comes from [`LanguageProfile::method_declaration`], by default
    /// `<return type> <name> (<params>)`. Special-named methods are prefixed by a note and
    /// every line of the rendering is commented out.
    #[must_use]
    pub fn render_method(&self, method: &MethodDescriptor) -> String {
        let comment = self.profile.token(ProfileToken::LineComment);
        let encoder = self.encoder();
        let mut out = String::new();

        if method.is_special_name() {
            out.push_str(comment);
            out.push_str(" Method is a specially named method:\n");
        }

        self.write_method_attributes(&mut out, &method.flags, &method.custom_attributes);
        self.annotations(&encoder)
            .write_list(&mut out, &method.return_attributes, RETURN_PREFIX, true);

        out.push_str(&self.qualifiers().method_like(&method.flags));
        out.push_str(
            &self
                .profile
                .method_declaration(method, &self.render_parameters(&method.params)),
        );

        if let Some(result) = self.probe().invoke(method) {
            out.push(' ');
            out.push_str(comment);
            out.push_str(" = ");
            out.push_str(&encoder.encode(&result));
        }

        if method.is_special_name() {
            out.replace('\n', &format!("\n{}\t", comment))
        } else {
            out
        }
    }

    /// `[attrs]\n<qualifiers><type> <name> {get[ /* = <value> */];set;}`
    #[must_use]
    pub fn render_property(&self, property: &PropertyDescriptor) -> String {
        let encoder = self.encoder();
        let mut out = String::new();
        self.annotations(&encoder)
            .write_list(&mut out, &property.custom_attributes, "", true);

        if let Some(accessor) = property.primary_accessor() {
            out.push_str(&self.qualifiers().method_like(accessor));
        }

        out.push_str(&self.profile.type_name(&property.property_type));
        out.push(' ');
        out.push_str(&property.name);
        out.push_str(" {");

        if property.can_read {
            out.push_str("get");
            if let Some(value) = self.probe().read_property(property) {
                out.push(' ');
                out.push_str(
                    &self
                        .profile
                        .inline_comment(&format!("= {}", encoder.encode(&value))),
                );
            }
            out.push(';');
        }
        if property.can_write {
            out.push_str("set;");
        }
        out.push('}');
        out
    }

    /// `<qualifiers>[<multicast> ]<handler type> <name>`
    #[must_use]
    pub fn render_event(&self, event: &EventDescriptor) -> String {
        let mut out = String::new();
        if let Some(accessor) = &event.add_accessor {
            out.push_str(&self.qualifiers().method_like(accessor));
        }
        if event.is_multicast {
            out.push_str(self.profile.token(ProfileToken::KeywordMulticast));
            out.push(' ');
        }
        out.push_str(&self.profile.type_name(&event.handler_type));
        out.push(' ');
        out.push_str(&event.name);
        out
    }

    /// `[attrs]<flag abbreviations><type> <name>[ /* = <default> */]`
    #[must_use]
    pub fn render_parameter(&self, param: &ParamDescriptor) -> String {
        let encoder = self.encoder();
        let mut out = String::new();
        self.annotations(&encoder)
            .write_list(&mut out, &param.custom_attributes, "", false);

        for (flag, abbreviation) in PARAM_FLAGS {
            if param.has_flag(flag) {
                out.push_str(abbreviation);
            }
        }
        if param.flags & ParamAttributes::RESERVED_MASK == ParamAttributes::RESERVED_MASK {
            out.push_str("reservedmask");
        }
        if param.has_flag(ParamAttributes::RESERVED3) {
            out.push_str("reserved3");
        }
        if param.has_flag(ParamAttributes::RESERVED4) {
            out.push_str("reserved4");
        }

        out.push_str(&self.profile.type_name(&param.param_type));
        out.push(' ');
        out.push_str(&param.name);

        if let Some(default) = param.declared_default() {
            out.push(' ');
            out.push_str(
                &self
                    .profile
                    .inline_comment(&format!("= {}", encoder.encode(default))),
            );
        }
        out
    }

    /// `(<param>, <param>, ...)`
    #[must_use]
    pub fn render_parameters(&self, params: &[ParamDescriptor]) -> String {
        let rendered: Vec<String> = params.iter().map(|p| self.render_parameter(p)).collect();
        format!("({})", rendered.join(", "))
    }

    /// `<comment> ReturnValue=<description>`
    #[must_use]
    pub fn render_return_value(&self, description: Option<&str>) -> String {
        format!(
            "{} ReturnValue={}",
            self.profile.token(ProfileToken::LineComment),
            self.render_other(description)
        )
    }

    /// The description itself, or a placeholder
    #[must_use]
    pub fn render_other(&self, description: Option<&str>) -> String {
        description.unwrap_or(NO_DESCRIPTION).to_string()
    }

    pub(crate) fn encoder(&self) -> ValueEncoder<'_> {
        ValueEncoder::new(self.profile, &self.config)
    }

    pub(crate) fn annotations<'e>(&'e self, encoder: &'e ValueEncoder<'e>) -> AnnotationWriter<'e> {
        AnnotationWriter::new(self.profile, encoder)
    }

    pub(crate) fn qualifiers(&self) -> QualifierAssembler<'a> {
        QualifierAssembler::new(self.profile)
    }

    fn probe(&self) -> ValueProbe<'_> {
        ValueProbe::new(self.instance, &self.config)
    }

    fn write_method_attributes(&self, out: &mut String, flags: &MethodFlags, list: &AnnotationList) {
        let encoder = self.encoder();
        let writer = self.annotations(&encoder);
        if self.config.pseudo_attributes && flags.is_internal_call() {
            writer.write_pseudo(out, INTERNAL_CALL, true);
        }
        writer.write_list(out, list, "", true);
    }
}
