//! Type headers and whole documents.
//!
//! [`TypeRenderer`] produces the declaration line of a type, its base-type and interface
//! lines, and (through [`MemberRenderer`]) the member blocks. A document is the ordered list
//! of those blocks; joining them is left to the caller.

use rayon::prelude::*;

use crate::{
    metadata::{
        members::MemberDescriptor,
        typesystem::{TypeCategory, TypeDescriptor, TypeRef},
        Inspect,
    },
    render::{
        annotations::SERIALIZABLE, LanguageProfile, MemberRenderer, ProfileToken, RenderConfig,
    },
};

/// Keyword used when a type fits none of the known categories
pub const UNKNOWN_TYPE_KEYWORD: &str = "type";

/// Renders type-level blocks in the syntax of one profile
///
/// # Examples
///
/// ```rust
/// use cilreflect::{
///     metadata::typesystem::{TypeAttributes, TypeCategory, TypeDescriptor},
///     render::{CFamilyProfile, RenderConfig, TypeRenderer},
/// };
///
/// let profile = CFamilyProfile::new();
/// let renderer = TypeRenderer::new(&profile, RenderConfig::default());
///
/// let ty = TypeDescriptor::new(
///     "Example",
///     "Foo",
///     TypeAttributes::PUBLIC | TypeAttributes::SEALED,
///     TypeCategory::Class,
/// );
/// assert_eq!(renderer.render_type(&ty), "public sealed class Example.Foo");
/// assert_eq!(renderer.render_base_type(ty.base.as_ref()), "// No Base Type");
/// ```
#[derive(Clone, Copy)]
pub struct TypeRenderer<'a> {
    members: MemberRenderer<'a>,
}

impl<'a> TypeRenderer<'a> {
    /// Create a renderer without a live instance
    ///
    /// ## Arguments
    /// * `profile` - The target syntax
    /// * `config`  - Probing and encoding options
    pub fn new(profile: &'a dyn LanguageProfile, config: RenderConfig) -> Self {
        TypeRenderer {
            members: MemberRenderer::new(profile, config),
        }
    }

    /// Probe member values against a live instance of the type
    ///
    /// Static members are read through the same seam. To show static values, pass an
    /// [`Inspect`] for the type's static context, or one that serves both.
    #[must_use]
    pub fn with_instance(self, instance: &'a dyn Inspect) -> Self {
        TypeRenderer {
            members: self.members.with_instance(instance),
        }
    }

    /// The renderer used for members
    #[must_use]
    pub fn members(&self) -> &MemberRenderer<'a> {
        &self.members
    }

    /// `[attrs]\n<qualifiers><keyword> <full name>`
    #[must_use]
    pub fn render_type(&self, ty: &TypeDescriptor) -> String {
        let profile = self.members.profile();
        let encoder = self.members.encoder();
        let writer = self.members.annotations(&encoder);

        let mut out = String::new();
        if self.members.config().pseudo_attributes && ty.is_serializable() {
            writer.write_pseudo(&mut out, SERIALIZABLE, true);
        }
        writer.write_list(&mut out, &ty.custom_attributes, "", true);

        out.push_str(&self.members.qualifiers().type_decl(ty));
        out.push_str(self.keyword(ty.category));
        out.push(' ');
        out.push_str(&profile.type_name(&ty.as_ref_type()));
        out
    }

    /// `<inherits> <simple name>`, or a comment when there is no base type
    #[must_use]
    pub fn render_base_type(&self, base: Option<&TypeRef>) -> String {
        let profile = self.members.profile();
        match base {
            Some(base) => format!(
                "{} {}",
                profile.token(ProfileToken::KeywordInherits),
                base.name
            ),
            None => format!("{} No Base Type", profile.token(ProfileToken::LineComment)),
        }
    }

    /// `<implements> <simple name>`
    #[must_use]
    pub fn render_interface(&self, interface: &TypeRef) -> String {
        format!(
            "{} {}",
            self.members.profile().token(ProfileToken::KeywordImplements),
            interface.name
        )
    }

    /// One line per implemented interface, in descriptor order
    #[must_use]
    pub fn render_interfaces(&self, ty: &TypeDescriptor) -> Vec<String> {
        ty.interfaces
            .iter()
            .map(|interface| self.render_interface(interface))
            .collect()
    }

    /// Header, base type, interfaces and every member, in order
    ///
    /// ## Arguments
    /// * `ty`      - The type
    /// * `members` - Its members, in the order they should appear
    #[must_use]
    pub fn render_document(&self, ty: &TypeDescriptor, members: &[MemberDescriptor]) -> Vec<String> {
        let mut blocks = self.render_preamble(ty);
        blocks.extend(members.iter().map(|member| self.members.render(member)));
        blocks
    }

    /// Same output as [`TypeRenderer::render_document`], with members rendered on the rayon pool
    ///
    /// Zero-argument methods are still invoked at most once each, but not in member order.
    #[must_use]
    pub fn render_document_parallel(
        &self,
        ty: &TypeDescriptor,
        members: &[MemberDescriptor],
    ) -> Vec<String> {
        let mut blocks = self.render_preamble(ty);
        let rendered: Vec<String> = members
            .par_iter()
            .map(|member| self.members.render(member))
            .collect();
        blocks.extend(rendered);
        blocks
    }

    fn render_preamble(&self, ty: &TypeDescriptor) -> Vec<String> {
        let mut blocks = Vec::with_capacity(2 + ty.interfaces.len());
        blocks.push(self.render_type(ty));
        blocks.push(self.render_base_type(ty.base.as_ref()));
        blocks.extend(self.render_interfaces(ty));
        blocks
    }

    fn keyword(&self, category: TypeCategory) -> &'a str {
        let profile = self.members.profile();
        match category {
            TypeCategory::Class => profile.token(ProfileToken::KeywordClass),
            TypeCategory::Enum => profile.token(ProfileToken::KeywordEnum),
            TypeCategory::ValueType => profile.token(ProfileToken::KeywordValueType),
            TypeCategory::Interface => profile.token(ProfileToken::KeywordInterface),
            TypeCategory::Unknown => UNKNOWN_TYPE_KEYWORD,
        }
    }
}
