//! Annotation blocks.
//!
//! An annotation renders as `<open><prefix>Full.Name(P1=v, F1=v)<close>`; the parenthesized
//! part is omitted when the attribute type declares no members. Blocks either put each
//! annotation on its own line (types, members, return values) or keep them inline
//! (parameters).

use crate::{
    metadata::customattributes::{AnnotationInstance, AnnotationList},
    render::{LanguageProfile, ProfileToken, ValueEncoder},
};

/// Pseudo-attribute emitted for serializable types
pub const SERIALIZABLE: &str = "Serializable";
/// Pseudo-attribute emitted for methods implemented inside the runtime
pub const INTERNAL_CALL: &str = "MethodImplAttribute(MethodImplOptions.InternalCall)";
/// Prefix marking annotations of a return value
pub const RETURN_PREFIX: &str = "return: ";

/// Writes annotation blocks in a profile's delimiters
pub struct AnnotationWriter<'a> {
    profile: &'a dyn LanguageProfile,
    encoder: &'a ValueEncoder<'a>,
}

impl<'a> AnnotationWriter<'a> {
    /// Create a writer
    ///
    /// ## Arguments
    /// * `profile` - Supplies the delimiters
    /// * `encoder` - Encodes member values
    pub fn new(profile: &'a dyn LanguageProfile, encoder: &'a ValueEncoder<'a>) -> Self {
        AnnotationWriter { profile, encoder }
    }

    /// Append every annotation of a list, in order
    ///
    /// ## Arguments
    /// * `out`     - Destination
    /// * `list`    - The annotations
    /// * `prefix`  - Emitted after the opening delimiter (e.g. [`RETURN_PREFIX`])
    /// * `newline` - Follow each annotation with `\n`
    pub fn write_list(&self, out: &mut String, list: &AnnotationList, prefix: &str, newline: bool) {
        for (_, annotation) in list.iter() {
            self.write_one(out, annotation, prefix);
            if newline {
                out.push('\n');
            }
        }
    }

    /// Append a single annotation
    pub fn write_one(&self, out: &mut String, annotation: &AnnotationInstance, prefix: &str) {
        out.push_str(self.profile.token(ProfileToken::AnnotationOpen));
        out.push_str(prefix);
        out.push_str(&annotation.ty.fullname());
        if annotation.has_members() {
            out.push('(');
            out.push_str(&self.encoder.encode_members(annotation));
            out.push(')');
        }
        out.push_str(self.profile.token(ProfileToken::AnnotationClose));
    }

    /// Append an attribute that has no instance, such as a metadata flag shown as one
    ///
    /// ## Arguments
    /// * `out`     - Destination
    /// * `text`    - The attribute text between the delimiters
    /// * `newline` - Follow the attribute with `\n`
    pub fn write_pseudo(&self, out: &mut String, text: &str, newline: bool) {
        out.push_str(self.profile.token(ProfileToken::AnnotationOpen));
        out.push_str(text);
        out.push_str(self.profile.token(ProfileToken::AnnotationClose));
        if newline {
            out.push('\n');
        }
    }
}
