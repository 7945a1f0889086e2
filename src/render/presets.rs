//! Built-in language profiles.
//!
//! Two target syntaxes ship with the crate: a C-family syntax with braces, semicolons and
//! bracketed attributes, and a Basic-family syntax with keyword qualifiers, angle-bracketed
//! attributes and no statement punctuation.
//!
//! The Basic family declares methods as `Sub`/`Function ... As <type>` and has no block
//! comment, so inline comments are fenced by its line-comment marker on both sides.

use crate::{
    metadata::method::{ConstructorDescriptor, MethodDescriptor},
    render::{LanguageProfile, LiteralTable, ProfileToken, TokenTable},
};

/// Registration name of [`CFamilyProfile`]
pub const C_FAMILY: &str = "cfamily";
/// Registration name of [`BasicFamilyProfile`]
pub const BASIC_FAMILY: &str = "basic";

/// C-family syntax: `[Obsolete] public sealed class Foo : Bar`
#[derive(Debug, Clone)]
pub struct CFamilyProfile {
    tokens: TokenTable,
    literals: LiteralTable,
}

impl CFamilyProfile {
    /// Create the profile
    #[must_use]
    pub fn new() -> Self {
        CFamilyProfile {
            tokens: TokenTable::from_fn(|token| match token {
                ProfileToken::LineComment => "//",
                ProfileToken::AnnotationOpen => "[",
                ProfileToken::AnnotationClose => "]",
                ProfileToken::KeywordClass => "class",
                ProfileToken::KeywordEnum => "enum",
                ProfileToken::KeywordValueType => "struct",
                ProfileToken::KeywordInterface => "interface",
                ProfileToken::KeywordInherits | ProfileToken::KeywordImplements => ":",
                ProfileToken::KeywordMulticast => "event",
                ProfileToken::StatementTerminator => ";",
                ProfileToken::StatementSeparator => ",",
                ProfileToken::QualifierPublic => "public",
                ProfileToken::QualifierFamily => "protected",
                ProfileToken::QualifierAssembly => "internal",
                ProfileToken::QualifierPrivate => "private",
                ProfileToken::QualifierStatic => "static",
                ProfileToken::QualifierFinal => "sealed",
                ProfileToken::QualifierAbstract => "abstract",
                ProfileToken::QualifierVirtual => "virtual",
                ProfileToken::QualifierLiteral => "const",
            }),
            literals: LiteralTable::c_family(),
        }
    }
}

impl Default for CFamilyProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProfile for CFamilyProfile {
    fn name(&self) -> &str {
        C_FAMILY
    }

    fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    fn literals(&self) -> &LiteralTable {
        &self.literals
    }

    fn constructor_name(&self, ctor: &ConstructorDescriptor) -> String {
        ctor.declaring_type.name.clone()
    }
}

/// Return type that makes a Basic-family method a `Sub`
const VOID: &str = "System.Void";

/// Basic-family syntax: `<Obsolete> Public NotOverridable Class Foo Inherits Bar`
#[derive(Debug, Clone)]
pub struct BasicFamilyProfile {
    tokens: TokenTable,
    literals: LiteralTable,
}

impl BasicFamilyProfile {
    /// Create the profile
    #[must_use]
    pub fn new() -> Self {
        BasicFamilyProfile {
            tokens: TokenTable::from_fn(|token| match token {
                ProfileToken::LineComment => "'",
                ProfileToken::AnnotationOpen => "<",
                ProfileToken::AnnotationClose => ">",
                ProfileToken::KeywordClass => "Class",
                ProfileToken::KeywordEnum => "Enum",
                ProfileToken::KeywordValueType => "Structure",
                ProfileToken::KeywordInterface => "Interface",
                ProfileToken::KeywordInherits => "Inherits",
                ProfileToken::KeywordImplements => "Implements",
                ProfileToken::KeywordMulticast => "Event",
                ProfileToken::StatementTerminator | ProfileToken::StatementSeparator => "",
                ProfileToken::QualifierPublic => "Public",
                ProfileToken::QualifierFamily => "Protected",
                ProfileToken::QualifierAssembly => "Friend",
                ProfileToken::QualifierPrivate => "Private",
                ProfileToken::QualifierStatic => "Shared",
                ProfileToken::QualifierFinal => "NotOverridable",
                ProfileToken::QualifierAbstract => "MustOverride",
                ProfileToken::QualifierVirtual => "Overridable",
                ProfileToken::QualifierLiteral => "Const",
            }),
            literals: LiteralTable::basic_family(),
        }
    }
}

impl Default for BasicFamilyProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProfile for BasicFamilyProfile {
    fn name(&self) -> &str {
        BASIC_FAMILY
    }

    fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    fn literals(&self) -> &LiteralTable {
        &self.literals
    }

    fn constructor_name(&self, _ctor: &ConstructorDescriptor) -> String {
        "New".to_string()
    }

    fn inline_comment(&self, text: &str) -> String {
        let marker = self.token(ProfileToken::LineComment);
        format!("{} {} {}", marker, text, marker)
    }

    fn method_declaration(&self, method: &MethodDescriptor, parameters: &str) -> String {
        if method.return_type.fullname() == VOID {
            format!("Sub {} {}", method.name, parameters)
        } else {
            format!(
                "Function {} {} As {}",
                method.name,
                parameters,
                self.type_name(&method.return_type)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{method::MethodFlags, typesystem::{TypeRef, ValueKind}};

    fn method(name: &str, returns: &str) -> MethodDescriptor {
        MethodDescriptor::new(
            name,
            TypeRef::new("Example", "Person"),
            MethodFlags::default(),
            TypeRef::new("System", returns),
        )
    }

    #[test]
    fn test_presets_are_complete() {
        CFamilyProfile::new().tokens().validate(C_FAMILY).unwrap();
        BasicFamilyProfile::new().tokens().validate(BASIC_FAMILY).unwrap();
    }

    #[test]
    fn test_constructor_names() {
        let ctor = ConstructorDescriptor::new(TypeRef::new("Example", "Person"), MethodFlags::default());
        assert_eq!(CFamilyProfile::new().constructor_name(&ctor), "Person");
        assert_eq!(BasicFamilyProfile::new().constructor_name(&ctor), "New");
    }

    #[test]
    fn test_basic_has_no_statement_punctuation() {
        let basic = BasicFamilyProfile::new();
        assert_eq!(basic.token(ProfileToken::StatementTerminator), "");
        assert_eq!(basic.token(ProfileToken::StatementSeparator), "");
        assert_eq!(basic.literals().wrap(ValueKind::UInt32, "1"), "1UI");
    }

    #[test]
    fn test_inline_comments() {
        assert_eq!(CFamilyProfile::new().inline_comment("= 5"), "/* = 5 */");
        assert_eq!(BasicFamilyProfile::new().inline_comment("= 5"), "' = 5 '");
    }

    #[test]
    fn test_method_declarations() {
        let c_family = CFamilyProfile::new();
        let basic = BasicFamilyProfile::new();

        let get_name = method("GetName", "String");
        assert_eq!(c_family.method_declaration(&get_name, "()"), "System.String GetName ()");
        assert_eq!(
            basic.method_declaration(&get_name, "()"),
            "Function GetName () As System.String"
        );

        let reset = method("Reset", "Void");
        assert_eq!(c_family.method_declaration(&reset, "()"), "System.Void Reset ()");
        assert_eq!(basic.method_declaration(&reset, "()"), "Sub Reset ()");
    }
}
