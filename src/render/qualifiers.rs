//! Qualifier lists per declaration kind.
//!
//! Each present qualifier is emitted as its token followed by one space, in a fixed order per
//! kind. `abstract` suppresses `virtual` on methods and `literal` suppresses `static` on
//! fields.

use crate::{
    metadata::{
        members::FieldDescriptor,
        method::MethodFlags,
        typesystem::{TypeCategory, TypeDescriptor},
    },
    render::{LanguageProfile, ProfileToken},
};

/// Assembles qualifier prefixes from a profile's tokens
pub struct QualifierAssembler<'a> {
    profile: &'a dyn LanguageProfile,
}

impl<'a> QualifierAssembler<'a> {
    /// Create an assembler for a profile
    pub fn new(profile: &'a dyn LanguageProfile) -> Self {
        QualifierAssembler { profile }
    }

    /// Qualifiers of a method, constructor or accessor
    ///
    /// Order: public, family, assembly, private, static, final, then abstract or virtual.
    #[must_use]
    pub fn method_like(&self, flags: &MethodFlags) -> String {
        let abstract_or_virtual = if flags.is_abstract() {
            Some(ProfileToken::QualifierAbstract)
        } else if flags.is_virtual() {
            Some(ProfileToken::QualifierVirtual)
        } else {
            None
        };

        self.join(
            [
                (flags.is_public(), ProfileToken::QualifierPublic),
                (flags.is_family(), ProfileToken::QualifierFamily),
                (flags.is_assembly(), ProfileToken::QualifierAssembly),
                (flags.is_private(), ProfileToken::QualifierPrivate),
                (flags.is_static(), ProfileToken::QualifierStatic),
                (flags.is_final(), ProfileToken::QualifierFinal),
            ]
            .into_iter()
            .filter_map(|(set, token)| set.then_some(token))
            .chain(abstract_or_virtual),
        )
    }

    /// Qualifiers of a field
    ///
    /// Order: public, private, assembly, family, then literal or static.
    #[must_use]
    pub fn field(&self, field: &FieldDescriptor) -> String {
        let literal_or_static = if field.is_literal() {
            Some(ProfileToken::QualifierLiteral)
        } else if field.is_static() {
            Some(ProfileToken::QualifierStatic)
        } else {
            None
        };

        self.join(
            [
                (field.is_public(), ProfileToken::QualifierPublic),
                (field.is_private(), ProfileToken::QualifierPrivate),
                (field.is_assembly(), ProfileToken::QualifierAssembly),
                (field.is_family(), ProfileToken::QualifierFamily),
            ]
            .into_iter()
            .filter_map(|(set, token)| set.then_some(token))
            .chain(literal_or_static),
        )
    }

    /// Qualifiers of a type declaration
    ///
    /// Value types and enums are never shown final, interfaces never abstract.
    #[must_use]
    pub fn type_decl(&self, ty: &TypeDescriptor) -> String {
        self.join(
            [
                (ty.is_public(), ProfileToken::QualifierPublic),
                (
                    ty.is_sealed() && !ty.category.is_value_type(),
                    ProfileToken::QualifierFinal,
                ),
                (
                    ty.is_abstract() && ty.category != TypeCategory::Interface,
                    ProfileToken::QualifierAbstract,
                ),
            ]
            .into_iter()
            .filter_map(|(set, token)| set.then_some(token)),
        )
    }

    fn join(&self, tokens: impl Iterator<Item = ProfileToken>) -> String {
        let mut out = String::new();
        for token in tokens {
            out.push_str(self.profile.token(token));
            out.push(' ');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            members::FieldAttributes,
            method::{MethodAccessFlags, MethodModifiers},
            typesystem::{TypeAttributes, TypeRef},
        },
        render::{BasicFamilyProfile, CFamilyProfile},
    };

    fn method(access: MethodAccessFlags, modifiers: MethodModifiers) -> String {
        let profile = CFamilyProfile::new();
        QualifierAssembler::new(&profile).method_like(&MethodFlags::new(access, modifiers))
    }

    fn field(flags: u32) -> String {
        let profile = CFamilyProfile::new();
        let field = FieldDescriptor::new(
            "f",
            TypeRef::new("A", "B"),
            flags,
            TypeRef::new("System", "Int32"),
        );
        QualifierAssembler::new(&profile).field(&field)
    }

    fn type_decl(flags: u32, category: TypeCategory) -> String {
        let profile = CFamilyProfile::new();
        let ty = TypeDescriptor::new("Example", "Foo", flags, category);
        QualifierAssembler::new(&profile).type_decl(&ty)
    }

    #[test]
    fn test_method_order() {
        assert_eq!(
            method(
                MethodAccessFlags::PUBLIC,
                MethodModifiers::STATIC | MethodModifiers::FINAL | MethodModifiers::VIRTUAL
            ),
            "public static sealed virtual "
        );
        assert_eq!(
            method(MethodAccessFlags::FAMILY, MethodModifiers::empty()),
            "protected "
        );
        assert_eq!(
            method(MethodAccessFlags::ASSEM, MethodModifiers::STATIC),
            "internal static "
        );
        assert_eq!(
            method(MethodAccessFlags::COMPILER_CONTROLLED, MethodModifiers::empty()),
            ""
        );
    }

    #[test]
    fn test_abstract_suppresses_virtual() {
        assert_eq!(
            method(
                MethodAccessFlags::PUBLIC,
                MethodModifiers::ABSTRACT | MethodModifiers::VIRTUAL
            ),
            "public abstract "
        );
        assert_eq!(
            method(MethodAccessFlags::PUBLIC, MethodModifiers::VIRTUAL),
            "public virtual "
        );
    }

    #[test]
    fn test_fam_or_assem_has_no_access_qualifier() {
        assert_eq!(
            method(MethodAccessFlags::FAM_OR_ASSEM, MethodModifiers::VIRTUAL),
            "virtual "
        );
    }

    #[test]
    fn test_field_order() {
        assert_eq!(field(FieldAttributes::PRIVATE), "private ");
        assert_eq!(
            field(FieldAttributes::FAMILY | FieldAttributes::STATIC),
            "protected static "
        );
        assert_eq!(
            field(FieldAttributes::PUBLIC | FieldAttributes::STATIC | FieldAttributes::LITERAL),
            "public const "
        );
        assert_eq!(field(FieldAttributes::ASSEMBLY), "internal ");
    }

    #[test]
    fn test_type_qualifiers() {
        assert_eq!(
            type_decl(TypeAttributes::PUBLIC | TypeAttributes::SEALED, TypeCategory::Class),
            "public sealed "
        );
        assert_eq!(
            type_decl(TypeAttributes::PUBLIC | TypeAttributes::SEALED, TypeCategory::ValueType),
            "public "
        );
        assert_eq!(
            type_decl(TypeAttributes::PUBLIC | TypeAttributes::SEALED, TypeCategory::Enum),
            "public "
        );
        assert_eq!(
            type_decl(
                TypeAttributes::PUBLIC | TypeAttributes::ABSTRACT | TypeAttributes::INTERFACE,
                TypeCategory::Interface
            ),
            "public "
        );
        assert_eq!(
            type_decl(TypeAttributes::ABSTRACT | TypeAttributes::SEALED, TypeCategory::Class),
            "sealed abstract "
        );
    }

    #[test]
    fn test_profile_tokens() {
        let profile = BasicFamilyProfile::new();
        let flags = MethodFlags::new(
            MethodAccessFlags::PUBLIC,
            MethodModifiers::STATIC | MethodModifiers::ABSTRACT,
        );
        assert_eq!(
            QualifierAssembler::new(&profile).method_like(&flags),
            "Public Shared MustOverride "
        );
    }
}
