use crate::metadata::{
    customattributes::{new_annotation_list, AnnotationList, AnnotationRc},
    typesystem::{TypeRef, Value},
};

#[allow(non_snake_case)]
/// All possible flags for `FieldAttributes`
pub mod FieldAttributes {
    /// These 3 bits contain one of the following values:
    pub const FIELD_ACCESS_MASK: u32 = 0x0007;
    /// Member not referenceable
    pub const COMPILER_CONTROLLED: u32 = 0x0000;
    /// Accessible only by the parent type
    pub const PRIVATE: u32 = 0x0001;
    /// Accessible by sub-types only in this Assembly
    pub const FAM_AND_ASSEM: u32 = 0x0002;
    /// Accessibly by anyone in the Assembly
    pub const ASSEMBLY: u32 = 0x0003;
    /// Accessible only by type and sub-types
    pub const FAMILY: u32 = 0x0004;
    /// Accessibly by sub-types anywhere, plus anyone in assembly
    pub const FAM_OR_ASSEM: u32 = 0x0005;
    /// Accessibly by anyone who has visibility to this scope
    pub const PUBLIC: u32 = 0x0006;
    /// Defined on type, else per instance
    pub const STATIC: u32 = 0x0010;
    /// Field can only be initialized, not written to after init
    pub const INIT_ONLY: u32 = 0x0020;
    /// Value is compile time constant
    pub const LITERAL: u32 = 0x0040;
    /// Reserved (to indicate this field should not be serialized when type is remoted)
    pub const NOT_SERIALIZED: u32 = 0x0080;
    /// Field is special
    pub const SPECIAL_NAME: u32 = 0x0200;
    /// CLI provides 'special' behavior, depending upon the name of the field
    pub const RTSPECIAL_NAME: u32 = 0x0400;
    /// Field has marshalling information
    pub const HAS_FIELD_MARSHAL: u32 = 0x1000;
    /// Field has default
    pub const HAS_DEFAULT: u32 = 0x8000;
}

/// Represents a field declaration.
///
/// Enumeration constants are fields too: the walker marks them with `in_enum` so the renderer
/// can print them as bare names separated by the profile's separator token.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The field name
    pub name: String,
    /// The type that declares this field
    pub declaring_type: TypeRef,
    /// bitmask of `FieldAttributes`, §II.23.1.5
    pub flags: u32,
    /// The declared field type
    pub field_type: TypeRef,
    /// The declaring type is an enumeration
    pub in_enum: bool,
    /// `flags.HAS_DEFAULT` -> The compile-time constant of this field
    pub constant: Option<Value>,
    /// Custom attributes applied to this field
    pub custom_attributes: AnnotationList,
}

impl FieldDescriptor {
    /// Create a field outside of an enumeration, without constant or attributes
    ///
    /// ## Arguments
    /// * `name`           - The field name
    /// * `declaring_type` - The type that declares the field
    /// * `flags`          - Raw `FieldAttributes`
    /// * `field_type`     - The declared field type
    pub fn new(
        name: impl Into<String>,
        declaring_type: TypeRef,
        flags: u32,
        field_type: TypeRef,
    ) -> Self {
        FieldDescriptor {
            name: name.into(),
            declaring_type,
            flags,
            field_type,
            in_enum: false,
            constant: None,
            custom_attributes: new_annotation_list(),
        }
    }

    /// Mark the field as declared by an enumeration
    #[must_use]
    pub fn in_enum(mut self) -> Self {
        self.in_enum = true;
        self
    }

    /// Attach the compile-time constant
    #[must_use]
    pub fn with_constant(mut self, value: impl Into<Value>) -> Self {
        self.constant = Some(value.into());
        self
    }

    /// Append a custom attribute
    #[must_use]
    pub fn with_attribute(self, attribute: AnnotationRc) -> Self {
        self.custom_attributes.push(attribute);
        self
    }

    fn access(&self) -> u32 {
        self.flags & FieldAttributes::FIELD_ACCESS_MASK
    }

    /// Accessible by anyone
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.access() == FieldAttributes::PUBLIC
    }

    /// Accessible by the declaring type only
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.access() == FieldAttributes::PRIVATE
    }

    /// Accessible by anyone in the assembly
    #[must_use]
    pub fn is_assembly(&self) -> bool {
        self.access() == FieldAttributes::ASSEMBLY
    }

    /// Accessible by the type and its sub-types only
    #[must_use]
    pub fn is_family(&self) -> bool {
        self.access() == FieldAttributes::FAMILY
    }

    /// Defined on the type rather than per instance
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags & FieldAttributes::STATIC != 0
    }

    /// Compile-time constant
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.flags & FieldAttributes::LITERAL != 0
    }

    /// Special-named, e.g. the `value__` backing field of an enumeration
    #[must_use]
    pub fn is_special_name(&self) -> bool {
        self.flags & FieldAttributes::SPECIAL_NAME != 0
    }

    /// An enumeration constant (declared by an enum and not special-named)
    #[must_use]
    pub fn is_enum_constant(&self) -> bool {
        self.in_enum && !self.is_special_name()
    }
}
