use crate::metadata::{
    customattributes::{new_annotation_list, AnnotationList, AnnotationRc},
    typesystem::{TypeRef, Value},
};

#[allow(non_snake_case)]
/// All possible flags for `ParamAttributes`
pub mod ParamAttributes {
    /// Param is `In`
    pub const IN: u32 = 0x0001;
    /// Param is `out`
    pub const OUT: u32 = 0x0002;
    /// Param is a locale identifier
    pub const LCID: u32 = 0x0004;
    /// Param is the return value
    pub const RETVAL: u32 = 0x0008;
    /// Param is optional
    pub const OPTIONAL: u32 = 0x0010;
    /// Param has default value
    pub const HAS_DEFAULT: u32 = 0x1000;
    /// Param has `FieldMarshal`
    pub const HAS_FIELD_MARSHAL: u32 = 0x2000;
    /// Reserved
    pub const RESERVED3: u32 = 0x4000;
    /// Reserved
    pub const RESERVED4: u32 = 0x8000;
    /// The bits reserved for runtime use
    pub const RESERVED_MASK: u32 = 0xf000;
}

/// Represents a method or constructor parameter
#[derive(Debug, Clone)]
pub struct ParamDescriptor {
    /// The parameter name
    pub name: String,
    /// bitmask of `ParamAttributes`, §II.23.1.13
    pub flags: u32,
    /// The declared parameter type
    pub param_type: TypeRef,
    /// `flags.HAS_DEFAULT` -> This is the default value of this parameter
    pub default: Option<Value>,
    /// Custom attributes applied to this parameter
    pub custom_attributes: AnnotationList,
}

impl ParamDescriptor {
    /// Create a parameter without default value or attributes
    ///
    /// ## Arguments
    /// * `name`       - The parameter name
    /// * `param_type` - The declared type
    /// * `flags`      - Raw `ParamAttributes`
    pub fn new(name: impl Into<String>, param_type: TypeRef, flags: u32) -> Self {
        ParamDescriptor {
            name: name.into(),
            flags,
            param_type,
            default: None,
            custom_attributes: new_annotation_list(),
        }
    }

    /// Attach the default value, shown when `HAS_DEFAULT` is set
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Append a custom attribute
    #[must_use]
    pub fn with_attribute(self, attribute: AnnotationRc) -> Self {
        self.custom_attributes.push(attribute);
        self
    }

    /// Returns `true` if any of the given `ParamAttributes` bits is set
    #[must_use]
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }

    /// The default value, if the parameter is flagged as having one
    #[must_use]
    pub fn declared_default(&self) -> Option<&Value> {
        if self.has_flag(ParamAttributes::HAS_DEFAULT) {
            self.default.as_ref()
        } else {
            None
        }
    }
}
