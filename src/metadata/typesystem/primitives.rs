use std::{fmt, str::FromStr, sync::Arc};

use strum::{Display, EnumCount, EnumIter};

use crate::{
    metadata::{customattributes::AnnotationRc, typesystem::TypeRef},
    Error, Result,
};

/// Largest scale a `System.Decimal` can carry
const DECIMAL_MAX_SCALE: u32 = 28;

/// A runtime value obtained by probing a field, property or method, or supplied as a constant.
///
/// Values are opaque to the renderer: the only thing it ever asks of a value is its
/// [`ValueKind`], which selects the literal notation, and its plain text form ([`fmt::Display`]).
#[derive(Debug, Clone)]
pub enum Value {
    /// Null reference
    Null,
    /// Boolean value
    Boolean(bool),
    /// Character value
    Char(char),
    /// 8-bit signed integer
    I1(i8),
    /// 8-bit unsigned integer
    U1(u8),
    /// 16-bit signed integer
    I2(i16),
    /// 16-bit unsigned integer
    U2(u16),
    /// 32-bit signed integer
    I4(i32),
    /// 32-bit unsigned integer
    U4(u32),
    /// 64-bit signed integer
    I8(i64),
    /// 64-bit unsigned integer
    U8(u64),
    /// 32-bit floating point
    R4(f32),
    /// 64-bit floating point
    R8(f64),
    /// 128-bit decimal
    Decimal(Decimal),
    /// String value
    String(String),
    /// A `System.Type` object referring to the given type
    Type(TypeRef),
    /// A named constant of an enumeration type
    Enum {
        /// The enumeration type
        ty: TypeRef,
        /// The constant's name, which is also its text form
        name: String,
    },
    /// Any other object, represented by its runtime type and its text form
    Object {
        /// The runtime type of the object
        ty: TypeRef,
        /// What the object reports as its text form
        text: String,
    },
    /// A custom attribute instance nested inside another attribute
    Annotation(AnnotationRc),
}

/// The closed set of kinds that select a literal notation.
///
/// Every non-null [`Value`] maps to exactly one kind; kinds without a dedicated notation fall
/// into [`ValueKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum ValueKind {
    /// System.Char
    Char,
    /// System.Decimal
    Decimal,
    /// System.Double
    Double,
    /// System.Int64
    Int64,
    /// System.Single
    Single,
    /// System.String
    String,
    /// System.UInt32
    UInt32,
    /// System.UInt64
    UInt64,
    /// Objects that are not primitives (types, arbitrary objects)
    Object,
    /// Everything without a dedicated notation
    Other,
}

impl ValueKind {
    /// Position of this kind in a dense per-kind table
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Value {
    /// The encoding kind of this value, or `None` for [`Value::Null`]
    #[must_use]
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Null => None,
            Value::Char(_) => Some(ValueKind::Char),
            Value::Decimal(_) => Some(ValueKind::Decimal),
            Value::R8(_) => Some(ValueKind::Double),
            Value::I8(_) => Some(ValueKind::Int64),
            Value::R4(_) => Some(ValueKind::Single),
            Value::String(_) => Some(ValueKind::String),
            Value::U4(_) => Some(ValueKind::UInt32),
            Value::U8(_) => Some(ValueKind::UInt64),
            Value::Type(_) | Value::Object { .. } | Value::Annotation(_) => Some(ValueKind::Object),
            Value::Boolean(_)
            | Value::I1(_)
            | Value::U1(_)
            | Value::I2(_)
            | Value::U2(_)
            | Value::I4(_)
            | Value::Enum { .. } => Some(ValueKind::Other),
        }
    }

    /// Returns `true` for [`Value::Null`]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Create a string value
    ///
    /// ## Arguments
    /// * `value` - The initial value
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    /// Create an enumeration constant
    ///
    /// ## Arguments
    /// * `ty`   - The enumeration type
    /// * `name` - The name of the constant
    pub fn enumeration(ty: TypeRef, name: impl Into<String>) -> Self {
        Value::Enum {
            ty,
            name: name.into(),
        }
    }

    /// Create an opaque object value
    ///
    /// ## Arguments
    /// * `ty`   - The runtime type of the object
    /// * `text` - What the object reports as its text form
    pub fn object(ty: TypeRef, text: impl Into<String>) -> Self {
        Value::Object {
            ty,
            text: text.into(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::I1(a), Value::I1(b)) => a == b,
            (Value::U1(a), Value::U1(b)) => a == b,
            (Value::I2(a), Value::I2(b)) => a == b,
            (Value::U2(a), Value::U2(b)) => a == b,
            (Value::I4(a), Value::I4(b)) => a == b,
            (Value::U4(a), Value::U4(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::R4(a), Value::R4(b)) => a == b,
            (Value::R8(a), Value::R8(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Type(a), Value::Type(b)) => a == b,
            (Value::Enum { ty: ta, name: na }, Value::Enum { ty: tb, name: nb }) => {
                ta == tb && na == nb
            }
            (Value::Object { ty: ta, text: xa }, Value::Object { ty: tb, text: xb }) => {
                ta == tb && xa == xb
            }
            // Attribute objects have identity semantics
            (Value::Annotation(a), Value::Annotation(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Char(value) => write!(f, "{}", value),
            Value::I1(value) => write!(f, "{}", value),
            Value::U1(value) => write!(f, "{}", value),
            Value::I2(value) => write!(f, "{}", value),
            Value::U2(value) => write!(f, "{}", value),
            Value::I4(value) => write!(f, "{}", value),
            Value::U4(value) => write!(f, "{}", value),
            Value::I8(value) => write!(f, "{}", value),
            Value::U8(value) => write!(f, "{}", value),
            Value::R4(value) => write!(f, "{}", value),
            Value::R8(value) => write!(f, "{}", value),
            Value::Decimal(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{}", value),
            Value::Type(ty) => write!(f, "{}", ty),
            Value::Enum { name, .. } => write!(f, "{}", name),
            Value::Object { text, .. } => write!(f, "{}", text),
            Value::Annotation(annotation) => write!(f, "{}", annotation.ty),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::I1(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::U1(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::I2(value)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::U2(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I4(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::U4(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I8(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::U8(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::R4(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::R8(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<TypeRef> for Value {
    fn from(value: TypeRef) -> Self {
        Value::Type(value)
    }
}

impl From<AnnotationRc> for Value {
    fn from(value: AnnotationRc) -> Self {
        Value::Annotation(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// A `System.Decimal` value as a scaled integer: `mantissa / 10^scale`.
///
/// The scale is preserved when printing, so `1.50m` stays `1.50m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
}

impl Decimal {
    /// Create a decimal from mantissa and scale
    ///
    /// ## Arguments
    /// * `mantissa` - The unscaled integer value
    /// * `scale`    - Number of digits after the decimal point (at most 28)
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the scale exceeds what `System.Decimal` supports.
    pub fn new(mantissa: i128, scale: u32) -> Result<Self> {
        if scale > DECIMAL_MAX_SCALE {
            return Err(malformed_error!(
                "Decimal scale {} exceeds the maximum of {}",
                scale,
                DECIMAL_MAX_SCALE
            ));
        }
        Ok(Decimal { mantissa, scale })
    }

    /// The unscaled integer value
    #[must_use]
    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    /// Number of digits after the decimal point
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal {
            mantissa: i128::from(value),
            scale: 0,
        }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(malformed_error!("Empty decimal literal '{}'", text));
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed_error!("Invalid decimal literal '{}'", text));
        }

        let scale = u32::try_from(fraction.len())
            .map_err(|_| malformed_error!("Decimal literal '{}' is too long", text))?;

        let mut mantissa: i128 = 0;
        for byte in whole.bytes().chain(fraction.bytes()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(byte - b'0')))
                .ok_or_else(|| malformed_error!("Decimal literal '{}' overflows", text))?;
        }

        Decimal::new(if negative { -mantissa } else { mantissa }, scale)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }

        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };

        let (whole, fraction) = padded.split_at(padded.len() - scale);
        if self.mantissa < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}.{}", whole, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(Value::Null.kind(), None);
        assert_eq!(Value::Char('x').kind(), Some(ValueKind::Char));
        assert_eq!(
            Value::Decimal(Decimal::from(1)).kind(),
            Some(ValueKind::Decimal)
        );
        assert_eq!(Value::R8(1.0).kind(), Some(ValueKind::Double));
        assert_eq!(Value::I8(1).kind(), Some(ValueKind::Int64));
        assert_eq!(Value::R4(1.0).kind(), Some(ValueKind::Single));
        assert_eq!(Value::string("a").kind(), Some(ValueKind::String));
        assert_eq!(Value::U4(1).kind(), Some(ValueKind::UInt32));
        assert_eq!(Value::U8(1).kind(), Some(ValueKind::UInt64));
        assert_eq!(
            Value::Type(TypeRef::new("System", "String")).kind(),
            Some(ValueKind::Object)
        );
        assert_eq!(Value::I4(1).kind(), Some(ValueKind::Other));
        assert_eq!(Value::Boolean(true).kind(), Some(ValueKind::Other));
        assert_eq!(
            Value::enumeration(TypeRef::new("System", "DayOfWeek"), "Monday").kind(),
            Some(ValueKind::Other)
        );
    }

    #[test]
    fn test_kind_indices_are_dense() {
        for (expected, kind) in ValueKind::iter().enumerate() {
            assert_eq!(kind.index(), expected);
        }
        assert_eq!(ValueKind::iter().count(), ValueKind::COUNT);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::I4(-42).to_string(), "-42");
        assert_eq!(Value::R8(1.5).to_string(), "1.5");
        assert_eq!(Value::string("Hello").to_string(), "Hello");
        assert_eq!(Value::Char('A').to_string(), "A");
        assert_eq!(
            Value::Type(TypeRef::new("System", "Int32")).to_string(),
            "System.Int32"
        );
        assert_eq!(
            Value::enumeration(TypeRef::new("System", "DayOfWeek"), "Friday").to_string(),
            "Friday"
        );
        assert_eq!(
            Value::object(TypeRef::new("System", "Version"), "1.2.3.4").to_string(),
            "1.2.3.4"
        );
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(42i64), Value::I8(42));
        assert_eq!(Value::from(42u32), Value::U4(42));
        assert_eq!(Value::from("x"), Value::string("x"));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(7i32)), Value::I4(7));
    }

    #[test]
    fn test_decimal_display() {
        assert_eq!(Decimal::new(12345, 2).unwrap().to_string(), "123.45");
        assert_eq!(Decimal::new(-5, 3).unwrap().to_string(), "-0.005");
        assert_eq!(Decimal::new(150, 2).unwrap().to_string(), "1.50");
        assert_eq!(Decimal::new(7, 0).unwrap().to_string(), "7");
        assert_eq!(Decimal::new(0, 1).unwrap().to_string(), "0.0");
    }

    #[test]
    fn test_decimal_parse() {
        let value: Decimal = "12.50".parse().unwrap();
        assert_eq!(value.mantissa(), 1250);
        assert_eq!(value.scale(), 2);
        assert_eq!(value.to_string(), "12.50");

        let negative: Decimal = "-0.25".parse().unwrap();
        assert_eq!(negative.to_string(), "-0.25");

        assert!(matches!(
            "1.2.3".parse::<Decimal>(),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!("".parse::<Decimal>(), Err(Error::Malformed { .. })));
        assert!(matches!("abc".parse::<Decimal>(), Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_decimal_scale_limit() {
        assert!(Decimal::new(1, 28).is_ok());
        assert!(matches!(Decimal::new(1, 29), Err(Error::Malformed { .. })));
    }
}
