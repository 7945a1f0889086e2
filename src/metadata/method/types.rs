//! Method flag groups for .NET CIL methods, constructors and accessors.
//!
//! This module defines the bitflags used to represent method attributes and implementation
//! flags, split into the logical groups the renderer cares about.
//!
//! # Key Types
//! - [`MethodAccessFlags`]: The 3-bit member access field
//! - [`MethodModifiers`]: Static, final, virtual, abstract, special-name and friends
//! - [`MethodImplOptions`]: Implementation options such as internal calls
//! - [`MethodFlags`]: The three groups combined, as carried by every method-like descriptor

use bitflags::bitflags;

/// Bitmask for `ACCESS` state extraction
pub const METHOD_ACCESS_MASK: u32 = 0x0007;
/// Bitmask for `VTABLE_LAYOUT` information extraction
pub const METHOD_VTABLE_LAYOUT_MASK: u32 = 0x0100;
/// Bitmask for `CODE_TYPE` extraction
pub const METHOD_IMPL_CODE_TYPE_MASK: u32 = 0x0003;
/// Bitmask for `MANAGED` state extraction
pub const METHOD_IMPL_MANAGED_MASK: u32 = 0x0004;

// Method attributes split into logical groups
bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Method access flags
    pub struct MethodAccessFlags: u32 {
        /// Member not referenceable
        const COMPILER_CONTROLLED = 0x0000;
        /// Accessible only by the parent type
        const PRIVATE = 0x0001;
        /// Accessible by sub-types only in this Assembly
        const FAM_AND_ASSEM = 0x0002;
        /// Accessibly by anyone in the Assembly
        const ASSEM = 0x0003;
        /// Accessible only by type and sub-types
        const FAMILY = 0x0004;
        /// Accessibly by sub-types anywhere, plus anyone in assembly
        const FAM_OR_ASSEM = 0x0005;
        /// Accessibly by anyone who has visibility to this scope
        const PUBLIC = 0x0006;
    }
}

impl MethodAccessFlags {
    /// Extract access flags from raw method attributes
    #[must_use]
    pub fn from_method_flags(flags: u32) -> Self {
        let access = flags & METHOD_ACCESS_MASK;
        Self::from_bits_truncate(access)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Method modifiers and properties
    pub struct MethodModifiers: u32 {
        /// Defined on type, else per instance
        const STATIC = 0x0010;
        /// Method cannot be overridden
        const FINAL = 0x0020;
        /// Method is virtual
        const VIRTUAL = 0x0040;
        /// Method hides by name+sig, else just by name
        const HIDE_BY_SIG = 0x0080;
        /// Method can only be overriden if also accessible
        const STRICT = 0x0200;
        /// Method does not provide an implementation
        const ABSTRACT = 0x0400;
        /// Method is special
        const SPECIAL_NAME = 0x0800;
        /// CLI provides 'special' behavior, dpending upon the name of the method
        const RTSPECIAL_NAME = 0x1000;
        /// Implementation is forwarded through PInvoke
        const PINVOKE_IMPL = 0x2000;
        /// Method has security associate with it
        const HAS_SECURITY = 0x4000;
        /// Method calls another method containing security code
        const REQUIRE_SEC_OBJECT = 0x8000;
        /// Reserved: shall be zero for conforming implementations
        const UNMANAGED_EXPORT = 0x0008;
    }
}

impl MethodModifiers {
    /// Extract method modifiers from raw method attributes
    #[must_use]
    pub fn from_method_flags(flags: u32) -> Self {
        let modifiers = flags & !METHOD_ACCESS_MASK & !METHOD_VTABLE_LAYOUT_MASK;
        Self::from_bits_truncate(modifiers)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Method implementation additional options
    pub struct MethodImplOptions: u32 {
        /// Method cannot be inlined
        const NO_INLINING = 0x0008;
        /// Method is defined; used primarily in merge scenarios
        const FORWARD_REF = 0x0010;
        /// Method is a synchronized method
        const SYNCHRONIZED = 0x0020;
        /// Method signature is not to be mangled to do HRESULT conversion
        const PRESERVE_SIG = 0x0080;
        /// Method is implemented inside the runtime itself
        const INTERNAL_CALL = 0x1000;
    }
}

impl MethodImplOptions {
    /// Extract implementation options from raw implementation flags
    #[must_use]
    pub fn from_impl_flags(flags: u32) -> Self {
        let options = flags & !(METHOD_IMPL_CODE_TYPE_MASK | METHOD_IMPL_MANAGED_MASK);
        Self::from_bits_truncate(options)
    }
}

/// The flag groups of one method, constructor or accessor.
///
/// Access predicates match the 3-bit access field exactly, the way the CLI reflection API
/// does: a `FAM_OR_ASSEM` method is neither family nor assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodFlags {
    /// Member access
    pub access: MethodAccessFlags,
    /// Modifiers
    pub modifiers: MethodModifiers,
    /// Implementation options
    pub impl_options: MethodImplOptions,
}

impl MethodFlags {
    /// Combine access and modifiers, without implementation options
    #[must_use]
    pub fn new(access: MethodAccessFlags, modifiers: MethodModifiers) -> Self {
        MethodFlags {
            access,
            modifiers,
            impl_options: MethodImplOptions::empty(),
        }
    }

    /// Split raw `MethodAttributes` and `MethodImplAttributes` into their groups
    ///
    /// ## Arguments
    /// * `flags`      - Raw method attributes (§II.23.1.10)
    /// * `impl_flags` - Raw method implementation attributes (§II.23.1.11)
    #[must_use]
    pub fn from_raw(flags: u32, impl_flags: u32) -> Self {
        MethodFlags {
            access: MethodAccessFlags::from_method_flags(flags),
            modifiers: MethodModifiers::from_method_flags(flags),
            impl_options: MethodImplOptions::from_impl_flags(impl_flags),
        }
    }

    /// Add implementation options
    #[must_use]
    pub fn with_impl_options(mut self, impl_options: MethodImplOptions) -> Self {
        self.impl_options = impl_options;
        self
    }

    /// Accessible by anyone
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.access == MethodAccessFlags::PUBLIC
    }

    /// Accessible by the type and its sub-types only
    #[must_use]
    pub fn is_family(&self) -> bool {
        self.access == MethodAccessFlags::FAMILY
    }

    /// Accessible by anyone in the assembly
    #[must_use]
    pub fn is_assembly(&self) -> bool {
        self.access == MethodAccessFlags::ASSEM
    }

    /// Accessible by the declaring type only
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.access == MethodAccessFlags::PRIVATE
    }

    /// Defined on the type rather than per instance
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(MethodModifiers::STATIC)
    }

    /// Cannot be overridden
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.modifiers.contains(MethodModifiers::FINAL)
    }

    /// Has no implementation
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(MethodModifiers::ABSTRACT)
    }

    /// Participates in virtual dispatch
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        self.modifiers.contains(MethodModifiers::VIRTUAL)
    }

    /// Compiler-synthesized (accessors, operators, event add/remove, ...)
    #[must_use]
    pub fn is_special_name(&self) -> bool {
        self.modifiers.contains(MethodModifiers::SPECIAL_NAME)
    }

    /// Implemented inside the runtime
    #[must_use]
    pub fn is_internal_call(&self) -> bool {
        self.impl_options.contains(MethodImplOptions::INTERNAL_CALL)
    }
}

impl Default for MethodFlags {
    fn default() -> Self {
        MethodFlags::new(MethodAccessFlags::COMPILER_CONTROLLED, MethodModifiers::empty())
    }
}
