//! Render configuration
//!
//! This module controls which live values the renderer tries to obtain and how far nested
//! annotation values are followed. The descriptor text itself is not configurable; tokens come
//! from the active [`crate::render::LanguageProfile`].

/// Default limit for nested annotation values
pub const DEFAULT_MAX_ANNOTATION_DEPTH: usize = 8;

/// Configuration for value probing and annotation encoding
///
/// Probing reads fields and properties of the supplied instance; invocation calls zero-argument
/// methods on it, which is the only way rendering can cause side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderConfig {
    /// Read instance field values for ` = v` clauses
    /// Compile-time constants carried by the descriptor are shown regardless
    pub probe_fields: bool,

    /// Read property values through their getters for the inline `get` comment
    pub probe_properties: bool,

    /// Invoke zero-argument methods and show their result as a trailing comment
    /// Each method is invoked at most once per render call
    pub invoke_methods: bool,

    /// Emit attributes that are encoded as metadata flags rather than custom attributes
    /// (`Serializable`, `MethodImplAttribute(MethodImplOptions.InternalCall)`)
    pub pseudo_attributes: bool,

    /// Maximum nesting of annotation instances inside annotation values (default: 8)
    pub max_annotation_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            probe_fields: true,
            probe_properties: true,
            invoke_methods: true,
            pseudo_attributes: true,
            max_annotation_depth: DEFAULT_MAX_ANNOTATION_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration that renders declarations only
    ///
    /// No field, property or method of the instance is touched; only compile-time constants
    /// and annotations contribute values.
    #[must_use]
    pub fn metadata_only() -> Self {
        Self {
            probe_fields: false,
            probe_properties: false,
            invoke_methods: false,
            pseudo_attributes: true,
            max_annotation_depth: DEFAULT_MAX_ANNOTATION_DEPTH,
        }
    }

    /// Creates a configuration that reads values but never invokes methods
    ///
    /// Property getters still run, so this is only side-effect free for well-behaved getters.
    #[must_use]
    pub fn no_side_effects() -> Self {
        Self {
            invoke_methods: false,
            ..Self::default()
        }
    }

    /// Creates a configuration with every probe enabled
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }
}
