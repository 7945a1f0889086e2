//! The language profile contract.
//!
//! A language profile is the vocabulary of one target syntax: comment markers, annotation
//! delimiters, declaration keywords, statement punctuation and qualifiers. The renderer is
//! written once against [`LanguageProfile`]; swapping the profile swaps tokens, constructor
//! naming, type naming, inline comments, method layout and literal notation, and nothing else.
//!
//! # Key Types
//! - [`ProfileToken`] - The closed set of tokens every profile supplies
//! - [`TokenTable`] - One string per token, always complete
//! - [`TokenTableBuilder`] - Assembles a table and fails fast on missing tokens
//! - [`LanguageProfile`] - The trait the renderer is parameterized over
//! - [`TableProfile`] - A profile defined purely as data
//!
//! # Examples
//!
//! ```rust
//! use cilreflect::render::{
//!     ConstructorNaming, LanguageProfile, LiteralTable, ProfileToken, TableProfile, TokenTable,
//! };
//!
//! let tokens = TokenTable::from_fn(|token| match token {
//!     ProfileToken::LineComment => "--",
//!     ProfileToken::StatementTerminator | ProfileToken::StatementSeparator => "",
//!     _ => "kw",
//! });
//! let profile = TableProfile::new("dashes", tokens, LiteralTable::plain(), ConstructorNaming::Fixed("ctor".into()));
//!
//! assert_eq!(profile.token(ProfileToken::LineComment), "--");
//! ```

use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::{
    metadata::{
        method::{ConstructorDescriptor, MethodDescriptor},
        typesystem::TypeRef,
    },
    render::LiteralTable,
    Error, Result,
};

/// Every token a language profile supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum ProfileToken {
    /// Starts a comment running to the end of the line
    LineComment,
    /// Opens an annotation
    AnnotationOpen,
    /// Closes an annotation
    AnnotationClose,
    /// Declares a reference type
    KeywordClass,
    /// Declares an enumeration
    KeywordEnum,
    /// Declares a value type
    KeywordValueType,
    /// Declares an interface
    KeywordInterface,
    /// Introduces the base type
    KeywordInherits,
    /// Introduces an implemented interface
    KeywordImplements,
    /// Marks a multicast event
    KeywordMulticast,
    /// Ends a statement
    StatementTerminator,
    /// Separates enumeration constants
    StatementSeparator,
    /// Public access
    QualifierPublic,
    /// Family (protected) access
    QualifierFamily,
    /// Assembly (internal) access
    QualifierAssembly,
    /// Private access
    QualifierPrivate,
    /// Static member
    QualifierStatic,
    /// Final method or sealed type
    QualifierFinal,
    /// Abstract member or type
    QualifierAbstract,
    /// Virtual method
    QualifierVirtual,
    /// Compile-time constant
    QualifierLiteral,
}

impl ProfileToken {
    /// Tokens that a syntax may legitimately leave empty
    ///
    /// Line-oriented syntaxes have no statement terminator or separator.
    #[must_use]
    pub fn may_be_empty(self) -> bool {
        matches!(
            self,
            ProfileToken::StatementTerminator | ProfileToken::StatementSeparator
        )
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One string per [`ProfileToken`].
///
/// A table can only be created complete, either from a total mapping ([`TokenTable::from_fn`])
/// or through [`TokenTableBuilder`], so lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    tokens: Vec<String>,
}

impl TokenTable {
    /// Build a table from a total mapping of tokens to strings
    ///
    /// ## Arguments
    /// * `f` - Called once per token, in declaration order
    pub fn from_fn<S: Into<String>>(f: impl Fn(ProfileToken) -> S) -> Self {
        TokenTable {
            tokens: ProfileToken::iter().map(|token| f(token).into()).collect(),
        }
    }

    /// Start building a table for the named profile
    pub fn builder(profile: impl Into<String>) -> TokenTableBuilder {
        TokenTableBuilder::new(profile)
    }

    /// The string for a token
    #[must_use]
    pub fn get(&self, token: ProfileToken) -> &str {
        &self.tokens[token.index()]
    }

    /// Check that every mandatory token is non-empty
    ///
    /// ## Arguments
    /// * `profile` - Name reported in the error
    ///
    /// # Errors
    /// Returns [`Error::ProfileIncomplete`] naming the first empty mandatory token.
    pub fn validate(&self, profile: &str) -> Result<()> {
        for token in ProfileToken::iter() {
            if !token.may_be_empty() && self.get(token).is_empty() {
                return Err(Error::ProfileIncomplete {
                    profile: profile.to_string(),
                    token,
                });
            }
        }
        Ok(())
    }
}

/// Assembles a [`TokenTable`] token by token.
///
/// # Examples
///
/// ```rust
/// use cilreflect::{render::{ProfileToken, TokenTable}, Error};
///
/// let result = TokenTable::builder("partial")
///     .token(ProfileToken::LineComment, "#")
///     .build();
///
/// assert!(matches!(
///     result,
///     Err(Error::ProfileIncomplete { token: ProfileToken::AnnotationOpen, .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct TokenTableBuilder {
    profile: String,
    tokens: Vec<Option<String>>,
}

impl TokenTableBuilder {
    /// Create an empty builder for the named profile
    pub fn new(profile: impl Into<String>) -> Self {
        TokenTableBuilder {
            profile: profile.into(),
            tokens: vec![None; ProfileToken::COUNT],
        }
    }

    /// Start from an existing table, e.g. to derive a dialect
    pub fn from_table(profile: impl Into<String>, table: &TokenTable) -> Self {
        TokenTableBuilder {
            profile: profile.into(),
            tokens: table.tokens.iter().cloned().map(Some).collect(),
        }
    }

    /// Set a token
    #[must_use]
    pub fn token(mut self, token: ProfileToken, value: impl Into<String>) -> Self {
        self.tokens[token.index()] = Some(value.into());
        self
    }

    /// Finish the table
    ///
    /// # Errors
    /// Returns [`Error::ProfileIncomplete`] if a token was never set, or a mandatory token
    /// was set to an empty string.
    pub fn build(self) -> Result<TokenTable> {
        let mut tokens = Vec::with_capacity(ProfileToken::COUNT);
        for (token, value) in ProfileToken::iter().zip(self.tokens) {
            match value {
                Some(value) => tokens.push(value),
                None => {
                    return Err(Error::ProfileIncomplete {
                        profile: self.profile,
                        token,
                    })
                }
            }
        }

        let table = TokenTable { tokens };
        table.validate(&self.profile)?;
        Ok(table)
    }
}

/// The vocabulary of one target syntax.
///
/// Implementations must be complete: [`LanguageProfile::tokens`] returns a table with every
/// token, which the registry validates on registration.
pub trait LanguageProfile: Send + Sync {
    /// The name the profile is registered under
    fn name(&self) -> &str;

    /// The token table
    fn tokens(&self) -> &TokenTable;

    /// The literal notation per value kind
    fn literals(&self) -> &LiteralTable;

    /// The name a constructor is declared with
    ///
    /// ## Arguments
    /// * `ctor` - The constructor being rendered
    fn constructor_name(&self, ctor: &ConstructorDescriptor) -> String;

    /// Lookup of a single token
    fn token(&self, token: ProfileToken) -> &str {
        self.tokens().get(token)
    }

    /// How a referenced type is spelled in declarations
    fn type_name(&self, ty: &TypeRef) -> String {
        ty.fullname()
    }

    /// A comment embedded in the middle of a declaration
    fn inline_comment(&self, text: &str) -> String {
        format!("/* {} */", text)
    }

    /// The part of a method declaration that follows its qualifiers
    ///
    /// ## Arguments
    /// * `method`     - The method being rendered
    /// * `parameters` - The already rendered parameter list, parentheses included
    fn method_declaration(&self, method: &MethodDescriptor, parameters: &str) -> String {
        format!(
            "{} {} {}",
            self.type_name(&method.return_type),
            method.name,
            parameters
        )
    }
}

/// How a [`TableProfile`] names constructors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorNaming {
    /// Use the simple name of the declaring type
    DeclaringType,
    /// Use a fixed keyword
    Fixed(String),
}

/// A [`LanguageProfile`] defined entirely by data
#[derive(Debug, Clone)]
pub struct TableProfile {
    name: String,
    tokens: TokenTable,
    literals: LiteralTable,
    constructor: ConstructorNaming,
}

impl TableProfile {
    /// Create a new data-driven profile
    ///
    /// ## Arguments
    /// * `name`        - The registration name
    /// * `tokens`      - The token table
    /// * `literals`    - The literal notation
    /// * `constructor` - How constructors are named
    pub fn new(
        name: impl Into<String>,
        tokens: TokenTable,
        literals: LiteralTable,
        constructor: ConstructorNaming,
    ) -> Self {
        TableProfile {
            name: name.into(),
            tokens,
            literals,
            constructor,
        }
    }
}

impl LanguageProfile for TableProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    fn literals(&self) -> &LiteralTable {
        &self.literals
    }

    fn constructor_name(&self, ctor: &ConstructorDescriptor) -> String {
        match &self.constructor {
            ConstructorNaming::DeclaringType => ctor.declaring_type.name.clone(),
            ConstructorNaming::Fixed(name) => name.clone(),
        }
    }
}
