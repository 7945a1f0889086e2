use thiserror::Error;

use crate::render::ProfileToken;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Rendering itself never fails: every fallible step inside the renderer degrades to a
/// defined textual fallback. The variants here cover the edges around the engine, which are
/// building and registering language profiles, and the [`crate::metadata::Inspect`]
/// implementations that back value probing.
///
/// # Error Categories
///
/// ## Profile Errors
/// - [`Error::ProfileIncomplete`] - A token table is missing a required token
/// - [`Error::ProfileExists`] - A profile with the same name is already registered
/// - [`Error::ProfileNotFound`] - No profile is registered under the requested name
///
/// ## Inspection Errors
/// - [`Error::MemberNotFound`] - The inspected object has no such field, property or method
/// - [`Error::InstanceRequired`] - A member was probed without a live instance
/// - [`Error::Faulted`] - Reading or invoking the member raised a fault
/// - [`Error::RecursionLimit`] - Nested annotation encoding went too deep
///
/// # Examples
///
/// ```rust
/// use cilreflect::{Error, render::ProfileRegistry};
///
/// let registry = ProfileRegistry::with_defaults();
/// match registry.get("cobol") {
///     Ok(profile) => println!("found {}", profile.name()),
///     Err(Error::ProfileNotFound(name)) => println!("no profile named {}", name),
///     Err(e) => println!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Encountered malformed textual input.
    ///
    /// Raised when parsing literal text (e.g. a decimal value) that does not follow the
    /// expected notation. Includes the source location where the problem was detected.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A language profile does not define every token the renderer needs.
    ///
    /// Raised by [`crate::render::TokenTableBuilder::build`] and at registration time, so a
    /// broken profile never makes it into a render call.
    #[error("Profile '{profile}' is missing required token {token}")]
    ProfileIncomplete {
        /// Name of the offending profile
        profile: String,
        /// The first token that was found missing or empty
        token: ProfileToken,
    },

    /// A profile with this name has already been registered.
    #[error("A profile named '{0}' is already registered")]
    ProfileExists(String),

    /// No profile has been registered under this name.
    #[error("No profile named '{0}' is registered")]
    ProfileNotFound(String),

    /// The inspected object does not expose a member with this name.
    #[error("Member '{0}' not found on the inspected object")]
    MemberNotFound(String),

    /// The member can only be read from a live instance, but none was supplied.
    #[error("An instance is required to read this member")]
    InstanceRequired,

    /// Reading a field or property, or invoking a method, raised a fault.
    #[error("Member access faulted - {0}")]
    Faulted(String),

    /// Recursion limit reached.
    ///
    /// Nested annotation values are encoded recursively; a self-referencing annotation
    /// object would otherwise recurse forever. The value is the limit that was reached.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}
