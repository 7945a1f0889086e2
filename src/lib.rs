// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # cilreflect
//!
//! Render .NET type descriptions as human-readable pseudo-source in a chosen target syntax.
//!
//! `cilreflect` takes a structured description of a type (its base type, interfaces, fields,
//! properties, methods, constructors, events, parameters and custom attributes) and produces
//! declarations such as
//!
//! ```text
//! [System.ObsoleteAttribute(Message="use Bar")]
//! public sealed class Example.Foo
//! // No Base Type
//! private System.Int64 Count = 42L;
//! public System.String GetName () // = "Bob"
//! ```
//!
//! The output is documentation, not compilable source. When a live instance of the type is
//! available, current field and property values and the results of zero-argument methods are
//! shown alongside the declarations.
//!
//! ## Features
//!
//! - **🔤 Pluggable syntaxes** - C-family and Basic-family profiles built in, custom profiles as plain data
//! - **🔍 Value probing** - Fields, properties and zero-argument methods read from a live instance
//! - **🛡️ Fail-soft** - Faulting or panicking probes never abort a render
//! - **🧩 Nested attributes** - Attribute values that are attributes themselves are encoded recursively
//! - **⚡ Parallel documents** - Members of a type can be rendered on the rayon pool
//!
//! ## Quick Start
//!
//! ```rust
//! use cilreflect::prelude::*;
//!
//! let profile = CFamilyProfile::new();
//! let ty = TypeDescriptor::new(
//!     "Example",
//!     "Foo",
//!     TypeAttributes::PUBLIC | TypeAttributes::SEALED,
//!     TypeCategory::Class,
//! );
//!
//! let renderer = TypeRenderer::new(&profile, RenderConfig::default());
//! assert_eq!(
//!     renderer.render_document(&ty, &[]),
//!     vec!["public sealed class Example.Foo", "// No Base Type"]
//! );
//! ```
//!
//! ## Architecture
//!
//! ### Descriptor Model
//!
//! [`metadata`] holds the read-only descriptors a metadata walker hands to the renderer, the
//! [`metadata::typesystem::Value`] representation of probed data, and the
//! [`metadata::Inspect`] trait through which live objects are read.
//!
//! ### Rendering Engine
//!
//! [`render`] holds the engine: the [`render::LanguageProfile`] contract and its token
//! tables, qualifier assembly, literal encoding, value probing and the member and type
//! renderers.
//!
//! ## Error Handling
//!
//! Rendering itself never fails. The [`Error`] type covers building and registering language
//! profiles, and is what [`metadata::Inspect`] implementations report when a member cannot be
//! read:
//!
//! ```rust
//! use cilreflect::{render::ProfileRegistry, Error};
//!
//! let registry = ProfileRegistry::with_defaults();
//! match registry.get("fortran") {
//!     Ok(profile) => println!("Rendering as {}", profile.name()),
//!     Err(Error::ProfileNotFound(name)) => println!("Unknown syntax: {}", name),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Swallowed probe failures and annotation depth cut-offs are reported through the [`log`]
//! facade at `debug` level, caught panics at `trace`. No logger is installed by the library.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use cilreflect::prelude::*;
///
/// let registry = ProfileRegistry::with_defaults();
/// let profile = registry.get("basic")?;
/// assert_eq!(profile.token(ProfileToken::KeywordClass), "Class");
/// # Ok::<(), cilreflect::Error>(())
/// ```
pub mod prelude;

/// The descriptor model: types, members, custom attributes and values
///
/// # Key Components
///
/// - [`metadata::typesystem`] - [`metadata::typesystem::TypeDescriptor`], type references and values
/// - [`metadata::members`] - Fields, parameters, properties, events and the member sum type
/// - [`metadata::method`] - Methods, constructors and their flag groups
/// - [`metadata::customattributes`] - Custom attribute instances
/// - [`metadata::Inspect`] - The live-object seam used for probing
pub mod metadata;

/// The rendering engine
///
/// See [`render::TypeRenderer`] and [`render::MemberRenderer`] for the entry points and
/// [`render::LanguageProfile`] for the syntax contract.
pub mod render;

/// `cilreflect` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use cilreflect::{render::{ProfileRc, ProfileRegistry}, Result};
///
/// fn lookup(name: &str) -> Result<ProfileRc> {
///     ProfileRegistry::with_defaults().get(name)
/// }
/// assert!(lookup("cfamily").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `cilreflect` Error type
///
/// The main error type for all fallible operations in this crate.
pub use error::Error;
