//! Lookup of language profiles by name.
//!
//! The registry is what a driver uses to turn a user-supplied syntax name into a profile. It
//! validates profiles on the way in, so a profile obtained from it is always complete.
//!
//! # Thread Safety
//!
//! Backed by a lock-free [`SkipMap`]; registration and lookup can happen concurrently from
//! any number of threads. Names are kept sorted.

use std::sync::Arc;

use crossbeam_skiplist::SkipMap;

use crate::{
    render::{BasicFamilyProfile, CFamilyProfile, LanguageProfile},
    Error, Result,
};

/// A reference to a registered profile
pub type ProfileRc = Arc<dyn LanguageProfile>;

/// Name-indexed collection of [`LanguageProfile`]s
///
/// # Examples
///
/// ```rust
/// use cilreflect::render::ProfileRegistry;
///
/// let registry = ProfileRegistry::with_defaults();
/// assert_eq!(registry.names(), vec!["basic", "cfamily"]);
///
/// let profile = registry.get("cfamily")?;
/// assert_eq!(profile.name(), "cfamily");
/// # Ok::<(), cilreflect::Error>(())
/// ```
pub struct ProfileRegistry {
    profiles: SkipMap<String, ProfileRc>,
}

impl ProfileRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        ProfileRegistry {
            profiles: SkipMap::new(),
        }
    }

    /// Create a registry holding the built-in profiles
    #[must_use]
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for profile in [
            Arc::new(CFamilyProfile::new()) as ProfileRc,
            Arc::new(BasicFamilyProfile::new()) as ProfileRc,
        ] {
            registry
                .profiles
                .insert(profile.name().to_string(), profile);
        }
        registry
    }

    /// Register a profile under its own name
    ///
    /// ## Arguments
    /// * `profile` - The profile to add
    ///
    /// # Errors
    /// Returns [`Error::ProfileIncomplete`] if a mandatory token is empty, or
    /// [`Error::ProfileExists`] if the name is already taken.
    pub fn register(&self, profile: ProfileRc) -> Result<()> {
        let name = profile.name().to_string();
        profile.tokens().validate(&name)?;

        let entry = self.profiles.get_or_insert(name.clone(), profile.clone());
        if Arc::ptr_eq(entry.value(), &profile) {
            log::debug!("Registered language profile '{}'", name);
            Ok(())
        } else {
            Err(Error::ProfileExists(name))
        }
    }

    /// Look up a profile by name
    ///
    /// ## Arguments
    /// * `name` - The registration name
    ///
    /// # Errors
    /// Returns [`Error::ProfileNotFound`] if no profile has that name.
    pub fn get(&self, name: &str) -> Result<ProfileRc> {
        self.profiles
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::ProfileNotFound(name.to_string()))
    }

    /// Returns `true` if a profile with this name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// All registered names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if no profile is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
