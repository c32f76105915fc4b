//! # Format Checker Registry
//!
//! The seam between this crate and the external schema-validation
//! framework: named, stateless checks over driver format lists, looked up
//! and dispatched by name during the framework's format-checking pass.
//!
//! ## Design
//!
//! The name → checker association is an explicit registry constructed by
//! the framework at initialization, not implicit global state. A registry
//! is immutable once handed to the framework and is `Send + Sync`, so a
//! single instance can be shared across validation threads.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::error::{CheckerError, FormatError};
use crate::fmt_count::FmtCountChecker;
use crate::varlen::VarlenFmtChecker;

/// A named validation rule over a driver's format list.
///
/// Implementations are stateless: `check` is a pure function of the format
/// list, and the same checker instance may be invoked concurrently from
/// multiple framework threads.
pub trait FormatChecker: Send + Sync {
    /// Fixed name under which the external framework looks up this checker.
    fn name(&self) -> &'static str;

    /// Validate the ordered format list.
    ///
    /// Returns `Ok(())` if the list satisfies this checker's rule, or a
    /// [`FormatError`] identifying the violation otherwise.
    fn check(&self, fmt_list: &[Value]) -> Result<(), FormatError>;
}

/// Explicit name → checker association used by the external framework.
///
/// The framework constructs one registry at initialization — either empty
/// via [`FormatCheckerRegistry::new`] or pre-loaded via
/// [`FormatCheckerRegistry::with_builtin_checkers`] — then dispatches
/// format lists to checkers by name during its format-checking pass.
pub struct FormatCheckerRegistry {
    checkers: HashMap<&'static str, Box<dyn FormatChecker>>,
}

impl FormatCheckerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            checkers: HashMap::new(),
        }
    }

    /// Create a registry pre-loaded with the built-in checkers
    /// (`"varlen-fmt"` and `"fmt-count"`).
    pub fn with_builtin_checkers() -> Self {
        let mut registry = Self::new();
        let builtins: [Box<dyn FormatChecker>; 2] =
            [Box::new(VarlenFmtChecker), Box::new(FmtCountChecker)];
        for checker in builtins {
            // Built-in names are distinct constants; direct insertion
            // cannot collide.
            registry.checkers.insert(checker.name(), checker);
        }
        registry
    }

    /// Register a checker under its fixed name.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::Duplicate`] if a checker is already
    /// registered under the same name.
    pub fn register(&mut self, checker: Box<dyn FormatChecker>) -> Result<(), CheckerError> {
        let name = checker.name();
        if self.checkers.contains_key(name) {
            return Err(CheckerError::Duplicate(name.to_string()));
        }
        tracing::debug!(checker = name, "registered format checker");
        self.checkers.insert(name, checker);
        Ok(())
    }

    /// Look up a checker by name.
    pub fn get(&self, name: &str) -> Option<&dyn FormatChecker> {
        self.checkers.get(name).map(|c| c.as_ref())
    }

    /// Returns the number of registered checkers.
    pub fn checker_count(&self) -> usize {
        self.checkers.len()
    }

    /// Names of all registered checkers, sorted alphabetically.
    pub fn checker_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.checkers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch a format list to the named checker.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::Unknown`] if no checker is registered under
    /// `name`, or the checker's [`FormatError`] if the format list violates
    /// its rule.
    pub fn check(&self, name: &str, fmt_list: &[Value]) -> Result<(), CheckerError> {
        let checker = self
            .get(name)
            .ok_or_else(|| CheckerError::Unknown(name.to_string()))?;
        tracing::debug!(
            checker = name,
            entries = fmt_list.len(),
            "running format check"
        );
        checker.check(fmt_list)?;
        Ok(())
    }
}

impl Default for FormatCheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormatCheckerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatCheckerRegistry")
            .field("checkers", &self.checker_names())
            .finish()
    }
}
