//! Per-version include/exclude decisions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ActionParseError;

/// Disposition of a single version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// The version is supported.
    Include,
    /// The version is explicitly unsupported.
    Exclude,
}

impl Action {
    /// Return the action as a lowercase string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use verexpr::Action;
    ///
    /// assert_eq!(Action::Include.as_str(), "include");
    /// assert_eq!(Action::Exclude.as_str(), "exclude");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        }
    }

    /// Pick `Exclude` for negated units and `Include` otherwise.
    #[must_use]
    pub const fn from_negation(negated: bool) -> Self {
        if negated { Self::Exclude } else { Self::Include }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("include") {
            Ok(Self::Include)
        } else if trimmed.eq_ignore_ascii_case("exclude") {
            Ok(Self::Exclude)
        } else {
            Err(ActionParseError(trimmed.to_string()))
        }
    }
}

/// One resolved decision: `action` applied to `version`.
///
/// Serialises as `{"action": "include", "version": "1.20.1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExprAction {
    /// What happens to the version.
    pub action: Action,
    /// The version string the decision applies to.
    pub version: String,
}

impl ExprAction {
    /// Build a decision from its parts.
    #[must_use]
    pub fn new(action: Action, version: impl Into<String>) -> Self {
        Self {
            action,
            version: version.into(),
        }
    }

    /// Decision including `version`.
    #[must_use]
    pub fn include(version: impl Into<String>) -> Self {
        Self::new(Action::Include, version)
    }

    /// Decision excluding `version`.
    #[must_use]
    pub fn exclude(version: impl Into<String>) -> Self {
        Self::new(Action::Exclude, version)
    }
}
