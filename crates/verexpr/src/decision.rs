//! Included/excluded bookkeeping shared by the parser merge and the differ.
//!
//! Range decisions only ever add: once a range excludes a version, later
//! range includes cannot clear it. Absolute decisions override whatever came
//! before them, so the last absolute decision for a version wins.

use std::collections::HashSet;

use crate::action::{Action, ExprAction};
use crate::catalog::VersionCatalog;

/// Set of strings iterated in first-insertion order.
///
/// Re-inserting a present value keeps its position; removing and inserting
/// again moves it to the end.
#[derive(Debug, Clone, Default)]
struct InsertionSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl InsertionSet {
    fn insert(&mut self, value: &str) {
        if self.members.insert(value.to_owned()) {
            self.order.push(value.to_owned());
        }
    }

    fn remove(&mut self, value: &str) {
        if self.members.remove(value) {
            self.order.retain(|existing| existing != value);
        }
    }

    fn contains(&self, value: &str) -> bool {
        self.members.contains(value)
    }

    fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }
}

/// Merged include/exclude state for a set of versions.
///
/// # Examples
/// ```
/// use verexpr::{Action, DecisionSet};
/// let mut set = DecisionSet::default();
/// set.apply_range(Action::Exclude, "1.20.2");
/// set.apply_range(Action::Include, "1.20.2");
/// assert!(set.is_excluded("1.20.2"));
/// set.apply_absolute(Action::Include, "1.20.2");
/// assert!(!set.is_excluded("1.20.2"));
/// assert!(set.is_included("1.20.2"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecisionSet {
    included: InsertionSet,
    excluded: InsertionSet,
}

impl DecisionSet {
    /// Record a range-derived decision. Never removes anything.
    pub fn apply_range(&mut self, action: Action, version: &str) {
        match action {
            Action::Include => self.included.insert(version),
            Action::Exclude => self.excluded.insert(version),
        }
    }

    /// Record an absolute decision, overriding any earlier one for `version`.
    pub fn apply_absolute(&mut self, action: Action, version: &str) {
        match action {
            Action::Include => {
                self.included.insert(version);
                self.excluded.remove(version);
            }
            Action::Exclude => {
                self.excluded.insert(version);
                self.included.remove(version);
            }
        }
    }

    /// Replay `actions` in order as absolute decisions.
    #[must_use]
    pub fn from_actions<'a, I>(actions: I) -> Self
    where
        I: IntoIterator<Item = &'a ExprAction>,
    {
        let mut set = Self::default();
        for ExprAction { action, version } in actions {
            set.apply_absolute(*action, version);
        }
        set
    }

    /// Whether `version` is in the included set.
    #[must_use]
    pub fn is_included(&self, version: &str) -> bool {
        self.included.contains(version)
    }

    /// Whether `version` is in the excluded set.
    #[must_use]
    pub fn is_excluded(&self, version: &str) -> bool {
        self.excluded.contains(version)
    }

    /// Included versions in insertion order.
    pub fn included(&self) -> impl Iterator<Item = &str> + '_ {
        self.included.iter()
    }

    /// Excluded versions in insertion order.
    pub fn excluded(&self) -> impl Iterator<Item = &str> + '_ {
        self.excluded.iter()
    }

    /// Emit one decision per catalog entry this set mentions, in catalog
    /// order. Exclusion wins when a version sits in both sets.
    #[must_use]
    pub fn emit(&self, catalog: &VersionCatalog) -> Vec<ExprAction> {
        catalog
            .iter()
            .filter_map(|version| {
                if self.is_excluded(version) {
                    Some(ExprAction::exclude(version))
                } else if self.is_included(version) {
                    Some(ExprAction::include(version))
                } else {
                    None
                }
            })
            .collect()
    }
}
