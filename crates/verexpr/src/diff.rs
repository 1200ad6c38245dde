//! Turn resolved decisions into edits against a stored version list.

use serde::{Deserialize, Serialize};

use crate::action::ExprAction;
use crate::decision::DecisionSet;

/// Versions to add to and remove from a stored list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    /// Included versions missing from the current list.
    pub to_add: Vec<String>,
    /// Versions in the current list that are excluded.
    pub to_remove: Vec<String>,
}

impl DiffResult {
    /// Whether the current list already matches the decisions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Apply the edit to `current`: removals first, keeping the remaining
    /// order, then additions appended in `to_add` order.
    ///
    /// # Examples
    /// ```
    /// use verexpr::DiffResult;
    /// let diff = DiffResult {
    ///     to_add: vec!["1.20.2".into()],
    ///     to_remove: vec!["1.19".into()],
    /// };
    /// let current = ["1.20".to_string(), "1.19".to_string()];
    /// assert_eq!(diff.apply(&current), ["1.20", "1.20.2"]);
    /// ```
    #[must_use]
    pub fn apply(&self, current: &[String]) -> Vec<String> {
        current
            .iter()
            .filter(|version| !self.to_remove.contains(version))
            .chain(self.to_add.iter())
            .cloned()
            .collect()
    }
}

/// Compute the edit that brings `current` in line with `actions`.
///
/// `actions` are replayed in order, the later decision for a version
/// winning, so hand-built lists with contradictions resolve the same way the
/// parser would. Versions in `current` that no action mentions are left
/// alone.
///
/// # Examples
/// ```
/// use verexpr::{ExprAction, get_diff};
/// let current = vec!["1.20".to_string(), "1.19".to_string()];
/// let diff = get_diff(
///     &current,
///     &[ExprAction::include("1.20.1"), ExprAction::exclude("1.19")],
/// );
/// assert_eq!(diff.to_add, ["1.20.1"]);
/// assert_eq!(diff.to_remove, ["1.19"]);
/// ```
#[must_use]
pub fn get_diff(current: &[String], actions: &[ExprAction]) -> DiffResult {
    let decisions = DecisionSet::from_actions(actions);
    let to_add = decisions
        .included()
        .filter(|version| !current.iter().any(|existing| existing == version))
        .map(str::to_owned)
        .collect();
    let to_remove = current
        .iter()
        .filter(|version| decisions.is_excluded(version))
        .cloned()
        .collect();
    DiffResult { to_add, to_remove }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(versions: &[&str]) -> Vec<String> {
        versions.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn later_action_wins_for_contradictions() {
        let current = owned(&["1.20"]);
        let diff = get_diff(
            &current,
            &[
                ExprAction::exclude("1.20"),
                ExprAction::include("1.20"),
                ExprAction::include("1.19"),
                ExprAction::exclude("1.19"),
            ],
        );
        assert!(diff.is_empty(), "unexpected diff {diff:?}");
    }

    #[test]
    fn leaves_unmentioned_versions_untouched() {
        let current = owned(&["b1", "1.20", "1.19"]);
        let diff = get_diff(&current, &[ExprAction::exclude("1.19")]);
        assert_eq!(diff.to_remove, ["1.19"]);
        assert!(diff.to_add.is_empty());
        assert_eq!(diff.apply(&current), ["b1", "1.20"]);
    }

    #[test]
    fn removals_follow_current_list_order() {
        let current = owned(&["1.18", "1.20", "1.19"]);
        let diff = get_diff(
            &current,
            &[
                ExprAction::exclude("1.19"),
                ExprAction::exclude("1.20"),
                ExprAction::exclude("1.18"),
            ],
        );
        assert_eq!(diff.to_remove, ["1.18", "1.20", "1.19"]);
    }

    #[test]
    fn serialises_with_camel_case_keys() {
        let diff = DiffResult {
            to_add: owned(&["1.20"]),
            to_remove: Vec::new(),
        };
        let json = match serde_json::to_string(&diff) {
            Ok(json) => json,
            Err(err) => panic!("diff should serialise: {err}"),
        };
        assert_eq!(json, r#"{"toAdd":["1.20"],"toRemove":[]}"#);
    }
}
