//! Per-unit explanations of how an expression was understood.
//!
//! [`parse_version_expression`](crate::parse_version_expression) silently
//! drops fragments it cannot use. Callers that want to tell users which
//! parts of their input were ignored can ask for a report instead.

use std::fmt;

use crate::action::{Action, ExprAction};
use crate::catalog::VersionCatalog;
use crate::errors::DiscardReason;
use crate::expr::{Contribution, Unit, classify, resolve, tokenize};

/// Effect a unit has on the decision set, considered on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    /// A comparison deciding every catalog entry.
    Range {
        /// Entries the comparison admits.
        included: usize,
        /// Entries the comparison rejects.
        excluded: usize,
    },
    /// Specific decisions that override ranges.
    Absolute(Vec<ExprAction>),
    /// The unit contributes nothing.
    Ignored(DiscardReason),
}

/// How one comma-separated unit was classified and resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    /// The trimmed unit text after `latest` substitution.
    pub text: String,
    /// Classification of the unit.
    pub unit: Unit,
    /// What the unit contributes.
    pub outcome: UnitOutcome,
}

impl UnitReport {
    /// Whether the unit was dropped.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self.outcome, UnitOutcome::Ignored(_))
    }
}

impl fmt::Display for UnitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.text)?;
        match &self.outcome {
            UnitOutcome::Range { included, excluded } => {
                write!(f, "range including {included}, excluding {excluded}")
            }
            UnitOutcome::Absolute(actions) => {
                let rendered: Vec<String> = actions
                    .iter()
                    .map(|entry| format!("{} {}", entry.action, entry.version))
                    .collect();
                f.write_str(&rendered.join(", "))
            }
            UnitOutcome::Ignored(reason) => write!(f, "ignored ({reason})"),
        }
    }
}

/// Explain each non-empty unit of `expr`, in input order.
///
/// # Examples
/// ```
/// use verexpr::{DiscardReason, UnitOutcome, VersionCatalog, explain_expression};
/// let catalog = VersionCatalog::new(["1.20.1", "1.20"]).unwrap();
/// let reports = explain_expression(">=1.20, 1.20-asdf", &catalog);
/// assert_eq!(reports[0].outcome, UnitOutcome::Range { included: 2, excluded: 0 });
/// assert_eq!(
///     reports[1].outcome,
///     UnitOutcome::Ignored(DiscardReason::UnknownRangeEnd("asdf".into()))
/// );
/// ```
#[must_use]
pub fn explain_expression(expr: &str, catalog: &VersionCatalog) -> Vec<UnitReport> {
    tokenize(expr, catalog)
        .into_iter()
        .map(|text| {
            let unit = classify(&text, catalog);
            let outcome = outcome_for(&unit, catalog);
            UnitReport {
                text,
                unit,
                outcome,
            }
        })
        .collect()
}

fn outcome_for(unit: &Unit, catalog: &VersionCatalog) -> UnitOutcome {
    match resolve(unit, catalog) {
        Contribution::Range(actions) => {
            let included = actions
                .iter()
                .filter(|entry| entry.action == Action::Include)
                .count();
            UnitOutcome::Range {
                included,
                excluded: actions.len() - included,
            }
        }
        Contribution::Absolute(actions) => {
            let known: Vec<ExprAction> = actions
                .into_iter()
                .filter(|entry| catalog.contains(&entry.version))
                .collect();
            match (known.is_empty(), unit) {
                (true, Unit::Specific { version, .. }) => {
                    UnitOutcome::Ignored(DiscardReason::NotInCatalog(version.clone()))
                }
                _ => UnitOutcome::Absolute(known),
            }
        }
        Contribution::Discarded(reason) => UnitOutcome::Ignored(reason),
    }
}
