//! Version-expression parsing.
//!
//! An expression is a comma-separated list of units:
//!
//! - `1.20.1` includes one version; `!1.20.1` excludes it.
//! - `1.20-1.20.4` includes every catalog entry between the two, inclusive;
//!   `!1.20-1.20.4` excludes them. An empty end or `latest` means the newest
//!   entry.
//! - `>1.20`, `>=1.20`, `<1.20` and `<=1.20` decide every catalog entry.
//!
//! Comparison units narrow each other down. Specific versions and hyphen
//! ranges are applied afterwards in input order and override everything
//! before them.

mod lexer;
mod resolver;

use tracing::{debug, trace};

use crate::action::ExprAction;
use crate::catalog::VersionCatalog;
use crate::decision::DecisionSet;

pub use lexer::{ComparisonOp, Unit};
pub(crate) use lexer::{classify, tokenize};
pub(crate) use resolver::{Contribution, resolve};

/// Resolve `expr` against `catalog`.
///
/// Returns one decision per catalog entry the expression mentions, in
/// catalog order. Malformed units and unknown versions are ignored, so this
/// never fails; an empty or entirely malformed expression yields an empty
/// list.
///
/// # Examples
/// ```
/// use verexpr::{ExprAction, VersionCatalog, parse_version_expression};
/// let catalog = VersionCatalog::new(["1.20.2", "1.20.1", "1.20"]).unwrap();
/// assert_eq!(
///     parse_version_expression("1.20-latest, !1.20.1", &catalog),
///     vec![
///         ExprAction::include("1.20.2"),
///         ExprAction::exclude("1.20.1"),
///         ExprAction::include("1.20"),
///     ]
/// );
/// ```
#[must_use]
pub fn parse_version_expression(expr: &str, catalog: &VersionCatalog) -> Vec<ExprAction> {
    let mut ranges = Vec::new();
    let mut absolutes = Vec::new();

    for unit in tokenize(expr, catalog) {
        let classified = classify(&unit, catalog);
        trace!(unit = %unit, ?classified, "classified expression unit");
        match resolve(&classified, catalog) {
            Contribution::Range(actions) => ranges.push(actions),
            Contribution::Absolute(actions) => absolutes.extend(actions),
            Contribution::Discarded(reason) => {
                debug!(unit = %unit, %reason, "ignoring expression unit");
            }
        }
    }

    let mut decisions = DecisionSet::default();
    for entry in ranges.iter().flatten() {
        decisions.apply_range(entry.action, &entry.version);
    }
    for entry in &absolutes {
        decisions.apply_absolute(entry.action, &entry.version);
    }
    decisions.emit(catalog)
}
