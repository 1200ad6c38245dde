//! Turn classified units into range or absolute decisions.

use crate::action::{Action, ExprAction};
use crate::catalog::VersionCatalog;
use crate::errors::DiscardReason;

use super::lexer::{ComparisonOp, Unit, is_open_end};

/// What a single unit adds to the decision set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Contribution {
    /// One decision per catalog entry, merged by intersection.
    Range(Vec<ExprAction>),
    /// Decisions that override ranges and earlier absolutes.
    Absolute(Vec<ExprAction>),
    /// The unit is malformed or refers to unknown versions.
    Discarded(DiscardReason),
}

pub(crate) fn resolve(unit: &Unit, catalog: &VersionCatalog) -> Contribution {
    match unit {
        Unit::Comparison { op, operand } => resolve_comparison(*op, operand, catalog),
        Unit::HyphenRange {
            negated,
            start,
            end,
        } => resolve_hyphen_range(*negated, start, end, catalog),
        Unit::Specific { negated, version } => Contribution::Absolute(vec![ExprAction::new(
            Action::from_negation(*negated),
            version.as_str(),
        )]),
    }
}

fn resolve_comparison(op: ComparisonOp, operand: &str, catalog: &VersionCatalog) -> Contribution {
    let Some(boundary) = catalog.index_of(operand) else {
        return Contribution::Discarded(DiscardReason::UnknownOperand(operand.to_owned()));
    };
    Contribution::Range(
        catalog
            .iter()
            .enumerate()
            .map(|(index, version)| {
                let action = if op.admits(index, boundary) {
                    Action::Include
                } else {
                    Action::Exclude
                };
                ExprAction::new(action, version)
            })
            .collect(),
    )
}

fn resolve_hyphen_range(
    negated: bool,
    start: &str,
    end: &str,
    catalog: &VersionCatalog,
) -> Contribution {
    let end = if is_open_end(end) {
        catalog.latest().unwrap_or(end)
    } else {
        end
    };
    let Some(start_index) = catalog.index_of(start) else {
        return Contribution::Discarded(DiscardReason::UnknownRangeStart(start.to_owned()));
    };
    let Some(end_index) = catalog.index_of(end) else {
        return Contribution::Discarded(DiscardReason::UnknownRangeEnd(end.to_owned()));
    };
    if start_index < end_index {
        return Contribution::Discarded(DiscardReason::InvertedRange {
            start: start.to_owned(),
            end: end.to_owned(),
        });
    }

    let action = Action::from_negation(negated);
    Contribution::Absolute(
        catalog
            .iter()
            .skip(end_index)
            .take(start_index - end_index + 1)
            .map(|version| ExprAction::new(action, version))
            .collect(),
    )
}
