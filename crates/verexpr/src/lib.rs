//! Version-range expressions resolved against an ordered version catalog.
//!
//! The crate turns human-authored expressions such as
//! `>=1.20, <1.20.4, !1.20.2, 1.19.2-rc2-1.19.2-rc4` into per-version
//! include/exclude decisions, and turns those decisions into an edit against
//! a stored list of supported versions. The catalog is supplied by the
//! caller; versions are opaque strings ordered newest first.

mod action;
mod catalog;
mod decision;
mod diagnostics;
mod diff;
mod errors;
mod expr;

pub use action::{Action, ExprAction};
pub use catalog::VersionCatalog;
pub use decision::DecisionSet;
pub use diagnostics::{UnitOutcome, UnitReport, explain_expression};
pub use diff::{DiffResult, get_diff};
pub use errors::{ActionParseError, CatalogError, DiscardReason};
pub use expr::{ComparisonOp, Unit, parse_version_expression};
