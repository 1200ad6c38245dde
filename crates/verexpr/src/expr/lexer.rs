//! Split expressions into units and classify each unit.

use std::fmt;

use crate::catalog::VersionCatalog;

const LATEST: &str = "latest";

/// Comparison operator heading a range unit such as `>=1.20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// `>`: strictly newer.
    Gt,
    /// `>=`: newer or equal.
    Ge,
    /// `<`: strictly older.
    Lt,
    /// `<=`: older or equal.
    Le,
}

impl ComparisonOp {
    /// Operator spelling as written in expressions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }

    /// Split a leading operator off `unit`, trying two-character operators
    /// first. The operand is trimmed.
    pub(crate) fn split(unit: &str) -> Option<(Self, &str)> {
        [Self::Ge, Self::Le, Self::Gt, Self::Lt]
            .into_iter()
            .find_map(|op| unit.strip_prefix(op.as_str()).map(|rest| (op, rest.trim())))
    }

    /// Whether the catalog entry at `index` satisfies the comparison against
    /// the operand at `operand`. Lower indices are newer.
    pub(crate) const fn admits(self, index: usize, operand: usize) -> bool {
        match self {
            Self::Ge => index <= operand,
            Self::Gt => index < operand,
            Self::Le => index >= operand,
            Self::Lt => index > operand,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified expression unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    /// `>`, `>=`, `<` or `<=` followed by a version.
    Comparison {
        /// The operator.
        op: ComparisonOp,
        /// Trimmed operand text.
        operand: String,
    },
    /// `start-end`, where `start` is a catalog entry; optionally negated.
    HyphenRange {
        /// Whether the unit began with `!`.
        negated: bool,
        /// Range start, always a catalog entry.
        start: String,
        /// Trimmed end text; empty or `latest` means the newest entry.
        end: String,
    },
    /// A single version, possibly not in the catalog.
    Specific {
        /// Whether the unit began with `!`.
        negated: bool,
        /// Trimmed version text.
        version: String,
    },
}

/// Substitute `latest`, split on commas, trim, and drop empty units.
pub(crate) fn tokenize(expr: &str, catalog: &VersionCatalog) -> Vec<String> {
    let expanded = catalog
        .latest()
        .map_or_else(|| expr.to_owned(), |newest| expr.replace(LATEST, newest));
    expanded
        .split(',')
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Classify one trimmed, non-empty unit.
///
/// A unit that exactly names a catalog entry is a specific version even when
/// it contains hyphens, so `1.19.2-rc1` never reads as a range.
pub(crate) fn classify(unit: &str, catalog: &VersionCatalog) -> Unit {
    let (negated, body) = unit
        .strip_prefix('!')
        .map_or((false, unit), |rest| (true, rest.trim()));

    if catalog.contains(body) {
        return Unit::Specific {
            negated,
            version: body.to_owned(),
        };
    }

    if let Some((start, end)) = catalog.longest_prefix_range_start(body) {
        return Unit::HyphenRange {
            negated,
            start: start.to_owned(),
            end: end.trim().to_owned(),
        };
    }

    if !negated
        && let Some((op, operand)) = ComparisonOp::split(body)
    {
        return Unit::Comparison {
            op,
            operand: operand.to_owned(),
        };
    }

    Unit::Specific {
        negated,
        version: body.to_owned(),
    }
}

/// Whether a hyphen-range end refers to the newest catalog entry.
pub(crate) fn is_open_end(end: &str) -> bool {
    end.is_empty() || end.eq_ignore_ascii_case(LATEST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn catalog() -> VersionCatalog {
        match VersionCatalog::new(["1.20", "1.19.2", "1.19.2-rc2", "1.19.2-rc1", "1.19"]) {
            Ok(catalog) => catalog,
            Err(err) => panic!("catalog should build: {err}"),
        }
    }

    #[test]
    fn tokenises_and_substitutes_latest() {
        let units = tokenize(" 1.19-latest, ,!1.19.2 ,,", &catalog());
        assert_eq!(units, ["1.19-1.20", "!1.19.2"]);
    }

    #[test]
    fn leaves_latest_alone_for_empty_catalog() {
        let units = tokenize("latest", &VersionCatalog::default());
        assert_eq!(units, ["latest"]);
    }

    #[rstest]
    #[case(">=1.19", ComparisonOp::Ge, "1.19")]
    #[case("> 1.19", ComparisonOp::Gt, "1.19")]
    #[case("<=1.19.2", ComparisonOp::Le, "1.19.2")]
    #[case("<1.20", ComparisonOp::Lt, "1.20")]
    #[case(">>1.19", ComparisonOp::Gt, ">1.19")]
    fn classifies_comparisons(#[case] unit: &str, #[case] op: ComparisonOp, #[case] operand: &str) {
        assert_eq!(
            classify(unit, &catalog()),
            Unit::Comparison {
                op,
                operand: operand.into(),
            }
        );
    }

    #[rstest]
    #[case("1.19.2-rc1", false, "1.19.2-rc1")]
    #[case("! 1.19.2-rc2", true, "1.19.2-rc2")]
    #[case("!>=1.19", true, ">=1.19")]
    #[case("2.0", false, "2.0")]
    fn classifies_specific_versions(
        #[case] unit: &str,
        #[case] negated: bool,
        #[case] version: &str,
    ) {
        assert_eq!(
            classify(unit, &catalog()),
            Unit::Specific {
                negated,
                version: version.into(),
            }
        );
    }

    #[rstest]
    #[case("1.19.2-rc1-1.19.2", false, "1.19.2-rc1", "1.19.2")]
    #[case("!1.19-1.20", true, "1.19", "1.20")]
    #[case("1.19- latest", false, "1.19", "latest")]
    #[case("1.19-", false, "1.19", "")]
    fn classifies_hyphen_ranges(
        #[case] unit: &str,
        #[case] negated: bool,
        #[case] start: &str,
        #[case] end: &str,
    ) {
        assert_eq!(
            classify(unit, &catalog()),
            Unit::HyphenRange {
                negated,
                start: start.into(),
                end: end.into(),
            }
        );
    }

    #[rstest]
    #[case("", true)]
    #[case("LATEST", true)]
    #[case("1.20", false)]
    fn recognises_open_range_ends(#[case] end: &str, #[case] expected: bool) {
        assert_eq!(is_open_end(end), expected);
    }
}
