//! Helpers for rendering command output.

use std::io::Write;

use eyre::{Context, Result};
use serde::Serialize;
use verexpr::{DiffResult, ExprAction, UnitReport};

pub(crate) fn write_actions(writer: &mut dyn Write, actions: &[ExprAction]) -> Result<()> {
    for entry in actions {
        writeln!(writer, "{} {}", entry.action, entry.version)
            .wrap_err_with(|| format!("failed to write decision for {}", entry.version))?;
    }
    Ok(())
}

pub(crate) fn write_diff(writer: &mut dyn Write, diff: &DiffResult) -> Result<()> {
    for version in &diff.to_add {
        writeln!(writer, "+ {version}").wrap_err("failed to write addition")?;
    }
    for version in &diff.to_remove {
        writeln!(writer, "- {version}").wrap_err("failed to write removal")?;
    }
    Ok(())
}

pub(crate) fn write_versions(writer: &mut dyn Write, versions: &[String]) -> Result<()> {
    for version in versions {
        writeln!(writer, "{version}").wrap_err("failed to write version list")?;
    }
    Ok(())
}

pub(crate) fn write_reports(writer: &mut dyn Write, reports: &[UnitReport]) -> Result<()> {
    for report in reports {
        writeln!(writer, "{report}")
            .wrap_err_with(|| format!("failed to write report for `{}`", report.text))?;
    }
    Ok(())
}

pub(crate) fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, value).wrap_err("failed to serialize output to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}
