//! Load a version catalog from disk.
//!
//! Two formats are accepted: a JSON array of strings, or plain text with one
//! version per line where blank lines and `#` comments are skipped. Either
//! way the file lists versions newest first.

use std::fs;
use std::path::Path;

use tracing::info;
use verexpr::VersionCatalog;

use crate::error::CliError;

pub(crate) fn load_catalog(path: &Path) -> Result<VersionCatalog, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&contents, path)?;
    info!(path = %path.display(), versions = catalog.len(), "loaded version catalog");
    Ok(catalog)
}

fn parse_catalog(contents: &str, path: &Path) -> Result<VersionCatalog, CliError> {
    let versions = if contents.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<String>>(contents).map_err(|source| CliError::CatalogJson {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect()
    };
    VersionCatalog::new(versions).map_err(|source| CliError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(contents: &str) -> Result<VersionCatalog, CliError> {
        parse_catalog(contents, Path::new("catalog"))
    }

    #[test]
    fn parses_json_array() {
        let catalog = match parse(r#" ["1.20.1", "1.20"] "#) {
            Ok(catalog) => catalog,
            Err(err) => panic!("json catalog should parse: {err}"),
        };
        assert_eq!(catalog.as_slice(), ["1.20.1", "1.20"]);
    }

    #[test]
    fn parses_line_list_skipping_comments() {
        let catalog = match parse("# newest first\n1.20.1\n\n  1.20  \n# old\n1.19\n") {
            Ok(catalog) => catalog,
            Err(err) => panic!("text catalog should parse: {err}"),
        };
        assert_eq!(catalog.as_slice(), ["1.20.1", "1.20", "1.19"]);
    }

    #[test]
    fn rejects_malformed_json() {
        let Err(err) = parse(r#"["1.20", 3]"#) else {
            panic!("non-string entries should fail");
        };
        assert!(matches!(err, CliError::CatalogJson { .. }));
    }

    #[test]
    fn rejects_duplicates() {
        let Err(err) = parse("1.20\n1.19\n1.20\n") else {
            panic!("duplicate entries should fail");
        };
        assert!(err.to_string().contains("duplicate catalog entry `1.20`"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = match tempfile::NamedTempFile::new() {
            Ok(file) => file,
            Err(err) => panic!("temp file should be created: {err}"),
        };
        if let Err(err) = writeln!(file, "1.20\n1.19") {
            panic!("temp file should be writable: {err}");
        }
        let catalog = match load_catalog(file.path()) {
            Ok(catalog) => catalog,
            Err(err) => panic!("catalog should load: {err}"),
        };
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn reports_missing_file() {
        let Err(err) = load_catalog(Path::new("/nonexistent/verexpr/catalog.txt")) else {
            panic!("missing file should fail");
        };
        assert!(matches!(err, CliError::ReadCatalog { .. }));
    }
}
