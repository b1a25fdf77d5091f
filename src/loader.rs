//! Directory-based statement loading.
//!
//! Mirrors the common layout of one statement per `.sql` file: every file in
//! a directory is keyed by its file stem, so `updatePokemon.sql` becomes the
//! statement `updatePokemon`. File contents are taken verbatim - a leading
//! `-- name` comment line is ordinary SQL text to the scanner.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::binder::BindConfig;
use crate::dialect::{MySqlStatement, PgStatement};
use crate::error::Result;

/// Reads every `*.sql` file directly under `path` (non-recursive).
///
/// Returns `name -> raw SQL text`, the text exactly as stored on disk with
/// its original `:name` placeholders intact.
pub fn load_dir(path: impl AsRef<Path>) -> Result<BTreeMap<String, String>> {
    let mut statements = BTreeMap::new();
    for entry in fs::read_dir(path)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "sql") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let sql = fs::read_to_string(&path)?;
        debug!(name = stem, path = %path.display(), "loaded statement");
        statements.insert(stem.to_owned(), sql);
    }
    Ok(statements)
}

/// Statements from a directory, prepared for PostgreSQL.
///
/// Each file is scanned once at load time; look up a statement by name and
/// bind it per call.
#[derive(Debug, Clone, Default)]
pub struct PgStatements {
    statements: BTreeMap<String, PgStatement>,
}

impl PgStatements {
    /// Loads and scans every `*.sql` file under `path`.
    pub fn load(path: impl AsRef<Path>, config: BindConfig) -> Result<Self> {
        let statements = load_dir(path)?
            .into_iter()
            .map(|(name, sql)| (name, PgStatement::with_config(&sql, config)))
            .collect();
        Ok(Self { statements })
    }

    /// The statement named `name`, if a file with that stem was found.
    pub fn get(&self, name: &str) -> Option<&PgStatement> {
        self.statements.get(name)
    }

    /// Loaded statement names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.statements.keys().map(String::as_str)
    }
}

/// Statements from a directory, prepared for MySQL.
#[derive(Debug, Clone, Default)]
pub struct MySqlStatements {
    statements: BTreeMap<String, MySqlStatement>,
}

impl MySqlStatements {
    /// Loads and scans every `*.sql` file under `path`.
    pub fn load(path: impl AsRef<Path>, config: BindConfig) -> Result<Self> {
        let statements = load_dir(path)?
            .into_iter()
            .map(|(name, sql)| (name, MySqlStatement::with_config(&sql, config)))
            .collect();
        Ok(Self { statements })
    }

    /// The statement named `name`, if a file with that stem was found.
    pub fn get(&self, name: &str) -> Option<&MySqlStatement> {
        self.statements.get(name)
    }

    /// Loaded statement names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.statements.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use std::collections::HashMap;

    const UPDATE_POKEMON: &str = "-- updatePokemon\nUPDATE pokemon SET price=:price;";
    const DUAL: &str = " --dual\nselect * from dual;\n";

    fn statement_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("updatePokemon.sql"), UPDATE_POKEMON).unwrap();
        fs::write(dir.path().join("dual.sql"), DUAL).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a statement").unwrap();
        dir
    }

    #[test]
    fn raw_load_keys_by_stem_and_keeps_text_verbatim() {
        let dir = statement_dir();
        let statements = load_dir(dir.path()).unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements["updatePokemon"], UPDATE_POKEMON);
        assert_eq!(statements["dual"], DUAL);
    }

    #[test]
    fn pg_statements_bind_like_inline_sql() {
        let dir = statement_dir();
        let statements = PgStatements::load(dir.path(), BindConfig::default()).unwrap();
        let mut params = HashMap::new();
        params.insert("price".to_owned(), Value::Int(6));
        let query = statements.get("updatePokemon").unwrap().bind(&params).unwrap();
        assert_eq!(query.text, "-- updatePokemon\nUPDATE pokemon SET price=$1;");
        assert_eq!(query.values, vec![Value::Int(6)]);
    }

    #[test]
    fn mysql_statements_respect_null_for_missing() {
        let dir = statement_dir();
        let config = BindConfig {
            use_null_for_missing: true,
        };
        let statements = MySqlStatements::load(dir.path(), config).unwrap();
        let query = statements
            .get("updatePokemon")
            .unwrap()
            .bind(&HashMap::new())
            .unwrap();
        assert_eq!(query.sql, "-- updatePokemon\nUPDATE pokemon SET price=?;");
        assert_eq!(query.values, vec![Value::Null]);
    }

    #[test]
    fn names_are_sorted() {
        let dir = statement_dir();
        let statements = PgStatements::load(dir.path(), BindConfig::default()).unwrap();
        let names: Vec<_> = statements.names().collect();
        assert_eq!(names, vec!["dual", "updatePokemon"]);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = load_dir("/definitely/not/a/real/dir").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
