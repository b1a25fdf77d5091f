//! Dialect adapters: rendering a [`Template`] in a client's parameter syntax.
//!
//! Exactly two dialects exist, each as its own statement type. Adding a
//! dialect means adding a type here, not branching on strings at call sites.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::binder::{resolve, BindConfig};
use crate::error::Result;
use crate::scanner::{scan, ParamKind, Segment, Template};
use crate::value::Value;

/// A bound PostgreSQL query: `$1, $2, ...` placeholders plus ordered values.
#[derive(Debug, Clone, PartialEq)]
pub struct PgQuery {
    /// The rewritten SQL text.
    pub text: String,
    /// Values in placeholder occurrence order.
    pub values: Vec<Value>,
}

/// A bound MySQL query: `?` / `??` placeholders plus ordered values.
#[derive(Debug, Clone, PartialEq)]
pub struct MySqlQuery {
    /// The rewritten SQL.
    pub sql: String,
    /// Values in placeholder occurrence order.
    pub values: Vec<Value>,
}

/// A statement prepared for PostgreSQL.
///
/// The SQL text is scanned once on construction; [`bind`](Self::bind) can be
/// called any number of times with different bind requests. Every placeholder
/// renders as `$k` with `k` the 1-based ordinal over all placeholders -
/// PostgreSQL has no identifier-placeholder syntax, so `::name` is passed
/// through as an ordinary bound value.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use named_sql::{PgStatement, Value};
///
/// let statement = PgStatement::new("SELECT * FROM pokemon WHERE id = :id;");
/// let mut params = HashMap::new();
/// params.insert("id".to_owned(), Value::Int(5));
///
/// let query = statement.bind(&params)?;
/// assert_eq!(query.text, "SELECT * FROM pokemon WHERE id = $1;");
/// assert_eq!(query.values, vec![Value::Int(5)]);
/// # Ok::<(), named_sql::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PgStatement {
    template: Template,
    config: BindConfig,
}

impl PgStatement {
    /// Scans `sql` with the default configuration (missing values are hard
    /// errors).
    pub fn new(sql: &str) -> Self {
        Self::with_config(sql, BindConfig::default())
    }

    /// Scans `sql` with an explicit configuration.
    pub fn with_config(sql: &str, config: BindConfig) -> Self {
        Self {
            template: scan(sql),
            config,
        }
    }

    /// The scanned template backing this statement.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Renders the statement with `$k` placeholders and resolves values.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameters`](crate::Error::MissingParameters) when any
    /// placeholder name is absent from `params` and `use_null_for_missing`
    /// is off.
    pub fn bind(&self, params: &HashMap<String, Value>) -> Result<PgQuery> {
        let values = resolve(&self.template, params, self.config)?;
        let mut text = String::new();
        let mut ordinal = 0usize;
        for segment in self.template.segments() {
            match segment {
                Segment::Literal(fragment) => text.push_str(fragment),
                Segment::Placeholder { .. } => {
                    ordinal += 1;
                    let _ = write!(text, "${ordinal}");
                }
            }
        }
        Ok(PgQuery { text, values })
    }
}

/// A statement prepared for MySQL.
///
/// `:name` renders as `?` and `::name` as `??` (the driver's identifier
/// placeholder); both are consumed positionally, left to right.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use named_sql::{MySqlStatement, Value};
///
/// let statement = MySqlStatement::new("SELECT * FROM ::ptable WHERE id = :id;");
/// let mut params = HashMap::new();
/// params.insert("ptable".to_owned(), Value::String("pokemon".to_owned()));
/// params.insert("id".to_owned(), Value::Int(5));
///
/// let query = statement.bind(&params)?;
/// assert_eq!(query.sql, "SELECT * FROM ?? WHERE id = ?;");
/// assert_eq!(
///     query.values,
///     vec![Value::String("pokemon".to_owned()), Value::Int(5)]
/// );
/// # Ok::<(), named_sql::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MySqlStatement {
    template: Template,
    config: BindConfig,
}

impl MySqlStatement {
    /// Scans `sql` with the default configuration.
    pub fn new(sql: &str) -> Self {
        Self::with_config(sql, BindConfig::default())
    }

    /// Scans `sql` with an explicit configuration.
    pub fn with_config(sql: &str, config: BindConfig) -> Self {
        Self {
            template: scan(sql),
            config,
        }
    }

    /// The scanned template backing this statement.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Renders the statement with `?` / `??` placeholders and resolves
    /// values.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameters`](crate::Error::MissingParameters) when any
    /// placeholder name is absent from `params` and `use_null_for_missing`
    /// is off.
    pub fn bind(&self, params: &HashMap<String, Value>) -> Result<MySqlQuery> {
        let values = resolve(&self.template, params, self.config)?;
        let mut sql = String::new();
        for segment in self.template.segments() {
            match segment {
                Segment::Literal(fragment) => sql.push_str(fragment),
                Segment::Placeholder { kind, .. } => sql.push_str(match kind {
                    ParamKind::Value => "?",
                    ParamKind::Identifier => "??",
                }),
            }
        }
        Ok(MySqlQuery { sql, values })
    }
}
