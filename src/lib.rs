//! # named-sql
//!
//! Rewrites SQL written with named placeholders (`:name`, `::name`) into the
//! parameter syntax a PostgreSQL or MySQL client expects, binding a
//! name→value map into a values array ordered by placeholder occurrence.
//!
//! ## Features
//!
//! - **Named Placeholders**: `:name` for bound values, `::name` for SQL
//!   identifiers (MySQL `??`)
//! - **Quote/Comment Aware**: placeholder-like text inside `'...'`, `"..."`,
//!   `-- ...` and `/* ... */` stays literal
//! - **Parse Once, Bind Many**: statements scan their SQL a single time and
//!   are immutable afterwards, safe to share across threads
//! - **Two Dialects**: PostgreSQL (`$1, $2, ...`) and MySQL (`?` / `??`)
//! - **Statement Directories**: load one statement per `.sql` file, keyed by
//!   file stem
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use named_sql::{pg, Value};
//!
//! let statement = pg("SELECT * FROM pokemon WHERE id = :id;");
//!
//! let mut params = HashMap::new();
//! params.insert("id".to_owned(), Value::Int(5));
//!
//! let query = statement.bind(&params)?;
//! assert_eq!(query.text, "SELECT * FROM pokemon WHERE id = $1;");
//! assert_eq!(query.values, vec![Value::Int(5)]);
//! # Ok::<(), named_sql::Error>(())
//! ```
//!
//! ## MySQL and Identifier Placeholders
//!
//! ```
//! use std::collections::HashMap;
//! use named_sql::{mysql, Value};
//!
//! let statement = mysql("SELECT * FROM ::ptable WHERE id = :id;");
//!
//! let mut params = HashMap::new();
//! params.insert("ptable".to_owned(), Value::String("pokemon".to_owned()));
//! params.insert("id".to_owned(), Value::Int(5));
//!
//! let query = statement.bind(&params)?;
//! assert_eq!(query.sql, "SELECT * FROM ?? WHERE id = ?;");
//! # Ok::<(), named_sql::Error>(())
//! ```
//!
//! ## Missing Values
//!
//! A placeholder with no entry in the bind request fails the whole call with
//! a message listing every missing name:
//!
//! ```
//! use std::collections::HashMap;
//! use named_sql::pg;
//!
//! let err = pg("SELECT * FROM t WHERE id = :id;")
//!     .bind(&HashMap::new())
//!     .unwrap_err();
//! assert!(err.to_string().starts_with("Missing value for statement.\nid"));
//! ```
//!
//! With [`BindConfig::use_null_for_missing`] the missing name resolves to
//! [`Value::Null`] instead:
//!
//! ```
//! use std::collections::HashMap;
//! use named_sql::{BindConfig, PgStatement, Value};
//!
//! let config = BindConfig { use_null_for_missing: true };
//! let query = PgStatement::with_config("SELECT * FROM t WHERE id = :id;", config)
//!     .bind(&HashMap::new())?;
//! assert_eq!(query.text, "SELECT * FROM t WHERE id = $1;");
//! assert_eq!(query.values, vec![Value::Null]);
//! # Ok::<(), named_sql::Error>(())
//! ```
//!
//! ## Executing with SQLx
//!
//! A bound query converts into a `sqlx::query` with all values attached, so
//! execution stays entirely in the caller's hands:
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use named_sql::{pg, Value};
//! use sqlx::PgPool;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = PgPool::connect("postgres://localhost/test").await?;
//!
//! let mut params = HashMap::new();
//! params.insert("id".to_owned(), Value::Int(5));
//!
//! let query = pg("DELETE FROM pokemon WHERE id = :id;").bind(&params)?;
//! query.to_sqlx().execute(&pool).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Limitations
//!
//! - Placeholder names must match `[A-Za-z_][A-Za-z0-9_]*`
//! - Any bare identifier directly after `::` is read as an identifier
//!   placeholder, including a genuine type cast like `id::int`; keep a
//!   non-identifier character after `::` when no substitution is intended
//! - Unterminated quotes or comments are not diagnosed; the open mode simply
//!   runs to the end of the input
//!
//! ## License
//!
//! Licensed under either of Apache License, Version 2.0 or MIT license at
//! your option.

pub mod binder;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod loader;
pub mod scanner;
pub mod value;

pub use binder::BindConfig;
pub use dialect::{MySqlQuery, MySqlStatement, PgQuery, PgStatement};
pub use error::{Error, Result};
pub use loader::{load_dir, MySqlStatements, PgStatements};
pub use scanner::{scan, ParamKind, Segment, Template};
pub use value::Value;

/// Prepares `sql` for PostgreSQL with the default configuration.
///
/// Shorthand for [`PgStatement::new`].
pub fn pg(sql: &str) -> PgStatement {
    PgStatement::new(sql)
}

/// Prepares `sql` for MySQL with the default configuration.
///
/// Shorthand for [`MySqlStatement::new`].
pub fn mysql(sql: &str) -> MySqlStatement {
    MySqlStatement::new(sql)
}

/// Convenience re-exports for common use cases
pub mod prelude {
    pub use crate::binder::BindConfig;
    pub use crate::error::{Error, Result};
    pub use crate::value::Value;
    pub use crate::{mysql, pg};
    pub use crate::{MySqlQuery, MySqlStatement, PgQuery, PgStatement};
}
