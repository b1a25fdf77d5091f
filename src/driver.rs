//! Handing bound queries to SQLx.
//!
//! These helpers copy a rendered query's SQL and values onto a fresh
//! `sqlx::query` so callers holding a pool or transaction can run it. Nothing
//! here executes anything.

use sqlx::mysql::MySqlArguments;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::types::Json;
use sqlx::{MySql, Postgres};

use crate::dialect::{MySqlQuery, PgQuery};
use crate::value::Value;

/// Type alias for a SQLx query with PostgreSQL arguments
pub type PgQ<'q> = Query<'q, Postgres, PgArguments>;

/// Type alias for a SQLx query with MySQL arguments
pub type MySqlQ<'q> = Query<'q, MySql, MySqlArguments>;

impl PgQuery {
    /// Builds a SQLx query from the rendered text with every value bound in
    /// order. The query borrows from `self` and must be executed (or
    /// dropped) before `self` goes away.
    pub fn to_sqlx(&self) -> PgQ<'_> {
        let mut query = sqlx::query::<Postgres>(&self.text);
        for value in &self.values {
            query = bind_pg(query, value);
        }
        query
    }
}

impl MySqlQuery {
    /// Builds a SQLx query from the rendered SQL with every value bound in
    /// order.
    pub fn to_sqlx(&self) -> MySqlQ<'_> {
        let mut query = sqlx::query::<MySql>(&self.sql);
        for value in &self.values {
            query = bind_mysql(query, value);
        }
        query
    }
}

fn bind_pg<'q>(query: PgQ<'q>, value: &'q Value) -> PgQ<'q> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(v) => query.bind(*v),
        Value::Int(v) => query.bind(*v),
        Value::Float(v) => query.bind(*v),
        Value::String(v) => query.bind(v.as_str()),
        Value::Bytes(v) => query.bind(v.as_slice()),
        Value::Json(v) => query.bind(Json(v)),
    }
}

fn bind_mysql<'q>(query: MySqlQ<'q>, value: &'q Value) -> MySqlQ<'q> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(v) => query.bind(*v),
        Value::Int(v) => query.bind(*v),
        Value::Float(v) => query.bind(*v),
        Value::String(v) => query.bind(v.as_str()),
        Value::Bytes(v) => query.bind(v.as_slice()),
        Value::Json(v) => query.bind(Json(v)),
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::PgStatement;
    use crate::value::Value;
    use sqlx::Execute;
    use std::collections::HashMap;

    #[test]
    fn sqlx_query_carries_the_rendered_text() {
        let mut params = HashMap::new();
        params.insert("id".to_owned(), Value::Int(5));
        let query = PgStatement::new("SELECT * FROM t WHERE id = :id;")
            .bind(&params)
            .unwrap();
        let sqlx_query = query.to_sqlx();
        assert_eq!(sqlx_query.sql(), "SELECT * FROM t WHERE id = $1;");
    }
}
