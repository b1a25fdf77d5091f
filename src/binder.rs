//! Resolution of placeholder names to caller-supplied values.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::scanner::{Segment, Template};
use crate::value::Value;

/// Options resolved once per statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindConfig {
    /// When true, a placeholder with no entry in the bind request resolves to
    /// [`Value::Null`] instead of failing the bind call.
    pub use_null_for_missing: bool,
}

/// Resolves every placeholder occurrence in `template` against `params`.
///
/// Returns one value per occurrence, in order; a name used twice contributes
/// two entries. When any name is absent and `use_null_for_missing` is off,
/// the call fails with [`Error::MissingParameters`] carrying ALL distinct
/// missing names in encounter order - no partial values are returned.
pub fn resolve(
    template: &Template,
    params: &HashMap<String, Value>,
    config: BindConfig,
) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(template.placeholder_count());
    let mut missing: Vec<String> = Vec::new();

    for segment in template.segments() {
        let Segment::Placeholder { name, .. } = segment else {
            continue;
        };
        match params.get(name) {
            Some(value) => values.push(value.clone()),
            None if config.use_null_for_missing => values.push(Value::Null),
            None => {
                if !missing.iter().any(|m| m == name) {
                    missing.push(name.clone());
                }
            }
        }
    }

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(Error::MissingParameters(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    fn params(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), value.clone()))
            .collect()
    }

    #[test]
    fn resolves_in_occurrence_order() {
        let template = scan("WHERE a = :a AND b = :b AND a2 = :a");
        let values = resolve(
            &template,
            &params(&[("a", Value::Int(1)), ("b", Value::Int(2))]),
            BindConfig::default(),
        )
        .unwrap();
        assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(1)]);
    }

    #[test]
    fn collects_all_distinct_missing_names() {
        let template = scan("WHERE a = :a AND b = :b AND a2 = :a AND c = :c");
        let err = resolve(
            &template,
            &params(&[("b", Value::Int(2))]),
            BindConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing value for statement.\na\nc"
        );
    }

    #[test]
    fn null_for_missing_substitutes_null() {
        let template = scan("WHERE a = :a AND b = :b");
        let values = resolve(
            &template,
            &params(&[("a", Value::Int(5))]),
            BindConfig {
                use_null_for_missing: true,
            },
        )
        .unwrap();
        assert_eq!(values, vec![Value::Int(5), Value::Null]);
    }

    #[test]
    fn empty_template_yields_no_values() {
        let template = scan("SELECT 1;");
        let values = resolve(&template, &params(&[]), BindConfig::default()).unwrap();
        assert!(values.is_empty());
    }
}
