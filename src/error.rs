/// Error types for named-sql
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more placeholders had no value in the bind request.
    ///
    /// Holds every distinct missing name in first-occurrence order; the
    /// message lists them one per line after the fixed first line.
    #[error("Missing value for statement.\n{}", .0.join("\n"))]
    MissingParameters(Vec<String>),

    /// A statement directory could not be read.
    #[error("Failed to load SQL statements: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for named-sql operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_message_lists_names_one_per_line() {
        let err = Error::MissingParameters(vec!["id".to_owned(), "name".to_owned()]);
        assert_eq!(err.to_string(), "Missing value for statement.\nid\nname");
    }
}
