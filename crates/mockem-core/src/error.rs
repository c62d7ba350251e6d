use thiserror::Error;

/// Core error type shared across MockEm crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The category slug is not one of the built-in categories.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    /// The platform slug is not one of the built-in platforms.
    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),
    /// A schema name reached generator dispatch without being a known kind.
    #[error("unknown schema '{0}'")]
    UnknownSchema(String),
    #[error("invalid schema '{schema}' for category '{category}'")]
    SchemaNotInCategory { schema: String, category: String },
    #[error("at least one schema is required")]
    EmptySchemaList,
    #[error("schema '{0}' was requested more than once")]
    DuplicateSchema(String),
    #[error("Row count must be between {min} and {max} (got {value})")]
    InvalidRowCount { value: i64, min: usize, max: usize },
    /// A child schema was requested without the parent it references.
    #[error("schema '{schema}' references '{parent}', which was not requested")]
    MissingParent { schema: String, parent: String },
    /// The relationship map contains a cycle among the listed schemas.
    #[error("dependency cycle between schemas: {}", .0.join(", "))]
    DependencyCycle(Vec<String>),
    /// The static catalog violates internal invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl Error {
    /// Errors caused by the caller's request rather than by configuration.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Error::DependencyCycle(_) | Error::InvalidCatalog(_))
    }
}

/// Convenience alias for results returned by MockEm crates.
pub type Result<T> = std::result::Result<T, Error>;
