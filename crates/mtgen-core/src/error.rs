use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("input is missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: missing value for column '{column}'")]
    MissingField { row: usize, column: String },

    #[error("duplicate DeveloperName '{name}' (rows {first} and {second})")]
    DuplicateDeveloperName {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("input header repeats column '{0}'")]
    DuplicateColumn(String),

    #[error("invalid output file name '{0}': must not contain path separators")]
    InvalidFileName(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("xml serialization failed: {0}")]
    Xml(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
