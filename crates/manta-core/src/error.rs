pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("CSV header is missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("CSV record on line {line}: column {column} has invalid numeric value {value:?}")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("CSV parse error on line {line}: {message}")]
    Csv { line: usize, message: String },
}
