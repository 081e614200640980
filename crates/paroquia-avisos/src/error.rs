use thiserror::Error;

#[derive(Debug, Error)]
pub enum AvisosError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("spreadsheet is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet is missing required column \"{0}\"")]
    MissingColumn(&'static str),
}
