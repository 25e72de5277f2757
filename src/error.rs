use std::fmt;

#[derive(Debug)]
pub enum RestfulError {
    InvalidMethod(String),
    Config(String),
    Network(reqwest::Error),
    Io(std::io::Error),
    MalformedBody(serde_json::Error),
    Csv(csv::Error),
    CsvRecord { row: usize, reason: String },
    Other(String),
}

impl fmt::Display for RestfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestfulError::InvalidMethod(method) => write!(f, "Invalid method: {}", method),
            RestfulError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RestfulError::Network(e) => write!(f, "Network error: {}", e),
            RestfulError::Io(e) => write!(f, "IO error: {}", e),
            RestfulError::MalformedBody(e) => {
                write!(f, "Response body is not valid JSON: {}", e)
            }
            RestfulError::Csv(e) => write!(f, "CSV error: {}", e),
            RestfulError::CsvRecord { row, reason } => {
                write!(f, "CSV error in record {}: {}", row, reason)
            }
            RestfulError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RestfulError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RestfulError::Network(e) => Some(e),
            RestfulError::Io(e) => Some(e),
            RestfulError::MalformedBody(e) => Some(e),
            RestfulError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RestfulError {
    fn from(err: reqwest::Error) -> Self {
        RestfulError::Network(err)
    }
}

impl From<std::io::Error> for RestfulError {
    fn from(err: std::io::Error) -> Self {
        RestfulError::Io(err)
    }
}

// The only JSON decoding the crate does on its own is of response bodies;
// config files go through anyhow and land in `Config`.
impl From<serde_json::Error> for RestfulError {
    fn from(err: serde_json::Error) -> Self {
        RestfulError::MalformedBody(err)
    }
}

impl From<csv::Error> for RestfulError {
    fn from(err: csv::Error) -> Self {
        RestfulError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, RestfulError>;
