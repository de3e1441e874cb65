use derive_more::Display;

/// Simplified error system for the display engine
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DisplayError {
    /// Display region missing or not measurable
    #[display(fmt = "Container Error: {}", _0)]
    Container(String),
    /// Feature color is not a 6-digit hex RGB code
    #[display(fmt = "Invalid Color: {:?}", _0)]
    InvalidColor(String),
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
    #[display(fmt = "Parse Error: {}", _0)]
    Parse(String),
}

impl std::error::Error for DisplayError {}

impl From<serde_json::Error> for DisplayError {
    fn from(err: serde_json::Error) -> Self {
        DisplayError::Parse(err.to_string())
    }
}

pub type DisplayResult<T> = Result<T, DisplayError>;
