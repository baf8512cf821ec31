use std::error;
use std::fmt;
use std::num::ParseFloatError;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Numeric or attribute value could not be parsed
    Parse(String),
    /// XML-level problem; includes source line info where known
    Document(String),
    /// Path data ran out of numbers mid-command, or started with one
    MalformedPath(String),
    /// Path command letter outside the recognized set
    UnsupportedCommand(char),
    /// Root svg element has no usable viewBox to derive a rotation pivot
    MissingPivot,
    Cli(String),
    Other(Box<dyn error::Error>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::MalformedPath(reason) => write!(f, "Malformed path data: {reason}"),
            Error::UnsupportedCommand(letter) => {
                write!(f, "Unsupported path command '{letter}'")
            }
            Error::MissingPivot => {
                write!(f, "No viewBox on root svg element to derive rotation pivot")
            }
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(source) => Some(&**source),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: error::Error + 'static,
    {
        Error::Other(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Error {
        Error::Parse(format!("utf8: {err}"))
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error::Document(err.to_string())
    }
}
