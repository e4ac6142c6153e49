//! Failures of the upload path

use super::response::{ResponseCode, StatusCode};
use std::fmt;
use std::io;

/// Error that can occur between receiving an upload and handing lines to the converter
#[derive(Debug)]
pub enum ServiceError {
    /// No upload was supplied at all
    MissingUpload,
    /// Declared content type is not the accepted one (`None` when nothing was declared)
    IncorrectRequestType(Option<String>),
    /// The bytes are not valid UTF-8
    IncorrectEncoding(String),
    /// Reading the upload failed
    Read(io::Error),
}

impl ServiceError {
    pub fn code(&self) -> ResponseCode {
        match self {
            ServiceError::IncorrectRequestType(_) => ResponseCode::IncorrectRequestType,
            ServiceError::IncorrectEncoding(_) => ResponseCode::IncorrectEncoding,
            ServiceError::MissingUpload | ServiceError::Read(_) => {
                ResponseCode::InternalServerError
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::IncorrectRequestType(_) | ServiceError::IncorrectEncoding(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::MissingUpload | ServiceError::Read(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::MissingUpload => write!(f, "No file was uploaded"),
            ServiceError::IncorrectRequestType(Some(found)) => {
                write!(f, "Invalid content-type in the request: {found}")
            }
            ServiceError::IncorrectRequestType(None) => {
                write!(f, "Invalid content-type in the request: none declared")
            }
            ServiceError::IncorrectEncoding(msg) => write!(f, "Unsupported encoding: {msg}"),
            ServiceError::Read(err) => write!(f, "Failed to read the upload: {err}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Read(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ServiceError {
    fn from(err: io::Error) -> Self {
        // Readers that decode on the fly report bad bytes as InvalidData
        if err.kind() == io::ErrorKind::InvalidData {
            ServiceError::IncorrectEncoding(err.to_string())
        } else {
            ServiceError::Read(err)
        }
    }
}

impl From<std::str::Utf8Error> for ServiceError {
    fn from(err: std::str::Utf8Error) -> Self {
        ServiceError::IncorrectEncoding(err.to_string())
    }
}
