//! Response envelopes
//!
//! Success: `{"code": "SUCCESS", "data": "<html>"}`
//! Failure: `{"message": "...", "code": "INCORRECT_ENCODING"}`

use super::error::ServiceError;
use serde::Serialize;

/// Machine-readable outcome of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    Success,
    IncorrectRequestType,
    IncorrectEncoding,
    InternalServerError,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::Success => "SUCCESS",
            ResponseCode::IncorrectRequestType => "INCORRECT_REQUEST_TYPE",
            ResponseCode::IncorrectEncoding => "INCORRECT_ENCODING",
            ResponseCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Human-readable message carried by error envelopes
    pub fn message(&self) -> &'static str {
        match self {
            ResponseCode::Success => "The file was converted",
            ResponseCode::IncorrectRequestType => "The uploaded file must be plain text",
            ResponseCode::IncorrectEncoding => "The uploaded file is not valid UTF-8 text",
            ResponseCode::InternalServerError => {
                "An unexpected error occurred while processing the file"
            }
        }
    }
}

/// HTTP-style status of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    pub fn as_u16(self) -> u16 {
        self.0
    }

    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Success { code: ResponseCode, data: String },
    Error { message: String, code: ResponseCode },
}

impl ResponseBody {
    pub fn code(&self) -> ResponseCode {
        match self {
            ResponseBody::Success { code, .. } | ResponseBody::Error { code, .. } => *code,
        }
    }
}

/// A status plus the envelope to send back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl Response {
    pub fn ok(data: String) -> Self {
        Response {
            status: StatusCode::OK,
            body: ResponseBody::Success {
                code: ResponseCode::Success,
                data,
            },
        }
    }

    pub fn error(err: &ServiceError) -> Self {
        let code = err.code();
        Response {
            status: err.status(),
            body: ResponseBody::Error {
                message: code.message().to_string(),
                code,
            },
        }
    }

    /// The envelope alone, pretty-printed.
    pub fn body_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.body)
    }
}
