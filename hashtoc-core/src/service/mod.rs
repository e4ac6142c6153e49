//! Upload handling
//!
//!     The request path around the converter: check the declared content type, read and decode the
//!     bytes as UTF-8, split them into lines, convert, and wrap the outcome in a [`Response`].
//!
//!     | Situation                         | Code                     | Status |
//!     |-----------------------------------|--------------------------|--------|
//!     | converted                         | `SUCCESS`                | 200    |
//!     | content type is not the accepted  | `INCORRECT_REQUEST_TYPE` | 400    |
//!     | bytes are not UTF-8               | `INCORRECT_ENCODING`     | 400    |
//!     | no upload, or reading it failed   | `INTERNAL_SERVER_ERROR`  | 500    |
//!
//!     Failures are logged at error level before being turned into an envelope.

pub mod error;
pub mod response;
pub mod upload;

pub use error::ServiceError;
pub use response::{Response, ResponseBody, ResponseCode, StatusCode};
pub use upload::{FileUpload, MemoryUpload, Upload};

use crate::converter::DocumentConverter;
use crate::line::split_lines;

pub const PLAIN_TEXT: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Uploads must declare exactly this content type
    pub accepted_content_type: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        ServiceOptions {
            accepted_content_type: PLAIN_TEXT.to_string(),
        }
    }
}

/// Turns uploads into converted documents.
pub struct FileLoaderService {
    converter: Box<dyn DocumentConverter>,
    options: ServiceOptions,
}

impl FileLoaderService {
    pub fn new<C: DocumentConverter + 'static>(converter: C) -> Self {
        Self::with_options(converter, ServiceOptions::default())
    }

    pub fn with_options<C: DocumentConverter + 'static>(
        converter: C,
        options: ServiceOptions,
    ) -> Self {
        FileLoaderService {
            converter: Box::new(converter),
            options,
        }
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    /// Convert an upload and wrap the outcome in an envelope.
    pub fn parse_file(&self, upload: Option<&dyn Upload>) -> Response {
        match self.convert_upload(upload) {
            Ok(html) => Response::ok(html),
            Err(err) => {
                log::error!("{}", err);
                Response::error(&err)
            }
        }
    }

    /// Convert an upload, reporting failures as typed errors.
    pub fn convert_upload(&self, upload: Option<&dyn Upload>) -> Result<String, ServiceError> {
        let upload = upload.ok_or(ServiceError::MissingUpload)?;

        let declared = upload.content_type();
        if declared != Some(self.options.accepted_content_type.as_str()) {
            return Err(ServiceError::IncorrectRequestType(
                declared.map(str::to_string),
            ));
        }

        let bytes = upload.read_bytes()?;
        let text = std::str::from_utf8(&bytes)?;
        let lines = split_lines(text);

        log::info!(
            "converting {} bytes ({} lines) with '{}'",
            bytes.len(),
            lines.len(),
            self.converter.name()
        );

        Ok(self.converter.convert(&lines))
    }
}
