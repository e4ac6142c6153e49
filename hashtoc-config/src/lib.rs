//! Shared configuration loader for hashtoc.
//!
//! `defaults/hashtoc.default.toml` is embedded into every binary so that docs and runtime behavior
//! stay in sync. Applications layer user-specific files on top of those defaults via [`Loader`]
//! before deserializing into [`HashtocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use hashtoc_core::service::ServiceOptions;
use hashtoc_core::{ConverterOptions, HeadingMarker, SectionLabels};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/hashtoc.default.toml");

/// Top-level configuration consumed by hashtoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct HashtocConfig {
    pub markup: MarkupConfig,
    pub labels: LabelsConfig,
    pub upload: UploadConfig,
}

/// How headings are recognised and indented.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    pub marker: char,
    pub toc_dash: char,
}

/// Captions of the two page sections.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelsConfig {
    pub contents: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub accepted_content_type: String,
}

impl HashtocConfig {
    /// Converter options described by this configuration.
    pub fn converter_options(&self) -> ConverterOptions {
        ConverterOptions {
            marker: HeadingMarker::new(self.markup.marker),
            toc_dash: self.markup.toc_dash,
            labels: SectionLabels {
                contents: self.labels.contents.clone(),
                text: self.labels.text.clone(),
            },
        }
    }

    /// Upload service options described by this configuration.
    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            accepted_content_type: self.upload.accepted_content_type.clone(),
        }
    }
}

/// Builds a [`HashtocConfig`] from the embedded defaults plus whatever the caller layers on top.
///
/// Later layers win. The CLI stacks `--config <file>` over the defaults and `--marker` over both.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with `hashtoc.default.toml`: `#` headings, `-` dashes, `text/plain` uploads.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a user TOML file (what `--config` points at). A missing file fails [`Loader::build`].
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file only if it exists, e.g. a per-user settings file.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, such as `labels.contents`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Override the heading marker (what `--marker` sets).
    pub fn with_marker(self, marker: char) -> Result<Self, ConfigError> {
        self.set_override("markup.marker", marker.to_string())
    }

    /// Merge every layer and deserialize. A marker longer than one character fails here.
    pub fn build(self) -> Result<HashtocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<HashtocConfig, ConfigError> {
    Loader::new().build()
}
