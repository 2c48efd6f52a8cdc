//! Error type for host setup and configuration
//!
//! The animation itself never fails; only loading settings and wiring up the
//! host page can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkyError {
    /// Settings text was not valid JSON for `Settings`
    #[error("invalid settings JSON: {0}")]
    SettingsJson(#[from] serde_json::Error),
    /// A setting parsed but holds an unusable value
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
    /// Settings file could not be read (native only)
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
    /// Window, document or another host object is unavailable
    #[error("host object unavailable: {0}")]
    MissingHost(&'static str),
    /// No canvas element with the given id
    #[error("canvas element `{0}` not found")]
    MissingCanvas(String),
    /// The canvas refused to hand out a 2D context
    #[error("2d drawing context unavailable")]
    NoContext,
}

impl SkyError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SkyError::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }
}
