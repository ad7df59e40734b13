#![allow(non_snake_case)]
use crate::View;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Invalid component configuration. Surfaced eagerly when a component builds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid position `{0}`: expected `<side>-<alignment>`, e.g. `above-left`")]
    InvalidPosition(String),
    #[error("invalid length `{0}`: expected `<n>px`, `<n>%`, `auto` or `initial`")]
    InvalidLength(String),
    #[error("invalid padding `{0}`: expected one to four lengths")]
    InvalidPadding(String),
    #[error("{component}: key must not be empty")]
    EmptyKey { component: &'static str },
    #[error("{component}: `{field}` must not be negative (got {value})")]
    NegativeDimension {
        component: &'static str,
        field: &'static str,
        value: f32,
    },
    #[error("{component}: opacity must be within 0..=1 (got {value})")]
    InvalidOpacity { component: &'static str, value: f32 },
    #[error("{component}: unknown part `{part}` (known parts: {known})")]
    UnknownPart {
        component: &'static str,
        part: String,
        known: String,
    },
}

pub struct ErrorInfo {
    pub message: String,
    pub component: String,
}

/// Builds `content`, rendering `fallback` when it returns a `ConfigError` or panics.
pub fn ErrorBoundary(
    component: &str,
    content: impl FnOnce() -> Result<View, ConfigError>,
    fallback: impl FnOnce(ErrorInfo) -> View,
) -> View {
    let message = match catch_unwind(AssertUnwindSafe(content)) {
        Ok(Ok(view)) => return view,
        Ok(Err(err)) => err.to_string(),
        Err(panic) => {
            if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            }
        }
    };

    log::error!("{component}: {message}");
    fallback(ErrorInfo {
        message,
        component: component.to_string(),
    })
}
