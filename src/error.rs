// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors that can surface from loading an index or a configuration.
//!
//! Searching itself never fails: a missing or broken index degrades to zero
//! results. Only the load paths return these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlimmerError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search index JSON: {0}")]
    IndexParse(#[source] serde_json::Error),

    #[error("invalid configuration JSON: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GlimmerError>;

impl GlimmerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GlimmerError::Io {
            path: path.into(),
            source,
        }
    }
}
