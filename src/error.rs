#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the slugline crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.

use std::path::{Path, PathBuf};

/// Unified error type returned by the session, configuration loader and CLI.
///
/// Only [`Error::EmptyInput`] ever reaches an interactive user through the
/// session state. The remaining variants describe failures of the ambient
/// surfaces (files, configuration, clipboard, driver shutdown).
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Raised when a submission contains nothing but whitespace.
    ///
    /// Displays as the bare message so the presentation layer can show it
    /// verbatim.
    #[error("{message}")]
    EmptyInput {
        /// Message shown to the user.
        message: String
    },
    /// Wraps I/O errors that occur while reading configuration or batch files.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location of the file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when configuration or commands violate invariants.
    #[error("invalid input: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps serialization errors when writing JSON output.
    #[error("failed to serialize output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Wraps I/O errors raised while writing to the terminal.
    #[error("failed to write output: {source}")]
    Write {
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Reported by clipboard collaborators that could not store the text.
    #[error("clipboard unavailable: {message}")]
    Clipboard {
        /// Human readable message describing the clipboard failure.
        message: String
    },
    /// Returned when a trigger is sent to a session driver that already
    /// stopped.
    #[error("session is closed")]
    Closed
}

impl Error {
    /// Constructs an empty input error carrying the user-facing message.
    pub fn empty_input<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::EmptyInput {
            message: message.into()
        }
    }

    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a clipboard error from the provided displayable value.
    pub fn clipboard<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Clipboard {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Write {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}
