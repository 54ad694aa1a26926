// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Session configuration loaded from optional YAML documents.
//!
//! Every key is optional and falls back to the built-in defaults, so an empty
//! document is valid. The slug alphabet and separator are fixed and therefore
//! not part of the configuration.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Error};

/// Message stored in the session when an empty submission is rejected.
pub const DEFAULT_EMPTY_INPUT_MESSAGE: &str = "Please enter some text to convert!";
/// How long the copied indicator stays on after a successful copy.
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;
/// Length of the exit animation that precedes a confirmed reset.
pub const DEFAULT_RESET_FADE_MS: u64 = 300;

/// Tunable presentation parameters of an editable session.
///
/// # Examples
///
/// ```
/// use slugline::parse_config;
///
/// let config = parse_config("copy_feedback_ms: 1500\n",).expect("valid configuration",);
/// assert_eq!(config.copy_feedback_ms, 1500);
/// assert_eq!(config.reset_fade_ms, 300);
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig
{
    /// Message shown when the user submits blank input.
    #[serde(default = "default_empty_input_message")]
    pub empty_input_message: String,

    /// Delay in milliseconds before the copied flag reverts.
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Delay in milliseconds between confirming a reset and clearing state.
    #[serde(default = "default_reset_fade_ms")]
    pub reset_fade_ms: u64,
}

impl Default for SessionConfig
{
    fn default() -> Self
    {
        Self {
            empty_input_message: default_empty_input_message(),
            copy_feedback_ms:    DEFAULT_COPY_FEEDBACK_MS,
            reset_fade_ms:       DEFAULT_RESET_FADE_MS,
        }
    }
}

impl SessionConfig
{
    /// Delay before the copied flag reverts.
    pub fn copy_feedback(&self,) -> Duration
    {
        Duration::from_millis(self.copy_feedback_ms,)
    }

    /// Delay before a confirmed reset clears the session.
    pub fn reset_fade(&self,) -> Duration
    {
        Duration::from_millis(self.reset_fade_ms,)
    }

    /// Checks the invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the empty input message is blank or
    /// the copy feedback delay is zero.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        if self.empty_input_message.trim().is_empty() {
            return Err(Error::validation("empty_input_message must not be blank",),);
        }
        if self.copy_feedback_ms == 0 {
            return Err(Error::validation("copy_feedback_ms must be greater than zero",),);
        }
        Ok((),)
    }
}

fn default_empty_input_message() -> String
{
    DEFAULT_EMPTY_INPUT_MESSAGE.to_owned()
}

fn default_copy_feedback_ms() -> u64
{
    DEFAULT_COPY_FEEDBACK_MS
}

fn default_reset_fade_ms() -> u64
{
    DEFAULT_RESET_FADE_MS
}

/// Loads the session configuration from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the configuration violates invariants.
pub fn load_config(path: &Path,) -> Result<SessionConfig, Error,>
{
    debug!("Reading session config from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses the session configuration from a YAML document string.
///
/// Blank documents produce [`SessionConfig::default`].
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// and [`Error::Validation`](Error::Validation) when invariants fail.
pub fn parse_config(contents: &str,) -> Result<SessionConfig, Error,>
{
    if contents.trim().is_empty() {
        return Ok(SessionConfig::default(),);
    }

    let config: SessionConfig = serde_yaml::from_str(contents,)?;
    config.validate()?;
    Ok(config,)
}

#[cfg(test)]
mod tests
{
    use std::{fs, time::Duration};

    use tempfile::tempdir;

    use super::{SessionConfig, load_config, parse_config};
    use crate::error::Error;

    #[test]
    fn blank_document_uses_defaults()
    {
        let config = parse_config("\n",).expect("blank config is valid",);
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.copy_feedback(), Duration::from_secs(2));
        assert_eq!(config.reset_fade(), Duration::from_millis(300));
    }

    #[test]
    fn partial_document_keeps_remaining_defaults()
    {
        let config = parse_config("empty_input_message: Type something\n",)
            .expect("partial config is valid",);
        assert_eq!(config.empty_input_message, "Type something");
        assert_eq!(config.copy_feedback_ms, 2000);
    }

    #[test]
    fn rejects_unknown_keys()
    {
        let error = parse_config("separator: _\n",).expect_err("separator is not configurable",);
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn rejects_blank_message()
    {
        let error = parse_config("empty_input_message: '   '\n",).expect_err("blank message",);
        match error {
            Error::Validation {
                message,
            } => assert!(message.contains("empty_input_message")),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_copy_feedback()
    {
        let error = parse_config("copy_feedback_ms: 0\n",).expect_err("zero delay",);
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn zero_reset_fade_is_allowed()
    {
        let config = parse_config("reset_fade_ms: 0\n",).expect("instant reset is valid",);
        assert_eq!(config.reset_fade(), Duration::ZERO);
    }

    #[test]
    fn load_config_reads_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("slugline.yaml",);
        fs::write(&path, "reset_fade_ms: 500\n",).expect("failed to write config",);

        let config = load_config(&path,).expect("config loads",);
        assert_eq!(config.reset_fade_ms, 500);
    }

    #[test]
    fn load_config_reports_missing_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("missing.yaml",);

        let error = load_config(&path,).expect_err("missing file",);
        assert!(matches!(error, Error::Io { .. }));
    }
}
