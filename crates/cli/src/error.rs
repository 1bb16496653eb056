//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: avatar generation error (bad size)
//! - 11: I/O error (file write)
//! - 12: input error (bad argument values)
//! - 13: serialization error

use blobvatar_core::AvatarError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A generation-level error (invalid size).
    Avatar(AvatarError),
    /// An I/O error (output file write).
    Io(String),
    /// A user input error.
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Avatar(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Avatar(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<AvatarError> for CliError {
    fn from(e: AvatarError) -> Self {
        CliError::Avatar(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_variant() {
        let codes = [
            CliError::Avatar(AvatarError::InvalidSize { size: 0.0 }).exit_code(),
            CliError::Io("w".into()).exit_code(),
            CliError::Input("i".into()).exit_code(),
            CliError::Serialization("s".into()).exit_code(),
        ];
        assert_eq!(codes, [10, 11, 12, 13]);
    }

    #[test]
    fn avatar_error_converts_and_displays() {
        let err: CliError = AvatarError::InvalidSize { size: -1.0 }.into();
        assert_eq!(err.exit_code(), 10);
        assert!(format!("{err}").contains("invalid size"));
    }

    #[test]
    fn io_error_displays_its_message() {
        let err = CliError::Io("failed to write avatar.svg".into());
        assert_eq!(format!("{err}"), "failed to write avatar.svg");
    }
}
