//! Error types for the randomkolor core.

use thiserror::Error;

/// Errors produced by the color generation API and its parsing helpers.
///
/// Generation itself is total over its typed inputs; only batch sizes and
/// string parsing can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KolorError {
    /// An argument was outside its defined domain (e.g. a negative count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A hue bucket, luminosity or format name was not recognized.
    #[error("unknown name: {0}")]
    UnknownName(String),

    /// An encoded color string could not be parsed back.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_includes_message() {
        let err = KolorError::InvalidArgument("count must be >= 0, got -1".into());
        let msg = format!("{err}");
        assert!(msg.contains("-1"), "missing count in: {msg}");
        assert!(msg.starts_with("invalid argument"), "got: {msg}");
    }

    #[test]
    fn unknown_name_includes_name() {
        let err = KolorError::UnknownName("teal".into());
        let msg = format!("{err}");
        assert!(msg.contains("teal"), "missing name in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = KolorError::InvalidColor("expected 6 hex digits, got 3".into());
        let msg = format!("{err}");
        assert!(msg.contains("6 hex digits"), "missing message in: {msg}");
    }

    #[test]
    fn kolor_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KolorError>();
    }

    #[test]
    fn kolor_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<KolorError>();
    }
}
