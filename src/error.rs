//! Error types for the harness.
//!
//! All fallible operations return [`Result<T>`] which uses [`enum@Error`].
//! Element lookups additionally use `Ok(None)` for "never appeared before
//! the timeout", so an `Err` always means the operation itself failed.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`], [`Error::InvalidFlag`], [`Error::UnsupportedBrowser`], [`Error::MissingBinary`] |
//! | Session | [`Error::Session`], [`Error::SetupTimeout`] |
//! | Lookup | [`Error::WaitTimeout`] |
//! | External | [`Error::Http`], [`Error::Url`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thirtyfour::error::WebDriverError;
use thiserror::Error;

use crate::driver::Browser;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant carries the context needed to tell a misconfiguration
/// apart from a session failure or an expired wait.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when a required setting is absent or malformed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// A flag variable holds a value outside its closed set.
    #[error("Invalid value for {flag}: {value:?}")]
    InvalidFlag {
        /// The flag (environment variable) name.
        flag: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Browser name is not one of the supported engines.
    #[error("Unsupported browser: {name:?}")]
    UnsupportedBrowser {
        /// The unrecognized browser name.
        name: String,
    },

    /// Custom binary mode requested without a configured path.
    #[error("No custom binary path configured for {browser}")]
    MissingBinary {
        /// Browser missing its binary path.
        browser: Browser,
    },

    // ========================================================================
    // Session Errors
    // ========================================================================
    /// Suite setup exceeded its timeout.
    ///
    /// Returned when session creation plus initial navigation does not
    /// complete within the configured suite timeout.
    #[error("Suite setup timed out after {timeout_ms}ms")]
    SetupTimeout {
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    /// WebDriver session error.
    ///
    /// Any failure surfaced by the underlying WebDriver client.
    #[error("Session error: {0}")]
    Session(#[from] WebDriverError),

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// No element matched the locator before the timeout elapsed.
    #[error("No element matched {locator} within {timeout_ms}ms")]
    WaitTimeout {
        /// The locator description.
        locator: String,
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parse error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid flag error.
    #[inline]
    pub fn invalid_flag(flag: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFlag {
            flag,
            value: value.into(),
        }
    }

    /// Creates an unsupported browser error.
    #[inline]
    pub fn unsupported_browser(name: impl Into<String>) -> Self {
        Self::UnsupportedBrowser { name: name.into() }
    }

    /// Creates a missing binary error.
    #[inline]
    pub fn missing_binary(browser: Browser) -> Self {
        Self::MissingBinary { browser }
    }

    /// Creates a setup timeout error.
    #[inline]
    pub fn setup_timeout(timeout_ms: u64) -> Self {
        Self::SetupTimeout { timeout_ms }
    }

    /// Creates a wait timeout error.
    #[inline]
    pub fn wait_timeout(locator: impl Into<String>, timeout_ms: u64) -> Self {
        Self::WaitTimeout {
            locator: locator.into(),
            timeout_ms,
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::SetupTimeout { .. } | Self::WaitTimeout { .. })
    }

    /// Returns `true` if this error stems from configuration rather than
    /// a live session.
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config { .. }
                | Self::InvalidFlag { .. }
                | Self::UnsupportedBrowser { .. }
                | Self::MissingBinary { .. }
                | Self::Url(_)
        )
    }

    /// Returns `true` if the underlying WebDriver session failed.
    #[inline]
    #[must_use]
    pub fn is_session_error(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_display() {
        let err = Error::config("ENVIRO is not set");
        assert_eq!(err.to_string(), "Configuration error: ENVIRO is not set");
    }

    #[test]
    fn test_invalid_flag_display() {
        let err = Error::invalid_flag("UI", "kiosk");
        assert_eq!(err.to_string(), "Invalid value for UI: \"kiosk\"");
    }

    #[test]
    fn test_unsupported_browser_display() {
        let err = Error::unsupported_browser("netscape");
        assert_eq!(err.to_string(), "Unsupported browser: \"netscape\"");
    }

    #[test]
    fn test_wait_timeout_display() {
        let err = Error::wait_timeout("id=go", 5000);
        assert_eq!(err.to_string(), "No element matched id=go within 5000ms");
    }

    #[test]
    fn test_is_timeout() {
        assert!(Error::setup_timeout(60_000).is_timeout());
        assert!(Error::wait_timeout("css=.btn", 30_000).is_timeout());
        assert!(!Error::config("x").is_timeout());
    }

    #[test]
    fn test_is_config_error() {
        assert!(Error::config("x").is_config_error());
        assert!(Error::invalid_flag("LOCATION", "cloud").is_config_error());
        assert!(Error::unsupported_browser("lynx").is_config_error());
        assert!(Error::missing_binary(Browser::Chrome).is_config_error());
        assert!(!Error::setup_timeout(1000).is_config_error());
    }

    #[test]
    fn test_from_url_error() {
        let parse_err = "not a url".parse::<url::Url>().unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Url(_)));
        assert!(err.is_config_error());
    }
}
