//! Supported browser engines.
//!
//! The harness drives a fixed set of engines; anything else is rejected
//! at parse time rather than silently producing no session.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ============================================================================
// Browser
// ============================================================================

/// A browser engine the harness can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    /// Google Chrome / Chromium (chromedriver).
    Chrome,
    /// Mozilla Firefox (geckodriver).
    Firefox,
    /// Microsoft Edge (msedgedriver).
    Edge,
    /// Apple Safari (safaridriver).
    Safari,
}

impl Browser {
    /// Every supported engine.
    pub const ALL: [Self; 4] = [Self::Chrome, Self::Firefox, Self::Edge, Self::Safari];

    /// Canonical browser name, as the WebDriver protocol spells it.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Edge => "MicrosoftEdge",
            Self::Safari => "safari",
        }
    }

    /// Conventional endpoint of a locally running driver process.
    ///
    /// chromedriver and msedgedriver listen on 9515 by default;
    /// geckodriver on 4444. safaridriver has no default, 4445 here
    /// matches `safaridriver -p 4445`.
    #[inline]
    #[must_use]
    pub const fn local_endpoint(self) -> &'static str {
        match self {
            Self::Chrome => "http://localhost:9515",
            Self::Edge => "http://localhost:9515",
            Self::Firefox => "http://localhost:4444",
            Self::Safari => "http://localhost:4445",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Browser {
    type Err = Error;

    /// Parses a browser name, case-insensitively, accepting the common
    /// aliases ("chromium", "MicrosoftEdge", "msedge").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" | "chromium" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            "edge" | "msedge" | "microsoftedge" => Ok(Self::Edge),
            "safari" => Ok(Self::Safari),
            _ => Err(Error::unsupported_browser(s)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("chrome".parse::<Browser>().unwrap(), Browser::Chrome);
        assert_eq!("firefox".parse::<Browser>().unwrap(), Browser::Firefox);
        assert_eq!("MicrosoftEdge".parse::<Browser>().unwrap(), Browser::Edge);
        assert_eq!("safari".parse::<Browser>().unwrap(), Browser::Safari);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Chromium".parse::<Browser>().unwrap(), Browser::Chrome);
        assert_eq!("msedge".parse::<Browser>().unwrap(), Browser::Edge);
        assert_eq!("FIREFOX".parse::<Browser>().unwrap(), Browser::Firefox);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "netscape".parse::<Browser>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedBrowser { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_display_matches_protocol_name() {
        assert_eq!(Browser::Edge.to_string(), "MicrosoftEdge");
        assert_eq!(Browser::Chrome.to_string(), "chrome");
    }

    #[test]
    fn test_local_endpoints() {
        assert_eq!(Browser::Chrome.local_endpoint(), "http://localhost:9515");
        assert_eq!(Browser::Firefox.local_endpoint(), "http://localhost:4444");
    }

    #[test]
    fn test_all_covers_every_engine() {
        for browser in Browser::ALL {
            assert_eq!(browser.name().parse::<Browser>().unwrap(), browser);
        }
    }
}
