//! Harness configuration.
//!
//! A [`Config`] is an immutable snapshot of the process environment, taken
//! once at startup and passed by reference into every component that needs
//! it. Nothing in the crate reads the environment after this point.
//!
//! # Variables
//!
//! | Variable | Purpose | Default |
//! |----------|---------|---------|
//! | `ENVIRO` | base URL the suite navigates to | required |
//! | `WEBDRIVER` | browser engine to drive | required |
//! | `ROUTER_ADDR` | remote grid endpoint | none |
//! | `LOCATION` | `remote` to route through the grid | local |
//! | `UI` | `headless` to suppress the visible UI | gui |
//! | `BINARIES` | `custom` to use configured executable paths | managed |
//! | `BINARY_CHROME` / `BINARY_EDGE` / `BINARY_FIREFOX` | executable paths | none |
//! | `TIMEOUT` | suite-setup timeout, ms | 60000 |
//! | `TIMETOLIVE` | element-wait timeout, ms | 30000 |

// ============================================================================
// Imports
// ============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::driver::{BinarySource, Browser, SessionLocation, UiMode};
use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default suite-setup timeout (60 seconds).
pub const DEFAULT_SUITE_TIMEOUT: Duration = Duration::from_secs(60);

/// Default element-wait timeout (30 seconds).
pub const DEFAULT_ELEMENT_TTL: Duration = Duration::from_secs(30);

/// Environment variable names.
mod keys {
    pub const ENVIRO: &str = "ENVIRO";
    pub const WEBDRIVER: &str = "WEBDRIVER";
    pub const ROUTER_ADDR: &str = "ROUTER_ADDR";
    pub const LOCATION: &str = "LOCATION";
    pub const UI: &str = "UI";
    pub const BINARIES: &str = "BINARIES";
    pub const BINARY_CHROME: &str = "BINARY_CHROME";
    pub const BINARY_EDGE: &str = "BINARY_EDGE";
    pub const BINARY_FIREFOX: &str = "BINARY_FIREFOX";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const TIMETOLIVE: &str = "TIMETOLIVE";
}

// ============================================================================
// BinaryPaths
// ============================================================================

/// Custom executable paths, one per engine that supports them.
///
/// Safari always lives where Apple put it, so it has no entry here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryPaths {
    /// Chrome executable path (`BINARY_CHROME`).
    pub chrome: Option<PathBuf>,
    /// Edge executable path (`BINARY_EDGE`).
    pub edge: Option<PathBuf>,
    /// Firefox executable path (`BINARY_FIREFOX`).
    pub firefox: Option<PathBuf>,
}

impl BinaryPaths {
    /// Returns the configured path for `browser`, if any.
    #[must_use]
    pub fn for_browser(&self, browser: Browser) -> Option<&Path> {
        match browser {
            Browser::Chrome => self.chrome.as_deref(),
            Browser::Edge => self.edge.as_deref(),
            Browser::Firefox => self.firefox.as_deref(),
            Browser::Safari => None,
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Immutable harness configuration, read from the environment once.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the suite navigates to after session creation.
    pub base_url: Url,

    /// Browser engine to drive.
    pub browser: Browser,

    /// Remote grid endpoint, when sessions are routed remotely.
    pub grid_url: Option<Url>,

    /// Local driver or remote grid.
    pub location: SessionLocation,

    /// Headless or GUI mode.
    pub ui: UiMode,

    /// Default or custom executables.
    pub binary_source: BinarySource,

    /// Custom executable paths.
    pub binaries: BinaryPaths,

    /// Upper bound on session creation plus initial navigation.
    pub suite_timeout: Duration,

    /// Per-step element-wait timeout.
    pub element_ttl: Duration,
}

// ============================================================================
// Loading
// ============================================================================

impl Config {
    /// Snapshots the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] when `ENVIRO` or `WEBDRIVER` is absent, or a
    ///   URL-valued variable does not parse
    /// - [`Error::UnsupportedBrowser`] for an unknown `WEBDRIVER` value
    /// - [`Error::InvalidFlag`] when a flag variable holds a value outside
    ///   its closed set, or a timeout is not an integer
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Snapshots the configuration from an arbitrary lookup.
    ///
    /// Tests use this to avoid mutating process-wide environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let base_url = parse_url(keys::ENVIRO, &require(keys::ENVIRO, get(keys::ENVIRO))?)?;
        let browser: Browser = require(keys::WEBDRIVER, get(keys::WEBDRIVER))?.parse()?;

        let grid_url = get(keys::ROUTER_ADDR)
            .map(|v| parse_url(keys::ROUTER_ADDR, &v))
            .transpose()?;

        let location: SessionLocation = get(keys::LOCATION).unwrap_or_default().parse()?;
        let ui: UiMode = get(keys::UI).unwrap_or_default().parse()?;
        let binary_source: BinarySource = get(keys::BINARIES).unwrap_or_default().parse()?;

        let binaries = BinaryPaths {
            chrome: get(keys::BINARY_CHROME).map(PathBuf::from),
            edge: get(keys::BINARY_EDGE).map(PathBuf::from),
            firefox: get(keys::BINARY_FIREFOX).map(PathBuf::from),
        };

        let suite_timeout =
            parse_millis(keys::TIMEOUT, get(keys::TIMEOUT))?.unwrap_or(DEFAULT_SUITE_TIMEOUT);
        let element_ttl =
            parse_millis(keys::TIMETOLIVE, get(keys::TIMETOLIVE))?.unwrap_or(DEFAULT_ELEMENT_TTL);

        Ok(Self {
            base_url,
            browser,
            grid_url,
            location,
            ui,
            binary_source,
            binaries,
            suite_timeout,
            element_ttl,
        })
    }
}

// ============================================================================
// Parse Helpers
// ============================================================================

fn require(key: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::config(format!("{key} is not set")))
}

fn parse_url(key: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| Error::config(format!("{key} is not a valid URL: {e}")))
}

fn parse_millis(key: &'static str, value: Option<String>) -> Result<Option<Duration>> {
    value
        .map(|v| {
            v.parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| Error::invalid_flag(key, v))
        })
        .transpose()
}

// ============================================================================
// Tests
// ============================================================================
