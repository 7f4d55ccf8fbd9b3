//! Builder for live WebDriver sessions.
//!
//! A [`SessionBuilder`] starts from the harness [`Config`], accepts
//! per-suite overrides, and produces a connected [`WebDriver`] handle.
//! Capability assembly is engine-specific; everything the engine can take
//! at launch goes into its capabilities, the rest (Firefox GUI sizing,
//! Safari sizing) is applied right after the session exists.
//!
//! # Example
//!
//! ```no_run
//! use gridpilot::{Config, SessionBuilder, SizeClass};
//!
//! # async fn example() -> gridpilot::Result<()> {
//! let config = Config::from_env()?;
//! let driver = SessionBuilder::from_config(&config)
//!     .size(SizeClass::Mobile)
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use thirtyfour::prelude::*;
use thirtyfour::{BrowserCapabilitiesHelper, ChromiumLikeCapabilities};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};

use super::browser::Browser;
use super::options::{BinarySource, SessionLocation, SessionOptions, SizeClass, UiMode};

// ============================================================================
// SessionBuilder
// ============================================================================

/// Builder for a configured [`WebDriver`] session.
///
/// Seeded from [`Config`]; every flag can be overridden per suite.
#[derive(Debug, Clone)]
pub struct SessionBuilder<'a> {
    /// Harness configuration (grid endpoint, binary paths).
    config: &'a Config,
    /// Engine to drive.
    browser: Browser,
    /// Launch options.
    options: SessionOptions,
}

// ============================================================================
// SessionBuilder - Configuration
// ============================================================================

impl<'a> SessionBuilder<'a> {
    /// Creates a builder seeded with the configured browser and flags.
    #[must_use]
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            config,
            browser: config.browser,
            options: SessionOptions::new()
                .with_ui(config.ui)
                .with_binaries(config.binary_source)
                .with_location(config.location),
        }
    }

    /// Overrides the browser engine.
    #[inline]
    #[must_use]
    pub fn browser(mut self, browser: Browser) -> Self {
        self.browser = browser;
        self
    }

    /// Sets the window size class.
    #[inline]
    #[must_use]
    pub fn size(mut self, size: SizeClass) -> Self {
        self.options = self.options.with_size(size);
        self
    }

    /// Overrides the UI mode.
    #[inline]
    #[must_use]
    pub fn ui(mut self, ui: UiMode) -> Self {
        self.options = self.options.with_ui(ui);
        self
    }

    /// Overrides the binary source.
    #[inline]
    #[must_use]
    pub fn binaries(mut self, binaries: BinarySource) -> Self {
        self.options = self.options.with_binaries(binaries);
        self
    }

    /// Overrides the session location.
    #[inline]
    #[must_use]
    pub fn location(mut self, location: SessionLocation) -> Self {
        self.options = self.options.with_location(location);
        self
    }
}

// ============================================================================
// SessionBuilder - Build
// ============================================================================

impl SessionBuilder<'_> {
    /// Creates the WebDriver session.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] when a remote session is requested without a
    ///   grid endpoint
    /// - [`Error::MissingBinary`] when custom binaries are requested for
    ///   an engine with no configured path
    /// - [`Error::Session`] when the underlying session cannot be created
    pub async fn build(self) -> Result<WebDriver> {
        let endpoint = self.endpoint()?;

        info!(
            browser = %self.browser,
            endpoint = %endpoint,
            headless = self.options.is_headless(),
            "Creating WebDriver session"
        );

        let driver = match self.browser {
            Browser::Chrome => self.chrome_session(&endpoint).await?,
            Browser::Edge => self.edge_session(&endpoint).await?,
            Browser::Firefox => self.firefox_session(&endpoint).await?,
            Browser::Safari => self.safari_session(&endpoint).await?,
        };

        if let Some(vp) = self.options.initial_rect(self.browser) {
            debug!(viewport = %vp, "Applying window rect after session creation");
            driver
                .set_window_rect(0, 0, vp.width.into(), vp.height.into())
                .await?;
        }

        Ok(driver)
    }

    /// Resolves the driver endpoint for the configured location.
    fn endpoint(&self) -> Result<String> {
        match self.options.location {
            SessionLocation::Local => Ok(self.browser.local_endpoint().to_string()),
            SessionLocation::Remote => self
                .config
                .grid_url
                .as_ref()
                .map(|url| url.as_str().to_string())
                .ok_or_else(|| Error::config("ROUTER_ADDR is required for remote sessions")),
        }
    }

    /// Resolves the custom binary path, if one applies to this session.
    ///
    /// Safari has no binary option; the flag is ignored for it.
    fn binary(&self) -> Result<Option<&str>> {
        if self.options.binaries == BinarySource::Managed || self.browser == Browser::Safari {
            return Ok(None);
        }

        let path = self
            .config
            .binaries
            .for_browser(self.browser)
            .ok_or_else(|| Error::missing_binary(self.browser))?;

        path.to_str()
            .map(Some)
            .ok_or_else(|| Error::config(format!("{} binary path is not UTF-8", self.browser)))
    }
}

// ============================================================================
// SessionBuilder - Per-Engine Sessions
// ============================================================================

impl SessionBuilder<'_> {
    async fn chrome_session(&self, endpoint: &str) -> Result<WebDriver> {
        let mut caps = DesiredCapabilities::chrome();

        for arg in self.options.to_args(Browser::Chrome) {
            caps.add_arg(&arg)?;
        }

        if let Some(path) = self.binary()? {
            caps.set_binary(path)?;
        }

        Ok(WebDriver::new(endpoint, caps).await?)
    }

    async fn edge_session(&self, endpoint: &str) -> Result<WebDriver> {
        let mut caps = DesiredCapabilities::edge();

        for arg in self.options.to_args(Browser::Edge) {
            caps.add_arg(&arg)?;
        }

        if let Some(path) = self.binary()? {
            caps.set_binary(path)?;
        }

        Ok(WebDriver::new(endpoint, caps).await?)
    }

    async fn firefox_session(&self, endpoint: &str) -> Result<WebDriver> {
        let mut caps = DesiredCapabilities::firefox();

        for arg in self.options.to_args(Browser::Firefox) {
            caps.add_arg(&arg)?;
        }

        if let Some(path) = self.binary()? {
            caps.insert_browser_option("binary", serde_json::json!(path))?;
        }

        Ok(WebDriver::new(endpoint, caps).await?)
    }

    async fn safari_session(&self, endpoint: &str) -> Result<WebDriver> {
        if self.options.is_headless() || self.options.binaries == BinarySource::Custom {
            debug!("safari ignores UI and binary flags");
        }

        let caps = DesiredCapabilities::safari();
        Ok(WebDriver::new(endpoint, caps).await?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use url::Url;

    use crate::config::BinaryPaths;

    fn config() -> Config {
        Config {
            base_url: Url::parse("https://staging.example.com").unwrap(),
            browser: Browser::Chrome,
            grid_url: None,
            location: SessionLocation::Local,
            ui: UiMode::Gui,
            binary_source: BinarySource::Managed,
            binaries: BinaryPaths::default(),
            suite_timeout: std::time::Duration::from_secs(60),
            element_ttl: std::time::Duration::from_secs(30),
        }
    }

    #[test]
    fn test_seeded_from_config() {
        let mut cfg = config();
        cfg.browser = Browser::Firefox;
        cfg.ui = UiMode::Headless;

        let builder = SessionBuilder::from_config(&cfg);
        assert_eq!(builder.browser, Browser::Firefox);
        assert!(builder.options.is_headless());
    }

    #[test]
    fn test_local_endpoint_per_browser() {
        let cfg = config();
        let chrome = SessionBuilder::from_config(&cfg);
        let firefox = SessionBuilder::from_config(&cfg).browser(Browser::Firefox);

        assert_eq!(chrome.endpoint().unwrap(), "http://localhost:9515");
        assert_eq!(firefox.endpoint().unwrap(), "http://localhost:4444");
    }

    #[test]
    fn test_remote_endpoint_uses_grid() {
        let mut cfg = config();
        cfg.grid_url = Some(Url::parse("http://grid.internal:4444/wd/hub").unwrap());

        let builder = SessionBuilder::from_config(&cfg).location(SessionLocation::Remote);
        assert_eq!(
            builder.endpoint().unwrap(),
            "http://grid.internal:4444/wd/hub"
        );
    }

    #[test]
    fn test_remote_without_grid_fails() {
        let cfg = config();
        let builder = SessionBuilder::from_config(&cfg).location(SessionLocation::Remote);

        let err = builder.endpoint().unwrap_err();
        assert!(err.to_string().contains("ROUTER_ADDR"));
    }

    #[test]
    fn test_managed_binary_is_none() {
        let cfg = config();
        let builder = SessionBuilder::from_config(&cfg);
        assert_eq!(builder.binary().unwrap(), None);
    }

    #[test]
    fn test_custom_binary_resolves_path() {
        let mut cfg = config();
        cfg.binaries.chrome = Some(PathBuf::from("/opt/chrome/chrome"));

        let builder = SessionBuilder::from_config(&cfg).binaries(BinarySource::Custom);
        assert_eq!(builder.binary().unwrap(), Some("/opt/chrome/chrome"));
    }

    #[test]
    fn test_custom_binary_without_path_fails() {
        let cfg = config();
        let builder = SessionBuilder::from_config(&cfg).binaries(BinarySource::Custom);

        let err = builder.binary().unwrap_err();
        assert!(matches!(err, Error::MissingBinary { browser: Browser::Chrome }));
    }

    #[test]
    fn test_safari_ignores_custom_binaries() {
        let cfg = config();
        let builder = SessionBuilder::from_config(&cfg)
            .browser(Browser::Safari)
            .binaries(BinarySource::Custom);

        assert_eq!(builder.binary().unwrap(), None);
    }
}
