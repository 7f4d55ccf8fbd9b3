//! Session flags and launch options.
//!
//! Each flag arrives as a string from the environment (`"mobile"`,
//! `"headless"`, `"custom"`, `"remote"`) and parses into a closed enum:
//! the empty string and unset both mean the default variant, anything
//! else outside the set is rejected.
//!
//! # Example
//!
//! ```
//! use gridpilot::driver::{Browser, SessionOptions, SizeClass, UiMode};
//!
//! let options = SessionOptions::new()
//!     .with_size(SizeClass::Mobile)
//!     .with_ui(UiMode::Headless);
//!
//! let args = options.to_args(Browser::Chrome);
//! // ["--log-level=3", "--headless", "--window-size=425,812"]
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

use super::browser::Browser;

// ============================================================================
// Viewport
// ============================================================================

/// Window dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Preset for the mobile size class.
    pub const MOBILE: Self = Self {
        width: 425,
        height: 812,
    };

    /// Preset for the desktop size class.
    pub const DESKTOP: Self = Self {
        width: 1440,
        height: 900,
    };
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ============================================================================
// SizeClass
// ============================================================================

/// Window size class for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeClass {
    /// Leave the window at the browser's default size.
    #[default]
    BrowserDefault,
    /// Fixed mobile viewport ([`Viewport::MOBILE`]).
    Mobile,
    /// Fixed desktop viewport ([`Viewport::DESKTOP`]).
    Desktop,
}

impl SizeClass {
    /// Returns the fixed viewport for this class, if any.
    #[inline]
    #[must_use]
    pub const fn viewport(self) -> Option<Viewport> {
        match self {
            Self::BrowserDefault => None,
            Self::Mobile => Some(Viewport::MOBILE),
            Self::Desktop => Some(Viewport::DESKTOP),
        }
    }
}

impl FromStr for SizeClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Ok(Self::BrowserDefault),
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            _ => Err(Error::invalid_flag("size", s)),
        }
    }
}

// ============================================================================
// UiMode
// ============================================================================

/// Whether the browser runs with a visible UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Visible browser window.
    #[default]
    Gui,
    /// No visible UI.
    Headless,
}

impl FromStr for UiMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Gui),
            "headless" => Ok(Self::Headless),
            _ => Err(Error::invalid_flag("UI", s)),
        }
    }
}

// ============================================================================
// BinarySource
// ============================================================================

/// Where the browser executable comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BinarySource {
    /// Default discovery by the driver.
    #[default]
    Managed,
    /// Pre-configured filesystem path from [`crate::Config`].
    Custom,
}

impl FromStr for BinarySource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Managed),
            "custom" => Ok(Self::Custom),
            _ => Err(Error::invalid_flag("BINARIES", s)),
        }
    }
}

// ============================================================================
// SessionLocation
// ============================================================================

/// Where the session is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionLocation {
    /// Local driver process at the browser's conventional endpoint.
    #[default]
    Local,
    /// Remote grid router from [`crate::Config::grid_url`].
    Remote,
}

impl FromStr for SessionLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            _ => Err(Error::invalid_flag("LOCATION", s)),
        }
    }
}

// ============================================================================
// SessionOptions
// ============================================================================

/// Launch options for one WebDriver session.
///
/// Safari ignores [`UiMode`] and [`BinarySource`] entirely (the platform
/// offers neither), so for Safari these fields never affect the produced
/// session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Window size class.
    pub size: SizeClass,
    /// Headless or GUI mode.
    pub ui: UiMode,
    /// Default or custom executable.
    pub binaries: BinarySource,
    /// Local driver or remote grid.
    pub location: SessionLocation,
}

// ============================================================================
// Builder Methods
// ============================================================================

impl SessionOptions {
    /// Creates options with every flag at its default.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size: SizeClass::BrowserDefault,
            ui: UiMode::Gui,
            binaries: BinarySource::Managed,
            location: SessionLocation::Local,
        }
    }

    /// Sets the window size class.
    #[inline]
    #[must_use]
    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }

    /// Sets the UI mode.
    #[inline]
    #[must_use]
    pub fn with_ui(mut self, ui: UiMode) -> Self {
        self.ui = ui;
        self
    }

    /// Sets the binary source.
    #[inline]
    #[must_use]
    pub fn with_binaries(mut self, binaries: BinarySource) -> Self {
        self.binaries = binaries;
        self
    }

    /// Sets the session location.
    #[inline]
    #[must_use]
    pub fn with_location(mut self, location: SessionLocation) -> Self {
        self.location = location;
        self
    }

    /// Returns `true` if headless mode is requested.
    #[inline]
    #[must_use]
    pub const fn is_headless(&self) -> bool {
        matches!(self.ui, UiMode::Headless)
    }

    /// Returns `true` if the session targets a remote grid.
    #[inline]
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self.location, SessionLocation::Remote)
    }
}

// ============================================================================
// Conversion Methods
// ============================================================================

impl SessionOptions {
    /// Converts the options into browser command-line arguments.
    ///
    /// Chromium engines take `--window-size` at launch; Firefox only
    /// honors `--width`/`--height` when headless, and Safari takes no
    /// arguments at all. Sizing not expressible here is applied after
    /// session creation, see [`Self::initial_rect`].
    #[must_use]
    pub fn to_args(&self, browser: Browser) -> Vec<String> {
        let mut args = Vec::with_capacity(4);

        match browser {
            Browser::Chrome | Browser::Edge => {
                // Keeps chromedriver/msedgedriver console output to fatal errors.
                args.push("--log-level=3".to_string());

                if self.is_headless() {
                    args.push("--headless".to_string());
                }

                if let Some(vp) = self.size.viewport() {
                    args.push(format!("--window-size={},{}", vp.width, vp.height));
                }
            }
            Browser::Firefox => {
                if self.is_headless() {
                    args.push("-headless".to_string());

                    if let Some(vp) = self.size.viewport() {
                        args.push(format!("--width={}", vp.width));
                        args.push(format!("--height={}", vp.height));
                    }
                }
            }
            Browser::Safari => {}
        }

        args
    }

    /// Returns the window rect to apply once the session exists.
    ///
    /// Firefox in GUI mode and Safari cannot take their size at launch,
    /// so the harness resizes the window right after session creation.
    #[must_use]
    pub fn initial_rect(&self, browser: Browser) -> Option<Viewport> {
        match browser {
            Browser::Safari => self.size.viewport(),
            Browser::Firefox if !self.is_headless() => self.size.viewport(),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
