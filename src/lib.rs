//! gridpilot - WebDriver test harness.
//!
//! This crate assembles per-browser WebDriver sessions from an
//! environment-derived configuration and provides the small helper layer
//! UI test suites lean on: wait-bounded element lookup, readiness checks,
//! cursor moves, and plain HTTP link validation. Everything hard — the
//! wire protocol, session management, element location — is delegated to
//! the [`thirtyfour`] WebDriver client; this layer owns configuration and
//! suite lifecycle only.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use gridpilot::{locate, Config, Harness, Locator};
//!
//! #[tokio::main]
//! async fn main() -> gridpilot::Result<()> {
//!     // Reads ENVIRO, WEBDRIVER, UI, ... once.
//!     let config = Config::from_env()?;
//!
//!     // Session up, base URL open.
//!     let harness = Harness::start(&config).await?;
//!
//!     let login = locate::wait_for(
//!         harness.driver(),
//!         &Locator::id("login"),
//!         harness.element_ttl(),
//!     )
//!     .await?;
//!     login.click().await?;
//!
//!     harness.finish().await
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Environment snapshot: [`Config`] |
//! | [`driver`] | Engines, flags, and the [`SessionBuilder`] |
//! | [`harness`] | Suite lifecycle: [`Harness`] |
//! | [`locate`] | Wait-bounded element lookup |
//! | [`actions`] | Readiness checks, cursor moves, delays |
//! | [`fetch`] | Plain HTTP status/redirect checks |
//! | [`util`] | Ordinal formatting |
//! | [`error`] | Error types and [`Result`] alias |
//!
//! # Environment
//!
//! Sessions run against an already-listening driver process (chromedriver,
//! geckodriver, msedgedriver, safaridriver) or a Selenium grid router
//! reachable at `ROUTER_ADDR` when `LOCATION=remote`.

// ============================================================================
// Modules
// ============================================================================

/// Readiness checks, cursor moves, delays.
pub mod actions;

/// Environment-derived harness configuration.
pub mod config;

/// Browser engines, session flags, session builder.
pub mod driver;

/// Error types and result alias.
pub mod error;

/// Plain HTTP status and redirect checks.
pub mod fetch;

/// Suite lifecycle.
pub mod harness;

/// Wait-bounded element lookup.
pub mod locate;

/// Formatting odds and ends.
pub mod util;

// ============================================================================
// Re-exports
// ============================================================================

// Configuration
pub use config::{BinaryPaths, Config, DEFAULT_ELEMENT_TTL, DEFAULT_SUITE_TIMEOUT};

// Driver types
pub use driver::{
    BinarySource, Browser, SessionBuilder, SessionLocation, SessionOptions, SizeClass, UiMode,
    Viewport,
};

// Error types
pub use error::{Error, Result};

// Suite lifecycle
pub use harness::Harness;

// Lookup
pub use locate::Locator;

// Session and element handles are the client's types; re-exported so
// suites do not need a direct `thirtyfour` dependency for signatures.
pub use thirtyfour::{WebDriver, WebElement};
