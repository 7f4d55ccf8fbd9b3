//! Session construction.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Browser`] | Supported engines and their driver endpoints |
//! | [`SessionOptions`] | Closed flag set for one session |
//! | [`SessionBuilder`] | Fluent config-to-session builder |
//! | [`Viewport`] | Fixed window size presets |
//!
//! # Example
//!
//! ```no_run
//! use gridpilot::{Config, SessionBuilder};
//!
//! # async fn example() -> gridpilot::Result<()> {
//! let config = Config::from_env()?;
//! let driver = SessionBuilder::from_config(&config).build().await?;
//! driver.goto(config.base_url.as_str()).await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Supported browser engines.
pub mod browser;

/// Fluent builder producing live sessions.
pub mod builder;

/// Session flags and launch options.
pub mod options;

// ============================================================================
// Re-exports
// ============================================================================

pub use browser::Browser;
pub use builder::SessionBuilder;
pub use options::{BinarySource, SessionLocation, SessionOptions, SizeClass, UiMode, Viewport};
