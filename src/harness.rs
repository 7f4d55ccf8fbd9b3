//! Suite lifecycle.
//!
//! A [`Harness`] owns exactly one WebDriver session for the duration of a
//! test suite: created and navigated to the base URL before the first
//! step, torn down once at the end. [`Harness::finish`] consumes the
//! harness, so a second teardown does not typecheck.
//!
//! # Example
//!
//! ```no_run
//! use gridpilot::{Config, Harness};
//!
//! # async fn example() -> gridpilot::Result<()> {
//! let config = Config::from_env()?;
//! let harness = Harness::start(&config).await?;
//!
//! // ... drive the suite through harness.driver() ...
//!
//! harness.finish().await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use thirtyfour::prelude::*;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::Config;
use crate::driver::SessionBuilder;
use crate::error::{Error, Result};

// ============================================================================
// Harness
// ============================================================================

/// One live suite: a WebDriver session plus the suite's wait settings.
pub struct Harness {
    /// The owned session handle.
    driver: WebDriver,
    /// Element-wait timeout suites should use for lookups.
    element_ttl: Duration,
}

impl fmt::Debug for Harness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harness")
            .field("element_ttl", &self.element_ttl)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Harness - Lifecycle
// ============================================================================

impl Harness {
    /// Builds the configured session and navigates to the base URL.
    ///
    /// The whole setup is bounded by [`Config::suite_timeout`].
    ///
    /// # Errors
    ///
    /// - [`Error::SetupTimeout`] when setup exceeds the suite timeout
    /// - Any [`SessionBuilder::build`] error
    /// - [`Error::Session`] when the initial navigation fails
    pub async fn start(config: &Config) -> Result<Self> {
        let timeout_ms = config.suite_timeout.as_millis() as u64;

        let setup = async {
            let driver = SessionBuilder::from_config(config).build().await?;
            driver.goto(config.base_url.as_str()).await?;
            Ok::<WebDriver, Error>(driver)
        };

        match timeout(config.suite_timeout, setup).await {
            Ok(driver) => {
                let driver = driver?;
                info!(base_url = %config.base_url, "Suite ready");

                Ok(Self {
                    driver,
                    element_ttl: config.element_ttl,
                })
            }
            Err(_) => Err(Error::setup_timeout(timeout_ms)),
        }
    }

    /// The live session handle.
    #[inline]
    #[must_use]
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Element-wait timeout for lookups within this suite.
    #[inline]
    #[must_use]
    pub const fn element_ttl(&self) -> Duration {
        self.element_ttl
    }

    /// Quits the session.
    ///
    /// # Errors
    ///
    /// [`Error::Session`] when the quit command fails; the handle is
    /// consumed either way.
    pub async fn finish(self) -> Result<()> {
        debug!("Quitting WebDriver session");
        self.driver.quit().await?;
        Ok(())
    }
}
