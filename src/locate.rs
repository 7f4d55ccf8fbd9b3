//! Wait-bounded element lookup.
//!
//! Every helper polls the session until a matching element appears or the
//! time-to-live elapses. The two outcomes stay distinguishable: absence is
//! `Ok(None)` (or [`Error::WaitTimeout`] from [`wait_for`]), while an `Err`
//! means the session itself failed. There is no retry beyond the poll and
//! no staleness detection; a returned handle can go stale on navigation.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use thirtyfour::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Poll interval for element lookups.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

// ============================================================================
// Locator
// ============================================================================

/// Element locator strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Element id attribute.
    Id(String),
    /// Single class name.
    Class(String),
    /// CSS selector; a bare tag name (`"button"`, `"a"`) works too.
    Css(String),
    /// XPath expression.
    XPath(String),
}

impl Locator {
    /// Creates an id locator.
    #[inline]
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    /// Creates a class-name locator.
    #[inline]
    pub fn class(value: impl Into<String>) -> Self {
        Self::Class(value.into())
    }

    /// Creates a CSS (or tag-name) locator.
    #[inline]
    pub fn css(value: impl Into<String>) -> Self {
        Self::Css(value.into())
    }

    /// Creates an XPath locator.
    #[inline]
    pub fn xpath(value: impl Into<String>) -> Self {
        Self::XPath(value.into())
    }

    /// Converts into the WebDriver client's locator type.
    fn to_by(&self) -> By {
        match self {
            Self::Id(v) => By::Id(v.as_str()),
            Self::Class(v) => By::ClassName(v.as_str()),
            Self::Css(v) => By::Css(v.as_str()),
            Self::XPath(v) => By::XPath(v.as_str()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(v) => write!(f, "id={v}"),
            Self::Class(v) => write!(f, "class={v}"),
            Self::Css(v) => write!(f, "css={v}"),
            Self::XPath(v) => write!(f, "xpath={v}"),
        }
    }
}

// ============================================================================
// Lookup Helpers
// ============================================================================

/// Polls until an element matches `locator`, for at most `ttl`.
///
/// Returns `Ok(None)` when nothing matched before the timeout.
///
/// # Errors
///
/// [`Error::Session`] when the lookup itself fails (session gone,
/// malformed selector).
pub async fn first_located(
    driver: &WebDriver,
    locator: &Locator,
    ttl: Duration,
) -> Result<Option<WebElement>> {
    debug!(%locator, timeout_ms = ttl.as_millis() as u64, "Waiting for element");

    let mut found = driver
        .query(locator.to_by())
        .wait(ttl, POLL_INTERVAL)
        .all()
        .await?;

    if found.is_empty() {
        debug!(%locator, "No element located before timeout");
        return Ok(None);
    }

    Ok(Some(found.remove(0)))
}

/// Like [`first_located`], but absence is an error.
///
/// # Errors
///
/// [`Error::WaitTimeout`] when nothing matched before the timeout,
/// [`Error::Session`] when the lookup itself fails.
pub async fn wait_for(driver: &WebDriver, locator: &Locator, ttl: Duration) -> Result<WebElement> {
    first_located(driver, locator, ttl)
        .await?
        .ok_or_else(|| Error::wait_timeout(locator.to_string(), ttl.as_millis() as u64))
}

// ============================================================================
// Per-Strategy Wrappers
// ============================================================================

/// Waits for the first element with the given id.
pub async fn by_id(driver: &WebDriver, ttl: Duration, id: &str) -> Result<Option<WebElement>> {
    first_located(driver, &Locator::id(id), ttl).await
}

/// Waits for the first element carrying the given class.
pub async fn by_class(
    driver: &WebDriver,
    ttl: Duration,
    class: &str,
) -> Result<Option<WebElement>> {
    first_located(driver, &Locator::class(class), ttl).await
}

/// Waits for the first element matching the given CSS selector or tag.
pub async fn by_css(driver: &WebDriver, ttl: Duration, css: &str) -> Result<Option<WebElement>> {
    first_located(driver, &Locator::css(css), ttl).await
}

/// Waits for the first element matching the given XPath.
pub async fn by_xpath(
    driver: &WebDriver,
    ttl: Duration,
    xpath: &str,
) -> Result<Option<WebElement>> {
    first_located(driver, &Locator::xpath(xpath), ttl).await
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_display() {
        assert_eq!(Locator::id("go").to_string(), "id=go");
        assert_eq!(Locator::class("btn-primary").to_string(), "class=btn-primary");
        assert_eq!(Locator::css("nav > a").to_string(), "css=nav > a");
        assert_eq!(Locator::xpath("//button").to_string(), "xpath=//button");
    }

    #[test]
    fn test_locator_constructors() {
        assert_eq!(Locator::id("x"), Locator::Id("x".to_string()));
        assert_eq!(Locator::class("x"), Locator::Class("x".to_string()));
        assert_eq!(Locator::css("x"), Locator::Css("x".to_string()));
        assert_eq!(Locator::xpath("x"), Locator::XPath("x".to_string()));
    }

    #[test]
    fn test_wait_timeout_message_carries_locator() {
        let err = Error::wait_timeout(Locator::id("go").to_string(), 5000);
        assert_eq!(err.to_string(), "No element matched id=go within 5000ms");
    }
}
