//! Small UI action helpers.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use thirtyfour::prelude::*;
use tokio::task;
use tracing::debug;

use crate::error::Result;
use crate::locate;

// ============================================================================
// Helpers
// ============================================================================

/// Reports whether the button with `id` is enabled.
///
/// Waits up to `ttl` for the button to appear. `Ok(Some(true))` means
/// enabled, `Ok(Some(false))` disabled, `Ok(None)` never located.
///
/// # Errors
///
/// [`crate::Error::Session`] when the lookup or the state check fails.
pub async fn button_enabled(driver: &WebDriver, ttl: Duration, id: &str) -> Result<Option<bool>> {
    match locate::by_id(driver, ttl, id).await? {
        Some(button) => Ok(Some(button.is_enabled().await?)),
        None => Ok(None),
    }
}

/// Moves the pointer from the center of `origin` by `dx`,`dy` pixels.
///
/// Resolves once the move has been performed, after yielding to the
/// scheduler once so queued driver callbacks run before the caller
/// continues.
pub async fn move_cursor(
    driver: &WebDriver,
    origin: &WebElement,
    dx: i32,
    dy: i32,
) -> Result<()> {
    debug!(dx, dy, "Moving cursor");

    driver
        .action_chain()
        .move_to_element_with_offset(origin, dx.into(), dy.into())
        .perform()
        .await?;

    task::yield_now().await;
    Ok(())
}

/// Cooperative sleep.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Instant;

    #[tokio::test]
    async fn test_delay_sleeps_at_least_requested() {
        let start = Instant::now();
        delay(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
