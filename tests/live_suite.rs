//! Live suite template.
//!
//! The shape every suite takes: one session created before the steps,
//! torn down once after. These tests need a running driver process (or a
//! grid) plus `ENVIRO`/`WEBDRIVER` set, so they are ignored by default:
//!
//! ```sh
//! ENVIRO=http://localhost:8000 WEBDRIVER=chrome UI=headless \
//!     cargo test --test live_suite -- --ignored
//! ```

use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use gridpilot::{actions, fetch, locate, Config, Harness, Locator};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

#[tokio::test]
#[ignore = "needs a running WebDriver endpoint and ENVIRO/WEBDRIVER set"]
async fn suite_template() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let harness = Harness::start(&config).await?;
    let driver = harness.driver();

    // Steps go here; lookups share the suite's element-wait timeout.
    let body = locate::wait_for(driver, &Locator::css("body"), harness.element_ttl()).await?;
    assert!(body.is_displayed().await?);

    harness.finish().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "needs a running WebDriver endpoint and a page with <button id=\"go\">"]
async fn button_enabled_reflects_disabled_attribute() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let harness = Harness::start(&config).await?;

    // With `<button id="go" disabled>` on the page this is Some(false);
    // removing the attribute flips it to Some(true). A missing button
    // would be None rather than an error.
    let state = actions::button_enabled(harness.driver(), Duration::from_secs(5), "go").await?;
    assert!(state.is_some());

    harness.finish().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "needs a running WebDriver endpoint and ENVIRO/WEBDRIVER set"]
async fn missing_element_times_out_as_none() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let harness = Harness::start(&config).await?;

    let found = locate::by_id(
        harness.driver(),
        Duration::from_millis(1500),
        "no-such-element-on-any-page",
    )
    .await?;
    assert!(found.is_none());

    harness.finish().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "needs network access to ENVIRO"]
async fn base_url_resolves() -> Result<()> {
    let config = Config::from_env()?;

    let status = fetch::fetch_status(config.base_url.as_str()).await?;
    assert_eq!(status, 200);

    let final_url = fetch::fetch_url(config.base_url.as_str()).await?;
    assert!(final_url.starts_with("http"));

    Ok(())
}
