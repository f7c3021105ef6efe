//! Driver implementation backed by playwright-rs.
//!
//! One [`PlaywrightDriver`] owns one browser with one page: the exclusive
//! browsing context of a single scenario. [`PlaywrightFactory`] launches a
//! fresh one per scenario so isolation stays structural.

use std::sync::Arc;

use async_trait::async_trait;
use playwright_rs::{Browser, Page, Playwright};

use crate::driver::{Driver, DriverHandle};
use crate::error::Result;
use crate::scenarios::DriverFactory;

/// A real browser context, driven through the Playwright protocol.
pub struct PlaywrightDriver {
    // Held for its lifetime: dropping it would tear down the server the
    // browser is speaking to.
    _playwright: Playwright,
    browser: Browser,
    page: Page,
}

impl PlaywrightDriver {
    /// Launches a headless Chromium with a single fresh page.
    pub async fn launch() -> Result<Self> {
        let playwright = Playwright::launch().await?;
        let browser = playwright.chromium().launch().await?;
        let page = browser.new_page().await?;
        Ok(Self {
            _playwright: playwright,
            browser,
            page,
        })
    }
}

#[async_trait]
impl Driver for PlaywrightDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        self.page.goto(url, None).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.page.url())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        self.page.locator(selector).await.fill(value, None).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.page.locator(selector).await.click(None).await?;
        Ok(())
    }

    async fn inner_text(&self, selector: &str) -> Result<Option<String>> {
        let locator = self.page.locator(selector).await;
        if locator.count().await? == 0 {
            return Ok(None);
        }
        Ok(Some(locator.first().inner_text().await?))
    }

    async fn all_inner_texts(&self, selector: &str) -> Result<Vec<String>> {
        let locator = self.page.locator(selector).await;
        let count = locator.count().await?;
        let mut texts = Vec::with_capacity(count);
        for index in 0..count {
            texts.push(locator.nth(index as i32).inner_text().await?);
        }
        Ok(texts)
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.page.locator(selector).await.count().await?)
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        Ok(self.page.locator(selector).await.is_visible().await?)
    }

    async fn close(&self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}

/// Launches one fresh browser per scenario.
pub struct PlaywrightFactory;

#[async_trait]
impl DriverFactory for PlaywrightFactory {
    async fn acquire(&self) -> Result<DriverHandle> {
        Ok(Arc::new(PlaywrightDriver::launch().await?))
    }
}
