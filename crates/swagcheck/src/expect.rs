// Assertions - Auto-retry assertions over observable page state
//
// Provides the expect() API used by every page object and scenario. An
// expectation polls the driver until the observation matches or the timeout
// elapses; a timed-out expectation always reports the expected and the last
// observed value.

use std::time::{Duration, Instant};

use crate::driver::{DriverHandle, Element};
use crate::error::{Error, Result};

/// Default timeout for assertions (5 seconds)
const DEFAULT_EXPECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for assertions (100ms)
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Creates an expectation for an element with auto-retry behavior.
///
/// Assertions retry until they pass or time out (default: 5 seconds).
///
/// # Example
///
/// ```ignore
/// use swagcheck::expect;
///
/// let badge = inventory.cart_badge();
/// expect(badge.clone()).to_have_text("1").await?;
/// expect(badge).to_be_absent().await?;
/// ```
pub fn expect(element: Element) -> Expectation {
    Expectation::new(element)
}

/// Creates an expectation over the context's current location.
pub fn expect_page(driver: &DriverHandle) -> PageExpectation {
    PageExpectation::new(driver.clone())
}

/// Expectation wraps an element and provides assertion methods with
/// auto-retry.
pub struct Expectation {
    element: Element,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

#[allow(clippy::wrong_self_convention)]
impl Expectation {
    fn new(element: Element) -> Self {
        Self {
            element,
            timeout: DEFAULT_EXPECT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            negate: false,
        }
    }

    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this assertion. Default is 100ms.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Negates the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Asserts that at least one matching element is rendered visible.
    pub async fn to_be_visible(self) -> Result<()> {
        self.poll("a visible element", async |el| {
            let visible = el.is_visible().await?;
            let actual = if visible {
                "a visible element"
            } else {
                "no visible element"
            };
            Ok((visible, actual.to_string()))
        })
        .await
    }

    /// Asserts that no matching element is rendered at all.
    ///
    /// This is an existence check, not a text check: an element showing an
    /// empty string still fails it.
    pub async fn to_be_absent(self) -> Result<()> {
        self.poll("no rendered element", async |el| {
            let count = el.count().await?;
            Ok((count == 0, format!("{count} rendered element(s)")))
        })
        .await
    }

    /// Asserts the element's visible text equals `expected` exactly.
    ///
    /// Text is trimmed on both sides before comparison. An absent element
    /// never matches.
    pub async fn to_have_text(self, expected: &str) -> Result<()> {
        let want = expected.trim().to_string();
        self.poll(&format!("text '{want}'"), async |el| {
            match el.inner_text().await? {
                Some(text) => {
                    let text = text.trim().to_string();
                    Ok((text == want, format!("text '{text}'")))
                }
                None => Ok((false, "no matching element".to_string())),
            }
        })
        .await
    }

    /// Asserts the element's visible text matches the regex `pattern`.
    pub async fn to_match_text(self, pattern: &str) -> Result<()> {
        let re = regex::Regex::new(pattern)
            .map_err(|e| Error::Driver(format!("invalid pattern '{pattern}': {e}")))?;
        self.poll(&format!("text matching '{pattern}'"), async |el| {
            match el.inner_text().await? {
                Some(text) => {
                    let trimmed = text.trim();
                    Ok((re.is_match(trimmed), format!("text '{trimmed}'")))
                }
                None => Ok((false, "no matching element".to_string())),
            }
        })
        .await
    }

    /// Asserts exactly `expected` elements match the selector.
    pub async fn to_have_count(self, expected: usize) -> Result<()> {
        self.poll(&format!("{expected} element(s)"), async |el| {
            let count = el.count().await?;
            Ok((count == expected, format!("{count} element(s)")))
        })
        .await
    }

    /// Asserts the matching elements' texts equal `expected`, in document
    /// order.
    pub async fn to_have_texts<S: AsRef<str>>(self, expected: &[S]) -> Result<()> {
        let want: Vec<String> = expected.iter().map(|s| s.as_ref().trim().to_string()).collect();
        self.poll(&format!("texts {want:?}"), async |el| {
            let texts: Vec<String> = el
                .all_inner_texts()
                .await?
                .into_iter()
                .map(|t| t.trim().to_string())
                .collect();
            Ok((texts == want, format!("texts {texts:?}")))
        })
        .await
    }

    async fn poll(
        self,
        expected: &str,
        mut observe: impl AsyncFnMut(&Element) -> Result<(bool, String)>,
    ) -> Result<()> {
        let start = Instant::now();
        loop {
            let (holds, actual) = observe(&self.element).await?;
            let matches = if self.negate { !holds } else { holds };
            if matches {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                let expected = if self.negate {
                    format!("not {expected}")
                } else {
                    expected.to_string()
                };
                tracing::debug!(
                    selector = self.element.selector(),
                    %expected,
                    %actual,
                    "expectation timed out"
                );
                return Err(Error::Assertion {
                    selector: self.element.selector().to_string(),
                    expected,
                    actual,
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Location assertions against the browsing context.
pub struct PageExpectation {
    driver: DriverHandle,
    timeout: Duration,
    poll_interval: Duration,
}

#[allow(clippy::wrong_self_convention)]
impl PageExpectation {
    fn new(driver: DriverHandle) -> Self {
        Self {
            driver,
            timeout: DEFAULT_EXPECT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Asserts the current location equals `expected` exactly.
    ///
    /// A timeout surfaces as [`Error::Navigation`] carrying the expected
    /// and the last observed location.
    pub async fn to_have_url(self, expected: &str) -> Result<()> {
        self.poll_url(expected, |actual| actual == expected).await
    }

    /// Asserts the current location matches the regex `pattern`.
    pub async fn to_match_url(self, pattern: &str) -> Result<()> {
        let re = regex::Regex::new(pattern)
            .map_err(|e| Error::Driver(format!("invalid pattern '{pattern}': {e}")))?;
        self.poll_url(&format!("location matching '{pattern}'"), |actual| {
            re.is_match(actual)
        })
        .await
    }

    async fn poll_url(self, expected: &str, matches: impl Fn(&str) -> bool) -> Result<()> {
        let start = Instant::now();
        loop {
            let actual = self.driver.current_url().await?;
            if matches(&actual) {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                tracing::debug!(%expected, %actual, "location expectation timed out");
                return Err(Error::Navigation {
                    expected: expected.to_string(),
                    actual,
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::driver::Driver;

    /// Driver stub whose one element shows "loading" for the first few
    /// polls, then "ready".
    struct SettlingDriver {
        polls_until_ready: usize,
        polls: AtomicUsize,
    }

    impl SettlingDriver {
        fn settled_after(polls_until_ready: usize) -> DriverHandle {
            Arc::new(Self {
                polls_until_ready,
                polls: AtomicUsize::new(0),
            })
        }

        fn text(&self) -> &'static str {
            if self.polls.fetch_add(1, Ordering::SeqCst) >= self.polls_until_ready {
                "ready"
            } else {
                "loading"
            }
        }
    }

    #[async_trait]
    impl Driver for SettlingDriver {
        async fn goto(&self, _url: &str) -> Result<()> {
            Ok(())
        }
        async fn current_url(&self) -> Result<String> {
            Ok("https://store.test/".to_string())
        }
        async fn fill(&self, _selector: &str, _value: &str) -> Result<()> {
            Ok(())
        }
        async fn click(&self, _selector: &str) -> Result<()> {
            Ok(())
        }
        async fn inner_text(&self, _selector: &str) -> Result<Option<String>> {
            Ok(Some(self.text().to_string()))
        }
        async fn all_inner_texts(&self, _selector: &str) -> Result<Vec<String>> {
            Ok(vec![self.text().to_string()])
        }
        async fn count(&self, _selector: &str) -> Result<usize> {
            Ok(1)
        }
        async fn is_visible(&self, _selector: &str) -> Result<bool> {
            Ok(true)
        }
        async fn close(&self) -> Result<()> {
            Ok(())
        }
    }

    fn element(driver: &DriverHandle) -> Element {
        Element::new(driver.clone(), "#status")
    }

    #[test]
    fn expectation_defaults() {
        assert_eq!(DEFAULT_EXPECT_TIMEOUT, Duration::from_secs(5));
        assert_eq!(DEFAULT_POLL_INTERVAL, Duration::from_millis(100));
    }

    #[tokio::test]
    async fn retries_until_observation_settles() {
        let driver = SettlingDriver::settled_after(3);
        expect(element(&driver))
            .with_poll_interval(Duration::from_millis(1))
            .to_have_text("ready")
            .await
            .expect("text should settle within the timeout");
    }

    #[tokio::test]
    async fn timeout_reports_expected_and_actual() {
        let driver = SettlingDriver::settled_after(usize::MAX);
        let err = expect(element(&driver))
            .with_poll_interval(Duration::from_millis(1))
            .with_timeout(Duration::from_millis(20))
            .to_have_text("ready")
            .await
            .unwrap_err();
        match err {
            Error::Assertion {
                selector,
                expected,
                actual,
            } => {
                assert_eq!(selector, "#status");
                assert_eq!(expected, "text 'ready'");
                assert_eq!(actual, "text 'loading'");
            }
            other => panic!("expected Assertion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn negation_inverts_the_check() {
        let driver = SettlingDriver::settled_after(2);
        expect(element(&driver))
            .not()
            .with_poll_interval(Duration::from_millis(1))
            .to_have_text("loading")
            .await
            .expect("text should stop being 'loading'");
    }

    #[tokio::test]
    async fn url_timeout_is_a_navigation_error() {
        let driver = SettlingDriver::settled_after(0);
        let err = expect_page(&driver)
            .with_timeout(Duration::from_millis(10))
            .to_have_url("https://store.test/inventory.html")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Navigation { expected, actual }
                if expected == "https://store.test/inventory.html"
                    && actual == "https://store.test/"
        ));
    }
}
