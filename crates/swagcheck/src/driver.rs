// Driver - the browser-automation engine contract
//
// The engine itself (process lifecycle, DOM, transport) is an external
// collaborator. This trait is the full set of primitives the verification
// flows consume; everything above it is engine-agnostic.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Primitives a browser-automation engine must provide.
///
/// Every operation is awaited and resolves once the engine reports the
/// action settled (navigation finished, element located, text stable).
/// Implementations back one exclusive browsing context: a scenario acquires
/// a driver at start and releases it with [`Driver::close`] at the end,
/// regardless of outcome.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigates the context to `url`.
    async fn goto(&self, url: &str) -> Result<()>;

    /// The location the context currently shows.
    async fn current_url(&self) -> Result<String>;

    /// Replaces the value of the element matching `selector`.
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Activates the element matching `selector`.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Visible text of the first element matching `selector`, or `None`
    /// when no such element is rendered at all.
    ///
    /// Absence is a first-class answer here: the cart badge contract is
    /// "not rendered", not "renders an empty string".
    async fn inner_text(&self, selector: &str) -> Result<Option<String>>;

    /// Visible text of every element matching `selector`, in document
    /// order.
    async fn all_inner_texts(&self, selector: &str) -> Result<Vec<String>>;

    /// Number of elements matching `selector`.
    async fn count(&self, selector: &str) -> Result<usize>;

    /// Whether the first element matching `selector` is rendered visible.
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Releases the browsing context. Further operations are invalid.
    async fn close(&self) -> Result<()>;
}

/// Shared handle to one scenario's browsing context.
pub type DriverHandle = Arc<dyn Driver>;

/// A lazy handle to the element(s) a selector describes.
///
/// Elements hold only the selector and a driver handle; nothing is queried
/// until an operation or an [`crate::expect`] assertion runs, so a handle
/// can be created before its element exists.
#[derive(Clone)]
pub struct Element {
    driver: DriverHandle,
    selector: String,
}

impl Element {
    pub(crate) fn new(driver: DriverHandle, selector: impl Into<String>) -> Self {
        Self {
            driver,
            selector: selector.into(),
        }
    }

    /// The selector string this handle queries.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub async fn click(&self) -> Result<()> {
        self.driver.click(&self.selector).await
    }

    pub async fn fill(&self, value: &str) -> Result<()> {
        self.driver.fill(&self.selector, value).await
    }

    /// Text of the first match, `None` when the element is absent.
    pub async fn inner_text(&self) -> Result<Option<String>> {
        self.driver.inner_text(&self.selector).await
    }

    /// Text of every match, in document order.
    pub async fn all_inner_texts(&self) -> Result<Vec<String>> {
        self.driver.all_inner_texts(&self.selector).await
    }

    pub async fn count(&self) -> Result<usize> {
        self.driver.count(&self.selector).await
    }

    pub async fn is_visible(&self) -> Result<bool> {
        self.driver.is_visible(&self.selector).await
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("selector", &self.selector)
            .finish()
    }
}
