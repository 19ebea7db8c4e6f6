use async_trait::async_trait;
use rig_domain::part::Part;
use std::fmt::Debug;
use std::sync::Arc;

/// Where the catalog comes from.
///
/// `fetch` is infallible by contract: implementations swallow and log their own
/// failures and hand back an empty list instead.
#[async_trait]
pub trait PartSource: Debug + Send + Sync {
    /// Returns the parts of `category`, or every part when `category` is `None`.
    async fn fetch(&self, category: Option<&str>) -> Vec<Part>;
}

#[async_trait]
impl<T: PartSource + ?Sized> PartSource for Arc<T> {
    async fn fetch(&self, category: Option<&str>) -> Vec<Part> {
        (**self).fetch(category).await
    }
}

/// In-memory catalog for tests and offline demos.
///
/// Applies the same exact category match the remote API performs.
#[derive(Debug, Clone, Default)]
pub struct StaticPartSource {
    parts: Vec<Part>,
}

impl StaticPartSource {
    #[must_use]
    pub const fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }
}

impl FromIterator<Part> for StaticPartSource {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl PartSource for StaticPartSource {
    async fn fetch(&self, category: Option<&str>) -> Vec<Part> {
        self.parts
            .iter()
            .filter(|part| category.is_none_or(|c| part.category == c))
            .cloned()
            .collect()
    }
}
