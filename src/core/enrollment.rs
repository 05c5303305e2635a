use crate::core::catalog::Catalog;
use crate::core::pricing::compute_quote;
use crate::domain::model::{Quote, Receipt};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::{Result, StorefrontError};
use tokio::sync::Mutex;

pub const SELECTION_KEY: &str = "selectedCourses";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyCheckout {
    Reject,
    /// Confirm with a zero total, as the mobile app did.
    Allow,
}

/// Owns the persisted course selection and prices it.
///
/// Every mutation is one read-modify-write of [`SELECTION_KEY`] taken under
/// `write_lock`, so concurrent callers sharing an engine cannot lose updates
/// or introduce duplicates.
pub struct EnrollmentEngine<S: KeyValueStore> {
    store: S,
    catalog: Catalog,
    empty_checkout: EmptyCheckout,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> EnrollmentEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_policy(store, EmptyCheckout::Reject)
    }

    pub fn with_policy(store: S, empty_checkout: EmptyCheckout) -> Self {
        Self {
            store,
            catalog: Catalog,
            empty_checkout,
            write_lock: Mutex::new(()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current selection in insertion order; an absent key reads as empty.
    pub async fn selection(&self) -> Result<Vec<String>> {
        match self.store.get(SELECTION_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, selection: &[String]) -> Result<()> {
        let raw = serde_json::to_string(selection)?;
        self.store.set(SELECTION_KEY, &raw).await
    }

    pub async fn is_enrolled(&self, name: &str) -> Result<bool> {
        Ok(self.selection().await?.iter().any(|c| c == name))
    }

    /// Adds `name` if absent, removes it if present. Returns the new membership.
    pub async fn toggle_enrollment(&self, name: &str) -> Result<bool> {
        self.catalog.find(name)?;

        let _guard = self.write_lock.lock().await;
        let mut selection = self.selection().await?;

        let enrolled = match selection.iter().position(|c| c == name) {
            Some(index) => {
                selection.remove(index);
                false
            }
            None => {
                selection.push(name.to_string());
                true
            }
        };

        self.save(&selection).await?;
        tracing::debug!(course = name, enrolled, count = selection.len(), "Toggled enrollment");
        Ok(enrolled)
    }

    /// Filters `name` out and writes the result back, even when nothing changed.
    pub async fn remove_course(&self, name: &str) -> Result<Vec<String>> {
        let _guard = self.write_lock.lock().await;
        let mut selection = self.selection().await?;
        selection.retain(|c| c != name);

        self.save(&selection).await?;
        tracing::debug!(course = name, count = selection.len(), "Removed course from selection");
        Ok(selection)
    }

    pub fn quote_for(&self, selection: &[String]) -> Result<Quote> {
        compute_quote(&self.catalog, selection)
    }

    pub async fn current_quote(&self) -> Result<Quote> {
        let selection = self.selection().await?;
        self.quote_for(&selection)
    }

    /// Prices the persisted selection, issues a receipt and clears the selection.
    ///
    /// The selection is only cleared once the quote succeeded, so a failed
    /// checkout leaves the stored courses in place.
    pub async fn checkout(&self) -> Result<Receipt> {
        let _guard = self.write_lock.lock().await;
        let selection = self.selection().await?;

        if selection.is_empty() && self.empty_checkout == EmptyCheckout::Reject {
            return Err(StorefrontError::EmptySelection);
        }

        let quote = self.quote_for(&selection)?;
        self.store.remove(SELECTION_KEY).await?;

        tracing::info!(
            courses = selection.len(),
            total = %quote.total,
            "Checkout processed"
        );

        Ok(Receipt {
            courses: selection,
            quote,
            issued_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStore;
    use crate::domain::model::Money;

    #[tokio::test]
    async fn test_toggle_adds_then_removes() {
        let engine = EnrollmentEngine::new(MemoryStore::new());

        assert!(!engine.is_enrolled("Sewing").await.unwrap());
        assert!(engine.toggle_enrollment("Sewing").await.unwrap());
        assert!(engine.is_enrolled("Sewing").await.unwrap());
        assert!(!engine.toggle_enrollment("Sewing").await.unwrap());
        assert!(engine.selection().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_appends_in_order() {
        let engine = EnrollmentEngine::new(MemoryStore::new());
        for course in ["Cooking", "First Aid", "Landscaping"] {
            engine.toggle_enrollment(course).await.unwrap();
        }
        engine.toggle_enrollment("First Aid").await.unwrap();

        assert_eq!(engine.selection().await.unwrap(), ["Cooking", "Landscaping"]);
    }

    #[tokio::test]
    async fn test_toggle_rejects_unknown_course() {
        let store = MemoryStore::new();
        let engine = EnrollmentEngine::new(store.clone());

        let result = engine.toggle_enrollment("Pottery").await;
        assert!(matches!(result, Err(StorefrontError::UnknownCourse { .. })));
        assert_eq!(store.get(SELECTION_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let engine = EnrollmentEngine::new(MemoryStore::new());
        engine.toggle_enrollment("Cooking").await.unwrap();
        engine.toggle_enrollment("Sewing").await.unwrap();

        let once = engine.remove_course("Cooking").await.unwrap();
        let twice = engine.remove_course("Cooking").await.unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice, ["Sewing"]);
    }

    #[tokio::test]
    async fn test_checkout_clears_selection() {
        let engine = EnrollmentEngine::new(MemoryStore::new());
        engine.toggle_enrollment("First Aid").await.unwrap();
        engine.toggle_enrollment("Sewing").await.unwrap();

        let receipt = engine.checkout().await.unwrap();
        assert_eq!(receipt.courses, ["First Aid", "Sewing"]);
        assert_eq!(receipt.total(), Money::from_rand(2850));

        assert!(engine.selection().await.unwrap().is_empty());
        assert_eq!(engine.current_quote().await.unwrap(), Quote::empty());
    }

    #[tokio::test]
    async fn test_empty_checkout_policy() {
        let strict = EnrollmentEngine::new(MemoryStore::new());
        assert!(matches!(
            strict.checkout().await,
            Err(StorefrontError::EmptySelection)
        ));

        let lenient = EnrollmentEngine::with_policy(MemoryStore::new(), EmptyCheckout::Allow);
        let receipt = lenient.checkout().await.unwrap();
        assert!(receipt.courses.is_empty());
        assert_eq!(receipt.total(), Money::ZERO);
    }

    #[tokio::test]
    async fn test_checkout_keeps_selection_when_pricing_fails() {
        let store = MemoryStore::new();
        store
            .set(SELECTION_KEY, r#"["Cooking","Pottery"]"#)
            .await
            .unwrap();
        let engine = EnrollmentEngine::new(store);

        assert!(matches!(
            engine.checkout().await,
            Err(StorefrontError::UnknownCourse { .. })
        ));
        assert_eq!(engine.selection().await.unwrap(), ["Cooking", "Pottery"]);
    }
}
