//! Background fetch runner
//!
//! Runs catalog requests on worker threads so the event loop never blocks,
//! and hands the outcomes back to the catalog state when polled.

use crate::error::CatalogError;
use crate::model::catalog::{ApiResponse, CatalogItem, Category};
use crate::model::catalog_state::CatalogState;
use crate::services::catalog_client::CatalogApi;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

type FetchResult<T> = Result<ApiResponse<Vec<T>>, CatalogError>;

/// A request running on a worker thread
struct PendingFetch<T> {
    receiver: Receiver<FetchResult<T>>,
    start_instant: Instant,
    label: String,
}

impl<T: Send + 'static> PendingFetch<T> {
    fn spawn<F>(label: String, request: F) -> Self
    where
        F: FnOnce() -> FetchResult<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver is gone when the request was superseded
            let _ = tx.send(request());
        });

        Self {
            receiver: rx,
            start_instant: Instant::now(),
            label,
        }
    }

    /// Non-blocking check for the outcome
    fn try_take(&self) -> Option<FetchResult<T>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                tracing::debug!(
                    elapsed_ms = self.start_instant.elapsed().as_millis() as u64,
                    "{} finished",
                    self.label
                );
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(CatalogError::Network(format!(
                "{} worker exited without a response",
                self.label
            )))),
        }
    }
}

/// Fetch runner for catalog requests
pub struct FetchRunner {
    client: Arc<dyn CatalogApi>,
    categories: Option<PendingFetch<Category>>,
    items: Option<PendingFetch<CatalogItem>>,
}

impl FetchRunner {
    pub fn new(client: Arc<dyn CatalogApi>) -> Self {
        Self {
            client,
            categories: None,
            items: None,
        }
    }

    /// Where the catalog comes from, for display
    pub fn source(&self) -> String {
        self.client.describe()
    }

    /// Start fetching the category list
    pub fn spawn_categories(&mut self) {
        let client = Arc::clone(&self.client);
        self.categories = Some(PendingFetch::spawn("categories request".to_string(), move || {
            client.get_all_transformation_catalog_categories()
        }));
    }

    /// Start fetching the items of a category
    ///
    /// A pending items request is replaced; its late answer is discarded.
    pub fn spawn_items(&mut self, category_id: String) {
        let client = Arc::clone(&self.client);
        let label = format!("items request for category {}", category_id);
        if self.items.is_some() {
            tracing::debug!("Superseding pending items request");
        }
        self.items = Some(PendingFetch::spawn(label, move || {
            client.get_all_items_in_category(&category_id)
        }));
    }

    pub fn is_busy(&self) -> bool {
        self.categories.is_some() || self.items.is_some()
    }

    /// Apply finished requests to the state, returns true if anything changed
    pub fn poll(&mut self, state: &mut CatalogState) -> bool {
        let mut had_updates = false;

        if let Some(result) = self.categories.as_ref().and_then(PendingFetch::try_take) {
            self.categories = None;
            state.apply_categories(result);
            had_updates = true;
        }

        if let Some(result) = self.items.as_ref().and_then(PendingFetch::try_take) {
            self.items = None;
            state.apply_items(result);
            had_updates = true;
        }

        had_updates
    }

    /// Forget any pending requests
    pub fn clear(&mut self) {
        self.categories = None;
        self.items = None;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory catalog that records every request it serves
    pub(crate) struct FakeCatalog {
        pub categories: ApiResponse<Vec<Category>>,
        pub items: ApiResponse<Vec<CatalogItem>>,
        pub item_requests: Mutex<Vec<String>>,
        pub fail: bool,
    }

    impl FakeCatalog {
        pub(crate) fn new(categories: Vec<Category>, items: Vec<CatalogItem>) -> Self {
            Self {
                categories: ApiResponse::ok(categories),
                items: ApiResponse::ok(items),
                item_requests: Mutex::new(Vec::new()),
                fail: false,
            }
        }
    }

    impl CatalogApi for FakeCatalog {
        fn get_all_transformation_catalog_categories(
            &self,
        ) -> crate::error::Result<ApiResponse<Vec<Category>>> {
            if self.fail {
                return Err(CatalogError::Network("unreachable".into()));
            }
            Ok(self.categories.clone())
        }

        fn get_all_items_in_category(
            &self,
            category_id: &str,
        ) -> crate::error::Result<ApiResponse<Vec<CatalogItem>>> {
            self.item_requests
                .lock()
                .unwrap()
                .push(category_id.to_string());
            if self.fail {
                return Err(CatalogError::Network("unreachable".into()));
            }
            Ok(self.items.clone())
        }

        fn describe(&self) -> String {
            "fake".to_string()
        }
    }

    pub(crate) fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: "filter".to_string(),
        }
    }

    /// Poll until the runner has nothing pending
    pub(crate) fn drain(runner: &mut FetchRunner, state: &mut CatalogState) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while runner.is_busy() && Instant::now() < deadline {
            runner.poll(state);
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_categories_fetch_applies_to_state() {
        let fake = Arc::new(FakeCatalog::new(
            vec![category("1", "Filter"), category("2", "Aggregate")],
            Vec::new(),
        ));
        let mut runner = FetchRunner::new(fake);
        let mut state = CatalogState::new();
        state.categories_loading = true;

        runner.spawn_categories();
        drain(&mut runner, &mut state);

        assert!(!runner.is_busy());
        assert_eq!(state.categories.len(), 2);
        assert!(!state.categories_loading);
    }

    #[test]
    fn test_items_fetch_uses_category_id() {
        let fake = Arc::new(FakeCatalog::new(vec![category("7", "Filter")], Vec::new()));
        let mut runner = FetchRunner::new(fake.clone());
        let mut state = CatalogState::new();

        runner.spawn_items("7".to_string());
        drain(&mut runner, &mut state);

        assert_eq!(*fake.item_requests.lock().unwrap(), vec!["7".to_string()]);
    }

    #[test]
    fn test_failed_fetch_keeps_state() {
        let mut fake = FakeCatalog::new(Vec::new(), Vec::new());
        fake.fail = true;
        let mut runner = FetchRunner::new(Arc::new(fake));
        let mut state = CatalogState::new();
        state.categories = vec![category("1", "Filter")];

        runner.spawn_categories();
        drain(&mut runner, &mut state);

        assert_eq!(state.categories.len(), 1);
    }

    #[test]
    fn test_clear_drops_pending() {
        let fake = Arc::new(FakeCatalog::new(Vec::new(), Vec::new()));
        let mut runner = FetchRunner::new(fake);
        runner.spawn_categories();
        runner.clear();
        assert!(!runner.is_busy());
    }
}
