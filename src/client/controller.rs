//! List-view controller
//!
//! Sits between raw UI input and the query engine. Responsibilities:
//!
//! - **Debounce**: keystrokes in the search box are coalesced; a query fires
//!   only after the input has been quiet for the configured period, and every
//!   keystroke inside the window restarts the clock.
//! - **Filter-change page reset**: whenever the effective search text or the
//!   sort changes, the next query goes back to page 1 regardless of what the
//!   pager showed.
//! - **Sort toggling**: clicking the active column flips the direction;
//!   clicking a new column starts ascending.
//! - **Stale-response guard**: every dispatched fetch carries a sequence
//!   number; a response whose sequence is no longer the newest is dropped, so
//!   a slow early request can never overwrite fresher state.
//! - **Failure handling**: a failed fetch keeps the last loaded page on
//!   screen and records the error for a toast; nothing is fatal.
//!
//! All methods must be called from within a tokio runtime; debounce and
//! fetches run as spawned tasks.

use crate::core::error::AdminResult;
use crate::core::query::{ListQuery, PageResponse, SortSpec};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

/// The data source a list view fetches pages from
///
/// Implemented by the services ([`crate::services::CatalogService`] products,
/// [`crate::services::OrderService`] orders); a remote client would implement
/// it over HTTP and must surface failures as errors, never panics.
#[async_trait]
pub trait ListBackend<T>: Send + Sync + 'static {
    async fn fetch(&self, query: ListQuery) -> AdminResult<PageResponse<T>>;
}

/// Where the view currently is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing fetched yet
    Idle,
    /// A fetch is in flight; `items` still hold the previous page
    Loading,
    /// `items` are the page for the current query state
    Loaded,
    /// The last fetch failed; `items` hold the last loaded page
    Failed,
}

/// What a list view renders
#[derive(Debug, Clone)]
pub struct ViewState<T> {
    pub phase: ViewPhase,
    pub items: Vec<T>,
    /// Post-search total from the last successful fetch
    pub total_count: usize,
    /// Page the items belong to
    pub page: usize,
    /// Message for a toast when `phase` is `Failed`
    pub error: Option<String>,
}

impl<T> ViewState<T> {
    fn idle() -> Self {
        ViewState {
            phase: ViewPhase::Idle,
            items: Vec::new(),
            total_count: 0,
            page: 1,
            error: None,
        }
    }
}

/// Query state the controller derives fetches from
#[derive(Debug, Clone)]
struct QueryState {
    /// Effective (debounced) search text
    search: String,
    sort: Option<SortSpec>,
    page: usize,
    per_page: usize,
}

impl QueryState {
    fn to_query(&self) -> ListQuery {
        ListQuery {
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            sort: self.sort.clone(),
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Controller for one list view (products, orders)
pub struct ListController<T> {
    backend: Arc<dyn ListBackend<T>>,
    state: Arc<Mutex<QueryState>>,
    view: watch::Sender<ViewState<T>>,
    debounce: Duration,
    /// Bumped on every keystroke; a sleeper only commits if still current
    input_gen: Arc<AtomicU64>,
    /// Bumped on every dispatch; a response only applies if still current
    fetch_seq: Arc<AtomicU64>,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        ListController {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
            view: self.view.clone(),
            debounce: self.debounce,
            input_gen: Arc::clone(&self.input_gen),
            fetch_seq: Arc::clone(&self.fetch_seq),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> ListController<T> {
    pub fn new(backend: Arc<dyn ListBackend<T>>, per_page: usize, debounce: Duration) -> Self {
        let (view, _) = watch::channel(ViewState::idle());
        ListController {
            backend,
            state: Arc::new(Mutex::new(QueryState {
                search: String::new(),
                sort: None,
                page: 1,
                per_page,
            })),
            view,
            debounce,
            input_gen: Arc::new(AtomicU64::new(0)),
            fetch_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Watch the view state; the receiver sees every render-worthy change
    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.view.subscribe()
    }

    /// The query the controller would dispatch right now
    pub fn current_query(&self) -> ListQuery {
        self.lock_state().to_query()
    }

    fn lock_state(&self) -> MutexGuard<'_, QueryState> {
        // A poisoned lock only means another task panicked mid-update;
        // the state itself is still a plain struct.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Feed one keystroke of raw search input
    ///
    /// Restarts the quiet-period clock; the effective search text changes
    /// only when the input stays stable for the whole period.
    pub fn search_input(&self, text: &str) {
        let my_gen = self.input_gen.fetch_add(1, Ordering::SeqCst) + 1;
        let this = self.clone();
        let text = text.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(this.debounce).await;
            if this.input_gen.load(Ordering::SeqCst) == my_gen {
                this.commit_search(text);
            }
        });
    }

    /// Apply search text immediately, bypassing the debounce
    ///
    /// Used when the text arrives already settled (e.g. a deep link).
    pub fn commit_search(&self, text: String) {
        {
            let mut state = self.lock_state();
            if state.search == text {
                return;
            }
            state.search = text;
            state.page = 1;
        }
        self.dispatch();
    }

    /// Handle a click on a sortable column header
    pub fn toggle_sort(&self, key: &str) {
        {
            let mut state = self.lock_state();
            state.sort = Some(match &state.sort {
                Some(current) if current.key == key => SortSpec {
                    key: current.key.clone(),
                    direction: current.direction.toggled(),
                },
                _ => SortSpec::ascending(key),
            });
            state.page = 1;
        }
        self.dispatch();
    }

    /// Jump to a page; does not touch search or sort
    pub fn set_page(&self, page: usize) {
        {
            let mut state = self.lock_state();
            let page = page.max(1);
            if state.page == page {
                return;
            }
            state.page = page;
        }
        self.dispatch();
    }

    /// Re-run the current query (initial load, after a mutation)
    pub fn refresh(&self) {
        self.dispatch();
    }

    /// Patch the currently rendered items in place
    ///
    /// The optimistic half of an optimistic update: callers apply the local
    /// patch, run the mutation, and either [`Self::refresh`] on success or
    /// patch back on failure.
    pub fn patch_items<F: FnOnce(&mut Vec<T>)>(&self, patch: F) {
        self.view.send_modify(|view| patch(&mut view.items));
    }

    fn dispatch(&self) {
        let query = self.current_query();
        let my_seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(seq = my_seq, page = query.page, "dispatching list query");

        self.view.send_modify(|view| {
            view.phase = ViewPhase::Loading;
            view.error = None;
        });

        let this = self.clone();
        tokio::spawn(async move {
            let result = this.backend.fetch(query).await;

            // The sequence check runs under the channel lock together with
            // the publish, so a stale response can never land after a newer
            // one has been applied.
            let mut stale = false;
            this.view.send_modify(|view| {
                if this.fetch_seq.load(Ordering::SeqCst) != my_seq {
                    stale = true;
                    return;
                }
                match result {
                    Ok(page) => {
                        view.phase = ViewPhase::Loaded;
                        view.items = page.items;
                        view.total_count = page.total_count;
                        view.page = page.pagination.page;
                        view.error = None;
                    }
                    Err(err) => {
                        warn!(seq = my_seq, error = %err, "list query failed");
                        view.phase = ViewPhase::Failed;
                        view.error = Some(err.to_string());
                        // items keep the last loaded page on purpose
                    }
                }
            });
            if stale {
                debug!(seq = my_seq, "discarding stale list response");
            }
        });
    }
}
