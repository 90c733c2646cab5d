use crate::{
    api::ApiError,
    state::{notifications::use_notifications, refetch::use_refetch_bus},
};
use async_trait::async_trait;
use leptos::*;
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Debug, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub total_count: u64,
    pub total_pages: u32,
}

impl<T> ListPage<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
            total_pages: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub rows: Vec<T>,
    pub total_count: u64,
    pub total_pages: u32,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
            total_pages: 0,
            is_loading: false,
            error: None,
        }
    }
}

/// A listing endpoint addressed by a query descriptor `Q`.
#[async_trait(?Send)]
pub trait ListSource<Q> {
    type Row;

    async fn fetch_page(&self, query: &Q) -> Result<ListPage<Self::Row>, ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Applied,
    Failed(ApiError),
    Stale,
}

struct FetcherInner<T> {
    state: FetchState<T>,
    generation: u64,
}

/// Applies only the result of the most recently issued fetch. Older
/// responses still complete but are dropped on arrival.
pub struct ListFetcher<T> {
    inner: Rc<RefCell<FetcherInner<T>>>,
}

impl<T> Clone for ListFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for ListFetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListFetcher<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(FetcherInner {
                state: FetchState::default(),
                generation: 0,
            })),
        }
    }

    pub fn begin(&self) -> FetchTicket {
        let mut inner = self.inner.borrow_mut();
        inner.generation += 1;
        inner.state.is_loading = true;
        FetchTicket(inner.generation)
    }

    pub fn finish(&self, ticket: FetchTicket, result: Result<ListPage<T>, ApiError>) -> FetchOutcome {
        let mut inner = self.inner.borrow_mut();
        if ticket.0 != inner.generation {
            log::debug!(
                "discarding stale list response (generation {} < {})",
                ticket.0,
                inner.generation
            );
            return FetchOutcome::Stale;
        }
        inner.state.is_loading = false;
        match result {
            Ok(page) => {
                inner.state.rows = page.rows;
                inner.state.total_count = page.total_count;
                inner.state.total_pages = page.total_pages;
                inner.state.error = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                inner.state.error = Some(err.clone());
                FetchOutcome::Failed(err)
            }
        }
    }

    pub async fn fetch<Q, S>(&self, source: &S, query: &Q) -> FetchOutcome
    where
        S: ListSource<Q, Row = T> + ?Sized,
    {
        let ticket = self.begin();
        let result = source.fetch_page(query).await;
        self.finish(ticket, result)
    }
}

impl<T: Clone> ListFetcher<T> {
    pub fn snapshot(&self) -> FetchState<T> {
        self.inner.borrow().state.clone()
    }
}

/// Refetches whenever `query` changes or the refetch bus fires, mirroring
/// the fetcher into a signal. Failures raise an error toast and keep the
/// rows already on screen.
pub fn use_list_fetch<Q, S>(source: S, query: Signal<Q>) -> RwSignal<FetchState<S::Row>>
where
    Q: Clone + 'static,
    S: ListSource<Q> + Clone + 'static,
    S::Row: Clone + 'static,
{
    let fetcher = ListFetcher::<S::Row>::new();
    let state = create_rw_signal(FetchState::default());
    let refetch = use_refetch_bus();
    let toasts = use_notifications();

    create_effect(move |_| {
        let query = query.get();
        refetch.track();
        let fetcher = fetcher.clone();
        let source = source.clone();
        let ticket = fetcher.begin();
        state.set(fetcher.snapshot());
        spawn_local(async move {
            let result = source.fetch_page(&query).await;
            match fetcher.finish(ticket, result) {
                FetchOutcome::Applied => state.set(fetcher.snapshot()),
                FetchOutcome::Failed(err) => {
                    state.set(fetcher.snapshot());
                    toasts.error(format!("Error fetching data: {}", err));
                }
                FetchOutcome::Stale => {}
            }
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{channel::oneshot, executor::block_on, future::join};

    /// Hands out one pre-registered response channel per call, in call order.
    struct ScriptedSource {
        pending: RefCell<Vec<oneshot::Receiver<Result<ListPage<&'static str>, ApiError>>>>,
    }

    #[async_trait(?Send)]
    impl ListSource<u32> for ScriptedSource {
        type Row = &'static str;

        async fn fetch_page(&self, _query: &u32) -> Result<ListPage<&'static str>, ApiError> {
            let rx = self.pending.borrow_mut().remove(0);
            rx.await
                .unwrap_or_else(|_| Err(ApiError::unknown("channel closed")))
        }
    }

    fn page(rows: Vec<&'static str>) -> ListPage<&'static str> {
        ListPage {
            total_count: rows.len() as u64,
            total_pages: 1,
            rows,
        }
    }

    #[test]
    fn later_fetch_wins_when_first_resolves_last() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let source = ScriptedSource {
            pending: RefCell::new(vec![first_rx, second_rx]),
        };
        let fetcher = ListFetcher::new();

        let first = fetcher.fetch(&source, &1);
        let second = async {
            // second resolves first, then the slow first response lands
            let _ = second_tx.send(Ok(page(vec!["second"])));
            let outcome = fetcher.fetch(&source, &2).await;
            let _ = first_tx.send(Ok(page(vec!["first"])));
            outcome
        };
        let (first_outcome, second_outcome) = block_on(join(first, second));

        assert_eq!(second_outcome, FetchOutcome::Applied);
        assert_eq!(first_outcome, FetchOutcome::Stale);
        let snapshot = fetcher.snapshot();
        assert_eq!(snapshot.rows, vec!["second"]);
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let fetcher = ListFetcher::new();
        let ticket = fetcher.begin();
        fetcher.finish(ticket, Ok(page(vec!["a", "b"])));

        let ticket = fetcher.begin();
        assert!(fetcher.snapshot().is_loading);
        let outcome = fetcher.finish(ticket, Err(ApiError::request_failed("offline")));
        assert_eq!(outcome, FetchOutcome::Failed(ApiError::request_failed("offline")));

        let snapshot = fetcher.snapshot();
        assert_eq!(snapshot.rows, vec!["a", "b"]);
        assert_eq!(snapshot.error.map(|e| e.code), Some("REQUEST_FAILED".to_string()));
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn success_clears_previous_error() {
        let fetcher = ListFetcher::new();
        let ticket = fetcher.begin();
        fetcher.finish(ticket, Err(ApiError::unknown("bad json")));
        let ticket = fetcher.begin();
        fetcher.finish(ticket, Ok(page(vec![])));
        let snapshot = fetcher.snapshot();
        assert!(snapshot.error.is_none());
        assert!(snapshot.rows.is_empty());
    }

    #[test]
    fn stale_ticket_does_not_touch_loading_flag() {
        let fetcher: ListFetcher<&'static str> = ListFetcher::new();
        let old = fetcher.begin();
        let _current = fetcher.begin();
        assert_eq!(fetcher.finish(old, Ok(page(vec!["old"]))), FetchOutcome::Stale);
        let snapshot = fetcher.snapshot();
        assert!(snapshot.is_loading);
        assert!(snapshot.rows.is_empty());
    }
}
