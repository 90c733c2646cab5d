use crate::config;
use leptos::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Status,
    Branch,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Status, SortKey::Branch];

    pub fn wire_name(&self) -> &'static str {
        match self {
            SortKey::Name => "fullName",
            SortKey::Status => "status",
            SortKey::Branch => "branch",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Status => "Status",
            SortKey::Branch => "Branch",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.wire_name() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn wire_value(&self) -> i8 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(SortOrder::Asc),
            "-1" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Twenty, PageSize::Fifty, PageSize::Hundred];

    pub fn get(&self) -> u32 {
        match self {
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == value)
    }
}

/// Canonical parameters of one server-side listing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub page: u32,
    pub page_size: PageSize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl ListQuery {
    /// 1-based serial number of the row at `index` on the current page.
    pub fn serial_number(&self, index: usize) -> u64 {
        (u64::from(self.page.max(1)) - 1) * u64::from(self.page_size.get()) + index as u64 + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Committed query plus the search text that is still waiting for its
/// debounce to elapse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQueryState {
    query: ListQuery,
    pending_search: String,
    search_generation: u64,
}

impl ListQueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn pending_search(&self) -> &str {
        &self.pending_search
    }

    /// Records a keystroke. Every ticket issued earlier becomes stale.
    pub fn set_search_input(&mut self, text: impl Into<String>) -> SearchTicket {
        self.pending_search = text.into();
        self.search_generation += 1;
        SearchTicket(self.search_generation)
    }

    /// Applies the pending search if `ticket` is still the latest one.
    /// Returns whether the committed query changed.
    pub fn commit_search(&mut self, ticket: SearchTicket) -> bool {
        if ticket.0 != self.search_generation {
            return false;
        }
        if self.pending_search == self.query.search_text {
            return false;
        }
        self.query.search_text = self.pending_search.clone();
        self.query.page = 1;
        true
    }

    pub fn set_sort_key(&mut self, key: SortKey) -> bool {
        if self.query.sort_key == key {
            return false;
        }
        self.query.sort_key = key;
        self.query.page = 1;
        true
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> bool {
        if self.query.sort_order == order {
            return false;
        }
        self.query.sort_order = order;
        self.query.page = 1;
        true
    }

    pub fn set_page_size(&mut self, size: PageSize) -> bool {
        if self.query.page_size == size {
            return false;
        }
        self.query.page_size = size;
        self.query.page = 1;
        true
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if self.query.page == page {
            return false;
        }
        self.query.page = page;
        true
    }

    pub fn reset_page(&mut self) -> bool {
        self.set_page(1)
    }

    /// Moves back to page 1 once the server reports fewer pages than the
    /// current one.
    pub fn clamp_page(&mut self, total_pages: u32) -> bool {
        if self.query.page > total_pages.max(1) {
            self.query.page = 1;
            true
        } else {
            false
        }
    }
}

/// Reactive wrapper around [`ListQueryState`] shared by the list views.
#[derive(Clone, Copy)]
pub struct ListQueryController {
    state: RwSignal<ListQueryState>,
    query: Memo<ListQuery>,
    debounce: StoredValue<Duration>,
}

pub fn use_list_query() -> ListQueryController {
    create_list_query(config::current().search_debounce())
}

pub fn create_list_query(debounce: Duration) -> ListQueryController {
    let state = create_rw_signal(ListQueryState::new());
    let query = create_memo(move |_| state.with(|s| s.query().clone()));
    ListQueryController {
        state,
        query,
        debounce: store_value(debounce),
    }
}

impl ListQueryController {
    pub fn query(&self) -> Memo<ListQuery> {
        self.query
    }

    pub fn snapshot(&self) -> ListQuery {
        self.state.with_untracked(|s| s.query().clone())
    }

    pub fn pending_search(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pending_search().to_string()))
    }

    pub fn on_search_input(&self, text: String) {
        self.schedule_search(text, || true);
    }

    /// Debounces `text`; when the timer fires the search is committed only
    /// if no newer keystroke arrived and `guard` allows it.
    pub fn schedule_search(&self, text: String, guard: impl FnOnce() -> bool + 'static) {
        let state = self.state;
        let Some(ticket) = state.try_update(|s| s.set_search_input(text)) else {
            return;
        };
        let delay = self.debounce.get_value();
        let commit = move || {
            let is_latest = state.with_untracked(|s| s.search_generation == ticket.0);
            if is_latest && guard() {
                state.update(|s| {
                    s.commit_search(ticket);
                });
            }
        };
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::future::TimeoutFuture::new(millis).await;
            commit();
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = delay;
            commit();
        }
    }

    pub fn set_sort_key(&self, key: SortKey) {
        self.state.update(|s| {
            s.set_sort_key(key);
        });
    }

    pub fn set_sort_order(&self, order: SortOrder) {
        self.state.update(|s| {
            s.set_sort_order(order);
        });
    }

    pub fn set_page_size(&self, size: PageSize) {
        self.state.update(|s| {
            s.set_page_size(size);
        });
    }

    pub fn set_page(&self, page: u32) {
        self.state.update(|s| {
            s.set_page(page);
        });
    }

    pub fn reset_page(&self) {
        self.state.update(|s| {
            s.reset_page();
        });
    }

    pub fn clamp_page(&self, total_pages: u32) {
        let needs_clamp = self
            .state
            .with_untracked(|s| s.query().page > total_pages.max(1));
        if needs_clamp {
            self.state.update(|s| {
                s.clamp_page(total_pages);
            });
        }
    }
}
