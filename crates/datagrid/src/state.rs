use crate::filter::{is_active, FilterValues};
use crate::paginate::PageSize;
use crate::sort::{toggle_sort, SortConfig};
use std::fmt;
use std::sync::Arc;

/// Callback invoked when a controlled piece of state wants to change
pub type ChangeHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// One piece of view state, either owned by the engine or delegated to the
/// host.
///
/// Resolved once at construction: `Owned` mutates in place, `Controlled`
/// never mutates. Every controlled write is forwarded to the host's
/// callback, and the host supplies the next value on the next derivation.
pub enum StateBinding<T> {
    Owned(T),
    Controlled { value: T, on_change: ChangeHandler<T> },
}

impl<T> StateBinding<T> {
    pub fn owned(value: T) -> Self {
        StateBinding::Owned(value)
    }

    pub fn controlled(value: T, on_change: impl Fn(&T) + Send + Sync + 'static) -> Self {
        StateBinding::Controlled {
            value,
            on_change: Arc::new(on_change),
        }
    }

    pub fn get(&self) -> &T {
        match self {
            StateBinding::Owned(value) => value,
            StateBinding::Controlled { value, .. } => value,
        }
    }

    /// Write the piece of state: in place when owned, through the host
    /// callback when controlled
    pub fn set(&mut self, next: T) {
        match self {
            StateBinding::Owned(value) => *value = next,
            StateBinding::Controlled { on_change, .. } => on_change(&next),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StateBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateBinding::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            StateBinding::Controlled { value, .. } => {
                f.debug_struct("Controlled").field("value", value).finish_non_exhaustive()
            }
        }
    }
}

/// Complete view state of a table
#[derive(Debug)]
pub struct TableState {
    pub filters: StateBinding<FilterValues>,
    pub sort: StateBinding<Option<SortConfig>>,
    pub page: StateBinding<usize>,
    pub page_size: StateBinding<PageSize>,
}

impl TableState {
    /// Fully engine-owned state with the given initial page size
    pub fn owned(page_size: PageSize) -> Self {
        Self {
            filters: StateBinding::owned(FilterValues::new()),
            sort: StateBinding::owned(None),
            page: StateBinding::owned(0),
            page_size: StateBinding::owned(page_size),
        }
    }

    /// Set one column filter. Blank values clear the entry. Any filter
    /// change moves back to the first page, through the host callback when
    /// the page is controlled.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        let mut next = self.filters.get().clone();
        if is_active(value) {
            next.insert(key.to_string(), value.to_string());
        } else {
            next.remove(key);
        }
        self.filters.set(next);
        self.page.set(0);
    }

    /// Drop every filter and move back to the first page
    pub fn clear_filters(&mut self) {
        self.filters.set(FilterValues::new());
        self.page.set(0);
    }

    /// External filter-changed signal for hosts that own the filter values
    /// themselves; only resets the page
    pub fn notify_filters_changed(&mut self) {
        self.page.set(0);
    }

    /// Header click on a column
    pub fn toggle_sort(&mut self, key: &str) {
        let next = toggle_sort(self.sort.get().as_ref(), key);
        self.sort.set(next);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.set(page);
    }

    /// A new page size starts over from the first page
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size.set(size);
        self.page.set(0);
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::owned(PageSize::Limited(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;
    use std::sync::Mutex;

    #[test]
    fn test_owned_filter_change_resets_page() {
        let mut state = TableState::default();
        state.set_page(3);
        assert_eq!(*state.page.get(), 3);

        state.set_filter("brand", "eagle");
        assert_eq!(*state.page.get(), 0);
        assert_eq!(state.filters.get().get("brand").map(String::as_str), Some("eagle"));
    }

    #[test]
    fn test_blank_filter_clears_entry() {
        let mut state = TableState::default();
        state.set_filter("brand", "eagle");
        state.set_filter("brand", "   ");
        assert!(state.filters.get().is_empty());
    }

    #[test]
    fn test_controlled_page_gets_callback_instead_of_mutation() {
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut state = TableState::default();
        state.page = StateBinding::controlled(5, move |page: &usize| {
            sink.lock().unwrap().push(*page);
        });

        state.set_filter("brand", "eagle");
        // The controlled value is untouched; the host was asked for page 0.
        assert_eq!(*state.page.get(), 5);
        assert_eq!(*seen.lock().unwrap(), vec![0]);

        state.notify_filters_changed();
        assert_eq!(*seen.lock().unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_toggle_sort_through_state() {
        let mut state = TableState::default();
        state.toggle_sort("v");
        assert_eq!(
            state.sort.get().as_ref().map(|c| c.direction),
            Some(SortDirection::Ascending)
        );
        state.toggle_sort("v");
        state.toggle_sort("v");
        assert!(state.sort.get().is_none());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = TableState::default();
        state.set_page(2);
        state.set_page_size(PageSize::Limited(50));
        assert_eq!(*state.page.get(), 0);
        assert_eq!(*state.page_size.get(), PageSize::Limited(50));
    }
}
