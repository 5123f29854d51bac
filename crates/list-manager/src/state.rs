//! List State
//!
//! Items, the derived filtered view, pagination, the modal and the
//! in-flight bookkeeping of one list screen.

use std::collections::HashSet;

use crate::modal::ModalState;
use crate::pagination;
use crate::record::Record;
use crate::search;

/// What the table body should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    /// First load still pending
    Loading,
    /// Nothing on the server
    NoRecords,
    /// Items exist but none match the search
    NoResults,
    Rows,
}

#[derive(Debug, Clone)]
pub struct ListState<R: Record> {
    items: Vec<R>,
    /// Indices into `items`; always `search::filter(items, search_term)`
    filtered: Vec<usize>,
    search_term: String,
    page: usize,
    page_size: usize,
    loaded: bool,
    loading: bool,
    busy: bool,
    issued_seq: u64,
    applied_seq: u64,
    modal: ModalState<R>,
}

impl<R: Record> ListState<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            page: 1,
            page_size: page_size.max(1),
            loaded: false,
            loading: false,
            busy: false,
            issued_seq: 0,
            applied_seq: 0,
            modal: ModalState::Closed,
        }
    }

    // ========================
    // Read Access
    // ========================

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn filtered(&self) -> impl Iterator<Item = &R> + '_ {
        self.filtered.iter().map(move |&idx| &self.items[idx])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size)
    }

    /// Number of rows before the current page, for row ordinals
    pub fn page_offset(&self) -> usize {
        pagination::page_range(self.page, self.page_size, self.filtered.len()).start
    }

    /// Records on the current page
    pub fn page_items(&self) -> Vec<R> {
        let range = pagination::page_range(self.page, self.page_size, self.filtered.len());
        self.filtered[range].iter().map(|&idx| self.items[idx].clone()).collect()
    }

    pub fn find(&self, id: &R::Id) -> Option<&R> {
        self.items.iter().find(|item| &item.id() == id)
    }

    pub fn view_status(&self) -> ListView {
        if !self.loaded && self.loading {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::NoRecords
        } else if self.filtered.is_empty() {
            ListView::NoResults
        } else {
            ListView::Rows
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Soft-lock: a mutation is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn modal(&self) -> &ModalState<R> {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalState<R> {
        &mut self.modal
    }

    // ========================
    // Search & Paging
    // ========================

    pub fn search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.refilter();
        self.page = 1;
    }

    pub fn set_page(&mut self, requested: i64) {
        self.page = pagination::clamp_page(requested, self.total_pages());
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    // ========================
    // Item Mutation
    // ========================

    /// Replace all items, dropping later duplicates of an id.
    /// The current page is kept when still in range.
    pub fn replace_items(&mut self, items: Vec<R>) {
        let mut seen = HashSet::new();
        let before = items.len();
        let items: Vec<R> = items.into_iter().filter(|item| seen.insert(item.id())).collect();
        if items.len() != before {
            log::warn!("[ListState] dropped {} duplicate record(s)", before - items.len());
        }
        self.items = items;
        self.loaded = true;
        self.refilter();
    }

    /// Swap in an updated record by id. Returns false when absent.
    pub fn replace_record(&mut self, record: R) -> bool {
        let id = record.id();
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => {
                *slot = record;
                self.refilter();
                true
            }
            None => false,
        }
    }

    /// Remove exactly the record with `id`.
    pub fn remove(&mut self, id: &R::Id) -> bool {
        match self.items.iter().position(|item| &item.id() == id) {
            Some(pos) => {
                self.items.remove(pos);
                self.refilter();
                true
            }
            None => false,
        }
    }

    // ========================
    // Request Bookkeeping
    // ========================

    /// Issue the sequence number of a new load
    pub fn begin_load(&mut self) -> u64 {
        self.issued_seq += 1;
        self.loading = true;
        self.issued_seq
    }

    /// Apply a load response unless a newer one was already applied.
    pub fn finish_load(&mut self, seq: u64, items: Vec<R>) -> bool {
        self.settle(seq);
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.replace_items(items);
        true
    }

    /// A load failed; items stay as they are
    pub fn fail_load(&mut self, seq: u64) {
        self.settle(seq);
        if !self.loading && !self.loaded {
            // Nothing was ever shown; render the empty state instead of spinning
            self.loaded = true;
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    fn settle(&mut self, seq: u64) {
        if seq >= self.issued_seq {
            self.loading = false;
        }
    }

    fn refilter(&mut self) {
        self.filtered = search::filter(&self.items, &self.search_term);
        self.page = pagination::clamp_page(self.page as i64, self.total_pages());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        text: String,
    }

    impl Record for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.text.as_str()]
        }
    }

    fn rows(n: u32) -> Vec<Row> {
        (1..=n).map(|id| Row { id, text: format!("row {}", id) }).collect()
    }

    fn loaded(n: u32, page_size: usize) -> ListState<Row> {
        let mut state = ListState::new(page_size);
        let seq = state.begin_load();
        state.finish_load(seq, rows(n));
        state
    }

    #[test]
    fn test_pagination_scenario() {
        let mut state = loaded(23, 10);
        assert_eq!(state.total_pages(), 3);
        state.set_page(3);
        assert_eq!(state.page_items().len(), 3);
        assert_eq!(state.page_offset(), 20);
        assert_eq!(state.page_items()[0].id, 21);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = loaded(23, 10);
        state.set_page(0);
        assert_eq!(state.page(), 1);
        state.set_page(-3);
        assert_eq!(state.page(), 1);
        state.set_page(99);
        assert_eq!(state.page(), 3);
        state.set_page(3);
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_search_and_page_size_reset_page() {
        let mut state = loaded(23, 10);
        state.set_page(2);
        state.search("row");
        assert_eq!(state.page(), 1);

        state.set_page(3);
        state.set_page_size(5);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn test_filtered_is_pure_function_of_items_and_term() {
        let mut state = loaded(12, 5);
        state.search("row 1");
        let ids: Vec<u32> = state.filtered().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 10, 11, 12]);

        // Same term twice yields the same view
        state.search("row 1");
        let again: Vec<u32> = state.filtered().map(|r| r.id).collect();
        assert_eq!(ids, again);

        // Removing an item refreshes the filter without touching the term
        state.remove(&10);
        let ids: Vec<u32> = state.filtered().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 11, 12]);
        assert_eq!(state.search_term(), "row 1");
    }

    #[test]
    fn test_empty_list_shows_no_records() {
        let state = loaded(0, 10);
        assert_eq!(state.view_status(), ListView::NoRecords);
        assert_eq!(state.total_pages(), 1);
        assert!(state.page_items().is_empty());
    }

    #[test]
    fn test_no_results_keeps_items() {
        let mut state = loaded(4, 10);
        state.search("zzz");
        assert_eq!(state.view_status(), ListView::NoResults);
        assert_eq!(state.filtered_len(), 0);
        assert_eq!(state.items().len(), 4);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_loading_until_first_response() {
        let mut state: ListState<Row> = ListState::new(10);
        let seq = state.begin_load();
        assert_eq!(state.view_status(), ListView::Loading);
        state.fail_load(seq);
        assert_eq!(state.view_status(), ListView::NoRecords);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state: ListState<Row> = ListState::new(10);
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, rows(2)));
        assert!(!state.finish_load(first, rows(5)));
        assert_eq!(state.items().len(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_in_order_responses_both_apply() {
        let mut state: ListState<Row> = ListState::new(10);
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(state.finish_load(first, rows(5)));
        assert!(state.is_loading());
        assert!(state.finish_load(second, rows(2)));
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let mut state: ListState<Row> = ListState::new(10);
        state.replace_items(vec![
            Row { id: 1, text: "a".into() },
            Row { id: 1, text: "b".into() },
            Row { id: 2, text: "c".into() },
        ]);
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.items()[0].text, "a");
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut state = loaded(3, 10);
        assert!(state.remove(&2));
        assert!(!state.remove(&2));
        let ids: Vec<u32> = state.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_removal_on_last_page_clamps() {
        let mut state = loaded(11, 10);
        state.set_page(2);
        state.remove(&11);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_replace_record_refilters() {
        let mut state = loaded(3, 10);
        state.search("row 2");
        assert_eq!(state.filtered_len(), 1);
        assert!(state.replace_record(Row { id: 2, text: "changed".into() }));
        assert_eq!(state.filtered_len(), 0);
        assert_eq!(state.find(&2).map(|r| r.text.as_str()), Some("changed"));
    }
}
