//! List view state machine
//!
//! Holds {collection, sort, search, page}. Every transition says what the
//! view has to do next; rows are derived on each read and never stored.

use crate::api::{ApiError, ApiResult};
use crate::domain::{Listable, RecordId};

use super::actions::MutationError;

use super::pipeline::{filter_records, page_count, paginate, sort_records, SortSpec};

/// What the view must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    /// Issue a fresh `list()` call and feed the result to `apply_fetch`
    Fetch,
    /// Inputs changed locally; re-render only
    Render,
}

#[derive(Debug, Clone)]
pub struct ListState<T: Listable> {
    collection: Vec<T>,
    sort: SortSpec<T::Sort>,
    search: String,
    page: usize,
    page_size: usize,
    loading: bool,
    deleting: Option<RecordId>,
    error: Option<String>,
}

impl<T: Listable> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            collection: Vec::new(),
            sort: SortSpec::ascending(T::DEFAULT_SORT),
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            loading: false,
            deleting: None,
            error: None,
        }
    }

    pub fn mount(&mut self) -> ListCommand {
        self.loading = true;
        ListCommand::Fetch
    }

    /// Same column flips direction, another column starts ascending.
    /// Search term and page are left alone.
    pub fn toggle_sort(&mut self, field: T::Sort) -> ListCommand {
        self.sort = self.sort.toggled(field);
        log::debug!("{} list sorted by {:?}", T::RESOURCE, self.sort);
        self.loading = true;
        ListCommand::Fetch
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> ListCommand {
        self.search = term.into();
        self.page = 1;
        ListCommand::Render
    }

    pub fn go_to_page(&mut self, page: usize) -> ListCommand {
        self.page = page.clamp(1, self.page_count().max(1));
        ListCommand::Render
    }

    /// Replace the collection wholesale on success; keep it on failure
    pub fn apply_fetch(&mut self, result: ApiResult<Vec<T>>) {
        self.loading = false;
        match result {
            Ok(records) => {
                log::debug!("{} list loaded {} records", T::RESOURCE, records.len());
                self.collection = records;
                self.error = None;
            }
            Err(err) => {
                log::error!("failed to load {} list: {}", T::RESOURCE, err);
                self.error = Some(err.to_string());
            }
        }
    }

    /// A failed delete leaves the collection untouched
    pub fn apply_delete_failure(&mut self, err: &ApiError) {
        log::error!("failed to delete {}: {}", T::RESOURCE, err);
        self.error = Some(err.to_string());
    }

    /// Mark `id` as being deleted. Returns false while another delete is
    /// still in flight.
    pub fn begin_delete(&mut self, id: RecordId) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        self.deleting = Some(id);
        true
    }

    /// Outcome of `delete_and_reload`. When only the refresh failed the
    /// record is gone on the server, so it is dropped locally too.
    pub fn apply_delete(&mut self, id: RecordId, result: Result<Vec<T>, MutationError>) {
        self.deleting = None;
        match result {
            Ok(records) => self.apply_fetch(Ok(records)),
            Err(MutationError::Mutation(err)) => self.apply_delete_failure(&err),
            Err(MutationError::Refresh(err)) => {
                log::warn!("deleted {} {} but the refresh failed", T::RESOURCE, id);
                self.collection.retain(|r| r.id() != Some(id));
                self.apply_fetch(Err(err));
            }
        }
    }

    /// Outcome of a non-delete mutation followed by a refresh
    pub fn apply_mutation(&mut self, result: Result<Vec<T>, MutationError>) {
        match result {
            Ok(records) => self.apply_fetch(Ok(records)),
            Err(MutationError::Mutation(err)) => {
                log::error!("failed to update {}: {}", T::RESOURCE, err);
                self.error = Some(err.to_string());
            }
            Err(MutationError::Refresh(err)) => self.apply_fetch(Err(err)),
        }
    }

    /// `paginate(filter(sort(collection)))` for the current inputs
    pub fn rows(&self) -> Vec<&T> {
        let filtered = self.filtered();
        paginate(&filtered, self.current_page(), self.page_size).to_vec()
    }

    fn filtered(&self) -> Vec<&T> {
        filter_records(sort_records(&self.collection, self.sort), &self.search)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_len(), self.page_size)
    }

    /// Requested page clamped into range, in case filtering shrank the set
    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.page_count().max(1))
    }

    /// Page numbers the pagination control renders
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.page_count()
    }

    pub fn sort(&self) -> SortSpec<T::Sort> {
        self.sort
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self, id: RecordId) -> bool {
        self.deleting == Some(id)
    }

    pub fn delete_pending(&self) -> bool {
        self.deleting.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Todo, TodoSort};
    use crate::list::SortDirection;

    fn todo(id: u64, title: &str) -> Todo {
        Todo {
            id: Some(id),
            title: title.into(),
            description: format!("about {}", title),
            completed: false,
        }
    }

    fn titles(state: &ListState<Todo>) -> Vec<String> {
        state.rows().iter().map(|t| t.title.clone()).collect()
    }

    fn loaded(records: Vec<Todo>) -> ListState<Todo> {
        let mut state = ListState::new(2);
        assert_eq!(state.mount(), ListCommand::Fetch);
        state.apply_fetch(Ok(records));
        state
    }

    #[test]
    fn test_rows_are_sorted_then_paginated() {
        let state = loaded(vec![todo(1, "delta"), todo(2, "Alpha"), todo(3, "charlie"), todo(4, "bravo")]);
        assert_eq!(titles(&state), vec!["Alpha", "bravo"]);
        assert_eq!(state.page_count(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_sort_change_requests_fetch_and_keeps_search() {
        let mut state = loaded(vec![todo(1, "a"), todo(2, "b")]);
        state.set_search("b");
        assert_eq!(state.toggle_sort(TodoSort::Title), ListCommand::Fetch);
        assert_eq!(state.sort().direction, SortDirection::Descending);
        assert_eq!(state.search(), "b");
        assert!(state.is_loading());
    }

    #[test]
    fn test_search_resets_page_without_fetch() {
        let mut state = loaded((1..=5).map(|i| todo(i, &format!("task {}", i))).collect());
        state.go_to_page(3);
        assert_eq!(state.current_page(), 3);

        assert_eq!(state.set_search("TASK 5"), ListCommand::Render);
        assert_eq!(state.current_page(), 1);
        assert_eq!(titles(&state), vec!["task 5"]);
    }

    #[test]
    fn test_page_clamped_when_collection_shrinks() {
        let mut state = loaded((1..=5).map(|i| todo(i, &format!("t{}", i))).collect());
        state.go_to_page(3);
        state.apply_fetch(Ok(vec![todo(1, "t1")]));
        assert_eq!(state.current_page(), 1);
        assert_eq!(titles(&state), vec!["t1"]);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = loaded(vec![todo(1, "a"), todo(2, "b"), todo(3, "c")]);
        state.go_to_page(99);
        assert_eq!(state.current_page(), 2);
        state.go_to_page(0);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.pages().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_failed_fetch_keeps_collection() {
        let mut state = loaded(vec![todo(1, "a")]);
        state.toggle_sort(TodoSort::Title);
        state.apply_fetch(Err(ApiError::Transport("offline".into())));
        assert_eq!(state.collection().len(), 1);
        assert_eq!(state.error(), Some("Network error: offline"));

        state.apply_fetch(Ok(vec![todo(2, "b")]));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_delete_failure_is_not_optimistic() {
        let mut state = loaded(vec![todo(1, "a"), todo(2, "b")]);
        state.apply_delete_failure(&ApiError::Unauthorized);
        assert_eq!(state.collection().len(), 2);
        assert!(state.error().is_some());
    }

    #[test]
    fn test_one_delete_at_a_time() {
        let mut state = loaded(vec![todo(1, "a"), todo(2, "b")]);
        assert!(state.begin_delete(1));
        assert!(state.is_deleting(1));
        assert!(!state.begin_delete(2));
        assert!(!state.is_deleting(2));

        state.apply_delete(1, Err(MutationError::Mutation(ApiError::Unauthorized)));
        assert!(!state.delete_pending());
        assert_eq!(state.collection().len(), 2);
        assert!(state.begin_delete(2));
    }

    #[test]
    fn test_failed_toggle_keeps_rows() {
        let mut state = loaded(vec![todo(1, "a")]);
        state.apply_mutation(Err(MutationError::Mutation(ApiError::not_found("todo 1"))));
        assert_eq!(state.collection().len(), 1);
        assert_eq!(state.error(), Some("Request failed: 404 - todo 1 not found"));

        state.apply_mutation(Err(MutationError::Refresh(ApiError::Transport("offline".into()))));
        assert_eq!(state.error(), Some("Network error: offline"));
        assert_eq!(state.collection().len(), 1);
    }

    #[test]
    fn test_empty_collection_has_no_pages() {
        let state = loaded(Vec::new());
        assert_eq!(state.page_count(), 0);
        assert_eq!(state.current_page(), 1);
        assert!(state.rows().is_empty());
        assert_eq!(state.pages().count(), 0);
    }
}
