//! List Controller
//!
//! Binds a `ListState` to a signal and runs its fetches. Every result goes
//! through the view's scope, so nothing lands after the view is gone.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_admin_core::api::{ApiResult, HttpApi, ResourceApi};
use todo_admin_core::domain::{Listable, RecordId, Todo};
use todo_admin_core::list::{delete_and_reload, reload, set_completed_and_reload, ListCommand, ListState};
use todo_admin_core::scope::ViewScope;

use crate::context::AppContext;

pub struct ListController<T: Listable> {
    state: RwSignal<ListState<T>>,
    scope: StoredValue<ViewScope>,
    ctx: AppContext,
}

impl<T: Listable> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Listable> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Listable,
    HttpApi: ResourceApi<T>,
{
    /// Create for the current view; the scope closes on unmount
    pub fn new(ctx: AppContext) -> Self {
        let state = RwSignal::new(ListState::new(ctx.config().page_size()));
        let scope = StoredValue::new(ViewScope::new());
        on_cleanup(move || scope.with_value(ViewScope::cancel));
        Self { state, scope, ctx }
    }

    pub fn mount(self) {
        self.run(|s| s.mount());
    }

    pub fn toggle_sort(self, field: T::Sort) {
        self.run(|s| s.toggle_sort(field));
    }

    pub fn set_search(self, term: String) {
        self.run(|s| s.set_search(term));
    }

    pub fn go_to_page(self, page: usize) {
        self.run(|s| s.go_to_page(page));
    }

    /// Delete, then refresh once the delete has finished. Ignored while
    /// another delete is in flight.
    pub fn remove(self, id: RecordId) {
        if !self.state.try_update(|s| s.begin_delete(id)).unwrap_or(false) {
            return;
        }
        let api = self.ctx.api();
        let scope = self.scope.get_value();
        spawn_local(async move {
            let Some(result) = scope.run(delete_and_reload::<T, _>(&api, id)).await else { return };
            if let Err(err) = &result {
                self.ctx.observe_error(err.api_error());
            }
            self.state.update(|s| s.apply_delete(id, result));
        });
    }

    pub fn rows(&self) -> Vec<T> {
        self.state.with(|s| s.rows().into_iter().cloned().collect())
    }

    pub fn search(&self) -> String {
        self.state.with(|s| s.search().to_string())
    }

    pub fn arrow_for(&self, field: T::Sort) -> Option<&'static str> {
        self.state.with(|s| s.sort().arrow_for(field))
    }

    pub fn page_count(&self) -> usize {
        self.state.with(|s| s.page_count())
    }

    pub fn current_page(&self) -> usize {
        self.state.with(|s| s.current_page())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_deleting(&self, id: RecordId) -> bool {
        self.state.with(|s| s.is_deleting(id))
    }

    pub fn delete_pending(&self) -> bool {
        self.state.with(|s| s.delete_pending())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    fn run(self, transition: impl FnOnce(&mut ListState<T>) -> ListCommand) {
        if self.state.try_update(transition) == Some(ListCommand::Fetch) {
            let api = self.ctx.api();
            self.settle(async move { reload::<T, _>(&api).await });
        }
    }

    /// Await a collection result and store it unless the view closed
    fn settle(self, fetch: impl std::future::Future<Output = ApiResult<Vec<T>>> + 'static) {
        let scope = self.scope.get_value();
        spawn_local(async move {
            if let Some(result) = scope.run(fetch).await {
                self.ctx.observe(&result);
                self.state.update(|s| s.apply_fetch(result));
            }
        });
    }
}

impl ListController<Todo> {
    pub fn set_completed(self, id: RecordId, completed: bool) {
        let api = self.ctx.api();
        let scope = self.scope.get_value();
        spawn_local(async move {
            let Some(result) = scope.run(set_completed_and_reload(&api, id, completed)).await else { return };
            if let Err(err) = &result {
                self.ctx.observe_error(err.api_error());
            }
            self.state.update(|s| s.apply_mutation(result));
        });
    }
}
