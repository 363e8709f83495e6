//! Record Form
//!
//! Shared plumbing for the add/edit forms: read `:id` from the route,
//! prefill in edit mode, then create or update on submit.

use std::marker::PhantomData;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use todo_admin_core::api::{HttpApi, ResourceApi};
use todo_admin_core::domain::{Entity, RecordId};
use todo_admin_core::form::{save_record, Draft, FormMode, FormState, Submission};
use todo_admin_core::scope::ViewScope;

use crate::context::AppContext;

pub struct RecordForm<T, D: Send + Sync + 'static> {
    pub draft: RwSignal<D>,
    pub state: RwSignal<FormState>,
    pub mode: Memo<FormMode>,
    scope: StoredValue<ViewScope>,
    ctx: AppContext,
    record: PhantomData<fn() -> T>,
}

impl<T, D: Send + Sync + 'static> Clone for RecordForm<T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, D: Send + Sync + 'static> Copy for RecordForm<T, D> {}

impl<T, D> RecordForm<T, D>
where
    T: Entity,
    D: Draft<Payload = T> + Clone + Default + Send + Sync + 'static,
    HttpApi: ResourceApi<T>,
{
    pub fn new(ctx: AppContext, prefill: fn(&T) -> D) -> Self {
        let params = use_params_map();
        let mode = Memo::new(move |_| {
            FormMode::from_id(params.with(|p| p.get("id").and_then(|id| id.parse::<RecordId>().ok())))
        });
        let draft = RwSignal::new(D::default());
        let state = RwSignal::new(FormState::new());
        let scope = StoredValue::new(ViewScope::new());
        on_cleanup(move || scope.with_value(ViewScope::cancel));

        // Load the record being edited
        Effect::new(move |_| {
            let FormMode::Edit(id) = mode.get() else { return };
            let api = ctx.api();
            let scope = scope.get_value();
            spawn_local(async move {
                let Some(result) = scope.run(async { ResourceApi::<T>::get(&api, id).await }).await else { return };
                ctx.observe(&result);
                match result {
                    Ok(record) => draft.set(prefill(&record)),
                    Err(err) => {
                        log::error!("failed to load {} {}: {}", T::RESOURCE, id, err);
                        state.update(|s| s.fail(&err));
                    }
                }
            });
        });

        Self {
            draft,
            state,
            mode,
            scope,
            ctx,
            record: PhantomData,
        }
    }

    /// Validate and send; `on_saved` runs only after a successful save
    pub fn save(self, on_saved: impl FnOnce() + 'static) {
        let current = self.draft.get_untracked();
        let mode = self.mode.get_untracked();
        let api = self.ctx.api();
        let scope = self.scope.get_value();
        self.state.update(FormState::begin);

        spawn_local(async move {
            let Some(outcome) = scope.run(save_record(&api, mode, &current)).await else { return };
            if let Submission::Failed(err) = &outcome {
                self.ctx.observe_error(err);
            }
            if self.state.try_update(|s| s.apply(&outcome)).unwrap_or(false) {
                on_saved();
            }
        });
    }

    pub fn heading(&self, noun: &str) -> String {
        self.mode.get().heading(noun)
    }
}
