//! In-memory implementation of the API traits
//!
//! Behaves like the remote server for a single process: assigns ids, joins
//! department names onto employees, and records every call in order so
//! sequencing can be asserted.

use std::sync::Mutex;

use async_trait::async_trait;

use super::error::{ApiError, ApiResult};
use super::traits::{AuthApi, ResourceApi, TodoStatusApi};
use crate::domain::{
    Department, Employee, Entity, LoginRequest, LoginResponse, RecordId, RegisterRequest,
    Resource, Todo,
};

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List(Resource),
    Get(Resource, RecordId),
    Create(Resource),
    Update(Resource, RecordId),
    Delete(Resource, RecordId),
    Complete(RecordId),
    Incomplete(RecordId),
    Register,
    Login,
}

impl ApiCall {
    pub fn resource(&self) -> Option<Resource> {
        match self {
            ApiCall::List(r)
            | ApiCall::Get(r, _)
            | ApiCall::Create(r)
            | ApiCall::Update(r, _)
            | ApiCall::Delete(r, _) => Some(*r),
            ApiCall::Complete(_) | ApiCall::Incomplete(_) => Some(Resource::Todo),
            ApiCall::Register | ApiCall::Login => None,
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    todos: Vec<Todo>,
    employees: Vec<Employee>,
    departments: Vec<Department>,
    registrations: Vec<RegisterRequest>,
    next_id: RecordId,
    calls: Vec<ApiCall>,
    fail_next: Option<ApiError>,
    fail_on: Option<(ApiCall, ApiError)>,
}

impl Tables {
    fn next_id(&mut self) -> RecordId {
        self.next_id += 1;
        self.next_id
    }

    /// Record the call, then hand back an injected failure if one is armed
    fn enter(&mut self, call: ApiCall) -> ApiResult<()> {
        let armed = match self.fail_on.take() {
            Some((target, err)) if target == call => Some(err),
            other => {
                self.fail_on = other;
                None
            }
        };
        self.calls.push(call);
        match self.fail_next.take().or(armed) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn department_name(&self, id: Option<RecordId>) -> Option<String> {
        let id = id?;
        self.departments
            .iter()
            .find(|d| d.id == Some(id))
            .map(|d| d.department_name.clone())
    }
}

/// Records that live in one of the in-memory tables
trait Stored: Entity {
    fn table(tables: &mut Tables) -> &mut Vec<Self>;

    fn assign_id(&mut self, id: RecordId);

    /// Server-side projections applied on write
    fn prepare(&mut self, _tables: &Tables) {}
}

impl Stored for Todo {
    fn table(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.todos
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

impl Stored for Department {
    fn table(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.departments
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

impl Stored for Employee {
    fn table(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.employees
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn prepare(&mut self, tables: &Tables) {
        self.department_name = tables.department_name(self.department_id);
    }
}

#[derive(Debug, Default)]
pub struct InMemoryApi {
    tables: Mutex<Tables>,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tables<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        let mut guard = match self.tables.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    /// Insert records as if they already existed on the server. Records
    /// without an id get one.
    pub fn seed_todos(&self, records: impl IntoIterator<Item = Todo>) -> &Self {
        self.seed_all(records)
    }

    pub fn seed_employees(&self, records: impl IntoIterator<Item = Employee>) -> &Self {
        self.seed_all(records)
    }

    pub fn seed_departments(&self, records: impl IntoIterator<Item = Department>) -> &Self {
        self.seed_all(records)
    }

    fn seed_all<T: Stored>(&self, records: impl IntoIterator<Item = T>) -> &Self {
        self.with_tables(|t| {
            for mut record in records {
                match record.id() {
                    Some(id) => t.next_id = t.next_id.max(id),
                    None => {
                        let id = t.next_id();
                        record.assign_id(id);
                    }
                }
                record.prepare(t);
                T::table(t).push(record);
            }
        });
        self
    }

    /// Make the next call fail with `err`
    pub fn fail_next(&self, err: ApiError) {
        self.with_tables(|t| t.fail_next = Some(err));
    }

    /// Make the first later call equal to `call` fail with `err`
    pub fn fail_on(&self, call: ApiCall, err: ApiError) {
        self.with_tables(|t| t.fail_on = Some((call, err)));
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.with_tables(|t| t.calls.clone())
    }

    pub fn calls_for(&self, resource: Resource) -> Vec<ApiCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.resource() == Some(resource))
            .collect()
    }

    pub fn registrations(&self) -> Vec<RegisterRequest> {
        self.with_tables(|t| t.registrations.clone())
    }

    fn list_of<T: Stored>(&self) -> ApiResult<Vec<T>> {
        self.with_tables(|t| {
            t.enter(ApiCall::List(T::RESOURCE))?;
            Ok(T::table(t).clone())
        })
    }

    fn get_of<T: Stored>(&self, id: RecordId) -> ApiResult<T> {
        self.with_tables(|t| {
            t.enter(ApiCall::Get(T::RESOURCE, id))?;
            T::table(t)
                .iter()
                .find(|r| r.id() == Some(id))
                .cloned()
                .ok_or_else(|| ApiError::not_found(format!("{} {}", T::RESOURCE, id)))
        })
    }

    fn create_of<T: Stored>(&self, record: &T) -> ApiResult<T> {
        self.with_tables(|t| {
            t.enter(ApiCall::Create(T::RESOURCE))?;
            let mut created = record.clone();
            let id = t.next_id();
            created.assign_id(id);
            created.prepare(t);
            T::table(t).push(created.clone());
            Ok(created)
        })
    }

    fn update_of<T: Stored>(&self, id: RecordId, record: &T) -> ApiResult<T> {
        self.with_tables(|t| {
            t.enter(ApiCall::Update(T::RESOURCE, id))?;
            let mut updated = record.clone();
            updated.assign_id(id);
            updated.prepare(t);
            let slot = T::table(t)
                .iter_mut()
                .find(|r| r.id() == Some(id))
                .ok_or_else(|| ApiError::not_found(format!("{} {}", T::RESOURCE, id)))?;
            *slot = updated.clone();
            Ok(updated)
        })
    }

    fn delete_of<T: Stored>(&self, id: RecordId) -> ApiResult<()> {
        self.with_tables(|t| {
            t.enter(ApiCall::Delete(T::RESOURCE, id))?;
            let table = T::table(t);
            let before = table.len();
            table.retain(|r| r.id() != Some(id));
            if table.len() == before {
                return Err(ApiError::not_found(format!("{} {}", T::RESOURCE, id)));
            }
            Ok(())
        })
    }

    fn set_completed(&self, call: ApiCall, id: RecordId, completed: bool) -> ApiResult<Todo> {
        self.with_tables(|t| {
            t.enter(call)?;
            let todo = t
                .todos
                .iter_mut()
                .find(|r| r.id == Some(id))
                .ok_or_else(|| ApiError::not_found(format!("todo {}", id)))?;
            todo.completed = completed;
            Ok(todo.clone())
        })
    }
}

macro_rules! resource_api {
    ($($ty:ty),*) => {$(
        #[async_trait(?Send)]
        impl ResourceApi<$ty> for InMemoryApi {
            async fn list(&self) -> ApiResult<Vec<$ty>> {
                self.list_of()
            }

            async fn get(&self, id: RecordId) -> ApiResult<$ty> {
                self.get_of(id)
            }

            async fn create(&self, record: &$ty) -> ApiResult<$ty> {
                self.create_of(record)
            }

            async fn update(&self, id: RecordId, record: &$ty) -> ApiResult<$ty> {
                self.update_of(id, record)
            }

            async fn delete(&self, id: RecordId) -> ApiResult<()> {
                self.delete_of::<$ty>(id)
            }
        }
    )*};
}

resource_api!(Todo, Employee, Department);

#[async_trait(?Send)]
impl TodoStatusApi for InMemoryApi {
    async fn complete(&self, id: RecordId) -> ApiResult<Todo> {
        self.set_completed(ApiCall::Complete(id), id, true)
    }

    async fn incomplete(&self, id: RecordId) -> ApiResult<Todo> {
        self.set_completed(ApiCall::Incomplete(id), id, false)
    }
}

#[async_trait(?Send)]
impl AuthApi for InMemoryApi {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<String> {
        self.with_tables(|t| {
            t.enter(ApiCall::Register)?;
            t.registrations.push(request.clone());
            Ok("User registered successfully!".to_string())
        })
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.with_tables(|t| {
            t.enter(ApiCall::Login)?;
            let user = t
                .registrations
                .iter()
                .find(|r| {
                    (r.username == request.username_or_email || r.email == request.username_or_email)
                        && r.password == request.password
                })
                .ok_or(ApiError::Unauthorized)?;
            Ok(LoginResponse {
                access_token: format!("token-{}", user.username),
                token_type: "Bearer".to_string(),
                role: "ROLE_USER".to_string(),
            })
        })
    }
}
