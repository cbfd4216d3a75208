//! Closure-driven double for [`LeaveRepository`].

use async_trait::async_trait;

use crate::domain::entities::{Leave, LeavePatch, LeaveStatus, NewLeave};
use crate::domain::repositories::LeaveRepository;
use crate::error::AppError;

type Handler<F> = Option<Box<F>>;

/// Leave repository whose every operation is supplied by the test.
///
/// Operations without a handler fail with [`AppError::not_implemented`].
#[derive(Default)]
pub struct StubLeaveRepository {
    get_all: Handler<dyn Fn() -> Result<Vec<Leave>, AppError> + Send + Sync>,
    get_by_id: Handler<dyn Fn(i64) -> Result<Leave, AppError> + Send + Sync>,
    create: Handler<dyn Fn(NewLeave) -> Result<Leave, AppError> + Send + Sync>,
    update: Handler<dyn Fn(i64, LeavePatch) -> Result<Leave, AppError> + Send + Sync>,
    delete: Handler<dyn Fn(i64) -> Result<(), AppError> + Send + Sync>,
    update_status: Handler<dyn Fn(i64, LeaveStatus) -> Result<Leave, AppError> + Send + Sync>,
}

impl StubLeaveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get_all(
        mut self,
        f: impl Fn() -> Result<Vec<Leave>, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.get_all = Some(Box::new(f));
        self
    }

    pub fn on_get_by_id(
        mut self,
        f: impl Fn(i64) -> Result<Leave, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.get_by_id = Some(Box::new(f));
        self
    }

    pub fn on_create(
        mut self,
        f: impl Fn(NewLeave) -> Result<Leave, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.create = Some(Box::new(f));
        self
    }

    pub fn on_update(
        mut self,
        f: impl Fn(i64, LeavePatch) -> Result<Leave, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    pub fn on_delete(
        mut self,
        f: impl Fn(i64) -> Result<(), AppError> + Send + Sync + 'static,
    ) -> Self {
        self.delete = Some(Box::new(f));
        self
    }

    pub fn on_update_status(
        mut self,
        f: impl Fn(i64, LeaveStatus) -> Result<Leave, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.update_status = Some(Box::new(f));
        self
    }
}

#[async_trait]
impl LeaveRepository for StubLeaveRepository {
    async fn get_all(&self) -> Result<Vec<Leave>, AppError> {
        match &self.get_all {
            Some(f) => f(),
            None => Err(AppError::not_implemented("get_all")),
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Leave, AppError> {
        match &self.get_by_id {
            Some(f) => f(id),
            None => Err(AppError::not_implemented("get_by_id")),
        }
    }

    async fn create(&self, new_leave: NewLeave) -> Result<Leave, AppError> {
        match &self.create {
            Some(f) => f(new_leave),
            None => Err(AppError::not_implemented("create")),
        }
    }

    async fn update(&self, id: i64, patch: LeavePatch) -> Result<Leave, AppError> {
        match &self.update {
            Some(f) => f(id, patch),
            None => Err(AppError::not_implemented("update")),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        match &self.delete {
            Some(f) => f(id),
            None => Err(AppError::not_implemented("delete")),
        }
    }

    async fn update_status(&self, id: i64, status: LeaveStatus) -> Result<Leave, AppError> {
        match &self.update_status {
            Some(f) => f(id, status),
            None => Err(AppError::not_implemented("update_status")),
        }
    }
}
