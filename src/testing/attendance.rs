//! Closure-driven double for [`AttendanceRepository`].

use async_trait::async_trait;

use crate::domain::entities::{Attendance, AttendancePatch, NewAttendance};
use crate::domain::repositories::AttendanceRepository;
use crate::error::AppError;

type Handler<F> = Option<Box<F>>;

/// Attendance repository whose every operation is supplied by the test.
///
/// Operations without a handler fail with [`AppError::not_implemented`], so a
/// test that forgets to configure a call sees an error rather than empty data.
///
/// ```
/// use employee_management::testing::StubAttendanceRepository;
///
/// let repo = StubAttendanceRepository::new().on_get_all(|| Ok(vec![]));
/// # let _ = repo;
/// ```
#[derive(Default)]
pub struct StubAttendanceRepository {
    get_all: Handler<dyn Fn() -> Result<Vec<Attendance>, AppError> + Send + Sync>,
    get_by_id: Handler<dyn Fn(i64) -> Result<Attendance, AppError> + Send + Sync>,
    create: Handler<dyn Fn(NewAttendance) -> Result<Attendance, AppError> + Send + Sync>,
    update: Handler<dyn Fn(i64, AttendancePatch) -> Result<Attendance, AppError> + Send + Sync>,
    delete: Handler<dyn Fn(i64) -> Result<(), AppError> + Send + Sync>,
    check_in: Handler<dyn Fn(&str) -> Result<Attendance, AppError> + Send + Sync>,
    check_out: Handler<dyn Fn(i64) -> Result<Attendance, AppError> + Send + Sync>,
    get_all_me: Handler<dyn Fn(&str) -> Result<Vec<Attendance>, AppError> + Send + Sync>,
    check_today: Handler<dyn Fn(&str) -> Result<Attendance, AppError> + Send + Sync>,
}

impl StubAttendanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get_all(
        mut self,
        f: impl Fn() -> Result<Vec<Attendance>, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.get_all = Some(Box::new(f));
        self
    }

    pub fn on_get_by_id(
        mut self,
        f: impl Fn(i64) -> Result<Attendance, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.get_by_id = Some(Box::new(f));
        self
    }

    pub fn on_create(
        mut self,
        f: impl Fn(NewAttendance) -> Result<Attendance, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.create = Some(Box::new(f));
        self
    }

    pub fn on_update(
        mut self,
        f: impl Fn(i64, AttendancePatch) -> Result<Attendance, AppError> + Send + Sync + 'static,
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

    pub fn on_check_in(
        mut self,
        f: impl Fn(&str) -> Result<Attendance, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.check_in = Some(Box::new(f));
        self
    }

    pub fn on_check_out(
        mut self,
        f: impl Fn(i64) -> Result<Attendance, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.check_out = Some(Box::new(f));
        self
    }

    pub fn on_get_all_me(
        mut self,
        f: impl Fn(&str) -> Result<Vec<Attendance>, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.get_all_me = Some(Box::new(f));
        self
    }

    pub fn on_check_today(
        mut self,
        f: impl Fn(&str) -> Result<Attendance, AppError> + Send + Sync + 'static,
    ) -> Self {
        self.check_today = Some(Box::new(f));
        self
    }
}

#[async_trait]
impl AttendanceRepository for StubAttendanceRepository {
    async fn get_all(&self) -> Result<Vec<Attendance>, AppError> {
        match &self.get_all {
            Some(f) => f(),
            None => Err(AppError::not_implemented("get_all")),
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Attendance, AppError> {
        match &self.get_by_id {
            Some(f) => f(id),
            None => Err(AppError::not_implemented("get_by_id")),
        }
    }

    async fn create(&self, new_attendance: NewAttendance) -> Result<Attendance, AppError> {
        match &self.create {
            Some(f) => f(new_attendance),
            None => Err(AppError::not_implemented("create")),
        }
    }

    async fn update(&self, id: i64, patch: AttendancePatch) -> Result<Attendance, AppError> {
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

    async fn check_in(&self, employee_id: &str) -> Result<Attendance, AppError> {
        match &self.check_in {
            Some(f) => f(employee_id),
            None => Err(AppError::not_implemented("check_in")),
        }
    }

    async fn check_out(&self, id: i64) -> Result<Attendance, AppError> {
        match &self.check_out {
            Some(f) => f(id),
            None => Err(AppError::not_implemented("check_out")),
        }
    }

    async fn get_all_me(&self, employee_id: &str) -> Result<Vec<Attendance>, AppError> {
        match &self.get_all_me {
            Some(f) => f(employee_id),
            None => Err(AppError::not_implemented("get_all_me")),
        }
    }

    async fn check_today(&self, employee_id: &str) -> Result<Attendance, AppError> {
        match &self.check_today {
            Some(f) => f(employee_id),
            None => Err(AppError::not_implemented("check_today")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_operations_fail() {
        let repo = StubAttendanceRepository::new();

        let err = repo.get_all().await.unwrap_err();
        assert_eq!(err.to_string(), "not implemented");

        let err = repo.check_today("E1").await.unwrap_err();
        assert_eq!(err.details()["operation"], "check_today");
    }

    #[tokio::test]
    async fn test_configured_operation_receives_arguments() {
        let repo = StubAttendanceRepository::new().on_get_all_me(|employee_id| {
            assert_eq!(employee_id, "E7");
            Ok(vec![])
        });

        let records = repo.get_all_me("E7").await.unwrap();
        assert!(records.is_empty());
    }
}
