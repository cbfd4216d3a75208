//! Attendance tracking service.

use std::sync::Arc;

use crate::domain::entities::{Attendance, AttendancePatch, NewAttendance};
use crate::domain::repositories::AttendanceRepository;
use crate::error::AppError;
use crate::utils::validation::{validate_employee_id, validate_shift};

/// Service for attendance records and the daily check-in/check-out flow.
///
/// Every call delegates to the repository. Repository errors are returned
/// unchanged so callers see the original kind and message; the only errors
/// raised here are input validation failures, checked before any repository
/// call.
pub struct AttendanceService<R: AttendanceRepository> {
    repository: Arc<R>,
}

impl<R: AttendanceRepository> AttendanceService<R> {
    /// Creates a new attendance service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every attendance record.
    pub async fn get_attendances(&self) -> Result<Vec<Attendance>, AppError> {
        self.repository.get_all().await
    }

    /// Retrieves one attendance record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn get_attendance(&self, id: i64) -> Result<Attendance, AppError> {
        self.repository.get_by_id(id).await
    }

    /// Creates an attendance record directly, bypassing the check-in flow.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the employee id is blank or the
    /// checkout precedes the check-in.
    pub async fn create_attendance(
        &self,
        new_attendance: NewAttendance,
    ) -> Result<Attendance, AppError> {
        validate_employee_id(&new_attendance.employee_id)?;
        validate_shift(new_attendance.check_in, new_attendance.check_out)?;

        let created = self.repository.create(new_attendance).await?;
        tracing::info!(
            id = created.id,
            employee_id = %created.employee_id,
            "Attendance created"
        );
        Ok(created)
    }

    /// Partially updates an attendance record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch carries a blank employee
    /// id, or sets both times with the checkout first.
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn update_attendance(
        &self,
        id: i64,
        patch: AttendancePatch,
    ) -> Result<Attendance, AppError> {
        if let Some(employee_id) = &patch.employee_id {
            validate_employee_id(employee_id)?;
        }
        if let (Some(check_in), Some(check_out)) = (patch.check_in, patch.check_out) {
            validate_shift(check_in, check_out)?;
        }

        self.repository.update(id, patch).await
    }

    /// Deletes an attendance record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn delete_attendance(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(id, "Attendance deleted");
        Ok(())
    }

    /// Checks an employee in for today.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the employee id is blank.
    /// Returns [`AppError::Conflict`] if the employee already checked in today.
    pub async fn check_in(&self, employee_id: &str) -> Result<Attendance, AppError> {
        validate_employee_id(employee_id)?;

        let attendance = self.repository.check_in(employee_id).await?;
        tracing::info!(id = attendance.id, employee_id, "Checked in");
        Ok(attendance)
    }

    /// Checks out an attendance record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Conflict`] if it is already checked out.
    pub async fn check_out(&self, id: i64) -> Result<Attendance, AppError> {
        let attendance = self.repository.check_out(id).await?;
        tracing::info!(id, employee_id = %attendance.employee_id, "Checked out");
        Ok(attendance)
    }

    /// Lists the records of one employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the employee id is blank.
    pub async fn get_my_attendances(&self, employee_id: &str) -> Result<Vec<Attendance>, AppError> {
        validate_employee_id(employee_id)?;

        let records = self.repository.get_all_me(employee_id).await?;
        tracing::debug!(employee_id, count = records.len(), "Attendances listed");
        Ok(records)
    }

    /// Returns today's record of an employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the employee id is blank.
    /// Returns [`AppError::NotFound`] if the employee has not checked in today.
    pub async fn check_today(&self, employee_id: &str) -> Result<Attendance, AppError> {
        validate_employee_id(employee_id)?;
        self.repository.check_today(employee_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAttendanceRepository;
    use crate::testing::StubAttendanceRepository;
    use chrono::{DateTime, Duration, Utc};
    use serde_json::json;
    use std::sync::Mutex;

    fn create_test_attendance(id: i64, employee_id: &str) -> Attendance {
        let now = Utc::now();
        Attendance::new(id, employee_id.to_string(), now.date_naive(), now, None)
    }

    fn invalid() -> AppError {
        AppError::storage("invalid", json!({}))
    }

    fn service(repo: StubAttendanceRepository) -> AttendanceService<StubAttendanceRepository> {
        AttendanceService::new(Arc::new(repo))
    }

    fn new_attendance(check_out: Option<DateTime<Utc>>) -> NewAttendance {
        let now = Utc::now();
        NewAttendance {
            employee_id: "E1".to_string(),
            work_date: now.date_naive(),
            check_in: now,
            check_out,
        }
    }

    #[tokio::test]
    async fn test_get_attendances() {
        let ok = service(StubAttendanceRepository::new().on_get_all(|| Ok(vec![])));
        assert!(ok.get_attendances().await.is_ok());

        let failing = service(StubAttendanceRepository::new().on_get_all(|| Err(invalid())));
        let err = failing.get_attendances().await.unwrap_err();
        assert_eq!(err.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_get_attendance() {
        let ok = service(
            StubAttendanceRepository::new().on_get_by_id(|id| Ok(create_test_attendance(id, "E1"))),
        );
        assert_eq!(ok.get_attendance(1).await.unwrap().id, 1);

        let failing = service(StubAttendanceRepository::new().on_get_by_id(|_| Err(invalid())));
        let err = failing.get_attendance(1).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_create_attendance() {
        let ok = service(
            StubAttendanceRepository::new().on_create(|new| Ok(create_test_attendance(1, &new.employee_id))),
        );
        assert!(ok.create_attendance(new_attendance(None)).await.is_ok());

        let failing = service(StubAttendanceRepository::new().on_create(|_| Err(invalid())));
        let err = failing
            .create_attendance(new_attendance(None))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_update_attendance() {
        let ok = service(
            StubAttendanceRepository::new().on_update(|id, _| Ok(create_test_attendance(id, "E1"))),
        );
        assert!(ok.update_attendance(1, AttendancePatch::default()).await.is_ok());

        let failing = service(StubAttendanceRepository::new().on_update(|_, _| Err(invalid())));
        let err = failing
            .update_attendance(1, AttendancePatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_delete_attendance() {
        let ok = service(StubAttendanceRepository::new().on_delete(|_| Ok(())));
        assert!(ok.delete_attendance(1).await.is_ok());

        let failing = service(StubAttendanceRepository::new().on_delete(|_| Err(invalid())));
        let err = failing.delete_attendance(1).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_check_in() {
        let ok = service(
            StubAttendanceRepository::new().on_check_in(|eid| Ok(create_test_attendance(1, eid))),
        );
        assert!(ok.check_in("1").await.is_ok());

        let failing = service(StubAttendanceRepository::new().on_check_in(|_| Err(invalid())));
        let err = failing.check_in("1").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_check_out() {
        let ok = service(StubAttendanceRepository::new().on_check_out(|id| {
            let mut attendance = create_test_attendance(id, "E1");
            attendance.check_out = Some(Utc::now());
            Ok(attendance)
        }));
        assert!(ok.check_out(1).await.unwrap().is_checked_out());

        let failing = service(StubAttendanceRepository::new().on_check_out(|_| Err(invalid())));
        let err = failing.check_out(1).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_get_my_attendances() {
        let ok = service(StubAttendanceRepository::new().on_get_all_me(|_| Ok(vec![])));
        assert!(ok.get_my_attendances("1").await.is_ok());

        let failing = service(StubAttendanceRepository::new().on_get_all_me(|_| Err(invalid())));
        let err = failing.get_my_attendances("1").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_check_today() {
        let ok = service(
            StubAttendanceRepository::new().on_check_today(|eid| Ok(create_test_attendance(1, eid))),
        );
        assert!(ok.check_today("1").await.is_ok());

        let failing = service(StubAttendanceRepository::new().on_check_today(|_| Err(invalid())));
        let err = failing.check_today("1").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_not_found_keeps_kind_and_message() {
        let repo = StubAttendanceRepository::new().on_get_by_id(|_| {
            Err(AppError::not_found(
                "no rows returned by a query that expected to return at least one row",
                json!({}),
            ))
        });

        let err = service(repo).get_attendance(99).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "no rows returned by a query that expected to return at least one row"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_repository_surfaces_not_implemented() {
        let err = service(StubAttendanceRepository::new())
            .check_out(1)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "not implemented");
    }

    #[tokio::test]
    async fn test_check_in_then_check_today_returns_same_record() {
        let stored: Arc<Mutex<Option<Attendance>>> = Arc::new(Mutex::new(None));
        let for_check_in = stored.clone();
        let for_today = stored.clone();

        let repo = StubAttendanceRepository::new()
            .on_check_in(move |eid| {
                let attendance = create_test_attendance(7, eid);
                *for_check_in.lock().unwrap() = Some(attendance.clone());
                Ok(attendance)
            })
            .on_check_today(move |eid| {
                for_today
                    .lock()
                    .unwrap()
                    .clone()
                    .filter(|a| a.employee_id == eid)
                    .ok_or_else(|| AppError::not_found("not checked in", json!({})))
            });
        let service = service(repo);

        let created = service.check_in("E1").await.unwrap();
        let today = service.check_today("E1").await.unwrap();

        assert_eq!(created, today);
        assert!(today.check_out.is_none());
    }

    #[tokio::test]
    async fn test_check_in_rejects_blank_employee_id() {
        let mut mock_repo = MockAttendanceRepository::new();
        mock_repo.expect_check_in().times(0);

        let service = AttendanceService::new(Arc::new(mock_repo));

        let result = service.check_in("  ").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_check_in_passes_employee_id_through() {
        let mut mock_repo = MockAttendanceRepository::new();
        mock_repo
            .expect_check_in()
            .withf(|eid| eid == "E42")
            .times(1)
            .returning(|eid| Ok(create_test_attendance(3, eid)));

        let service = AttendanceService::new(Arc::new(mock_repo));

        let attendance = service.check_in("E42").await.unwrap();

        assert_eq!(attendance.employee_id, "E42");
    }

    #[tokio::test]
    async fn test_create_attendance_rejects_checkout_before_checkin() {
        let mut mock_repo = MockAttendanceRepository::new();
        mock_repo.expect_create().times(0);

        let service = AttendanceService::new(Arc::new(mock_repo));

        let result = service
            .create_attendance(new_attendance(Some(Utc::now() - Duration::hours(1))))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_attendance_rejects_blank_employee_id() {
        let mut mock_repo = MockAttendanceRepository::new();
        mock_repo.expect_update().times(0);

        let service = AttendanceService::new(Arc::new(mock_repo));

        let patch = AttendancePatch {
            employee_id: Some(String::new()),
            ..Default::default()
        };
        let result = service.update_attendance(1, patch).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_double_check_out_conflict_propagates() {
        let mut mock_repo = MockAttendanceRepository::new();
        let mut seq = mockall::Sequence::new();
        mock_repo
            .expect_check_out()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| {
                let mut attendance = create_test_attendance(id, "E1");
                attendance.check_out = Some(Utc::now());
                Ok(attendance)
            });
        mock_repo
            .expect_check_out()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Err(AppError::conflict("already checked out", json!({ "id": id }))));

        let service = AttendanceService::new(Arc::new(mock_repo));

        assert!(service.check_out(5).await.is_ok());
        let err = service.check_out(5).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "already checked out");
    }
}
