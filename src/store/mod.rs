//! Persistence for enrolled encodings and the attendance log.

#[cfg(test)]
pub mod memory;
pub mod mysql;

use crate::error::AppError;
use crate::model::attendance::AttendanceAction;
use crate::model::employee::{Employee, FaceEncoding};
use async_trait::async_trait;
use chrono::NaiveDateTime;

pub use mysql::MySqlStore;

#[async_trait]
pub trait Store: Send + Sync {
    async fn employee_exists(&self, name: &str) -> Result<bool, AppError>;

    /// Inserts a new employee. A name collision is [`AppError::DuplicateName`].
    async fn insert_employee(&self, name: &str, encoding: &FaceEncoding) -> Result<u64, AppError>;

    /// Every enrolled employee in insertion order.
    async fn employees(&self) -> Result<Vec<Employee>, AppError>;

    /// Closes the newest log entry for `name` if it is open, otherwise opens a
    /// new one at `at`. Exactly one insert or update, committed once.
    async fn toggle_attendance(
        &self,
        name: &str,
        at: NaiveDateTime,
    ) -> Result<AttendanceAction, AppError>;

    /// Round-trips the backing database without writing.
    async fn ping(&self) -> bool;
}
