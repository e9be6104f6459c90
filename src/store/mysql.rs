use super::Store;
use crate::error::AppError;
use crate::model::attendance::{AttendanceAction, AttendanceLog};
use crate::model::employee::{Employee, EmployeeRow, FaceEncoding};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::MySqlPool;
use tracing::debug;

/// MySQL error code for a duplicate key.
const DUPLICATE_KEY: &str = "23000";

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn employee_exists(&self, name: &str) -> Result<bool, AppError> {
        // EXISTS comes back as BIGINT on MySQL
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE name = ? LIMIT 1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    async fn insert_employee(&self, name: &str, encoding: &FaceEncoding) -> Result<u64, AppError> {
        let result = sqlx::query(r#"INSERT INTO employees (name, face_encoding) VALUES (?, ?)"#)
            .bind(name)
            .bind(encoding.to_bytes())
            .execute(&self.pool)
            .await;

        match result {
            Ok(res) => Ok(res.last_insert_id()),
            Err(e) => {
                // Lost a race with a concurrent registration of the same name
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.code().as_deref() == Some(DUPLICATE_KEY) {
                        return Err(AppError::DuplicateName);
                    }
                }
                Err(e.into())
            }
        }
    }

    async fn employees(&self) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, face_encoding FROM employees ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded enrolled encodings");

        rows.into_iter()
            .map(|row| {
                let name = row.name.clone();
                Employee::try_from(row)
                    .map_err(|source| AppError::CorruptEncoding { name, source })
            })
            .collect()
    }

    async fn toggle_attendance(
        &self,
        name: &str,
        at: NaiveDateTime,
    ) -> Result<AttendanceAction, AppError> {
        // Callers serialize toggles per name; the transaction keeps the
        // read and the write on one connection and one commit.
        let mut tx = self.pool.begin().await?;

        let last = sqlx::query_as::<_, AttendanceLog>(
            r#"
            SELECT id, employee_name, log_in_time, log_out_time
            FROM log
            WHERE employee_name = ?
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *tx)
        .await?;

        let action = match last {
            Some(entry) if entry.is_open() => {
                sqlx::query("UPDATE log SET log_out_time = ? WHERE id = ?")
                    .bind(at)
                    .bind(entry.id)
                    .execute(&mut *tx)
                    .await?;
                AttendanceAction::LoggedOut
            }
            _ => {
                sqlx::query("INSERT INTO log (employee_name, log_in_time) VALUES (?, ?)")
                    .bind(name)
                    .bind(at)
                    .execute(&mut *tx)
                    .await?;
                AttendanceAction::LoggedIn
            }
        };

        tx.commit().await?;
        Ok(action)
    }

    async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}
