use anyhow::{Context, Result};
use sqlx::MySqlPool;
use tracing::info;

const CREATE_EMPLOYEES: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(50) NOT NULL,
    face_encoding BLOB NOT NULL,
    UNIQUE KEY uq_employees_name (name)
)
"#;

const CREATE_LOG: &str = r#"
CREATE TABLE IF NOT EXISTS log (
    id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    employee_name VARCHAR(50) NOT NULL,
    log_in_time DATETIME NOT NULL,
    log_out_time DATETIME NULL,
    KEY idx_log_employee (employee_name, id)
)
"#;

pub async fn init_db(database_url: &str) -> Result<MySqlPool> {
    let pool = MySqlPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    for ddl in [CREATE_EMPLOYEES, CREATE_LOG] {
        sqlx::query(ddl)
            .execute(&pool)
            .await
            .context("Failed to create schema")?;
    }
    info!("Database schema ready");

    Ok(pool)
}
