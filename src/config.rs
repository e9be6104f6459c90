use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    // Face-encoding sidecar
    pub face_service_url: String,
    pub face_service_timeout_ms: u64,

    // Rate limiting
    pub rate_register_per_min: u32,
    pub rate_attendance_per_min: u32,

    /// JSON payload limit; base64 photos are large.
    pub max_body_bytes: usize,

    pub log_dir: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            server_addr: env_or("SERVER_ADDR", "127.0.0.1:5000"),

            face_service_url: env_or("FACE_SERVICE_URL", "http://127.0.0.1:8001"),
            face_service_timeout_ms: env_parse("FACE_SERVICE_TIMEOUT_MS", 10_000)?,

            rate_register_per_min: env_parse("RATE_REGISTER_PER_MIN", 30)?,
            rate_attendance_per_min: env_parse("RATE_ATTENDANCE_PER_MIN", 120)?,

            max_body_bytes: env_parse("MAX_BODY_BYTES", 16 * 1024 * 1024)?,

            log_dir: env_or("LOG_DIR", "logs"),
            log_level: env_or("LOG_LEVEL", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_falls_back_to_default() {
        let value: u32 = env_parse("FACE_ATTENDANCE_TEST_UNSET_KEY", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_env_parse_rejects_garbage() {
        // SAFETY: the key is unique to this test.
        unsafe { env::set_var("FACE_ATTENDANCE_TEST_BAD_NUMBER", "twelve") };
        let result: Result<u32> = env_parse("FACE_ATTENDANCE_TEST_BAD_NUMBER", 1);
        assert!(result.is_err());
    }
}
