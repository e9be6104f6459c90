use chrono::NaiveDateTime;
use serde::Serialize;

/// Row of the `log` table. `log_out_time` is null while the interval is open.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AttendanceLog {
    pub id: u64,
    pub employee_name: String,
    pub log_in_time: NaiveDateTime,
    pub log_out_time: Option<NaiveDateTime>,
}

impl AttendanceLog {
    pub fn is_open(&self) -> bool {
        self.log_out_time.is_none()
    }
}

/// Which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceAction {
    LoggedIn,
    LoggedOut,
}

impl AttendanceAction {
    pub fn verb(self) -> &'static str {
        match self {
            AttendanceAction::LoggedIn => "logged in",
            AttendanceAction::LoggedOut => "logged out",
        }
    }
}

/// Outcome of a successful attendance check.
#[derive(Debug, Clone)]
pub struct AttendanceEvent {
    pub employee_name: String,
    pub action: AttendanceAction,
    pub at: NaiveDateTime,
}

impl AttendanceEvent {
    pub fn message(&self) -> String {
        format!(
            "{} {} at {}",
            self.employee_name,
            self.action.verb(),
            self.at.format("%H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_message_uses_clock_time() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        let event = AttendanceEvent {
            employee_name: "alice".into(),
            action: AttendanceAction::LoggedOut,
            at,
        };
        assert_eq!(event.message(), "alice logged out at 09:05:07");
    }
}
