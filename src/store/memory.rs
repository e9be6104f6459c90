use super::Store;
use crate::error::AppError;
use crate::model::attendance::{AttendanceAction, AttendanceLog};
use crate::model::employee::{Employee, FaceEncoding};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    log: Vec<AttendanceLog>,
}

/// In-process store for tests.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    writes: Mutex<usize>,
    reachable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::default(),
            writes: Mutex::default(),
            reachable: AtomicBool::new(true),
        }
    }

    /// What `ping` reports from now on.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub fn log_entries(&self, name: &str) -> Vec<AttendanceLog> {
        let tables = self.tables.lock().unwrap();
        tables
            .log
            .iter()
            .filter(|entry| entry.employee_name == name)
            .cloned()
            .collect()
    }

    /// Number of inserts and updates performed so far.
    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn count_write(&self) {
        *self.writes.lock().unwrap() += 1;
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn employee_exists(&self, name: &str) -> Result<bool, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.employees.iter().any(|e| e.name == name))
    }

    async fn insert_employee(&self, name: &str, encoding: &FaceEncoding) -> Result<u64, AppError> {
        let id = {
            let mut tables = self.tables.lock().unwrap();
            if tables.employees.iter().any(|e| e.name == name) {
                return Err(AppError::DuplicateName);
            }
            let id = tables.employees.len() as u64 + 1;
            tables.employees.push(Employee {
                id,
                name: name.to_string(),
                encoding: encoding.clone(),
            });
            id
        };
        self.count_write();
        Ok(id)
    }

    async fn employees(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.tables.lock().unwrap().employees.clone())
    }

    async fn toggle_attendance(
        &self,
        name: &str,
        at: NaiveDateTime,
    ) -> Result<AttendanceAction, AppError> {
        let action = {
            let mut tables = self.tables.lock().unwrap();
            // Entries are appended in id order, so the last one for this name is the newest.
            let newest = tables
                .log
                .iter()
                .rposition(|entry| entry.employee_name == name);

            match newest {
                Some(i) if tables.log[i].is_open() => {
                    tables.log[i].log_out_time = Some(at);
                    AttendanceAction::LoggedOut
                }
                _ => {
                    let id = tables.log.len() as u64 + 1;
                    tables.log.push(AttendanceLog {
                        id,
                        employee_name: name.to_string(),
                        log_in_time: at,
                        log_out_time: None,
                    });
                    AttendanceAction::LoggedIn
                }
            }
        };
        self.count_write();
        Ok(action)
    }

    async fn ping(&self) -> bool {
        self.reachable.load(Ordering::SeqCst)
    }
}
