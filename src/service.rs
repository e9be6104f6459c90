use crate::error::AppError;
use crate::face::{FaceExtractor, decode_image};
use crate::matching::find_match;
use crate::model::attendance::AttendanceEvent;
use crate::model::employee::FaceEncoding;
use crate::store::Store;
use chrono::{Local, NaiveDateTime, Timelike};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Longest accepted employee name, matching the `VARCHAR(50)` columns.
pub const MAX_NAME_LEN: usize = 50;

/// Registration and attendance over a store and a face extractor.
pub struct AttendanceService {
    store: Arc<dyn Store>,
    extractor: Arc<dyn FaceExtractor>,
    /// One mutex per employee name, held around each attendance toggle.
    toggle_locks: Cache<String, Arc<Mutex<()>>>,
}

impl AttendanceService {
    pub fn new(store: Arc<dyn Store>, extractor: Arc<dyn FaceExtractor>) -> Self {
        // No capacity bound: size-based eviction could drop a mutex that is
        // still held. Idle entries are never locked.
        let toggle_locks = Cache::builder()
            .time_to_idle(Duration::from_secs(600))
            .build();

        Self {
            store,
            extractor,
            toggle_locks,
        }
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Enrolls `name` with the first face found in the base64 `image`.
    pub async fn register(&self, name: &str, image: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::Validation(format!(
                "Name must be 1 to {MAX_NAME_LEN} characters"
            )));
        }

        let encoding = self.first_encoding(image).await?;

        if self.store.employee_exists(name).await? {
            return Err(AppError::DuplicateName);
        }

        let id = self.store.insert_employee(name, &encoding).await?;
        info!(employee_id = id, name, "Successfully registered employee");
        Ok(())
    }

    /// Identifies the face in `image` and toggles that employee's attendance.
    pub async fn check_attendance(&self, image: &str) -> Result<AttendanceEvent, AppError> {
        let query = self.first_encoding(image).await?;

        let employees = self.store.employees().await?;
        if employees.is_empty() {
            return Err(AppError::NoEmployeesRegistered);
        }

        let employee = find_match(&query, &employees).ok_or(AppError::FaceNotRecognized)?;
        debug!(employee_id = employee.id, name = %employee.name, "Face matched");

        let lock = self
            .toggle_locks
            .get_with(employee.name.clone(), async { Arc::new(Mutex::new(())) })
            .await;
        let _guard = lock.lock().await;

        let at = now();
        let action = self.store.toggle_attendance(&employee.name, at).await?;

        let event = AttendanceEvent {
            employee_name: employee.name.clone(),
            action,
            at,
        };
        info!("{}", event.message());
        Ok(event)
    }

    /// Decodes the image and encodes its first detected face.
    async fn first_encoding(&self, image: &str) -> Result<FaceEncoding, AppError> {
        let image = decode_image(image)?;

        let locations = self.extractor.face_locations(&image).await?;
        if locations.is_empty() {
            return Err(AppError::NoFaceDetected);
        }
        if locations.len() > 1 {
            debug!(faces = locations.len(), "Several faces detected, using the first");
        }

        let encodings = self.extractor.face_encodings(&image, &locations).await?;
        let Some(values) = encodings.into_iter().next() else {
            return Err(AppError::EncodingFailed);
        };
        FaceEncoding::try_from(values).map_err(|e| {
            warn!(error = %e, "Unusable encoding for the first face");
            AppError::EncodingFailed
        })
    }
}

/// Local wall-clock time at the `DATETIME` column's second precision.
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
