//! Test helpers
//!
//! Mock implementations of the screen seams plus convenient factory
//! methods.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use medico_roster_api::{ApiError, Doctor, DoctorApi, DoctorDraft};

use crate::screens::ScreenContext;
use crate::traits::{ConfirmDialog, Notifier};
use crate::types::Notification;

// ===== MockDoctorApi =====

/// In-memory doctor store with scripted failures and call counting.
pub struct MockDoctorApi {
    doctors: Mutex<Vec<Doctor>>,
    next_id: AtomicI64,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    created_drafts: Mutex<Vec<DoctorDraft>>,
    fail_list: Mutex<Option<ApiError>>,
    fail_create: Mutex<Option<ApiError>>,
    fail_delete: Mutex<Option<ApiError>>,
}

impl MockDoctorApi {
    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        let next_id = doctors.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        Self {
            doctors: Mutex::new(doctors),
            next_id: AtomicI64::new(next_id),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            created_drafts: Mutex::new(Vec::new()),
            fail_list: Mutex::new(None),
            fail_create: Mutex::new(None),
            fail_delete: Mutex::new(None),
        }
    }

    pub fn set_fail_list(&self, err: Option<ApiError>) {
        *self.fail_list.lock().unwrap() = err;
    }

    pub fn set_fail_create(&self, err: Option<ApiError>) {
        *self.fail_create.lock().unwrap() = err;
    }

    pub fn set_fail_delete(&self, err: Option<ApiError>) {
        *self.fail_delete.lock().unwrap() = err;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Every draft received by `create_doctor`, in order.
    pub fn created_drafts(&self) -> Vec<DoctorDraft> {
        self.created_drafts.lock().unwrap().clone()
    }
}

#[async_trait]
impl DoctorApi for MockDoctorApi {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.fail_list.lock().unwrap().clone() {
            return Err(e);
        }
        Ok(self.doctors.lock().unwrap().clone())
    }

    async fn create_doctor(&self, draft: &DoctorDraft) -> Result<Option<Doctor>, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.fail_create.lock().unwrap().clone() {
            return Err(e);
        }
        self.created_drafts.lock().unwrap().push(draft.clone());

        // The store assigns the id and echoes the submitted strings back.
        let doctor = Doctor {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: draft.name.clone(),
            surname: draft.surname.clone(),
            specialty: draft.specialty.clone(),
            email: Some(draft.email.clone()),
            phone: Some(draft.phone.clone()),
            age: Some(serde_json::Value::String(draft.age.clone())),
            salary: Some(serde_json::Value::String(draft.salary.clone())),
            active: Some(serde_json::Value::String(draft.active.clone())),
        };
        self.doctors.lock().unwrap().push(doctor.clone());
        Ok(Some(doctor))
    }

    async fn delete_doctor(&self, id: i64) -> Result<(), ApiError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.fail_delete.lock().unwrap().clone() {
            return Err(e);
        }
        let mut doctors = self.doctors.lock().unwrap();
        let before = doctors.len();
        doctors.retain(|d| d.id != id);
        if doctors.len() == before {
            return Err(ApiError::Server {
                status: 404,
                mensaje: Some("registro no encontrado".to_string()),
            });
        }
        Ok(())
    }
}

// ===== MockNotifier =====

/// Records every notification the screens emit.
pub struct MockNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

// ===== MockConfirm =====

/// Answers every confirmation prompt with a scripted value.
pub struct MockConfirm {
    answer: AtomicBool,
    calls: AtomicUsize,
}

impl MockConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfirmDialog for MockConfirm {
    async fn confirm(&self, _title: &str, _message: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.load(Ordering::SeqCst)
    }
}

// ===== Factory methods =====

/// Context over an empty store; confirmation prompts answer "confirm".
pub fn create_test_context() -> (
    Arc<ScreenContext>,
    Arc<MockDoctorApi>,
    Arc<MockNotifier>,
    Arc<MockConfirm>,
) {
    test_context_with(Vec::new(), true)
}

/// Context over a pre-seeded store with a scripted confirmation answer.
pub fn test_context_with(
    doctors: Vec<Doctor>,
    confirm_answer: bool,
) -> (
    Arc<ScreenContext>,
    Arc<MockDoctorApi>,
    Arc<MockNotifier>,
    Arc<MockConfirm>,
) {
    let api = Arc::new(MockDoctorApi::with_doctors(doctors));
    let notifier = Arc::new(MockNotifier::new());
    let confirm = Arc::new(MockConfirm::new(confirm_answer));

    let ctx = Arc::new(ScreenContext::new(
        api.clone(),
        notifier.clone(),
        confirm.clone(),
    ));

    (ctx, api, notifier, confirm)
}

/// A doctor record as the store would return it.
pub fn sample_doctor(id: i64, name: &str, surname: &str) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        surname: surname.to_string(),
        specialty: "Cardio".to_string(),
        email: None,
        phone: None,
        age: None,
        salary: None,
        active: None,
    }
}

/// A fully filled draft.
pub fn complete_draft() -> DoctorDraft {
    DoctorDraft {
        name: "Ana".to_string(),
        surname: "Ruiz".to_string(),
        age: "30".to_string(),
        specialty: "Cardio".to_string(),
        email: "a@x.com".to_string(),
        phone: "123".to_string(),
        salary: "1000".to_string(),
        active: "true".to_string(),
    }
}
