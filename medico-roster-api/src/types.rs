use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Records ============

/// A persisted doctor record as returned by the remote store.
///
/// `id` is assigned by the store and immutable. Every other field is
/// tolerant of absence so a sparse record still decodes.
///
/// `age`, `salary` and `active` are submitted as free text but the remote
/// contract for their stored representation is unresolved: the store may
/// echo them back typed (integer, number, boolean) or as the original
/// strings. They are kept as raw JSON values and never interpreted
/// client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub salary: Option<Value>,
    #[serde(default)]
    pub active: Option<Value>,
}

// ============ Draft form ============

/// The in-progress, unsubmitted record composed in the create screen.
///
/// All eight fields are free-text strings, empty on construction. The draft
/// serializes as the flat JSON object POSTed to the backend verbatim: no
/// type coercion is performed, numeric and boolean-like fields travel as
/// the raw strings the user typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorDraft {
    pub name: String,
    pub surname: String,
    pub age: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub salary: String,
    pub active: String,
}

/// Names one field of a [`DoctorDraft`], for field-wise updates from input
/// controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Surname,
    Age,
    Specialty,
    Email,
    Phone,
    Salary,
    Active,
}

impl DraftField {
    /// All fields, in form order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Surname,
        Self::Age,
        Self::Specialty,
        Self::Email,
        Self::Phone,
        Self::Salary,
        Self::Active,
    ];

    /// The wire name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Age => "age",
            Self::Specialty => "specialty",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Salary => "salary",
            Self::Active => "active",
        }
    }
}

impl DoctorDraft {
    /// Replace one field's value. Never fails, no cross-field validation.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Surname => self.surname = value,
            DraftField::Age => self.age = value,
            DraftField::Specialty => self.specialty = value,
            DraftField::Email => self.email = value,
            DraftField::Phone => self.phone = value,
            DraftField::Salary => self.salary = value,
            DraftField::Active => self.active = value,
        }
    }

    /// Current value of one field.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Surname => &self.surname,
            DraftField::Age => &self.age,
            DraftField::Specialty => &self.specialty,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Salary => &self.salary,
            DraftField::Active => &self.active,
        }
    }

    /// Whether every field is non-empty, the only precondition a submission
    /// must satisfy.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        DraftField::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    /// Wire names of the fields that are still empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        DraftField::ALL
            .iter()
            .filter(|f| self.get(**f).is_empty())
            .map(|f| f.as_str())
            .collect()
    }
}

// ============ Response shapes ============

/// The tolerated shapes of the list response.
///
/// The backend may answer with a `{ "datos": [...] }` wrapper or with a
/// bare array. Anything else falls into the catch-all branch and degrades
/// to an empty collection instead of failing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload {
    /// Wrapper object with a named list field.
    Wrapped { datos: Vec<Doctor> },
    /// Bare list.
    Bare(Vec<Doctor>),
    /// Unrecognized shape; treated as empty.
    Other(Value),
}

impl ListPayload {
    /// The decoded collection, or `[]` for an unrecognized shape.
    #[must_use]
    pub fn into_doctors(self) -> Vec<Doctor> {
        match self {
            Self::Wrapped { datos } | Self::Bare(datos) => datos,
            Self::Other(_) => Vec::new(),
        }
    }
}

/// The tolerated shapes of the create response: the created record, a
/// `datos` wrapper around it, or an ack the client does not consume.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CreatePayload {
    Wrapped { datos: Doctor },
    Record(Doctor),
    Other(Value),
}

impl CreatePayload {
    /// The created record, when the response carried one.
    #[must_use]
    pub fn into_doctor(self) -> Option<Doctor> {
        match self {
            Self::Wrapped { datos } => Some(datos),
            Self::Record(doctor) => Some(doctor),
            Self::Other(_) => None,
        }
    }
}

/// Error body shape: failures may carry `{ "mensaje": "..." }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub mensaje: Option<String>,
}
