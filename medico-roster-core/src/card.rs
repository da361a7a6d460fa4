//! Record card rendering

use medico_roster_api::Doctor;

/// Avatar label when the record has no name.
const FALLBACK_INITIAL: char = 'M';

/// Pure summary of one record for rendering. No state, no behavior: the
/// delete trigger stays with the list screen, the card only presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCard {
    /// Identity, for the delete trigger the UI attaches.
    pub id: i64,
    /// "name surname".
    pub title: String,
    /// The specialty.
    pub subtitle: String,
    /// Avatar label: first character of the name, uppercased.
    pub initial: char,
    /// Optional detail line.
    pub email: Option<String>,
}

impl DoctorCard {
    #[must_use]
    pub fn from_doctor(doctor: &Doctor) -> Self {
        let initial = doctor
            .name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or(FALLBACK_INITIAL);

        Self {
            id: doctor.id,
            title: format!("{} {}", doctor.name, doctor.surname),
            subtitle: doctor.specialty.clone(),
            initial,
            email: doctor.email.clone(),
        }
    }
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        Self::from_doctor(doctor)
    }
}
