use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::MAX_PARTICIPANTS;
use crate::domain::booking::{Gender, NewParticipant};

/// Errors that can occur while processing the registration form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterFormError {
    #[error("the submitted form could not be read")]
    Malformed,
    #[error("please accept the participation terms and conditions")]
    TermsNotAccepted,
    #[error("at least one participant is required")]
    NoParticipants,
    #[error("a booking can have at most {MAX_PARTICIPANTS} participants, got {0}")]
    TooManyParticipants(usize),
    #[error("participant rows are incomplete")]
    MismatchedRows,
    #[error("participant {row} is missing a name")]
    EmptyName { row: usize },
    #[error("participant {row} needs a 10-digit mobile number")]
    InvalidMobile { row: usize },
    #[error("participant {row} has an invalid birth date")]
    InvalidBirthDate { row: usize },
    #[error("participant {row} has an invalid gender")]
    InvalidGender { row: usize },
}

/// Registration form posted from the booking page.
///
/// The participant columns arrive as repeated fields (`first_name=..&first_name=..`),
/// which `serde_html_form` collects into parallel vectors, one entry per
/// traveller.
#[derive(Debug, Deserialize)]
pub struct RegisterBookingForm {
    /// Destination slug the booking is for.
    pub destination: String,
    /// Package identifier within the destination.
    pub package: i32,
    /// Date-range label chosen in the planner.
    pub date: String,
    #[serde(default)]
    pub first_name: Vec<String>,
    #[serde(default)]
    pub last_name: Vec<String>,
    #[serde(default)]
    pub mobile: Vec<String>,
    #[serde(default)]
    pub birth_date: Vec<String>,
    #[serde(default)]
    pub gender: Vec<String>,
    /// Terms checkbox; present only when ticked.
    #[serde(default)]
    pub terms: Option<String>,
}

impl RegisterBookingForm {
    /// Parse an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, RegisterFormError> {
        serde_html_form::from_bytes(body).map_err(|_| RegisterFormError::Malformed)
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms.is_some()
    }

    /// Validate the parallel participant columns into domain payloads.
    pub fn participants(&self) -> Result<Vec<NewParticipant>, RegisterFormError> {
        if !self.terms_accepted() {
            return Err(RegisterFormError::TermsNotAccepted);
        }

        let count = self.first_name.len();
        if count == 0 {
            return Err(RegisterFormError::NoParticipants);
        }
        if count > MAX_PARTICIPANTS {
            return Err(RegisterFormError::TooManyParticipants(count));
        }
        if self.last_name.len() != count
            || self.mobile.len() != count
            || self.birth_date.len() != count
            || self.gender.len() != count
        {
            return Err(RegisterFormError::MismatchedRows);
        }

        let mut participants = Vec::with_capacity(count);
        for index in 0..count {
            let row = index + 1;

            let first_name = self.first_name[index].trim();
            let last_name = self.last_name[index].trim();
            if first_name.is_empty() || last_name.is_empty() {
                return Err(RegisterFormError::EmptyName { row });
            }

            let mobile = self.mobile[index].trim();
            if mobile.len() != 10 || !mobile.chars().all(|c| c.is_ascii_digit()) {
                return Err(RegisterFormError::InvalidMobile { row });
            }

            let birth_date = NaiveDate::parse_from_str(self.birth_date[index].trim(), "%Y-%m-%d")
                .map_err(|_| RegisterFormError::InvalidBirthDate { row })?;

            let gender = Gender::parse(self.gender[index].trim())
                .ok_or(RegisterFormError::InvalidGender { row })?;

            participants.push(NewParticipant {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                mobile: mobile.to_string(),
                birth_date,
                gender,
            });
        }

        Ok(participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urlencoded(pairs: &[(&str, &str)]) -> Vec<u8> {
        pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    key,
                    value.replace(' ', "+").replace('/', "%2F")
                )
            })
            .collect::<Vec<_>>()
            .join("&")
            .into_bytes()
    }

    fn two_participant_body() -> Vec<u8> {
        urlencoded(&[
            ("destination", "manali"),
            ("package", "3"),
            ("date", "Oct+10+-+Oct+17,+2025"),
            ("first_name", "Asha"),
            ("last_name", "Patel"),
            ("mobile", "9876543210"),
            ("birth_date", "1994-05-12"),
            ("gender", "Female"),
            ("first_name", "Rohan"),
            ("last_name", "Patel"),
            ("mobile", "9876500000"),
            ("birth_date", "1991-01-30"),
            ("gender", "Male"),
            ("terms", "on"),
        ])
    }

    #[test]
    fn repeated_fields_become_participant_rows() {
        let form = RegisterBookingForm::from_urlencoded(&two_participant_body())
            .expect("body should parse");

        assert_eq!(form.destination, "manali");
        assert_eq!(form.package, 3);

        let participants = form.participants().expect("rows should validate");
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].first_name, "Asha");
        assert_eq!(participants[0].gender, Gender::Female);
        assert_eq!(
            participants[1].birth_date,
            NaiveDate::from_ymd_opt(1991, 1, 30).unwrap()
        );
    }

    #[test]
    fn terms_must_be_accepted() {
        let body = urlencoded(&[
            ("destination", "manali"),
            ("package", "3"),
            ("date", "Oct+10+-+Oct+17,+2025"),
            ("first_name", "Asha"),
            ("last_name", "Patel"),
            ("mobile", "9876543210"),
            ("birth_date", "1994-05-12"),
            ("gender", "Female"),
        ]);
        let form = RegisterBookingForm::from_urlencoded(&body).expect("body should parse");

        assert_eq!(form.participants(), Err(RegisterFormError::TermsNotAccepted));
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let body = urlencoded(&[
            ("destination", "manali"),
            ("package", "3"),
            ("date", "Oct+10+-+Oct+17,+2025"),
            ("first_name", "Asha"),
            ("first_name", "Rohan"),
            ("last_name", "Patel"),
            ("mobile", "9876543210"),
            ("birth_date", "1994-05-12"),
            ("gender", "Female"),
            ("terms", "on"),
        ]);
        let form = RegisterBookingForm::from_urlencoded(&body).expect("body should parse");

        assert_eq!(form.participants(), Err(RegisterFormError::MismatchedRows));
    }

    #[test]
    fn mobile_numbers_must_be_ten_digits() {
        let body = urlencoded(&[
            ("destination", "manali"),
            ("package", "3"),
            ("date", "Oct+10+-+Oct+17,+2025"),
            ("first_name", "Asha"),
            ("last_name", "Patel"),
            ("mobile", "12345"),
            ("birth_date", "1994-05-12"),
            ("gender", "Female"),
            ("terms", "on"),
        ]);
        let form = RegisterBookingForm::from_urlencoded(&body).expect("body should parse");

        assert_eq!(
            form.participants(),
            Err(RegisterFormError::InvalidMobile { row: 1 })
        );
    }

    #[test]
    fn participant_count_is_bounded() {
        let mut pairs = vec![
            ("destination", "manali"),
            ("package", "3"),
            ("date", "Oct+10+-+Oct+17,+2025"),
            ("terms", "on"),
        ];
        for _ in 0..7 {
            pairs.push(("first_name", "Asha"));
            pairs.push(("last_name", "Patel"));
            pairs.push(("mobile", "9876543210"));
            pairs.push(("birth_date", "1994-05-12"));
            pairs.push(("gender", "Female"));
        }
        let form =
            RegisterBookingForm::from_urlencoded(&urlencoded(&pairs)).expect("body should parse");

        assert_eq!(
            form.participants(),
            Err(RegisterFormError::TooManyParticipants(7))
        );
    }
}
