//! Student create/edit form.
//!
//! # Responsibility
//! - Hold transient, discardable form input as typed by the user.
//! - Validate every field and collect per-field error messages.
//!
//! # Invariants
//! - Validation reports every failing field, not only the first one.
//! - Stored name/email values are trimmed.

use crate::model::course::{Course, CourseParseError};
use crate::model::student::{NewStudent, Student};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::{IntErrorKind, ParseIntError};

/// Inclusive lower bound for student age.
pub const MIN_AGE: i64 = 16;
/// Inclusive upper bound for student age.
pub const MAX_AGE: i64 = 100;
/// Minimum trimmed name length, in characters.
pub const MIN_NAME_CHARS: usize = 2;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));

/// Form fields, in the order they are rendered and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StudentField {
    Name,
    Email,
    Age,
    Course,
    EnrollmentDate,
}

impl StudentField {
    /// Input name used by the rendered form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Course => "course",
            Self::EnrollmentDate => "enrollmentDate",
        }
    }
}

/// Per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<StudentField, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, field: StudentField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    /// Message reported against `field`, if any.
    pub fn get(&self, field: StudentField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Drops the error for `field`, e.g. once the user edits that input.
    pub fn clear(&mut self, field: StudentField) {
        self.fields.remove(&field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (StudentField, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl Error for FormErrors {}

/// Raw form input for creating or editing a student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub age: String,
    pub course: String,
    pub enrollment_date: String,
}

impl StudentForm {
    /// Empty form for the "add student" view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing record for the "edit student" view.
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            age: student.age.to_string(),
            course: student.course.as_str().to_string(),
            enrollment_date: student.enrollment_date.clone(),
        }
    }

    /// Sets one field from its raw input value.
    pub fn set(&mut self, field: StudentField, value: impl Into<String>) {
        let value = value.into();
        match field {
            StudentField::Name => self.name = value,
            StudentField::Email => self.email = value,
            StudentField::Age => self.age = value,
            StudentField::Course => self.course = value,
            StudentField::EnrollmentDate => self.enrollment_date = value,
        }
    }

    /// Validates every field.
    ///
    /// # Errors
    /// Returns all failing fields with their user-facing messages.
    pub fn validate(&self) -> Result<NewStudent, FormErrors> {
        let mut errors = FormErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(StudentField::Name, "Name is required");
        } else if name.chars().count() < MIN_NAME_CHARS {
            errors.insert(
                StudentField::Name,
                format!("Name must be at least {MIN_NAME_CHARS} characters"),
            );
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(StudentField::Email, "Email is required");
        } else if !EMAIL_RE.is_match(email) {
            errors.insert(StudentField::Email, "Email is invalid");
        }

        let age = match parse_age(&self.age) {
            Ok(age) => Some(age),
            Err(message) => {
                errors.insert(StudentField::Age, message);
                None
            }
        };

        let course = match Course::parse(&self.course) {
            Ok(course) => Some(course),
            Err(CourseParseError::Empty) => {
                errors.insert(StudentField::Course, "Course is required");
                None
            }
            Err(CourseParseError::Unknown(_)) => {
                errors.insert(StudentField::Course, "Course is not offered");
                None
            }
        };

        let enrollment_date = self.enrollment_date.trim();
        if enrollment_date.is_empty() {
            errors.insert(StudentField::EnrollmentDate, "Enrollment date is required");
        }

        match (age, course) {
            (Some(age), Some(course)) if errors.is_empty() => Ok(NewStudent {
                name: name.to_string(),
                email: email.to_string(),
                age,
                course,
                enrollment_date: enrollment_date.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

fn parse_age(raw: &str) -> Result<u32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Age is required".to_string());
    }
    let value: i64 = trimmed.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => age_range_message(),
        _ => "Age must be a whole number".to_string(),
    })?;
    if !(MIN_AGE..=MAX_AGE).contains(&value) {
        return Err(age_range_message());
    }
    u32::try_from(value).map_err(|_| age_range_message())
}

fn age_range_message() -> String {
    format!("Age must be between {MIN_AGE} and {MAX_AGE}")
}

#[cfg(test)]
mod tests {
    use super::{parse_age, FormErrors, StudentField};

    #[test]
    fn parse_age_bounds_are_inclusive() {
        assert_eq!(parse_age("16"), Ok(16));
        assert_eq!(parse_age(" 100 "), Ok(100));
        assert!(parse_age("15").is_err());
        assert!(parse_age("101").is_err());
        assert!(parse_age("-20").is_err());
    }

    #[test]
    fn parse_age_rejects_fractions_and_words() {
        assert_eq!(parse_age("20.5"), Err("Age must be a whole number".to_string()));
        assert_eq!(parse_age("abc"), Err("Age must be a whole number".to_string()));
        assert_eq!(parse_age(""), Err("Age is required".to_string()));
    }

    #[test]
    fn parse_age_reports_huge_whole_numbers_as_out_of_range() {
        let range = Err("Age must be between 16 and 100".to_string());
        assert_eq!(parse_age("99999999999999999999"), range);
        assert_eq!(parse_age("-99999999999999999999"), range);
    }

    #[test]
    fn form_errors_display_in_field_order() {
        let mut errors = FormErrors::new();
        errors.insert(StudentField::Course, "Course is required");
        errors.insert(StudentField::Name, "Name is required");
        assert_eq!(
            errors.to_string(),
            "name: Name is required; course: Course is required"
        );

        errors.clear(StudentField::Name);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(StudentField::Name).is_none());
    }
}
