//! Student record model.
//!
//! # Responsibility
//! - Define the stored student record and its id-less creation payload.
//! - Provide partial-update semantics through `StudentPatch`.
//!
//! # Invariants
//! - `id` is assigned by the roster store and never changes afterwards.
//! - These types carry no validation; form input is checked in `crate::form`.

use crate::model::course::Course;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned to a student at creation time.
pub type StudentId = Uuid;

/// Student record held by the roster.
///
/// Serialized with the field names `id`, `name`, `email`, `age`, `course`
/// and `enrollmentDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub course: Course,
    /// ISO calendar date, e.g. `2024-01-15`.
    pub enrollment_date: String,
}

impl Student {
    /// Builds a stored record from a creation payload and an assigned id.
    pub fn from_new(id: StudentId, data: NewStudent) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            age: data.age,
            course: data.course,
            enrollment_date: data.enrollment_date,
        }
    }

    /// Applies every field present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(course) = patch.course {
            self.course = course;
        }
        if let Some(enrollment_date) = patch.enrollment_date {
            self.enrollment_date = enrollment_date;
        }
    }
}

/// Candidate record lacking an id, accepted by the roster's create path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub course: Course,
    pub enrollment_date: String,
}

/// Partial update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub course: Option<Course>,
    pub enrollment_date: Option<String>,
}

/// A full payload converts into a patch that overwrites every mutable field.
impl From<NewStudent> for StudentPatch {
    fn from(value: NewStudent) -> Self {
        Self {
            name: Some(value.name),
            email: Some(value.email),
            age: Some(value.age),
            course: Some(value.course),
            enrollment_date: Some(value.enrollment_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NewStudent, Student, StudentPatch};
    use crate::model::course::Course;
    use uuid::Uuid;

    fn sample() -> Student {
        Student::from_new(
            Uuid::new_v4(),
            NewStudent {
                name: "John Doe".to_string(),
                email: "john.doe@email.com".to_string(),
                age: 20,
                course: Course::ComputerScience,
                enrollment_date: "2024-01-15".to_string(),
            },
        )
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut student = sample();
        let before = student.clone();

        student.apply(StudentPatch {
            age: Some(22),
            ..StudentPatch::default()
        });

        assert_eq!(student.age, 22);
        assert_eq!(student.name, before.name);
        assert_eq!(student.email, before.email);
        assert_eq!(student.course, before.course);
        assert_eq!(student.enrollment_date, before.enrollment_date);
        assert_eq!(student.id, before.id);
    }

    #[test]
    fn full_payload_patch_overwrites_every_field_but_id() {
        let mut student = sample();
        let id = student.id;
        let replacement = NewStudent {
            name: "Jane Smith".to_string(),
            email: "jane.smith@email.com".to_string(),
            age: 19,
            course: Course::Mathematics,
            enrollment_date: "2024-01-20".to_string(),
        };

        student.apply(StudentPatch::from(replacement.clone()));
        assert_eq!(student, Student::from_new(id, replacement));
    }

    #[test]
    fn serialization_uses_camel_case_wire_fields() {
        let student = sample();
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["id"], student.id.to_string());
        assert_eq!(json["course"], "Computer Science");
        assert_eq!(json["enrollmentDate"], "2024-01-15");

        let decoded: Student = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, student);
    }
}
