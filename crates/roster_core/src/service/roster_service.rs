//! Roster use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD and query entry points for presentation callers.
//! - Gate form submissions behind validation before they reach the store.
//! - Emit metadata-only log events for roster mutations.
//!
//! # Invariants
//! - Service APIs never bypass repository id assignment.
//! - A rejected form submission leaves the roster unchanged.
//! - Log events never carry names or emails.

use crate::form::student_form::{FormErrors, StudentForm};
use crate::model::course::Course;
use crate::model::student::{NewStudent, Student, StudentId, StudentPatch};
use crate::repo::roster_repo::{InMemoryRosterRepository, RepoError, RepoResult, RosterRepository};
use crate::service::roster_query::RosterQuery;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for form-driven roster use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterServiceError {
    /// Form input failed validation; nothing was written.
    Validation(FormErrors),
    /// Repository-level failure, e.g. unknown id.
    Repo(RepoError),
}

impl Display for RosterServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid student form: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RosterServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<FormErrors> for RosterServiceError {
    fn from(value: FormErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for RosterServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for roster operations.
pub struct RosterService<R: RosterRepository> {
    repo: R,
}

impl RosterService<InMemoryRosterRepository> {
    /// Creates an empty in-memory roster.
    pub fn in_memory() -> Self {
        Self::new(InMemoryRosterRepository::new())
    }

    /// Creates an in-memory roster pre-filled with [`demo_roster`].
    pub fn with_demo_roster() -> Self {
        let mut service = Self::in_memory();
        for data in demo_roster() {
            service.create_student(data);
        }
        info!(
            "event=roster_seed module=roster status=ok count={}",
            service.len()
        );
        service
    }
}

impl<R: RosterRepository> RosterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a student without validating it.
    pub fn create_student(&mut self, data: NewStudent) -> Student {
        let student = self.repo.create(data);
        info!(
            "event=student_create module=roster status=ok student_id={}",
            student.id
        );
        student
    }

    /// Applies a partial update.
    ///
    /// Returns `RepoError::NotFound` for unknown ids; the roster is unchanged.
    pub fn update_student(&mut self, id: StudentId, patch: StudentPatch) -> RepoResult<Student> {
        match self.repo.update(id, patch) {
            Ok(student) => {
                info!("event=student_update module=roster status=ok student_id={id}");
                Ok(student)
            }
            Err(err) => {
                warn!(
                    "event=student_update module=roster status=error error_code=not_found student_id={id}"
                );
                Err(err)
            }
        }
    }

    /// Removes one student by id.
    ///
    /// Returns `RepoError::NotFound` for unknown ids; the roster is unchanged.
    pub fn delete_student(&mut self, id: StudentId) -> RepoResult<Student> {
        match self.repo.delete(id) {
            Ok(student) => {
                info!("event=student_delete module=roster status=ok student_id={id}");
                Ok(student)
            }
            Err(err) => {
                warn!(
                    "event=student_delete module=roster status=error error_code=not_found student_id={id}"
                );
                Err(err)
            }
        }
    }

    pub fn get_student(&self, id: StudentId) -> Option<Student> {
        self.repo.get(id)
    }

    /// All students in insertion order.
    pub fn list_students(&self) -> Vec<Student> {
        self.repo.list()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Students passing `query`'s filters, in `query`'s order.
    pub fn query(&self, query: &RosterQuery) -> Vec<Student> {
        query.apply(self.repo.list())
    }

    /// Distinct courses present in the roster, in first-appearance order.
    pub fn courses_in_use(&self) -> Vec<Course> {
        let mut courses = Vec::new();
        for student in self.repo.list() {
            if !courses.contains(&student.course) {
                courses.push(student.course);
            }
        }
        courses
    }

    /// Validates an "add student" form and stores the result.
    pub fn submit_new(&mut self, form: &StudentForm) -> Result<Student, RosterServiceError> {
        let data = form.validate().map_err(|errors| {
            warn!(
                "event=student_submit module=roster status=rejected mode=create invalid_fields={}",
                errors.len()
            );
            errors
        })?;
        Ok(self.create_student(data))
    }

    /// Validates an "edit student" form and replaces every field of `id`.
    pub fn submit_edit(
        &mut self,
        id: StudentId,
        form: &StudentForm,
    ) -> Result<Student, RosterServiceError> {
        let data = form.validate().map_err(|errors| {
            warn!(
                "event=student_submit module=roster status=rejected mode=edit invalid_fields={}",
                errors.len()
            );
            errors
        })?;
        Ok(self.update_student(id, StudentPatch::from(data))?)
    }
}

/// Demo students the application starts with when seeding is enabled.
pub fn demo_roster() -> Vec<NewStudent> {
    vec![
        NewStudent {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            age: 20,
            course: Course::ComputerScience,
            enrollment_date: "2024-01-15".to_string(),
        },
        NewStudent {
            name: "Jane Smith".to_string(),
            email: "jane.smith@email.com".to_string(),
            age: 19,
            course: Course::Mathematics,
            enrollment_date: "2024-01-20".to_string(),
        },
        NewStudent {
            name: "Mike Johnson".to_string(),
            email: "mike.johnson@email.com".to_string(),
            age: 21,
            course: Course::Physics,
            enrollment_date: "2024-02-01".to_string(),
        },
    ]
}
