//! Roster repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical student collection.
//! - Assign ids at creation time.
//!
//! # Invariants
//! - Ids are unique across the current roster.
//! - Iteration order is insertion order; update/delete never reorder.
//! - Unknown ids on update/delete leave the collection unchanged.

use crate::model::student::{NewStudent, Student, StudentId, StudentPatch};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for roster operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(StudentId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "student not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for roster CRUD operations.
pub trait RosterRepository {
    /// Stores `data` under a freshly assigned id and returns the record.
    fn create(&mut self, data: NewStudent) -> Student;
    /// Applies `patch` to the record with `id` and returns the updated record.
    fn update(&mut self, id: StudentId, patch: StudentPatch) -> RepoResult<Student>;
    /// Removes and returns the record with `id`.
    fn delete(&mut self, id: StudentId) -> RepoResult<Student>;
    fn get(&self, id: StudentId) -> Option<Student>;
    /// All records in insertion order.
    fn list(&self) -> Vec<Student>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed roster living for the lifetime of the running session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterRepository {
    students: Vec<Student>,
}

impl InMemoryRosterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|student| student.id == id)
    }

    fn next_id(&self) -> StudentId {
        loop {
            let id = Uuid::new_v4();
            if self.position(id).is_none() {
                return id;
            }
        }
    }
}

impl RosterRepository for InMemoryRosterRepository {
    fn create(&mut self, data: NewStudent) -> Student {
        let student = Student::from_new(self.next_id(), data);
        self.students.push(student.clone());
        student
    }

    fn update(&mut self, id: StudentId, patch: StudentPatch) -> RepoResult<Student> {
        let student = self
            .students
            .iter_mut()
            .find(|student| student.id == id)
            .ok_or(RepoError::NotFound(id))?;
        student.apply(patch);
        Ok(student.clone())
    }

    fn delete(&mut self, id: StudentId) -> RepoResult<Student> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.students.remove(index))
    }

    fn get(&self, id: StudentId) -> Option<Student> {
        self.students.iter().find(|student| student.id == id).cloned()
    }

    fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}
