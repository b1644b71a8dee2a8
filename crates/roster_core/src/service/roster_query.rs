//! Roster search, filter and sort.
//!
//! # Invariants
//! - Search is case-insensitive and matches `name` or `email`.
//! - Course filtering is exact equality.
//! - Search and course filters compose with logical AND.
//! - Sorting is stable, so ties keep insertion order.

use crate::model::course::Course;
use crate::model::student::Student;
use std::cmp::Ordering;

/// Ordering applied to query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Insertion,
    NameAsc,
    NameDesc,
    EnrollmentDateAsc,
    EnrollmentDateDesc,
    AgeAsc,
    AgeDesc,
}

/// Transient list-view query. Never authoritative state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterQuery {
    /// Matched as typed; only the empty term matches every student.
    pub search: Option<String>,
    pub course: Option<Course>,
    pub sort: SortOrder,
}

impl RosterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn course(mut self, course: Course) -> Self {
        self.course = Some(course);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Whether `student` passes both filters.
    pub fn matches(&self, student: &Student) -> bool {
        self.matches_search(student) && self.matches_course(student)
    }

    fn matches_search(&self, student: &Student) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        // Raw term, untrimmed: "" matches everything, " " needs a space.
        let needle = term.to_lowercase();
        student.name.to_lowercase().contains(&needle)
            || student.email.to_lowercase().contains(&needle)
    }

    fn matches_course(&self, student: &Student) -> bool {
        self.course.map_or(true, |course| student.course == course)
    }

    /// Filters then sorts `students`, which must be in insertion order.
    pub fn apply(&self, students: Vec<Student>) -> Vec<Student> {
        let mut filtered: Vec<Student> = students
            .into_iter()
            .filter(|student| self.matches(student))
            .collect();
        match self.sort {
            SortOrder::Insertion => {}
            SortOrder::NameAsc => filtered.sort_by(compare_names),
            SortOrder::NameDesc => filtered.sort_by(|a, b| compare_names(b, a)),
            SortOrder::EnrollmentDateAsc => {
                filtered.sort_by(|a, b| a.enrollment_date.cmp(&b.enrollment_date))
            }
            SortOrder::EnrollmentDateDesc => {
                filtered.sort_by(|a, b| b.enrollment_date.cmp(&a.enrollment_date))
            }
            SortOrder::AgeAsc => filtered.sort_by_key(|student| student.age),
            SortOrder::AgeDesc => filtered.sort_by(|a, b| b.age.cmp(&a.age)),
        }
        filtered
    }
}

fn compare_names(a: &Student, b: &Student) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}
