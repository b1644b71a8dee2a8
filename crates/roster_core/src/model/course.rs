//! Closed course catalogue.
//!
//! # Invariants
//! - The set of courses is fixed at compile time.
//! - `Course::ALL` order is the order selection inputs are populated in.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One of the fixed courses a student can enroll in.
///
/// Serialized as its display name, e.g. `"Computer Science"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Mathematics")]
    Mathematics,
    #[serde(rename = "Physics")]
    Physics,
    #[serde(rename = "Chemistry")]
    Chemistry,
    #[serde(rename = "Biology")]
    Biology,
    #[serde(rename = "Engineering")]
    Engineering,
    #[serde(rename = "Business Administration")]
    BusinessAdministration,
    #[serde(rename = "English Literature")]
    EnglishLiterature,
}

impl Course {
    /// Every offered course, in catalogue order.
    pub const ALL: [Course; 8] = [
        Course::ComputerScience,
        Course::Mathematics,
        Course::Physics,
        Course::Chemistry,
        Course::Biology,
        Course::Engineering,
        Course::BusinessAdministration,
        Course::EnglishLiterature,
    ];

    /// Stable display name, also used as the serialized value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::Mathematics => "Mathematics",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::Engineering => "Engineering",
            Self::BusinessAdministration => "Business Administration",
            Self::EnglishLiterature => "English Literature",
        }
    }

    /// Parses a course from its display name.
    ///
    /// Surrounding whitespace is ignored; the name itself must match exactly.
    pub fn parse(value: &str) -> Result<Self, CourseParseError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(CourseParseError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|course| course.as_str() == normalized)
            .ok_or_else(|| CourseParseError::Unknown(normalized.to_string()))
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course name parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseParseError {
    Empty,
    Unknown(String),
}

impl Display for CourseParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "course name is empty"),
            Self::Unknown(value) => write!(f, "course is not offered: `{value}`"),
        }
    }
}

impl Error for CourseParseError {}

#[cfg(test)]
mod tests {
    use super::{Course, CourseParseError};

    #[test]
    fn parse_roundtrips_every_catalogue_entry() {
        for course in Course::ALL {
            assert_eq!(Course::parse(course.as_str()), Ok(course));
        }
    }

    #[test]
    fn parse_trims_but_is_case_sensitive() {
        assert_eq!(Course::parse("  Physics "), Ok(Course::Physics));
        assert_eq!(
            Course::parse("physics"),
            Err(CourseParseError::Unknown("physics".to_string()))
        );
        assert_eq!(Course::parse("   "), Err(CourseParseError::Empty));
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Course::BusinessAdministration).unwrap();
        assert_eq!(json, "\"Business Administration\"");
    }
}
