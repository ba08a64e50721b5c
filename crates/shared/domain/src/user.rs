//! Registry user entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{GRADE_JUNIOR, GRADE_MIDDLE, GRADE_SENIOR, GRADE_TRAINEE};
use crate::error::{DomainError, DomainResult};

/// Seniority grade of an employee.
///
/// Exchanged over the API as its integer code (1-4) and stored as its
/// lowercase label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Grade {
    Trainee = 1,
    Junior = 2,
    Middle = 3,
    Senior = 4,
}

impl Grade {
    /// Integer code used on the wire
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Label used in storage
    pub fn label(self) -> &'static str {
        match self {
            Grade::Trainee => GRADE_TRAINEE,
            Grade::Junior => GRADE_JUNIOR,
            Grade::Middle => GRADE_MIDDLE,
            Grade::Senior => GRADE_SENIOR,
        }
    }

    /// Decode a stored label back into a grade
    pub fn from_label(label: &str) -> DomainResult<Self> {
        match label {
            GRADE_TRAINEE => Ok(Grade::Trainee),
            GRADE_JUNIOR => Ok(Grade::Junior),
            GRADE_MIDDLE => Ok(Grade::Middle),
            GRADE_SENIOR => Ok(Grade::Senior),
            other => Err(DomainError::UnknownGradeLabel(other.to_string())),
        }
    }
}

impl TryFrom<i32> for Grade {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Grade::Trainee),
            2 => Ok(Grade::Junior),
            3 => Ok(Grade::Middle),
            4 => Ok(Grade::Senior),
            other => Err(DomainError::UnknownGradeCode(other)),
        }
    }
}

impl From<Grade> for i32 {
    fn from(grade: Grade) -> Self {
        grade.code()
    }
}

impl FromStr for Grade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::from_label(s)
    }
}

/// Registry user as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Database-assigned identifier
    pub id: i32,
    pub name: String,
    pub surname: String,
    /// Grade code: 1 trainee, 2 junior, 3 middle, 4 senior
    #[cfg_attr(feature = "openapi", schema(value_type = i32))]
    pub position: Grade,
    pub project: String,
}

/// Data for inserting a user; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub position: Grade,
    pub project: String,
}

/// Partial update: only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub position: Option<Grade>,
    pub project: Option<String>,
}

impl UserPatch {
    /// Build a patch from request fields, treating empty strings as absent.
    ///
    /// Fails with [`DomainError::EmptyPatch`] when nothing is left to update.
    pub fn from_fields(
        name: Option<String>,
        surname: Option<String>,
        position: Option<Grade>,
        project: Option<String>,
    ) -> DomainResult<Self> {
        let patch = Self {
            name: non_empty(name),
            surname: non_empty(surname),
            position,
            project: non_empty(project),
        };

        if patch.is_empty() {
            return Err(DomainError::EmptyPatch);
        }
        Ok(patch)
    }

    /// Check if the patch touches no column
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.position.is_none()
            && self.project.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
