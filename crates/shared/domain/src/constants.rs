//! Domain-level constants.
//!
//! These constants define the registry's business vocabulary and validation rules.

// =============================================================================
// Grades
// =============================================================================

/// Storage label of the trainee grade
pub const GRADE_TRAINEE: &str = "trainee";

/// Storage label of the junior grade
pub const GRADE_JUNIOR: &str = "junior";

/// Storage label of the middle grade
pub const GRADE_MIDDLE: &str = "middle";

/// Storage label of the senior grade
pub const GRADE_SENIOR: &str = "senior";

// =============================================================================
// Validation
// =============================================================================

/// Names and surnames: one or more ASCII letters, whole string
pub const NAME_PATTERN: &str = r"^[A-Za-z]+$";

/// Same as `NAME_PATTERN`, but an empty value (field absent) passes
pub const OPTIONAL_NAME_PATTERN: &str = r"^[A-Za-z]*$";

/// Message returned when a name or surname fails the letter check
pub const INVALID_NAME_MESSAGE: &str = "invalid name and/or surname";

/// Message returned when a position code is not a known grade
pub const ILLEGAL_POSITION_MESSAGE: &str = "illegal position";
