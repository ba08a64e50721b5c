//! Domain layer - Core registry entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod error;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{Grade, NewUser, User, UserPatch};
pub use validation::{LETTERS_ONLY, LETTERS_OR_EMPTY};
