//! SeaORM entities.

pub mod usr;
