//! SeaORM entities backing the PostgreSQL repositories.

pub mod blog;
pub mod user;
