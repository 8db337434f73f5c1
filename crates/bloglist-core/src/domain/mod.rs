//! Domain entities - the core business objects.

mod blog;
mod user;

pub use blog::{Blog, MAX_LIKES};
pub use user::{MIN_CREDENTIAL_LENGTH, User};
