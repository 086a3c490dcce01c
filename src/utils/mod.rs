pub mod jwt;
pub mod password;
pub mod time;
pub mod validate;

pub use password::PasswordEncoder;
pub use validate::{ValidatedJson, ValidatedQuery};
