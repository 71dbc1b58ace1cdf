pub mod password;
pub mod tokens;

pub use password::{hash_password, verify_password};
pub use tokens::TokenIssuer;
