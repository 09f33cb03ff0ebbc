//! Authentication: Argon2 password hashing and session helpers.

#[cfg(feature = "server")]
mod password;
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::session_user_id;
pub use session::SESSION_USER_ID_KEY;
