pub mod telegram_auth;

pub use telegram_auth::*;
