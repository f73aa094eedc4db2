//! Request extractors: the authenticated user and the JSON object body.

pub mod payload;
pub mod user;

pub use payload::JsonObject;
pub use user::{CurrentUser, USER_ID_HEADER};
