//! Request extractors

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::{ItemIdPath, MemberIdPath, OrderIdPath, WishIdPath};
pub use validated::ValidatedJson;
