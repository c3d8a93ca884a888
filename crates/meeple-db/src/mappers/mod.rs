//! Entity ↔ model conversions
//!
//! Status and role columns are stored as text; a value that fails to parse
//! is surfaced as a database corruption error rather than a panic.

mod notification;
mod order;
mod order_item;
mod user;
mod wish;
