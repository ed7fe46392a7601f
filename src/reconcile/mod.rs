//! Upsert reconcilers for teams, repositories and webhooks.

pub mod hook;
pub mod repo;
pub mod team;
pub mod tolerant;

pub use hook::{ensure_hook, has_listener_hook};
pub use repo::upsert_repo;
pub use team::upsert_team;
pub use tolerant::tolerant;
