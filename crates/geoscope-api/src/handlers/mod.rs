//! Route handlers.

pub mod dispatch;
pub mod events;
pub mod health;
