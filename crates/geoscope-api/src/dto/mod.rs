//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::EventQuery;
pub use response::HealthResponse;
