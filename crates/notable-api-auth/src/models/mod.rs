//! Request and response DTOs for authentication endpoints.

pub mod requests;
pub mod responses;

pub use requests::LoginRequest;
pub use responses::{TokenResponse, UserInfo};
