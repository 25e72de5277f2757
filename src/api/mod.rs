pub mod client;
pub mod models;
pub mod response;

pub use client::RestClient;
pub use models::{ApiRequest, ApiResponse, Method};
pub use response::is_success;
