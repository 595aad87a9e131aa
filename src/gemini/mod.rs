pub mod config;
pub mod mime;
pub mod request;
pub mod types;

pub use request::{RequestBuilder, RequestOptions};
