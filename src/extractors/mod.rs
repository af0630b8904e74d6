mod context;
mod json;

pub use json::ApiJson;
