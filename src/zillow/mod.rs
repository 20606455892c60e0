pub(crate) mod api_list;
pub(crate) mod client;
pub(crate) mod models;
pub(crate) mod xml;
mod zillow_error;

pub use client::ZillowClient;
pub use models::DeepSearchParams;
pub use zillow_error::ZillowError;
