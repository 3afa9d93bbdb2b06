// Shared request/response plumbing
pub mod client;
pub mod envelope;
pub mod error;
pub mod options;
pub mod response;

// Endpoint services
pub mod order;
pub mod server;

// Re-export commonly used items
pub use client::{ApiRequest, Client, Transport};
pub use envelope::{decode_list, decode_one, Enveloped};
pub use error::{Error, Result};
pub use options::{add_options, query_pairs};
pub use response::Response;
pub use order::{OrderService, SERVER_MARKET_PRODUCT_PATH};
pub use server::{ServerService, SERVER_PATH};
