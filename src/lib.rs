//! Typed client for the Hetzner Robot webservice.
//!
//! ```no_run
//! use hrobot::{Client, Config, ProductSearchRequest};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), hrobot::Error> {
//! let client = Client::new(Config::new("#ws+user", "password"))?;
//! let cancel = CancellationToken::new();
//!
//! let (servers, _) = client.server().list_servers(&cancel).await?;
//! for server in servers {
//!     println!("{} {}", server.server_number, server.server_ip);
//! }
//!
//! let filter = ProductSearchRequest::new().memory_size(Some(64), None);
//! let (products, _) = client.order().list_server_market_products(Some(&filter), &cancel).await?;
//! println!("{} matching products", products.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{Client, Error, Response, Result, Transport};
pub use config::Config;
pub use models::{Product, ProductSearchRequest, Server};
