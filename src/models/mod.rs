mod de;
pub mod product;
pub mod product_search_request;
pub mod server;

pub use product::Product;
pub use product_search_request::ProductSearchRequest;
pub use server::Server;
