use reqwest::Method;
use tokio_util::sync::CancellationToken;

use super::client::Transport;
use super::error::Result;
use super::options::add_options;
use super::response::Response;
use crate::models::{Product, ProductSearchRequest};

pub const SERVER_MARKET_PRODUCT_PATH: &str = "order/server_market/product";

/// Order endpoints of the Robot webservice.
pub struct OrderService<'c, T: Transport> {
    client: &'c T,
}

impl<'c, T: Transport> OrderService<'c, T> {
    pub fn new(client: &'c T) -> Self {
        Self { client }
    }

    /// List the products currently offered on the server market.
    /// Products come back in the order the webservice sent them.
    pub async fn list_server_market_products(
        &self,
        filter: Option<&ProductSearchRequest>,
        cancel: &CancellationToken,
    ) -> Result<(Vec<Product>, Response)> {
        let path = add_options(SERVER_MARKET_PRODUCT_PATH, filter)?;
        let req = self.client.new_request(Method::GET, &path, None)?;
        let resp = self.client.execute(req, cancel).await?;
        let products = resp.decode_list::<Product>()?;
        tracing::debug!("Found {} server market products", products.len());
        Ok((products, resp))
    }

    /// Fetch one server market product by id.
    pub async fn get_server_market_product(
        &self,
        product_id: u32,
        cancel: &CancellationToken,
    ) -> Result<(Product, Response)> {
        let path = format!("{}/{}", SERVER_MARKET_PRODUCT_PATH, product_id);
        let req = self.client.new_request(Method::GET, &path, None)?;
        let resp = self.client.execute(req, cancel).await?;
        let product = resp.decode_one::<Product>()?;
        Ok((product, resp))
    }
}
