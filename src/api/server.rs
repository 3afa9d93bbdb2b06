use reqwest::Method;
use tokio_util::sync::CancellationToken;

use super::client::Transport;
use super::error::Result;
use super::response::Response;
use crate::models::Server;

pub const SERVER_PATH: &str = "server";

/// Server endpoints of the Robot webservice.
pub struct ServerService<'c, T: Transport> {
    client: &'c T,
}

impl<'c, T: Transport> ServerService<'c, T> {
    pub fn new(client: &'c T) -> Self {
        Self { client }
    }

    /// List every server on the account.
    pub async fn list_servers(&self, cancel: &CancellationToken) -> Result<(Vec<Server>, Response)> {
        let req = self.client.new_request(Method::GET, SERVER_PATH, None)?;
        let resp = self.client.execute(req, cancel).await?;
        let servers = resp.decode_list::<Server>()?;
        tracing::debug!("Found {} servers", servers.len());
        Ok((servers, resp))
    }

    pub async fn get_server(&self, server_number: u32, cancel: &CancellationToken) -> Result<(Server, Response)> {
        let path = format!("{}/{}", SERVER_PATH, server_number);
        let req = self.client.new_request(Method::GET, &path, None)?;
        let resp = self.client.execute(req, cancel).await?;
        let server = resp.decode_one::<Server>()?;
        Ok((server, resp))
    }
}
