use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de::null_as_default;
use crate::api::envelope::Enveloped;

/// A server ordered on the account.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Server {
    #[serde(deserialize_with = "null_as_default")]
    pub server_ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub server_number: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub server_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub traffic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub flatrate: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub throttled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cancelled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub paid_until: String,
}

impl Server {
    /// Parses `paid_until` (`YYYY-MM-DD`). Returns `None` when the API left it
    /// empty or sent something else.
    pub fn paid_until_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.paid_until.trim(), "%Y-%m-%d").ok()
    }
}

impl Enveloped for Server {
    const ENVELOPE_KEY: &'static str = "server";
}
