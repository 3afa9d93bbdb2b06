use serde::{Deserialize, Serialize};

use super::de::null_as_default;
use crate::api::envelope::Enveloped;

/// A server market offering.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-text description, one entry per line
    #[serde(deserialize_with = "null_as_default")]
    pub description: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub traffic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dist: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub arch: Vec<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub lang: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cpu: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cpu_benchmark: u32,
    /// Memory size in GB
    #[serde(deserialize_with = "null_as_default")]
    pub memory_size: u32,
    /// Size of a single drive in GB
    #[serde(deserialize_with = "null_as_default")]
    pub hdd_size: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub hdd_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hdd_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub datacenter: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network_speed: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price_setup: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price_vat: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price_setup_vat: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fixed_price: bool,
    /// Seconds until the next price reduction
    #[serde(deserialize_with = "null_as_default")]
    pub next_reduce: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub next_reduce_date: String,
}

impl Enveloped for Product {
    const ENVELOPE_KEY: &'static str = "product";
}
