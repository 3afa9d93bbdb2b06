#![allow(dead_code)]

use hrobot::{Client, Config};
use serde_json::{json, Map, Value};
use wiremock::MockServer;

pub const USERNAME: &str = "#ws+test";
pub const PASSWORD: &str = "s3cret";

pub fn client_for(server: &MockServer) -> Client {
    Client::new(Config::new(USERNAME, PASSWORD).with_base_url(&server.uri())).unwrap()
}

pub fn product_json(id: u32, cpu: &str, memory_size: u32) -> Value {
    json!({
        "id": id,
        "name": format!("SB{}", id),
        "description": [cpu, format!("{} GB DDR4 RAM", memory_size), "2x SSD SATA 480 GB"],
        "traffic": "unlimited",
        "dist": ["Rescue system", "Debian 12 base"],
        "arch": [64],
        "lang": ["en"],
        "cpu": cpu,
        "cpu_benchmark": 9870,
        "memory_size": memory_size,
        "hdd_size": 480,
        "hdd_text": "SSD",
        "hdd_count": 2,
        "datacenter": "FSN1-DC15",
        "network_speed": "1 Gbit/s",
        "price": "38.6555",
        "price_setup": "0.0000",
        "price_vat": "46.0000",
        "price_setup_vat": "0.0000",
        "fixed_price": false,
        "next_reduce": 1880,
        "next_reduce_date": "2024-03-05 11:52:44"
    })
}

pub fn server_json(number: u32, name: &str) -> Value {
    json!({
        "server_ip": "123.123.123.123",
        "server_number": number,
        "server_name": name,
        "product": "EX41-SSD",
        "dc": "FSN1-DC5",
        "traffic": "unlimited",
        "flatrate": true,
        "status": "ready",
        "throttled": false,
        "cancelled": false,
        "paid_until": "2024-12-31"
    })
}

pub fn wrap(key: &str, items: Vec<Value>) -> Value {
    Value::Array(
        items
            .into_iter()
            .map(|item| {
                let mut wrapper = Map::new();
                wrapper.insert(key.to_string(), item);
                Value::Object(wrapper)
            })
            .collect(),
    )
}
