use serde::{ser::Error as _, Serialize, Serializer};

/// Filters for the server market product listing.
///
/// Every field is optional. Unset fields are left out of the query string,
/// while a set field is always sent, zero included.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ProductSearchRequest {
    /// CPU model name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cpu_benchmark: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cpu_benchmark: Option<u32>,
    /// Memory size in GB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_memory_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory_size: Option<u32>,
    /// Drive size in GB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_hdd_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hdd_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_hdd_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hdd_count: Option<u32>,
    /// Full text search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Monthly price
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite_price")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite_price")]
    pub max_price: Option<f64>,
}

// NaN and infinities have no JSON form and would otherwise vanish from the
// query as `null`.
fn finite_price<S: Serializer>(price: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match price {
        Some(p) if !p.is_finite() => Err(S::Error::custom(format!("price bound must be finite, got {}", p))),
        _ => price.serialize(serializer),
    }
}

impl ProductSearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn cpu_benchmark(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_cpu_benchmark = min;
        self.max_cpu_benchmark = max;
        self
    }

    pub fn memory_size(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_memory_size = min;
        self.max_memory_size = max;
        self
    }

    pub fn hdd_size(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_hdd_size = min;
        self.max_hdd_size = max;
        self
    }

    pub fn hdd_count(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_hdd_count = min;
        self.max_hdd_count = max;
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn price(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
