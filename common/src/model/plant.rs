use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Server-assigned identifier of a plant.
///
/// The collection endpoint hands out either numeric or string ids depending on
/// the backing store, so both shapes are accepted and written back unchanged.
/// Numeric ids compare by value (`1` equals `1.0`); a number never equals a
/// string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlantId {
    Number(Number),
    Text(String),
}

impl PlantId {
    /// `0` and `""` do not identify anything; toggling with them is a no-op.
    pub fn is_falsy(&self) -> bool {
        match self {
            PlantId::Number(n) => n.as_f64() == Some(0.0),
            PlantId::Text(s) => s.is_empty(),
        }
    }
}

impl PartialEq for PlantId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PlantId::Number(a), PlantId::Number(b)) => a == b || a.as_f64() == b.as_f64(),
            (PlantId::Text(a), PlantId::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlantId::Number(n) => write!(f, "{}", n),
            PlantId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PlantId {
    fn from(value: u64) -> Self {
        PlantId::Number(value.into())
    }
}

impl From<&str> for PlantId {
    fn from(value: &str) -> Self {
        PlantId::Text(value.to_string())
    }
}

/// Stock flag of a plant.
///
/// On the wire this is the optional `inStock` boolean: a missing or `null`
/// value maps to `Unknown`, which is never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum StockStatus {
    #[default]
    Unknown,
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// `Unknown` reads as out of stock.
    pub fn is_in_stock(self) -> bool {
        matches!(self, StockStatus::InStock)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, StockStatus::Unknown)
    }

    /// Negates the collapsed value, so `Unknown` becomes `InStock`.
    pub fn toggled(self) -> Self {
        if self.is_in_stock() {
            StockStatus::OutOfStock
        } else {
            StockStatus::InStock
        }
    }
}

impl From<Option<bool>> for StockStatus {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => StockStatus::Unknown,
            Some(true) => StockStatus::InStock,
            Some(false) => StockStatus::OutOfStock,
        }
    }
}

impl From<StockStatus> for Option<bool> {
    fn from(value: StockStatus) -> Self {
        match value {
            StockStatus::Unknown => None,
            StockStatus::InStock => Some(true),
            StockStatus::OutOfStock => Some(false),
        }
    }
}

/// A plant record as stored by the collection endpoint.
///
/// Fields the page does not interpret (`image`, `price`, ...) are kept in
/// `extra` so a record serializes back exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlantId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "inStock", default, skip_serializing_if = "StockStatus::is_unknown")]
    pub stock: StockStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Plant {
    pub fn new(id: impl Into<PlantId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            stock: StockStatus::Unknown,
            extra: Map::new(),
        }
    }

    /// Image URL, when the server stored one.
    pub fn image(&self) -> Option<&str> {
        self.extra.get("image").and_then(Value::as_str)
    }

    /// Price, accepting both numeric and numeric-string values.
    pub fn price(&self) -> Option<f64> {
        match self.extra.get("price")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// A plant about to be created; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "inStock", default, skip_serializing_if = "StockStatus::is_unknown")]
    pub stock: StockStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewPlant {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
