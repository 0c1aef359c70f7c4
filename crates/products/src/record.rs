//! Flat, serializable form of a product.
//!
//! Field names match the persisted file format (`nombre`, `precio`, ...).
//! Every field is optional at this layer so that a missing field is reported
//! as a domain error by `Product::from_record` instead of a decode failure.

use serde::{Deserialize, Serialize};

/// `tipo` value for electronic products.
pub const TYPE_ELECTRONIC: &str = "electronico";

/// `tipo` value for perishable (food) products.
pub const TYPE_PERISHABLE: &str = "alimenticio";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(rename = "cantidad", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Variant discriminator; absent (or unknown) means a generic product.
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(rename = "marca", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(
        rename = "fecha_caducidad",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<String>,
}
