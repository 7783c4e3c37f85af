//! Property key schema for stored products
//!
//! Products are stored as flat string-to-string property maps. The same key
//! set is written on insert and update and read back on get:
//!
//! | Key            | Value                         |
//! |----------------|-------------------------------|
//! | `Id`           | record id, decimal            |
//! | `Name`         | product name                  |
//! | `Category`     | product category              |
//! | `UnitPrice`    | `f64`, shortest round-trip    |
//! | `UnitsInStock` | `i32`, decimal                |
//! | `Discontinued` | `"true"` or `"false"`         |
//!
//! Keys outside this set are ignored on decode.

use std::str::FromStr;

use strata_core::{Properties, RecordId};
use thiserror::Error;

use crate::product::Product;

/// Key for the record id
pub const ID: &str = "Id";
/// Key for the product name
pub const NAME: &str = "Name";
/// Key for the product category
pub const CATEGORY: &str = "Category";
/// Key for the unit price
pub const UNIT_PRICE: &str = "UnitPrice";
/// Key for the units in stock
pub const UNITS_IN_STOCK: &str = "UnitsInStock";
/// Key for the discontinued flag
pub const DISCONTINUED: &str = "Discontinued";

/// Every key [`encode`] writes, in table order
pub const KEYS: [&str; 6] = [ID, NAME, CATEGORY, UNIT_PRICE, UNITS_IN_STOCK, DISCONTINUED];

/// A stored property map that does not describe a product
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required key is absent
    #[error("missing property {key}")]
    MissingProperty {
        /// The absent key
        key: &'static str,
    },

    /// A value does not parse as the key's type
    #[error("property {key} has invalid value {value:?}")]
    InvalidValue {
        /// The offending key
        key: &'static str,
        /// The stored value
        value: String,
    },

    /// The stored `Id` differs from the id the record is stored under
    #[error("stored id {stored} does not match record id {expected}")]
    IdMismatch {
        /// Id the record was fetched by
        expected: RecordId,
        /// Id found in the properties
        stored: RecordId,
    },
}

/// Build the property map for a product
pub fn encode(product: &Product) -> Properties {
    let mut properties = Properties::new();
    properties.insert(ID.to_string(), product.id.to_string());
    properties.insert(NAME.to_string(), product.name.clone());
    properties.insert(CATEGORY.to_string(), product.category.clone());
    properties.insert(UNIT_PRICE.to_string(), product.unit_price.to_string());
    properties.insert(
        UNITS_IN_STOCK.to_string(),
        product.units_in_stock.to_string(),
    );
    properties.insert(DISCONTINUED.to_string(), product.discontinued.to_string());
    properties
}

/// Rebuild a product from the property map stored under `id`
///
/// # Errors
///
/// Returns a [`SchemaError`] if a key is missing, a value does not parse,
/// a price or stock value is negative or not finite, or the stored `Id`
/// is not `id`.
pub fn decode(id: RecordId, properties: &Properties) -> Result<Product, SchemaError> {
    let stored: RecordId = parse(properties, ID)?;
    if stored != id {
        return Err(SchemaError::IdMismatch {
            expected: id,
            stored,
        });
    }

    Ok(Product {
        id,
        name: text(properties, NAME)?.to_string(),
        category: text(properties, CATEGORY)?.to_string(),
        unit_price: parse_checked(properties, UNIT_PRICE, |p: &f64| {
            p.is_finite() && *p >= 0.0
        })?,
        units_in_stock: parse_checked(properties, UNITS_IN_STOCK, |n: &i32| *n >= 0)?,
        discontinued: parse(properties, DISCONTINUED)?,
    })
}

fn text<'a>(properties: &'a Properties, key: &'static str) -> Result<&'a str, SchemaError> {
    properties
        .get(key)
        .map(String::as_str)
        .ok_or(SchemaError::MissingProperty { key })
}

fn parse<T: FromStr>(properties: &Properties, key: &'static str) -> Result<T, SchemaError> {
    let value = text(properties, key)?;
    value.parse().map_err(|_| SchemaError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Parse a value that must also satisfy `valid`
fn parse_checked<T: FromStr>(
    properties: &Properties,
    key: &'static str,
    valid: impl Fn(&T) -> bool,
) -> Result<T, SchemaError> {
    let value: T = parse(properties, key)?;
    if valid(&value) {
        Ok(value)
    } else {
        Err(SchemaError::InvalidValue {
            key,
            value: text(properties, key)?.to_string(),
        })
    }
}
