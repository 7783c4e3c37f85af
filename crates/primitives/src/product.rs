//! Product record handled by the repository

use serde::{Deserialize, Serialize};
use strata_core::RecordId;

use crate::error::{RepositoryError, RepositoryResult};

/// A catalog product
///
/// `id` is assigned by the store on add; the value passed to
/// [`ProductRepository::add_product`](crate::ProductRepository::add_product)
/// is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Record identifier within the product collection
    pub id: RecordId,
    /// Display name, never blank
    pub name: String,
    /// Category, never blank
    pub category: String,
    /// Price per unit, finite and non-negative
    pub unit_price: f64,
    /// Units on hand, non-negative
    pub units_in_stock: i32,
    /// Whether the product is no longer sold
    #[serde(default)]
    pub discontinued: bool,
}

impl Product {
    /// Create a product that is not yet stored
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        units_in_stock: i32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: category.into(),
            unit_price,
            units_in_stock,
            discontinued: false,
        }
    }

    /// Same product with a different id
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    /// Same product with the discontinued flag set
    pub fn with_discontinued(mut self, discontinued: bool) -> Self {
        self.discontinued = discontinued;
        self
    }

    /// Check the local record rules
    ///
    /// Runs before any store call on add and update.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::InvalidProduct`] naming the first rule broken.
    pub fn validate(&self) -> RepositoryResult<()> {
        if self.name.trim().is_empty() {
            return Err(RepositoryError::invalid_product("Name cannot be empty."));
        }
        if self.category.trim().is_empty() {
            return Err(RepositoryError::invalid_product("Category cannot be empty."));
        }
        if !self.unit_price.is_finite() {
            return Err(RepositoryError::invalid_product("UnitPrice must be a finite number."));
        }
        if self.unit_price < 0.0 {
            return Err(RepositoryError::invalid_product("UnitPrice cannot be negative."));
        }
        if self.units_in_stock < 0 {
            return Err(RepositoryError::invalid_product("UnitsInStock cannot be negative."));
        }
        Ok(())
    }
}
