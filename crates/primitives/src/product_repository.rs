//! ProductRepository: product facade over a collection store
//!
//! ## Design
//!
//! Each operation is a short, fixed sequence of store calls. The first call
//! that fails ends the operation; its error is mapped to exactly one
//! [`RepositoryError`] and returned. Nothing is retried.
//!
//! | Operation        | Store calls                                              |
//! |------------------|----------------------------------------------------------|
//! | `add_product`    | collection_exists, [create_collection], generate_id, insert_element |
//! | `get_product`    | collection_exists, collection_element_exists, get_element |
//! | `remove_product` | collection_exists, collection_element_exists, delete_element |
//! | `update_product` | collection_exists, collection_element_exists, update_element |
//!
//! Product validation on add and update runs before the first store call.
//!
//! ## Thread Safety
//!
//! The repository holds no locks and no state beyond the store and the
//! collection name. Calls for one operation are issued one at a time;
//! consistency between concurrent operations is the store's job.

use strata_core::{CollectionStore, RecordId, StoreError, StoreOperation, StoreResult};
use tracing::{debug, info, warn};

use crate::error::{RepositoryError, RepositoryResult};
use crate::product::Product;
use crate::schema;

/// Collection products are stored in unless configured otherwise
pub const DEFAULT_COLLECTION: &str = "products";

/// Product repository over a collection store
///
/// # Example
///
/// ```ignore
/// use strata_primitives::{Product, ProductRepository};
/// use strata_storage::InMemoryCollectionStore;
///
/// let repo = ProductRepository::new(InMemoryCollectionStore::new());
/// let id = repo.add_product(&Product::new("Pen", "Office", 1.5, 10))?;
/// let pen = repo.get_product(id)?;
/// repo.remove_product(id)?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository<S> {
    store: S,
    collection: String,
}

impl<S: CollectionStore> ProductRepository<S> {
    /// Create a repository storing products in [`DEFAULT_COLLECTION`]
    pub fn new(store: S) -> Self {
        Self::with_collection(store, DEFAULT_COLLECTION)
    }

    /// Create a repository storing products in `collection`
    ///
    /// The name is not checked here. An invalid name surfaces as a
    /// [`RepositoryError::Store`] on the first operation.
    pub fn with_collection(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Name of the product collection
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Add a product and return its new id
    ///
    /// Creates the collection on first use. The `id` field of `product` is
    /// ignored; the store generates one.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::InvalidProduct`] if validation fails (no store call)
    /// - [`RepositoryError::Connection`] / [`RepositoryError::Store`] if a store call fails
    pub fn add_product(&self, product: &Product) -> RepositoryResult<RecordId> {
        self.validate(product)?;

        if !self.collection_exists()? {
            debug!(target: "strata::repository", collection = %self.collection, "Creating product collection");
            let created = self.store.create_collection(&self.collection);
            self.check(StoreOperation::CreateCollection, created)?;
        }

        let generated = self.store.generate_id(&self.collection);
        let id = self.check(StoreOperation::GenerateId, generated)?;
        debug!(target: "strata::repository", collection = %self.collection, id, "Generated product id");

        let record = schema::encode(&product.clone().with_id(id));
        let inserted = self.store.insert_element(&self.collection, id, record);
        self.check(StoreOperation::InsertElement, inserted)?;

        info!(target: "strata::repository", collection = %self.collection, id, name = %product.name, "Product added");
        Ok(id)
    }

    /// Fetch a product by id
    ///
    /// The fetch is issued even when the existence check reports the record
    /// absent. A connection issue on the fetch still wins over not-found.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::CollectionNotFound`] if the collection does not exist
    /// - [`RepositoryError::ProductNotFound`] if no record is stored under `id`
    /// - [`RepositoryError::MalformedRecord`] if the record does not decode
    /// - [`RepositoryError::Connection`] / [`RepositoryError::Store`] if a store call fails
    pub fn get_product(&self, id: RecordId) -> RepositoryResult<Product> {
        self.require_collection()?;
        let exists = self.element_exists(id)?;

        let fetched = self.store.get_element(&self.collection, id);
        let properties = match fetched {
            Err(err @ StoreError::ConnectionIssue { .. }) => {
                return Err(self.map_failure(StoreOperation::GetElement, err));
            }
            _ if !exists => return Err(self.product_not_found(id)),
            other => self.check(StoreOperation::GetElement, other)?,
        };

        schema::decode(id, &properties).map_err(|source| {
            let err = RepositoryError::MalformedRecord {
                collection: self.collection.clone(),
                id,
                source,
            };
            warn!(target: "strata::repository", collection = %self.collection, id, error = %err, "Stored product is malformed");
            err
        })
    }

    /// Remove a product by id
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::CollectionNotFound`] if the collection does not exist
    /// - [`RepositoryError::ProductNotFound`] if no record is stored under `id`
    /// - [`RepositoryError::Connection`] / [`RepositoryError::Store`] if a store call fails
    pub fn remove_product(&self, id: RecordId) -> RepositoryResult<()> {
        self.require_collection()?;
        self.require_element(id)?;

        let deleted = self.store.delete_element(&self.collection, id);
        self.check(StoreOperation::DeleteElement, deleted)?;

        info!(target: "strata::repository", collection = %self.collection, id, "Product removed");
        Ok(())
    }

    /// Replace the stored product with the same id
    ///
    /// Every stored property is rewritten from `product`.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::InvalidProduct`] if validation fails (no store call)
    /// - [`RepositoryError::CollectionNotFound`] if the collection does not exist
    /// - [`RepositoryError::ProductNotFound`] if no record is stored under `product.id`
    /// - [`RepositoryError::Connection`] / [`RepositoryError::Store`] if a store call fails
    pub fn update_product(&self, product: &Product) -> RepositoryResult<()> {
        self.validate(product)?;
        self.require_collection()?;
        self.require_element(product.id)?;

        let updated =
            self.store
                .update_element(&self.collection, product.id, schema::encode(product));
        self.check(StoreOperation::UpdateElement, updated)?;

        info!(target: "strata::repository", collection = %self.collection, id = product.id, "Product updated");
        Ok(())
    }

    // ========== Steps ==========

    fn validate(&self, product: &Product) -> RepositoryResult<()> {
        product.validate().map_err(|err| {
            warn!(target: "strata::repository", collection = %self.collection, error = %err, "Product rejected");
            err
        })
    }

    fn collection_exists(&self) -> RepositoryResult<bool> {
        let exists = self.store.collection_exists(&self.collection);
        let exists = self.check(StoreOperation::CollectionExists, exists)?;
        debug!(target: "strata::repository", collection = %self.collection, exists, "Checked collection");
        Ok(exists)
    }

    fn require_collection(&self) -> RepositoryResult<()> {
        if self.collection_exists()? {
            return Ok(());
        }
        let err = RepositoryError::CollectionNotFound {
            collection: self.collection.clone(),
        };
        warn!(target: "strata::repository", collection = %self.collection, "Product collection not found");
        Err(err)
    }

    fn element_exists(&self, id: RecordId) -> RepositoryResult<bool> {
        let exists = self.store.collection_element_exists(&self.collection, id);
        let exists = self.check(StoreOperation::CollectionElementExists, exists)?;
        debug!(target: "strata::repository", collection = %self.collection, id, exists, "Checked product");
        Ok(exists)
    }

    fn require_element(&self, id: RecordId) -> RepositoryResult<()> {
        if self.element_exists(id)? {
            Ok(())
        } else {
            Err(self.product_not_found(id))
        }
    }

    fn product_not_found(&self, id: RecordId) -> RepositoryError {
        warn!(target: "strata::repository", collection = %self.collection, id, "Product not found");
        RepositoryError::ProductNotFound {
            collection: self.collection.clone(),
            id,
        }
    }

    /// Map the result of one store call
    fn check<T>(&self, operation: StoreOperation, result: StoreResult<T>) -> RepositoryResult<T> {
        result.map_err(|err| self.map_failure(operation, err))
    }

    fn map_failure(&self, operation: StoreOperation, err: StoreError) -> RepositoryError {
        let mapped = RepositoryError::from_store(operation, err);
        warn!(target: "strata::repository", collection = %self.collection, %operation, error = %mapped, "Store call failed");
        mapped
    }
}
