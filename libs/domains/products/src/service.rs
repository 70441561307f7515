use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, ProductInput, StockUpdate};
use crate::repository::ProductRepository;
use crate::seed::sample_products;

/// Catalog rules on top of a [`ProductRepository`]
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

fn validate<T: Validate>(input: &T) -> ProductResult<()> {
    input
        .validate()
        .map_err(|e| ProductError::Validation(e.to_string()))
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Active products matching `filter`
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list_active(filter).await
    }

    /// Active product by id; deleted products are reported as not found
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_active(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        validate(&input)?;
        self.repository.create(input).await
    }

    /// Replace all editable fields. Works on deleted products too.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: ProductInput) -> ProductResult<Product> {
        validate(&input)?;

        let mut product = self.find_any(id).await?;
        product.apply(input);
        self.repository.save(product).await
    }

    /// Soft delete; deleting twice is not an error
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        let mut product = self.find_any(id).await?;
        product.deactivate();
        self.repository.save(product).await?;

        tracing::info!(product_id = id, "Product deactivated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ProductResult<Vec<String>> {
        self.repository.active_categories().await
    }

    /// Set the stock level and return the stored value. Works on deleted products too.
    #[instrument(skip(self))]
    pub async fn update_stock(&self, id: i64, update: StockUpdate) -> ProductResult<i32> {
        validate(&update)?;

        let mut product = self.find_any(id).await?;
        product.set_stock(update.stock);
        let saved = self.repository.save(product).await?;
        Ok(saved.stock)
    }

    /// Insert the sample catalog if the store has no rows at all.
    ///
    /// Returns how many products were inserted.
    #[instrument(skip(self))]
    pub async fn seed_sample_products(&self) -> ProductResult<usize> {
        if self.repository.count().await? > 0 {
            tracing::debug!("Products already present, skipping seed");
            return Ok(0);
        }

        let samples = sample_products();
        let total = samples.len();
        for input in samples {
            self.repository.create(input).await?;
        }

        tracing::info!(count = total, "Sample products seeded");
        Ok(total)
    }

    async fn find_any(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_any(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}
