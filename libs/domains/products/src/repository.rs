use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter, ProductInput};

/// Persistence boundary of the catalog.
///
/// `Ok(None)` means "no such row"; every `Err` is a store failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Active products matching `filter`, paginated, in store order
    async fn list_active(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Product by id, only if it is active
    async fn find_active(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Product by id regardless of `is_active`
    async fn find_any(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert a new active product
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Overwrite an existing row with `product`
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Distinct non-empty categories of active products
    async fn active_categories(&self) -> ProductResult<Vec<String>>;

    /// Number of rows, active or not
    async fn count(&self) -> ProductResult<u64>;
}

/// In-memory implementation of ProductRepository (for development/testing).
///
/// Ids start at 1 and iteration follows id order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    if !product.is_active {
        return false;
    }
    if let Some(category) = &filter.category {
        if product.category.as_deref() != Some(category.as_str()) {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let in_name = product.name.to_lowercase().contains(&needle);
        let in_description = product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle));
        if !in_name && !in_description {
            return false;
        }
    }
    true
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_active(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        Ok(products
            .values()
            .filter(|p| matches(p, &filter))
            .skip(usize::try_from(filter.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(filter.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn find_active(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).filter(|p| p.is_active).cloned())
    }

    async fn find_any(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let now = Utc::now();
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category: input.category,
            image_url: input.image_url,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        products.insert(id, product.clone());

        tracing::debug!(product_id = id, "Created product");
        Ok(product)
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn active_categories(&self) -> ProductResult<Vec<String>> {
        let products = self.products.read().await;

        let categories: BTreeSet<String> = products
            .values()
            .filter(|p| p.is_active)
            .filter_map(|p| p.category.clone())
            .filter(|c| !c.is_empty())
            .collect();

        Ok(categories.into_iter().collect())
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: Option<&str>) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: Some(format!("{name} description")),
            price: 10.0,
            stock: 1,
            category: category.map(str::to_string),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(input("A", None)).await.unwrap();
        let second = repo.create(input("B", None)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.is_active);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_inactive_rows_only_visible_to_find_any() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo.create(input("Hidden", Some("Misc"))).await.unwrap();
        product.deactivate();
        repo.save(product.clone()).await.unwrap();

        assert!(repo.find_active(product.id).await.unwrap().is_none());
        assert!(repo.find_any(product.id).await.unwrap().is_some());
        assert!(
            repo.list_active(ProductFilter::default())
                .await
                .unwrap()
                .is_empty()
        );
        assert!(repo.active_categories().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_filters_and_paginates() {
        let repo = InMemoryProductRepository::new();
        for (name, category) in [
            ("Kettle", Some("Kitchen")),
            ("Toaster", Some("Kitchen")),
            ("Lamp", Some("Home")),
            ("Pan", Some("Kitchen")),
        ] {
            repo.create(input(name, category)).await.unwrap();
        }

        let kitchen = ProductFilter {
            category: Some("Kitchen".to_string()),
            limit: 2,
            offset: 1,
            ..Default::default()
        };
        let names: Vec<String> = repo
            .list_active(kitchen)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Toaster", "Pan"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_over_name_and_description() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("Espresso Cup", None)).await.unwrap();
        let mut described = input("Grinder", None);
        described.description = Some("Burr grinder for ESPRESSO".to_string());
        repo.create(described).await.unwrap();
        repo.create(input("Teapot", None)).await.unwrap();

        let filter = ProductFilter {
            search: Some("espresso".to_string()),
            ..Default::default()
        };
        let found = repo.list_active(filter).await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_active_categories_are_distinct_and_non_empty() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("A", Some("Books"))).await.unwrap();
        repo.create(input("B", Some("Books"))).await.unwrap();
        repo.create(input("C", Some(""))).await.unwrap();
        repo.create(input("D", None)).await.unwrap();
        repo.create(input("E", Some("Games"))).await.unwrap();

        let mut categories = repo.active_categories().await.unwrap();
        categories.sort();
        assert_eq!(categories, ["Books", "Games"]);
    }
}
