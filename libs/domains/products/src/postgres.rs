use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect,
};

use crate::entity::{ActiveModel, Column, Entity};
use crate::error::ProductResult;
use crate::models::{Product, ProductFilter, ProductInput};
use crate::repository::ProductRepository;

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `ILIKE` pattern matching `term` anywhere in the column
fn contains_pattern(term: &str) -> String {
    format!("%{}%", term)
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_active(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let mut query = Entity::find().filter(Column::IsActive.eq(true));

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category));
        }

        if let Some(search) = filter.search {
            let pattern = contains_pattern(&search);
            query = query.filter(
                Condition::any()
                    .add(Expr::cust_with_values("name ILIKE $1", [pattern.clone()]))
                    .add(Expr::cust_with_values("description ILIKE $1", [pattern])),
            );
        }

        let models = query
            .limit(filter.limit)
            .offset(filter.offset)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_active(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = Entity::find_by_id(id)
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_any(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let model = ActiveModel::for_insert(input, Utc::now())
            .insert(&self.db)
            .await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let model: ActiveModel = product.into();
        let updated = model.update(&self.db).await?;
        Ok(updated.into())
    }

    async fn active_categories(&self) -> ProductResult<Vec<String>> {
        let categories = Entity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Category.is_not_null())
            .filter(Column::Category.ne(""))
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        Ok(categories)
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(Entity::find().count(&self.db).await?)
    }
}
