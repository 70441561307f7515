//! PgProductRepository against a real PostgreSQL container.
//!
//! Run with `cargo test -p domain_products -- --ignored`.

use domain_products::{
    PgProductRepository, ProductError, ProductFilter, ProductInput, ProductRepository,
    ProductService, StockUpdate,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use test_utils::TestDatabase;

fn input(name: &str, description: &str, price: f64, category: Option<&str>) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        stock: 10,
        category: category.map(str::to_string),
        image_url: None,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_catalog_round_trip_on_postgres() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    assert_eq!(service.seed_sample_products().await.unwrap(), 5);
    assert_eq!(service.seed_sample_products().await.unwrap(), 0);

    let all = service
        .list_products(ProductFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 5);

    let coffee = service
        .list_products(ProductFilter {
            search: Some("COFFEE".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(coffee.len(), 1);
    assert_eq!(coffee[0].name, "Organic Coffee Beans");

    let by_description = service
        .list_products(ProductFilter {
            search: Some("ergonomics".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_description.len(), 1);

    let mut pages = Vec::new();
    for offset in [0, 2, 4] {
        let page = service
            .list_products(ProductFilter {
                limit: 2,
                offset,
                ..Default::default()
            })
            .await
            .unwrap();
        pages.push(page.len());
    }
    assert_eq!(pages, [2, 2, 1]);

    let mut categories = service.list_categories().await.unwrap();
    categories.sort();
    assert_eq!(
        categories,
        ["Electronics", "Food & Beverage", "Sports & Fitness"]
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_soft_delete_visibility_on_postgres() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo.clone());

    let vinyl = service
        .create_product(input("Vinyl", "Jazz record", 20.0, Some("Music")))
        .await
        .unwrap();
    service
        .create_product(input("Novel", "Paperback", 12.0, Some("Books")))
        .await
        .unwrap();

    service.delete_product(vinyl.id).await.unwrap();
    service.delete_product(vinyl.id).await.unwrap();

    assert!(matches!(
        service.get_product(vinyl.id).await,
        Err(ProductError::NotFound(_))
    ));
    assert_eq!(service.list_categories().await.unwrap(), ["Books"]);
    assert_eq!(repo.count().await.unwrap(), 2);

    let updated = service
        .update_product(vinyl.id, input("Vinyl LP", "Jazz record", 22.5, Some("Music")))
        .await
        .unwrap();
    assert!(!updated.is_active);
    assert_eq!(updated.name, "Vinyl LP");

    let stock = service
        .update_stock(vinyl.id, StockUpdate { stock: 0 })
        .await
        .unwrap();
    assert_eq!(stock, 0);

    let stored = repo.find_any(vinyl.id).await.unwrap().unwrap();
    assert_eq!(stored.stock, 0);
    assert_eq!(stored.price, 22.5);
    assert!(stored.updated_at >= stored.created_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_check_constraints_reject_bad_rows() {
    use domain_products::entity::{ActiveModel, Entity};

    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let product = repo
        .create(input("Kettle", "Steel", 25.0, None))
        .await
        .unwrap();

    let mut row: ActiveModel = Entity::find_by_id(product.id)
        .one(&db.connection)
        .await
        .unwrap()
        .unwrap()
        .into();
    row.stock = Set(-1);
    assert!(row.update(&db.connection).await.is_err());

    db.truncate("products").await;
    assert_eq!(repo.count().await.unwrap(), 0);
}
