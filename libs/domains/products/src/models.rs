use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Page size used when `limit` is absent or unusable
pub const DEFAULT_LIMIT: u64 = 20;

/// A catalog product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Unit price, always greater than zero
    pub price: f64,
    /// Units on hand, never negative
    pub stock: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    /// `false` once the product has been deleted
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Replace every editable field with `input`.
    ///
    /// `id`, `is_active` and `created_at` are left alone.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.stock = input.stock;
        self.category = input.category;
        self.image_url = input.image_url;
        self.touch();
    }

    pub fn set_stock(&mut self, stock: i32) {
        self.stock = stock;
        self.touch();
    }

    /// Soft delete. There is no way back.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Body of create and full-replacement update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0, message = "stock must be greater than or equal to 0"))]
    pub stock: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `PUT /products/{id}/stock`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct StockUpdate {
    #[validate(range(min = 0, message = "stock must be greater than or equal to 0"))]
    pub stock: i32,
}

/// Raw list query string.
///
/// Kept as text so that unusable `limit`/`offset` values can be ignored
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring of name or description
    pub search: Option<String>,
    /// Page size, positive integer (default 20)
    pub limit: Option<String>,
    /// Rows to skip, non-negative integer (default 0)
    pub offset: Option<String>,
}

/// Normalized list query. Only active products are ever listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl From<ListParams> for ProductFilter {
    fn from(params: ListParams) -> Self {
        let limit = params
            .limit
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|n| *n > 0)
            .map_or(DEFAULT_LIMIT, |n| n as u64);

        let offset = params
            .offset
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|n| *n >= 0)
            .map_or(0, |n| n as u64);

        Self {
            category: params.category.filter(|c| !c.is_empty()),
            search: params.search.filter(|s| !s.is_empty()),
            limit,
            offset,
        }
    }
}

/// Response of `GET /categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

/// Response of `PUT /products/{id}/stock`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockUpdated {
    pub message: String,
    pub stock: i32,
}

/// Plain confirmation message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
