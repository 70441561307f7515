//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Service API",
        version = "1.0.0",
        description = "Product catalog: browse, search, create, update, soft delete and stock management",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5002", description = "Local development server")
    ),
    paths(crate::api::health::ready),
    tags(
        (name = "health", description = "Service probes")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for the product service
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_products::ApiDoc::openapi());
        doc
    }
}
