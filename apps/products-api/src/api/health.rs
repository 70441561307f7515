//! Readiness endpoint. Liveness (`/health`) comes from `axum_helpers::health_router`.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::{Value, json};

use crate::state::AppState;

/// Readiness of the service
///
/// Only the record store gates readiness; the keystore entry is informational.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Record store reachable"),
        (status = 503, description = "Record store unreachable")
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    let (status, Json(mut body)) = match run_health_checks(checks).await {
        Ok(ready) => ready,
        Err(not_ready) => not_ready,
    };

    let keystore = if state.keystore.is_some() {
        "connected"
    } else {
        "unavailable"
    };
    body["keystore"] = json!(keystore);

    (status, Json(body))
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value as DbValue};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn state(db: MockDatabase) -> AppState {
        AppState {
            config: temp_env::with_vars_unset(["SHUTDOWN_TIMEOUT_SECS", "PORT"], || {
                Config::from_env().unwrap()
            }),
            db: db.into_connection(),
            keystore: None,
        }
    }

    async fn get_ready(state: AppState) -> (StatusCode, Value) {
        let response = router(state)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let mut row = BTreeMap::new();
        row.insert("?column?", DbValue::Int(Some(1)));
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row]]);

        let (status, body) = get_ready(state(db)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
        assert_eq!(body["keystore"], "unavailable");
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())]);

        let (status, body) = get_ready(state(db)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["database"], "disconnected");
    }
}
