mod common;

use std::collections::HashMap;

use aqar_portal::backend::{BackendError, PortalBackend};
use aqar_portal::views::{render_company_grid, render_testimonial};
use aqar_portal::workflows::directory::{ApplicantType, CompanyQuery};
use aqar_portal::workflows::testimonials::TestimonialDraft;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use common::{http_backend, spawn_backend};

async fn filter_companies(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if params.get("bank_slug").map(String::as_str) != Some("bank_a") {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    assert_eq!(params.get("amount").map(String::as_str), Some("60000"));
    assert_eq!(
        params.get("applicant_type").map(String::as_str),
        Some("individual")
    );

    Ok(Json(json!({
        "items": [
            {
                "company_name": "Gulf Valuers",
                "logo_url": "https://cdn.example/gulf.png",
                "approved_limit": 120000,
                "apply_url": "/apply/gulf"
            },
            {
                "company_name": "Coast & Co",
                "profile_limit": 80000,
                "apply_url": "/apply/coast"
            }
        ]
    })))
}

async fn accept_testimonial(Json(payload): Json<Value>) -> Json<Value> {
    Json(json!({
        "name": payload["name"],
        "body": payload["experience"],
    }))
}

fn directory_router() -> Router {
    Router::new()
        .route("/client/filter_companies", get(filter_companies))
        .route("/api/testimonials", post(accept_testimonial))
}

#[tokio::test]
async fn company_filter_passes_query_and_decodes_partial_cards() {
    let base_url = spawn_backend(directory_router()).await;
    let backend = http_backend(&base_url);

    let query = CompanyQuery {
        bank_slug: "bank_a".to_string(),
        amount: 60_000.0,
        applicant_type: Some(ApplicantType::Individual),
        purpose: None,
    };
    assert!(query.is_searchable());

    let list = backend.filter_companies(&query).await.expect("items load");
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].approved_limit, Some(120_000.0));
    assert_eq!(list.items[1].logo_url, None);
    assert_eq!(list.items[1].profile_limit, Some(80_000.0));

    let html = render_company_grid(&list.items);
    assert!(html.contains("Gulf Valuers"));
    assert!(html.contains("bank-approved up to 120,000 OMR"));
    assert!(html.contains("company limit 80,000 OMR"));
    assert!(html.contains("Coast &amp; Co"));
}

#[tokio::test]
async fn unknown_bank_surfaces_a_status_error() {
    let base_url = spawn_backend(directory_router()).await;
    let backend = http_backend(&base_url);

    let query = CompanyQuery {
        bank_slug: "bank_z".to_string(),
        amount: 60_000.0,
        applicant_type: Some(ApplicantType::Individual),
        purpose: None,
    };
    let err = backend
        .filter_companies(&query)
        .await
        .expect_err("500 maps to a status error");
    assert!(matches!(err, BackendError::Status(500)));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Port 9 (discard) is unassigned on loopback in the test environment.
    let backend = http_backend("http://127.0.0.1:9");
    let query = CompanyQuery {
        bank_slug: "bank_a".to_string(),
        amount: 60_000.0,
        applicant_type: None,
        purpose: None,
    };
    let err = backend
        .filter_companies(&query)
        .await
        .expect_err("connection refused");
    assert!(matches!(err, BackendError::Transport(_)));
}

#[tokio::test]
async fn testimonial_round_trip_renders_escaped_snippet() {
    let base_url = spawn_backend(directory_router()).await;
    let backend = http_backend(&base_url);

    let draft = TestimonialDraft::from_form(
        Some("  Maha <admin>  "),
        Some("villa"),
        Some("5"),
        Some("fast & professional"),
    );
    let published = backend
        .submit_testimonial(&draft)
        .await
        .expect("testimonial accepted");
    assert_eq!(published.name, "Maha <admin>");
    assert_eq!(published.body, "fast & professional");

    let html = render_testimonial(&published);
    assert!(html.contains("Maha &lt;admin&gt;"));
    assert!(html.contains("fast &amp; professional"));
    assert!(!html.contains("<admin>"));
}
