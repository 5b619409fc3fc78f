//! In-process stand-in for the remote cart service

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use dashmap::DashMap;
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// One canned response
#[derive(Debug, Clone)]
pub struct MockPage {
    pub status: StatusCode,
    pub body: String,
}

impl MockPage {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Pages served per cart id, plus a log of `(id, page)` requests
#[derive(Default)]
pub struct MockState {
    pub carts: DashMap<i64, Vec<MockPage>>,
    pub requests: Mutex<Vec<(i64, u32)>>,
}

impl MockState {
    pub fn requests(&self) -> Vec<(i64, u32)> {
        self.requests.lock().unwrap().clone()
    }
}

pub struct MockCartService {
    pub base_url: String,
    pub state: Arc<MockState>,
}

#[derive(Deserialize)]
struct CartQuery {
    id: i64,
    page: u32,
}

async fn carts_json(
    State(state): State<Arc<MockState>>,
    Query(query): Query<CartQuery>,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push((query.id, query.page));

    let page = state.carts.get(&query.id).and_then(|pages| {
        let index = (query.page as usize).checked_sub(1)?;
        pages.get(index).cloned()
    });

    match page {
        Some(page) => (
            page.status,
            [("content-type", "application/json")],
            page.body,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Starts the mock on an ephemeral local port.
pub async fn spawn(carts: Vec<(i64, Vec<MockPage>)>) -> MockCartService {
    let state = Arc::new(MockState::default());
    for (id, pages) in carts {
        state.carts.insert(id, pages);
    }

    let app = Router::new()
        .route("/carts.json", get(carts_json))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockCartService {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Builds a page body in the cart service's format.
pub fn page_body(
    products: &[(&str, f64, &str)],
    current_page: i64,
    per_page: i64,
    total: i64,
) -> String {
    let products: Vec<_> = products
        .iter()
        .map(|(name, price, collection)| {
            json!({ "name": name, "price": price, "collection": collection })
        })
        .collect();

    json!({
        "products": products,
        "pagination": {
            "current_page": current_page,
            "per_page": per_page,
            "total": total,
        }
    })
    .to_string()
}
