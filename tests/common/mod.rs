//! Shared test utilities: fixtures, a scripted in-memory backend and mock
//! server helpers.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use httpmock::Method::{GET, POST};
use httpmock::{Method, Mock, MockServer};

use bowlr::api::Backend;
use bowlr::models::{Item, OrderId, SelectionEntry, Totals};
use bowlr::{BowlError, Result};

/// Ingredient list served by the stub backend.
pub const INGREDIENTS_JSON: &str = include_str!("../fixtures/ingredients.json");
/// `/calculate` success body.
pub const CALCULATE_JSON: &str = include_str!("../fixtures/calculate.json");
/// `/order` success body.
pub const ORDER_JSON: &str = include_str!("../fixtures/order.json");

type TotalsFn = Box<dyn Fn(&[SelectionEntry]) -> Totals + Send + Sync>;

/// A call received by [`ScriptedBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Catalog,
    Totals(Vec<SelectionEntry>),
    Order(Vec<SelectionEntry>, Totals),
}

/// In-memory backend whose answers are set per test. Every call that has
/// no scripted answer fails with [`BowlError::Offline`].
#[derive(Default)]
pub struct ScriptedBackend {
    catalog: Option<Vec<Item>>,
    totals: Option<TotalsFn>,
    order_id: Option<OrderId>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, items: Vec<Item>) -> Self {
        self.catalog = Some(items);
        self
    }

    pub fn with_totals(
        mut self,
        totals: impl Fn(&[SelectionEntry]) -> Totals + Send + Sync + 'static,
    ) -> Self {
        self.totals = Some(Box::new(totals));
        self
    }

    pub fn with_order_id(mut self, id: OrderId) -> Self {
        self.order_id = Some(id);
        self
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn fetch_catalog(&self) -> Result<Vec<Item>> {
        self.record(Call::Catalog);
        self.catalog.clone().ok_or(BowlError::Offline)
    }

    async fn compute_totals(&self, items: &[SelectionEntry]) -> Result<Totals> {
        self.record(Call::Totals(items.to_vec()));
        self.totals
            .as_ref()
            .map(|f| f(items))
            .ok_or(BowlError::Offline)
    }

    async fn submit_order(&self, items: &[SelectionEntry], totals: &Totals) -> Result<OrderId> {
        self.record(Call::Order(items.to_vec(), *totals));
        self.order_id.ok_or(BowlError::Offline)
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

/// Parses the ingredient fixture.
pub fn fixture_items() -> Vec<Item> {
    serde_json::from_str(INGREDIENTS_JSON).expect("ingredient fixture is valid")
}

/// Mocks `method path` answering with a JSON `body` and status 200.
pub async fn mock_json<'a>(
    server: &'a MockServer,
    method: Method,
    path: &str,
    body: &str,
) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(method).path(path);
            then.status(200)
                .header("content-type", "application/json")
                .body(body);
        })
        .await
}

/// Starts a mock backend serving the ingredient, totals and order fixtures.
pub async fn fixture_server() -> MockServer {
    let server = MockServer::start_async().await;
    mock_json(&server, GET, "/ingredients", INGREDIENTS_JSON).await;
    mock_json(&server, POST, "/calculate", CALCULATE_JSON).await;
    mock_json(&server, POST, "/order", ORDER_JSON).await;
    server
}

/// A local URL nothing is listening on.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("ephemeral address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
