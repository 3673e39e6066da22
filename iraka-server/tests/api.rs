// iraka-server/tests/api.rs
// End-to-end scenarios through the full router (oneshot, in-memory store)

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Method, Request, StatusCode, header};
use iraka_server::store::{StoreError, StoreResult};
use iraka_server::{Config, KvStore, MemoryStore, ServerState, api};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

const PREFIX: &str = "/make-server";

fn app() -> Router {
    api::build_app(ServerState::for_tests())
}

async fn call(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("{PREFIX}{path}"));
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_product(app: &Router, name: &str, stock: i64, price: i64) -> String {
    let (status, body) = call(
        app,
        Method::POST,
        "/productos",
        Some(json!({ "nombre": name, "precio": price, "stock": stock })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["producto"]["id"].as_str().unwrap().to_string()
}

async fn signup_and_login(app: &Router, email: &str) -> String {
    let (status, _) = call(
        app,
        Method::POST,
        "/auth/signup",
        Some(json!({ "email": email, "password": "secreto", "nombre": "Ana" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(
        app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": email, "password": "secreto" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["accessToken"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    // Also served outside the prefix
    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = call(&app, Method::GET, "/health/detailed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"]["status"], "ok");
}

#[tokio::test]
async fn test_sale_then_oversell_keeps_stock() {
    let app = app();
    let id = create_product(&app, "Mochila", 10, 100).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/kardex",
        Some(json!({ "productoId": id, "tipo": "venta", "cantidad": 3 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["movimiento"]["stockAnterior"], 10);
    assert_eq!(body["movimiento"]["stockNuevo"], 7);
    assert_eq!(body["movimiento"]["usuario"], "Sistema");

    let (status, body) = call(
        &app,
        Method::POST,
        "/kardex",
        Some(json!({ "productoId": id, "tipo": "venta", "cantidad": 20 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Stock insuficiente");

    let (_, body) = call(&app, Method::GET, &format!("/productos/{id}"), None, None).await;
    assert_eq!(body["producto"]["stock"], 7);

    let (_, body) = call(&app, Method::GET, &format!("/kardex/producto/{id}"), None, None).await;
    assert_eq!(body["movimientos"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_movement_attributed_to_session_user() {
    let app = app();
    let token = signup_and_login(&app, "ana@iraka.com").await;
    let id = create_product(&app, "Mochila", 0, 100).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/kardex",
        Some(json!({ "productoId": id, "tipo": "compra", "cantidad": "5" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["movimiento"]["usuario"], "Ana");
    assert_eq!(body["movimiento"]["stockNuevo"], 5);
}

#[tokio::test]
async fn test_movement_validation() {
    let app = app();
    let id = create_product(&app, "Mochila", 1, 100).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/kardex",
        Some(json!({ "productoId": id })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Faltan campos requeridos");

    let (status, body) = call(
        &app,
        Method::POST,
        "/kardex",
        Some(json!({ "productoId": id, "tipo": "entrada", "cantidad": 0 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Faltan campos requeridos");

    let (status, body) = call(
        &app,
        Method::POST,
        "/kardex",
        Some(json!({ "productoId": id, "tipo": "regalo", "cantidad": 1 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Tipo de movimiento inválido");

    let (status, body) = call(
        &app,
        Method::POST,
        "/kardex",
        Some(json!({ "productoId": "producto:missing", "tipo": "entrada", "cantidad": 1 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Producto no encontrado");

    let (_, body) = call(&app, Method::GET, "/kardex", None, None).await;
    assert!(body["movimientos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stock_summary() {
    let app = app();
    create_product(&app, "Mochila", 10, 100).await;
    create_product(&app, "Bolso", 5, 200).await;

    let (status, body) = call(&app, Method::GET, "/kardex/existencias", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["existencias"].as_array().unwrap().len(), 2);
    assert_eq!(body["resumen"]["totalProductos"], 2);
    assert_eq!(body["resumen"]["totalUnidades"], 15);
    assert_eq!(body["resumen"]["valorTotal"].as_f64(), Some(2000.0));
}

#[tokio::test]
async fn test_amounts_above_limit_rejected_on_create() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/productos",
        Some(json!({ "nombre": "Lingote", "precio": 1e20, "stock": 1_000_000_000_000i64 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = call(
        &app,
        Method::POST,
        "/facturas",
        Some(json!({ "total": 5e28 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(&app, Method::GET, "/kardex/existencias", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resumen"]["totalProductos"], 0);
}

#[tokio::test]
async fn test_out_of_range_stored_values_fail_cleanly() {
    let state = ServerState::for_tests();
    let store = state.store.clone();
    let app = api::build_app(state);
    let token = signup_and_login(&app, "ana@iraka.com").await;

    store
        .set(
            "producto:1-lingote",
            json!({
                "id": "producto:1-lingote",
                "nombre": "Lingote",
                "precio": 1e20,
                "stock": 1_000_000_000_000i64,
                "fechaCreacion": "2025-01-01T00:00:00Z"
            }),
        )
        .await
        .unwrap();
    for id in ["factura:1-a", "factura:1-b"] {
        store
            .set(
                id,
                json!({ "id": id, "total": 5e28, "fechaCreacion": "2025-01-01T00:00:00Z" }),
            )
            .await
            .unwrap();
    }

    let (status, body) = call(&app, Method::GET, "/kardex/existencias", None, None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());

    let (status, body) = call(&app, Method::GET, "/dashboard/stats", None, Some(&token)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());

    // The server keeps answering
    let (status, _) = call(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_signup() {
    let app = app();
    signup_and_login(&app, "ana@iraka.com").await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/auth/signup",
        Some(json!({ "email": "ana@iraka.com", "password": "otra", "nombre": "Ana B" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "El usuario ya existe");
}

#[tokio::test]
async fn test_login_session_round_trip() {
    let app = app();
    let token = signup_and_login(&app, "ana@iraka.com").await;

    let (status, body) = call(&app, Method::GET, "/auth/session", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "ana@iraka.com");
    assert!(body["user"].get("passwordHash").is_none());

    let (status, _) = call(&app, Method::POST, "/auth/logout", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&app, Method::GET, "/auth/session", None, Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_password() {
    let app = app();
    let token = signup_and_login(&app, "ana@iraka.com").await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "ana@iraka.com", "password": "nope" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Credenciales incorrectas");

    // Only the successful login left an activity entry
    let (_, body) = call(&app, Method::GET, "/actividad", None, Some(&token)).await;
    assert_eq!(body["actividades"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = app();
    for path in ["/inventarios", "/usuarios", "/actividad", "/dashboard/stats"] {
        let (status, body) = call(&app, Method::GET, path, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
        assert!(body["error"].is_string());
    }

    let (status, _) = call(&app, Method::GET, "/usuarios", None, Some("test-anon-key")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_json() {
    let app = app();
    let request = Request::post(format!("{PREFIX}/clientes"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "JSON inválido");
}

#[tokio::test]
async fn test_customer_crud() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/clientes",
        Some(json!({ "nombre": "Ana", "email": "ana@iraka.com", "ciudad": "Bogotá" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["cliente"]["id"].as_str().unwrap().to_string();
    let suffix = id.strip_prefix("cliente:").unwrap().to_string();

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/clientes/{suffix}"),
        Some(json!({ "telefono": "555" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cliente"]["telefono"], "555");
    assert_eq!(body["cliente"]["ciudad"], "Bogotá");

    let (_, body) = call(&app, Method::GET, "/clientes", None, None).await;
    assert_eq!(body["clientes"].as_array().unwrap().len(), 1);

    let (status, body) = call(&app, Method::DELETE, &format!("/clientes/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = call(&app, Method::GET, &format!("/clientes/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Cliente no encontrado");

    let (status, _) = call(
        &app,
        Method::PUT,
        "/clientes/cliente:0-missing",
        Some(json!({ "nombre": "X" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_all_products() {
    let app = app();
    create_product(&app, "Mochila", 1, 10).await;
    create_product(&app, "Bolso", 1, 10).await;

    let (status, body) = call(&app, Method::DELETE, "/productos/limpiar-todo", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eliminados"], 2);

    let (_, body) = call(&app, Method::GET, "/productos", None, None).await;
    assert!(body["productos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_order_lines_by_order() {
    let app = app();
    let (_, body) = call(
        &app,
        Method::POST,
        "/pedidos",
        Some(json!({ "clienteNombre": "Ana", "total": 300 })),
        None,
    )
    .await;
    let order_id = body["pedido"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["pedido"]["estado"], "Pendiente");

    let (status, body) = call(
        &app,
        Method::POST,
        "/lineas-pedido",
        Some(json!({
            "pedidoId": order_id,
            "productoId": "producto:1-a",
            "cantidad": 3,
            "precioUnitario": 100
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["linea"]["subtotal"].as_f64(), Some(300.0));

    let (status, body) = call(
        &app,
        Method::GET,
        &format!("/lineas-pedido/pedido/{order_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lineasPedido"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dashboard_and_inventory() {
    let app = app();
    let token = signup_and_login(&app, "ana@iraka.com").await;

    create_product(&app, "Mochila", 1, 10).await;
    call(
        &app,
        Method::POST,
        "/pedidos",
        Some(json!({ "clienteNombre": "Ana", "total": 50 })),
        None,
    )
    .await;
    call(
        &app,
        Method::POST,
        "/facturas",
        Some(json!({ "numero": "F-001", "total": 120.5 })),
        None,
    )
    .await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/inventarios",
        Some(json!({ "producto": "Mochila", "cantidad": 4 })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, body) = call(&app, Method::GET, "/dashboard/stats", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body["stats"];
    assert_eq!(stats["totalProductos"], 1);
    assert_eq!(stats["totalPedidos"], 1);
    assert_eq!(stats["totalFacturas"], 1);
    assert_eq!(stats["pedidosPendientes"], 1);
    assert_eq!(stats["totalVentas"].as_f64(), Some(120.5));

    let (_, body) = call(&app, Method::GET, "/actividad", None, Some(&token)).await;
    let actions: Vec<&str> = body["actividades"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|a| a["accion"].as_str())
        .collect();
    assert!(actions.contains(&"Actualizar Inventario"));
}

#[tokio::test]
async fn test_init_admin_and_user_admin() {
    let app = app();
    let (status, body) = call(&app, Method::POST, "/init/admin", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Usuario admin creado exitosamente");
    assert_eq!(body["user"]["rol"], "Admin");

    let (_, body) = call(&app, Method::POST, "/init/admin", None, None).await;
    assert_eq!(body["message"], "Usuario admin ya existe");

    let (_, body) = call(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "admin@irakaworld.com", "password": "Iraka2025" })),
        None,
    )
    .await;
    let token = body["accessToken"].as_str().unwrap().to_string();

    let (status, body) = call(&app, Method::GET, "/usuarios", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["usuarios"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].get("passwordHash").is_none());

    let (status, body) = call(
        &app,
        Method::PUT,
        "/usuarios/admin@irakaworld.com",
        Some(json!({ "nombre": "Admin Iraka" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["usuario"]["nombre"], "Admin Iraka");
}

/// Memory store that refuses every `actividad:` write
#[derive(Debug, Default)]
struct NoActivityStore(MemoryStore);

#[async_trait::async_trait]
impl KvStore for NoActivityStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        self.0.get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        if key.starts_with("actividad:") {
            let err = serde_json::from_str::<Value>("disk full").unwrap_err();
            return Err(StoreError::from(err));
        }
        self.0.set(key, value).await
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.0.delete(key).await
    }

    async fn scan_prefix(&self, prefix: &str) -> StoreResult<Vec<Value>> {
        self.0.scan_prefix(prefix).await
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "no-activity"
    }
}

#[tokio::test]
async fn test_activity_write_failure_does_not_fail_the_request() {
    let store: Arc<dyn KvStore> = Arc::new(NoActivityStore::default());
    let app = api::build_app(ServerState::with_store(Config::for_tests(), store.clone()));
    let token = signup_and_login(&app, "ana@iraka.com").await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/inventarios",
        Some(json!({ "producto": "Mochila", "cantidad": 4 })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, body) = call(&app, Method::GET, "/inventarios", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inventarios"].as_array().unwrap().len(), 1);

    let (_, body) = call(&app, Method::GET, "/actividad", None, Some(&token)).await;
    assert!(body["actividades"].as_array().unwrap().is_empty());
}
