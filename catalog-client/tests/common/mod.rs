//! In-process catalog backend for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use socketioxide::SocketIo;
use socketioxide::extract::{Data, SocketRef};

pub const TOKEN: &str = "test-token";
pub const PASSWORD: &str = "secret";
pub const EMAIL: &str = "ayse@example.com";
pub const KNOWN_CATALOG: &str = "c1";

/// Everything the backend saw
#[derive(Debug, Default)]
pub struct Recorded {
    pub product_list_calls: usize,
    pub product_forms: Vec<(String, String)>,
    pub deleted_products: Vec<String>,
    pub catalog_bodies: Vec<Value>,
    pub deleted_catalogs: Vec<String>,
    pub bulk_bodies: Vec<Value>,
    /// user ids received as `user_online` over Socket.IO
    pub presence: Vec<String>,
}

type Shared = Arc<Mutex<Recorded>>;
type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn rejected(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

fn check_auth(headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    let expected = format!("Bearer {}", TOKEN);
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(rejected(StatusCode::UNAUTHORIZED, "Token expired")),
    }
}

async fn login(State(_): State<Shared>, Json(body): Json<Value>) -> Reply {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        Ok(Json(json!({
            "token": TOKEN,
            "user": { "_id": "u1", "name": "Ayşe", "email": EMAIL }
        })))
    } else {
        Err(rejected(StatusCode::UNAUTHORIZED, "Invalid email or password"))
    }
}

async fn list_products(State(rec): State<Shared>, headers: HeaderMap) -> Reply {
    rec.lock().unwrap().product_list_calls += 1;
    check_auth(&headers)?;
    // p2 deliberately has no price
    Ok(Json(json!([
        { "_id": "p1", "name": "Chair", "price": 100, "stock": 5 },
        { "_id": "p2", "name": "Desk", "stock": 0, "barcode": "8690000000001" }
    ])))
}

fn form_record(headers: &HeaderMap, body: &Bytes) -> (String, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    (content_type, String::from_utf8_lossy(body).into_owned())
}

async fn create_product(State(rec): State<Shared>, headers: HeaderMap, body: Bytes) -> Reply {
    check_auth(&headers)?;
    rec.lock().unwrap().product_forms.push(form_record(&headers, &body));
    Ok(Json(json!({ "_id": "p3", "name": "Lamp", "price": 12.5, "stock": 3 })))
}

async fn update_product(
    State(rec): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    check_auth(&headers)?;
    rec.lock().unwrap().product_forms.push(form_record(&headers, &body));
    Ok(Json(json!({ "_id": id, "name": "Desk", "price": 80, "stock": 4 })))
}

async fn delete_product(State(rec): State<Shared>, Path(id): Path<String>, headers: HeaderMap) -> Reply {
    check_auth(&headers)?;
    rec.lock().unwrap().deleted_products.push(id);
    Ok(Json(json!({ "message": "Product deleted" })))
}

async fn create_catalog(State(rec): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    check_auth(&headers)?;
    rec.lock().unwrap().catalog_bodies.push(body);
    Ok(Json(json!({ "uuid": uuid::Uuid::new_v4().to_string() })))
}

async fn my_catalogs(headers: HeaderMap) -> Reply {
    check_auth(&headers)?;
    Ok(Json(json!({
        "catalogs": [
            { "uuid": "c1", "createdAt": "2025-03-01T09:30:00.000Z" },
            { "uuid": "c2", "createdAt": "2025-03-02T18:05:00.000Z" }
        ]
    })))
}

async fn get_catalog(Path(uuid): Path<String>) -> Reply {
    if uuid == KNOWN_CATALOG {
        Ok(Json(json!({
            "products": [
                { "_id": "p1", "name": "Chair", "price": 100, "stock": 5, "image": "https://cdn.local/chair.jpg" },
                { "_id": "p2", "name": "Desk", "price": 0, "stock": 0 }
            ]
        })))
    } else {
        Err(rejected(StatusCode::NOT_FOUND, "Catalog not found"))
    }
}

async fn delete_catalog(State(rec): State<Shared>, Path(uuid): Path<String>, headers: HeaderMap) -> Reply {
    check_auth(&headers)?;
    rec.lock().unwrap().deleted_catalogs.push(uuid);
    Ok(Json(json!({ "message": "Catalog deleted" })))
}

async fn bulk_delete(
    State(rec): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    check_auth(&headers)?;
    rec.lock().unwrap().bulk_bodies.push(body);
    Ok(StatusCode::NO_CONTENT)
}

async fn product_stats(headers: HeaderMap) -> Reply {
    check_auth(&headers)?;
    Ok(Json(json!({ "totalProducts": 2, "inStock": 1, "outOfStock": 1 })))
}

/// Start the backend on an ephemeral port; returns its base URL.
pub async fn spawn_backend() -> (String, Shared) {
    let recorded: Shared = Arc::default();

    let (socket_layer, io) = SocketIo::new_layer();
    let online = recorded.clone();
    io.ns("/", move |socket: SocketRef| {
        let online = online.clone();
        async move {
            socket.on("user_online", move |Data::<String>(user_id)| {
                let online = online.clone();
                async move {
                    online.lock().unwrap().presence.push(user_id);
                }
            });
        }
    });

    let app = Router::new()
        .route("/api/users/auth/login", post(login))
        .route("/api/users/stats/products", get(product_stats))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", put(update_product).delete(delete_product))
        .route("/api/catalogs", post(create_catalog))
        .route("/api/catalogs/my-catalogs", get(my_catalogs))
        .route("/api/catalogs/bulk-delete", delete(bulk_delete))
        .route("/api/catalogs/{uuid}", get(get_catalog).delete(delete_catalog))
        .with_state(recorded.clone())
        .layer(socket_layer);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}
