use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use sea_orm::DbErr;
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use usuarios::app_module::{build_container, build_router};
use usuarios::infrastructure::Database;
use usuarios::modules::user::{User, UserRepository};
use usuarios::{ContainerBuilder, Result};

struct TestApp {
    router: Router,
    _dir: TempDir,
}

async fn spawn_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("usuarios.db").display()
    );
    let database = Database::connect(&url).await.unwrap();
    database.ensure_schema().await.unwrap();

    let container = build_container(&database).unwrap();
    let router = build_router(&container).unwrap();
    TestApp { router, _dir: dir }
}

impl TestApp {
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create(&self, cedula: &str, nombre: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/usuarios",
            Some(json!({ "cedula": cedula, "nombre": nombre })),
        )
        .await
    }
}

#[tokio::test]
async fn test_create_get_delete_roundtrip() {
    let app = spawn_app().await;

    let (status, body) = app.create("123", "Ana").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "message": "Usuario creado", "cedula": "123", "nombre": "Ana" })
    );

    let (status, body) = app.send(Method::GET, "/usuarios/123", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "cedula": "123", "nombre": "Ana" }));

    let (status, body) = app.send(Method::DELETE, "/usuarios/123", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Usuario eliminado" }));

    let (status, body) = app.send(Method::GET, "/usuarios/123", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Usuario no encontrado" }));
}

#[tokio::test]
async fn test_duplicate_cedula_fails() {
    let app = spawn_app().await;

    let (status, _) = app.create("123", "Ana").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.create("123", "Beatriz").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error al crear el usuario" }));

    let (_, body) = app.send(Method::GET, "/usuarios/123", None).await;
    assert_eq!(body["nombre"], "Ana");
}

#[tokio::test]
async fn test_list_returns_every_user() {
    let app = spawn_app().await;

    let (status, body) = app.send(Method::GET, "/usuarios", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    for (cedula, nombre) in [("1", "Ana"), ("2", "Luis"), ("3", "Marta")] {
        let (status, _) = app.create(cedula, nombre).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.send(Method::GET, "/usuarios", None).await;
    assert_eq!(status, StatusCode::OK);
    let users: Vec<User> = serde_json::from_value(body).unwrap();
    assert_eq!(users.len(), 3);
    assert!(users.contains(&User::new("2", "Luis")));
}

#[tokio::test]
async fn test_update_existing_user() {
    let app = spawn_app().await;
    app.create("123", "Ana").await;

    let (status, body) = app
        .send(
            Method::PUT,
            "/usuarios/123",
            Some(json!({ "nombre": "Ana María" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Usuario actualizado", "cedula": "123", "nombre": "Ana María" })
    );

    let (_, body) = app.send(Method::GET, "/usuarios/123", None).await;
    assert_eq!(body, json!({ "cedula": "123", "nombre": "Ana María" }));
}

#[tokio::test]
async fn test_update_missing_user_leaves_table_unchanged() {
    let app = spawn_app().await;
    app.create("1", "Ana").await;

    let (status, body) = app
        .send(Method::PUT, "/usuarios/999", Some(json!({ "nombre": "Nadie" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Usuario no encontrado" }));

    let (_, body) = app.send(Method::GET, "/usuarios", None).await;
    assert_eq!(body, json!([{ "cedula": "1", "nombre": "Ana" }]));
}

#[tokio::test]
async fn test_delete_missing_user_is_404() {
    let app = spawn_app().await;

    let (status, body) = app.send(Method::DELETE, "/usuarios/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Usuario no encontrado" }));
}

#[tokio::test]
async fn test_missing_fields_reach_storage() {
    let app = spawn_app().await;

    let (status, body) = app
        .send(Method::POST, "/usuarios", Some(json!({ "cedula": "123" })))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error al crear el usuario" }));

    let (_, body) = app.send(Method::GET, "/usuarios", None).await;
    assert_eq!(body, json!([]));

    let (status, body) = app
        .send(Method::PUT, "/usuarios/999", Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Usuario no encontrado" }));
}

#[tokio::test]
async fn test_update_without_nombre_fails_on_existing_user() {
    let app = spawn_app().await;
    app.create("123", "Ana").await;

    let (status, body) = app
        .send(Method::PUT, "/usuarios/123", Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error al actualizar el usuario" }));

    let (_, body) = app.send(Method::GET, "/usuarios/123", None).await;
    assert_eq!(body, json!({ "cedula": "123", "nombre": "Ana" }));
}

#[tokio::test]
async fn test_unparsable_bodies_use_generic_message() {
    let app = spawn_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/usuarios")
        .body(Body::from(r#"{"cedula":"1","nombre":"Ana"}"#))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Error al crear el usuario" }));

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/usuarios/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Error al actualizar el usuario" }));

    let (_, body) = app.send(Method::GET, "/usuarios", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_cors_headers_present() {
    let app = spawn_app().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/usuarios")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_answered() {
    let app = spawn_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/usuarios/123")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "*");
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "*");
}

struct BrokenRepository;

#[async_trait]
impl UserRepository for BrokenRepository {
    async fn create(&self, _cedula: &str, _nombre: Option<&str>) -> Result<()> {
        Err(DbErr::Custom("disk I/O error".to_string()).into())
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        Err(DbErr::Custom("disk I/O error".to_string()).into())
    }

    async fn find_by_cedula(&self, _cedula: &str) -> Result<Option<User>> {
        Err(DbErr::Custom("disk I/O error".to_string()).into())
    }

    async fn update_nombre(&self, _cedula: &str, _nombre: Option<&str>) -> Result<u64> {
        Err(DbErr::Custom("disk I/O error".to_string()).into())
    }

    async fn delete(&self, _cedula: &str) -> Result<u64> {
        Err(DbErr::Custom("disk I/O error".to_string()).into())
    }
}

#[tokio::test]
async fn test_driver_errors_map_to_500() {
    let container = ContainerBuilder::new()
        .register(BrokenRepository)
        .bind::<dyn UserRepository, BrokenRepository, _>(|r| r as Arc<dyn UserRepository>)
        .build();
    let app = TestApp {
        router: build_router(&container).unwrap(),
        _dir: TempDir::new().unwrap(),
    };

    let cases = [
        (Method::GET, "/usuarios", None, "Error al obtener los usuarios"),
        (Method::GET, "/usuarios/1", None, "Error al obtener el usuario"),
        (
            Method::PUT,
            "/usuarios/1",
            Some(json!({ "nombre": "Ana" })),
            "Error al actualizar el usuario",
        ),
        (Method::DELETE, "/usuarios/1", None, "Error al eliminar el usuario"),
    ];
    for (method, uri, body, message) in cases {
        let (status, response) = app.send(method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response, json!({ "error": message }));
    }

    let (status, response) = app.create("1", "Ana").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response, json!({ "error": "Error al crear el usuario" }));
}
