//! Integration tests for web routes.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use modelos_redacao::api::ApiClient;
use modelos_redacao::config::Config;
use modelos_redacao::screen::spawn_screen;
use modelos_redacao::web::{create_app, AppState};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn create_test_app(mock_server: &MockServer) -> Router {
    let config = Config {
        body_preview_chars: 10,
        ..Config::for_testing(&mock_server.uri())
    };
    let client = ApiClient::new(&config).expect("Failed to build client");
    let (screen, _task) = spawn_screen(Arc::new(client));
    screen.mount().await.expect("mount");

    create_app(AppState::new(screen, config))
}

async fn mount_list(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/modelos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "imagem": "", "titulo": "Tema do Enem", "corpo_redacao": "Um texto bem mais longo que dez caracteres"},
        ])))
        .mount(mock_server)
        .await;
}

async fn get_body(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Fetch `/` until the page contains `needle`.
async fn get_home_containing(app: &Router, needle: &str) -> String {
    for _ in 0..100 {
        let (status, body) = get_body(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        if body.contains(needle) {
            return body;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("home page never contained {needle:?}");
}

async fn post_form(app: &Router, form: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/novo")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server).await;
    let app = create_test_app(&mock_server).await;

    let (status, body) = get_body(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_home_renders_models() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server).await;
    let app = create_test_app(&mock_server).await;

    let body = get_home_containing(&app, "Tema do Enem").await;
    assert!(body.contains("Um texto b..."));
    assert!(body.contains("via.placeholder.com"));
    assert!(body.contains("CRIAR NOVO"));
    assert!(body.contains("EDITAR"));
    assert!(body.contains("EXCLUIR"));
}

#[tokio::test]
async fn test_create_success_redirects_and_alerts() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/modelos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "imagem": "", "titulo": "Tema do Enem", "corpo_redacao": "Texto"},
        ])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/modelos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([
                    {"id": 1, "imagem": "", "titulo": "Tema do Enem", "corpo_redacao": "Texto"},
                    {"id": 2, "imagem": "https://img.example.com/n.png", "titulo": "Novo tema", "corpo_redacao": "Texto novo"},
                ]))
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/novomodelo"))
        .and(body_json(json!({
            "imagem": "https://img.example.com/n.png",
            "titulo": "Novo tema",
            "corpo_redacao": "Texto novo",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = create_test_app(&mock_server).await;
    get_home_containing(&app, "Tema do Enem").await;

    let response = post_form(
        &app,
        "titulo=Novo+tema&imagem=https%3A%2F%2Fimg.example.com%2Fn.png&corpo_redacao=Texto+novo",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    assert_eq!(location, "/?alerta=criado");

    // The page we land on already lists the new model.
    let (_, body) = get_body(&app, &location).await;
    assert!(body.contains("Modelo criado com sucesso!"));
    assert!(body.contains(">Novo tema</h3>"));
    assert!(!body.contains("value=\"Novo tema\""));

    let (_, body) = get_body(&app, "/").await;
    assert!(!body.contains("Modelo criado com sucesso!"));
}

#[tokio::test]
async fn test_create_failure_keeps_form() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/novomodelo"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = create_test_app(&mock_server).await;

    let response = post_form(&app, "titulo=Rascunho&imagem=&corpo_redacao=Meu+texto").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/?alerta=erro");

    let (_, body) = get_body(&app, "/?alerta=erro").await;
    assert!(body.contains("Erro ao criar o modelo, tente novamente mais tarde"));
    assert!(body.contains("value=\"Rascunho\""));
    assert!(body.contains(">Meu texto</textarea>"));
}

#[tokio::test]
async fn test_overlapping_posts_are_both_sent() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/novomodelo"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(200)))
        .expect(2)
        .mount(&mock_server)
        .await;
    let app = create_test_app(&mock_server).await;

    let (first, second) = tokio::join!(post_form(&app, "titulo=A"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        post_form(&app, "titulo=B").await
    });

    for response in [first, second] {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/?alerta=criado");
    }

    let titles: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == "POST")
        .map(|r| {
            let body: serde_json::Value = r.body_json().unwrap();
            body["titulo"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(titles, ["A", "B"]);
}

#[tokio::test]
async fn test_plain_home_shows_no_alert() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/novomodelo"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let app = create_test_app(&mock_server).await;

    post_form(&app, "titulo=Outro").await;

    let (_, body) = get_body(&app, "/").await;
    assert!(!body.contains("role=\"alert\""));
    let (_, body) = get_body(&app, "/?alerta=desconhecido").await;
    assert!(!body.contains("role=\"alert\""));
}

#[tokio::test]
async fn test_missing_fields_are_sent_empty() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/novomodelo"))
        .and(body_json(json!({"imagem": "", "titulo": "Só título", "corpo_redacao": ""})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = create_test_app(&mock_server).await;

    let response = post_form(&app, "titulo=S%C3%B3+t%C3%ADtulo").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
