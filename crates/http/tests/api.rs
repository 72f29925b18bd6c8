use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};

use bookclub_http::{HttpApi, REQUEST_ID_HEADER};
use bookclub_kernel::model::{
    BearerToken, BookFields, BookId, Credentials, NewReview, ReviewFields, ReviewId,
    SignupProfile, UserId,
};
use bookclub_kernel::settings::ApiSettings;
use bookclub_kernel::{BookClubApi, ClientError};

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    authorization: Option<String>,
    request_id: Option<String>,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct MockService {
    calls: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<HashMap<(Method, String), (StatusCode, Option<Value>)>>,
}

impl MockService {
    fn new(responses: Vec<(Method, &str, StatusCode, Option<Value>)>) -> Self {
        let responses = responses
            .into_iter()
            .map(|(method, path, status, body)| ((method, path.to_string()), (status, body)))
            .collect();
        Self {
            calls: Arc::default(),
            responses: Arc::new(responses),
        }
    }

    fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }
}

async fn handle(
    State(service): State<MockService>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    service.calls.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        authorization: header_value(header::AUTHORIZATION.as_str()),
        request_id: header_value(REQUEST_ID_HEADER),
        body: serde_json::from_slice(&body).ok(),
    });

    match service.responses.get(&(method, uri.path().to_string())) {
        Some((status, Some(body))) => (
            *status,
            [(header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response(),
        Some((status, None)) => (*status, String::new()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn(service: MockService) -> HttpApi {
    let router = Router::new().fallback(handle).with_state(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    HttpApi::new(&ApiSettings {
        base_url: format!("http://{addr}"),
        request_timeout_ms: 5000,
    })
    .unwrap()
}

fn alice_json() -> Value {
    json!({"id": 1, "username": "alice", "email": "a@x.com"})
}

fn token() -> BearerToken {
    BearerToken::new("tok1")
}

#[tokio::test]
async fn login_posts_credentials_without_token() {
    let service = MockService::new(vec![(
        Method::POST,
        "/login",
        StatusCode::OK,
        Some(json!({"access_token": "tok1", "user": alice_json()})),
    )]);
    let api = spawn(service.clone()).await;

    let auth = api
        .login(&Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(auth.access_token.expose(), "tok1");
    assert_eq!(auth.user.id, UserId(1));

    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].body,
        Some(json!({"username": "alice", "password": "secret"}))
    );
    assert!(calls[0].authorization.is_none());
    assert!(calls[0].request_id.is_some());
}

#[tokio::test]
async fn rejected_login_surfaces_server_message() {
    let service = MockService::new(vec![(
        Method::POST,
        "/login",
        StatusCode::UNAUTHORIZED,
        Some(json!({"error": "Invalid credentials"})),
    )]);
    let api = spawn(service).await;

    let error = api
        .login(&Credentials {
            username: "alice".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    match error {
        ClientError::Auth { message } => assert_eq!(message, "Invalid credentials"),
        other => panic!("Expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_signup_without_body_uses_default_message() {
    let service = MockService::new(vec![(
        Method::POST,
        "/signup",
        StatusCode::BAD_REQUEST,
        None,
    )]);
    let api = spawn(service).await;

    let error = api
        .signup(&SignupProfile {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(error.user_message(), "Signup failed");
}

#[tokio::test]
async fn list_books_sends_bearer_token() {
    let service = MockService::new(vec![(
        Method::GET,
        "/books",
        StatusCode::OK,
        Some(json!([
            {
                "id": 7,
                "title": "Dune",
                "author": "Frank Herbert",
                "year_published": 1965,
                "description": "Spice",
                "user": alice_json()
            },
            {
                "id": 8,
                "title": "Emma",
                "author": "Jane Austen",
                "year_published": 1815,
                "description": "Matchmaking",
                "user": null
            }
        ])),
    )]);
    let api = spawn(service.clone()).await;

    let books = api.list_books(&token()).await.unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].owner.as_ref().unwrap().username, "alice");
    assert!(books[1].owner.is_none());
    assert_eq!(
        service.calls()[0].authorization.as_deref(),
        Some("Bearer tok1")
    );
}

#[tokio::test]
async fn failed_list_is_an_error_not_an_empty_list() {
    let service = MockService::new(vec![(
        Method::GET,
        "/reviews",
        StatusCode::UNAUTHORIZED,
        Some(json!({"msg": "Token has expired"})),
    )]);
    let api = spawn(service).await;

    match api.list_reviews(&token()).await.unwrap_err() {
        ClientError::Request { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("Expected Request error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_review_injects_book_id() {
    let service = MockService::new(vec![(
        Method::POST,
        "/reviews",
        StatusCode::CREATED,
        Some(json!({"msg": "Review added"})),
    )]);
    let api = spawn(service.clone()).await;

    api.create_review(
        &token(),
        &NewReview {
            fields: ReviewFields {
                rating: 3,
                comment: "ok".to_string(),
            },
            book_id: BookId(7),
        },
    )
    .await
    .unwrap();

    let calls = service.calls();
    assert_eq!(calls[0].path, "/reviews");
    assert_eq!(
        calls[0].body,
        Some(json!({"rating": 3, "comment": "ok", "book_id": 7}))
    );
}

#[tokio::test]
async fn update_review_patches_without_book_id() {
    let service = MockService::new(vec![(
        Method::PATCH,
        "/reviews/3",
        StatusCode::OK,
        Some(json!({"msg": "Review updated"})),
    )]);
    let api = spawn(service.clone()).await;

    api.update_review(
        &token(),
        ReviewId(3),
        &ReviewFields {
            rating: 5,
            comment: "better on reread".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(
        service.calls()[0].body,
        Some(json!({"rating": 5, "comment": "better on reread"}))
    );
}

#[tokio::test]
async fn update_book_patches_item_route() {
    let service = MockService::new(vec![(
        Method::PATCH,
        "/books/7",
        StatusCode::OK,
        Some(json!({"msg": "Book updated"})),
    )]);
    let api = spawn(service.clone()).await;

    api.update_book(
        &token(),
        BookId(7),
        &BookFields {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year_published: 1965,
            description: "Spice must flow".to_string(),
        },
    )
    .await
    .unwrap();

    let calls = service.calls();
    assert_eq!(calls[0].method, Method::PATCH);
    assert_eq!(calls[0].body.as_ref().unwrap()["year_published"], 1965);
}

#[tokio::test]
async fn forbidden_delete_reports_request_error() {
    let service = MockService::new(vec![(
        Method::DELETE,
        "/books/7",
        StatusCode::FORBIDDEN,
        Some(json!({"error": "Unauthorized"})),
    )]);
    let api = spawn(service).await;

    let error = api.delete_book(&token(), BookId(7)).await.unwrap_err();
    assert!(matches!(error, ClientError::Request { status: 403, .. }));
    assert_eq!(error.user_message(), "Unauthorized");
}

#[tokio::test]
async fn empty_success_body_is_accepted_for_delete() {
    let service = MockService::new(vec![(
        Method::DELETE,
        "/reviews/3",
        StatusCode::NO_CONTENT,
        None,
    )]);
    let api = spawn(service).await;

    api.delete_review(&token(), ReviewId(3)).await.unwrap();
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpApi::new(&ApiSettings {
        base_url: format!("http://{addr}"),
        request_timeout_ms: 2000,
    })
    .unwrap();

    let error = api.list_books(&token()).await.unwrap_err();
    assert!(matches!(error, ClientError::Network { .. }));
    assert_eq!(error.user_message(), "Could not connect to the server.");
}
