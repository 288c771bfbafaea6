//! In-process NIP-96 server for tests.

use std::sync::{Arc, Mutex};

use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Router;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub authorization: Option<String>,
    pub parts: Vec<CapturedPart>,
}

impl CapturedRequest {
    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.name.as_str()).collect()
    }

    pub fn part(&self, name: &str) -> Option<&CapturedPart> {
        self.parts.iter().find(|part| part.name == name)
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockServer {
    pub url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockServer {
    /// Starts a server answering every request with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.to_string(),
            captured: captured.clone(),
        };
        let router = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let address = listener.local_addr().expect("local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            url: format!("http://{address}/api/v2/media"),
            captured,
        }
    }

    /// The single request received so far.
    pub fn request(&self) -> CapturedRequest {
        let captured = self.captured.lock().expect("capture lock");
        assert_eq!(captured.len(), 1, "expected exactly one request");
        captured[0].clone()
    }
}

async fn handle(State(state): State<MockState>, request: Request) -> impl IntoResponse {
    let method = request.method().clone();
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);

    let mut parts = Vec::new();
    if method == Method::POST {
        let mut multipart = Multipart::from_request(request, &state)
            .await
            .expect("multipart body");
        while let Some(field) = multipart.next_field().await.expect("multipart field") {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(ToString::to_string);
            let content_type = field.content_type().map(ToString::to_string);
            let data = field.bytes().await.expect("field bytes").to_vec();
            parts.push(CapturedPart {
                name,
                file_name,
                content_type,
                data,
            });
        }
    }

    state
        .captured
        .lock()
        .expect("capture lock")
        .push(CapturedRequest {
            method,
            authorization,
            parts,
        });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}
