//! In-process stub backend for exercising the probe end to end.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::sync::Notify;

#[derive(Debug, Clone)]
pub enum Route {
    Respond {
        status: u16,
        headers: Vec<(String, String)>,
        body: String,
    },
    /// Accept the request and never answer it.
    Hang,
    /// Stop accepting new connections and leave this request unanswered.
    CloseListener,
}

impl Route {
    pub fn status(status: u16) -> Self {
        Route::Respond {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn with_body(self, body: impl Into<String>) -> Self {
        match self {
            Route::Respond { status, headers, .. } => Route::Respond {
                status,
                headers,
                body: body.into(),
            },
            other => other,
        }
    }

    pub fn with_header(self, name: &str, value: &str) -> Self {
        match self {
            Route::Respond {
                status,
                mut headers,
                body,
            } => {
                headers.push((name.to_string(), value.to_string()));
                Route::Respond { status, headers, body }
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Received {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Received {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone)]
struct Stub {
    routes: Arc<HashMap<(String, String), Route>>,
    received: Arc<Mutex<Vec<Received>>>,
    shutdown: Arc<Notify>,
}

pub struct StubBackend {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
}

impl StubBackend {
    /// Serves `routes` keyed by `(METHOD, path)`; anything else gets a 404.
    pub async fn start(routes: Vec<(&str, &str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let stub = Stub {
            routes: Arc::new(
                routes
                    .into_iter()
                    .map(|(method, path, route)| ((method.to_string(), path.to_string()), route))
                    .collect(),
            ),
            received: Arc::new(Mutex::new(Vec::new())),
            shutdown: Arc::new(Notify::new()),
        };
        let received = stub.received.clone();
        let shutdown = stub.shutdown.clone();

        let app = Router::new().fallback(handle).with_state(stub);
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown.notified().await })
                .await
                .unwrap();
        });

        Self { addr, received }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

/// A base URL nothing is listening on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn handle(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let key = (method.to_string(), uri.path().to_string());
    let route = stub
        .routes
        .get(&key)
        .cloned()
        .unwrap_or_else(|| Route::status(404));

    stub.received.lock().unwrap().push(Received {
        method: key.0,
        path: key.1,
        headers: headers
            .iter()
            .map(|(name, value)| {
                (name.to_string(), value.to_str().unwrap_or_default().to_string())
            })
            .collect(),
        body,
    });

    match route {
        Route::Respond {
            status,
            headers,
            body,
        } => {
            let mut response = (StatusCode::from_u16(status).unwrap(), body).into_response();
            for (name, value) in headers {
                response.headers_mut().append(
                    HeaderName::from_bytes(name.as_bytes()).unwrap(),
                    HeaderValue::from_str(&value).unwrap(),
                );
            }
            response
        }
        Route::Hang => std::future::pending().await,
        Route::CloseListener => {
            stub.shutdown.notify_one();
            std::future::pending().await
        }
    }
}
