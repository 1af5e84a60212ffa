// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Posting a validated email to the remote contact endpoint.
//!
//! The endpoint accepts `{"email": "..."}` and answers 200 on success and 422
//! when it refuses the address's domain. Everything else is a generic failure.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::models::email::ContactEmail;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://test.ezworks.ai/api";

/// User agent sent with contact requests.
const USER_AGENT_VALUE: &str = concat!("ezworks-landing/", env!("CARGO_PKG_VERSION"));

/// Remote outcomes other than success.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// HTTP 422: the endpoint does not accept this email domain.
    #[error("email domain rejected by endpoint")]
    DomainRejected,
    /// Any status other than 200 or 422.
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Sends one contact request per call. Implementations must not retry.
pub trait Submitter: Send + Sync {
    fn submit(&self, email: &ContactEmail) -> Result<(), SubmitError>;
}

/// JSON body of a contact request.
#[derive(Debug, Serialize)]
struct ContactRequest<'a> {
    email: &'a str,
}

/// Blocking HTTP submitter, meant to run on a worker thread.
#[derive(Clone, Debug)]
pub struct HttpSubmitter {
    client: reqwest::blocking::Client,
    endpoint: Url,
}

impl HttpSubmitter {
    /// Build a submitter for `endpoint` using the client's default deadline policy.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed (for example
    /// when no TLS backend is available).
    pub fn new(endpoint: Url) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::blocking::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Configured endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, email: &ContactEmail) -> Result<(), SubmitError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            email = %email.redacted(),
            "posting contact request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ContactRequest {
                email: email.as_ref(),
            })
            .send()?;

        classify_status(response.status())
    }
}

/// Map a response status onto the submission outcome.
fn classify_status(status: StatusCode) -> Result<(), SubmitError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::UNPROCESSABLE_ENTITY => Err(SubmitError::DomainRejected),
        other => Err(SubmitError::UnexpectedStatus(other.as_u16())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    struct CapturedRequest {
        request_line: String,
        content_type: Option<String>,
        body: String,
    }

    /// Serve exactly one request on a loopback port, answering with `status`.
    fn serve_once(status: u16) -> (Url, mpsc::Receiver<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0usize;
            let mut content_type = None;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    let name = name.trim().to_ascii_lowercase();
                    let value = value.trim().to_string();
                    if name == "content-length" {
                        content_length = value.parse().unwrap();
                    } else if name == "content-type" {
                        content_type = Some(value);
                    }
                }
            }

            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status} Status\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            )
            .unwrap();
            stream.flush().unwrap();

            let _ = tx.send(CapturedRequest {
                request_line: request_line.trim_end().to_string(),
                content_type,
                body: String::from_utf8(body).unwrap(),
            });
        });

        let url = Url::parse(&format!("http://{addr}/api")).unwrap();
        (url, rx)
    }

    /// Loopback submitter that ignores any proxy configured in the environment.
    fn local_submitter(url: Url) -> HttpSubmitter {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        HttpSubmitter::with_client(client, url)
    }

    fn email(raw: &str) -> ContactEmail {
        ContactEmail::parse(raw).unwrap()
    }

    #[test]
    fn ok_response_posts_json_body_once() {
        let (url, rx) = serve_once(200);
        let submitter = local_submitter(url);

        let result = submitter.submit(&email("jane@example.com"));

        assert_eq!(result, Ok(()));
        let captured = rx.recv().unwrap();
        assert_eq!(captured.request_line, "POST /api HTTP/1.1");
        assert!(
            captured
                .content_type
                .as_deref()
                .is_some_and(|ct| ct.starts_with("application/json"))
        );
        let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
        assert_eq!(body, serde_json::json!({ "email": "jane@example.com" }));
        assert!(rx.try_recv().is_err(), "only one request expected");
    }

    #[test]
    fn unprocessable_entity_is_domain_rejection() {
        let (url, _rx) = serve_once(422);
        let submitter = local_submitter(url);

        let result = submitter.submit(&email("jane@blocked.example"));

        assert_eq!(result, Err(SubmitError::DomainRejected));
    }

    #[test]
    fn server_error_is_unexpected_status() {
        let (url, _rx) = serve_once(500);
        let submitter = local_submitter(url);

        let result = submitter.submit(&email("jane@example.com"));

        assert_eq!(result, Err(SubmitError::UnexpectedStatus(500)));
    }

    #[test]
    fn refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = Url::parse(&format!("http://{addr}/api")).unwrap();
        let submitter = local_submitter(url);

        let result = submitter.submit(&email("jane@example.com"));

        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }

    #[test]
    fn only_200_counts_as_success() {
        assert_eq!(classify_status(StatusCode::OK), Ok(()));
        assert_eq!(
            classify_status(StatusCode::CREATED),
            Err(SubmitError::UnexpectedStatus(201))
        );
        assert_eq!(
            classify_status(StatusCode::UNPROCESSABLE_ENTITY),
            Err(SubmitError::DomainRejected)
        );
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST),
            Err(SubmitError::UnexpectedStatus(400))
        );
    }
}
