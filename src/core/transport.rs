// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;
use tracing::trace;

use crate::error::ApiError;

/// Issues a GET and hands back the response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, ApiError>;
}

/// [`Transport`] backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(max_idle_per_host: usize) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(max_idle_per_host)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, ApiError> {
        trace!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
pub(crate) use testing::MemoryTransport;

#[cfg(test)]
mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Serves canned bodies and records how requests were scheduled
    #[derive(Default)]
    pub(crate) struct MemoryTransport {
        responses: Mutex<HashMap<String, Result<String, u16>>>,
        requests: Mutex<Vec<String>>,
        completed_at_start: Mutex<Vec<usize>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        completed: AtomicUsize,
    }

    impl MemoryTransport {
        pub(crate) fn insert(&self, url: &str, body: impl Into<String>) {
            self.responses
                .lock()
                .unwrap()
                .insert(url.to_string(), Ok(body.into()));
        }

        pub(crate) fn fail(&self, url: &str, status: u16) {
            self.responses
                .lock()
                .unwrap()
                .insert(url.to_string(), Err(status));
        }

        pub(crate) fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        /// For each request, how many requests had completed when it started
        pub(crate) fn completed_at_start(&self) -> Vec<usize> {
            self.completed_at_start.lock().unwrap().clone()
        }

        pub(crate) fn max_in_flight(&self) -> usize {
            self.max_in_flight.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for MemoryTransport {
        async fn get(&self, url: &str) -> Result<String, ApiError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.completed_at_start
                .lock()
                .unwrap()
                .push(self.completed.load(Ordering::SeqCst));

            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            tokio::task::yield_now().await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.completed.fetch_add(1, Ordering::SeqCst);

            let response = self.responses.lock().unwrap().get(url).cloned();
            match response {
                Some(Ok(body)) => Ok(body),
                Some(Err(status)) => Err(ApiError::Status {
                    url: url.to_string(),
                    status,
                }),
                None => Err(ApiError::Status {
                    url: url.to_string(),
                    status: 404,
                }),
            }
        }
    }
}
