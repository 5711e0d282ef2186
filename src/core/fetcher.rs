// SPDX-License-Identifier: GPL-3.0-only

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{core::transport::Transport, error::ApiError, utils::chunk_count};

/// GETs `url` and decodes the body as JSON
pub async fn fetch_json<R, T>(transport: &T, url: &str) -> Result<R, ApiError>
where
    R: DeserializeOwned,
    T: Transport + ?Sized,
{
    let body = transport.get(url).await?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Fetches every url, `concurrency` at a time.
///
/// Urls are split into contiguous chunks; a chunk's requests run together and
/// the whole chunk finishes before the next one starts. Results come back in
/// the same order as `urls`. The first failing request fails the whole fetch.
pub async fn fetch_in_batches<R, T>(
    transport: &T,
    urls: &[String],
    concurrency: usize,
) -> Result<Vec<R>, ApiError>
where
    R: DeserializeOwned + Send,
    T: Transport + ?Sized,
{
    if urls.is_empty() {
        return Ok(Vec::new());
    }

    let concurrency = concurrency.max(1);
    let batches = chunk_count(urls.len(), concurrency);
    let mut records = Vec::with_capacity(urls.len());

    for (index, chunk) in urls.chunks(concurrency).enumerate() {
        debug!("Fetching batch {}/{} ({} requests)", index + 1, batches, chunk.len());

        let batch =
            futures::future::try_join_all(chunk.iter().map(|url| fetch_json::<R, T>(transport, url)))
                .await?;
        records.extend(batch);
    }

    Ok(records)
}
