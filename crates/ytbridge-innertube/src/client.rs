//! `InnerTube` API client implementation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;
use ytbridge_core::{HttpError, ResolvedLocale, Result};

use crate::context::ClientContext;
use crate::transport::{HttpRequest, Transport};
use crate::types::InnerTubeRequest;

pub const ORIGIN: &str = "https://music.youtube.com";
const BASE_URL: &str = "https://music.youtube.com/youtubei/v1";

/// `YouTube` Music `InnerTube` API client.
///
/// Cheap to clone; clones share the transport and the in-flight counter.
#[derive(Clone)]
pub struct InnerTubeClient {
    transport: Arc<dyn Transport>,
    locale: ResolvedLocale,
    in_flight: Arc<AtomicUsize>,
}

impl InnerTubeClient {
    pub fn new(transport: Arc<dyn Transport>, locale: ResolvedLocale) -> Self {
        Self {
            transport,
            locale,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub const fn locale(&self) -> &ResolvedLocale {
        &self.locale
    }

    pub fn web_context(&self) -> ClientContext {
        ClientContext::music_web(&self.locale)
    }

    pub fn android_context(&self) -> ClientContext {
        ClientContext::music_android(&self.locale)
    }

    /// Enter a call. The returned guard marks the call finished when dropped,
    /// whichever way the call exits.
    pub fn scope(&self, operation: &'static str) -> CallScope {
        let active = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Entering {operation} ({active} in flight)");
        CallScope {
            operation,
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    /// Number of calls currently inside a [`CallScope`].
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Build a POST request for an `InnerTube` endpoint.
    pub fn build_post<T: Serialize>(
        &self,
        endpoint: &str,
        context: ClientContext,
        payload: T,
    ) -> Result<HttpRequest> {
        let url = endpoint_url(endpoint)?;
        let identity = context.headers();
        let body = serde_json::to_vec(&InnerTubeRequest::new(context, payload))?;

        let mut request = HttpRequest::post(url, body)
            .header("Referer", ORIGIN)
            .header("Origin", ORIGIN)
            .header("Content-Type", "application/json")
            .header("Accept-Language", self.locale.accept_language());
        for (name, value) in identity {
            request = request.header(name, value);
        }
        Ok(request)
    }

    /// POST to an `InnerTube` endpoint and return the decoded JSON tree.
    pub(crate) async fn post<T: Serialize>(
        &self,
        endpoint: &str,
        context: ClientContext,
        payload: T,
    ) -> Result<Value> {
        let request = self.build_post(endpoint, context, payload)?;
        let body = self.transport.execute(request).await?;
        debug!("{endpoint} returned {} bytes", body.len());
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET an arbitrary URL and return the body as text.
    pub(crate) async fn get_text(&self, url: Url) -> Result<String> {
        let body = self.transport.execute(HttpRequest::get(url)).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

fn endpoint_url(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{BASE_URL}/{endpoint}"))
        .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut().append_pair("prettyPrint", "false");
    Ok(url)
}

/// Guard held for the duration of one search or lyrics call.
#[derive(Debug)]
pub struct CallScope {
    operation: &'static str,
    in_flight: Arc<AtomicUsize>,
}

impl Drop for CallScope {
    fn drop(&mut self) {
        let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("Leaving {} ({remaining} in flight)", self.operation);
    }
}
