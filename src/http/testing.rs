//! In-memory transport for unit tests

use super::{RequestSpec, Transport};
use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Mutex;

type Handler = dyn Fn(&RequestSpec) -> Result<Bytes> + Send + Sync;

/// Transport answering from a closure and recording every request
pub(crate) struct FnTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<RequestSpec>>,
}

impl FnTransport {
    pub(crate) fn new<F>(handler: F) -> Self
    where
        F: Fn(&RequestSpec) -> Result<Bytes> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serve a collection of `total` integers, split by `page`/`count`
    pub(crate) fn collection(total: u32) -> Self {
        Self::new(move |req| {
            let page: u32 = req.query.get("page").map_or(1, |p| p.parse().unwrap());
            let count: u32 = req.query.get("count").map_or(100, |c| c.parse().unwrap());
            let start = (page - 1) * count;
            let items: Vec<u32> = (start..(start + count).min(total)).collect();
            Ok(Bytes::from(serde_json::to_vec(&items).unwrap()))
        })
    }

    pub(crate) fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().unwrap().clone()
    }

    /// Requested page numbers, sorted
    pub(crate) fn pages(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self
            .requests()
            .iter()
            .filter_map(|r| r.query.get("page").and_then(|p| p.parse().ok()))
            .collect();
        pages.sort_unstable();
        pages
    }
}

#[async_trait]
impl Transport for FnTransport {
    async fn send(&self, request: RequestSpec) -> Result<Bytes> {
        self.requests.lock().unwrap().push(request.clone());
        (self.handler)(&request)
    }
}
