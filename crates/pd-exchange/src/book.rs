//! `RequestBook` — the per-tick snapshot of every posted request.

use std::collections::BTreeMap;

use pd_core::{AgentId, RequestId};

use crate::{Request, RequestPort};

/// Every request posted this tick, bucketed by commodity name.
///
/// Built once per tick by the driver and lent immutably to every trader's
/// `bid_on_requests`.  Request ids are assigned densely from 0 in posting
/// order, so [`get_by_id`][Self::get_by_id] is a direct index.
#[derive(Clone, Debug, Default)]
pub struct RequestBook {
    requests:     Vec<Request>,
    by_commodity: BTreeMap<String, Vec<RequestId>>,
}

impl RequestBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from `(requester, port)` pairs, in the given order.
    pub fn from_ports<I>(ports: I) -> Self
    where
        I: IntoIterator<Item = (AgentId, RequestPort)>,
    {
        let mut book = Self::new();
        for (requester, port) in ports {
            book.post(requester, port);
        }
        book
    }

    /// Publish one request and return the id it was given.
    pub fn post(&mut self, requester: AgentId, port: RequestPort) -> RequestId {
        let id = RequestId(self.requests.len() as u32);
        self.by_commodity.entry(port.commodity.clone()).or_default().push(id);
        self.requests.push(Request {
            id,
            requester,
            commodity: port.commodity,
            target:    port.target,
            capacity:  port.capacity,
        });
        id
    }

    /// `true` if at least one request was posted for `commodity`.
    pub fn contains(&self, commodity: &str) -> bool {
        self.by_commodity.contains_key(commodity)
    }

    /// All requests for `commodity`, in posting order.  Empty if none.
    pub fn get<'a>(&'a self, commodity: &str) -> impl Iterator<Item = &'a Request> + use<'a> {
        self.by_commodity
            .get(commodity)
            .into_iter()
            .flatten()
            .map(|id| &self.requests[id.index()])
    }

    pub fn get_by_id(&self, id: RequestId) -> Option<&Request> {
        self.requests.get(id.index())
    }

    /// Every request, in ascending id order.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
