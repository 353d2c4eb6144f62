//! Scripted transport and factory used by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;
use webex_api::{Error, ItemsKey, ObjectFactory, Page, Record, Request, Transport};

const PAGE_PREFIX: &str = "stub-page:";

/// Records every request. Single requests are answered from a queue of
/// replies (`null` once it runs dry); paginated requests walk `pages`,
/// linking each page to the next.
#[derive(Default)]
pub struct StubTransport {
    pages: Vec<Vec<Value>>,
    replies: Mutex<VecDeque<Result<Value, u16>>>,
    calls: Mutex<Vec<(Request, Option<ItemsKey>)>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(pages: Vec<Vec<Value>>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// Queues a JSON reply for the next single request.
    pub fn reply(self, value: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queues a failure with the given HTTP status.
    pub fn fail(self, status: u16) -> Self {
        self.replies.lock().unwrap().push_back(Err(status));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    pub fn items_keys(&self) -> Vec<ItemsKey> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(_, key)| key.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Transport for StubTransport {
    async fn request(&self, request: &Request) -> Result<Value, Error> {
        self.calls.lock().unwrap().push((request.clone(), None));
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(429)) => Err(Error::RateLimited { retry_after: Some(30) }),
            Some(Err(status)) => Err(Error::HttpStatus {
                status,
                expected: request.expected.as_u16(),
                body: String::new(),
            }),
            None => Ok(Value::Null),
        }
    }

    async fn fetch_page(&self, request: &Request, items_key: &ItemsKey) -> Result<Page, Error> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), Some(items_key.clone())));
        let index = request
            .path
            .strip_prefix(PAGE_PREFIX)
            .map(|n| n.parse::<usize>().unwrap())
            .unwrap_or(0);
        let items = self.pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < self.pages.len())
            .then(|| Request::new(request.method.clone(), format!("{}{}", PAGE_PREFIX, index + 1)));
        Ok(Page { items, next })
    }
}

/// Builds plain records and remembers every call.
#[derive(Default)]
pub struct CountingFactory {
    seen: Mutex<Vec<(String, Value)>>,
}

impl CountingFactory {
    pub fn seen(&self) -> Vec<(String, Value)> {
        self.seen.lock().unwrap().clone()
    }
}

impl ObjectFactory for CountingFactory {
    type Record = Record;

    fn construct(&self, type_tag: &str, raw: Value) -> Record {
        self.seen
            .lock()
            .unwrap()
            .push((type_tag.to_string(), raw.clone()));
        Record::new(type_tag, raw)
    }
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

pub fn fixture_items(name: &str, key: &str) -> Vec<Value> {
    let body: Value = serde_json::from_str(&load_fixture(name)).unwrap();
    body[key].as_array().unwrap().clone()
}
