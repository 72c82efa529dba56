//! A catalog client that can be seeded with canned responses.
//!
//! Consumers use this through the [`Client::Mock`] variant to exercise
//! their flows without a running backend. Every call is recorded so
//! tests can assert which requests were (and were not) issued.
//!
//! [`Client::Mock`]: crate::client::Client

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::ClientTrait;
use crate::error::CatalogClientError;
use crate::types::{CatalogId, CatalogRecord, CatalogSubmission, SaveReceipt};

/// A single canned response, popped in FIFO order.
#[derive(Debug)]
pub enum Response {
    List(Vec<CatalogRecord>),
    Get(CatalogRecord),
    Save(SaveReceipt),
    Delete(SaveReceipt),
    Error(CatalogClientError),
}

/// A request observed by the mock, in the order it was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    List { search: Option<String> },
    Get(CatalogId),
    Create(CatalogSubmission),
    Update(CatalogId, CatalogSubmission),
    Delete(CatalogId),
}

/// A catalog client that replays seeded responses.
// Mutexes rather than RefCells so the mock stays usable from
// multi-threaded test runtimes; responses are popped without holding
// the lock across an await point.
#[derive(Debug, Default, Clone)]
pub struct MockClient {
    responses: Arc<Mutex<VecDeque<Response>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new response into the list of canned responses.
    pub fn push_list_response(&self, records: Vec<CatalogRecord>) {
        self.push(Response::List(records));
    }

    /// Push a new response into the list of canned responses.
    pub fn push_get_response(&self, record: CatalogRecord) {
        self.push(Response::Get(record));
    }

    /// Push a new response into the list of canned responses.
    pub fn push_save_response(&self, receipt: SaveReceipt) {
        self.push(Response::Save(receipt));
    }

    /// Push a new response into the list of canned responses.
    pub fn push_delete_response(&self, receipt: SaveReceipt) {
        self.push(Response::Delete(receipt));
    }

    /// Push an error into the list of canned responses.
    pub fn push_error_response(&self, err: CatalogClientError) {
        self.push(Response::Error(err));
    }

    /// The requests issued against this mock so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("couldn't acquire call lock").clone()
    }

    fn push(&self, response: Response) {
        self.responses
            .lock()
            .expect("couldn't acquire mock lock")
            .push_back(response);
    }

    fn record(&self, call: RecordedCall) {
        self.calls
            .lock()
            .expect("couldn't acquire call lock")
            .push(call);
    }

    fn pop(&self) -> Option<Response> {
        self.responses
            .lock()
            .expect("couldn't acquire mock lock")
            .pop_front()
    }
}

impl ClientTrait for MockClient {
    async fn list_catalogs(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<CatalogRecord>, CatalogClientError> {
        self.record(RecordedCall::List {
            search: search.map(ToString::to_string),
        });
        match self.pop() {
            Some(Response::List(records)) => Ok(records),
            Some(Response::Error(err)) => Err(err),
            other => panic!("expected list response, found {other:?}"),
        }
    }

    async fn get_catalog(&self, id: CatalogId) -> Result<CatalogRecord, CatalogClientError> {
        self.record(RecordedCall::Get(id));
        match self.pop() {
            Some(Response::Get(record)) => Ok(record),
            Some(Response::Error(err)) => Err(err),
            other => panic!("expected get response, found {other:?}"),
        }
    }

    async fn create_catalog(
        &self,
        submission: &CatalogSubmission,
    ) -> Result<SaveReceipt, CatalogClientError> {
        self.record(RecordedCall::Create(submission.clone()));
        match self.pop() {
            Some(Response::Save(receipt)) => Ok(receipt),
            Some(Response::Error(err)) => Err(err),
            other => panic!("expected save response, found {other:?}"),
        }
    }

    async fn update_catalog(
        &self,
        id: CatalogId,
        submission: &CatalogSubmission,
    ) -> Result<SaveReceipt, CatalogClientError> {
        self.record(RecordedCall::Update(id, submission.clone()));
        match self.pop() {
            Some(Response::Save(receipt)) => Ok(receipt),
            Some(Response::Error(err)) => Err(err),
            other => panic!("expected save response, found {other:?}"),
        }
    }

    async fn delete_catalog(&self, id: CatalogId) -> Result<SaveReceipt, CatalogClientError> {
        self.record(RecordedCall::Delete(id));
        match self.pop() {
            Some(Response::Delete(receipt)) => Ok(receipt),
            Some(Response::Error(err)) => Err(err),
            other => panic!("expected delete response, found {other:?}"),
        }
    }
}
