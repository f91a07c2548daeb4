use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pokedex_client::{ClientError, PokemonSource};
use pokedex_core::Record;
use tokio::sync::Notify;

pub(crate) fn record(id: i64, name: &str) -> Record {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "species": { "name": name },
        "types": [{ "slot": 1, "type": { "name": "normal" } }],
        "stats": []
    }))
    .expect("test record")
}

pub(crate) fn numbered(range: std::ops::Range<i64>) -> Vec<Record> {
    range.map(|i| record(i, &format!("mon{i}"))).collect()
}

fn upstream_error() -> ClientError {
    ClientError::HttpStatus { code: 500, url: "http://fake/pokemon".to_owned() }
}

#[derive(Default)]
struct Inner {
    pages: Mutex<HashMap<i64, Vec<Record>>>,
    failing_pages: Mutex<HashSet<i64>>,
    catalog: Mutex<Vec<Record>>,
    search_fails: Mutex<bool>,
    by_name_fails: Mutex<bool>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    list_calls: Mutex<Vec<(i64, i64)>>,
    search_calls: AtomicUsize,
    name_calls: AtomicUsize,
}

/// Scripted in-process source. Pages are keyed by offset; search filters the
/// configured catalog by case-insensitive substring.
#[derive(Clone, Default)]
pub(crate) struct FakeSource {
    inner: Arc<Inner>,
}

impl FakeSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(self, offset: i64, records: Vec<Record>) -> Self {
        self.inner.pages.lock().unwrap().insert(offset, records);
        self
    }

    pub(crate) fn with_catalog(self, records: Vec<Record>) -> Self {
        *self.inner.catalog.lock().unwrap() = records;
        self
    }

    pub(crate) fn fail_page(&self, offset: i64) {
        self.inner.failing_pages.lock().unwrap().insert(offset);
    }

    pub(crate) fn set_page(&self, offset: i64, records: Vec<Record>) {
        self.inner.failing_pages.lock().unwrap().remove(&offset);
        self.inner.pages.lock().unwrap().insert(offset, records);
    }

    pub(crate) fn fail_search(&self, fail: bool) {
        *self.inner.search_fails.lock().unwrap() = fail;
    }

    pub(crate) fn fail_by_name(&self, fail: bool) {
        *self.inner.by_name_fails.lock().unwrap() = fail;
    }

    /// Calls for `key` block until the returned handle is notified.
    pub(crate) fn hold(&self, key: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.inner.gates.lock().unwrap().insert(key.to_owned(), Arc::clone(&notify));
        notify
    }

    pub(crate) fn list_calls(&self) -> Vec<(i64, i64)> {
        self.inner.list_calls.lock().unwrap().clone()
    }

    pub(crate) fn search_calls(&self) -> usize {
        self.inner.search_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn name_calls(&self) -> usize {
        self.inner.name_calls.load(Ordering::SeqCst)
    }

    async fn wait_gate(&self, key: &str) {
        let gate = self.inner.gates.lock().unwrap().remove(key);
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl PokemonSource for FakeSource {
    async fn list_with_details(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Record>, ClientError> {
        self.inner.list_calls.lock().unwrap().push((limit, offset));
        self.wait_gate(&format!("page:{offset}")).await;
        if self.inner.failing_pages.lock().unwrap().contains(&offset) {
            return Err(upstream_error());
        }
        Ok(self.inner.pages.lock().unwrap().get(&offset).cloned().unwrap_or_default())
    }

    async fn search(&self, term: &str) -> Result<Vec<Record>, ClientError> {
        self.inner.search_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_gate(&format!("search:{term}")).await;
        if *self.inner.search_fails.lock().unwrap() {
            return Err(upstream_error());
        }
        let term = term.trim().to_lowercase();
        Ok(self
            .inner
            .catalog
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn by_name(&self, name: &str) -> Result<Option<Record>, ClientError> {
        self.inner.name_calls.fetch_add(1, Ordering::SeqCst);
        if *self.inner.by_name_fails.lock().unwrap() {
            return Err(upstream_error());
        }
        Ok(self.inner.catalog.lock().unwrap().iter().find(|r| r.name == name).cloned())
    }
}
