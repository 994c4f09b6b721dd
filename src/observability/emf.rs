//! CloudWatch Embedded Metric Format recorder.
//!
//! # Responsibilities
//! - Back `metrics::counter!` handles with plain atomics
//! - Render non-zero counters as EMF documents
//! - Write them to stdout, which Lambda ships to CloudWatch Logs
//!
//! # Design Decisions
//! - Counters only; gauges and histograms are no-ops
//! - One document per metric key, so each carries its own dimension set
//! - Counters reset on drain; every invocation reports its own deltas

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};
use serde_json::{json, Map, Value};

/// Recorder that turns counters into EMF log lines.
///
/// Cloning shares the underlying counters, so one clone can be installed
/// globally while another is kept for flushing.
#[derive(Debug, Clone)]
pub struct EmfRecorder {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    namespace: String,
    counters: Mutex<HashMap<Key, Arc<AtomicU64>>>,
}

impl EmfRecorder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                namespace: namespace.into(),
                counters: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    /// Reset every non-zero counter and return one EMF document per key,
    /// ordered by their rendered form.
    pub fn drain(&self) -> Vec<Value> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let counters = self.inner.counters.lock().unwrap_or_else(|e| e.into_inner());
        let mut documents: Vec<Value> = counters
            .iter()
            .filter_map(|(key, value)| {
                let count = value.swap(0, Ordering::Relaxed);
                (count > 0).then(|| self.document(key, count, timestamp))
            })
            .collect();
        documents.sort_by_cached_key(|doc| doc.to_string());
        documents
    }

    /// Print drained documents to stdout, one JSON line each.
    pub fn flush(&self) {
        for document in self.drain() {
            println!("{}", document);
        }
    }

    fn document(&self, key: &Key, count: u64, timestamp: u64) -> Value {
        let dimensions: Vec<&str> = key.labels().map(|label| label.key()).collect();

        let mut document = Map::new();
        document.insert(
            "_aws".to_string(),
            json!({
                "Timestamp": timestamp,
                "CloudWatchMetrics": [{
                    "Namespace": self.inner.namespace,
                    "Dimensions": [dimensions],
                    "Metrics": [{ "Name": key.name(), "Unit": "Count" }]
                }]
            }),
        );
        for label in key.labels() {
            document.insert(label.key().to_string(), Value::from(label.value()));
        }
        document.insert(key.name().to_string(), Value::from(count));
        Value::Object(document)
    }
}

impl Recorder for EmfRecorder {
    fn describe_counter(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn describe_gauge(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn describe_histogram(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
        let mut counters = self.inner.counters.lock().unwrap_or_else(|e| e.into_inner());
        let handle = counters
            .entry(key.clone())
            .or_insert_with(|| Arc::new(AtomicU64::new(0)))
            .clone();
        Counter::from_arc(handle)
    }

    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, _key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        Histogram::noop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_renders_emf_and_resets() {
        let recorder = EmfRecorder::new("frontend-router");

        metrics::with_local_recorder(&recorder, || {
            metrics::counter!("router_rewrites_total", "version" => "react").increment(2);
            metrics::counter!("router_rewrites_total", "version" => "react").increment(1);
        });

        let documents = recorder.drain();
        assert_eq!(documents.len(), 1);

        let doc = &documents[0];
        assert_eq!(doc["router_rewrites_total"], 3);
        assert_eq!(doc["version"], "react");
        let directive = &doc["_aws"]["CloudWatchMetrics"][0];
        assert_eq!(directive["Namespace"], "frontend-router");
        assert_eq!(directive["Dimensions"], json!([["version"]]));
        assert_eq!(directive["Metrics"], json!([{ "Name": "router_rewrites_total", "Unit": "Count" }]));
        assert!(doc["_aws"]["Timestamp"].as_u64().unwrap() > 0);

        assert!(recorder.drain().is_empty());
    }

    #[test]
    fn test_one_document_per_key() {
        let recorder = EmfRecorder::new("ns");

        metrics::with_local_recorder(&recorder, || {
            metrics::counter!("router_requests_total").increment(1);
            metrics::counter!("router_rewrites_total", "version" => "vue").increment(1);
            metrics::counter!("router_rewrites_total", "version" => "lit").increment(1);
        });

        let documents = recorder.drain();
        assert_eq!(documents.len(), 3);

        let unlabelled = documents
            .iter()
            .find(|d| d.get("router_requests_total").is_some())
            .unwrap();
        assert_eq!(unlabelled["_aws"]["CloudWatchMetrics"][0]["Dimensions"], json!([[]]));
    }

    #[test]
    fn test_clones_share_counters() {
        let recorder = EmfRecorder::new("ns");
        let installed = recorder.clone();

        metrics::with_local_recorder(&installed, || {
            metrics::counter!("router_errors_total", "kind" => "invalid_uri").increment(1);
        });

        let documents = recorder.drain();
        assert_eq!(documents[0]["kind"], "invalid_uri");
        assert_eq!(recorder.namespace(), "ns");
    }
}
