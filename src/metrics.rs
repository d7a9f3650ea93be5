use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("purity_requests_total", "Total number of write requests").unwrap();
    pub static ref RATE_LIMITED: Counter =
        register_counter!("purity_rate_limited_total", "Requests refused by the rate limiter").unwrap();
    pub static ref VALIDATION_FAILURES: Counter =
        register_counter!("purity_validation_failures_total", "Requests refused by input validation").unwrap();
    pub static ref STORAGE_FAILURES: Counter =
        register_counter!("purity_storage_failures_total", "Rate-limit storage reads or writes that failed open").unwrap();
    pub static ref DOCUMENTS_WRITTEN: Counter =
        register_counter!("purity_documents_written_total", "Documents persisted").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "purity_request_latency_seconds",
        "Write request latency in seconds"
    )
    .unwrap();
}
