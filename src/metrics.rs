use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter = register_counter!(
        "translate_requests_total",
        "Total number of translation requests"
    )
    .unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "translate_rate_limited_total",
        "Requests denied by the rate limiter"
    )
    .unwrap();
    pub static ref PROVIDER_ERRORS_TOTAL: Counter = register_counter!(
        "translate_provider_errors_total",
        "Provider calls that failed or returned an invalid translation"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "translate_request_latency_seconds",
        "Translation request latency in seconds"
    )
    .unwrap();
}
