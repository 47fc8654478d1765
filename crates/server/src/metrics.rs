use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use service::ServiceError;

// Prometheus metrics (default registry)
pub static DIRECTORY_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "directory_operations_total",
        "Directory operations by resource, operation and outcome",
        &["resource", "operation", "outcome"]
    )
    .expect("register directory_operations_total")
});

pub fn outcome<T>(res: &Result<T, ServiceError>) -> &'static str {
    match res {
        Ok(_) => "ok",
        Err(ServiceError::NotFound(_)) => "not_found",
        Err(ServiceError::CompanyNotFound(_)) => "company_not_found",
        Err(ServiceError::Validation(_)) | Err(ServiceError::Model(_)) => "invalid",
        Err(ServiceError::Db(_)) => "error",
    }
}

/// Count one directory operation.
pub fn record<T>(resource: &str, operation: &str, res: &Result<T, ServiceError>) {
    DIRECTORY_OPERATIONS_TOTAL
        .with_label_values(&[resource, operation, outcome(res)])
        .inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics_handler() -> (StatusCode, String) {
    encode_metrics()
}
