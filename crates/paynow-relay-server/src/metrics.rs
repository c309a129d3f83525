use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};
use relay::{ErrorKind, RedirectResult, RelayError};
use std::sync::LazyLock;
use std::time::Duration;

pub static PAYMENTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "paynow_relay_payments_total",
        "Payment creation requests by outcome",
        &["result"]
    )
    .unwrap()
});

pub static GATEWAY_LATENCY: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "paynow_relay_gateway_duration_seconds",
        "Payment creation latency in seconds, for requests that reached the gateway",
        &["result"],
        vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .unwrap()
});

/// Outcome label for a relay result.
pub fn result_label(result: &Result<RedirectResult, RelayError>) -> &'static str {
    match result {
        Ok(_) => "success",
        Err(e) => match e.kind() {
            ErrorKind::Validation => "invalid",
            ErrorKind::GatewayRejection => "rejected",
            ErrorKind::Unexpected => "error",
        },
    }
}

pub fn record(result: &Result<RedirectResult, RelayError>, elapsed: Duration) {
    let label = result_label(result);
    PAYMENTS_TOTAL.with_label_values(&[label]).inc();
    if label != "invalid" {
        GATEWAY_LATENCY
            .with_label_values(&[label])
            .observe(elapsed.as_secs_f64());
    }
}

pub fn metrics_output() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay::ValidationError;

    #[test]
    fn labels_follow_error_kind() {
        let ok: Result<RedirectResult, RelayError> = Ok(RedirectResult {
            redirect_url: "https://pay.example/abc".to_string(),
        });
        assert_eq!(result_label(&ok), "success");
        assert_eq!(
            result_label(&Err(ValidationError::Amount.into())),
            "invalid"
        );
        assert_eq!(
            result_label(&Err(RelayError::GatewayRejected("x".into()))),
            "rejected"
        );
        assert_eq!(
            result_label(&Err(RelayError::MalformedResponse("x".into()))),
            "error"
        );
    }

    #[test]
    fn recorded_outcomes_appear_in_output() {
        record(
            &Err(RelayError::GatewayRejected("x".into())),
            Duration::from_millis(120),
        );
        let output = metrics_output();
        assert!(output.contains("paynow_relay_payments_total"));
        assert!(output.contains("paynow_relay_gateway_duration_seconds"));
    }
}
