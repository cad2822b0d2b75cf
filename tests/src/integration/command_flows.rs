//! # Command Flows
//!
//! The JSON-lines protocol driven end to end, including a relayed submission
//! whose signature travels as hex.

#[cfg(test)]
mod tests {
    use dr_01_signature_verification::test_helpers::generate_account;
    use registry_runtime::{handle_line, Response};
    use serde_json::{json, Value};
    use shared_bus::EventFilter;
    use shared_types::to_hex;

    use crate::fixtures::{registry, signed, word};

    fn line(value: Value) -> String {
        value.to_string()
    }

    #[tokio::test]
    async fn test_relayed_submission_over_json() {
        let registry = registry();
        let mut events = registry.subscribe(EventFilter::all());
        let (key, submitter) = generate_account();
        let request = signed(&registry, &key, word(0x11), word(0xD1), vec![0x12, 0x34]);

        let verify = json!({
            "op": "verify_signature",
            "submitter": to_hex(&submitter),
            "data_hash": to_hex(&word(0x11)),
            "da": to_hex(&word(0xD1)),
            "cid": "0x1234",
            "signature": to_hex(&request.signature),
        });
        let response = handle_line(&registry, &mut events, &line(verify)).await;
        assert_eq!(response.result, Some(Value::Bool(true)));

        let submit = json!({
            "op": "delegated_submit",
            "submitter": to_hex(&submitter),
            "data_hash": to_hex(&word(0x11)),
            "da": to_hex(&word(0xD1)),
            "cid": "0x1234",
            "signature": to_hex(&request.signature),
        });
        let response = handle_line(&registry, &mut events, &line(submit.clone())).await;
        assert!(response.ok, "{response:?}");

        let response = handle_line(&registry, &mut events, &line(submit)).await;
        assert_eq!(response.error.map(|e| e.kind), Some("duplicate".to_string()));

        let response = handle_line(&registry, &mut events, &line(json!({"op": "events"}))).await;
        let drained = response.result.unwrap();
        assert_eq!(drained.as_array().map(Vec::len), Some(1));
        assert_eq!(drained[0]["event"], "SubmissionRecorded");
        assert_eq!(drained[0]["cid"], "0x1234");
    }

    #[tokio::test]
    async fn test_batch_submit_over_json() {
        let registry = registry();
        let mut events = registry.subscribe(EventFilter::all());
        let caller = to_hex(&[0xA1; 20]);

        let batch = json!({
            "op": "batch_submit",
            "caller": caller,
            "requests": [
                {"data_hash": to_hex(&word(1)), "da": to_hex(&word(0xD1)), "cid": "0x01"},
                {"data_hash": to_hex(&word(1)), "da": to_hex(&word(0xD2)), "cid": "0x02"},
            ],
        });
        let response = handle_line(&registry, &mut events, &line(batch)).await;
        assert!(response.ok);

        let response = handle_line(
            &registry,
            &mut events,
            &line(json!({"op": "get_all_direct", "submitter": caller, "data_hash": to_hex(&word(1))})),
        )
        .await;
        assert_eq!(response.result.unwrap().as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_unknown_op_reports_parse_error() {
        let registry = registry();
        let mut events = registry.subscribe(EventFilter::all());

        let response: Response =
            handle_line(&registry, &mut events, &line(json!({"op": "delete"}))).await;
        assert!(!response.ok);
        assert_eq!(response.error.map(|e| e.kind), Some("parse".to_string()));
    }

    #[tokio::test]
    async fn test_metrics_exposed() {
        registry_telemetry::register_metrics().unwrap();
        let registry = registry();
        let mut events = registry.subscribe(EventFilter::all());
        registry
            .submit([0x01; 20], word(1), word(2), vec![0x01])
            .await
            .unwrap();

        let response = handle_line(&registry, &mut events, &line(json!({"op": "metrics"}))).await;
        let text = response.result.unwrap();
        assert!(text
            .as_str()
            .unwrap_or_default()
            .contains("dr_submissions_recorded_total"));
    }
}
