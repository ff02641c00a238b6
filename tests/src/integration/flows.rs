//! # Integration Test Flows
//!
//! Submit-and-sort and top-frequency exercised together through the gateway
//! router, sharing one store and one mock clock.
//!
//! ## Flows Tested:
//!
//! 1. **Sort → Report**: every accepted submission feeds the report, unfiltered
//! 2. **Rejection**: rejected submissions never reach the store
//! 3. **Window**: only submissions strictly inside the trailing window count

#[cfg(test)]
mod tests {
    use crate::integration::harness::{TestNode, START_MS};
    use axum::http::StatusCode;
    use ns_01_submission_store::{StoreConfig, SubmissionStore};
    use ns_04_api_gateway::GatewayConfig;
    use serde_json::json;

    const ONE_SECOND_MS: u64 = 1_000;
    const FIVE_MINUTES_MS: u64 = 5 * 60 * 1_000;

    // =========================================================================
    // SORT → REPORT
    // =========================================================================

    #[tokio::test]
    async fn test_documented_scenario() {
        let node = TestNode::new();

        let (status, body) = node
            .sort(json!({
                "numbers": [5, 3, 1, 4, 1, 5],
                "filterType": ">",
                "filterValue": 2
            }))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "sortedNumbers": [3, 4, 5, 5] }));

        // The filter only shapes the response; the full array was recorded.
        let (status, body) = node.most_frequent("3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "number": 1, "frequency": 2 },
                { "number": 5, "frequency": 2 },
                { "number": 3, "frequency": 1 }
            ])
        );
    }

    #[tokio::test]
    async fn test_ranking_across_submissions() {
        let node = TestNode::new();
        node.sort(json!({ "numbers": [1, 2, 2] })).await;
        node.sort(json!({ "numbers": [2, 3] })).await;

        let (_, body) = node.most_frequent("2").await;
        assert_eq!(
            body,
            json!([
                { "number": 2, "frequency": 3 },
                { "number": 1, "frequency": 1 }
            ])
        );

        let (_, body) = node.most_frequent("1").await;
        assert_eq!(body, json!([{ "number": 2, "frequency": 3 }]));

        let (_, body) = node.most_frequent("100").await;
        assert_eq!(body.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_every_filter_operator() {
        let node = TestNode::new();
        let input = json!([4, -2, 7, 4, 0.5]);

        let cases = [
            ("<", json!([-2, 0.5])),
            (">", json!([7])),
            ("=", json!([4, 4])),
        ];
        for (operator, expected) in cases {
            let (status, body) = node
                .sort(json!({ "numbers": input, "filterType": operator, "filterValue": 4 }))
                .await;
            assert_eq!(status, StatusCode::OK, "{operator}");
            assert_eq!(body["sortedNumbers"], expected, "{operator}");
        }
        assert_eq!(node.submissions(), 3);
    }

    #[tokio::test]
    async fn test_empty_filtered_result_still_records() {
        let node = TestNode::new();
        let (status, body) = node
            .sort(json!({ "numbers": [5], "filterType": ">", "filterValue": 10 }))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "sortedNumbers": [] }));
        assert_eq!(node.submissions(), 1);
    }

    #[tokio::test]
    async fn test_report_on_empty_store() {
        let node = TestNode::new();
        let (status, body) = node.most_frequent("5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    // =========================================================================
    // REJECTION
    // =========================================================================

    #[tokio::test]
    async fn test_rejected_submissions_are_not_recorded() {
        let node = TestNode::new();

        let rejected = [
            json!({}),
            json!({ "numbers": [] }),
            json!({ "numbers": [1, "two"] }),
            json!({ "numbers": [1], "filterType": "!=" , "filterValue": 1 }),
            json!({ "numbers": [1], "filterValue": "abc" }),
            json!({ "numbers": [1], "filterType": "<" }),
        ];
        for body in rejected {
            let (status, _) = node.sort(body.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        }

        assert_eq!(node.submissions(), 0);
        let (_, body) = node.most_frequent("10").await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_filter_type_without_value_payload() {
        let node = TestNode::new();
        let (status, body) = node
            .sort(json!({ "numbers": [3, 1], "filterType": ">" }))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "If filterType is provided, filterValue must also be provided." })
        );
    }

    #[tokio::test]
    async fn test_invalid_count_rejected() {
        let node = TestNode::new();
        node.sort(json!({ "numbers": [1] })).await;

        for count in ["0", "-1", "1.5", "ten", ""] {
            let (status, body) = node.most_frequent(count).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "count={count}");
            assert_eq!(body["errors"][0]["field"], "count");
        }
    }

    #[tokio::test]
    async fn test_capacity_exhaustion_is_internal_error() {
        let mut config = GatewayConfig::default();
        config.store = StoreConfig::with_capacity(2);
        let node = TestNode::with_config(config);

        for _ in 0..2 {
            let (status, _) = node.sort(json!({ "numbers": [1] })).await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, body) = node.sort(json!({ "numbers": [1] })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));

        // Reads still work.
        let (_, body) = node.most_frequent("1").await;
        assert_eq!(body, json!([{ "number": 1, "frequency": 2 }]));
    }

    // =========================================================================
    // WINDOW
    // =========================================================================

    #[tokio::test]
    async fn test_old_submissions_leave_the_window() {
        let node = TestNode::new();

        node.sort(json!({ "numbers": [9, 9, 9] })).await;
        node.clock.advance(FIVE_MINUTES_MS - ONE_SECOND_MS);
        node.sort(json!({ "numbers": [1] })).await;

        // Both submissions are inside the window.
        let (_, body) = node.most_frequent("5").await;
        assert_eq!(
            body,
            json!([
                { "number": 9, "frequency": 3 },
                { "number": 1, "frequency": 1 }
            ])
        );

        // First submission is now exactly five minutes old and drops out.
        node.clock.advance(ONE_SECOND_MS);
        let (_, body) = node.most_frequent("5").await;
        assert_eq!(body, json!([{ "number": 1, "frequency": 1 }]));

        // Expired submissions are still stored.
        assert_eq!(node.submissions(), 2);
        assert_eq!(node.store.query_after(0).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_custom_window() {
        let mut config = GatewayConfig::default();
        config.report.window_secs = 10;
        let node = TestNode::with_config(config);

        node.sort(json!({ "numbers": [4] })).await;
        node.clock.set(START_MS + 9 * ONE_SECOND_MS);
        let (_, body) = node.most_frequent("1").await;
        assert_eq!(body, json!([{ "number": 4, "frequency": 1 }]));

        node.clock.set(START_MS + 10 * ONE_SECOND_MS);
        let (_, body) = node.most_frequent("1").await;
        assert_eq!(body, json!([]));
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    #[tokio::test]
    async fn test_metrics_track_both_routes() {
        let node = TestNode::new();
        node.sort(json!({ "numbers": [1, 2] })).await;
        node.sort(json!({ "numbers": "bad" })).await;
        node.most_frequent("1").await;

        let (status, metrics) = node.get("/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(metrics["requests"]["total"], 3);
        assert_eq!(metrics["requests"]["success"], 2);
        assert_eq!(metrics["routes"]["sort_numbers"], 2);
        assert_eq!(metrics["routes"]["most_frequent_numbers"], 1);
        assert_eq!(metrics["store"]["submissions"], 1);
    }

    #[test]
    fn test_runtime_config_builds_gateway() {
        let config = node_runtime::load_config_from(|name| match name {
            "PORT" => Some("0".to_string()),
            "NS_WINDOW_SECS" => Some("30".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.http.port, 0);

        let gateway = node_runtime::build_gateway(config).unwrap();
        assert_eq!(gateway.config().report.window_secs, 30);
    }

    #[test]
    fn test_runtime_rejects_invalid_config() {
        let config = node_runtime::load_config_from(|name| {
            (name == "NS_MAX_SUBMISSIONS").then(|| "0".to_string())
        })
        .unwrap();
        assert!(node_runtime::build_gateway(config).is_err());
    }
}
