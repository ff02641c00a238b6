//! # Concurrent Access
//!
//! Many in-flight requests against one shared store: every accepted
//! submission is recorded exactly once and reports read consistent
//! snapshots.

#[cfg(test)]
mod tests {
    use crate::integration::harness::TestNode;
    use axum::http::StatusCode;
    use ns_01_submission_store::SubmissionStore;
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Arc;

    const WRITERS: usize = 32;
    const SUBMISSIONS_PER_WRITER: usize = 10;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submissions_all_recorded() {
        let node = Arc::new(TestNode::new());

        let mut handles = Vec::with_capacity(WRITERS);
        for writer in 0..WRITERS {
            let node = Arc::clone(&node);
            handles.push(tokio::spawn(async move {
                for _ in 0..SUBMISSIONS_PER_WRITER {
                    let (status, _) = node.sort(json!({ "numbers": [42, writer % 4] })).await;
                    assert_eq!(status, StatusCode::OK);
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let total = WRITERS * SUBMISSIONS_PER_WRITER;
        assert_eq!(node.submissions(), total);

        // Ids are unique and dense.
        let ids: HashSet<u64> = node
            .store
            .query_after(0)
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids.len(), total);
        assert_eq!(ids.iter().copied().max(), Some(total as u64));

        let (_, body) = node.most_frequent("1").await;
        assert_eq!(body, json!([{ "number": 42, "frequency": total }]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reports_during_writes_never_fail() {
        let node = Arc::new(TestNode::new());

        let writer = {
            let node = Arc::clone(&node);
            tokio::spawn(async move {
                for i in 0..200 {
                    node.sort(json!({ "numbers": [i % 7] })).await;
                }
            })
        };

        let reader = {
            let node = Arc::clone(&node);
            tokio::spawn(async move {
                let mut last_total = 0u64;
                for _ in 0..100 {
                    let (status, body) = node.most_frequent("7").await;
                    assert_eq!(status, StatusCode::OK);

                    // Submissions only accumulate inside the window.
                    let total: u64 = body
                        .as_array()
                        .unwrap()
                        .iter()
                        .map(|e| e["frequency"].as_u64().unwrap())
                        .sum();
                    assert!(total >= last_total);
                    last_total = total;
                }
            })
        };

        writer.await.unwrap();
        reader.await.unwrap();

        let (_, body) = node.most_frequent("7").await;
        let total: u64 = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["frequency"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 200);
    }
}
