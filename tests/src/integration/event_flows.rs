//! # Event Flows
//!
//! One notification per successful mutation, in commit order, none on
//! failure.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dr_01_signature_verification::test_helpers::generate_account;
    use shared_bus::{EventFilter, EventTopic, RegistryEvent};
    use shared_types::{Cid, SubmissionRequest};
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use crate::fixtures::{addr, registry, signed, word};

    #[tokio::test]
    async fn test_submission_emits_exactly_once() {
        let registry = registry();
        let mut sub = registry.subscribe(EventFilter::all());

        registry.submit(addr(1), word(1), word(2), vec![0x12, 0x34]).await.unwrap();
        let _ = registry.submit(addr(1), word(1), word(2), vec![0xab, 0xcd]).await;

        assert_eq!(
            sub.drain(),
            vec![RegistryEvent::SubmissionRecorded {
                submitter: addr(1),
                data_hash: word(1),
                da: word(2),
                cid: Cid::from(vec![0x12, 0x34]),
            }]
        );
    }

    #[tokio::test]
    async fn test_failed_batch_emits_nothing() {
        let registry = registry();
        let mut sub = registry.subscribe(EventFilter::all());

        let requests = vec![
            SubmissionRequest::new(word(1), word(0xD1), vec![0x01]),
            SubmissionRequest::new(word(1), word(0xD2), Vec::new()),
        ];
        assert!(registry.batch_submit(addr(1), requests).await.is_err());

        assert!(sub.drain().is_empty());
    }

    #[tokio::test]
    async fn test_batch_events_in_element_order() {
        let registry = registry();
        let mut sub = registry.subscribe(EventFilter::all());
        let das = [word(0xD3), word(0xD1), word(0xD2)];

        registry
            .batch_submit(
                addr(1),
                das.iter()
                    .map(|da| SubmissionRequest::new(word(1), *da, vec![0x01]))
                    .collect(),
            )
            .await
            .unwrap();

        let seen: Vec<_> = sub
            .drain()
            .into_iter()
            .map(|event| match event {
                RegistryEvent::SubmissionRecorded { da, .. } => da,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(seen, das.to_vec());
    }

    #[tokio::test]
    async fn test_delegated_event_names_submitter_not_relayer() {
        let registry = registry();
        let (key, submitter) = generate_account();

        let mut actor_sub = registry.subscribe(EventFilter::from_actors(vec![submitter]));
        registry
            .delegated_submit(submitter, signed(&registry, &key, word(1), word(2), vec![0x01]))
            .await
            .unwrap();

        let events = actor_sub.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].actor(), submitter);
    }

    #[tokio::test]
    async fn test_topic_filter_separates_extensions() {
        let registry = registry();
        let mut extensions = registry.subscribe(EventFilter::topics(vec![EventTopic::Extensions]));

        registry.submit(addr(1), word(1), word(2), vec![0x01]).await.unwrap();
        registry.extend(addr(2), addr(1)).await.unwrap();

        assert_eq!(
            extensions.drain(),
            vec![RegistryEvent::ExtensionDeclared {
                new_submitter: addr(2),
                old_submitter: addr(1),
            }]
        );
    }

    #[tokio::test]
    async fn test_event_stream_delivers_committed_writes() {
        let registry = registry();
        let mut stream = registry.event_stream(EventFilter::all());

        registry.extend(addr(2), addr(1)).await.unwrap();

        let event = timeout(Duration::from_secs(1), stream.next())
            .await
            .expect("stream timed out")
            .expect("stream closed");
        assert_eq!(event.topic(), EventTopic::Extensions);
    }
}
