//! End-to-End Tests for the Translation Pipeline
//!
//! These run the service against the mock backend. Tests marked `#[ignore]`
//! need a live inference endpoint:
//!
//! ```bash
//! export NOTICE_MT_MODEL_URL=https://api-inference.huggingface.co/models/<model>
//! cargo test -p notice-mt integration_tests -- --ignored --nocapture
//! ```

#[cfg(test)]
mod tests {
    use super::super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Instant;

    fn notice_backend() -> Arc<MockBackend> {
        let mut map = HashMap::new();
        map.insert(
            "Parking is not allowed.".to_string(),
            "पार्किंग की अनुमति नहीं है।".to_string(),
        );
        map.insert(
            "This notice is issued under Section 144 of the Code".to_string(),
            "यह नोटिस संहिता की धारा 99 के अंतर्गत जारी किया गया है".to_string(),
        );
        map.insert(
            "Section 5 applies until Section 10 is notified".to_string(),
            "धारा 1 लागू है जब तक धारा 2 अधिसूचित नहीं होती".to_string(),
        );
        map.insert(
            "A curfew is imposed tonight. The curfew ends at dawn.".to_string(),
            "आज रात कर्ट लगाया गया है। कर्ट सुबह समाप्त होगा।".to_string(),
        );
        Arc::new(MockBackend::new(MockMode::Mappings(map)))
    }

    #[tokio::test]
    async fn test_e2e_plain_notice() {
        let service = TranslationService::new(notice_backend());
        let request = TranslationRequest::new("Parking is not allowed.").with_beam_width(4);
        let result = service.translate(&request).await;

        assert_eq!(result.translation, "पार्किंग की अनुमति नहीं है।");
        assert_eq!(result.metadata.input_word_count, 4);
        assert_eq!(result.metadata.beam_width, 4);
        assert_eq!(result.confidence, 0.9);
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_e2e_section_number_fixed() {
        let service = TranslationService::new(notice_backend());
        let result = service
            .translate(&TranslationRequest::new(
                "This notice is issued under Section 144 of the Code",
            ))
            .await;

        assert!(result.translation.contains("धारा 144"));
        assert!(!result.translation.contains("धारा 99"));
    }

    #[tokio::test]
    async fn test_e2e_multiple_sections() {
        let service = TranslationService::new(notice_backend());
        let result = service
            .translate(&TranslationRequest::new(
                "Section 5 applies until Section 10 is notified",
            ))
            .await;

        assert_eq!(
            result.translation,
            "धारा 5 लागू है जब तक धारा 10 अधिसूचित नहीं होती"
        );
    }

    #[tokio::test]
    async fn test_e2e_curfew_fixed() {
        let service = TranslationService::new(notice_backend());
        let result = service
            .translate(&TranslationRequest::new(
                "A curfew is imposed tonight. The curfew ends at dawn.",
            ))
            .await;

        assert_eq!(result.translation.matches("कर्फ्यू").count(), 2);
        assert!(!result.translation.contains("कर्ट"));
    }

    #[tokio::test]
    async fn test_e2e_concurrent_requests_share_backend() {
        let backend = Arc::new(MockBackend::with_delay(MockMode::Echo, 20));
        let service = Arc::new(TranslationService::new(backend.clone()));

        let start = Instant::now();
        let mut handles = Vec::new();
        for i in 0..8 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service
                    .translate(&TranslationRequest::new(format!("notice number {}", i)))
                    .await
            }));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.unwrap();
            assert_eq!(result.translation, format!("notice number {}", i));
        }

        assert_eq!(backend.call_count(), 8);
        // Requests are not serialized behind one another
        assert!(start.elapsed().as_millis() < 8 * 20);
    }

    #[tokio::test]
    #[ignore]
    async fn test_e2e_live_endpoint() {
        if std::env::var(inference_api::MODEL_URL_VAR).is_err() {
            eprintln!("⚠️  Skipping: {} not set", inference_api::MODEL_URL_VAR);
            return;
        }

        let backend = Arc::new(InferenceApiBackend::from_env().expect("backend config"));
        let service = TranslationService::new(backend);

        for pair in SAMPLE_PAIRS {
            let start = Instant::now();
            let result = service.translate(&TranslationRequest::new(pair.english)).await;
            println!(
                "{} → {} (confidence {:.1}, {}ms)",
                pair.english,
                result.translation,
                result.confidence,
                start.elapsed().as_millis()
            );
            assert!(result.is_success(), "{:?}", result.error());
            assert!(!result.translation.is_empty());
        }
    }
}
