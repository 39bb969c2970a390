use std::sync::Arc;

use anyhow::Result;
use tokio::sync::OnceCell;

use crate::core::interfaces::adapters::{OcrService, OcrServiceFactory};

/// Holds an engine that is built on first use and shared afterwards.
///
/// Concurrent first callers wait on the same construction, so the factory
/// runs at most once per holder unless a construction attempt fails; a
/// failed attempt leaves the holder empty and the next caller retries.
pub struct SharedOcrEngine {
    factory: Arc<dyn OcrServiceFactory>,
    engine: OnceCell<Arc<dyn OcrService>>,
}

impl SharedOcrEngine {
    pub fn new(factory: Arc<dyn OcrServiceFactory>) -> Self {
        Self {
            factory,
            engine: OnceCell::new(),
        }
    }

    pub async fn get_or_init(&self) -> Result<Arc<dyn OcrService>> {
        let engine = self
            .engine
            .get_or_try_init(|| self.factory.build_service())
            .await?;
        Ok(Arc::clone(engine))
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::OcrResult;
    use async_trait::async_trait;
    use image::DynamicImage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticOcrService;

    #[async_trait]
    impl OcrService for StaticOcrService {
        async fn extract_text_from_image(&self, _image: &DynamicImage) -> Result<OcrResult> {
            Ok(OcrResult::from_plain_text("static".to_string()))
        }
    }

    struct CountingFactory {
        builds: AtomicUsize,
        failures_before_success: usize,
    }

    impl CountingFactory {
        fn new(failures_before_success: usize) -> Self {
            Self {
                builds: AtomicUsize::new(0),
                failures_before_success,
            }
        }
    }

    #[async_trait]
    impl OcrServiceFactory for CountingFactory {
        async fn build_service(&self) -> Result<Arc<dyn OcrService>> {
            let attempt = self.builds.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if attempt < self.failures_before_success {
                anyhow::bail!("model file missing");
            }
            Ok(Arc::new(StaticOcrService))
        }
    }

    #[tokio::test]
    async fn test_engine_is_built_once_across_calls() {
        let factory = Arc::new(CountingFactory::new(0));
        let shared = SharedOcrEngine::new(factory.clone());

        assert!(!shared.is_initialized());
        let first = shared.get_or_init().await.unwrap();
        let second = shared.get_or_init().await.unwrap();

        assert!(shared.is_initialized());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(factory.builds.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_calls_build_once() {
        let factory = Arc::new(CountingFactory::new(0));
        let shared = Arc::new(SharedOcrEngine::new(factory.clone()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                tokio::spawn(async move { shared.get_or_init().await.is_ok() })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap());
        }

        assert_eq!(factory.builds.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_build_is_retried_on_next_call() {
        let factory = Arc::new(CountingFactory::new(1));
        let shared = SharedOcrEngine::new(factory.clone());

        let first = shared.get_or_init().await;
        assert!(first.is_err());
        assert!(!shared.is_initialized());

        let second = shared.get_or_init().await;
        assert!(second.is_ok());
        assert_eq!(factory.builds.load(Ordering::SeqCst), 2);
    }
}
