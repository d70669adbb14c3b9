//! Orchestrator — remote extraction first, heuristic fallback on any failure.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use cvsage_core::CvSageConfig;
use cvsage_extract::{extract_profile, extract_profile_with, Dictionary, ExtractedProfile};
use cvsage_remote::{HttpRemoteExtractor, RemoteConfig, RemoteExtractionError, RemoteExtractor};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::types::*;

/// Coordinates one remote attempt and the local fallback for each request.
///
/// Holds no per-request state, so one instance can serve concurrent requests
/// behind an `Arc`.
pub struct Orchestrator {
    settings: ExtractionSettings,
    remote: Option<Arc<dyn RemoteExtractor>>,
    dictionary: Option<Arc<Dictionary>>,
}

impl Orchestrator {
    /// Create an orchestrator with explicit settings and remote backend.
    pub fn new(settings: ExtractionSettings, remote: Option<Arc<dyn RemoteExtractor>>) -> Self {
        info!(
            "Orchestrator initialized: remote_enabled={}, remote={}, timeout={:?}",
            settings.remote_enabled,
            remote.as_ref().map(|r| r.name()).unwrap_or("none"),
            settings.remote_timeout
        );
        Self {
            settings,
            remote,
            dictionary: None,
        }
    }

    /// Create from runtime configuration, wiring the HTTP extractor when enabled.
    ///
    /// The HTTP extractor is wired even without a credential; the missing key
    /// then shows up as the fallback reason.
    pub fn from_config(
        config: &CvSageConfig,
        remote_config: RemoteConfig,
    ) -> cvsage_core::Result<Self> {
        let settings = ExtractionSettings::from(config);
        let remote: Option<Arc<dyn RemoteExtractor>> = if settings.remote_enabled {
            Some(Arc::new(HttpRemoteExtractor::new(
                remote_config,
                settings.remote_timeout,
            )?))
        } else {
            None
        };
        Ok(Self::new(settings, remote))
    }

    /// Heuristics only; never touches the network.
    pub fn local_only() -> Self {
        Self::new(ExtractionSettings::local_only(), None)
    }

    /// Use a custom dictionary for the local path.
    pub fn with_dictionary(mut self, dictionary: Arc<Dictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Whether a remote attempt will be made for each request.
    pub fn remote_available(&self) -> bool {
        self.settings.remote_enabled && self.remote.is_some()
    }

    /// Extract a profile: remote first, heuristics on any remote failure.
    pub async fn extract(&self, text: &str) -> ExtractionOutcome {
        self.extract_until(text, std::future::pending()).await
    }

    /// Like [`Orchestrator::extract`], abandoning the remote leg when `cancel`
    /// completes. Cancellation counts as a transport failure, so the local
    /// path still produces a profile.
    pub async fn extract_until<F>(&self, text: &str, cancel: F) -> ExtractionOutcome
    where
        F: Future<Output = ()>,
    {
        let request_id = Uuid::new_v4();
        let span = info_span!("extract", %request_id, chars = text.chars().count());

        async move {
            let started = Instant::now();

            let remote = match &self.remote {
                Some(remote) if self.settings.remote_enabled => remote,
                _ => {
                    debug!("Remote extraction unavailable, using heuristics");
                    let profile = self.run_local(text).await;
                    return outcome(profile, ExtractionPath::Local, None, started);
                }
            };

            match self.attempt_remote(remote.as_ref(), text, cancel).await {
                Ok(profile) => {
                    info!("Remote extraction succeeded via {}", remote.name());
                    outcome(profile, ExtractionPath::Remote, None, started)
                }
                Err(e) => {
                    let kind = e.kind();
                    warn!("Remote extraction failed ({}): {}; falling back to heuristics", kind, e);
                    let profile = self.run_local(text).await;
                    outcome(profile, ExtractionPath::Local, Some(kind), started)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Heuristic extraction on the calling thread, for callers without a runtime.
    pub fn extract_local(&self, text: &str) -> ExtractionOutcome {
        let started = Instant::now();
        let profile = local_profile(self.dictionary.as_deref(), text);
        outcome(profile, ExtractionPath::Local, None, started)
    }

    async fn attempt_remote<F>(
        &self,
        remote: &dyn RemoteExtractor,
        text: &str,
        cancel: F,
    ) -> Result<ExtractedProfile, RemoteExtractionError>
    where
        F: Future<Output = ()>,
    {
        let timeout = self.settings.remote_timeout;
        tokio::select! {
            result = tokio::time::timeout(timeout, remote.extract(text)) => match result {
                Ok(result) => result,
                Err(_) => Err(RemoteExtractionError::Transport(format!(
                    "Remote extraction timed out after {:?}",
                    timeout
                ))),
            },
            _ = cancel => Err(RemoteExtractionError::Transport(
                "Remote extraction cancelled".into(),
            )),
        }
    }

    /// Run the CPU-bound heuristics on the blocking pool.
    async fn run_local(&self, text: &str) -> ExtractedProfile {
        let dictionary = self.dictionary.clone();
        let owned = text.to_string();

        match tokio::task::spawn_blocking(move || local_profile(dictionary.as_deref(), &owned))
            .await
        {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Heuristic task failed to join ({}), running inline", e);
                local_profile(self.dictionary.as_deref(), text)
            }
        }
    }
}

fn local_profile(dictionary: Option<&Dictionary>, text: &str) -> ExtractedProfile {
    match dictionary {
        Some(dict) => extract_profile_with(text, dict),
        None => extract_profile(text),
    }
}

fn outcome(
    profile: ExtractedProfile,
    path: ExtractionPath,
    fallback_reason: Option<cvsage_remote::RemoteErrorKind>,
    started: Instant,
) -> ExtractionOutcome {
    ExtractionOutcome {
        profile,
        path,
        fallback_reason,
        duration_ms: started.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cvsage_remote::RemoteErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const CV: &str = "• Built TaskManager Pro app\n5+ years of experience with Swift";

    /// Remote backend returning a canned result and counting calls.
    struct FakeRemote {
        calls: AtomicUsize,
        result: fn() -> Result<ExtractedProfile, RemoteExtractionError>,
    }

    impl FakeRemote {
        fn new(result: fn() -> Result<ExtractedProfile, RemoteExtractionError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                result,
            })
        }
    }

    #[async_trait]
    impl RemoteExtractor for FakeRemote {
        fn name(&self) -> &str {
            "fake"
        }

        async fn extract(&self, _text: &str) -> Result<ExtractedProfile, RemoteExtractionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    struct SlowRemote;

    #[async_trait]
    impl RemoteExtractor for SlowRemote {
        fn name(&self) -> &str {
            "slow"
        }

        async fn extract(&self, _text: &str) -> Result<ExtractedProfile, RemoteExtractionError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(ExtractedProfile::default())
        }
    }

    fn remote_profile() -> Result<ExtractedProfile, RemoteExtractionError> {
        Ok(ExtractedProfile {
            years_of_experience: 11,
            ..Default::default()
        })
    }

    fn orchestrator_with(remote: Arc<dyn RemoteExtractor>) -> Orchestrator {
        Orchestrator::new(ExtractionSettings::default(), Some(remote))
    }

    #[tokio::test]
    async fn test_remote_success_is_used() {
        let fake = FakeRemote::new(remote_profile);
        let outcome = orchestrator_with(fake.clone()).extract(CV).await;
        assert_eq!(outcome.path, ExtractionPath::Remote);
        assert_eq!(outcome.profile.years_of_experience, 11);
        assert!(!outcome.fell_back());
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_each_failure_kind_falls_back_once() {
        let failures: [fn() -> Result<ExtractedProfile, RemoteExtractionError>; 5] = [
            || Err(RemoteExtractionError::MissingCredential),
            || Err(RemoteExtractionError::Transport("connection reset".into())),
            || Err(RemoteExtractionError::Http { status: 500, body: String::new() }),
            || Err(RemoteExtractionError::EmptyResponse),
            || Err(RemoteExtractionError::MalformedPayload("bad".into())),
        ];

        for failure in failures {
            let fake = FakeRemote::new(failure);
            let outcome = orchestrator_with(fake.clone()).extract(CV).await;
            let expected = failure().unwrap_err().kind();
            assert_eq!(outcome.path, ExtractionPath::Local);
            assert_eq!(outcome.fallback_reason, Some(expected));
            assert_eq!(outcome.profile.years_of_experience, 5);
            assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_remote_disabled_skips_remote() {
        let fake = FakeRemote::new(remote_profile);
        let orchestrator = Orchestrator::new(ExtractionSettings::local_only(), Some(fake.clone()));
        assert!(!orchestrator.remote_available());
        let outcome = orchestrator.extract(CV).await;
        assert_eq!(outcome.path, ExtractionPath::Local);
        assert_eq!(outcome.fallback_reason, None);
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_timeout_is_transport_failure() {
        let settings = ExtractionSettings {
            remote_enabled: true,
            remote_timeout: Duration::from_millis(50),
        };
        let orchestrator = Orchestrator::new(settings, Some(Arc::new(SlowRemote)));
        let outcome = orchestrator.extract(CV).await;
        assert_eq!(outcome.path, ExtractionPath::Local);
        assert_eq!(outcome.fallback_reason, Some(RemoteErrorKind::Transport));
        assert!(outcome.profile.projects.contains("Built TaskManager Pro app"));
    }

    #[tokio::test]
    async fn test_cancellation_still_reaches_fallback() {
        let orchestrator = orchestrator_with(Arc::new(SlowRemote));
        let outcome = orchestrator
            .extract_until(CV, tokio::time::sleep(Duration::from_millis(20)))
            .await;
        assert_eq!(outcome.path, ExtractionPath::Local);
        assert_eq!(outcome.fallback_reason, Some(RemoteErrorKind::Transport));
        assert_eq!(outcome.profile.years_of_experience, 5);
    }

    #[tokio::test]
    async fn test_custom_dictionary_on_local_path() {
        let mut dict = Dictionary::default();
        dict.technical_skills = vec!["Fortran".into()];
        let orchestrator = Orchestrator::local_only().with_dictionary(Arc::new(dict));
        let outcome = orchestrator.extract("fortran and swift").await;
        assert_eq!(
            outcome.profile.technical_skills.into_iter().collect::<Vec<_>>(),
            vec!["Fortran".to_string()]
        );
    }

    #[test]
    fn test_extract_local_without_runtime() {
        let outcome = Orchestrator::local_only().extract_local(CV);
        assert_eq!(outcome.path, ExtractionPath::Local);
        assert!(outcome.profile.technical_skills.contains("Swift"));
    }
}
