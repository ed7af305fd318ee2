//! Startup availability probe.
//!
//! The backend spins down when idle; the first request after a cold start can
//! take tens of seconds. One health request is issued before anything else
//! mounts, and once a soft threshold passes without a response the UI shows a
//! "waking" notice. The threshold is presentation-only: the request itself
//! keeps running.

use std::time::{Duration, Instant};

use crate::api::ApiClient;

/// How long the health request may remain unanswered before the waking
/// presentation kicks in.
pub const WAKING_THRESHOLD: Duration = Duration::from_secs(3);

/// Phases of the one-shot probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbePhase {
    /// Request in flight, within the grace window.
    Checking { since: Instant },
    /// Request still in flight past the grace window.
    Waking { since: Instant },
    /// Backend answered; the rest of the UI may mount.
    Ready,
    /// Request failed. No automatic retry.
    Failed(String),
}

impl ProbePhase {
    pub fn start() -> Self {
        ProbePhase::Checking {
            since: Instant::now(),
        }
    }

    /// Advances `Checking` to `Waking` once the grace window has elapsed.
    /// Returns whether the phase changed.
    pub fn tick(&mut self) -> bool {
        if let ProbePhase::Checking { since } = *self {
            if since.elapsed() >= WAKING_THRESHOLD {
                *self = ProbePhase::Waking { since };
                return true;
            }
        }
        false
    }

    /// Applies the probe result. A result arriving after teardown is the
    /// caller's problem to suppress; this just records it.
    pub fn finish(&mut self, result: Result<(), String>) {
        *self = match result {
            Ok(()) => ProbePhase::Ready,
            Err(message) => ProbePhase::Failed(message),
        };
    }

    /// True while the request is still unanswered.
    pub fn is_pending(&self) -> bool {
        matches!(self, ProbePhase::Checking { .. } | ProbePhase::Waking { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ProbePhase::Ready)
    }
}

/// Issues the one-shot health request.
pub async fn wake(api: &ApiClient) -> Result<(), String> {
    api.health().await.map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn phase_checking_for(age: Duration) -> ProbePhase {
        let since = Instant::now().checked_sub(age).expect("instant underflow");
        ProbePhase::Checking { since }
    }

    #[test]
    fn stays_checking_inside_grace_window() {
        let mut phase = phase_checking_for(Duration::from_secs(1));
        assert!(!phase.tick());
        assert!(matches!(phase, ProbePhase::Checking { .. }));
    }

    #[test]
    fn switches_to_waking_after_grace_window() {
        let mut phase = phase_checking_for(Duration::from_secs(4));
        assert!(phase.tick());
        assert!(matches!(phase, ProbePhase::Waking { .. }));
        // Further ticks are no-ops; the phase only moves on via finish().
        assert!(!phase.tick());
    }

    #[test]
    fn finish_resolves_waking_to_ready() {
        let mut phase = phase_checking_for(Duration::from_secs(5));
        phase.tick();
        phase.finish(Ok(()));
        assert!(phase.is_ready());
    }

    #[test]
    fn finish_records_failure_message() {
        let mut phase = ProbePhase::start();
        phase.finish(Err("Server responded with status 503".to_string()));
        assert_eq!(
            phase,
            ProbePhase::Failed("Server responded with status 503".to_string())
        );
        assert!(!phase.is_pending());
    }

    #[tokio::test]
    async fn wake_resolves_against_healthy_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri()).unwrap();
        assert!(wake(&api).await.is_ok());
    }

    #[tokio::test]
    async fn wake_reports_unhealthy_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri()).unwrap();
        let err = wake(&api).await.unwrap_err();
        assert!(err.contains("503"));
    }
}
