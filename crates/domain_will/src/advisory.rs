//! Advisory collaborator
//!
//! Supplementary explanations come from an external question-answering
//! service reached through [`AdvisoryPort`]. Nothing it returns affects
//! validation or clause text, and any failure is swallowed by
//! [`AdvisoryService`] so generation never depends on it.

use async_trait::async_trait;
use chrono::Utc;
use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_estate::AssetType;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, instrument, warn, Instrument, Span};

use crate::aggregate::Will;

/// Default time allowed for one advisory answer
pub const DEFAULT_ADVISORY_TIMEOUT: Duration = Duration::from_secs(5);

/// Port for the question-answering collaborator
#[async_trait]
pub trait AdvisoryPort: DomainPort + HealthCheckable {
    /// Answers a free-text question about will making
    async fn answer(&self, question: &str) -> Result<String, PortError>;
}

struct Topic {
    keywords: &'static [&'static str],
    answer: &'static str,
}

const TOPICS: &[Topic] = &[
    Topic {
        keywords: &["witness", "attest", "section 9"],
        answer: "A will needs two witnesses present at the same time, preferably aged 21 or over \
                 (18 minimum). Under Section 9 of the Wills Act 1959 a beneficiary, or the spouse \
                 of a beneficiary, who witnesses the will loses their gift. An executor may witness \
                 if they are not also a beneficiary.",
    },
    Topic {
        keywords: &["executor", "trustee", "alternate"],
        answer: "Up to four executors may be appointed. Naming at least one alternate means the \
                 estate can still be administered if the first executor dies or declines to act.",
    },
    Topic {
        keywords: &["epf", "kwsp", "provident"],
        answer: "EPF savings follow the nomination registered with the EPF Board under the EPF Act \
                 1991. A will cannot override a valid nomination; its EPF clause only applies when \
                 no nomination exists. Nominations are made at kwsp.gov.my.",
    },
    Topic {
        keywords: &["insurance", "policy", "takaful"],
        answer: "Insurance proceeds are paid to the nominee named under the policy. A will clause \
                 acts as a backup for policies without a nomination, so record the policy number \
                 and insurer.",
    },
    Topic {
        keywords: &["guardian", "minor", "trust", "vesting", "child"],
        answer: "Children under 18 cannot take property outright. Appoint a guardian and consider \
                 leaving their share to the trustee upon trust until a vesting age such as 18, 21 \
                 or 25, with power to apply income for maintenance and education.",
    },
    Topic {
        keywords: &["residue", "residuary", "intestacy", "remainder"],
        answer: "The residuary clause disposes of everything not given away specifically, \
                 including lapsed gifts. Without it part of the estate may pass under the \
                 Distribution Act 1958 as a partial intestacy.",
    },
    Topic {
        keywords: &["muslim", "islam", "wasiat", "faraid", "syariah"],
        answer: "The Wills Act 1959 does not apply to Muslims. A Muslim may make a Wasiat under \
                 Syariah law for up to one third of the estate, and only to non-heirs; the \
                 remainder is distributed by Faraid.",
    },
    Topic {
        keywords: &["revoke", "revocation", "marriage", "divorce"],
        answer: "Marriage or remarriage revokes an existing will unless it was made in \
                 contemplation of that marriage. Divorce does not revoke a will, so a new will \
                 should be made.",
    },
];

/// In-process adapter answering from a fixed topic table
#[derive(Debug, Default, Clone, Copy)]
pub struct KnowledgeBaseAdvisory;

impl KnowledgeBaseAdvisory {
    pub fn new() -> Self {
        Self
    }

    fn best_topic(question: &str) -> Option<&'static Topic> {
        let question = question.to_lowercase();
        TOPICS
            .iter()
            .map(|topic| {
                let hits = topic
                    .keywords
                    .iter()
                    .filter(|k| question.contains(*k))
                    .count();
                (hits, topic)
            })
            .filter(|(hits, _)| *hits > 0)
            .max_by_key(|(hits, _)| *hits)
            .map(|(_, topic)| topic)
    }
}

impl DomainPort for KnowledgeBaseAdvisory {}

#[async_trait]
impl HealthCheckable for KnowledgeBaseAdvisory {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "knowledge-base-advisory".to_string(),
            status: AdapterHealth::Healthy,
            message: Some(format!("{} topics loaded", TOPICS.len())),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl AdvisoryPort for KnowledgeBaseAdvisory {
    async fn answer(&self, question: &str) -> Result<String, PortError> {
        Self::best_topic(question)
            .map(|topic| topic.answer.to_string())
            .ok_or_else(|| PortError::not_found(format!("No guidance for: {}", question)))
    }
}

/// Adapter standing in for an advisory service that is not configured
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableAdvisory;

impl DomainPort for UnavailableAdvisory {}

#[async_trait]
impl HealthCheckable for UnavailableAdvisory {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "unavailable-advisory".to_string(),
            status: AdapterHealth::Unhealthy,
            message: Some("No advisory service configured".to_string()),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl AdvisoryPort for UnavailableAdvisory {
    async fn answer(&self, _question: &str) -> Result<String, PortError> {
        Err(PortError::unavailable("advisory"))
    }
}

/// A question asked on behalf of a will, with its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryNote {
    pub topic: String,
    pub answer: String,
}

/// Wraps an advisory port with a timeout and failure isolation
#[derive(Clone)]
pub struct AdvisoryService {
    port: Arc<dyn AdvisoryPort>,
    timeout: Duration,
}

impl AdvisoryService {
    pub fn new(port: Arc<dyn AdvisoryPort>, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    pub fn knowledge_base() -> Self {
        Self::new(Arc::new(KnowledgeBaseAdvisory), DEFAULT_ADVISORY_TIMEOUT)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn health(&self) -> HealthCheckResult {
        self.port.health_check().await
    }

    /// Asks one question; `None` if the port fails or runs out of time
    #[instrument(skip(self))]
    pub async fn ask(&self, question: &str) -> Option<String> {
        match tokio::time::timeout(self.timeout, self.port.answer(question)).await {
            Ok(Ok(answer)) => Some(answer),
            Ok(Err(e)) => {
                warn!(error = %e, transient = e.is_transient(), "Advisory lookup failed");
                None
            }
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Advisory lookup timed out");
                None
            }
        }
    }

    /// Supplementary notes for the situations a will raises
    ///
    /// Questions are asked concurrently, so the whole call waits at most one
    /// timeout. Notes keep the order of the questions; unanswered ones are
    /// left out.
    #[instrument(skip(self, will), fields(will_id = %will.id()))]
    pub async fn notes_for(&self, will: &Will) -> Vec<AdvisoryNote> {
        let mut lookups = JoinSet::new();
        for (index, (topic, question)) in questions_for(will).into_iter().enumerate() {
            let service = self.clone();
            lookups.spawn(
                async move { (index, topic, service.ask(question).await) }
                    .instrument(Span::current()),
            );
        }

        let mut answered = Vec::new();
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((index, topic, Some(answer))) => answered.push((index, topic, answer)),
                Ok((_, _, None)) => {}
                Err(e) => warn!(error = %e, "Advisory lookup task failed"),
            }
        }
        answered.sort_by_key(|(index, _, _)| *index);

        let notes: Vec<AdvisoryNote> = answered
            .into_iter()
            .map(|(_, topic, answer)| AdvisoryNote {
                topic: topic.to_string(),
                answer,
            })
            .collect();

        debug!(notes = notes.len(), "Advisory notes collected");
        notes
    }
}

impl std::fmt::Debug for AdvisoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryService")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn questions_for(will: &Will) -> Vec<(&'static str, &'static str)> {
    let mut questions = Vec::new();

    if will.testator().requires_syariah_advisory() {
        questions.push(("syariah", "How do Wasiat and Faraid apply to a Muslim estate?"));
    }
    if will.beneficiaries().iter().any(|b| b.is_minor) {
        questions.push(("minors", "How should a trust for a minor beneficiary be set up?"));
    }
    if will.executors().len() == 1 {
        questions.push(("executors", "Why appoint an alternate executor?"));
    }
    if will.assets().iter().any(|a| a.asset_type == AssetType::EpfKwsp) {
        questions.push(("epf", "Does a will override an EPF nomination?"));
    }
    if will.assets().iter().any(|a| a.asset_type == AssetType::Insurance) {
        questions.push(("insurance", "Does a will override an insurance policy nomination?"));
    }

    questions
}

/// Scripted advisory adapter for tests
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    /// Answers from canned responses, optionally after a delay
    #[derive(Debug, Default)]
    pub struct MockAdvisory {
        answers: Arc<RwLock<HashMap<String, String>>>,
        delay: Option<Duration>,
        asked: Arc<RwLock<Vec<String>>>,
    }

    impl MockAdvisory {
        pub fn new() -> Self {
            Self::default()
        }

        /// Waits this long before every answer
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub async fn with_answer(self, question: &str, answer: &str) -> Self {
            self.answers
                .write()
                .await
                .insert(question.to_string(), answer.to_string());
            self
        }

        /// Questions received so far, in order
        pub async fn asked(&self) -> Vec<String> {
            self.asked.read().await.clone()
        }
    }

    impl DomainPort for MockAdvisory {}

    #[async_trait]
    impl HealthCheckable for MockAdvisory {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-advisory".to_string(),
                status: AdapterHealth::Healthy,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl AdvisoryPort for MockAdvisory {
        async fn answer(&self, question: &str) -> Result<String, PortError> {
            self.asked.write().await.push(question.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.answers
                .read()
                .await
                .get(question)
                .cloned()
                .ok_or_else(|| PortError::not_found(question))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_knowledge_base_matches_keywords() {
        let kb = KnowledgeBaseAdvisory::new();
        let answer = kb.answer("Can my EPF go to my wife?").await.unwrap();
        assert!(answer.contains("nomination"));
    }

    #[tokio::test]
    async fn test_knowledge_base_unknown_question() {
        let kb = KnowledgeBaseAdvisory::new();
        let err = kb.answer("What is the weather?").await.unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unavailable_is_swallowed() {
        let service = AdvisoryService::new(Arc::new(UnavailableAdvisory), DEFAULT_ADVISORY_TIMEOUT);
        assert_eq!(service.ask("Who can witness?").await, None);
        assert_eq!(service.health().await.status, AdapterHealth::Unhealthy);
    }

    #[tokio::test]
    async fn test_slow_port_times_out() {
        let port = mock::MockAdvisory::new()
            .with_delay(Duration::from_millis(200))
            .with_answer("q", "a")
            .await;
        let service = AdvisoryService::new(Arc::new(port), Duration::from_millis(10));
        assert_eq!(service.ask("q").await, None);
    }
}
