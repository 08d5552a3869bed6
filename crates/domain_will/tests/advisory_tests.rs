//! Integration tests for the advisory collaborator
//!
//! The collaborator is optional: every failure mode must leave generation
//! untouched.

use domain_will::advisory::mock::MockAdvisory;
use domain_will::{
    assemble, AdvisoryService, KnowledgeBaseAdvisory, UnavailableAdvisory,
    DEFAULT_ADVISORY_TIMEOUT,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use test_utils::*;

#[tokio::test]
async fn test_family_will_notes_from_knowledge_base() {
    let service = AdvisoryService::knowledge_base();
    let notes = service.notes_for(&WillFixtures::family()).await;

    let topics: Vec<&str> = notes.iter().map(|n| n.topic.as_str()).collect();
    assert_eq!(topics, vec!["minors", "epf"]);
    assert!(notes[1].answer.contains("EPF Act 1991"));
}

#[tokio::test]
async fn test_muslim_testator_gets_syariah_note() {
    let will = TestWillBuilder::new()
        .with_testator(TestatorFixtures::muslim())
        .build_valid();
    let notes = AdvisoryService::knowledge_base().notes_for(&will).await;

    let topics: Vec<&str> = notes.iter().map(|n| n.topic.as_str()).collect();
    assert_eq!(topics, vec!["syariah", "executors"]);
    assert!(notes[0].answer.contains("Faraid"));
}

#[tokio::test]
async fn test_unavailable_collaborator_yields_no_notes() {
    let service = AdvisoryService::new(Arc::new(UnavailableAdvisory), DEFAULT_ADVISORY_TIMEOUT);
    let will = WillFixtures::family();

    assert!(service.notes_for(&will).await.is_empty());
    assert!(assemble(&will, &TemporalFixtures::context()).is_ok());
}

#[tokio::test]
async fn test_unanswered_questions_are_dropped() {
    let port = MockAdvisory::new()
        .with_answer("Why appoint an alternate executor?", "So someone can step in.")
        .await;
    let port = Arc::new(port);
    let service = AdvisoryService::new(port.clone(), DEFAULT_ADVISORY_TIMEOUT);

    let will = TestWillBuilder::new()
        .with_testator(TestatorFixtures::muslim())
        .build_valid();
    let notes = service.notes_for(&will).await;

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].answer, "So someone can step in.");
    assert_eq!(port.asked().await.len(), 2);
}

#[tokio::test]
async fn test_slow_collaborator_times_out() {
    let port = MockAdvisory::new()
        .with_delay(Duration::from_millis(250))
        .with_answer("Who can witness?", "Two adults.")
        .await;
    let service = AdvisoryService::new(Arc::new(port), Duration::from_millis(20));

    assert_eq!(service.ask("Who can witness?").await, None);
}

#[tokio::test]
async fn test_slow_collaborator_costs_one_timeout_per_will() {
    let port = MockAdvisory::new()
        .with_delay(Duration::from_millis(500))
        .with_answer("Does a will override an EPF nomination?", "No.")
        .await;
    let port = Arc::new(port);
    let service = AdvisoryService::new(port.clone(), Duration::from_millis(100));

    let started = Instant::now();
    let notes = service.notes_for(&WillFixtures::family()).await;
    let elapsed = started.elapsed();

    assert!(notes.is_empty());
    assert_eq!(port.asked().await.len(), 2);
    assert!(elapsed < Duration::from_millis(180), "took {:?}", elapsed);
}

#[tokio::test]
async fn test_concurrent_answers_keep_question_order() {
    let port = MockAdvisory::new()
        .with_delay(Duration::from_millis(10))
        .with_answer("How should a trust for a minor beneficiary be set up?", "Use a trust.")
        .await
        .with_answer("Does a will override an EPF nomination?", "No.")
        .await;
    let service = AdvisoryService::new(Arc::new(port), DEFAULT_ADVISORY_TIMEOUT);

    let notes = service.notes_for(&WillFixtures::family()).await;

    let topics: Vec<&str> = notes.iter().map(|n| n.topic.as_str()).collect();
    assert_eq!(topics, vec!["minors", "epf"]);
    assert_eq!(notes[1].answer, "No.");
}

#[tokio::test]
async fn test_knowledge_base_health() {
    let service = AdvisoryService::new(Arc::new(KnowledgeBaseAdvisory), DEFAULT_ADVISORY_TIMEOUT);
    let health = service.health().await;
    assert_eq!(health.status, core_kernel::AdapterHealth::Healthy);
}
