//! End-to-end tests for the resume analysis pipeline.
//!
//! Classifiers are replaced by fixed-output mocks, so these tests need no
//! network access or model downloads.

use std::sync::Arc;

use async_trait::async_trait;

use resumeanalyzer::analysis::{normalize, segment, ExperienceAnalyzer, RecommendationEngine};
use resumeanalyzer::classifier::{
    RelevanceClassifier, RelevanceScore, ZeroShotClassifier, ZeroShotOutput,
};
use resumeanalyzer::models::{ExperienceAnalysis, JobRequirement, RawDocument, RequiredExperience, SkillMatch};
use resumeanalyzer::{AnalysisPipeline, Classifiers, Error, PipelineConfig, Result};

struct MockZeroShot {
    labels: Vec<String>,
    scores: Vec<f64>,
}

#[async_trait]
impl ZeroShotClassifier for MockZeroShot {
    async fn classify(&self, _text: &str, _labels: &[String]) -> Result<ZeroShotOutput> {
        Ok(ZeroShotOutput {
            labels: self.labels.clone(),
            scores: self.scores.clone(),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

struct MockRelevance(f64);

#[async_trait]
impl RelevanceClassifier for MockRelevance {
    async fn score(&self, _text: &str) -> Result<RelevanceScore> {
        Ok(RelevanceScore { score: self.0 })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pipeline(labels: &[&str], scores: &[f64], relevance: f64) -> AnalysisPipeline {
    let classifiers = Classifiers::new(
        Arc::new(MockZeroShot {
            labels: strings(labels),
            scores: scores.to_vec(),
        }),
        Arc::new(MockRelevance(relevance)),
    );
    AnalysisPipeline::new(classifiers, PipelineConfig::default())
}

const RESUME: &str = "Jane Doe\njane@example.com\n\nEXPERIENCE\nSenior Engineer, Acme (2017-2023)\n6+ years building Python services\n\nEDUCATION\nBSc Computer Science\n\nSKILLS\nPython, Docker\n";

#[tokio::test]
async fn python_kubernetes_scenario() {
    let pipeline = pipeline(&["Python", "Kubernetes"], &[0.9, 0.3], 0.6);
    let job = JobRequirement::new(strings(&["Python", "Kubernetes"]), 5.0);

    let report = pipeline.analyze_resume(RESUME, &job).await.unwrap();

    assert_eq!(
        report.skills_match,
        vec![
            SkillMatch { name: "Python".to_string(), match_score: 90.0 },
            SkillMatch { name: "Kubernetes".to_string(), match_score: 30.0 },
        ]
    );

    let skill_line = report
        .recommendations
        .iter()
        .find(|r| r.starts_with("Consider strengthening skills in:"))
        .expect("weak skill recommendation");
    assert!(skill_line.contains("Kubernetes"));
    assert!(!skill_line.contains("Python"));
}

#[tokio::test]
async fn match_score_is_mean_of_skill_and_experience_scores() {
    let pipeline = pipeline(&["Rust", "Go", "SQL"], &[0.42, 0.87, 0.615], 0.73);
    let job = JobRequirement::new(strings(&["Rust", "Go", "SQL"]), 3.0);

    let report = pipeline.analyze_resume(RESUME, &job).await.unwrap();

    let skills_mean = report.skills_match.iter().map(|s| s.match_score).sum::<f64>()
        / report.skills_match.len() as f64;
    let expected =
        ((skills_mean + report.experience_analysis.score) / 2.0 * 100.0).round_ties_even() / 100.0;

    assert_eq!(report.match_score, expected);
    assert!(report
        .skills_match
        .windows(2)
        .all(|w| w[0].match_score >= w[1].match_score));
    assert!((0.0..=100.0).contains(&report.experience_analysis.score));
}

#[tokio::test]
async fn match_score_tie_rounds_to_even() {
    // Skills 75.0, experience (0 + 12.5) / 2 = 6.25, mean 40.625.
    let pipeline = pipeline(&["Rust"], &[0.75], 0.125);
    let job = JobRequirement::new(strings(&["Rust"]), 3.0);

    let report = pipeline.analyze_resume(RESUME, &job).await.unwrap();

    assert_eq!(report.experience_analysis.score, 6.25);
    assert_eq!(report.match_score, 40.62);
}

#[tokio::test]
async fn zero_required_years_fails_without_report() {
    let pipeline = pipeline(&["Python"], &[0.9], 0.9);
    let job = JobRequirement::new(strings(&["Python"]), 0.0);

    let result = pipeline.analyze_resume(RESUME, &job).await;

    assert!(matches!(result, Err(Error::Config(_))));
}

#[tokio::test]
async fn malformed_classifier_output_fails() {
    let pipeline = pipeline(&["Python", "Go"], &[0.9], 0.9);
    let job = JobRequirement::new(strings(&["Python", "Go"]), 2.0);

    let result = pipeline.analyze_resume(RESUME, &job).await;

    assert!(matches!(result, Err(Error::Classification(_))));
}

#[tokio::test]
async fn experience_analyzer_on_raw_resume_text() {
    let analyzer = ExperienceAnalyzer::new(Arc::new(MockRelevance(0.9)));

    let result = analyzer
        .analyze(RESUME, &RequiredExperience { years: 5.0 })
        .await
        .unwrap();

    assert_eq!(result.years, 6);
    assert_eq!(result.relevance, 90.0);
    assert_eq!(result.score, 95.0);
    assert_eq!(
        result.analysis,
        "Excellent experience match! Has 6 years of experience (meets requirement of 5 years)."
    );
}

#[tokio::test]
async fn analyze_plain_text_document() {
    let pipeline = pipeline(&["Python"], &[0.95], 0.9);
    let job = JobRequirement::new(strings(&["Python"]), 4.0);
    let document = RawDocument::new("jane.txt", ".txt", RESUME.as_bytes().to_vec());

    let report = pipeline.analyze_document(&document, &job).await.unwrap();

    assert_eq!(report.skills_match[0].match_score, 95.0);
}

#[tokio::test]
async fn empty_document_is_extraction_error() {
    let pipeline = pipeline(&["Python"], &[0.95], 0.9);
    let job = JobRequirement::new(strings(&["Python"]), 4.0);
    let document = RawDocument::new("empty.txt", "txt", Vec::new());

    let result = pipeline.analyze_document(&document, &job).await;

    assert!(matches!(result, Err(Error::Extraction(_))));
}

#[test]
fn strong_profile_gets_single_positive_recommendation() {
    let skills = vec![
        SkillMatch { name: "Rust".to_string(), match_score: 88.0 },
        SkillMatch { name: "Go".to_string(), match_score: 71.0 },
    ];
    let experience = ExperienceAnalysis {
        score: 82.5,
        years: 6,
        relevance: 65.0,
        analysis: String::new(),
    };

    let recommendations = RecommendationEngine::new().recommend(&skills, &experience);

    assert_eq!(
        recommendations,
        vec!["Strong profile! Consider highlighting leadership experience and quantitative achievements"]
    );
}

#[test]
fn resume_sections_and_normalization() {
    let sections = segment(RESUME);
    assert!(sections.experience.contains("6+ years building Python services"));
    assert_eq!(sections.education, "BSc Computer Science\n\n");
    assert_eq!(sections.skills, "Python, Docker\n\n");
    assert!(sections.projects.is_empty());

    let cleaned = normalize(RESUME);
    assert!(!cleaned.contains('\n'));
    assert!(cleaned.starts_with("Jane Doe jane example.com EXPERIENCE"));
}
