use std::sync::Arc;

use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;

use crate::analysis::experience::ExperienceAnalyzer;
use crate::analysis::preprocess::normalize;
use crate::analysis::recommendations::RecommendationEngine;
use crate::analysis::sections::{segment, SectionMap};
use crate::analysis::skill_matcher::SkillMatcher;
use crate::classifier::Classifiers;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::extraction::extract_text;
use crate::models::{mean_skill_score, round2, AnalysisReport, JobRequirement, RawDocument};

/// Result of analyzing one document in a batch.
#[derive(Debug)]
pub struct DocumentOutcome {
    pub name: String,
    pub result: Result<AnalysisReport>,
}

pub struct AnalysisPipeline {
    skill_matcher: SkillMatcher,
    experience_analyzer: ExperienceAnalyzer,
    recommendation_engine: RecommendationEngine,
    config: PipelineConfig,
}

impl AnalysisPipeline {
    pub fn new(classifiers: Classifiers, config: PipelineConfig) -> Self {
        Self {
            skill_matcher: SkillMatcher::new(classifiers.zero_shot),
            experience_analyzer: ExperienceAnalyzer::new(classifiers.relevance),
            recommendation_engine: RecommendationEngine::new(),
            config,
        }
    }

    pub async fn analyze_resume(&self, resume_text: &str, job: &JobRequirement) -> Result<AnalysisReport> {
        job.validate()?;

        // Step 1: Clean text
        let cleaned = normalize(resume_text);
        tracing::debug!("Normalized resume text to {} chars", cleaned.len());

        // Step 2: Match skills
        let skills_match = self
            .skill_matcher
            .match_skills(&cleaned, &job.required_skills)
            .await?;

        // Step 3: Score experience
        let experience_analysis = self
            .experience_analyzer
            .analyze(&cleaned, &job.required_experience)
            .await?;

        // Step 4: Recommendations
        let recommendations = self
            .recommendation_engine
            .recommend(&skills_match, &experience_analysis);

        // Step 5: Overall score
        let skills_score = mean_skill_score(&skills_match).clamp(0.0, 100.0);
        let experience_score = experience_analysis.score.clamp(0.0, 100.0);
        let match_score = round2((skills_score + experience_score) / 2.0);

        tracing::info!(
            "Analysis complete: match {:.2} (skills {:.2}, experience {:.2})",
            match_score,
            skills_score,
            experience_score
        );

        Ok(AnalysisReport {
            match_score,
            skills_match,
            experience_analysis,
            recommendations,
        })
    }

    pub async fn analyze_document(&self, document: &RawDocument, job: &JobRequirement) -> Result<AnalysisReport> {
        tracing::info!("Extracting text from {}", document.name);
        let text = extract_text(document)?;
        self.analyze_resume(&text, job).await
    }

    /// Analyzes documents concurrently, at most `concurrency_limit` at a time.
    /// Outcomes are returned in input order; failures stay per document.
    pub async fn analyze_documents(
        &self,
        documents: &[RawDocument],
        job: &JobRequirement,
    ) -> Vec<DocumentOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit.max(1)));

        let pb = ProgressBar::new(documents.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} resumes")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        let futures = documents.iter().map(|document| {
            let sem = semaphore.clone();
            let pb = pb.clone();

            async move {
                let result = match sem.acquire().await {
                    Ok(_permit) => self.analyze_document(document, job).await,
                    Err(e) => Err(Error::Config(format!("analysis scheduler closed: {}", e))),
                };

                if let Err(ref e) = result {
                    tracing::warn!("Analysis failed for {}: {}", document.name, e);
                }

                pb.inc(1);
                DocumentOutcome {
                    name: document.name.clone(),
                    result,
                }
            }
        });

        let outcomes = join_all(futures).await;
        pb.finish_with_message("Analysis complete");

        outcomes
    }

    /// Section breakdown of a resume, for inspection.
    pub fn sections(&self, resume_text: &str) -> SectionMap {
        segment(resume_text)
    }
}
