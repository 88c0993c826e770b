use std::sync::Arc;

use crate::classifier::parser::validate_zero_shot;
use crate::classifier::ZeroShotClassifier;
use crate::error::Result;
use crate::models::{round2, SkillMatch};

pub struct SkillMatcher {
    classifier: Arc<dyn ZeroShotClassifier>,
}

impl SkillMatcher {
    pub fn new(classifier: Arc<dyn ZeroShotClassifier>) -> Self {
        Self { classifier }
    }

    /// Scores `text` against each required skill, highest first. Equal scores
    /// keep the classifier's output order.
    pub async fn match_skills(&self, text: &str, required_skills: &[String]) -> Result<Vec<SkillMatch>> {
        if required_skills.is_empty() {
            return Ok(Vec::new());
        }

        let output = self.classifier.classify(text, required_skills).await?;
        let output = validate_zero_shot(output, required_skills)?;

        let mut matches: Vec<SkillMatch> = output
            .labels
            .into_iter()
            .zip(output.scores)
            .map(|(name, score)| SkillMatch {
                name,
                match_score: round2(score * 100.0),
            })
            .collect();

        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        tracing::debug!(
            "Matched {} skills with {} classifier",
            matches.len(),
            self.classifier.name()
        );

        Ok(matches)
    }
}
