use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::sections::segment;
use crate::classifier::parser::validate_score;
use crate::classifier::RelevanceClassifier;
use crate::error::Result;
use crate::models::{round2, ExperienceAnalysis, RequiredExperience};

/// Phrasings of tenure: "5 years", "5+ yrs", "5 y.e.". Counts are ASCII digits.
static YEAR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"([0-9]+)\+?\s*years?", r"([0-9]+)\+?\s*yrs?", r"([0-9]+)\+?\s*y\.?e\.?"]
        .iter()
        .map(|p| Regex::new(p).expect("valid tenure pattern"))
        .collect()
});

pub struct ExperienceAnalyzer {
    classifier: Arc<dyn RelevanceClassifier>,
}

impl ExperienceAnalyzer {
    pub fn new(classifier: Arc<dyn RelevanceClassifier>) -> Self {
        Self { classifier }
    }

    pub async fn analyze(&self, text: &str, required: &RequiredExperience) -> Result<ExperienceAnalysis> {
        required.validate()?;

        let sections = segment(text);
        let experience_text = &sections.experience;

        let years = extract_years(experience_text);

        let relevance = self.classifier.score(experience_text).await?;
        let relevance = validate_score(relevance.score)?;

        let tenure = tenure_score(years, required.years);
        let final_score = (tenure + relevance * 100.0) / 2.0;

        tracing::debug!(
            "Experience: {} years (tenure score {:.2}), relevance {:.3}",
            years,
            tenure,
            relevance
        );

        Ok(ExperienceAnalysis {
            score: round2(final_score),
            years,
            relevance: round2(relevance * 100.0),
            analysis: describe_experience(final_score, years, required.years),
        })
    }
}

/// Largest year count mentioned in the text, or 0.
///
/// Every match of every tenure pattern counts, so any number followed by
/// "y"/"ye"/"yr" qualifies. Counts too large for `u32` are ignored.
pub fn extract_years(text: &str) -> u32 {
    let lower = text.to_lowercase();

    YEAR_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(&lower))
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()))
        .max()
        .unwrap_or(0)
}

/// Share of the required tenure, as a percentage capped at 100.
pub fn tenure_score(years: u32, required_years: f64) -> f64 {
    if years == 0 {
        return 0.0;
    }
    (years as f64 / required_years * 100.0).min(100.0)
}

pub fn describe_experience(score: f64, years: u32, required_years: f64) -> String {
    let mut analysis = if score >= 85.0 {
        String::from("Excellent experience match! ")
    } else if score >= 70.0 {
        String::from("Good experience match. ")
    } else {
        String::from("Experience could be better aligned. ")
    };

    if years as f64 >= required_years {
        analysis.push_str(&format!(
            "Has {} years of experience (meets requirement of {} years).",
            years, required_years
        ));
    } else {
        analysis.push_str(&format!(
            "Has {} years of experience (below requirement of {} years).",
            years, required_years
        ));
    }

    analysis
}
