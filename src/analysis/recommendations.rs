use crate::models::{ExperienceAnalysis, SkillMatch};

pub const SKILL_THRESHOLD: f64 = 70.0;
pub const EXPERIENCE_THRESHOLD: f64 = 70.0;

pub const EXPERIENCE_RECOMMENDATION: &str =
    "Focus on gaining more relevant experience in key areas";
pub const STRONG_PROFILE_RECOMMENDATION: &str =
    "Strong profile! Consider highlighting leadership experience and quantitative achievements";

pub struct RecommendationEngine {
    skill_threshold: f64,
    experience_threshold: f64,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            skill_threshold: SKILL_THRESHOLD,
            experience_threshold: EXPERIENCE_THRESHOLD,
        }
    }

    pub fn recommend(&self, skills: &[SkillMatch], experience: &ExperienceAnalysis) -> Vec<String> {
        let mut recommendations = Vec::new();

        let weak_skills: Vec<&str> = skills
            .iter()
            .filter(|s| s.match_score < self.skill_threshold)
            .map(|s| s.name.as_str())
            .collect();

        if !weak_skills.is_empty() {
            recommendations.push(format!(
                "Consider strengthening skills in: {}",
                weak_skills.join(", ")
            ));
        }

        if experience.score < self.experience_threshold {
            recommendations.push(EXPERIENCE_RECOMMENDATION.to_string());
        }

        if recommendations.is_empty() {
            recommendations.push(STRONG_PROFILE_RECOMMENDATION.to_string());
        }

        recommendations
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
