use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub name: String,
    pub match_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceAnalysis {
    pub score: f64,
    pub years: u32,
    pub relevance: f64,
    pub analysis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub match_score: f64,
    pub skills_match: Vec<SkillMatch>,
    pub experience_analysis: ExperienceAnalysis,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    pub fn skills_score(&self) -> f64 {
        mean_skill_score(&self.skills_match)
    }
}

/// Arithmetic mean of the skill scores; 0 for an empty slice.
pub fn mean_skill_score(skills: &[SkillMatch]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }
    skills.iter().map(|s| s.match_score).sum::<f64>() / skills.len() as f64
}

/// Rounds to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_exact_fields() {
        let report = AnalysisReport {
            match_score: 50.0,
            skills_match: vec![SkillMatch {
                name: "Rust".to_string(),
                match_score: 60.0,
            }],
            experience_analysis: ExperienceAnalysis {
                score: 40.0,
                years: 2,
                relevance: 80.0,
                analysis: "Experience could be better aligned.".to_string(),
            },
            recommendations: vec!["x".to_string()],
        };

        let value = serde_json::to_value(&report).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["experience_analysis", "match_score", "recommendations", "skills_match"]
        );

        let mut exp_keys: Vec<_> = value["experience_analysis"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        exp_keys.sort();
        assert_eq!(exp_keys, vec!["analysis", "relevance", "score", "years"]);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345_678), 12.35);
        assert_eq!(round2(90.000_001), 90.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(45.125), 45.12);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(60.625), 60.62);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn test_mean_skill_score() {
        let skills = vec![
            SkillMatch { name: "a".to_string(), match_score: 90.0 },
            SkillMatch { name: "b".to_string(), match_score: 30.0 },
        ];
        assert_eq!(mean_skill_score(&skills), 60.0);
        assert_eq!(mean_skill_score(&[]), 0.0);
    }
}
