use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub required_skills: Vec<String>,
    pub required_experience: RequiredExperience,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredExperience {
    pub years: f64,
}

impl RequiredExperience {
    pub fn validate(&self) -> Result<()> {
        if !self.years.is_finite() || self.years <= 0.0 {
            return Err(Error::Config(format!(
                "required experience years must be positive, got {}",
                self.years
            )));
        }
        Ok(())
    }
}

impl JobRequirement {
    pub fn new(required_skills: Vec<String>, years: f64) -> Self {
        Self {
            title: None,
            required_skills,
            required_experience: RequiredExperience { years },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.required_skills.is_empty() {
            return Err(Error::Config("job requires at least one skill".to_string()));
        }
        self.required_experience.validate()
    }
}
