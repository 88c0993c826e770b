pub mod preprocess;
pub mod sections;
pub mod skill_matcher;
pub mod experience;
pub mod recommendations;
pub mod pipeline;

pub use pipeline::{AnalysisPipeline, DocumentOutcome};
pub use preprocess::normalize;
pub use sections::{segment, Section, SectionMap};
pub use skill_matcher::SkillMatcher;
pub use experience::ExperienceAnalyzer;
pub use recommendations::RecommendationEngine;
