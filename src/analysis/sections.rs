use serde::{Deserialize, Serialize};

/// Resume sections recognised by header lines, in keyword precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Experience,
    Education,
    Skills,
    Projects,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
        }
    }

    /// First section whose keyword occurs in the lower-cased line.
    pub fn detect(line_lower: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| line_lower.contains(section.keyword()))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Body text per section. Every section is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub projects: String,
}

impl SectionMap {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Experience => &self.experience,
            Section::Education => &self.education,
            Section::Skills => &self.skills,
            Section::Projects => &self.projects,
        }
    }

    fn body_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Skills => &mut self.skills,
            Section::Projects => &mut self.projects,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, body)| body.is_empty())
    }
}

/// Splits resume text into sections.
///
/// A line containing a section keyword switches the current section and is
/// itself dropped; following lines accumulate into that section. Lines before
/// the first header are discarded.
pub fn segment(text: &str) -> SectionMap {
    let mut sections = SectionMap::default();
    let mut current: Option<Section> = None;

    for line in text.split('\n') {
        let line_lower = line.to_lowercase();
        if let Some(section) = Section::detect(&line_lower) {
            current = Some(section);
        } else if let Some(section) = current {
            let body = sections.body_mut(section);
            body.push_str(line);
            body.push('\n');
        }
    }

    tracing::debug!(
        "Segmented sections: {}",
        sections
            .iter()
            .map(|(s, body)| format!("{}={}", s, body.len()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    sections
}
