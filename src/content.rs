use std::fmt;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Site content, parsed once from the embedded documents.
///
/// A broken document is logged and replaced by empty content so the page
/// still renders.
pub static CONTENT: LazyLock<Content> = LazyLock::new(|| {
    Content::load().unwrap_or_else(|err| {
        log::error!("failed to load site content: {err}");
        Content::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentFiles;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content document not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {name}: {reason}")]
    Parse { name: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: String,
}

impl Skill {
    /// Level as a percentage; out-of-range values are capped at 100.
    pub fn proficiency(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
    pub live_url: String,
    pub source_url: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Experience,
    Education,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Experience => f.write_str("Experience"),
            Self::Education => f.write_str("Education"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: u32,
    pub kind: EntryKind,
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub timeline: Vec<TimelineEntry>,
}

impl Content {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            skills: read_json("skills.json")?,
            projects: read_json("projects.json")?,
            timeline: read_json("timeline.json")?,
        })
    }
}

fn read_json<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentFiles::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    parse_json(name, &file.data)
}

fn parse_json<T: DeserializeOwned>(name: &str, bytes: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(bytes).map_err(|err| ContentError::Parse {
        name: name.to_string(),
        reason: err.to_string(),
    })
}

/// Skill category selection in the skills section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(c) => c,
        }
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => skill.category == *c,
        }
    }
}

/// `All` followed by each category in order of first appearance.
pub fn categories(skills: &[Skill]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    for skill in skills {
        let filter = CategoryFilter::Category(skill.category.clone());
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
}

pub fn filter_skills<'a>(skills: &'a [Skill], filter: &CategoryFilter) -> Vec<&'a Skill> {
    skills.iter().filter(|s| filter.matches(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            name: name.to_string(),
            level: 80,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = Content::load().expect("embedded content should parse");
        assert_eq!(content.skills.len(), 26);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.timeline.len(), 4);
        assert!(content.skills.iter().all(|s| s.level <= 100));
        assert_eq!(content.projects.iter().filter(|p| p.featured).count(), 2);
        assert_eq!(content.timeline[0].kind, EntryKind::Experience);
        assert_eq!(content.timeline[3].kind, EntryKind::Education);
        assert_eq!(*CONTENT, content);
    }

    #[test]
    fn test_embedded_categories_in_page_order() {
        let content = Content::load().expect("embedded content should parse");
        let labels = categories(&content.skills)
            .iter()
            .map(|c| c.label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["All", "Frontend", "Backend", "Languages", "AI/ML", "APIs", "DevOps", "Creative"]
        );
    }

    #[test]
    fn test_filter_skills() {
        let skills = vec![
            skill("Rust", "Languages"),
            skill("Leptos", "Frontend"),
            skill("Go", "Languages"),
        ];
        assert_eq!(filter_skills(&skills, &CategoryFilter::All).len(), 3);
        let languages = filter_skills(&skills, &CategoryFilter::Category("Languages".into()));
        assert_eq!(
            languages.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            ["Rust", "Go"]
        );
        assert!(filter_skills(&skills, &CategoryFilter::Category("DevOps".into())).is_empty());
    }

    #[test]
    fn test_proficiency_is_capped() {
        let mut s = skill("Yoyo", "Creative");
        s.level = 250;
        assert_eq!(s.proficiency(), 100);
    }

    #[test]
    fn test_missing_and_broken_documents() {
        assert_eq!(
            read_json::<Vec<Skill>>("nope.json"),
            Err(ContentError::NotFound("nope.json".to_string()))
        );
        let err = parse_json::<Vec<Skill>>("skills.json", br#"[{"name": "Rust"}]"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref name, .. } if name == "skills.json"));
        assert!(err.to_string().starts_with("couldn't parse skills.json"));
    }

    #[test]
    fn test_project_images_are_served() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let content = Content::load().expect("embedded content should parse");
        for project in &content.projects {
            if let Some(asset) = project.image.strip_prefix('/') {
                assert!(
                    public.join(asset).is_file(),
                    "{} points at missing asset {}",
                    project.title,
                    project.image
                );
            }
        }
    }
}
