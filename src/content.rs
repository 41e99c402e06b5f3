//! Static site content: features, team members and projects.
//!
//! The registries live as JSON under `content/` and are embedded at compile
//! time. Each one is parsed on first access and kept for the lifetime of the
//! page, so every render reads the same immutable records.

use std::fmt;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const FEATURES_JSON: &str = include_str!("../content/features.json");
const TEAM_JSON: &str = include_str!("../content/team.json");
const PROJECTS_JSON: &str = include_str!("../content/projects.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("could not load {registry}: {source}")]
    Parse {
        registry: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Software,
    Hardware,
    Research,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Software => "Software",
            ProjectCategory::Hardware => "Hardware",
            ProjectCategory::Research => "Research",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Released,
    #[serde(rename = "In Development")]
    InDevelopment,
    Beta,
    Concept,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Released => "Released",
            ProjectStatus::InDevelopment => "In Development",
            ProjectStatus::Beta => "Beta",
            ProjectStatus::Concept => "Concept",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
}

/// Category selected in the Work page filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterCategory {
    #[default]
    All,
    Software,
    Hardware,
    Research,
}

impl FilterCategory {
    /// Display order of the filter buttons.
    pub const ORDER: [FilterCategory; 4] = [
        FilterCategory::All,
        FilterCategory::Software,
        FilterCategory::Hardware,
        FilterCategory::Research,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::All => "All",
            FilterCategory::Software => "Software",
            FilterCategory::Hardware => "Hardware",
            FilterCategory::Research => "Research",
        }
    }

    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            FilterCategory::All => true,
            other => other == FilterCategory::from(category),
        }
    }
}

impl From<ProjectCategory> for FilterCategory {
    fn from(category: ProjectCategory) -> Self {
        match category {
            ProjectCategory::Software => FilterCategory::Software,
            ProjectCategory::Hardware => FilterCategory::Hardware,
            ProjectCategory::Research => FilterCategory::Research,
        }
    }
}

/// Projects visible under `filter`, in registry order.
pub fn filter_projects(projects: &[Project], filter: FilterCategory) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project.category))
        .collect()
}

fn parse<T>(registry: &'static str, raw: &str) -> Result<Vec<T>, ContentError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { registry, source })
}

static FEATURES: Lazy<Result<Vec<Feature>, ContentError>> =
    Lazy::new(|| parse("features", FEATURES_JSON));
static TEAM: Lazy<Result<Vec<TeamMember>, ContentError>> =
    Lazy::new(|| parse("team", TEAM_JSON));
static PROJECTS: Lazy<Result<Vec<Project>, ContentError>> =
    Lazy::new(|| parse("projects", PROJECTS_JSON));

pub fn features() -> Result<&'static [Feature], &'static ContentError> {
    FEATURES.as_deref()
}

pub fn team() -> Result<&'static [TeamMember], &'static ContentError> {
    TEAM.as_deref()
}

pub fn projects() -> Result<&'static [Project], &'static ContentError> {
    PROJECTS.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, category: ProjectCategory) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            category,
            status: ProjectStatus::Concept,
            featured: false,
        }
    }

    #[test]
    fn embedded_registries_parse() {
        assert_eq!(features().unwrap().len(), 3);
        assert_eq!(team().unwrap().len(), 3);
        assert_eq!(projects().unwrap().len(), 5);
    }

    #[test]
    fn project_registry_keeps_source_order_and_flags() {
        let projects = projects().unwrap();
        assert_eq!(projects[0].title, "Neural Interface SDK");
        assert_eq!(projects[1].status, ProjectStatus::InDevelopment);
        let featured: Vec<_> = projects.iter().filter(|p| p.featured).map(|p| p.title.as_str()).collect();
        assert_eq!(featured, ["Neural Interface SDK", "BrainWave Processor", "Thought-to-Text"]);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let raw = r#"[{"title":"x","description":"y","image":"z","category":"Software","status":"Shipped"}]"#;
        let err = parse::<Project>("projects", raw).unwrap_err();
        assert!(err.to_string().starts_with("could not load projects"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let raw = r#"[{"title":"x","description":"y","image":"z","category":"Biology","status":"Beta"}]"#;
        assert!(parse::<Project>("projects", raw).is_err());
    }

    #[test]
    fn featured_defaults_to_false() {
        let raw = r#"[{"title":"x","description":"y","image":"z","category":"Hardware","status":"In Development"}]"#;
        let parsed = parse::<Project>("projects", raw).unwrap();
        assert!(!parsed[0].featured);
        assert_eq!(parsed[0].status.to_string(), "In Development");
    }

    #[test]
    fn filter_matches_exact_category_or_everything() {
        let projects = projects().unwrap();
        for filter in FilterCategory::ORDER {
            let visible = filter_projects(projects, filter);
            assert!(visible.len() <= projects.len());
            let expected: Vec<&Project> = projects
                .iter()
                .filter(|p| filter == FilterCategory::All || p.category.label() == filter.label())
                .collect();
            assert_eq!(visible, expected, "filter {}", filter.label());
        }
    }

    #[test]
    fn filter_counts_on_shipped_content() {
        let projects = projects().unwrap();
        assert_eq!(filter_projects(projects, FilterCategory::All).len(), 5);
        assert_eq!(filter_projects(projects, FilterCategory::Software).len(), 2);
        assert_eq!(filter_projects(projects, FilterCategory::Hardware).len(), 1);
        assert_eq!(filter_projects(projects, FilterCategory::Research).len(), 2);
    }

    #[test]
    fn filter_without_matches_is_empty() {
        let projects = vec![
            project("a", ProjectCategory::Software),
            project("b", ProjectCategory::Research),
        ];
        assert!(filter_projects(&projects, FilterCategory::Hardware).is_empty());
        assert_eq!(filter_projects(&projects, FilterCategory::All).len(), 2);
    }

    #[test]
    fn every_project_category_is_a_filter_option() {
        for project in projects().unwrap() {
            let filter = FilterCategory::from(project.category);
            assert!(FilterCategory::ORDER.contains(&filter));
            assert_eq!(filter.label(), project.category.label());
        }
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(FilterCategory::default(), FilterCategory::All);
    }
}
