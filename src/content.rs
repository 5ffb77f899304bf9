use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static PROFILE: LazyLock<Profile> = LazyLock::new(|| match load_profile() {
    Ok(profile) => profile,
    Err(e) => {
        log::error!("falling back to empty profile: {e}");
        Profile::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub greeting: String,
    pub tagline: String,
    pub story: Vec<String>,
    pub resume_url: String,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub socials: Vec<SocialLink>,
    pub quick_info: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// devicon class name rendered as `<i class=...>`
    pub icon: String,
}

impl Profile {
    /// Every skill across all categories, in order, as one looping marquee line.
    pub fn skill_cloud(&self) -> String {
        let mut line = self
            .skill_categories
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" • ");
        if !line.is_empty() {
            line.push_str(" • ");
        }
        line
    }
}

pub fn load_profile() -> Result<Profile, ContentError> {
    let file =
        Assets::get(PROFILE_FILE).ok_or_else(|| ContentError::Missing(PROFILE_FILE.to_string()))?;
    parse_profile(&file.data)
}

pub fn parse_profile(data: &[u8]) -> Result<Profile, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse(e.to_string()))
}

pub fn profile() -> &'static Profile {
    &PROFILE
}

/// Year the site was built, from the RFC 3339 stamp `build.rs` exports.
pub fn build_year(build_time: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|dt| dt.year())
}

/// Footer copyright text; the year is left out when the build stamp doesn't parse.
pub fn copyright_line(name: &str, build_time: &str) -> String {
    match build_year(build_time) {
        Some(year) => format!("© {year} {name}"),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_parses() {
        let profile = load_profile().expect("embedded profile should parse");
        assert_eq!(profile.name, "Ramprasath M K");
        assert_eq!(profile.experiences.len(), 3);
        assert_eq!(profile.skill_categories.len(), 3);
        assert!(profile
            .skill_categories
            .iter()
            .all(|c| c.skills.len() == 6));
        assert_eq!(profile.socials.len(), 5);
        assert!(!profile.projects.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_profile(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));

        // missing required fields
        let err = parse_profile(br#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_optional_project_links() {
        let data = br#"{
            "name": "n", "role": "r", "greeting": "g", "tagline": "t",
            "story": [], "resume_url": "/cv.pdf", "experiences": [],
            "projects": [{"title": "p", "description": "d", "tech": ["Rust"]}],
            "skill_categories": [], "socials": [], "quick_info": []
        }"#;
        let profile = parse_profile(data).unwrap();
        assert!(profile.projects[0].repo.is_none());
        assert!(profile.projects[0].demo.is_none());
    }

    #[test]
    fn test_skill_cloud() {
        let mut profile = Profile::default();
        assert_eq!(profile.skill_cloud(), "");

        profile.skill_categories = vec![
            SkillCategory {
                title: "a".to_string(),
                skills: vec!["Rust".to_string(), "Go".to_string()],
            },
            SkillCategory {
                title: "b".to_string(),
                skills: vec!["SQL".to_string()],
            },
        ];
        assert_eq!(profile.skill_cloud(), "Rust • Go • SQL • ");
    }

    #[test]
    fn test_build_year() {
        assert_eq!(build_year("2026-10-18T09:30:00+00:00"), Some(2026));
        assert_eq!(build_year("2024-01-01T00:00:00.123456789Z"), Some(2024));
        assert_eq!(build_year("yesterday"), None);
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line("Ada", "2026-10-18T09:30:00+00:00"),
            "© 2026 Ada"
        );
        assert_eq!(copyright_line("Ada", ""), "Ada");
    }

    #[test]
    fn test_profile_is_cached() {
        assert!(std::ptr::eq(profile(), profile()));
        assert_eq!(profile().name, "Ramprasath M K");
    }
}
