//! Project gallery content.
//!
//! Gallery entries live in an embedded JSON manifest so copy edits never
//! touch component code. Parsed once into a `LazyLock` cache; a bad manifest
//! degrades to an empty gallery rather than a crash.

use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

/// Embedded demo attached to a game project. `game_url` is the iframe-able
/// build; `fallback_url` is the full external version surfaced once the
/// timed preview is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoEmbed {
    pub game_url: String,
    pub fallback_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Display title, also the demo identifier used as the persistence key.
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub demo: Option<DemoEmbed>,
}

#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    #[error("project manifest not found in embedded assets")]
    Missing,
    #[error("couldn't parse project manifest: {0}")]
    Parse(String),
}

pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    load_projects().unwrap_or_else(|err| {
        log::error!("project gallery unavailable: {err}");
        Vec::new()
    })
});

pub fn load_projects() -> Result<Vec<Project>, ProjectError> {
    let manifest = Assets::get("projects.json").ok_or(ProjectError::Missing)?;
    serde_json::from_slice(&manifest.data).map_err(|err| ProjectError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses() {
        let projects = load_projects().expect("embedded manifest should parse");
        assert!(!projects.is_empty());
        for project in &projects {
            assert!(!project.title.is_empty());
            assert!(!project.image.is_empty());
        }
    }

    #[test]
    fn game_project_carries_demo_urls() {
        let projects = load_projects().expect("embedded manifest should parse");
        let game = projects
            .iter()
            .find(|p| p.demo.is_some())
            .expect("gallery should include one playable demo");
        assert_eq!(game.title, "NEON MEMORY");
        let demo = game.demo.as_ref().unwrap();
        assert!(demo.game_url.starts_with("https://"));
        assert!(demo.fallback_url.starts_with("https://"));
        assert_ne!(demo.game_url, demo.fallback_url);
    }

    #[test]
    fn bad_manifest_reports_parse_error() {
        let err = serde_json::from_str::<Vec<Project>>("{not json")
            .map_err(|e| ProjectError::Parse(e.to_string()))
            .unwrap_err();
        assert!(matches!(err, ProjectError::Parse(_)));
    }
}
