use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| match Portfolio::load() {
    Ok(p) => p,
    Err(e) => {
        log::error!("falling back to empty portfolio: {e}");
        Portfolio::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Portfolio content not found")]
    NotFound,
    #[error("Couldn't parse portfolio content: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub socials: Vec<SocialLink>,
    pub expertise: Vec<SkillCard>,
    pub stats: Vec<Stat>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub roles: Vec<String>,
    pub badge: String,
    pub availability: String,
    pub summary: String,
    pub portrait: String,
    pub tech_stack: Vec<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub whatsapp: String,
}

impl Profile {
    /// `tel:` href for the display phone number, keeping a leading `+`.
    pub fn phone_href(&self) -> String {
        let digits = digits_only(&self.phone);
        if self.phone.trim_start().starts_with('+') {
            format!("tel:+{digits}")
        } else {
            format!("tel:{digits}")
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCard {
    pub title: String,
    pub subtitle: String,
    pub accent: Accent,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Primary,
    Secondary,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Accent::Primary => "primary",
            Accent::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub glyph: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: u32,
    pub suffix: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub website: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub tags: Vec<String>,
    pub gradient: String,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::NotFound)?;
        Self::parse(&file.data)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::ParseError(e.to_string()))
    }
}

pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Year the site was built, shown in the footer.
pub fn copyright_year() -> i32 {
    year_from_build_time(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

fn year_from_build_time(build_time: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_parses() {
        let portfolio = Portfolio::load().expect("embedded portfolio should parse");

        assert!(!portfolio.profile.name.is_empty());
        assert_eq!(portfolio.expertise.len(), 2);
        assert_eq!(portfolio.stats.len(), 4);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.projects.len(), 3);
        assert!(portfolio.projects.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        let res = Portfolio::parse(b"{ \"profile\": 42 }");
        assert!(matches!(res, Err(ContentError::ParseError(_))));
    }

    #[test]
    fn test_phone_href() {
        let profile = Profile {
            phone: "+92 (315) 490-9017".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.phone_href(), "tel:+923154909017");

        let profile = Profile {
            phone: "555-0100".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.phone_href(), "tel:5550100");
    }

    #[test]
    fn test_build_year() {
        assert_eq!(year_from_build_time("2026-03-01T12:00:00+00:00"), Some(2026));
        assert_eq!(year_from_build_time("not a date"), None);
        assert!(copyright_year() >= 2024);
    }
}
