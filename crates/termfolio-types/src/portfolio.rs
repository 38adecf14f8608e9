//! Portfolio content records shown by the terminal commands.
//!
//! Everything here is read-only data. Projects come from an external JSON
//! list; the profile, contact links and skills default to the built-in
//! content and can be overridden from the TOML config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermfolioError};

/// One entry of the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub name: String,
    pub description: String,
    /// Image reference (URL or site-relative path); never fetched here.
    pub thumbnail: String,
    /// Repository URL opened from the project modal.
    pub repo: String,
}

/// Parse a project list from JSON text.
///
/// The list must be a JSON array of `{name, description, thumbnail, repo}`
/// objects. Order is preserved; it is the order of the project grid.
pub fn parse_projects(json: &str) -> Result<Vec<ProjectRef>> {
    let projects: Vec<ProjectRef> = serde_json::from_str(json)?;
    Ok(projects)
}

/// Load the project list from a JSON file.
pub fn load_projects(path: &Path) -> Result<Vec<ProjectRef>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        TermfolioError::Project(format!("cannot read {}: {e}", path.display()))
    })?;
    let projects = parse_projects(&text)?;
    log::info!(
        "Loaded {} projects from {}",
        projects.len(),
        path.display()
    );
    Ok(projects)
}

/// A labelled badge image in the tech stack row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechBadge {
    pub label: String,
    pub badge: String,
}

impl TechBadge {
    fn new(label: &str, badge: &str) -> Self {
        Self {
            label: label.to_string(),
            badge: badge.to_string(),
        }
    }
}

/// Content of the `profile` / `whoami` card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileCard {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Profile picture reference.
    pub avatar: String,
    /// Remote stat card images (GitHub stats, top languages).
    pub stat_badges: Vec<String>,
    pub tech_stack: Vec<TechBadge>,
}

const SHIELDS: &str = "https://img.shields.io/badge";

impl Default for ProfileCard {
    fn default() -> Self {
        Self {
            name: "Ulinuha".to_string(),
            role: "Full Stack Developer".to_string(),
            bio: "I'm a passionate software developer with a strong interest in technology, \
                  IoT, and web development. Since middle school, I've been building Discord \
                  bots, Minecraft servers, and various web apps. Now, I'm diving deeper into \
                  Next.js, Laravel, and ESP32 projects."
                .to_string(),
            avatar: "/profile.jpeg".to_string(),
            stat_badges: vec![
                "https://github-readme-stats.vercel.app/api?username=lin1er&show_icons=true\
                 &theme=algolia&include_all_commits=true&count_private=true"
                    .to_string(),
                "https://github-readme-stats.vercel.app/api/top-langs/?username=lin1er\
                 &layout=compact&theme=algolia"
                    .to_string(),
            ],
            tech_stack: vec![
                TechBadge::new("HTML5", &format!("{SHIELDS}/html5-%23E34F26.svg?&style=for-the-badge&logo=html5&logoColor=white")),
                TechBadge::new("CSS3", &format!("{SHIELDS}/css3-%231572B6.svg?&style=for-the-badge&logo=css3&logoColor=white")),
                TechBadge::new("JavaScript", &format!("{SHIELDS}/javascript-%23323330.svg?&style=for-the-badge&logo=javascript&logoColor=%23F7DF1E")),
                TechBadge::new("React", &format!("{SHIELDS}/react-%2320232a.svg?&style=for-the-badge&logo=react&logoColor=%2361DAFB")),
                TechBadge::new("Next.js", &format!("{SHIELDS}/Next.js-%23000000.svg?style=for-the-badge&logo=next.js&logoColor=white")),
                TechBadge::new("Laravel", &format!("{SHIELDS}/laravel-%23e4634c.svg?style=for-the-badge&logo=laravel&logoColor=white")),
                TechBadge::new("Python", &format!("{SHIELDS}/python-%2314354C.svg?&style=for-the-badge&logo=python&logoColor=white")),
                TechBadge::new("MySQL", &format!("{SHIELDS}/MySQL-%2300f365.svg?style=for-the-badge&logo=mysql&logoColor=white")),
                TechBadge::new("Arduino", &format!("{SHIELDS}/arduino-%230066CC.svg?style=for-the-badge&logo=arduino&logoColor=white")),
                TechBadge::new("Git", &format!("{SHIELDS}/Git-%23F1502F.svg?style=for-the-badge&logo=git&logoColor=white")),
                TechBadge::new("Tailwind CSS", &format!("{SHIELDS}/Tailwind%20CSS-%2338B2AC.svg?style=for-the-badge&logo=tailwind-css&logoColor=white")),
                TechBadge::new("Node.js", &format!("{SHIELDS}/Node.js-6DA55F?style=for-the-badge&logo=node.js&logoColor=white")),
            ],
        }
    }
}

/// One line of the `contact` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    /// Channel name ("Email", "GitHub", ...).
    pub label: String,
    /// Text shown to the reader.
    pub display: String,
    /// Link target, if the channel is clickable.
    #[serde(default)]
    pub href: Option<String>,
}

/// Built-in contact links.
pub fn default_contacts() -> Vec<ContactLink> {
    vec![
        ContactLink {
            label: "Email".to_string(),
            display: "m.ulinasidiki@gmail.com".to_string(),
            href: None,
        },
        ContactLink {
            label: "GitHub".to_string(),
            display: "github.com/ulinuha".to_string(),
            href: Some("https://github.com/lin1er".to_string()),
        },
        ContactLink {
            label: "LinkedIn".to_string(),
            display: "linkedin.com/in/ulinuha".to_string(),
            href: Some("https://linkedin.com/in/m-ulinuha-as-shiddiqy".to_string()),
        },
    ]
}

/// Built-in skill lines.
pub fn default_skills() -> Vec<String> {
    [
        "JavaScript, React, Next.js, Laravel",
        "Java, Python, C++",
        "IoT & Embedded Systems",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// All content the terminal can display, fixed for the session lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Portfolio {
    pub profile: ProfileCard,
    pub projects: Vec<ProjectRef>,
    pub contact: Vec<ContactLink>,
    pub skills: Vec<String>,
}
