//! Static site content: the profile record and the filesystem manifest.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::models::Link;

/// `${field}` placeholders in content templates.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+)\}").expect("placeholder pattern is valid"));

// =============================================================================
// Profile
// =============================================================================

/// Static profile record queried by the informational commands.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    pub role: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub line_id: String,
    /// Template lines for `about`
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Link>,
    #[serde(default)]
    pub contact: Vec<Link>,
}

impl Profile {
    /// Look up a scalar field by its placeholder name.
    pub fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "nickname" => &self.nickname,
            "role" => &self.role,
            "location" => &self.location,
            "email" => &self.email,
            "website" => &self.website,
            "github" => &self.github,
            "linkedin" => &self.linkedin,
            "line_id" => &self.line_id,
            _ => return None,
        };
        Some(value)
    }

    /// Replace `${field}` placeholders with profile values.
    ///
    /// Unknown placeholders are left untouched.
    pub fn interpolate(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| match self.field(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

// =============================================================================
// Manifest Types
// =============================================================================

/// Layout of the virtual filesystem.
///
/// Paths are relative to the root `~` and use `/` separators. Parent
/// directories of files are created implicitly; `directories` only needs to
/// list directories that would otherwise not exist.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default)]
    pub directories: Vec<DirectoryEntry>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// Directory entry from the manifest
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DirectoryEntry {
    pub path: String,
}

/// File entry from the manifest
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileEntry {
    pub path: String,
    /// Template content, interpolated on `cat`
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Everything the shell shows: the profile and the filesystem layout.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub filesystem: Manifest,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}
