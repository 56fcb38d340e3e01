use serde::{Deserialize, Serialize};

/// A fetched job posting. Lives for exactly one request cycle.
#[derive(Debug, Clone)]
pub struct JobPosting {
    pub url: String,
    /// Visible page text, script/style stripped, capped at 4000 characters.
    pub raw_text: String,
}

/// The model's read on who the hiring manager probably is.
///
/// All four fields are required; a reply missing any of them is rejected
/// during schema validation rather than default-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub company_name: String,
    pub department: String,
    pub target_manager_title: String,
    /// 2-3 nouns that pin down the team or product, e.g. ["Fintech", "Mobile App"].
    pub team_keywords: Vec<String>,
}

/// One organic search hit. Ordering is whatever the provider returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}
