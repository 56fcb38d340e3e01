use std::time::Duration;

use log::{debug, info};
use scraper::{Html, Node};

use crate::error::Result;
use crate::models::JobPosting;
use crate::pipeline::JobTextSource;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Postings longer than this add noise without helping the model.
pub const MAX_TEXT_LEN: usize = 4000;

pub struct JobScraper {
    client: reqwest::Client,
}

impl JobScraper {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

impl JobTextSource for JobScraper {
    /// Fetches the posting and reduces it to visible plain text. Identical
    /// URLs are always re-fetched; nothing is cached.
    async fn fetch_job_text(&self, url: &str) -> Result<JobPosting> {
        info!("fetching job posting from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?;

        let html = response.text().await?;
        let raw_text = visible_text(&html);

        debug!("extracted {} characters of visible text", raw_text.len());

        Ok(JobPosting {
            url: url.to_string(),
            raw_text,
        })
    }
}

/// Extracts the page's visible text: everything under `script` and `style`
/// elements is dropped, the rest is whitespace-collapsed, joined by single
/// spaces, and capped at [`MAX_TEXT_LEN`] characters.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut fragments = Vec::new();
    for node in document.tree.nodes() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(element) => matches!(element.name(), "script" | "style"),
            _ => false,
        });
        if hidden {
            continue;
        }

        fragments.extend(text.split_whitespace());
    }

    truncate_chars(&fragments.join(" "), MAX_TEXT_LEN)
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_and_style_content_is_stripped() {
        let html = r#"
            <html>
              <head>
                <style>body { color: red; }</style>
                <script>alert("tracking");</script>
              </head>
              <body>
                <h1>Senior Backend Engineer</h1>
                <p>Join our Payments team.</p>
                <script type="text/javascript">var hidden = "secret";</script>
              </body>
            </html>
        "#;

        let text = visible_text(html);

        assert!(text.contains("Senior Backend Engineer"));
        assert!(text.contains("Join our Payments team."));
        assert!(!text.contains("alert"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn whitespace_is_collapsed_to_single_spaces() {
        let html = "<html><body><p>We   need\n\n a\tSenior   Engineer</p></body></html>";

        assert_eq!(visible_text(html), "We need a Senior Engineer");
    }

    #[test]
    fn output_is_capped_at_4000_chars() {
        let body = "word ".repeat(2000);
        let html = format!("<html><body><p>{}</p></body></html>", body);

        let text = visible_text(&html);

        assert_eq!(text.chars().count(), MAX_TEXT_LEN);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(MAX_TEXT_LEN + 100);
        let html = format!("<html><body><p>{}</p></body></html>", body);

        let text = visible_text(&html);

        assert_eq!(text.chars().count(), MAX_TEXT_LEN);
    }
}
