//! The end-to-end flow: fetch -> extract -> search, in strict sequence.
//!
//! Each stage sits behind a small trait so the whole pipeline can be driven
//! by stubs in tests. A [`RoleProfile`] must exist before the search runs;
//! the sequencing here is the only ordering the tool has.

use log::info;

use crate::auth::AccessToken;
use crate::error::Result;
use crate::models::{JobPosting, RoleProfile, SearchResult};

/// At most this many result cards are surfaced to the user.
pub const DISPLAY_LIMIT: usize = 5;

#[allow(async_fn_in_trait)]
pub trait JobTextSource {
    async fn fetch_job_text(&self, url: &str) -> Result<JobPosting>;
}

#[allow(async_fn_in_trait)]
pub trait RoleExtractor {
    async fn extract_role(&self, text: &str) -> Result<RoleProfile>;
}

#[allow(async_fn_in_trait)]
pub trait ProfileFinder {
    async fn search_profiles(
        &self,
        company: &str,
        title: &str,
        team_keywords: &[String],
    ) -> Result<Vec<SearchResult>>;
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub profile: RoleProfile,
    /// Provider-ranked, capped at [`DISPLAY_LIMIT`]. Empty is a valid outcome.
    pub results: Vec<SearchResult>,
}

/// Runs one request cycle. Requires an [`AccessToken`], so callers cannot
/// reach the outbound calls without passing the passcode gate. Any stage
/// error aborts the remaining stages.
pub async fn find_hiring_managers<F, E, S>(
    _token: &AccessToken,
    url: &str,
    fetcher: &F,
    extractor: &E,
    searcher: &S,
) -> Result<PipelineOutput>
where
    F: JobTextSource,
    E: RoleExtractor,
    S: ProfileFinder,
{
    let posting = fetcher.fetch_job_text(url).await?;
    let profile = extractor.extract_role(&posting.raw_text).await?;

    info!(
        "searching for {} at {}",
        profile.target_manager_title, profile.company_name
    );

    let mut results = searcher
        .search_profiles(
            &profile.company_name,
            &profile.target_manager_title,
            &profile.team_keywords,
        )
        .await?;
    results.truncate(DISPLAY_LIMIT);

    Ok(PipelineOutput { profile, results })
}
