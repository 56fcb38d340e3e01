//! LinkedIn profile search over a Google search API.
//!
//! Queries are planned up front as an ordered list of tiers and evaluated
//! until one returns organic results. Exhausting the plan yields an empty
//! result set, which is a valid outcome, not an error.

pub mod serper;

pub use serper::SerperTransport;

use log::{debug, info};

use crate::error::Result;
use crate::models::SearchResult;
use crate::pipeline::ProfileFinder;

/// Organic results requested per query.
pub const RESULT_LIMIT: usize = 5;

/// Seam between the waterfall and the wire, so tests can record queries.
#[allow(async_fn_in_trait)]
pub trait SearchTransport {
    async fn run_query(&self, query: &str, num: usize) -> Result<Vec<SearchResult>>;
}

/// Boolean OR-group of title variants. Manager titles vary across companies
/// for equivalent seniority, so the literal title is widened with its last
/// token plus the fixed "Director" / "Head" fallbacks.
pub fn title_cluster(title: &str) -> String {
    let role_noun = title.split_whitespace().last().unwrap_or("Manager");

    format!(
        "(\"{}\" OR \"{}\" OR \"Director\" OR \"Head\")",
        title, role_noun
    )
}

/// The two-tier query plan, strictest first:
/// 1. company + title cluster in the profile headline, narrowed by team
///    keywords when present;
/// 2. just company + literal title, for when the strict query finds nothing.
pub fn plan_queries(company: &str, title: &str, team_keywords: &[String]) -> Vec<String> {
    let mut primary = format!(
        "site:linkedin.com/in/ \"{}\" intitle:{}",
        company,
        title_cluster(title)
    );

    if !team_keywords.is_empty() {
        let keyword_group = team_keywords
            .iter()
            .map(|k| format!("\"{}\"", k))
            .collect::<Vec<_>>()
            .join(" OR ");
        primary.push_str(&format!(" ({})", keyword_group));
    }

    let fallback = format!("site:linkedin.com/in/ \"{}\" \"{}\"", company, title);

    vec![primary, fallback]
}

pub struct ProfileSearcher<T: SearchTransport> {
    transport: T,
}

impl<T: SearchTransport> ProfileSearcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: SearchTransport> ProfileFinder for ProfileSearcher<T> {
    /// Waterfall evaluation: stop at the first tier with organic results.
    async fn search_profiles(
        &self,
        company: &str,
        title: &str,
        team_keywords: &[String],
    ) -> Result<Vec<SearchResult>> {
        for (tier, query) in plan_queries(company, title, team_keywords).iter().enumerate() {
            debug!("search tier {}: {}", tier, query);

            let results = self.transport.run_query(query, RESULT_LIMIT).await?;
            if !results.is_empty() {
                info!("found {} profiles on search tier {}", results.len(), tier);
                return Ok(results);
            }
        }

        info!("no profiles found, even after widening the search");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    #[test]
    fn cluster_widens_a_two_word_title() {
        assert_eq!(
            title_cluster("Engineering Manager"),
            r#"("Engineering Manager" OR "Manager" OR "Director" OR "Head")"#
        );
    }

    #[test]
    fn cluster_for_an_empty_title_falls_back_to_manager() {
        assert_eq!(
            title_cluster(""),
            r#"("" OR "Manager" OR "Director" OR "Head")"#
        );
    }

    #[test]
    fn plan_has_a_strict_tier_then_a_broad_tier() {
        let keywords = vec!["Payments".to_string(), "Backend".to_string()];
        let plan = plan_queries("Acme", "Engineering Manager", &keywords);

        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan[0],
            r#"site:linkedin.com/in/ "Acme" intitle:("Engineering Manager" OR "Manager" OR "Director" OR "Head") ("Payments" OR "Backend")"#
        );
        assert_eq!(plan[1], r#"site:linkedin.com/in/ "Acme" "Engineering Manager""#);
    }

    #[test]
    fn keyword_group_is_omitted_when_empty() {
        let plan = plan_queries("Acme", "Engineering Manager", &[]);

        assert!(!plan[0].contains("()"));
        assert!(plan[0].ends_with(r#"intitle:("Engineering Manager" OR "Manager" OR "Director" OR "Head")"#));
    }

    struct RecordingTransport {
        queries: RefCell<Vec<String>>,
        responses: RefCell<VecDeque<Vec<SearchResult>>>,
    }

    impl RecordingTransport {
        fn new(responses: Vec<Vec<SearchResult>>) -> Self {
            Self {
                queries: RefCell::new(Vec::new()),
                responses: RefCell::new(responses.into()),
            }
        }
    }

    impl SearchTransport for RecordingTransport {
        async fn run_query(&self, query: &str, _num: usize) -> Result<Vec<SearchResult>> {
            self.queries.borrow_mut().push(query.to_string());
            Ok(self.responses.borrow_mut().pop_front().unwrap_or_default())
        }
    }

    fn hit(name: &str) -> SearchResult {
        SearchResult {
            title: format!("{} | LinkedIn", name),
            snippet: "Engineering leader at Acme.".to_string(),
            link: "https://linkedin.com/in/someone".to_string(),
        }
    }

    #[tokio::test]
    async fn primary_hit_skips_the_fallback() {
        let transport = RecordingTransport::new(vec![vec![hit("Jordan Lee")]]);
        let searcher = ProfileSearcher::new(transport);

        let keywords = vec!["Payments".to_string()];
        let results = searcher
            .search_profiles("Acme", "Engineering Manager", &keywords)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(searcher.transport.queries.borrow().len(), 1);
    }

    #[tokio::test]
    async fn empty_primary_triggers_exactly_one_broad_fallback() {
        let transport =
            RecordingTransport::new(vec![Vec::new(), vec![hit("Jordan Lee"), hit("Sam Wu")]]);
        let searcher = ProfileSearcher::new(transport);

        let keywords = vec!["Payments".to_string(), "Backend".to_string()];
        let results = searcher
            .search_profiles("Acme", "Engineering Manager", &keywords)
            .await
            .unwrap();

        assert_eq!(results.len(), 2);

        let queries = searcher.transport.queries.borrow();
        assert_eq!(queries.len(), 2);
        // the broad tier drops the cluster and the keywords entirely
        assert_eq!(queries[1], r#"site:linkedin.com/in/ "Acme" "Engineering Manager""#);
        assert!(!queries[1].contains("intitle:"));
        assert!(!queries[1].contains("Payments"));
    }

    #[tokio::test]
    async fn an_exhausted_plan_is_an_empty_ok() {
        let transport = RecordingTransport::new(vec![Vec::new(), Vec::new()]);
        let searcher = ProfileSearcher::new(transport);

        let results = searcher
            .search_profiles("Acme", "Engineering Manager", &[])
            .await
            .unwrap();

        assert!(results.is_empty());
        assert_eq!(searcher.transport.queries.borrow().len(), 2);
    }
}
