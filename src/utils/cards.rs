use colored::Colorize;

use crate::models::{RoleProfile, SearchResult};

/// Search providers usually title profile hits as "Name - Title | LinkedIn";
/// the first pipe-delimited segment is the readable part.
pub fn display_name(title: &str) -> &str {
    title.split('|').next().unwrap_or(title).trim()
}

pub fn render_cards(profile: &RoleProfile, results: &[SearchResult]) {
    println!(
        "\n{}",
        format!(
            "Found potential managers for the {} team",
            profile.department
        )
        .green()
        .bold()
    );

    for result in results {
        println!("{}", "-".repeat(64));
        println!("{}", display_name(&result.title).bold());
        println!(
            "{}",
            format!("Relevance: {} context matched", profile.department).yellow()
        );
        println!("{}", result.snippet);
        println!("{}", result.link.cyan());
    }
    println!("{}", "-".repeat(64));
}

pub fn render_no_results() {
    println!(
        "\n{}",
        "No specific team matches found. Try a broader search.".red()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_takes_the_first_pipe_segment() {
        assert_eq!(
            display_name("Jordan Lee - Engineering Manager | LinkedIn"),
            "Jordan Lee - Engineering Manager"
        );
    }

    #[test]
    fn display_name_passes_through_titles_without_pipes() {
        assert_eq!(display_name("Jordan Lee"), "Jordan Lee");
    }
}
