use std::io::{self, Write};

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::info;

use manager_finder::auth::{self, AccessToken};
use manager_finder::chat::agent::RoleAgent;
use manager_finder::pipeline::find_hiring_managers;
use manager_finder::scraper::job::JobScraper;
use manager_finder::search::{ProfileSearcher, SerperTransport};
use manager_finder::utils::cards;
use manager_finder::utils::cli::Args;
use manager_finder::utils::config::{Config, config};
use manager_finder::utils::log::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!(
        "starting manager-finder {}",
        format!("v{}", env!("CARGO_PKG_VERSION")).magenta()
    );

    let config: Config = config(args.config)?;

    let token = unlock(&config, args.passcode.as_deref())?;

    let job_url = match args.job_url {
        Some(url) => url,
        None => prompt("Paste job URL: ")?,
    };

    let llm_api_key = config
        .llm
        .api_key
        .clone()
        .ok_or_else(|| eyre::eyre!("LLM API key not configured in config.toml"))?;
    let search_api_key = config
        .search
        .api_key
        .clone()
        .ok_or_else(|| eyre::eyre!("search API key not configured in config.toml"))?;

    let fetcher = JobScraper::new()?;
    let extractor = RoleAgent::new(
        llm_api_key,
        config.llm.model.clone(),
        config.llm.endpoint.clone(),
    );
    let searcher = ProfileSearcher::new(SerperTransport::new(
        search_api_key,
        config.search.endpoint.clone(),
    ));

    let output = find_hiring_managers(&token, &job_url, &fetcher, &extractor, &searcher).await?;

    if output.results.is_empty() {
        cards::render_no_results();
    } else {
        cards::render_cards(&output.profile, &output.results);
    }

    Ok(())
}

/// The passcode gate. A token is only ever minted here, right before the
/// pipeline runs, and lives no longer than this process.
fn unlock(config: &Config, passcode_arg: Option<&str>) -> Result<AccessToken> {
    let expected = config
        .auth
        .passcode
        .as_deref()
        .ok_or_else(|| eyre::eyre!("access passcode not configured in config.toml"))?;

    if let Some(supplied) = passcode_arg {
        return auth::authorize(supplied, expected)
            .ok_or_else(|| eyre::eyre!("incorrect passcode"));
    }

    loop {
        let input = prompt("Enter passcode: ")?;
        match auth::authorize(&input, expected) {
            Some(token) => return Ok(token),
            None => println!("{}", "Incorrect passcode. Please try again.".red()),
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message.cyan());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
