mod report;
mod scrape;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use scrape::{scrape, Settings};

/// Job boards salary statistics can be collected from
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Headhunter,
    Superjob,
}

impl Target {
    pub fn title(&self) -> &'static str {
        match self {
            Target::Headhunter => "HeadHunter Moscow",
            Target::Superjob => "SuperJob Moscow",
        }
    }
}

const DEFAULT_LANGUAGES: [&str; 10] = [
    "Javascript",
    "Python",
    "TypeScript",
    "Java",
    "C#",
    "C++",
    "PHP",
    "C",
    "Shell",
    "Go",
];

/// Misspelled name of `ACCESS_TOKEN_HH`, still read when the correct one is not set
const LEGACY_HH_TOKEN_VAR: &str = "ACESS_TOKEN_HH";

/// Average salaries of programmers in Moscow, per programming language
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job boards to query, in order
    #[arg(long, value_enum, default_values_t = [Target::Headhunter, Target::Superjob])]
    site: Vec<Target>,

    /// Programming languages to search for, in order
    #[arg(long, default_values_t = DEFAULT_LANGUAGES.map(String::from))]
    language: Vec<String>,

    /// OAuth access token for api.hh.ru, falls back to the ACESS_TOKEN_HH variable
    #[arg(long, env = "ACCESS_TOKEN_HH", hide_env_values = true)]
    hh_token: Option<String>,

    /// Secret key of a registered api.superjob.ru app
    #[arg(long, env = "APP_SECRET_KEY_SUPERJOB", hide_env_values = true)]
    superjob_key: Option<String>,

    /// Vacancies requested per page
    #[arg(long, default_value_t = vacancy_scraper::DEFAULT_PER_PAGE)]
    per_page: u32,
}

fn hh_token(explicit: Option<String>, legacy: Option<String>) -> Option<String> {
    explicit.or(legacy)
}

async fn run(args: Cli) -> scrape::Result<()> {
    let settings = Settings {
        hh_token: hh_token(args.hh_token, std::env::var(LEGACY_HH_TOKEN_VAR).ok()),
        superjob_key: args.superjob_key,
        per_page: args.per_page,
    };
    // every selected site needs its credential before the first request goes out
    for site in &args.site {
        settings.credential(*site)?;
    }
    for (index, site) in args.site.iter().enumerate() {
        let statistics = scrape(*site, &settings, &args.language).await?;
        if index > 0 {
            println!();
        }
        println!("{}", report::render(&statistics, site.title()));
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
