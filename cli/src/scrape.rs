use crate::Target;
use salary_analyzer::{aggregate, StatisticsTable};
use thiserror::Error;
use vacancy_scraper::{HeadHunter, SuperJob};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing credential: '{0}' not set")]
    MissingCredential(&'static str),
    #[error("Scrape failed: {0}")]
    Scrape(#[from] vacancy_scraper::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Credentials and request settings shared by every job board
#[derive(Debug, Clone)]
pub struct Settings {
    pub hh_token: Option<String>,
    pub superjob_key: Option<String>,
    pub per_page: u32,
}

impl Settings {
    pub fn credential(&self, site: Target) -> Result<String> {
        match site {
            Target::Headhunter => self
                .hh_token
                .clone()
                .ok_or(Error::MissingCredential("ACCESS_TOKEN_HH")),
            Target::Superjob => self
                .superjob_key
                .clone()
                .ok_or(Error::MissingCredential("APP_SECRET_KEY_SUPERJOB")),
        }
    }
}

pub async fn scrape(site: Target, settings: &Settings, languages: &[String]) -> Result<StatisticsTable> {
    let credential = settings.credential(site)?;
    log::info!("Collecting salary statistics from {:?} for {} languages", site, languages.len());
    let statistics = match site {
        Target::Headhunter => {
            let source = HeadHunter::new(credential)?.with_per_page(settings.per_page);
            aggregate(&source, languages).await?
        }
        Target::Superjob => {
            let source = SuperJob::new(credential)?.with_per_page(settings.per_page);
            aggregate(&source, languages).await?
        }
    };
    Ok(statistics)
}
