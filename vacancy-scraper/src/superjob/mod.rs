pub mod types;

use async_trait::async_trait;
use reqwest::Client;
use salary_analyzer::{Page, VacancySource};
use serde::Serialize;

use crate::{ensure_success, Error, Result, DEFAULT_PER_PAGE};
use types::{ApiResponse, Vacancy};

pub const BASE_URL: &str = "https://api.superjob.ru";
/// SuperJob town id of Moscow
pub const MOSCOW_TOWN_ID: u32 = 4;
/// SuperJob catalogue "Development, programming"
pub const PROGRAMMING_CATALOGUE_ID: u32 = 48;

#[derive(Serialize, Debug)]
struct SearchParams<'a> {
    keyword: &'a str,
    town: u32,
    catalogues: u32,
    page: u32,
    count: u32,
}

/// Vacancy search on superjob.ru
pub struct SuperJob {
    client: Client,
    secret_key: String,
    base_url: String,
    per_page: u32,
}

impl SuperJob {
    pub fn new(secret_key: String) -> Result<Self> {
        Ok(Self::with_client(secret_key, crate::default_client()?))
    }

    pub fn with_client(secret_key: String, client: Client) -> Self {
        Self {
            client,
            secret_key,
            base_url: BASE_URL.to_owned(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    type Vacancy = Vacancy;
    type E = Error;

    fn name(&self) -> &str {
        "SuperJob"
    }

    async fn fetch_page(&self, search: &str, page: u32) -> Result<Page<Vacancy>> {
        let url = format!("{}/2.0/vacancies/", self.base_url);
        let params = SearchParams {
            keyword: search,
            town: MOSCOW_TOWN_ID,
            catalogues: PROGRAMMING_CATALOGUE_ID,
            page,
            count: self.per_page,
        };
        log::debug!(
            "requesting vacancies from superjob, page: {}, search: {}",
            page,
            search
        );
        let resp = self
            .client
            .get(&url)
            .header("X-Api-App-Id", self.secret_key.as_str())
            .query(&params)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let body: ApiResponse = resp.json().await?;
        log::debug!(
            "successfully retrieved page {} for search: {}, more pages: {}",
            page,
            search,
            body.more
        );
        Ok(body.into())
    }
}
