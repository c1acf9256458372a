pub mod types;

use async_trait::async_trait;
use reqwest::Client;
use salary_analyzer::{Page, VacancySource};
use serde::Serialize;

use crate::{ensure_success, Error, Result, DEFAULT_PER_PAGE};
use types::{ApiResponse, Vacancy};

pub const BASE_URL: &str = "https://api.hh.ru";
/// HeadHunter area id of Moscow
pub const MOSCOW_AREA_ID: u32 = 1;

#[derive(Serialize, Debug)]
struct SearchParams {
    text: String,
    area: u32,
    page: u32,
    per_page: u32,
}

fn search_text(search: &str) -> String {
    format!("программист {}", search)
}

/// Vacancy search on hh.ru
pub struct HeadHunter {
    client: Client,
    access_token: String,
    base_url: String,
    per_page: u32,
}

impl HeadHunter {
    pub fn new(access_token: String) -> Result<Self> {
        Ok(Self::with_client(access_token, crate::default_client()?))
    }

    pub fn with_client(access_token: String, client: Client) -> Self {
        Self {
            client,
            access_token,
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
impl VacancySource for HeadHunter {
    type Vacancy = Vacancy;
    type E = Error;

    fn name(&self) -> &str {
        "HeadHunter"
    }

    async fn fetch_page(&self, search: &str, page: u32) -> Result<Page<Vacancy>> {
        let url = format!("{}/vacancies", self.base_url);
        let params = SearchParams {
            text: search_text(search),
            area: MOSCOW_AREA_ID,
            page,
            per_page: self.per_page,
        };
        log::debug!(
            "requesting vacancies from headhunter, page: {}, search: {}",
            page,
            search
        );
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&params)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let body: ApiResponse = resp.json().await?;
        log::debug!(
            "successfully retrieved page {} of {} for search: {}",
            page + 1,
            body.pages,
            search
        );
        Ok(body.into_page(page))
    }
}
