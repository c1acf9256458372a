use crate::models::{Listing, Page};
use async_trait::async_trait;
use std::error::Error;

/// Trait for predicting an expected salary in the local currency from a single vacancy.
/// Vacancies without usable salary data yield `None`, that is not an error.
pub trait SalaryEstimate {
    fn estimate_salary(&self) -> Option<f64>;
}

/// Trait for job boards offering a paged vacancy search
#[async_trait]
pub trait VacancySource: Sync {
    type Vacancy: SalaryEstimate + Send;
    type E: Error + Send + Sync;

    fn name(&self) -> &str;

    /// Request a single page of results, pages are counted from 0
    async fn fetch_page(&self, search: &str, page: u32) -> Result<Page<Self::Vacancy>, Self::E>;

    /// Request every page of a search and concatenate the vacancies.
    /// The found count is the one reported with the first page.
    async fn fetch(&self, search: &str) -> Result<Listing<Self::Vacancy>, Self::E> {
        let first_page = self.fetch_page(search, 0).await?;
        let found = first_page.found;
        let mut has_more = first_page.has_more;
        let mut vacancies = first_page.items;
        let mut page = 0;
        while has_more {
            page += 1;
            let next_page = self.fetch_page(search, page).await?;
            has_more = next_page.has_more;
            vacancies.extend(next_page.items);
        }
        log::debug!(
            "fetched {} pages from {} for search: {}",
            page + 1,
            self.name(),
            search
        );
        Ok(Listing { vacancies, found })
    }
}
