use crate::api::{SalaryEstimate, VacancySource};
use crate::models::{LanguageStats, Listing, StatisticsTable};

/// Compute the statistics of one language from all vacancies found for it
pub fn language_stats<V: SalaryEstimate>(language: &str, listing: &Listing<V>) -> LanguageStats {
    let mut salary_sum = 0.0;
    let mut vacancies_processed = 0u32;
    for salary in listing.vacancies.iter().filter_map(SalaryEstimate::estimate_salary) {
        salary_sum += salary;
        vacancies_processed += 1;
    }
    let average_salary = if vacancies_processed > 0 {
        (salary_sum / f64::from(vacancies_processed)) as u32
    } else {
        0
    };
    LanguageStats {
        language: language.to_owned(),
        vacancies_found: listing.found,
        vacancies_processed,
        average_salary,
    }
}

/// Fetch the vacancies of every language from the given source, one after another,
/// and collect salary statistics in the order of `languages`.
/// The first failing request aborts the whole aggregation.
pub async fn aggregate<S, L>(source: &S, languages: &[L]) -> Result<StatisticsTable, S::E>
where
    S: VacancySource,
    L: AsRef<str>,
{
    let mut table = StatisticsTable::new();
    for language in languages {
        let language = language.as_ref();
        log::debug!("collecting vacancies from {} for: {}", source.name(), language);
        let listing = source.fetch(language).await?;
        let stats = language_stats(language, &listing);
        log::info!(
            "{}: {} found, {} processed, average salary {}",
            language,
            stats.vacancies_found,
            stats.vacancies_processed,
            stats.average_salary
        );
        table.push(stats);
    }
    Ok(table)
}
