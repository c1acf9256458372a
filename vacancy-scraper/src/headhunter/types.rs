use salary_analyzer::{predict_salary, Page, SalaryEstimate};
use serde::{Deserialize, Serialize};

/// Currency code HeadHunter uses for roubles
pub const LOCAL_CURRENCY: &str = "RUR";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: Option<u32>,
    pub to: Option<u32>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub salary: Option<Salary>,
}

impl SalaryEstimate for Vacancy {
    fn estimate_salary(&self) -> Option<f64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(LOCAL_CURRENCY) {
            return None;
        }
        predict_salary(salary.from, salary.to)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) found: u32,
    pub(crate) pages: u32,
}

impl ApiResponse {
    /// `requested` is the page index sent with the request, the page echoed by the server is ignored
    pub(crate) fn into_page(self, requested: u32) -> Page<Vacancy> {
        Page {
            has_more: requested + 1 < self.pages,
            found: self.found,
            items: self.items,
        }
    }
}
