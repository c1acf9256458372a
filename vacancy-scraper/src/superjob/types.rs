use salary_analyzer::{predict_salary, Page, SalaryEstimate};
use serde::{Deserialize, Serialize};

/// Currency code SuperJob uses for roubles
pub const LOCAL_CURRENCY: &str = "rub";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub profession: String,
    /// `0` or missing when the employer left the bound open
    pub payment_from: Option<u32>,
    pub payment_to: Option<u32>,
    pub currency: Option<String>,
}

impl SalaryEstimate for Vacancy {
    fn estimate_salary(&self) -> Option<f64> {
        if self.currency.as_deref() != Some(LOCAL_CURRENCY) {
            return None;
        }
        predict_salary(self.payment_from, self.payment_to)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) objects: Vec<Vacancy>,
    pub(crate) total: u32,
    pub(crate) more: bool,
}

impl From<ApiResponse> for Page<Vacancy> {
    fn from(resp: ApiResponse) -> Self {
        Page {
            has_more: resp.more,
            found: resp.total,
            items: resp.objects,
        }
    }
}
