/// Predict a single expected salary from a (possibly partial) salary range.
///
/// A bound of `0` is treated like a missing one, job boards use it for
/// "not specified".
pub fn predict_salary(salary_from: Option<u32>, salary_to: Option<u32>) -> Option<f64> {
    let salary_from = salary_from.filter(|&s| s > 0).map(f64::from);
    let salary_to = salary_to.filter(|&s| s > 0).map(f64::from);
    match (salary_from, salary_to) {
        (None, None) => None,
        (None, Some(to)) => Some(to * 0.8),
        (Some(from), None) => Some(from * 1.2),
        (Some(from), Some(to)) => Some((from + to) / 2.0),
    }
}
