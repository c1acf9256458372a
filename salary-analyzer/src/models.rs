/// One response of a paged vacancy search
#[derive(Debug)]
pub struct Page<V> {
    pub items: Vec<V>,
    /// total number of matches as reported by the job board
    pub found: u32,
    pub has_more: bool,
}

/// All vacancies of a search, across every page
#[derive(Debug)]
pub struct Listing<V> {
    pub vacancies: Vec<V>,
    pub found: u32,
}

/// Salary statistics for a single programming language on a single job board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: String,
    pub vacancies_found: u32,
    /// vacancies a salary could be estimated for
    pub vacancies_processed: u32,
    /// truncated mean of the estimates, 0 if nothing was processed
    pub average_salary: u32,
}

/// Per-language statistics, kept in the order the languages were requested.
/// Repeated languages get repeated rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsTable {
    rows: Vec<LanguageStats>,
}

impl StatisticsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stats: LanguageStats) {
        self.rows.push(stats);
    }

    /// First row for the given language
    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.rows.iter().find(|stats| stats.language == language)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageStats> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a StatisticsTable {
    type Item = &'a LanguageStats;
    type IntoIter = std::slice::Iter<'a, LanguageStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<LanguageStats> for StatisticsTable {
    fn from_iter<T: IntoIterator<Item = LanguageStats>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
