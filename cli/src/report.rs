use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use salary_analyzer::StatisticsTable;

pub const HEADER: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render the statistics of one job board as a bordered text table headed by `title`
pub fn render(statistics: &StatisticsTable, title: &str) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(HEADER);
    for index in 1..HEADER.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stats in statistics {
        table.add_row(vec![
            Cell::new(&stats.language),
            Cell::new(stats.vacancies_found),
            Cell::new(stats.vacancies_processed),
            Cell::new(stats.average_salary),
        ]);
    }
    format!("{}\n{}", title, table)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
