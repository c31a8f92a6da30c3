use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ctnlp_model::{ClinicalTrial, Gender, Patient};

use crate::commands::CriteriaReport;

const DESCRIPTION_PREVIEW: usize = 80;

pub fn print_trials(trials: &[ClinicalTrial]) {
    println!("{}", trials_table(trials));
    let parsed = trials.iter().filter(|trial| trial.has_criteria()).count();
    println!("Criteria parsed: {parsed}/{}", trials.len());
}

pub fn trials_table(trials: &[ClinicalTrial]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Trial"),
        header_cell("Title"),
        header_cell("Gender"),
        header_cell("Min age"),
        header_cell("Max age"),
        header_cell("Healthy"),
        header_cell("Incl"),
        header_cell("Excl"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for trial in trials {
        table.add_row(vec![
            Cell::new(trial.display_id())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&trial.brief_title),
            gender_cell(trial.gender),
            age_cell(trial.minimum_age),
            age_cell(trial.maximum_age),
            flag_cell(trial.accepts_healthy_volunteers),
            count_cell(trial.inclusion.len(), trial.has_criteria()),
            count_cell(trial.exclusion.len(), trial.has_criteria()),
        ]);
    }
    table
}

pub fn print_patients(patients: &[Patient]) {
    println!("{}", patients_table(patients));
}

pub fn patients_table(patients: &[Patient]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Patient"), header_cell("Description")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for patient in patients {
        table.add_row(vec![
            Cell::new(patient.patient_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(preview(&patient.description)),
        ]);
    }
    table
}

pub fn print_criteria(report: &CriteriaReport) {
    if !report.parsed {
        println!("Criteria could not be split into inclusion and exclusion sections.");
        return;
    }
    println!("{}", criteria_table(report));
}

pub fn criteria_table(report: &CriteriaReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Section"), header_cell("#"), header_cell("Statement")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let sections = [
        ("INCLUSION", Color::Green, &report.inclusion),
        ("EXCLUSION", Color::Red, &report.exclusion),
    ];
    for (label, color, statements) in sections {
        for (index, statement) in statements.iter().enumerate() {
            table.add_row(vec![
                Cell::new(label).fg(color),
                Cell::new(index + 1),
                Cell::new(statement),
            ]);
        }
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn gender_cell(gender: Gender) -> Cell {
    match gender {
        Gender::Unknown => dim_cell(gender.as_str()),
        other => Cell::new(other.as_str()),
    }
}

fn age_cell(age: Option<f64>) -> Cell {
    match age {
        Some(years) => Cell::new(format!("{years:.2}")),
        None => dim_cell("-"),
    }
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("✗")
    }
}

fn count_cell(count: usize, parsed: bool) -> Cell {
    if parsed {
        Cell::new(count)
    } else {
        dim_cell("-")
    }
}

fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(DESCRIPTION_PREVIEW) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
