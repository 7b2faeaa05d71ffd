use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use widgets_model::BmiCategory;

use crate::report::{BmiReport, CounterReport, TextReport};

pub fn print_bmi(report: &BmiReport) {
    println!("Unit system: {}", report.unit);
    match (&report.result, &report.pending) {
        (Some(result), _) => {
            println!(
                "BMI: {:.1} ({})",
                result.value,
                result.category.label()
            );
            println!("{}", bmi_scale_table(Some(result.category)));
        }
        (None, Some(reason)) => println!("No result yet: {reason}"),
        (None, None) => println!("No result yet"),
    }
}

/// The BMI reference scale, highlighting `current` when given.
pub fn bmi_scale_table(current: Option<BmiCategory>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("BMI")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for category in widgets_core::bmi_scale() {
        let mut label = Cell::new(category.label()).fg(category_color(category));
        if current == Some(category) {
            label = label.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![label, Cell::new(category.range_label())]);
    }
    table
}

pub fn print_text(report: &TextReport) {
    println!("{}", text_table(report));
    if report.stats.reading_time_minutes > 0 {
        println!("~{} min read", report.stats.reading_time_minutes);
    }
    if let Some(insights) = &report.insights {
        println!();
        println!("Quick Insights:");
        println!(
            "  Most common word length: {} chars",
            insights.average_word_length
        );
        println!("  Text density: {}%", insights.density_percent);
        println!("  Complexity score: {}", insights.complexity);
    }
}

pub fn text_table(report: &TextReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Statistic"),
        header_cell("Value"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in report.stats.entries() {
        table.add_row(vec![
            Cell::new(entry.label),
            Cell::new(format_count(entry.value)).add_attribute(Attribute::Bold),
            dim_cell(entry.description),
        ]);
    }
    table
}

pub fn print_counter(report: &CounterReport) {
    if !report.steps.is_empty() {
        println!("{}", counter_table(report));
    }
    println!("Current value: {}", report.value);
}

pub fn counter_table(report: &CounterReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Action"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        dim_cell("-"),
        dim_cell("start"),
        Cell::new(report.start),
    ]);
    for (index, step) in report.steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(step.action.as_str()),
            Cell::new(step.value),
        ]);
    }
    table
}

/// Format a count with thousands separators, e.g. `12,345`.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

fn category_color(category: BmiCategory) -> Color {
    match category.color_hint() {
        "blue" => Color::Blue,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        _ => Color::Reset,
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_colors_follow_hints() {
        let colors: Vec<Color> = BmiCategory::ALL.into_iter().map(category_color).collect();
        assert_eq!(
            colors,
            vec![Color::Blue, Color::Green, Color::Yellow, Color::Red]
        );
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
