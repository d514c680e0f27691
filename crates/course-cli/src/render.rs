//! Table rendering for catalog listings and the credit summary.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use course_model::{Course, CourseCategory, StatusSeverity};
use course_registration::RegistrationState;

pub fn course_table<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Course"),
        header_cell("Name"),
        header_cell("Lecturer"),
        header_cell("Schedule"),
        header_cell("Credits"),
        header_cell("Category"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for course in courses {
        table.add_row(vec![
            selected_cell(course.selected),
            Cell::new(&course.id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&course.name),
            Cell::new(&course.lecturer),
            Cell::new(&course.schedule),
            Cell::new(course.credit_hours),
            category_cell(course.category),
        ]);
    }
    table
}

pub fn summary_table(state: &RegistrationState) -> Table {
    let summary = state.summary();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Selected"),
        header_cell("Credits"),
        header_cell("Allowed"),
        header_cell("Status"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(format!(
            "{} / {}",
            summary.selected_count(),
            summary.total_count()
        )),
        Cell::new(summary.total_credits()).add_attribute(Attribute::Bold),
        Cell::new(state.bounds()),
        Cell::new(summary.status_message()).fg(severity_color(summary.status_severity())),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn severity_color(severity: StatusSeverity) -> Color {
    match severity {
        StatusSeverity::Information => Color::Cyan,
        StatusSeverity::Warning => Color::Yellow,
        StatusSeverity::Success => Color::Green,
    }
}

fn selected_cell(selected: bool) -> Cell {
    if selected {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("·")
    }
}

fn category_cell(category: CourseCategory) -> Cell {
    match category {
        CourseCategory::Core => Cell::new(category).add_attribute(Attribute::Bold),
        CourseCategory::Elective => Cell::new(category),
        CourseCategory::University => dim_cell(category),
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
    use course_model::{CourseId, CreditBounds};

    use super::*;

    fn state() -> RegistrationState {
        let course = Course::new(
            CourseId::new("BCS3023-02").unwrap(),
            "BCS3023",
            "Database Systems",
            "Prof. Ahmad Zaki",
            "Tue 9:00–12:00",
            3,
            CourseCategory::Core,
        )
        .unwrap();
        RegistrationState::new(vec![course], CreditBounds::default())
    }

    #[test]
    fn course_table_lists_every_course() {
        let state = state();
        let table = course_table(state.courses());
        assert_eq!(table.row_count(), 1);
        let text = table.to_string();
        assert!(text.contains("BCS3023-02"));
        assert!(text.contains("Database Systems"));
    }

    #[test]
    fn summary_table_shows_status_message() {
        let mut state = state();
        state.toggle_selection("BCS3023-02");
        let text = summary_table(&state).to_string();
        assert!(text.contains("Insufficient credit hours"));
        assert!(text.contains("1 / 1"));
    }
}
