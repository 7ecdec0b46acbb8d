use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use santa_cli::types::{AssignResult, CheckResult, VerifyResult};

pub fn print_assign_summary(result: &AssignResult, show_table: bool) {
    println!("Participants: {}", result.participants);
    if result.history_edges > 0 {
        println!(
            "History: {} pairs ({} apply, {} ignored)",
            result.history_edges, result.excluded_edges, result.ignored_history
        );
    }
    println!("Seed: {} (attempts: {})", result.seed, result.attempts);
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: dry run, nothing written"),
    }
    if !show_table {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Giver"),
        header_cell("Email"),
        header_cell("Gives gift to"),
        header_cell("Email"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, assignment) in result.assignments.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&assignment.giver.name).add_attribute(Attribute::Bold),
            dim_cell(&assignment.giver.email),
            Cell::new(&assignment.recipient.name)
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            dim_cell(&assignment.recipient.email),
        ]);
    }
    println!("{table}");
}

pub fn print_check_summary(result: &CheckResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Name"), header_cell("Email")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, participant) in result.roster.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&participant.name),
            dim_cell(&participant.email),
        ]);
    }
    println!("{table}");
    println!("Participants: {}", result.roster.len());
    println!(
        "History: {} pairs ({} apply, {} ignored)",
        result.history_edges, result.excluded_edges, result.ignored_history
    );
    match &result.feasibility {
        Ok(()) => println!("Constraints: ok"),
        Err(error) => eprintln!("Constraints: {error}"),
    }
}

pub fn print_verify_summary(result: &VerifyResult) {
    println!("Rows: {}", result.rows);
    match &result.violation {
        None => println!("Assignments: valid"),
        Some(violation) => eprintln!("Assignments: invalid, {violation}"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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
