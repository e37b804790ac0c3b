//! Terminal output for replay reports and accelerator lookups.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use menu_keys::{Accelerator, Modifiers};

use crate::replay::ReplayReport;

pub fn calls_table(report: &ReplayReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("ReturnID"),
        header_cell("Method"),
        header_cell("Menu"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for call in &report.calls {
        table.add_row(vec![
            Cell::new(call.index),
            Cell::new(&call.return_id),
            Cell::new(&call.method),
            call.menu_id.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
            match &call.err {
                None => Cell::new("ok").fg(Color::Green),
                Some(err) => Cell::new(err).fg(Color::Red).add_attribute(Attribute::Bold),
            },
        ]);
    }
    table
}

pub fn print_report(report: &ReplayReport) {
    println!("{}", calls_table(report));
    if report.skipped > 0 {
        println!("{} call(s) skipped after the first failure", report.skipped);
    }
    for menu in &report.menus {
        println!();
        match (&menu.root_id, &menu.outline) {
            (Some(root), Some(outline)) => {
                println!("Menu {} (root {root}, {} nodes):", menu.id, menu.nodes);
                print!("{outline}");
            }
            _ => println!("Menu {} ({} nodes, no root)", menu.id, menu.nodes),
        }
    }
}

pub fn keys_table(specs: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Modifiers"),
        header_cell("Key"),
        header_cell("Accelerator"),
    ]);
    apply_table_style(&mut table);
    for spec in specs {
        let accelerator = Accelerator::parse(spec);
        table.add_row(vec![
            Cell::new(spec),
            Cell::new(modifier_names(accelerator.modifiers)),
            if accelerator.key.is_none() {
                dim_cell("-")
            } else {
                Cell::new(accelerator.key)
            },
            Cell::new(accelerator).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

fn modifier_names(modifiers: Modifiers) -> String {
    if modifiers.is_empty() {
        return "-".to_string();
    }
    modifiers
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
