use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use restock_cli::pipeline::PlanResult;
use restock_model::{TRANSFER_COLUMNS, TransferLine};
use restock_report::{FlowMatrix, StoreTotal, TransferSummary};

pub fn print_summary(result: &PlanResult) {
    let summary = &result.summary;
    let stats = &result.allocation.stats;
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!(
        "Variants: {} ({} with transfers, {} held by fulfillment stock)",
        stats.groups, stats.groups_with_transfers, stats.skipped_never_sender
    );

    print_plan(&result.allocation.lines);
    print_totals(summary);
    print_top_product(summary);
    if summary.total_shipped == 0 {
        println!();
        println!("No transfers planned.");
        return;
    }
    print_store_totals("Received by store", "Received", &summary.received_by_store);
    print_store_totals("Sent by store", "Sent", &summary.sent_by_store);
    print_flows(&summary.flows);
}

fn print_plan(lines: &[TransferLine]) {
    if lines.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(TRANSFER_COLUMNS.iter().map(|name| header_cell(name)));
    apply_table_style(&mut table);
    align_column(&mut table, 6, CellAlignment::Right);
    for line in lines {
        let row = line.to_row();
        table.add_row(row.into_iter().map(Cell::new));
    }
    println!();
    println!("Transfer plan:");
    println!("{table}");
}

fn print_totals(summary: &TransferSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Net sales"),
        header_cell("Stock"),
        header_cell("Units to ship"),
    ]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total_sales),
        Cell::new(summary.total_stock),
        count_cell(summary.total_shipped),
    ]);
    println!();
    println!("Totals:");
    println!("{table}");
}

fn print_top_product(summary: &TransferSummary) {
    let Some(top) = &summary.top_product else {
        return;
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Product code"),
        header_cell("Product"),
        header_cell("Color"),
        header_cell("Units"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(&top.product_code),
        Cell::new(&top.product_name),
        Cell::new(&top.color_name),
        count_cell(top.units),
    ]);
    println!();
    println!("Most transferred product:");
    println!("{table}");
}

fn print_store_totals(title: &str, label: &str, totals: &[StoreTotal]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Store"), header_cell(label)]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for total in totals {
        table.add_row(vec![store_cell(&total.store), count_cell(total.units)]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_flows(flows: &FlowMatrix) {
    let mut table = Table::new();
    let mut header = vec![header_cell("Sender \\ Receiver")];
    header.extend(flows.receivers.iter().map(|receiver| header_cell(receiver)));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=flows.receivers.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (sender, units) in flows.senders.iter().zip(&flows.units) {
        let mut row = vec![store_cell(sender)];
        row.extend(units.iter().map(|value| count_cell(*value)));
        table.add_row(row);
    }
    println!();
    println!("Sender → receiver:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
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

fn store_cell(store: &str) -> Cell {
    Cell::new(store).fg(Color::Blue)
}

fn count_cell(value: u64) -> Cell {
    if value > 0 {
        Cell::new(value).fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}
