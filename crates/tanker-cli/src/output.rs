//! Output formatting module

use tanker_app::app::{BucketPage, BucketRow, Capacity, SummaryStats};
use tanker_domain::model::Category;
use tanker_types::{OutputFormat, Result};

pub fn output_summary(output_format: OutputFormat, user_id: &str, stats: &SummaryStats) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(stats)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nFleet Summary: {}", user_id);
    println!("==============");
    for category in Category::ALL {
        let Some(tiles) = stats.get(category.key()) else {
            continue;
        };
        println!("\n{} ({}): {}", tiles.label, tiles.key, tiles.total);
        for tile in &tiles.filters {
            println!("  {:<28} {:>5}", format!("{} [{}]", tile.label, tile.key), tile.count);
        }
    }
    Ok(())
}

pub fn output_bucket_page(output_format: OutputFormat, page: &BucketPage) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(page)?;
        println!("{}", content);
        return Ok(());
    }

    println!(
        "\nBucket: {}  ({} of {} vehicles, sorted by {} {})",
        page.bucket, page.total_count, page.matched_count, page.sort_by, page.direction
    );
    if !page.search_term.is_empty() {
        println!("Search: {}", page.search_term);
    }
    println!("{}", "-".repeat(100));
    println!(
        "{:<14} {:<18} {:<22} {:<16} {:<18} {:>8}",
        "Vehicle", "From", "To", "Last Status", "Supervisor", "Capacity"
    );
    println!("{}", "-".repeat(100));
    for row in &page.data {
        print_row(row);
    }
    println!("{}", "-".repeat(100));
    println!(
        "Page {}/{}{}",
        page.pagination.current_page,
        page.pagination.total_pages,
        if page.pagination.has_more { " (more)" } else { "" }
    );
    Ok(())
}

fn print_row(row: &BucketRow) {
    let trip = &row.trip;
    let capacity = match row.capacity {
        Some(Capacity::Known(tons)) => format!("{:.1}", tons),
        Some(Capacity::NotAvailable) => "N/A".to_string(),
        None => "-".to_string(),
    };
    println!(
        "{:<14} {:<18} {:<22} {:<16} {:<18} {:>8}",
        truncate(&trip.vehicle_no, 14),
        truncate(trip.start_from.as_deref().unwrap_or("-"), 18),
        truncate(trip.end_to.as_deref().unwrap_or("-"), 22),
        truncate(&row.last_status, 16),
        truncate(trip.supervisor.as_deref().unwrap_or("-"), 18),
        capacity
    );
}

/// Cut to `max` characters, marking the cut with "~"
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
