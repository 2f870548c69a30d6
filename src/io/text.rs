//! Plain-text reports of a partition
//!
//! The grid is printed as a bracketed matrix with right-aligned labels,
//! followed by every region's sorted coordinates, one per line.

use crate::algorithm::partition::Partition;

/// Render the label matrix, one bracketed row per line
pub fn format_grid(partition: &Partition) -> String {
    let width = partition
        .grid()
        .iter()
        .max()
        .map_or(1, |max| max.to_string().len());

    let mut out = String::new();
    let rows = partition.to_rows();
    let last = rows.len().saturating_sub(1);
    for (index, row) in rows.iter().enumerate() {
        let cells = row
            .iter()
            .map(|label| format!("{label:>width$}"))
            .collect::<Vec<_>>()
            .join(" ");

        let open = if index == 0 { "[[" } else { " [" };
        let close = if index == last { "]]" } else { "]" };
        out.push_str(&format!("{open}{cells}{close}\n"));
    }
    out
}

/// Render each region's header followed by its coordinates
pub fn format_regions(partition: &Partition) -> String {
    let mut out = String::new();
    for (region, cells) in partition.regions().iter().enumerate() {
        out.push_str(&format!("Region {region}:\n"));
        for cell in cells {
            out.push_str(&format!("  {cell}\n"));
        }
        out.push('\n');
    }
    out
}

/// Full report: grid matrix followed by the per-region listing
pub fn format_report(partition: &Partition) -> String {
    format!(
        "Grid representation:\n{}\nList of sorted coordinates for each region:\n{}",
        format_grid(partition),
        format_regions(partition)
    )
}
