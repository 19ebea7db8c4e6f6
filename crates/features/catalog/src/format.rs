//! Markdown rendering of search results and price totals.

use rig_domain::part::Part;
use std::fmt::Write;

/// Upper bound on parts listed in one search result.
pub const MAX_DISPLAYED_PARTS: usize = 10;
/// Characters of a description shown before the ellipsis.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

pub const SEARCH_NEEDS_INPUT: &str = "Please enter a search query or select a category.";
pub const NO_PARTS_FOUND: &str = "No parts found.";
pub const SELECTION_NEEDS_INPUT: &str = "Please select parts first.";
pub const NO_MATCHING_PARTS: &str = "No matching parts found. Please check the part names.";

/// Formats a price with thousands separators and two decimals: `1234.5` -> `1,234.50`.
#[must_use]
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let Some((whole, cents)) = fixed.split_once('.') else {
        // NaN and infinities have no decimal point.
        return fixed;
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if value.is_sign_negative() && fixed != "0.00" {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(cents);
    grouped
}

/// Renders at most [`MAX_DISPLAYED_PARTS`] parts, or [`NO_PARTS_FOUND`] for an empty slice.
#[must_use]
pub fn format_parts(parts: &[Part]) -> String {
    if parts.is_empty() {
        return NO_PARTS_FOUND.to_owned();
    }

    parts.iter().take(MAX_DISPLAYED_PARTS).map(part_block).collect::<Vec<_>>().join("\n")
}

fn part_block(part: &Part) -> String {
    let name = if part.name.is_empty() { "Unknown" } else { &part.name };
    let category = if part.category.is_empty() { "N/A" } else { &part.category };

    let mut block = format!(
        "**{name}**\nCategory: {category}\nPrice: ${}\nStock: {} units\n",
        format_price(part.price),
        part.stock
    );
    if let Some(description) = part.description() {
        let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        let _ = writeln!(block, "Description: {preview}...");
    }
    block.push_str("\n---\n");
    block
}

/// Renders the selected parts and their grand total.
///
/// Returns [`NO_MATCHING_PARTS`] when nothing was selected.
#[must_use]
pub fn format_total<'a>(selected: impl IntoIterator<Item = &'a Part>) -> String {
    let mut total = 0.0;
    let lines: Vec<String> = selected
        .into_iter()
        .map(|part| {
            total += part.price;
            format!("{}: ${}", part.name, format_price(part.price))
        })
        .collect();

    if lines.is_empty() {
        return NO_MATCHING_PARTS.to_owned();
    }

    format!(
        "**Selected Parts:**\n\n{}\n\n**Total Price: ${}**",
        lines.join("\n"),
        format_price(total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(9.999), "10.00");
        assert_eq!(format_price(999.5), "999.50");
        assert_eq!(format_price(1_234.5), "1,234.50");
        assert_eq!(format_price(1_234_567.891), "1,234,567.89");
        assert_eq!(format_price(-2_500.0), "-2,500.00");
    }

    #[test]
    fn part_block_layout() {
        let part = Part::new("NVIDIA GeForce RTX 4080", "GPU", 1_199.0)
            .with_stock(3)
            .with_description("16GB GDDR6X");

        assert_eq!(
            format_parts(&[part]),
            "**NVIDIA GeForce RTX 4080**\nCategory: GPU\nPrice: $1,199.00\nStock: 3 units\n\
             Description: 16GB GDDR6X...\n\n---\n"
        );
    }

    #[test]
    fn blank_name_and_category_get_placeholders() {
        let text = format_parts(&[Part::default()]);
        assert!(text.starts_with("**Unknown**\nCategory: N/A\nPrice: $0.00\nStock: 0 units\n\n---"));
        assert!(!text.contains("Description:"));
    }

    #[test]
    fn description_preview_is_truncated_by_characters() {
        let long = "é".repeat(150);
        let text = format_parts(&[Part::new("Case", "Cabinet", 50.0).with_description(long)]);
        let expected = format!("Description: {}...\n", "é".repeat(DESCRIPTION_PREVIEW_CHARS));
        assert!(text.contains(&expected));
    }

    #[test]
    fn blocks_are_capped() {
        let parts: Vec<Part> =
            (0..25).map(|i| Part::new(format!("Part {i}"), "RAM", 10.0)).collect();
        let text = format_parts(&parts);
        assert_eq!(text.matches("\n---\n").count(), MAX_DISPLAYED_PARTS);
        assert!(text.contains("**Part 9**"));
        assert!(!text.contains("**Part 10**"));
    }

    #[test]
    fn total_layout() {
        let a = Part::new("A", "CPU", 10.0);
        let b = Part::new("B", "GPU", 20.0);
        assert_eq!(
            format_total([&a, &b]),
            "**Selected Parts:**\n\nA: $10.00\nB: $20.00\n\n**Total Price: $30.00**"
        );
        assert_eq!(format_total(std::iter::empty()), NO_MATCHING_PARTS);
    }
}
