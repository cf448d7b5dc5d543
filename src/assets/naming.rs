// ── Filename scheme ───────────────────────────────────────────────────────────
//
// Tiles are named `<prefix><index><code>.png` with the index zero-padded to
// a width that fits the largest index of the table, so a directory listing
// sorts in table order.

/// Number of decimal digits needed to print every index of a table with
/// `table_len` rows.  Never less than one.
///
/// ```text
/// 1..=10 rows → 1    11..=100 rows → 2    101..=1000 rows → 3
/// ```
pub fn padding_width(table_len: usize) -> usize {
    let mut largest = table_len.saturating_sub(1);
    let mut digits = 1;
    while largest >= 10 {
        largest /= 10;
        digits += 1;
    }
    digits
}

/// Deterministic filename for the tile at `index` with `code`.
pub fn tile_file_name(prefix: &str, index: usize, code: &str, width: usize) -> String {
    format!("{prefix}{index:0width$}{code}.png")
}
