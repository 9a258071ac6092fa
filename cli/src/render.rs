use fogsweep_core::Grid;

/// Draws the field as fixed-width text.
///
/// ```text
///  |123456789|
/// -|---------|
/// 1|../1.....|
/// ```
///
/// Column headers only keep their last digit so every cell stays one
/// character wide on fields larger than 9.
pub fn render_board(grid: &Grid, reveal_all: bool) -> String {
    let size = usize::from(grid.size());
    let label_width = size.to_string().len();
    let border = format!("{}|{}|\n", "-".repeat(label_width), "-".repeat(size));

    let mut out = String::new();
    out.push_str(&format!("{:>label_width$}|", ""));
    out.extend((1..=size).map(|col| char::from(b'0' + (col % 10) as u8)));
    out.push_str("|\n");
    out.push_str(&border);

    for (index, row) in grid.snapshot(reveal_all).rows().into_iter().enumerate() {
        out.push_str(&format!("{:>label_width$}|", index + 1));
        out.extend(row.iter().map(|view| view.symbol()));
        out.push_str("|\n");
    }

    out.push_str(&border);
    out
}
