/// Lays entry names out in fixed-width columns.
///
/// The column size is the widest name plus one separator space; as many
/// names as fit in `width` go on each line, with a minimum of one per line,
/// so a width of 0 degrades to a single column. Every name is padded to the
/// column size and a final partial line is flushed.
pub fn layout_columns(entries: &[String], width: usize) -> Vec<String> {
    let widest = entries
        .iter()
        .map(|entry| entry.chars().count())
        .max()
        .unwrap_or(0);
    let column_size = widest + 1;
    let entries_per_line = (width / column_size).max(1);

    let mut lines = Vec::new();
    let mut line = String::new();
    for (index, entry) in entries.iter().enumerate() {
        line.push_str(entry);
        for _ in entry.chars().count()..column_size {
            line.push(' ');
        }
        if (index + 1) % entries_per_line == 0 {
            lines.push(std::mem::take(&mut line));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entries(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn names_are_packed_and_padded_to_the_column_size() {
        let lines = layout_columns(&entries(&["a", "bb", "ccc"]), 10);
        assert_eq!(lines, vec!["a   bb  ", "ccc "]);
    }

    #[test]
    fn zero_width_yields_one_name_per_line() {
        let lines = layout_columns(&entries(&["a", "bb", "ccc"]), 0);
        assert_eq!(lines, vec!["a   ", "bb  ", "ccc "]);
    }

    #[test]
    fn width_smaller_than_one_name_still_fits_one_per_line() {
        let lines = layout_columns(&entries(&["longname", "x"]), 4);
        assert_eq!(lines, vec!["longname ", "x        "]);
    }

    #[test]
    fn exact_fit_leaves_no_partial_line() {
        let lines = layout_columns(&entries(&["aa", "bb", "cc", "dd"]), 6);
        assert_eq!(lines, vec!["aa bb ", "cc dd "]);
    }

    #[test]
    fn empty_listing_produces_no_lines() {
        assert!(layout_columns(&[], 80).is_empty());
    }

    #[rstest]
    #[case(80, 20)]
    #[case(5, 1)]
    #[case(10, 2)]
    fn line_count_follows_the_width(#[case] width: usize, #[case] per_line: usize) {
        let names: Vec<String> = (0..32).map(|index| format!("n{index:02}")).collect();
        let lines = layout_columns(&names, width);
        assert_eq!(lines.len(), 32_usize.div_ceil(per_line));
    }

    #[test]
    fn widths_are_measured_in_characters_not_bytes() {
        let lines = layout_columns(&entries(&["é", "ab"]), 6);
        // Widest is 2 chars, column size 3, two names per line
        assert_eq!(lines, vec!["é  ab "]);
    }
}
