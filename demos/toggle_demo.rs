//! Walks through the toggle gestures on a small buffer and prints the
//! resulting highlights and styling runs after each step.

use highlight::{RangeSet, TextRange};

const BUFFER_LEN: u64 = 40;

fn print_set(label: &str, set: &RangeSet) {
    let mut ranges = set.ranges().to_vec();
    ranges.sort_by_key(|range| range.start);
    let spans: Vec<String> = ranges
        .iter()
        .map(|range| format!("[{}, {})", range.start, range.end()))
        .collect();
    println!("{label}: {{{}}}", spans.join(", "));

    let picture: String = set
        .style_runs(BUFFER_LEN)
        .iter()
        .flat_map(|run| {
            let glyph = if run.highlighted { '#' } else { '.' };
            std::iter::repeat_n(glyph, usize::try_from(run.range.length).unwrap_or(0))
        })
        .collect();
    println!("  {picture}");
}

fn main() {
    let mut set = RangeSet::new();

    set.toggle(TextRange::new(5, 5));
    print_set("select [5, 10) on empty text", &set);

    set.toggle(TextRange::new(10, 5));
    print_set("select touching [10, 15)", &set);

    set.toggle(TextRange::new(8, 4));
    print_set("select [8, 12) across both", &set);

    set.toggle(TextRange::new(7, 3));
    print_set("re-select [7, 10) inside, punching a hole", &set);

    set.toggle(TextRange::new(20, 8));
    set.toggle(TextRange::new(3, 25));
    print_set("sweep [3, 28) over everything", &set);
}
