//! Line diff for failure output.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Same(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

/// Full-context unified diff of two texts.
pub(crate) fn unified(expected: &str, actual: &str) -> String {
    let old: Vec<&str> = expected.lines().collect();
    let new: Vec<&str> = actual.lines().collect();

    let mut out = String::from("--- Expected\n+++ Actual\n@@ @@\n");
    for line in diff_lines(&old, &new) {
        let (marker, text) = match line {
            Line::Same(text) => (' ', text),
            Line::Removed(text) => ('-', text),
            Line::Added(text) => ('+', text),
        };
        out.push(marker);
        out.push_str(text);
        out.push('\n');
    }
    out
}

/// Largest LCS table built for the lines between the common prefix and suffix.
const MAX_TABLE_CELLS: usize = 4_000_000;

/// Line alignment; removals are listed before additions.
///
/// The common prefix and suffix are kept as context. The lines in between are
/// aligned by longest common subsequence, or listed as all removed then all
/// added when that table would exceed [`MAX_TABLE_CELLS`].
fn diff_lines<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<Line<'a>> {
    let prefix = old
        .iter()
        .zip(new)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let old_middle = &old[prefix..old.len() - suffix];
    let new_middle = &new[prefix..new.len() - suffix];

    let mut lines = Vec::with_capacity(old.len().max(new.len()));
    lines.extend(old[..prefix].iter().copied().map(Line::Same));
    let cells = (old_middle.len() + 1).saturating_mul(new_middle.len() + 1);
    if cells > MAX_TABLE_CELLS {
        lines.extend(old_middle.iter().copied().map(Line::Removed));
        lines.extend(new_middle.iter().copied().map(Line::Added));
    } else {
        align(old_middle, new_middle, &mut lines);
    }
    lines.extend(old[old.len() - suffix..].iter().copied().map(Line::Same));
    lines
}

fn align<'a>(old: &[&'a str], new: &[&'a str], lines: &mut Vec<Line<'a>>) {
    let rows = old.len();
    let cols = new.len();
    // lcs[i][j] = LCS length of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; cols + 1]; rows + 1];
    for i in (0..rows).rev() {
        for j in (0..cols).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < rows && j < cols {
        if old[i] == new[j] {
            lines.push(Line::Same(old[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            lines.push(Line::Removed(old[i]));
            i += 1;
        } else {
            lines.push(Line::Added(new[j]));
            j += 1;
        }
    }
    lines.extend(old[i..].iter().copied().map(Line::Removed));
    lines.extend(new[j..].iter().copied().map(Line::Added));
}
