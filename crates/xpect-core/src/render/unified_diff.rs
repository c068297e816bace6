//! Unified line diff
//!
//! The common prefix and suffix are matched directly; the lines between them
//! are aligned with a longest-common-subsequence table, bounded in size. Then
//! changes are grouped into `@@` hunks padded with `context_lines` of
//! unchanged text.

use crate::config::RenderConfig;

const NO_DIFFERENCE: &str = "@@ no textual difference @@";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Keep,
    Delete,
    Insert,
}

/// One aligned line with its position in both inputs before the line
#[derive(Debug, Clone, Copy)]
struct Step {
    op: Op,
    old_pos: usize,
    new_pos: usize,
}

/// Diff `actual` against `expected`, line by line
///
/// Output starts with `--- <actual_label>` and `+++ <expected_label>`
/// headers. When the inputs are identical the headers are followed by a
/// single marker line instead of hunks.
pub fn unified_diff(actual: &str, expected: &str, config: &RenderConfig) -> String {
    let old: Vec<&str> = actual.lines().collect();
    let new: Vec<&str> = expected.lines().collect();
    let steps = align(&old, &new);

    let mut out = format!("--- {}\n+++ {}\n", config.actual_label, config.expected_label);

    let changes: Vec<usize> = steps
        .iter()
        .enumerate()
        .filter(|(_, step)| step.op != Op::Keep)
        .map(|(i, _)| i)
        .collect();
    if changes.is_empty() {
        out.push_str(NO_DIFFERENCE);
        out.push('\n');
        return out;
    }

    for (start, end) in hunk_ranges(&changes, steps.len(), config.context_lines) {
        write_hunk(&mut out, &steps[start..end], &old, &new);
    }
    out
}

/// Largest LCS table built for the changed middle section
///
/// Past this size the middle is reported as one delete block followed by one
/// insert block.
const MAX_TABLE_CELLS: usize = 4_000_000;

fn align(old: &[&str], new: &[&str]) -> Vec<Step> {
    let (n, m) = (old.len(), new.len());
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mut steps = Vec::with_capacity(n + m - prefix - suffix);
    steps.extend((0..prefix).map(|k| Step {
        op: Op::Keep,
        old_pos: k,
        new_pos: k,
    }));
    align_middle(
        &old[prefix..n - suffix],
        &new[prefix..m - suffix],
        prefix,
        &mut steps,
    );
    steps.extend((0..suffix).map(|k| Step {
        op: Op::Keep,
        old_pos: n - suffix + k,
        new_pos: m - suffix + k,
    }));
    steps
}

/// Align the section between the common prefix and suffix
///
/// `offset` is the section's start in both inputs.
fn align_middle(old: &[&str], new: &[&str], offset: usize, steps: &mut Vec<Step>) {
    let (n, m) = (old.len(), new.len());
    let cells = (n + 1).saturating_mul(m + 1);
    if cells > MAX_TABLE_CELLS {
        steps.extend((0..n).map(|i| Step {
            op: Op::Delete,
            old_pos: offset + i,
            new_pos: offset,
        }));
        steps.extend((0..m).map(|j| Step {
            op: Op::Insert,
            old_pos: offset + n,
            new_pos: offset + j,
        }));
        return;
    }

    // lcs[i * width + j] = length of the LCS of old[i..] and new[j..]
    let width = m + 1;
    let mut lcs = vec![0u32; cells];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i * width + j] = if old[i] == new[j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        let op = if i < n && j < m && old[i] == new[j] {
            Op::Keep
        } else if j == m || (i < n && lcs[(i + 1) * width + j] >= lcs[i * width + j + 1]) {
            Op::Delete
        } else {
            Op::Insert
        };
        steps.push(Step {
            op,
            old_pos: offset + i,
            new_pos: offset + j,
        });
        match op {
            Op::Keep => {
                i += 1;
                j += 1;
            }
            Op::Delete => i += 1,
            Op::Insert => j += 1,
        }
    }
}

/// Group change indices into `[start, end)` step ranges with context
fn hunk_ranges(changes: &[usize], len: usize, context: usize) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &index in changes {
        let start = index.saturating_sub(context);
        let end = (index + context + 1).min(len);
        match ranges.last_mut() {
            Some(last) if start <= last.1 => last.1 = end.max(last.1),
            _ => ranges.push((start, end)),
        }
    }
    ranges
}

fn write_hunk(out: &mut String, steps: &[Step], old: &[&str], new: &[&str]) {
    let Some(first) = steps.first() else {
        return;
    };
    let old_len = steps.iter().filter(|s| s.op != Op::Insert).count();
    let new_len = steps.iter().filter(|s| s.op != Op::Delete).count();
    out.push_str(&format!(
        "@@ -{} +{} @@\n",
        range_label(first.old_pos, old_len),
        range_label(first.new_pos, new_len)
    ));
    for step in steps {
        match step.op {
            Op::Keep => {
                out.push(' ');
                out.push_str(old[step.old_pos]);
            }
            Op::Delete => {
                out.push('-');
                out.push_str(old[step.old_pos]);
            }
            Op::Insert => {
                out.push('+');
                out.push_str(new[step.new_pos]);
            }
        }
        out.push('\n');
    }
}

/// `start,len` with 1-based start; an empty range reports the line before it
fn range_label(pos: usize, len: usize) -> String {
    if len == 0 {
        format!("{},0", pos)
    } else {
        format!("{},{}", pos + 1, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(context_lines: usize) -> RenderConfig {
        RenderConfig {
            context_lines,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_identical_inputs() {
        let diff = unified_diff("a\nb", "a\nb", &config(3));
        assert_eq!(diff, "--- actual\n+++ expected\n@@ no textual difference @@\n");
    }

    #[test]
    fn test_single_line_change() {
        let diff = unified_diff("{\n  a: 1\n}", "{\n  a: 2\n}", &config(3));
        assert_eq!(
            diff,
            "--- actual\n+++ expected\n@@ -1,3 +1,3 @@\n {\n-  a: 1\n+  a: 2\n }\n"
        );
    }

    #[test]
    fn test_distant_changes_split_into_hunks() {
        let old = "1\n2\n3\n4\n5\n6\n7\n8\n9";
        let new = "x\n2\n3\n4\n5\n6\n7\n8\ny";
        let diff = unified_diff(old, new, &config(1));
        assert_eq!(diff.matches("@@ -").count(), 2);
        assert!(diff.contains("@@ -1,2 +1,2 @@\n-1\n+x\n 2\n"));
        assert!(diff.contains("@@ -8,2 +8,2 @@\n 8\n-9\n+y\n"));
    }

    #[test]
    fn test_pure_insertion() {
        let diff = unified_diff("", "a", &config(3));
        assert!(diff.ends_with("@@ -0,0 +1,1 @@\n+a\n"));
    }

    fn numbered(prefix: &str, count: usize) -> String {
        (0..count)
            .map(|i| format!("{}{}", prefix, i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_large_inputs_with_one_change() {
        let old = numbered("line ", 50_000);
        let new = old.replacen("line 25000\n", "changed\n", 1);
        let diff = unified_diff(&old, &new, &config(3));
        assert_eq!(diff.matches("@@ -").count(), 1);
        assert!(diff.contains("@@ -24998,7 +24998,7 @@\n line 24997\n"));
        assert!(diff.contains("-line 25000\n+changed\n"));
    }

    #[test]
    fn test_large_disjoint_inputs_fall_back_to_blocks() {
        let old = numbered("a", 50_000);
        let new = numbered("b", 50_000);
        let diff = unified_diff(&old, &new, &config(3));
        assert!(diff.starts_with("--- actual\n+++ expected\n@@ -1,50000 +1,50000 @@\n-a0\n"));
        assert!(diff.contains("-a49999\n+b0\n"));
        assert!(diff.ends_with("+b49999\n"));
    }

    #[test]
    fn test_change_inside_common_prefix_and_suffix() {
        let diff = unified_diff("a\nb\nc\nd", "a\nx\ny\nd", &config(0));
        assert_eq!(diff, "--- actual\n+++ expected\n@@ -2,2 +2,2 @@\n-b\n-c\n+x\n+y\n");
    }
}
