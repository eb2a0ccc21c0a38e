use std::collections::HashMap;

use crate::models::{ChartSlice, SliceStyle};
use crate::stats::TimeWindow;

/// Slice palette, assigned by rank order and cycled past 8 contributors.
pub const PALETTE: [&str; 8] = [
    "#2563eb", "#60a5fa", "#93c5fd", "#3b82f6", "#1d4ed8", "#1e40af", "#818cf8", "#4f46e5",
];

/// Turn per-author counts into chart slices for the selected window, ranked
/// by adjusted count. Ties break on name so map iteration order never leaks
/// into the ranking (or the colors derived from it).
pub fn ranked_slices(counts: &HashMap<String, u64>, window: TimeWindow) -> Vec<ChartSlice> {
    let mut slices: Vec<ChartSlice> = counts
        .iter()
        .map(|(name, count)| ChartSlice {
            name: name.clone(),
            value: window.adjust(*count),
        })
        .collect();

    slices.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    slices
}

/// Assign a palette color to each slice, in the order given.
///
/// Callers rank the slices first; the builder itself colors whatever order it
/// is handed, so the same input order always produces the same assignment.
pub fn chart_config(slices: &[ChartSlice]) -> HashMap<String, SliceStyle> {
    slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            (
                slice.name.clone(),
                SliceStyle {
                    label: slice.name.clone(),
                    color: PALETTE[index % PALETTE.len()].to_string(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn counts(entries: &[(&str, u64)]) -> HashMap<String, u64> {
        entries
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_slices_ranked_descending() {
        let slices = ranked_slices(
            &counts(&[("ana", 3), ("bob", 10), ("cleo", 7)]),
            TimeWindow::All,
        );
        let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["bob", "cleo", "ana"]);
    }

    #[test]
    fn test_ties_break_on_name() {
        let slices = ranked_slices(&counts(&[("zoe", 5), ("abe", 5)]), TimeWindow::All);
        let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["abe", "zoe"]);
    }

    #[test]
    fn test_window_applied_per_author() {
        let slices = ranked_slices(&counts(&[("ana", 100)]), TimeWindow::Monthly);
        assert_eq!(slices[0].value, 30);
    }

    #[test]
    fn test_empty_counts_yield_empty_slices_and_config() {
        let slices = ranked_slices(&HashMap::new(), TimeWindow::All);
        assert!(slices.is_empty());
        assert!(chart_config(&slices).is_empty());
    }

    #[test]
    fn test_colors_follow_slice_order() {
        let slices = vec![
            ChartSlice {
                name: "first".to_string(),
                value: 9,
            },
            ChartSlice {
                name: "second".to_string(),
                value: 1,
            },
        ];
        let config = chart_config(&slices);
        assert_eq!(config["first"].color, PALETTE[0]);
        assert_eq!(config["second"].color, PALETTE[1]);
        assert_eq!(config["first"].label, "first");
    }

    #[test]
    fn test_palette_cycles_after_eight() {
        let slices: Vec<ChartSlice> = (0..9)
            .map(|i| ChartSlice {
                name: format!("author-{}", i),
                value: 9 - i as u64,
            })
            .collect();
        let config = chart_config(&slices);
        assert_eq!(config.len(), 9);
        assert_eq!(config["author-8"].color, PALETTE[0]);
        assert_eq!(config["author-7"].color, PALETTE[7]);
    }
}
