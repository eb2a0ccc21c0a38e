use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::stats::TimeWindow;

/// One pie slice: a contributor and their window-adjusted commit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: u64,
}

/// Presentation entry for one contributor, keyed by name in the chart config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceStyle {
    pub label: String,
    pub color: String,
}

/// Response body for `GET /commits/chart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    pub window: TimeWindow,
    pub total_commits: u64,
    pub contributors: usize,
    pub slices: Vec<ChartSlice>,
    pub config: HashMap<String, SliceStyle>,
}
