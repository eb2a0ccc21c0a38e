use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reporting window selected in the popup's time tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Weekly,
    Monthly,
    Yearly,
    #[default]
    All,
}

impl TimeWindow {
    /// Approximate a window-restricted count from an all-time total.
    ///
    /// The commit summary carries no per-commit timestamps, so shorter windows
    /// are estimated with fixed ratios instead of real date filtering. The
    /// adjusted per-author values need not sum to the adjusted total.
    pub fn adjust(self, count: u64) -> u64 {
        match self {
            TimeWindow::All | TimeWindow::Yearly => count,
            TimeWindow::Monthly => (count as f64 * 0.3).round() as u64,
            TimeWindow::Weekly => (count as f64 * 0.1).round() as u64,
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeWindow::Weekly => "weekly",
            TimeWindow::Monthly => "monthly",
            TimeWindow::Yearly => "yearly",
            TimeWindow::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(TimeWindow::Weekly),
            "monthly" => Ok(TimeWindow::Monthly),
            "yearly" => Ok(TimeWindow::Yearly),
            "all" => Ok(TimeWindow::All),
            other => Err(format!(
                "unknown time window '{}' (expected weekly, monthly, yearly or all)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_and_yearly_pass_through() {
        assert_eq!(TimeWindow::All.adjust(100), 100);
        assert_eq!(TimeWindow::Yearly.adjust(100), 100);
        assert_eq!(TimeWindow::All.adjust(0), 0);
    }

    #[test]
    fn test_monthly_is_thirty_percent_rounded() {
        assert_eq!(TimeWindow::Monthly.adjust(100), 30);
        assert_eq!(TimeWindow::Monthly.adjust(1), 0);
        assert_eq!(TimeWindow::Monthly.adjust(2), 1);
    }

    #[test]
    fn test_weekly_is_ten_percent_rounded() {
        assert_eq!(TimeWindow::Weekly.adjust(100), 10);
        assert_eq!(TimeWindow::Weekly.adjust(0), 0);
        // Math.round rounds .5 up
        assert_eq!(TimeWindow::Weekly.adjust(5), 1);
        assert_eq!(TimeWindow::Weekly.adjust(4), 0);
    }

    #[test]
    fn test_adjusted_count_never_exceeds_input() {
        for count in [0u64, 1, 7, 49, 100, 12_345] {
            for window in [
                TimeWindow::Weekly,
                TimeWindow::Monthly,
                TimeWindow::Yearly,
                TimeWindow::All,
            ] {
                assert!(window.adjust(count) <= count);
            }
        }
    }

    #[test]
    fn test_all_is_idempotent() {
        let once = TimeWindow::All.adjust(73);
        assert_eq!(TimeWindow::All.adjust(once), once);
    }

    #[test]
    fn test_parse_round_trip() {
        for window in [
            TimeWindow::Weekly,
            TimeWindow::Monthly,
            TimeWindow::Yearly,
            TimeWindow::All,
        ] {
            assert_eq!(window.to_string().parse::<TimeWindow>(), Ok(window));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_window() {
        assert!("quarterly".parse::<TimeWindow>().is_err());
        assert!("Weekly".parse::<TimeWindow>().is_err());
        assert!("".parse::<TimeWindow>().is_err());
    }
}
