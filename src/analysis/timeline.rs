//! Temporal groupings: timelines, activity maps, and the weekly heatmap.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Analyzer, LabelCount, UserFilter};
use crate::record::{DAY_ORDER, MONTH_ORDER, all_periods, month_name};

/// One month's message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    /// Four-digit year.
    pub year: i32,
    /// Numeric month, 1–12.
    pub month: u32,
    /// `"{MonthName}-{year}"`, e.g. `"January-2023"`.
    pub label: String,
    /// Records in that month.
    pub messages: usize,
}

/// One calendar date's message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// The calendar date.
    pub date: NaiveDate,
    /// Records on that date.
    pub messages: usize,
}

/// Complete day-of-week × hour-period activity grid.
///
/// Always 7 rows (Monday→Sunday) by 24 columns (`0-1`→`23-00`); cells with
/// no records are zero. No renderer-side fill-in is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHeatmap {
    /// Row labels in canonical order.
    pub days: Vec<String>,
    /// Column labels in canonical order.
    pub periods: Vec<String>,
    /// `grid[day][period]` record counts.
    pub grid: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    fn zeroed() -> Self {
        Self {
            days: DAY_ORDER.iter().map(|d| (*d).to_string()).collect(),
            periods: all_periods(),
            grid: vec![vec![0; 24]; 7],
        }
    }

    /// The count for a (day name, period label) cell, if both labels are
    /// canonical.
    pub fn get(&self, day: &str, period: &str) -> Option<usize> {
        let row = self.days.iter().position(|d| d == day)?;
        let col = self.periods.iter().position(|p| p == period)?;
        Some(self.grid[row][col])
    }
}

impl Analyzer {
    /// Messages per (year, month), ascending, with `"{MonthName}-{year}"`
    /// labels.
    pub fn monthly_timeline(&self, filter: &UserFilter) -> Vec<MonthlyActivity> {
        let mut groups: BTreeMap<(i32, u32), usize> = BTreeMap::new();
        for record in self.filtered(filter) {
            *groups.entry((record.year(), record.month_num())).or_insert(0) += 1;
        }

        groups
            .into_iter()
            .map(|((year, month), messages)| MonthlyActivity {
                year,
                month,
                label: format!("{}-{}", month_name(month), year),
                messages,
            })
            .collect()
    }

    /// Messages per calendar date, ascending.
    pub fn daily_timeline(&self, filter: &UserFilter) -> Vec<DailyActivity> {
        let mut groups: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for record in self.filtered(filter) {
            *groups.entry(record.date()).or_insert(0) += 1;
        }

        groups
            .into_iter()
            .map(|(date, messages)| DailyActivity { date, messages })
            .collect()
    }

    /// Messages per day-of-week name, descending by count. Days with no
    /// records are omitted; ties keep Monday-first order.
    pub fn week_activity_map(&self, filter: &UserFilter) -> Vec<LabelCount> {
        self.activity_by_label(filter, &DAY_ORDER, |r| r.day_name())
    }

    /// Messages per month name, descending by count. Months with no
    /// records are omitted; ties keep calendar order.
    pub fn month_activity_map(&self, filter: &UserFilter) -> Vec<LabelCount> {
        self.activity_by_label(filter, &MONTH_ORDER, |r| r.month_name())
    }

    fn activity_by_label(
        &self,
        filter: &UserFilter,
        canonical_order: &[&'static str],
        label_of: impl Fn(&crate::record::Record) -> &'static str,
    ) -> Vec<LabelCount> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in self.filtered(filter) {
            *counts.entry(label_of(record)).or_insert(0) += 1;
        }

        let mut table: Vec<LabelCount> = canonical_order
            .iter()
            .filter_map(|label| {
                counts
                    .get(label)
                    .map(|count| LabelCount::new(*label, *count))
            })
            .collect();
        table.sort_by(|a, b| b.count.cmp(&a.count));
        table
    }

    /// The complete zero-filled 7×24 day/period grid for the selection.
    pub fn activity_heatmap(&self, filter: &UserFilter) -> ActivityHeatmap {
        let mut heatmap = ActivityHeatmap::zeroed();

        for record in self.filtered(filter) {
            let row = record.timestamp.weekday().num_days_from_monday() as usize;
            let col = record.hour() as usize;
            heatmap.grid[row][col] += 1;
        }

        heatmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Stopwords;
    use crate::parse_transcript;

    const SAMPLE: &str = "\
1/1/23, 10:00 AM - Alice: new year
1/1/23, 11:00 PM - Bob: late one
1/2/23, 9:00 AM - Alice: next day
2/1/23, 9:00 AM - Alice: feb morning
2/1/23, 9:30 AM - Bob: feb too
";

    fn analyzer() -> Analyzer {
        Analyzer::new(parse_transcript(SAMPLE).unwrap()).with_stopwords(Stopwords::builtin())
    }

    #[test]
    fn test_monthly_timeline_ascending_with_labels() {
        let timeline = analyzer().monthly_timeline(&UserFilter::Overall);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].label, "January-2023");
        assert_eq!(timeline[0].messages, 3);
        assert_eq!(timeline[1].label, "February-2023");
        assert_eq!(timeline[1].messages, 2);
    }

    #[test]
    fn test_monthly_timeline_respects_filter() {
        let timeline = analyzer().monthly_timeline(&UserFilter::named("Bob"));
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].messages, 1);
        assert_eq!(timeline[1].messages, 1);
    }

    #[test]
    fn test_daily_timeline_ascending() {
        let timeline = analyzer().daily_timeline(&UserFilter::Overall);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(timeline[0].messages, 2);
        assert_eq!(timeline[2].date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
        assert_eq!(timeline[2].messages, 2);
    }

    #[test]
    fn test_week_activity_descending() {
        // 1/1/23 = Sunday (2 msgs), 1/2/23 = Monday (1), 2/1/23 = Wednesday (2)
        let week = analyzer().week_activity_map(&UserFilter::Overall);
        assert_eq!(week.len(), 3);
        assert_eq!(week[0].count, 2);
        assert_eq!(week[1].count, 2);
        assert_eq!(week[2], LabelCount::new("Monday", 1));
        // tie between Sunday and Wednesday keeps Monday-first canon
        assert_eq!(week[0].label, "Wednesday");
        assert_eq!(week[1].label, "Sunday");
    }

    #[test]
    fn test_month_activity_descending() {
        let months = analyzer().month_activity_map(&UserFilter::Overall);
        assert_eq!(months[0], LabelCount::new("January", 3));
        assert_eq!(months[1], LabelCount::new("February", 2));
    }

    #[test]
    fn test_heatmap_is_complete_grid() {
        let heatmap = analyzer().activity_heatmap(&UserFilter::Overall);
        assert_eq!(heatmap.days.len(), 7);
        assert_eq!(heatmap.periods.len(), 24);
        assert_eq!(heatmap.grid.len(), 7);
        assert!(heatmap.grid.iter().all(|row| row.len() == 24));
        assert_eq!(heatmap.days[0], "Monday");
        assert_eq!(heatmap.periods[23], "23-00");
    }

    #[test]
    fn test_heatmap_counts_cells() {
        let heatmap = analyzer().activity_heatmap(&UserFilter::Overall);
        // Sunday 10-11: one message at 10:00 AM on 1/1/23
        assert_eq!(heatmap.get("Sunday", "10-11"), Some(1));
        // Sunday 23-00: 11:00 PM message
        assert_eq!(heatmap.get("Sunday", "23-00"), Some(1));
        // Wednesday 9-10: both February messages
        assert_eq!(heatmap.get("Wednesday", "9-10"), Some(2));
        // untouched cell stays zero
        assert_eq!(heatmap.get("Friday", "0-1"), Some(0));
    }

    #[test]
    fn test_heatmap_total_matches_message_count() {
        let heatmap = analyzer().activity_heatmap(&UserFilter::Overall);
        let total: usize = heatmap.grid.iter().flatten().sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_empty_filter_yields_empty_tables_and_zero_grid() {
        let analyzer = analyzer();
        let filter = UserFilter::named("Nobody");
        assert!(analyzer.monthly_timeline(&filter).is_empty());
        assert!(analyzer.daily_timeline(&filter).is_empty());
        assert!(analyzer.week_activity_map(&filter).is_empty());
        let heatmap = analyzer.activity_heatmap(&filter);
        assert_eq!(heatmap.grid.iter().flatten().sum::<usize>(), 0);
    }
}
