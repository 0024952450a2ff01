//! 連續活動日曆
//!
//! 由活動日期清單建出日曆視圖與統計：
//!
//! | 輸出               | 規則                                             |
//! |--------------------|--------------------------------------------------|
//! | 當前連續天數       | 最近活動日必須是今天或昨天，否則為 0；逐日回走   |
//! | 寬限日             | 無活動但前後一天（就整份輸入而言）都有活動       |
//! | 最長空窗           | 視窗內連續無活動天數的最大值（含視窗尾端）       |
//! | 週分組             | 每逢週六換行，最後的不完整週照樣輸出             |
//!
//! 寬限日只用於顯示，不延續連續天數——連續計數的回走從不參考寬限標記。

use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use super::constants::STREAK_WINDOW_DAYS;

/// 日曆中的一天
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub has_activity: bool,
    /// 無活動但前後一天都有活動（僅供顯示）
    pub is_grace_day: bool,
    pub is_today: bool,
}

/// 一列週（週六之後換行，最後一週可能不滿）
#[derive(Clone, Debug, Serialize)]
pub struct CalendarWeek {
    pub days: Vec<CalendarDay>,
}

/// 日曆視圖與統計
#[derive(Clone, Debug, Serialize)]
pub struct StreakCalendar {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub weeks: Vec<CalendarWeek>,
    pub current_streak_days: i64,
    pub longest_gap_days: i64,
    pub active_day_count: i64,
    pub grace_day_count: i64,
}

/// 解析 `YYYY-MM-DD` 日期字串；格式不合的項目直接略過
///
/// 上游負責驗證格式，這裡只做優雅降級，不回傳錯誤。
pub fn parse_activity_dates(raw: &[String]) -> Vec<NaiveDate> {
    raw.iter()
        .filter_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .collect()
}

/// 當前連續天數
///
/// 最近活動日不是今天也不是昨天時直接回 0；否則從起點逐日回走，
/// 日期差恰為一天才算連續，缺一天即中斷（寬限日不補）。
pub fn current_streak_days(dates: &[NaiveDate], today: NaiveDate) -> i64 {
    let set: HashSet<NaiveDate> = dates.iter().copied().collect();
    let yesterday = today - Days::new(1);

    let start = if set.contains(&today) {
        today
    } else if set.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    let mut day = start;
    while set.contains(&day) {
        streak += 1;
        match day.checked_sub_days(Days::new(1)) {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// 歷史最長連續天數（不限定結尾在今天）
pub fn longest_streak_days(dates: &[NaiveDate]) -> i64 {
    let mut sorted: Vec<NaiveDate> = dates.iter().copied().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut longest = 0i64;
    let mut run = 0i64;
    let mut prev: Option<NaiveDate> = None;

    for day in sorted {
        run = match prev {
            Some(p) if day - p == chrono::Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}

/// 以預設 30 天視窗建日曆
pub fn build_streak_calendar(dates: &[NaiveDate], today: NaiveDate) -> StreakCalendar {
    build_streak_calendar_with_window(dates, today, STREAK_WINDOW_DAYS)
}

/// 帶視窗參數的日曆建構（視窗以 `today` 結尾）
pub fn build_streak_calendar_with_window(
    dates: &[NaiveDate],
    today: NaiveDate,
    window_days: i64,
) -> StreakCalendar {
    let window_days = window_days.max(1);
    let set: HashSet<NaiveDate> = dates.iter().copied().collect();
    let window_start = today - Days::new(window_days as u64 - 1);

    let mut weeks = Vec::new();
    let mut week = Vec::new();
    let mut active_day_count = 0i64;
    let mut grace_day_count = 0i64;
    let mut longest_gap = 0i64;
    let mut gap_run = 0i64;

    let mut day = window_start;
    while day <= today {
        let has_activity = set.contains(&day);

        // 寬限日看整份輸入，不受視窗邊界影響
        let is_grace_day = !has_activity
            && set.contains(&(day - Days::new(1)))
            && set.contains(&(day + Days::new(1)));

        if has_activity {
            active_day_count += 1;
            gap_run = 0;
        } else {
            gap_run += 1;
            longest_gap = longest_gap.max(gap_run);
        }
        if is_grace_day {
            grace_day_count += 1;
        }

        week.push(CalendarDay {
            date: day,
            has_activity,
            is_grace_day,
            is_today: day == today,
        });

        // 週六之後換行
        if day.weekday() == Weekday::Sat {
            weeks.push(CalendarWeek { days: std::mem::take(&mut week) });
        }

        day = day + Days::new(1);
    }

    // 最後的不完整週照樣輸出
    if !week.is_empty() {
        weeks.push(CalendarWeek { days: week });
    }

    StreakCalendar {
        window_start,
        window_end: today,
        weeks,
        current_streak_days: current_streak_days(dates, today),
        longest_gap_days: longest_gap,
        active_day_count,
        grace_day_count,
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn consecutive_days(end: NaiveDate, count: u64) -> Vec<NaiveDate> {
        (0..count).map(|i| end - Days::new(i)).collect()
    }

    #[test]
    fn test_parse_skips_malformed() {
        let raw = vec![
            "2026-08-01".to_string(),
            "not-a-date".to_string(),
            "2026-8-2".to_string(), // 非零填充也接受（%m 容許）
            "2026-13-40".to_string(),
        ];
        let parsed = parse_activity_dates(&raw);
        assert!(parsed.contains(&d("2026-08-01")));
        assert!(!parsed.iter().any(|x| x.month() == 13));
    }

    #[test]
    fn test_streak_requires_recent_activity() {
        let today = d("2026-08-28");
        // 最近活動在前天：連續數歸零
        let stale = consecutive_days(d("2026-08-26"), 10);
        assert_eq!(current_streak_days(&stale, today), 0);

        // 昨天結尾仍算有效
        let ends_yesterday = consecutive_days(d("2026-08-27"), 5);
        assert_eq!(current_streak_days(&ends_yesterday, today), 5);

        assert_eq!(current_streak_days(&[], today), 0);
    }

    #[test]
    fn test_streak_breaks_at_gap() {
        let today = d("2026-08-28");
        // 28、27、26、24、23：缺 25 號，回走停在 26
        let dates = vec![
            d("2026-08-28"),
            d("2026-08-27"),
            d("2026-08-26"),
            d("2026-08-24"),
            d("2026-08-23"),
        ];
        assert_eq!(current_streak_days(&dates, today), 3);
    }

    #[test]
    fn test_streak_ignores_duplicates() {
        let today = d("2026-08-28");
        let dates = vec![d("2026-08-28"), d("2026-08-28"), d("2026-08-27")];
        assert_eq!(current_streak_days(&dates, today), 2);
    }

    #[test]
    fn test_longest_streak_anywhere_in_log() {
        let dates = vec![
            d("2026-01-01"),
            d("2026-01-02"),
            d("2026-01-03"),
            d("2026-01-04"),
            d("2026-03-10"),
            d("2026-03-11"),
        ];
        assert_eq!(longest_streak_days(&dates), 4);
        assert_eq!(longest_streak_days(&[]), 0);
    }

    #[test]
    fn test_perfect_month_calendar() {
        // 30 天全勤：連續 30、空窗 0
        let today = d("2026-08-28");
        let dates = consecutive_days(today, 30);
        let cal = build_streak_calendar(&dates, today);

        assert_eq!(cal.current_streak_days, 30);
        assert_eq!(cal.longest_gap_days, 0);
        assert_eq!(cal.active_day_count, 30);
        assert_eq!(cal.grace_day_count, 0);
        assert_eq!(cal.window_start, d("2026-07-30"));
        assert_eq!(cal.window_end, today);

        let total_days: usize = cal.weeks.iter().map(|w| w.days.len()).sum();
        assert_eq!(total_days, 30);
    }

    #[test]
    fn test_grace_day_is_cosmetic_only() {
        let today = d("2026-08-28");
        // 缺 26 號但 25、27 都有活動：26 是寬限日
        let dates = vec![
            d("2026-08-28"),
            d("2026-08-27"),
            d("2026-08-25"),
            d("2026-08-24"),
        ];
        let cal = build_streak_calendar(&dates, today);

        let day26 = cal
            .weeks
            .iter()
            .flat_map(|w| &w.days)
            .find(|day| day.date == d("2026-08-26"))
            .unwrap();
        assert!(day26.is_grace_day);
        assert!(!day26.has_activity);

        // 寬限日不延續連續天數：仍只算到 27 號
        assert_eq!(cal.current_streak_days, 2);
        assert_eq!(cal.grace_day_count, 1);
    }

    #[test]
    fn test_grace_day_checks_full_input_not_window() {
        let today = d("2026-08-28");
        // 視窗首日的前一天有活動（在視窗外），仍可構成寬限判定
        let mut dates = vec![d("2026-08-27"), d("2026-08-28")];
        let window_start = today - Days::new(6); // 7 天視窗
        dates.push(window_start - Days::new(1));
        dates.push(window_start + Days::new(1));

        let cal = build_streak_calendar_with_window(&dates, today, 7);
        let first = &cal.weeks[0].days[0];
        assert_eq!(first.date, window_start);
        assert!(first.is_grace_day);
    }

    #[test]
    fn test_longest_gap_includes_trailing() {
        let today = d("2026-08-28");
        // 視窗 10 天，只有頭兩天有活動：尾端 8 天是最長空窗
        let dates = vec![today - Days::new(9), today - Days::new(8)];
        let cal = build_streak_calendar_with_window(&dates, today, 10);
        assert_eq!(cal.longest_gap_days, 8);
        assert_eq!(cal.current_streak_days, 0);
    }

    #[test]
    fn test_weeks_break_after_saturday() {
        // 2026-08-28 是週五；視窗 14 天從 08-15（週六）開始
        let today = d("2026-08-28");
        let cal = build_streak_calendar_with_window(&[], today, 14);

        // 首日即週六：第一列只有一天
        assert_eq!(cal.weeks[0].days.len(), 1);
        assert_eq!(cal.weeks[0].days[0].date.weekday(), Weekday::Sat);
        // 中間列是完整的日到六
        assert_eq!(cal.weeks[1].days.len(), 7);
        assert_eq!(cal.weeks[1].days.last().unwrap().date.weekday(), Weekday::Sat);
        // 最後的不完整週（日~五）照樣輸出
        assert_eq!(cal.weeks.last().unwrap().days.len(), 6);
        assert!(cal.weeks.last().unwrap().days.last().unwrap().is_today);
    }

    #[test]
    fn test_activity_outside_window_not_counted() {
        let today = d("2026-08-28");
        let dates = vec![today, today - Days::new(40)];
        let cal = build_streak_calendar(&dates, today);
        // 視窗外的活動日不進日曆統計
        assert_eq!(cal.active_day_count, 1);
    }
}
