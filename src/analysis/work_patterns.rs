use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Timelike};

use crate::analysis::context::AnalysisContext;
use crate::analysis::rules::{first_match, Ladder, Rule};
use crate::analysis::stats::{coefficient_of_variation, ratio};
use crate::models::{BurnoutAssessment, BurnoutFactors, BurnoutRisk, Event, WorkPatterns, WorkingStyle};

/// An hour is a peak when its count reaches this share of the busiest hour.
pub const PEAK_HOUR_RATIO: f64 = 0.8;
/// Days of history the recent-intensity signal looks at.
pub const BURNOUT_WINDOW_DAYS: i64 = 3;

const RECENT_INTENSITY: Ladder = Ladder::above(&[(5.0, 3), (3.0, 2), (1.5, 1)]);
const WEEKEND_WORK: Ladder = Ladder::above(&[(0.5, 3), (0.3, 2), (0.15, 1)]);
const LATE_NIGHT_WORK: Ladder = Ladder::above(&[(0.4, 3), (0.25, 2), (0.1, 1)]);
const DAILY_CLUSTERING: Ladder = Ladder::at_least(&[(20.0, 3), (12.0, 2), (8.0, 1)]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityBuckets {
    pub hourly: [u32; 24],
    /// Monday first.
    pub weekly: [u32; 7],
    pub daily: HashMap<NaiveDate, u32>,
    pub total: u32,
}

impl ActivityBuckets {
    pub fn from_events(ctx: &AnalysisContext<'_>, events: &[Event]) -> Self {
        let mut buckets = Self {
            hourly: [0; 24],
            weekly: [0; 7],
            daily: HashMap::new(),
            total: 0,
        };

        for timestamp in events.iter().filter_map(|e| e.created_at) {
            let local = ctx.local(timestamp);
            buckets.hourly[local.hour() as usize] += 1;
            buckets.weekly[local.weekday().num_days_from_monday() as usize] += 1;
            *buckets.daily.entry(local.date_naive()).or_insert(0) += 1;
            buckets.total += 1;
        }

        buckets
    }

    fn hours_total(&self, hours: &[usize]) -> u32 {
        hours.iter().map(|&h| self.hourly[h]).sum()
    }
}

/// Share of activity per time of day plus the weekday/weekend split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityProfile {
    pub total: u32,
    pub morning: f64,
    pub afternoon: f64,
    pub evening: f64,
    pub night: f64,
    pub weekend: f64,
    pub weekday_consistent: bool,
}

const MORNING: &[usize] = &[5, 6, 7, 8, 9, 10, 11];
const AFTERNOON: &[usize] = &[12, 13, 14, 15, 16];
const EVENING: &[usize] = &[17, 18, 19, 20, 21];
const NIGHT: &[usize] = &[22, 23, 0, 1, 2, 3, 4];

impl ActivityProfile {
    pub fn from_buckets(buckets: &ActivityBuckets) -> Self {
        let total = buckets.total as usize;
        let share = |hours: &[usize]| ratio(buckets.hours_total(hours) as usize, total);
        let weekend = buckets.weekly[5] + buckets.weekly[6];

        Self {
            total: buckets.total,
            morning: share(MORNING),
            afternoon: share(AFTERNOON),
            evening: share(EVENING),
            night: share(NIGHT),
            weekend: ratio(weekend as usize, total),
            weekday_consistent: coefficient_of_variation(&buckets.weekly[..5])
                .map_or(false, |cv| cv < 0.5),
        }
    }
}

pub struct WorkPatternAnalyzer {
    peak_ratio: f64,
    burnout_window_days: i64,
}

impl WorkPatternAnalyzer {
    pub fn new() -> Self {
        Self {
            peak_ratio: PEAK_HOUR_RATIO,
            burnout_window_days: BURNOUT_WINDOW_DAYS,
        }
    }

    pub fn analyze(&self, ctx: &AnalysisContext<'_>, events: &[Event]) -> WorkPatterns {
        let buckets = ActivityBuckets::from_events(ctx, events);
        let profile = ActivityProfile::from_buckets(&buckets);

        let working_style = self.determine_working_style(&profile);
        let burnout = self.assess_burnout_risk(ctx, events, &buckets);
        tracing::debug!(
            "Working style {} with {} burnout risk over {} timestamped events",
            working_style,
            burnout.level,
            buckets.total
        );

        WorkPatterns {
            hourly_activity: buckets.hourly.to_vec(),
            weekly_activity: buckets.weekly.to_vec(),
            peak_hours: self.peak_hours(&buckets.hourly),
            working_style,
            burnout,
        }
    }

    pub fn peak_hours(&self, hourly: &[u32; 24]) -> Vec<u32> {
        let max = hourly.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        let threshold = max as f64 * self.peak_ratio;
        (0u32..24)
            .filter(|&h| hourly[h as usize] as f64 >= threshold)
            .collect()
    }

    pub fn determine_working_style(&self, profile: &ActivityProfile) -> WorkingStyle {
        let rules = [
            Rule::new(WorkingStyle::GettingStarted, |p: &ActivityProfile| p.total < 5),
            Rule::new(WorkingStyle::WeekendEveningWarrior, |p: &ActivityProfile| {
                p.weekend > 0.5 && p.evening + p.night > 0.5
            }),
            Rule::new(WorkingStyle::WeekendWarrior, |p: &ActivityProfile| p.weekend > 0.5),
            Rule::new(WorkingStyle::ConsistentNightOwl, |p: &ActivityProfile| {
                p.night > 0.4 && p.weekday_consistent
            }),
            Rule::new(WorkingStyle::NightOwl, |p: &ActivityProfile| p.night > 0.3),
            Rule::new(WorkingStyle::EarlyBirdDeveloper, |p: &ActivityProfile| p.morning > 0.4),
            Rule::new(WorkingStyle::EveningCoder, |p: &ActivityProfile| p.evening > 0.4),
            Rule::new(WorkingStyle::AfternoonAchiever, |p: &ActivityProfile| p.afternoon > 0.4),
            Rule::new(WorkingStyle::ConsistentDaytimeDeveloper, |p: &ActivityProfile| {
                p.weekday_consistent
            }),
        ];

        first_match(&rules, profile)
            .copied()
            .unwrap_or(WorkingStyle::FlexibleScheduleDeveloper)
    }

    pub fn assess_burnout_risk(
        &self,
        ctx: &AnalysisContext<'_>,
        events: &[Event],
        buckets: &ActivityBuckets,
    ) -> BurnoutAssessment {
        let window_start = ctx.days_ago(self.burnout_window_days);
        let recent = events
            .iter()
            .filter_map(|e| e.created_at)
            .filter(|t| *t >= window_start)
            .count();
        let per_day = recent as f64 / self.burnout_window_days as f64;

        let profile = ActivityProfile::from_buckets(buckets);
        let late_night = ratio(buckets.hours_total(NIGHT) as usize, buckets.total as usize);
        let busiest_day = buckets.daily.values().copied().max().unwrap_or(0);

        let factors = BurnoutFactors {
            recent_intensity: RECENT_INTENSITY.points(per_day),
            weekend_work: WEEKEND_WORK.points(profile.weekend),
            late_night_work: LATE_NIGHT_WORK.points(late_night),
            daily_clustering: DAILY_CLUSTERING.points(busiest_day as f64),
        };
        let score = factors.total();
        let level = risk_level(score);

        BurnoutAssessment {
            level,
            score,
            factors,
            advice: burnout_advice(level).to_string(),
            recommendations: burnout_recommendations(level)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for WorkPatternAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn risk_level(score: u32) -> BurnoutRisk {
    match score {
        0..=1 => BurnoutRisk::Low,
        2..=4 => BurnoutRisk::LowMedium,
        5..=7 => BurnoutRisk::Medium,
        _ => BurnoutRisk::High,
    }
}

fn burnout_advice(level: BurnoutRisk) -> &'static str {
    match level {
        BurnoutRisk::Low => {
            "Your activity looks sustainable. Keep balancing focused work with time away from the keyboard."
        }
        BurnoutRisk::LowMedium => {
            "Mostly healthy, with a few signs of intensity worth keeping an eye on."
        }
        BurnoutRisk::Medium => {
            "Your recent pace shows several burnout warning signs. Consider easing off for a while."
        }
        BurnoutRisk::High => {
            "Your activity suggests a high risk of burnout. Make rest and recovery a priority."
        }
    }
}

fn burnout_recommendations(level: BurnoutRisk) -> &'static [&'static str] {
    match level {
        BurnoutRisk::Low => &[
            "Keep your current rhythm",
            "Schedule regular breaks to stay fresh",
        ],
        BurnoutRisk::LowMedium => &[
            "Protect at least one full day off each week",
            "Watch for late-night sessions creeping in",
        ],
        BurnoutRisk::Medium => &[
            "Set firm start and stop times for coding",
            "Limit weekend work to genuine emergencies",
            "Batch small tasks to cut down on context switching",
        ],
        BurnoutRisk::High => &[
            "Take a planned break from non-essential projects",
            "Move late-night work back to daytime hours",
            "Talk with your team or collaborators about workload",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sampler::FixedSampler;
    use crate::models::EventType;
    use chrono::{DateTime, Duration, FixedOffset, Offset, TimeZone, Utc};

    // A Saturday.
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn push_at(timestamp: DateTime<Utc>) -> Event {
        Event::new(EventType::Push, "me/repo", timestamp)
    }

    fn profile(total: u32) -> ActivityProfile {
        ActivityProfile {
            total,
            morning: 0.0,
            afternoon: 0.0,
            evening: 0.0,
            night: 0.0,
            weekend: 0.0,
            weekday_consistent: false,
        }
    }

    /// Five events around 10:00 on every weekday for four weeks from Monday 2024-05-13.
    fn weekday_events() -> Vec<Event> {
        let monday = Utc.with_ymd_and_hms(2024, 5, 13, 10, 0, 0).unwrap();
        (0..4)
            .flat_map(|week| {
                (0..5).map(move |day| monday + Duration::days(week * 7 + day))
            })
            .flat_map(|day| (0..5).map(move |i| push_at(day + Duration::minutes(i))))
            .collect()
    }

    #[test]
    fn test_buckets_and_peak_hours() {
        let sampler = FixedSampler::midpoint();
        let ctx = AnalysisContext::new(now(), Utc.fix(), &sampler);
        let base = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        let mut events = Vec::new();
        for _ in 0..10 {
            events.push(push_at(base + Duration::hours(14)));
        }
        for _ in 0..8 {
            events.push(push_at(base + Duration::hours(9)));
        }
        for _ in 0..3 {
            events.push(push_at(base + Duration::hours(22)));
        }
        events.push(Event::default());

        let buckets = ActivityBuckets::from_events(&ctx, &events);
        assert_eq!(buckets.total, 21);
        assert_eq!(buckets.hourly[14], 10);
        assert_eq!(buckets.weekly[0], 21);
        assert_eq!(WorkPatternAnalyzer::new().peak_hours(&buckets.hourly), vec![9, 14]);
    }

    #[test]
    fn test_peak_hours_empty_without_activity() {
        assert!(WorkPatternAnalyzer::new().peak_hours(&[0; 24]).is_empty());
    }

    #[test]
    fn test_buckets_follow_utc_offset() {
        let sampler = FixedSampler::midpoint();
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let ctx = AnalysisContext::new(now(), offset, &sampler);
        // 02:00 UTC Monday is 21:00 Sunday in UTC-5
        let events = vec![push_at(Utc.with_ymd_and_hms(2024, 6, 10, 2, 0, 0).unwrap())];
        let buckets = ActivityBuckets::from_events(&ctx, &events);
        assert_eq!(buckets.hourly[21], 1);
        assert_eq!(buckets.weekly[6], 1);
    }

    #[test]
    fn test_uniform_weekdays_are_never_weekend_style() {
        let sampler = FixedSampler::midpoint();
        let ctx = AnalysisContext::new(now(), Utc.fix(), &sampler);
        let events = weekday_events();
        assert!(events.len() >= 20);

        let buckets = ActivityBuckets::from_events(&ctx, &events);
        let profile = ActivityProfile::from_buckets(&buckets);
        assert_eq!(profile.weekend, 0.0);
        assert!(profile.weekday_consistent);

        let style = WorkPatternAnalyzer::new().determine_working_style(&profile);
        assert!(!style.is_weekend_variant());
        assert_eq!(style, WorkingStyle::EarlyBirdDeveloper);
    }

    #[test]
    fn test_working_style_rule_order() {
        let analyzer = WorkPatternAnalyzer::new();

        assert_eq!(analyzer.determine_working_style(&profile(3)), WorkingStyle::GettingStarted);

        let weekend_nights = ActivityProfile {
            weekend: 0.7,
            night: 0.6,
            ..profile(40)
        };
        assert_eq!(
            analyzer.determine_working_style(&weekend_nights),
            WorkingStyle::WeekendEveningWarrior
        );

        let weekend_mornings = ActivityProfile {
            weekend: 0.7,
            morning: 0.9,
            ..profile(40)
        };
        assert_eq!(
            analyzer.determine_working_style(&weekend_mornings),
            WorkingStyle::WeekendWarrior
        );

        let steady_owl = ActivityProfile {
            night: 0.5,
            weekday_consistent: true,
            ..profile(40)
        };
        assert_eq!(
            analyzer.determine_working_style(&steady_owl),
            WorkingStyle::ConsistentNightOwl
        );

        let owl = ActivityProfile {
            night: 0.35,
            evening: 0.45,
            ..profile(40)
        };
        assert_eq!(analyzer.determine_working_style(&owl), WorkingStyle::NightOwl);

        let spread = ActivityProfile {
            morning: 0.25,
            afternoon: 0.25,
            evening: 0.25,
            night: 0.25,
            ..profile(40)
        };
        assert_eq!(
            analyzer.determine_working_style(&spread),
            WorkingStyle::FlexibleScheduleDeveloper
        );
        assert_eq!(
            analyzer.determine_working_style(&ActivityProfile {
                weekday_consistent: true,
                ..spread
            }),
            WorkingStyle::ConsistentDaytimeDeveloper
        );
    }

    #[test]
    fn test_ten_pushes_in_a_day_is_at_least_low_medium() {
        let sampler = FixedSampler::midpoint();
        let ctx = AnalysisContext::new(now(), Utc.fix(), &sampler);
        let events: Vec<_> = (0..10)
            .map(|i| push_at(now() - Duration::hours(i * 2)))
            .collect();

        let buckets = ActivityBuckets::from_events(&ctx, &events);
        let assessment = WorkPatternAnalyzer::new().assess_burnout_risk(&ctx, &events, &buckets);

        // 10 events over a 3 day window is 3.33 per day
        assert_eq!(assessment.factors.recent_intensity, 2);
        assert!(assessment.level >= BurnoutRisk::LowMedium);
        assert_eq!(assessment.score, assessment.factors.total());
        assert!(!assessment.advice.is_empty());
        assert!(!assessment.recommendations.is_empty());
    }

    #[test]
    fn test_no_events_is_low_risk() {
        let sampler = FixedSampler::midpoint();
        let ctx = AnalysisContext::new(now(), Utc.fix(), &sampler);
        let buckets = ActivityBuckets::from_events(&ctx, &[]);
        let assessment = WorkPatternAnalyzer::new().assess_burnout_risk(&ctx, &[], &buckets);
        assert_eq!(assessment.level, BurnoutRisk::Low);
        assert_eq!(assessment.score, 0);
    }

    #[test]
    fn test_late_night_weekend_crunch_is_high_risk() {
        let sampler = FixedSampler::midpoint();
        let ctx = AnalysisContext::new(now(), Utc.fix(), &sampler);
        // 25 events at 01:00 on Saturday 2024-06-15
        let events: Vec<_> = (0..25)
            .map(|i| push_at(Utc.with_ymd_and_hms(2024, 6, 15, 1, 0, 0).unwrap() + Duration::seconds(i)))
            .collect();

        let buckets = ActivityBuckets::from_events(&ctx, &events);
        let assessment = WorkPatternAnalyzer::new().assess_burnout_risk(&ctx, &events, &buckets);
        assert_eq!(
            assessment.factors,
            BurnoutFactors {
                recent_intensity: 3,
                weekend_work: 3,
                late_night_work: 3,
                daily_clustering: 3,
            }
        );
        assert_eq!(assessment.level, BurnoutRisk::High);
    }

    #[test]
    fn test_risk_level_boundaries() {
        assert_eq!(risk_level(0), BurnoutRisk::Low);
        assert_eq!(risk_level(1), BurnoutRisk::Low);
        assert_eq!(risk_level(2), BurnoutRisk::LowMedium);
        assert_eq!(risk_level(4), BurnoutRisk::LowMedium);
        assert_eq!(risk_level(5), BurnoutRisk::Medium);
        assert_eq!(risk_level(8), BurnoutRisk::High);
        assert_eq!(risk_level(12), BurnoutRisk::High);
    }
}
