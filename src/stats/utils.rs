use crate::activities::models::Activity;

use super::models::ActivityStats;

/// Reduce a set of activities to dashboard totals. Records with a
/// non-positive distance or duration are left out of the distance and pace
/// figures but still counted as activities. Ratios are rounded to two
/// decimals; empty input yields all zeros.
pub fn summarize_activities(activities: &[Activity]) -> ActivityStats {
    let valid: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.distance > 0.0 && a.duration > 0)
        .collect();

    let total_distance: f64 = valid.iter().map(|a| a.distance).sum();
    let total_duration: i64 = valid.iter().map(|a| a.duration as i64).sum();

    let average_pace = if total_distance > 0.0 {
        total_duration as f64 / 60.0 / total_distance
    } else {
        0.0
    };

    let average_speed = if total_duration > 0 {
        total_distance / (total_duration as f64 / 3600.0)
    } else {
        0.0
    };

    let longest_run = valid.iter().map(|a| a.distance).fold(0.0, f64::max);

    let fastest_pace = valid
        .iter()
        .filter_map(|a| a.pace())
        .filter(|p| *p > 0.0)
        .fold(None, |best: Option<f64>, p| {
            Some(best.map_or(p, |b| b.min(p)))
        })
        .unwrap_or(0.0);

    ActivityStats {
        total_activities: activities.len() as u32,
        total_distance: round2(total_distance),
        total_duration,
        average_pace: round2(average_pace),
        average_speed: round2(average_speed),
        longest_run: round2(longest_run),
        fastest_pace: round2(fastest_pace),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
