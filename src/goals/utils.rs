use chrono::NaiveDateTime;

use crate::activities::models::Activity;

use super::models::{Goal, GoalDirection, GoalType};

/// Recalculate a goal's current value and completion flag from the given
/// activities. Only activities dated inside `[start_date, end_date]`
/// (inclusive) count, and records with a non-positive distance or duration
/// are skipped wherever the aggregation needs them. Running this twice with
/// the same inputs gives the same result.
pub fn recompute_goal(mut goal: Goal, activities: &[Activity]) -> Goal {
    let in_window: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.date >= goal.start_date && a.date <= goal.end_date)
        .collect();

    goal.current_value = aggregate_value(goal.goal_type, &in_window);
    goal.is_completed = meets_target(goal.goal_type, goal.current_value, goal.target_value);
    goal
}

/// Recompute every goal that is still in play: not completed and not past
/// its end date. Returns only the recomputed goals, in input order; the
/// caller decides how to persist or merge them.
pub fn recompute_all_active(
    goals: Vec<Goal>,
    activities: &[Activity],
    now: NaiveDateTime,
) -> Vec<Goal> {
    goals
        .into_iter()
        .filter(|g| !g.is_completed && g.end_date >= now)
        .map(|g| recompute_goal(g, activities))
        .collect()
}

/// How far along a goal is, as a percentage clamped to `[0, 100]`.
/// A current value of 0 always reads as no progress, whatever the type.
pub fn progress_percentage(goal: &Goal) -> f64 {
    if goal.current_value == 0.0 {
        return 0.0;
    }

    let percentage = match goal.goal_type.direction() {
        GoalDirection::LowerIsBetter => goal.target_value / goal.current_value * 100.0,
        GoalDirection::HigherIsBetter => goal.current_value / goal.target_value * 100.0,
    };

    percentage.clamp(0.0, 100.0)
}

/// Overwrite a goal's current value with one the caller already computed,
/// re-evaluating completion with the same rule `recompute_goal` uses.
pub fn apply_manual_progress(mut goal: Goal, new_value: f64) -> Goal {
    goal.current_value = new_value;
    goal.is_completed = meets_target(goal.goal_type, new_value, goal.target_value);
    goal
}

/// Completion rule. For pace goals a current value of 0 means "no
/// qualifying runs yet", never "infinitely fast", so 0 cannot complete.
pub fn meets_target(goal_type: GoalType, current: f64, target: f64) -> bool {
    match goal_type.direction() {
        GoalDirection::LowerIsBetter => current <= target && current > 0.0,
        GoalDirection::HigherIsBetter => current >= target,
    }
}

fn is_valid(activity: &Activity) -> bool {
    activity.distance > 0.0 && activity.duration > 0
}

fn aggregate_value(goal_type: GoalType, in_window: &[&Activity]) -> f64 {
    match goal_type {
        GoalType::TotalDistance => in_window
            .iter()
            .filter(|a| is_valid(a))
            .map(|a| a.distance)
            .sum(),

        // Every record in the window counts here, even ones unusable for
        // distance or pace math.
        GoalType::TotalActivities => in_window.len() as f64,

        GoalType::AveragePace => {
            let total_distance: f64 = in_window
                .iter()
                .filter(|a| is_valid(a))
                .map(|a| a.distance)
                .sum();
            let total_duration: f64 = in_window
                .iter()
                .filter(|a| is_valid(a))
                .map(|a| a.duration as f64)
                .sum();

            if total_distance > 0.0 {
                total_duration / 60.0 / total_distance
            } else {
                0.0
            }
        }

        GoalType::LongestRun => in_window
            .iter()
            .filter(|a| is_valid(a))
            .map(|a| a.distance)
            .fold(0.0, f64::max),

        GoalType::FastestPace => in_window
            .iter()
            .filter_map(|a| a.pace())
            .filter(|p| *p > 0.0)
            .fold(None, |best: Option<f64>, p| {
                Some(best.map_or(p, |b| b.min(p)))
            })
            .unwrap_or(0.0),
    }
}
