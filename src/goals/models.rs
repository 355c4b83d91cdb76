use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// What a goal measures. Stored as its variant name in the `goal_type`
/// TEXT column and transmitted the same way over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum GoalType {
    TotalDistance,
    TotalActivities,
    AveragePace,
    LongestRun,
    FastestPace,
}

/// Whether a bigger or a smaller current value means progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalDirection {
    HigherIsBetter,
    LowerIsBetter,
}

impl GoalType {
    /// Pace goals are won by going down; everything else by going up.
    /// Completion and percentage both dispatch on this.
    pub fn direction(self) -> GoalDirection {
        match self {
            GoalType::AveragePace | GoalType::FastestPace => GoalDirection::LowerIsBetter,
            GoalType::TotalDistance | GoalType::TotalActivities | GoalType::LongestRun => {
                GoalDirection::HigherIsBetter
            }
        }
    }
}

/// Display label for the kind of window a goal covers. The evaluation
/// window itself is always `[start_date, end_date]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum GoalTimeframe {
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_value: f64,
    pub current_value: f64,
    pub goal_type: GoalType,
    pub timeframe: GoalTimeframe,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_completed: bool,
    pub user_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_value: f64,
    pub current_value: f64,
    pub goal_type: GoalType,
    pub timeframe: GoalTimeframe,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_completed: bool,
    pub progress_percentage: f64,
    pub user_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Goal> for GoalDto {
    fn from(goal: Goal) -> Self {
        GoalDto {
            progress_percentage: super::utils::progress_percentage(&goal),
            id: goal.id,
            name: goal.name,
            description: goal.description,
            target_value: goal.target_value,
            current_value: goal.current_value,
            goal_type: goal.goal_type,
            timeframe: goal.timeframe,
            start_date: goal.start_date,
            end_date: goal.end_date,
            is_completed: goal.is_completed,
            user_id: goal.user_id,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewGoal {
    pub name: String,
    pub description: Option<String>,
    pub target_value: f64,
    pub goal_type: GoalType,
    pub timeframe: GoalTimeframe,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateGoal {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_value: Option<f64>,
    pub goal_type: Option<GoalType>,
    pub timeframe: Option<GoalTimeframe>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub current_value: Option<f64>,
    pub is_completed: Option<bool>,
}
