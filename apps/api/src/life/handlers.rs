//! Axum route handlers for the life timeline.

use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::life::classify::{CurrentAge, LifeTimeline, TimelineInput, WeekUnit};
use crate::life::grid::WeekStart;
use crate::life::stages::{default_stages, LifeStage, StagePatch, StageTable};
use crate::life::MAX_LIFESPAN_YEARS;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRequest {
    pub birth_date: Option<NaiveDate>,
    pub expected_lifespan_years: Option<u32>,
    pub stages: Option<Vec<LifeStage>>,
    /// Defaults to today's UTC date.
    pub current_date: Option<NaiveDate>,
    pub week_start: Option<WeekStart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub birth_date: NaiveDate,
    pub expected_lifespan_years: u32,
    pub total_weeks: u32,
    pub current_age: CurrentAge,
    pub next_birthday: Option<NaiveDate>,
    pub next_birthday_week: Option<NaiveDate>,
    pub axis_markers: Vec<u32>,
    pub bands: Vec<LifeStage>,
    pub weeks: Vec<WeekUnit>,
}

/// `setup_required` is not an error: the client should prompt for a birth date.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TimelineResponse {
    SetupRequired,
    Ready(TimelineView),
}

/// One edit to a client-held stage table.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StageEdit {
    Add,
    Edit { index: usize, patch: StagePatch },
    Delete { index: usize },
}

#[derive(Debug, Deserialize)]
pub struct StageEditRequest {
    pub stages: Vec<LifeStage>,
    pub edit: StageEdit,
}

/// Applies `edit` to `table`. No ordering checks: the table is resolved at read time.
pub fn apply_stage_edit(table: &mut StageTable, edit: StageEdit) -> Result<(), AppError> {
    match edit {
        StageEdit::Add => {
            table.add_stage();
        }
        StageEdit::Edit { index, patch } => {
            if !table.edit_stage(index, patch) {
                return Err(AppError::NotFound(format!("Stage {index} not found")));
            }
        }
        StageEdit::Delete { index } => {
            table
                .delete_stage(index)
                .ok_or_else(|| AppError::NotFound(format!("Stage {index} not found")))?;
        }
    }
    Ok(())
}

fn validate_lifespan(years: u32) -> Result<u32, AppError> {
    if years == 0 || years > MAX_LIFESPAN_YEARS {
        return Err(AppError::Validation(format!(
            "expectedLifespanYears must be between 1 and {MAX_LIFESPAN_YEARS}"
        )));
    }
    Ok(years)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/life/stages/default
pub async fn handle_default_stages() -> Json<StageTable> {
    Json(default_stages())
}

/// POST /api/life/stages
///
/// The table lives with the client; this applies one edit and returns the result.
pub async fn handle_edit_stages(
    Json(req): Json<StageEditRequest>,
) -> Result<Json<StageTable>, AppError> {
    let mut table = StageTable::from(req.stages);
    apply_stage_edit(&mut table, req.edit)?;
    debug!("Stage edit applied, {} stages", table.len());
    Ok(Json(table))
}

/// POST /api/life/timeline
///
/// Recomputes the whole timeline from the request. Nothing is stored.
pub async fn handle_timeline(
    State(state): State<AppState>,
    Json(req): Json<TimelineRequest>,
) -> Result<Json<TimelineResponse>, AppError> {
    let defaults = &state.config.life;
    let lifespan = validate_lifespan(
        req.expected_lifespan_years
            .unwrap_or(defaults.expected_lifespan_years),
    )?;
    let stages = req
        .stages
        .map(StageTable::from)
        .unwrap_or_else(default_stages);
    if stages.is_empty() {
        debug!("Empty stage table, every week gets the neutral color");
    }

    let input = TimelineInput {
        birth_date: req.birth_date,
        expected_lifespan_years: lifespan,
        stages: stages.stages(),
        current_date: req
            .current_date
            .unwrap_or_else(|| Utc::now().date_naive()),
        week_start: req.week_start.unwrap_or(defaults.week_start),
    };

    let Some(timeline) = LifeTimeline::build(&input) else {
        debug!("Timeline requested without a birth date");
        return Ok(Json(TimelineResponse::SetupRequired));
    };
    if !timeline.fits_calendar() {
        return Err(AppError::Validation(format!(
            "birthDate is too late for a {lifespan}-year timeline"
        )));
    }

    debug!(
        "Timeline built: {} weeks, {} bands",
        timeline.total_weeks(),
        timeline.bands().bands().len()
    );

    Ok(Json(TimelineResponse::Ready(TimelineView {
        birth_date: timeline.birth_date(),
        expected_lifespan_years: lifespan,
        total_weeks: timeline.total_weeks(),
        current_age: timeline.current_age(),
        next_birthday: timeline.next_birthday(),
        next_birthday_week: timeline.next_birthday_week(),
        axis_markers: timeline.axis_markers(),
        bands: timeline.bands().bands().to_vec(),
        weeks: timeline.units().collect(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_lifespan_bounds() {
        assert!(validate_lifespan(0).is_err());
        assert!(validate_lifespan(151).is_err());
        assert_eq!(validate_lifespan(1).unwrap(), 1);
        assert_eq!(validate_lifespan(150).unwrap(), 150);
    }

    #[test]
    fn test_stage_edits_deserialize_and_apply() {
        let mut table = default_stages();

        let add: StageEdit = serde_json::from_str(r#"{"type": "add"}"#).unwrap();
        apply_stage_edit(&mut table, add).unwrap();
        assert_eq!(table.len(), 7);
        assert_eq!(table.stages()[6].end_age_years, 110);

        let edit: StageEdit = serde_json::from_str(
            r#"{"type": "edit", "index": 6, "patch": {"name": "Bonus", "endAgeYears": 90}}"#,
        )
        .unwrap();
        apply_stage_edit(&mut table, edit).unwrap();
        assert_eq!(table.stages()[6].name, "Bonus");

        let delete: StageEdit = serde_json::from_str(r#"{"type": "delete", "index": 0}"#).unwrap();
        apply_stage_edit(&mut table, delete).unwrap();
        assert_eq!(table.stages()[0].name, "Teenage");
    }

    #[test]
    fn test_stage_edit_out_of_range_is_not_found() {
        let mut table = StageTable::default();
        assert!(matches!(
            apply_stage_edit(&mut table, StageEdit::Delete { index: 0 }),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            apply_stage_edit(
                &mut table,
                StageEdit::Edit {
                    index: 3,
                    patch: StagePatch::default()
                }
            ),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = r#"{
            "birthDate": "1990-01-01",
            "expectedLifespanYears": 80,
            "stages": [{"name": "All", "color": "bg-red-500", "endAgeYears": 80}],
            "currentDate": "2024-06-01",
            "weekStart": "monday"
        }"#;
        let req: TimelineRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.birth_date, NaiveDate::from_ymd_opt(1990, 1, 1));
        assert_eq!(req.expected_lifespan_years, Some(80));
        assert_eq!(req.week_start, Some(WeekStart::Monday));
        assert_eq!(req.stages.unwrap().len(), 1);
    }

    #[test]
    fn test_setup_required_serializes_as_status() {
        let json = serde_json::to_value(TimelineResponse::SetupRequired).unwrap();
        assert_eq!(json, serde_json::json!({"status": "setup_required"}));
    }
}
