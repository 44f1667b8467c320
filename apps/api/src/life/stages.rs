//! Stage table: user-edited age bands and their read-time resolution.
//!
//! The raw table is edited freely (no ordering checks on add/edit/delete).
//! Classification never reads it directly: `resolve_bands` produces a sorted,
//! lifespan-clamped copy once per recomputation.

use serde::{Deserialize, Serialize};

/// Color used when the table is empty and no band can answer.
pub const NEUTRAL_COLOR: &str = "bg-gray-500";

/// Color given to stages created through `StageTable::add_stage`.
pub const NEW_STAGE_COLOR: &str = "bg-gray-400";

pub const NEW_STAGE_NAME: &str = "New Stage";

/// Gap in years between the last stage and one appended after it.
const NEW_STAGE_SPAN_YEARS: u32 = 10;

/// One named age band. `end_age_years` is the inclusive upper age of the band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeStage {
    pub name: String,
    /// Display token, e.g. a Tailwind class such as `bg-sky-500`.
    pub color: String,
    pub end_age_years: u32,
}

impl LifeStage {
    pub fn new(name: impl Into<String>, color: impl Into<String>, end_age_years: u32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            end_age_years,
        }
    }
}

/// Partial update applied by `StageTable::edit_stage`. `None` keeps the field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagePatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub end_age_years: Option<u32>,
}

/// The stage table a user edits during a session. Order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageTable {
    stages: Vec<LifeStage>,
}

impl StageTable {
    pub fn new(stages: Vec<LifeStage>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[LifeStage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Appends "New Stage" ending ten years after the current last stage
    /// (or at 10 for an empty table). No re-sort.
    pub fn add_stage(&mut self) -> &LifeStage {
        let end_age_years = self
            .stages
            .last()
            .map_or(0, |s| s.end_age_years)
            .saturating_add(NEW_STAGE_SPAN_YEARS);
        self.stages
            .push(LifeStage::new(NEW_STAGE_NAME, NEW_STAGE_COLOR, end_age_years));
        &self.stages[self.stages.len() - 1]
    }

    /// Applies `patch` to the stage at `index`. Returns `false` if there is no
    /// such stage. Ordering against neighbours is not checked.
    pub fn edit_stage(&mut self, index: usize, patch: StagePatch) -> bool {
        let Some(stage) = self.stages.get_mut(index) else {
            return false;
        };
        if let Some(name) = patch.name {
            stage.name = name;
        }
        if let Some(color) = patch.color {
            stage.color = color;
        }
        if let Some(end) = patch.end_age_years {
            stage.end_age_years = end;
        }
        true
    }

    /// Removes and returns the stage at `index`, if any.
    pub fn delete_stage(&mut self, index: usize) -> Option<LifeStage> {
        (index < self.stages.len()).then(|| self.stages.remove(index))
    }
}

impl From<Vec<LifeStage>> for StageTable {
    fn from(stages: Vec<LifeStage>) -> Self {
        Self::new(stages)
    }
}

/// Stage table shipped with the service.
pub fn default_stages() -> StageTable {
    StageTable::new(vec![
        LifeStage::new("Childhood", "bg-sky-500", 12),
        LifeStage::new("Teenage", "bg-indigo-500", 19),
        LifeStage::new("Early Adulthood", "bg-emerald-500", 35),
        LifeStage::new("Midlife", "bg-amber-500", 55),
        LifeStage::new("Late Adulthood", "bg-rose-500", 75),
        // Clamped to the configured lifespan at resolution time.
        LifeStage::new("Senior", "bg-purple-500", 100),
    ])
}

/// Bands in ascending order of their stored end age, with the last band's end
/// replaced by the lifespan. An earlier band may therefore end past the
/// lifespan, e.g. `[90, 100]` at 85 years resolves to ends `[90, 85]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBands {
    bands: Vec<LifeStage>,
}

impl ResolvedBands {
    pub fn bands(&self) -> &[LifeStage] {
        &self.bands
    }

    /// Color of the first band whose end age is at or above `age_in_years`.
    /// Falls back to the last band, then to `NEUTRAL_COLOR`.
    pub fn color_for_age(&self, age_in_years: f64) -> &str {
        self.bands
            .iter()
            .find(|b| age_in_years <= f64::from(b.end_age_years))
            .or_else(|| self.bands.last())
            .map_or(NEUTRAL_COLOR, |b| b.color.as_str())
    }
}

/// Sorts a copy of `raw` by end age and forces the last band to end at
/// `expected_lifespan_years`. `raw` is left untouched.
///
/// The sort is stable, so stages sharing an end age keep their table order and
/// the earlier one wins during lookup.
pub fn resolve_bands(raw: &[LifeStage], expected_lifespan_years: u32) -> ResolvedBands {
    let mut bands = raw.to_vec();
    bands.sort_by_key(|s| s.end_age_years);
    if let Some(last) = bands.last_mut() {
        last.end_age_years = expected_lifespan_years;
    }
    ResolvedBands { bands }
}
