use crate::model::{TemplateId, WorkerId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options de calcul
#[derive(Debug, Clone, Copy)]
pub struct GapOptions {
    /// Nombre maximal de jours parcourus avant échec explicite.
    pub max_days: u32,
}

impl Default for GapOptions {
    fn default() -> Self {
        Self { max_days: 366 }
    }
}

#[derive(Error, Debug)]
pub enum GapError {
    #[error("invalid time format (expected HH:MM): {0}")]
    InvalidTimeFormat(String),
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("range spans {days} days, more than the allowed {max}")]
    RangeTooLarge { days: i64, max: u32 },
    #[error("date overflow while iterating the range")]
    DateOverflow,
}

/// Période calendaire inclusive [start, end].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    /// Construit une période en refusant `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, GapError> {
        if start > end {
            return Err(GapError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Nombre de jours couverts, bornes incluses.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Portion non couverte d'une fenêtre de gabarit, pour un jour donné.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenShiftItem {
    pub template_id: TemplateId,
    pub template_name: String,
    /// Bornes du gabarit, "HH:MM".
    pub template_start: String,
    pub template_end: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub minutes: i64,
    /// Réservé pour une future annotation de couverture partielle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub covered_by: Vec<WorkerId>,
}

/// Jour avec au moins un créneau non couvert ; les jours pleins
/// sont absents du résultat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenShiftDay {
    pub date: NaiveDate,
    pub items: Vec<OpenShiftItem>,
}
