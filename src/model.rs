use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour ShiftTemplate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour un travailleur
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour ScheduledShift
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Gabarit de créneau : fenêtre horaire intra-journée, appliquée
/// certains jours de semaine (0=dimanche..6=samedi).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub id: TemplateId,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub days: Vec<u8>,
    pub active: bool,
}

impl ShiftTemplate {
    /// Crée un gabarit en validant nom et jours d'application.
    pub fn new(
        name: String,
        start_time: NaiveTime,
        end_time: NaiveTime,
        days: Vec<u8>,
        active: bool,
    ) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("template name cannot be empty".to_string());
        }
        if days.is_empty() {
            return Err("template must list at least one weekday".to_string());
        }
        if days.iter().any(|d| *d > 6) {
            return Err("weekday index must be within 0..=6".to_string());
        }
        Ok(Self {
            id: TemplateId::random(),
            name,
            start_time,
            end_time,
            days,
            active,
        })
    }

    /// Vrai si le gabarit s'applique au jour donné (0=dimanche..6=samedi).
    pub fn applies_on(&self, weekday: u8) -> bool {
        self.active && self.days.contains(&weekday)
    }
}

/// Affectation réelle d'un travailleur (instants UTC)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledShift {
    pub id: ShiftId,
    pub worker: WorkerId,
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ScheduledShift {
    /// Crée une affectation en validant que `end > start`.
    pub fn new(
        worker: WorkerId,
        date: NaiveDate,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, String> {
        if end <= start {
            return Err("end must be strictly after start".to_string());
        }
        Ok(Self {
            id: ShiftId::random(),
            worker,
            date,
            start,
            end,
        })
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Planning complet (gabarits + affectations)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Schedule {
    pub templates: Vec<ShiftTemplate>,
    pub shifts: Vec<ScheduledShift>,
}

impl Schedule {
    pub fn find_template_by_name<'a>(&'a self, name: &str) -> Option<&'a ShiftTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }
    pub fn shifts_on<'a>(&'a self, date: NaiveDate) -> Vec<&'a ScheduledShift> {
        self.shifts.iter().filter(|s| s.date == date).collect()
    }
}
