use crate::model::{ScheduledShift, ShiftTemplate, WorkerId};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Contrôles de cohérence d'un gabarit avant persistance.
/// Une fenêtre à cheval sur minuit (`end < start`) est acceptée ici :
/// le calcul de vacances l'ignore mais l'instanciation la gère.
pub fn validate_template(template: &ShiftTemplate) -> Result<()> {
    if template.id.as_str().trim().is_empty() {
        bail!("template id cannot be empty");
    }
    if template.name.trim().is_empty() {
        bail!("template name cannot be empty");
    }
    if template.days.is_empty() {
        bail!("template must list at least one weekday");
    }
    if let Some(day) = template.days.iter().find(|d| **d > 6) {
        bail!("weekday index out of range (0=dimanche..6=samedi): {day}");
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct TemplateInfo {
    pub template: ShiftTemplate,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

/// Bibliothèque simple de gabarits persistés sur disque (un JSON par gabarit).
#[derive(Debug, Clone)]
pub struct TemplateStore {
    base_dir: PathBuf,
}

impl TemplateStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            base_dir: dir.as_ref().to_path_buf(),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("creating template directory {}", self.base_dir.display()))
    }

    pub fn save(&self, template: &ShiftTemplate) -> Result<PathBuf> {
        validate_template(template)?;
        self.ensure_dir()?;
        let path = self.base_dir.join(format!("{}.json", template.id.as_str()));
        let json = serde_json::to_string_pretty(template)?;
        fs::write(&path, json).with_context(|| format!("writing template {}", path.display()))?;
        Ok(path)
    }

    pub fn load(&self, id: &str) -> Result<ShiftTemplate> {
        let path = self.base_dir.join(format!("{id}.json"));
        let data =
            fs::read(&path).with_context(|| format!("reading template {}", path.display()))?;
        let template: ShiftTemplate = serde_json::from_slice(&data)
            .with_context(|| format!("parsing template {}", path.display()))?;
        validate_template(&template)?;
        Ok(template)
    }

    pub fn list(&self) -> Result<Vec<TemplateInfo>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }
        let mut infos = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let data = fs::read(&path)?;
            let template: ShiftTemplate = match serde_json::from_slice(&data) {
                Ok(t) => t,
                Err(err) => {
                    eprintln!(
                        "Warning: could not parse template {}: {err}",
                        path.display()
                    );
                    continue;
                }
            };
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .ok()
                .map(DateTime::<Utc>::from);
            infos.push(TemplateInfo {
                template,
                path,
                modified,
            });
        }
        infos.sort_by(|a, b| a.template.name.cmp(&b.template.name));
        Ok(infos)
    }
}

/// Matérialise un gabarit en affectation concrète pour un travailleur
/// et un jour donnés.
pub fn instantiate_template(
    template: &ShiftTemplate,
    worker: WorkerId,
    date: NaiveDate,
) -> Result<ScheduledShift> {
    let (start, end) = build_datetimes(date, template);
    ScheduledShift::new(worker, date, start, end).map_err(anyhow::Error::msg)
}

pub fn export_template_json<P: AsRef<Path>>(path: P, template: &ShiftTemplate) -> Result<()> {
    let json = serde_json::to_string_pretty(template)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_template_from_file<P: AsRef<Path>>(path: P) -> Result<ShiftTemplate> {
    let data = fs::read(&path)?;
    let template: ShiftTemplate = serde_json::from_slice(&data)?;
    validate_template(&template)?;
    Ok(template)
}

fn build_datetimes(date: NaiveDate, template: &ShiftTemplate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start_dt = Utc.from_utc_datetime(&NaiveDateTime::new(date, template.start_time));
    let mut end_date = date;
    if template.end_time <= template.start_time {
        end_date = end_date.succ_opt().unwrap_or(date);
    }
    let end_dt = Utc.from_utc_datetime(&NaiveDateTime::new(end_date, template.end_time));
    (start_dt, end_dt)
}
