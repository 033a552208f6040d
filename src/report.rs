use crate::gaps::OpenShiftDay;
use chrono::{DateTime, Utc};

/// Rapport généré sur une liste de jours à trous.
#[derive(Debug, Clone)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub total_items: usize,
    pub total_minutes: i64,
    pub content: String,
}

/// Permet de customiser le rendu du rapport (texte, mail, etc.).
pub trait ReportRenderer {
    fn render_day(&self, day: &OpenShiftDay) -> String;
}

/// Gabarit texte simple destiné à un futur mail/affichage.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render_day(&self, day: &OpenShiftDay) -> String {
        let mut out = format!(
            "{date} : {count} créneau(x) non couvert(s)\n",
            date = day.date,
            count = day.items.len()
        );
        for item in &day.items {
            out.push_str(&format!(
                "  {name} ({tpl_start} - {tpl_end}) : {start} -> {end}, {minutes} min\n",
                name = item.template_name,
                tpl_start = item.template_start,
                tpl_end = item.template_end,
                start = item.start.to_rfc3339(),
                end = item.end.to_rfc3339(),
                minutes = item.minutes
            ));
        }
        out
    }
}

/// Prépare un rapport complet sur les jours calculés.
pub fn prepare_report(
    days: &[OpenShiftDay],
    now: DateTime<Utc>,
    renderer: &dyn ReportRenderer,
) -> Report {
    let total_items = days.iter().map(|d| d.items.len()).sum();
    let total_minutes = days
        .iter()
        .flat_map(|d| d.items.iter())
        .map(|i| i.minutes)
        .sum();

    let mut content = format!("Rapport généré le {}\n\n", now.to_rfc3339());
    if days.is_empty() {
        content.push_str("Aucun créneau non couvert : tous les gabarits sont couverts.\n");
    } else {
        for day in days {
            content.push_str(&renderer.render_day(day));
        }
    }

    Report {
        generated_at: now,
        total_items,
        total_minutes,
        content,
    }
}
