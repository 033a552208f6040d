#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use creneau::{
    compute_open_shifts_with, io,
    model::{ScheduledShift, WorkerId},
    parse_hhmm, prepare_report,
    storage::{JsonStorage, Storage},
    template::instantiate_template,
    GapOptions, ShiftTemplate, TextReport, WeekRange,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de détection de créneaux non couverts (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de planning
    #[arg(long, global = true, default_value = "planning.json")]
    schedule: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un gabarit de créneau
    AddTemplate {
        #[arg(long)]
        name: String,
        /// "HH:MM"
        #[arg(long)]
        start: String,
        /// "HH:MM"
        #[arg(long)]
        end: String,
        /// liste "0,1,2" (0=dimanche..6=samedi)
        #[arg(long)]
        days: String,
        #[arg(long)]
        inactive: bool,
    },

    /// Ajouter une affectation, depuis un gabarit ou un horaire libre
    AddShift {
        #[arg(long)]
        worker: String,
        /// "YYYY-MM-DD"
        #[arg(long)]
        date: String,
        /// Nom du gabarit à matérialiser
        #[arg(long)]
        template: Option<String>,
        /// RFC3339 UTC (horaire libre)
        #[arg(long)]
        start: Option<String>,
        /// RFC3339 UTC (horaire libre)
        #[arg(long)]
        end: Option<String>,
    },

    /// Importer des gabarits depuis un CSV
    ImportTemplates {
        #[arg(long)]
        csv: String,
    },

    /// Importer des affectations depuis un CSV
    ImportShifts {
        #[arg(long)]
        csv: String,
    },

    /// Lister le planning et optionnellement exporter
    List {
        /// Limiter aux affectations d'un jour "YYYY-MM-DD"
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Calculer les créneaux non couverts sur une période
    OpenShifts {
        /// "YYYY-MM-DD"
        #[arg(long)]
        start: String,
        /// "YYYY-MM-DD"
        #[arg(long)]
        end: String,
        #[arg(long, default_value_t = 366)]
        max_days: u32,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Générer un rapport texte des créneaux non couverts
    Report {
        /// "YYYY-MM-DD"
        #[arg(long)]
        start: String,
        /// "YYYY-MM-DD"
        #[arg(long)]
        end: String,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid date (expected YYYY-MM-DD): {raw}"))
}

fn parse_day_list(raw: &str) -> Result<Vec<u8>> {
    let days = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u8>()
                .map_err(|_| anyhow::anyhow!("invalid weekday: {s}"))
        })
        .collect::<Result<Vec<u8>>>()?;
    if days.is_empty() {
        bail!("aucun jour fourni (attendu: liste \"0,1,2\")");
    }
    Ok(days)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.schedule)?;
    let mut schedule = storage.load_or_default();

    let code = match cli.cmd {
        Commands::AddTemplate {
            name,
            start,
            end,
            days,
            inactive,
        } => {
            let start = parse_hhmm(&start)?;
            let end = parse_hhmm(&end)?;
            let days = parse_day_list(&days)?;
            let template = ShiftTemplate::new(name, start, end, days, !inactive)
                .map_err(anyhow::Error::msg)?;
            println!("Template {} ({})", template.name, template.id.as_str());
            schedule.templates.push(template);
            storage.save(&schedule)?;
            0
        }
        Commands::AddShift {
            worker,
            date,
            template,
            start,
            end,
        } => {
            let date = parse_date(&date)?;
            let worker = WorkerId::new(worker);
            let shift = match (template, start, end) {
                (Some(name), None, None) => {
                    let template = schedule
                        .find_template_by_name(&name)
                        .ok_or_else(|| anyhow::anyhow!("gabarit inconnu: {}", name))?;
                    instantiate_template(template, worker, date)?
                }
                (None, Some(start), Some(end)) => {
                    let start = start.parse()?;
                    let end = end.parse()?;
                    ScheduledShift::new(worker, date, start, end).map_err(anyhow::Error::msg)?
                }
                _ => bail!("fournir soit --template, soit --start et --end"),
            };
            println!(
                "Shift {} | {} → {}",
                shift.id.as_str(),
                shift.start.to_rfc3339(),
                shift.end.to_rfc3339()
            );
            schedule.shifts.push(shift);
            storage.save(&schedule)?;
            0
        }
        Commands::ImportTemplates { csv } => {
            let templates = io::import_templates_csv(csv)?;
            println!("{} template(s) imported", templates.len());
            schedule.templates.extend(templates);
            storage.save(&schedule)?;
            0
        }
        Commands::ImportShifts { csv } => {
            let shifts = io::import_shifts_csv(csv)?;
            println!("{} shift(s) imported", shifts.len());
            schedule.shifts.extend(shifts);
            storage.save(&schedule)?;
            0
        }
        Commands::List { date, out_json } => {
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            for t in &schedule.templates {
                let days: Vec<String> = t.days.iter().map(|d| d.to_string()).collect();
                println!(
                    "template {} | {} | {} - {} | jours {} | {}",
                    t.id.as_str(),
                    t.name,
                    t.start_time.format("%H:%M"),
                    t.end_time.format("%H:%M"),
                    days.join(","),
                    if t.active { "actif" } else { "inactif" }
                );
            }
            let shifts: Vec<&ScheduledShift> = match date {
                Some(raw) => schedule.shifts_on(parse_date(&raw)?),
                None => schedule.shifts.iter().collect(),
            };
            for s in shifts {
                println!(
                    "shift {} | {} | {} | {} → {}",
                    s.id.as_str(),
                    s.worker.as_str(),
                    s.date,
                    s.start.to_rfc3339(),
                    s.end.to_rfc3339()
                );
            }
            0
        }
        Commands::OpenShifts {
            start,
            end,
            max_days,
            out_json,
            out_csv,
        } => {
            let range = WeekRange::new(parse_date(&start)?, parse_date(&end)?)?;
            let opts = GapOptions { max_days };
            let days =
                compute_open_shifts_with(&schedule.templates, &schedule.shifts, range, opts)?;
            if let Some(path) = out_json {
                io::export_open_shifts_json(path, &days)?;
            }
            if let Some(path) = out_csv {
                io::export_open_shifts_csv(path, &days)?;
            }
            if days.is_empty() {
                println!("OK: aucun créneau non couvert");
                0
            } else {
                let total: usize = days.iter().map(|d| d.items.len()).sum();
                for day in &days {
                    for item in &day.items {
                        println!(
                            "{} | {} | {} → {} | {} min",
                            day.date,
                            item.template_name,
                            item.start.to_rfc3339(),
                            item.end.to_rfc3339(),
                            item.minutes
                        );
                    }
                }
                eprintln!("Found {total} open slot(s)");
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Report { start, end, out } => {
            let range = WeekRange::new(parse_date(&start)?, parse_date(&end)?)?;
            let days = compute_open_shifts_with(
                &schedule.templates,
                &schedule.shifts,
                range,
                GapOptions::default(),
            )?;
            let renderer = TextReport;
            let report = prepare_report(&days, Utc::now(), &renderer);
            std::fs::write(&out, &report.content)?;
            println!(
                "Report written to {} ({} slot(s), {} min open)",
                out, report.total_items, report.total_minutes
            );
            0
        }
    };

    std::process::exit(code);
}
