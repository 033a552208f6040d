use crate::gaps::{parse_hhmm, OpenShiftDay};
use crate::model::{Schedule, ScheduledShift, ShiftTemplate, WorkerId};
use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de gabarits depuis CSV: header `name,start,end,days[,active]`
/// (heures "HH:MM", jours "0;1;2" avec 0=dimanche).
pub fn import_templates_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ShiftTemplate>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let start_raw = rec.get(1).context("missing start")?.trim();
        let end_raw = rec.get(2).context("missing end")?.trim();
        let days_raw = rec.get(3).context("missing days")?.trim();
        if name.is_empty() {
            bail!("invalid template row (empty name)");
        }
        let start = parse_hhmm(start_raw)
            .with_context(|| format!("invalid start time for template {name}"))?;
        let end =
            parse_hhmm(end_raw).with_context(|| format!("invalid end time for template {name}"))?;
        let days = parse_days(days_raw)
            .with_context(|| format!("invalid days value for template {name}"))?;
        let mut template = ShiftTemplate::new(name.to_string(), start, end, days, true)
            .map_err(anyhow::Error::msg)?;
        if let Some(flag) = rec.get(4) {
            let flag = flag.trim();
            if !flag.is_empty() {
                template.active = parse_bool(flag)
                    .with_context(|| format!("invalid active value for template {name}"))?;
            }
        }
        out.push(template);
    }
    Ok(out)
}

/// Import d'affectations: header `worker,date,start,end`
/// (date "YYYY-MM-DD", instants RFC3339 UTC).
pub fn import_shifts_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ScheduledShift>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let worker = rec.get(0).context("missing worker")?.trim();
        let date = rec.get(1).context("missing date")?.trim();
        let start = rec.get(2).context("missing start")?.trim();
        let end = rec.get(3).context("missing end")?.trim();
        if worker.is_empty() {
            bail!("invalid shift row (empty worker)");
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("invalid date: {date}"))?;
        let start: DateTime<Utc> = start.parse().context("start RFC3339")?;
        let end: DateTime<Utc> = end.parse().context("end RFC3339")?;
        let shift = ScheduledShift::new(WorkerId::new(worker), date, start, end)
            .map_err(anyhow::Error::msg)?;
        out.push(shift);
    }
    Ok(out)
}

fn parse_days(raw: &str) -> anyhow::Result<Vec<u8>> {
    let days = raw
        .split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| {
            chunk
                .trim()
                .parse::<u8>()
                .with_context(|| format!("invalid weekday: {chunk}"))
        })
        .collect::<anyhow::Result<Vec<u8>>>()?;
    if days.is_empty() {
        bail!("expected at least one weekday (0=dimanche..6=samedi)");
    }
    Ok(days)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export JSON des créneaux non couverts
pub fn export_open_shifts_json<P: AsRef<Path>>(
    path: P,
    days: &[OpenShiftDay],
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(days)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des créneaux non couverts: header `date,template,start,end,minutes`
pub fn export_open_shifts_csv<P: AsRef<Path>>(path: P, days: &[OpenShiftDay]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "template", "start", "end", "minutes"])?;
    let mut minutes_buf = itoa::Buffer::new();
    for day in days {
        for item in &day.items {
            let date = day.date.to_string();
            let start = item.start.to_rfc3339();
            let end = item.end.to_rfc3339();
            w.write_record([
                date.as_str(),
                item.template_name.as_str(),
                start.as_str(),
                end.as_str(),
                minutes_buf.format(item.minutes),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
