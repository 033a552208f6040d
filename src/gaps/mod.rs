mod merge;
mod types;
mod util;

pub use types::{GapError, GapOptions, OpenShiftDay, OpenShiftItem, WeekRange};
pub use util::parse_hhmm;

use crate::model::{ScheduledShift, ShiftTemplate};
use chrono::NaiveDate;
use merge::Interval;

/// Calcule, jour par jour sur la période, les portions de fenêtres de
/// gabarits qu'aucune affectation ne couvre. Les jours sans vacance
/// n'apparaissent pas dans le résultat.
pub fn compute_open_shifts(
    templates: &[ShiftTemplate],
    shifts: &[ScheduledShift],
    range: WeekRange,
) -> Result<Vec<OpenShiftDay>, GapError> {
    compute_open_shifts_with(templates, shifts, range, GapOptions::default())
}

/// Variante avec plafond d'itération explicite.
pub fn compute_open_shifts_with(
    templates: &[ShiftTemplate],
    shifts: &[ScheduledShift],
    range: WeekRange,
    opts: GapOptions,
) -> Result<Vec<OpenShiftDay>, GapError> {
    let days = range.num_days();
    if days > i64::from(opts.max_days) {
        return Err(GapError::RangeTooLarge {
            days,
            max: opts.max_days,
        });
    }

    let mut out = Vec::new();
    let mut current = range.start;
    while current <= range.end {
        let mut items = day_items(templates, shifts, current);
        if !items.is_empty() {
            items.sort_by_key(|item| item.start);
            out.push(OpenShiftDay {
                date: current,
                items,
            });
        }
        current = current.succ_opt().ok_or(GapError::DateOverflow)?;
    }
    Ok(out)
}

fn day_items(
    templates: &[ShiftTemplate],
    shifts: &[ScheduledShift],
    day: NaiveDate,
) -> Vec<OpenShiftItem> {
    let weekday = util::weekday_index(day);
    let mut items = Vec::new();

    for template in templates {
        if !template.applies_on(weekday) {
            continue;
        }
        let win_start = util::minute_of_day(template.start_time);
        let win_end = util::minute_of_day(template.end_time);
        // fenêtres à cheval sur minuit : non supportées, ignorées
        if win_end < win_start {
            continue;
        }

        let covering = covering_intervals(shifts, day, win_start, win_end);
        let merged = merge::merge_intervals(covering);

        for gap in merge::uncovered(win_start, win_end, &merged) {
            items.push(OpenShiftItem {
                template_id: template.id.clone(),
                template_name: template.name.clone(),
                template_start: util::format_hhmm(template.start_time),
                template_end: util::format_hhmm(template.end_time),
                start: util::at_minute(day, gap.start),
                end: util::at_minute(day, gap.end),
                minutes: i64::from(gap.end - gap.start),
                covered_by: Vec::new(),
            });
        }
    }

    items
}

/// Intersections des affectations avec la fenêtre du gabarit reconstruite
/// sur `day`, ramenées en minutes depuis minuit et bornées à la fenêtre.
/// Pas de filtre par date : seuls les instants absolus décident.
fn covering_intervals(
    shifts: &[ScheduledShift],
    day: NaiveDate,
    win_start: u32,
    win_end: u32,
) -> Vec<Interval> {
    let window_start = util::at_minute(day, win_start);
    let window_end = util::at_minute(day, win_end);
    let midnight = util::at_minute(day, 0);

    let mut covering = Vec::new();
    for shift in shifts {
        if !util::overlaps(shift.start, shift.end, window_start, window_end) {
            continue;
        }
        let clamp_start = shift.start.max(window_start);
        let clamp_end = shift.end.min(window_end);
        let start_min = (clamp_start - midnight).num_minutes() as u32;
        let end_min = (clamp_end - midnight).num_minutes() as u32;
        if end_min > start_min {
            covering.push(Interval {
                start: start_min,
                end: end_min,
            });
        }
    }
    covering
}
