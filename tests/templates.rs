#![forbid(unsafe_code)]
use chrono::{Duration, NaiveDate, NaiveTime};
use creneau::{
    instantiate_template, model::WorkerId, parse_hhmm, GapError, ShiftTemplate, TemplateStore,
};
use tempfile::tempdir;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn sample_template() -> ShiftTemplate {
    ShiftTemplate::new("Matin semaine".into(), t(9, 0), t(13, 0), vec![1, 2, 3, 4, 5], true)
        .unwrap()
}

#[test]
fn save_and_load_template_roundtrip() {
    let dir = tempdir().unwrap();
    let store = TemplateStore::new(dir.path());
    let template = sample_template();
    store.save(&template).unwrap();

    let loaded = store.load(template.id.as_str()).unwrap();
    assert_eq!(loaded, template);
}

#[test]
fn list_sorts_and_skips_unparsable_files() {
    let dir = tempdir().unwrap();
    let store = TemplateStore::new(dir.path());

    let mut b = sample_template();
    b.name = "B soir".into();
    let mut a = sample_template();
    a.name = "A matin".into();
    store.save(&b).unwrap();
    store.save(&a).unwrap();
    std::fs::write(dir.path().join("garbage.json"), b"not a template").unwrap();

    let infos = store.list().unwrap();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].template.name, "A matin");
    assert_eq!(infos[1].template.name, "B soir");
}

#[test]
fn export_and_load_single_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("matin.json");
    let template = sample_template();

    creneau::export_template_json(&path, &template).unwrap();
    let loaded = creneau::load_template_from_file(&path).unwrap();
    assert_eq!(loaded, template);
}

#[test]
fn invalid_weekday_is_rejected() {
    let err = ShiftTemplate::new("Mauvais".into(), t(9, 0), t(13, 0), vec![7], true).unwrap_err();
    assert!(err.contains("weekday"));

    let err = ShiftTemplate::new("Vide".into(), t(9, 0), t(13, 0), vec![], true).unwrap_err();
    assert!(err.contains("weekday"));
}

#[test]
fn malformed_time_string_fails_fast() {
    assert!(matches!(
        parse_hhmm("9h30").unwrap_err(),
        GapError::InvalidTimeFormat(_)
    ));
    assert!(matches!(
        parse_hhmm("25:00").unwrap_err(),
        GapError::InvalidTimeFormat(_)
    ));
    assert_eq!(parse_hhmm("09:30").unwrap(), t(9, 30));
}

#[test]
fn instantiate_builds_same_day_window() {
    let template = sample_template();
    let date = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();

    let shift = instantiate_template(&template, WorkerId::new("alice"), date).unwrap();
    assert_eq!(shift.date, date);
    assert_eq!(shift.duration_minutes(), 240);
    assert_eq!(shift.start.date_naive(), date);
    assert_eq!(shift.end.date_naive(), date);
}

#[test]
fn instantiate_rolls_cross_midnight_end_to_next_day() {
    let template =
        ShiftTemplate::new("Nuit".into(), t(22, 0), t(2, 0), vec![5, 6], true).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 12, 26).unwrap();

    let shift = instantiate_template(&template, WorkerId::new("bob"), date).unwrap();
    assert_eq!(shift.start.date_naive(), date);
    assert_eq!(shift.end.date_naive(), date + Duration::days(1));
    assert_eq!(shift.duration_minutes(), 240);
}
