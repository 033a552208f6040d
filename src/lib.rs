#![forbid(unsafe_code)]
//! Creneau — détection des créneaux non couverts d'un planning d'équipe (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Gabarits horaires par jour de semaine.
//! - Fusion des couvertures, calcul des vacances de planning.
//! - Tout en UTC ; parsing RFC3339 ; affichage local en dehors de la lib.

pub mod gaps;
pub mod io;
pub mod model;
pub mod report;
pub mod storage;
pub mod template;

pub use gaps::{
    compute_open_shifts, compute_open_shifts_with, parse_hhmm, GapError, GapOptions, OpenShiftDay,
    OpenShiftItem, WeekRange,
};
pub use model::{Schedule, ScheduledShift, ShiftId, ShiftTemplate, TemplateId, WorkerId};
pub use report::{prepare_report, Report, ReportRenderer, TextReport};
pub use storage::{JsonStorage, Storage};
pub use template::{
    export_template_json, instantiate_template, load_template_from_file, validate_template,
    TemplateInfo, TemplateStore,
};
