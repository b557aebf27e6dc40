//! Persisted event and outcome records. The core never writes these
//! anywhere itself — a collaborator drives `serde_json` over them.

use serde::{Deserialize, Serialize};

use crate::label_update::LabelUpdateKind;

/// One entry in the `(time, event)` stream a collaborator logs per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunEvent {
    pub time: f64,
    pub kind: EventKind,
}

/// The `{committed, terminated-clear, terminated-timeout, fatal-error}`
/// alphabet, tagged for `serde_json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum EventKind {
    /// An atomic transition was committed. `ambiguous` mirrors
    /// `LabelUpdate::ambiguous`: the one catalogue entry known to overlap
    /// between two handlers, surfaced here rather than logged from the core.
    Committed {
        case: LabelUpdateKind,
        ambiguous: bool,
        has_intruder: bool,
    },
    TerminatedClear,
    TerminatedTimeout { intruder_present: bool },
    FatalError { error: String },
}

/// The single persisted line per run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum RunOutcome {
    Evacuated { time: f64 },
    TimedOut { intruder_present: bool },
    Fatal { error: String },
}
