use chipflip_engine::GameOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final result of a match, as written by `--result-json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ResultRecord {
    pub(crate) finished_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) outcome: GameOutcome,
}

impl ResultRecord {
    pub(crate) fn new(outcome: GameOutcome) -> Self {
        Self {
            finished_at: Utc::now(),
            outcome,
        }
    }
}
