use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    /// A proposal on a project in one of these states counts as accepted.
    pub fn is_accepted_or_active(&self) -> bool {
        matches!(self, ProjectStatus::InProgress | ProjectStatus::Completed)
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(ProjectStatus::Open),
            "in_progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "cancelled" => Ok(ProjectStatus::Cancelled),
            other => Err(format!("unknown project status '{}'", other)),
        }
    }
}

/// One submitted proposal, joined to the status of the project it targets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProposalActivity {
    pub freelancer_id: i64,
    pub project_status: String,
    pub created_at: DateTime<Utc>,
}

impl ProposalActivity {
    pub fn project_status(&self) -> Option<ProjectStatus> {
        self.project_status.parse().ok()
    }
}
