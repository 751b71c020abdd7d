//! Analysis data model.
//!
//! Analyses carry no owner of their own; access derives from the parent
//! project.

use chrono::{DateTime, Utc};

use crate::domain::ProjectId;
use crate::domain::values::{define_record_id, define_record_name};

define_record_id!(
    /// Store-assigned analysis identifier.
    AnalysisId
);

define_record_name!(
    /// Analysis name; non-blank, at most 128 characters.
    AnalysisName,
    max = 128
);

/// Stored analysis record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub id: AnalysisId,
    pub name: AnalysisName,
    pub project_id: ProjectId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnalysis {
    pub name: AnalysisName,
    pub project_id: ProjectId,
}

/// Partial update for an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisChanges {
    pub name: Option<AnalysisName>,
}
