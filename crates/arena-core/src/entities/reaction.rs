//! Reaction entity and the reconciliation state machine
//!
//! A reaction is one user's opinion on one post. The invariant is at most one
//! reaction per (post, user) pair; submitting a reaction toggles, flips, or
//! creates it depending on what is already stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// The two supported reaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// The opposite kind
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }

    /// Stable string form used in the database and API
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = crate::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(crate::error::DomainError::InvalidReactionKind(
                other.to_string(),
            )),
        }
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub post_id: Snowflake,
    pub user_id: Snowflake,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(post_id: Snowflake, user_id: Snowflake, kind: ReactionKind) -> Self {
        Self {
            post_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// What the reconciler reports back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionOutcome {
    Created,
    Updated,
    Removed,
}

/// The single write the reconciler must perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionDecision {
    /// No reaction stored: insert one with the requested kind
    Insert(ReactionKind),
    /// Same kind resubmitted: delete the stored reaction (toggle off)
    Remove,
    /// Opposite kind submitted: update the stored kind
    Flip(ReactionKind),
}

impl ReactionDecision {
    /// Decide the write for a requested kind given the currently stored kind.
    ///
    /// Total over all inputs:
    /// - nothing stored: insert, outcome `Created`
    /// - stored kind equals the request: remove, outcome `Removed`
    /// - stored kind differs: flip, outcome `Updated`
    pub fn reconcile(stored: Option<ReactionKind>, requested: ReactionKind) -> Self {
        match stored {
            None => Self::Insert(requested),
            Some(kind) if kind == requested => Self::Remove,
            Some(_) => Self::Flip(requested),
        }
    }

    /// The outcome this decision reports once its write succeeds
    pub fn outcome(&self) -> ReactionOutcome {
        match self {
            Self::Insert(_) => ReactionOutcome::Created,
            Self::Remove => ReactionOutcome::Removed,
            Self::Flip(_) => ReactionOutcome::Updated,
        }
    }

    /// The kind stored after the write, if any
    pub fn resulting_kind(&self) -> Option<ReactionKind> {
        match self {
            Self::Insert(kind) | Self::Flip(kind) => Some(*kind),
            Self::Remove => None,
        }
    }
}

/// Aggregated reaction tally for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReactionCounts {
    pub likes: i64,
    pub dislikes: i64,
}
