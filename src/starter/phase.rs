//! Lifecycle phases and the policy for blocking starters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One step of a starter's lifecycle, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Init,
    Setup,
    Start,
    StartBlocking,
    Stop,
}

impl Phase {
    /// All phases in the order the driver runs them.
    pub const ALL: [Phase; 5] = [
        Phase::Init,
        Phase::Setup,
        Phase::Start,
        Phase::StartBlocking,
        Phase::Stop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::Setup => "setup",
            Phase::Start => "start",
            Phase::StartBlocking => "start_blocking",
            Phase::Stop => "stop",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the driver does when a starter reports `start_blocking() == true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockingPolicy {
    /// Record the answer and go straight on to `stop`.
    #[default]
    Ignore,
    /// Hold the driver before that starter's `stop` until shutdown is
    /// triggered.
    Park,
}

impl BlockingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockingPolicy::Ignore => "ignore",
            BlockingPolicy::Park => "park",
        }
    }
}

impl fmt::Display for BlockingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no blocking policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blocking policy '{0}', expected 'ignore' or 'park'")]
pub struct ParsePolicyError(pub String);

impl FromStr for BlockingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(BlockingPolicy::Ignore),
            "park" => Ok(BlockingPolicy::Park),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
