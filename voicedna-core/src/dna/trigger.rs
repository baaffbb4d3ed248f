use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Provenance tag recording why a profile version was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// First analysis of a clone's writing samples.
    InitialAnalysis,
    /// Caller supplied a complete post-edit dimension payload.
    ManualEdit,
    /// An external collaborator re-derived the profile content.
    Regeneration,
    /// A historical version's content was copied into a new version.
    Revert,
}

impl Trigger {
    /// Wire string, matching the stored column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::InitialAnalysis => "initial_analysis",
            Trigger::ManualEdit => "manual_edit",
            Trigger::Regeneration => "regeneration",
            Trigger::Revert => "revert",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initial_analysis" => Ok(Trigger::InitialAnalysis),
            "manual_edit" => Ok(Trigger::ManualEdit),
            "regeneration" => Ok(Trigger::Regeneration),
            "revert" => Ok(Trigger::Revert),
            other => Err(format!("unknown trigger '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for trigger in [
            Trigger::InitialAnalysis,
            Trigger::ManualEdit,
            Trigger::Regeneration,
            Trigger::Revert,
        ] {
            assert_eq!(trigger.as_str().parse::<Trigger>().unwrap(), trigger);
        }
    }
}
