//! Boundary kinds an analyzer can be asked for

use core::fmt;
use core::str::FromStr;

use crate::error::BoundaryError;

/// Segmentation family requested from a [`BoundaryAnalyzer`](crate::BoundaryAnalyzer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundaryKind {
    /// Grapheme cluster ("user perceived character") boundaries
    Character,
    /// Word boundaries
    Word,
    /// Sentence boundaries
    Sentence,
    /// Line break opportunities
    Line,
}

impl BoundaryKind {
    /// Every kind, in declaration order
    pub const ALL: [BoundaryKind; 4] = [
        BoundaryKind::Character,
        BoundaryKind::Word,
        BoundaryKind::Sentence,
        BoundaryKind::Line,
    ];

    /// Lowercase name, as used in rule-set configuration files
    pub fn name(self) -> &'static str {
        match self {
            BoundaryKind::Character => "character",
            BoundaryKind::Word => "word",
            BoundaryKind::Sentence => "sentence",
            BoundaryKind::Line => "line",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryKind {
    type Err = BoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "char" | "grapheme" => Ok(BoundaryKind::Character),
            "word" => Ok(BoundaryKind::Word),
            "sentence" => Ok(BoundaryKind::Sentence),
            "line" => Ok(BoundaryKind::Line),
            other => Err(BoundaryError::Config(format!(
                "unknown boundary kind '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Grapheme".parse::<BoundaryKind>().unwrap(), BoundaryKind::Character);
        assert_eq!(" line ".parse::<BoundaryKind>().unwrap(), BoundaryKind::Line);
        assert!("paragraph".parse::<BoundaryKind>().is_err());
    }

    #[test]
    fn test_name_round_trips_through_display() {
        for kind in BoundaryKind::ALL {
            assert_eq!(kind.to_string().parse::<BoundaryKind>().unwrap(), kind);
        }
    }
}
