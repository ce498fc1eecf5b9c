//! Driver license grades

use std::fmt;
use std::str::FromStr;

use fleet_types::VehicleError;
use serde::{Deserialize, Serialize};

/// License grade, ordered A < B < C < D
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum LicenseRank {
    A,
    B,
    C,
    D,
}

impl LicenseRank {
    /// Numeric rank, 1 (A) to 4 (D)
    pub fn rank(self) -> u8 {
        match self {
            LicenseRank::A => 1,
            LicenseRank::B => 2,
            LicenseRank::C => 3,
            LicenseRank::D => 4,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            LicenseRank::A => 'A',
            LicenseRank::B => 'B',
            LicenseRank::C => 'C',
            LicenseRank::D => 'D',
        }
    }

    /// Parse a single grade character
    pub fn from_char(grade: char) -> Result<Self, VehicleError> {
        match grade {
            'A' => Ok(LicenseRank::A),
            'B' => Ok(LicenseRank::B),
            'C' => Ok(LicenseRank::C),
            'D' => Ok(LicenseRank::D),
            other => Err(VehicleError::InvalidGrade(other)),
        }
    }

    /// Whether a license of grade `candidate` may operate a vehicle requiring `required`
    pub fn satisfies(candidate: LicenseRank, required: LicenseRank) -> bool {
        candidate.rank() >= required.rank()
    }

    pub fn is_valid_grade(grade: char) -> bool {
        Self::from_char(grade).is_ok()
    }
}

impl TryFrom<char> for LicenseRank {
    type Error = VehicleError;

    fn try_from(grade: char) -> Result<Self, Self::Error> {
        Self::from_char(grade)
    }
}

impl From<LicenseRank> for char {
    fn from(rank: LicenseRank) -> char {
        rank.as_char()
    }
}

impl FromStr for LicenseRank {
    type Err = VehicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(VehicleError::InvalidGradeText(s.to_string())),
        }
    }
}

impl fmt::Display for LicenseRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
