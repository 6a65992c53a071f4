use std::fmt;

/// How far a player got in a tournament, derived from the round level of
/// their best match. Round level 1 is the final; larger numbers are earlier
/// rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    WonFinal,
    ReachedFinal,
    SemiFinal,
    QuarterFinal,
    EarlierRound,
}

impl RoundResult {
    pub fn classify(round_level: i64, winner_id: Option<i64>, player_id: i64) -> Self {
        match round_level {
            1 if winner_id == Some(player_id) => Self::WonFinal,
            1 => Self::ReachedFinal,
            2 => Self::SemiFinal,
            3 | 4 => Self::QuarterFinal,
            _ => Self::EarlierRound,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WonFinal => "winst",
            Self::ReachedFinal => "finale",
            Self::SemiFinal => "halve finale",
            Self::QuarterFinal => "kwart finale",
            Self::EarlierRound => "lager dan kwart finale",
        }
    }
}

/// Best tournament result on record for a player. `Display` renders the
/// one-line summary shown to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighestRanking {
    /// The player has at least one recorded match.
    Placed {
        club_name: String,
        result: RoundResult,
    },
    /// Enrolled in a tournament but no match rows yet.
    EnrolledWithoutMatches { club_name: String },
    /// No matches and no enrollments.
    Unranked,
}

impl fmt::Display for HighestRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placed { club_name, result } => write!(
                f,
                "Hoogst geplaatst in het tornooi van {} met plaats in de {}",
                club_name,
                result.label()
            ),
            Self::EnrolledWithoutMatches { club_name } => write!(
                f,
                "Speler ingeschreven voor tornooi van {club_name} maar geen wedstrijden gespeeld."
            ),
            Self::Unranked => write!(f, "Speler heeft geen rankings."),
        }
    }
}
