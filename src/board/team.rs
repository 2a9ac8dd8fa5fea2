use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// The two sides. White is team 0 and starts on ranks 1-2.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    White = 0,
    Black = 1,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    pub fn opposite(&self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Team::White => true,
            Team::Black => false,
        }
    }

    /// +1 if the team pushes pawns up the board, -1 otherwise.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    pub fn pawn_home_rank(&self) -> u8 {
        match self {
            Team::White => 1,
            Team::Black => 6,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Team::White)
    }
}

impl From<u8> for Team {
    fn from(value: u8) -> Self {
        match value {
            0 => Team::White,
            1 => Team::Black,
            _ => panic!("Invalid team value: {} (must be 0 or 1)", value),
        }
    }
}

impl From<Team> for u8 {
    fn from(team: Team) -> Self {
        team as u8
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let team_str = match self {
            Team::White => "white",
            Team::Black => "black",
        };
        write!(f, "{}", team_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Team {
    type Err = ParseError;
    fn from_str(team: &str) -> Result<Self, Self::Err> {
        match team {
            "white" => Ok(Team::White),
            "black" => Ok(Team::Black),
            "random" => Ok(Team::random()),
            _ => Err("invalid color; options are: white, black, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Team::ALL.contains(&Team::random()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Team::White, Team::from_str("white").unwrap());
        assert_eq!(Team::Black, Team::from_str("black").unwrap());
        assert!(Team::ALL.contains(&Team::from_str("random").unwrap()));
        assert!(Team::from_str("green").is_err());
    }

    #[test]
    fn test_team_u8_conversions() {
        assert_eq!(Team::from(0u8), Team::White);
        assert_eq!(Team::from(1u8), Team::Black);
        assert_eq!(u8::from(Team::White), 0);
        assert_eq!(u8::from(Team::Black), 1);
    }

    #[test]
    fn test_pawn_geometry() {
        assert_eq!(Team::White.pawn_direction(), 1);
        assert_eq!(Team::Black.pawn_direction(), -1);
        assert_eq!(Team::White.pawn_home_rank(), 1);
        assert_eq!(Team::Black.pawn_home_rank(), 6);
    }
}
