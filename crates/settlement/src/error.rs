use chip_core::Blinds;
use chip_core::Position;

/// Precondition violations. Settlement either fully succeeds or returns one
/// of these with no partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// Start and end vectors disagree on the number of players.
    Length { start: usize, end: usize },
    /// A balance is NaN or infinite.
    Finite { position: Position },
    /// Chips were created or destroyed between start and end.
    Total { start: Blinds, end: Blinds },
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length { start, end } => write!(
                f,
                "The number of players must be the same but start_blinds has {} entries and end_blinds has {}",
                start, end
            ),
            Self::Finite { position } => {
                write!(f, "The blinds of player {} must be a finite number", position)
            }
            Self::Total { start, end } => write!(
                f,
                "The total number of blinds must be the same but the sum of start_blinds is {} and the sum of end_blinds is {}",
                start, end
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}
