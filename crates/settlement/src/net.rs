use chip_core::Blinds;
use chip_core::Position;
use chip_core::TOLERANCE;

/// A player's net result over the session.
///
/// Positive amounts are owed to the player (creditor), negative amounts are
/// owed by the player (debtor). Anything within the dust cutoff of zero is
/// settled and takes part in no transaction. The cutoff starts at
/// [`TOLERANCE`]; [`Ledger`](crate::Ledger) widens it to the table's
/// rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Net {
    position: Position,
    amount: Blinds,
    dust: Blinds,
}

impl Net {
    pub fn new(position: Position, amount: Blinds) -> Self {
        Self {
            position,
            amount,
            dust: TOLERANCE,
        }
    }
    /// Same result, judged against a different dust cutoff.
    pub fn with_dust(self, dust: Blinds) -> Self {
        Self { dust, ..self }
    }
    pub fn position(&self) -> Position {
        self.position
    }
    /// Signed net result in blinds.
    pub fn amount(&self) -> Blinds {
        self.amount
    }
    /// Unsigned size of the claim or debt.
    pub fn magnitude(&self) -> Blinds {
        self.amount.abs()
    }
    /// Largest amount still treated as zero.
    pub fn dust(&self) -> Blinds {
        self.dust
    }
    pub fn is_creditor(&self) -> bool {
        self.amount > self.dust
    }
    pub fn is_debtor(&self) -> bool {
        self.amount < -self.dust
    }
    pub fn is_settled(&self) -> bool {
        !self.is_creditor() && !self.is_debtor()
    }
}

/// (position, start, end) -> end minus start
impl From<(Position, Blinds, Blinds)> for Net {
    fn from((position, start, end): (Position, Blinds, Blinds)) -> Self {
        Self::new(position, end - start)
    }
}

impl std::fmt::Display for Net {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_settled() {
            write!(f, "{:>3} {:>+10.2}", self.position, 0.)
        } else {
            write!(f, "{:>3} {:>+10.2}", self.position, self.amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_is_creditor() {
        let net = Net::from((1, 10., 15.));
        assert!(net.is_creditor());
        assert!(net.amount() == 5.);
    }

    #[test]
    fn loser_is_debtor() {
        let net = Net::from((0, 10., 5.));
        assert!(net.is_debtor());
        assert!(net.magnitude() == 5.);
    }

    #[test]
    fn dust_is_settled() {
        let net = Net::from((2, 0.1 + 0.2, 0.3));
        assert!(net.amount() != 0.);
        assert!(net.is_settled());
    }

    #[test]
    fn wider_dust_settles_rounding() {
        let net = Net::new(0, 3e-9);
        assert!(net.is_creditor());
        assert!(net.with_dust(1e-6).is_settled());
    }
}
