use chip_core::Blinds;
use chip_core::Position;

/// A payment the debtor owes the creditor. The amount is always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    debtor: Position,
    creditor: Position,
    amount: Blinds,
}

impl Transaction {
    pub fn new(debtor: Position, creditor: Position, amount: Blinds) -> Self {
        debug_assert!(debtor != creditor);
        debug_assert!(amount > 0.);
        Self {
            debtor,
            creditor,
            amount,
        }
    }
    /// Player who pays.
    pub fn debtor(&self) -> Position {
        self.debtor
    }
    /// Player who gets paid.
    pub fn creditor(&self) -> Position {
        self.creditor
    }
    pub fn amount(&self) -> Blinds {
        self.amount
    }
}

impl From<Transaction> for (Position, Position, Blinds) {
    fn from(t: Transaction) -> Self {
        (t.debtor, t.creditor, t.amount)
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} -> {} {:.2}", self.debtor, self.creditor, self.amount)
    }
}
