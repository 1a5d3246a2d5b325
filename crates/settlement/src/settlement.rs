use super::*;
use chip_core::Blinds;
use chip_core::Position;

/// Settles a session in seat order.
///
/// Returns the transfers that zero every player's net position, or the
/// first violated precondition.
pub fn settle(start: &[Blinds], end: &[Blinds]) -> Result<Vec<Transaction>, InvalidInput> {
    settle_with(start, end, Priority::Seated)
}

/// Settles a session after ordering both sides by `priority`.
pub fn settle_with(
    start: &[Blinds],
    end: &[Blinds],
    priority: Priority,
) -> Result<Vec<Transaction>, InvalidInput> {
    Ledger::try_from((start, end))
        .map(|ledger| ledger.arrange(priority))
        .map(Settlement::from)
        .map(Settlement::settle)
}

/// Greedy two-cursor matching of debtors against creditors.
///
/// # Algorithm
///
/// 1. Point one cursor at the first creditor and one at the first debtor
/// 2. Transfer the smaller of the two remaining amounts
/// 3. Advance every cursor whose remainder reached zero
/// 4. Stop once either side is exhausted
///
/// Each transfer retires at least one player, so a table of `n` players
/// never needs more than `n - 1` transfers. Remainders at or below the
/// ledger's dust cutoff count as reaching zero.
pub struct Settlement {
    credits: Vec<(Position, Blinds)>,
    debits: Vec<(Position, Blinds)>,
    dust: Blinds,
}

impl From<Ledger> for Settlement {
    fn from(ledger: Ledger) -> Self {
        Self {
            credits: ledger
                .creditors()
                .iter()
                .map(|n| (n.position(), n.magnitude()))
                .collect(),
            debits: ledger
                .debtors()
                .iter()
                .map(|n| (n.position(), n.magnitude()))
                .collect(),
            dust: ledger.dust(),
        }
    }
}

impl Settlement {
    /// Matches both sides and returns transfers in settlement order.
    pub fn settle(mut self) -> Vec<Transaction> {
        log::debug!(
            "settling {} creditors against {} debtors",
            self.credits.len(),
            self.debits.len()
        );
        let mut transactions = Vec::with_capacity(self.credits.len() + self.debits.len());
        let dust = self.dust;
        let (mut i, mut j) = (0, 0);
        while let (Some(credit), Some(debit)) = (self.credits.get_mut(i), self.debits.get_mut(j)) {
            let amount = credit.1.min(debit.1);
            let transaction = Transaction::new(debit.0, credit.0, amount);
            log::trace!("{}", transaction);
            transactions.push(transaction);
            credit.1 = Self::residual(credit.1 - amount, dust);
            debit.1 = Self::residual(debit.1 - amount, dust);
            if credit.1 == 0. {
                i += 1;
            }
            if debit.1 == 0. {
                j += 1;
            }
        }
        transactions
    }
    /// Floating point dust left after a transfer counts as fully paid.
    fn residual(remaining: Blinds, dust: Blinds) -> Blinds {
        if remaining > dust { remaining } else { 0. }
    }
}
