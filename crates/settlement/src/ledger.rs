use super::*;
use chip_core::Blinds;
use chip_core::ROUNDING;
use chip_core::TOLERANCE;

/// Validated net positions, split into the two sides of the settlement.
///
/// Construction checks every precondition, so a `Ledger` always balances:
/// total credit equals total debt up to [`Ledger::dust`].
#[derive(Debug, Clone)]
pub struct Ledger {
    creditors: Vec<Net>,
    debtors: Vec<Net>,
    dust: Blinds,
}

impl Ledger {
    /// Players owed chips, each with a positive amount.
    pub fn creditors(&self) -> &[Net] {
        &self.creditors
    }
    /// Players owing chips, each with a negative amount.
    pub fn debtors(&self) -> &[Net] {
        &self.debtors
    }
    /// Largest amount treated as zero at this table: the floating point
    /// error that summing its balances can accumulate, never below
    /// [`TOLERANCE`].
    pub fn dust(&self) -> Blinds {
        self.dust
    }
    /// Reorder both sides according to `priority`.
    pub fn arrange(mut self, priority: Priority) -> Self {
        priority.arrange(&mut self.creditors);
        priority.arrange(&mut self.debtors);
        self
    }
    /// Net result of every player in seat order, settled players included.
    pub fn nets(start: &[Blinds], end: &[Blinds]) -> Result<Vec<Net>, InvalidInput> {
        let dust = Self::validate(start, end)?;
        Ok(start
            .iter()
            .zip(end.iter())
            .enumerate()
            .map(|(i, (s, e))| Net::from((i, *s, *e)).with_dust(dust))
            .collect())
    }
    /// Rounding slack for a table: seat count times chip volume times
    /// [`ROUNDING`], floored at [`TOLERANCE`].
    pub fn slack(start: &[Blinds], end: &[Blinds]) -> Blinds {
        let volume = start.iter().chain(end.iter()).map(|b| b.abs()).sum::<Blinds>();
        let seats = start.len().max(end.len()).max(1) as Blinds;
        (ROUNDING * seats * volume).max(TOLERANCE)
    }
    /// Checks every precondition and returns the table's dust cutoff.
    fn validate(start: &[Blinds], end: &[Blinds]) -> Result<Blinds, InvalidInput> {
        if start.len() != end.len() {
            return Err(InvalidInput::Length {
                start: start.len(),
                end: end.len(),
            });
        }
        if let Some(position) = start
            .iter()
            .zip(end.iter())
            .position(|(s, e)| !s.is_finite() || !e.is_finite())
        {
            return Err(InvalidInput::Finite { position });
        }
        let dust = Self::slack(start, end);
        let s = start.iter().sum::<Blinds>();
        let e = end.iter().sum::<Blinds>();
        if (s - e).abs() > dust {
            return Err(InvalidInput::Total { start: s, end: e });
        }
        Ok(dust)
    }
}

impl TryFrom<(&[Blinds], &[Blinds])> for Ledger {
    type Error = InvalidInput;
    fn try_from((start, end): (&[Blinds], &[Blinds])) -> Result<Self, Self::Error> {
        let nets = Self::nets(start, end)?;
        Ok(Self {
            creditors: nets.iter().copied().filter(Net::is_creditor).collect(),
            debtors: nets.iter().copied().filter(Net::is_debtor).collect(),
            dust: Self::slack(start, end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_in_seat_order() {
        let start = [10., 10., 10., 10.];
        let end = [5., 15., 10., 10.];
        let ledger = Ledger::try_from((&start[..], &end[..])).unwrap();
        assert!(ledger.creditors().len() == 1);
        assert!(ledger.debtors().len() == 1);
        assert!(ledger.creditors()[0].position() == 1);
        assert!(ledger.debtors()[0].position() == 0);
    }

    #[test]
    fn rejects_length_mismatch() {
        let result = Ledger::try_from((&[1., 2.][..], &[3.][..]));
        assert!(matches!(result, Err(InvalidInput::Length { start: 2, end: 1 })));
    }

    #[test]
    fn rejects_total_mismatch() {
        let result = Ledger::try_from((&[10., 20.][..], &[15., 10.][..]));
        assert!(matches!(result, Err(InvalidInput::Total { .. })));
    }

    #[test]
    fn rejects_non_finite() {
        let result = Ledger::try_from((&[1., f64::NAN][..], &[1., 0.][..]));
        assert!(matches!(result, Err(InvalidInput::Finite { position: 1 })));
    }

    #[test]
    fn accepts_fractional_rounding() {
        let result = Ledger::try_from((&[0.1, 0.2][..], &[0.3, 0.][..]));
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_half_blind_gap_on_deep_stacks() {
        let result = Ledger::try_from((&[1e9, 0.][..], &[1e9 - 0.5, 0.][..]));
        assert!(matches!(result, Err(InvalidInput::Total { .. })));
    }

    #[test]
    fn dust_grows_with_volume() {
        let shallow = Ledger::slack(&[1., 1.], &[2., 0.]);
        let deep = Ledger::slack(&[1e8, 1e8], &[2e8, 0.]);
        assert!(shallow == TOLERANCE);
        assert!(deep > TOLERANCE);
        assert!(deep < 0.01);
    }

    #[test]
    fn nets_carry_table_dust() {
        let nets = Ledger::nets(&[1e8, 0.1], &[0.1, 1e8]).unwrap();
        assert!(nets.iter().all(|n| n.dust() == Ledger::slack(&[1e8, 0.1], &[0.1, 1e8])));
    }

    #[test]
    fn nets_include_settled_players() {
        let nets = Ledger::nets(&[10., 10., 10.], &[5., 15., 10.]).unwrap();
        assert!(nets.len() == 3);
        assert!(nets[2].is_settled());
    }
}
