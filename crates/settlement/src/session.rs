use super::*;
use chip_core::Arbitrary;
use chip_core::Blinds;
use chip_core::MAX_PLAYERS;
use chip_core::MAX_STACK;
use rand::Rng;

/// Start and end balances for one table.
///
/// Not validated on construction; [`Session::settle`] reports violations.
#[derive(Debug, Clone, Default)]
pub struct Session {
    start: Vec<Blinds>,
    end: Vec<Blinds>,
}

impl Session {
    pub fn new(start: Vec<Blinds>, end: Vec<Blinds>) -> Self {
        Self { start, end }
    }
    pub fn start(&self) -> &[Blinds] {
        &self.start
    }
    pub fn end(&self) -> &[Blinds] {
        &self.end
    }
    pub fn settle(&self, priority: Priority) -> Result<Vec<Transaction>, InvalidInput> {
        settle_with(&self.start, &self.end, priority)
    }
    /// Cent-denominated stacks sitting on a shared offset of up to a
    /// billion blinds. Decimal cents are inexact in binary, so totals only
    /// balance up to rounding.
    pub fn deep() -> Self {
        let ref mut rng = rand::rng();
        let n = rng.random_range(2..=MAX_PLAYERS);
        let offset = (10 as Blinds).powi(rng.random_range(0..=9));
        let cents = (MAX_STACK * 100.) as u32;
        let start = (0..n)
            .map(|_| offset + rng.random_range(0..=cents) as Blinds * 0.01)
            .collect::<Vec<Blinds>>();
        let mut end = start.clone();
        for _ in 0..n * 2 {
            let from = rng.random_range(0..n);
            let into = rng.random_range(0..n);
            let pot = rng.random_range(0..=cents) as Blinds * 0.01;
            end[from] -= pot;
            end[into] += pot;
        }
        Self { start, end }
    }
}

/// Whole-blind stacks shuffled between random pairs of players, so totals
/// are conserved exactly.
impl Arbitrary for Session {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let n = rng.random_range(0..=MAX_PLAYERS);
        let start = (0..n)
            .map(|_| rng.random_range(0..=MAX_STACK as u32) as Blinds)
            .collect::<Vec<Blinds>>();
        let mut end = start.clone();
        for _ in 0..n * 2 {
            let from = rng.random_range(0..n);
            let into = rng.random_range(0..n);
            let pot = rng.random_range(0..=end[from] as u32) as Blinds;
            end[from] -= pot;
            end[into] += pot;
        }
        Self { start, end }
    }
}
