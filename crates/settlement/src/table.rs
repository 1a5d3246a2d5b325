use super::*;
use chip_core::Blinds;
use chip_core::PLAYER_PREFIX;
use chip_core::Value;
use chip_dto::SettleBody;
use chip_dto::SettleForm;

/// Everything a front-end knows about a finished table: balances, player
/// labels, the value of one blind, and the matching priority.
///
/// Input shape is checked here so the engine only ever sees numbers.
#[derive(Debug, Clone)]
pub struct Table {
    session: Session,
    names: Vec<String>,
    unit: Option<Value>,
    priority: Priority,
}

impl Table {
    pub fn new(
        start: Vec<Blinds>,
        end: Vec<Blinds>,
        names: Option<Vec<String>>,
        unit: Option<Value>,
    ) -> anyhow::Result<Self> {
        if start.len() != end.len() {
            return Err(anyhow::anyhow!(
                "The number of start blinds and end blinds must be the same"
            ));
        }
        let names = match names {
            None => (0..start.len())
                .map(|i| format!("{}{}", PLAYER_PREFIX, i))
                .collect(),
            Some(names) if names.len() == start.len() => names,
            Some(_) => {
                return Err(anyhow::anyhow!(
                    "The number of player names must match the number of blinds"
                ));
            }
        };
        let unit = match unit {
            None => None,
            Some(u) if !u.is_finite() || u < 0. => {
                return Err(anyhow::anyhow!("big blind size must be a non-negative number"));
            }
            Some(u) if u == 0. => None,
            Some(u) => Some(u),
        };
        Ok(Self {
            session: Session::new(start, end),
            names,
            unit,
            priority: Priority::default(),
        })
    }

    /// Parses comma-separated form fields. Blank `names` or `unit` mean
    /// "not given".
    pub fn parse(start: &str, end: &str, names: &str, unit: &str) -> anyhow::Result<Self> {
        let start = Self::blinds("start_blinds", start)?;
        let end = Self::blinds("end_blinds", end)?;
        let names = match names.trim() {
            "" => None,
            names => Some(names.split(',').map(str::trim).map(String::from).collect()),
        };
        let unit = match unit.trim() {
            "" => None,
            unit => Some(
                unit.parse::<Value>()
                    .map_err(|_| anyhow::anyhow!("invalid big blind size {:?}", unit))?,
            ),
        };
        Self::new(start, end, names, unit)
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn unit(&self) -> Option<Value> {
        self.unit
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the engine and labels its output.
    pub fn settle(&self) -> Result<Vec<Payment>, InvalidInput> {
        Ok(self
            .session
            .settle(self.priority)?
            .into_iter()
            .map(|t| self.label(t))
            .collect())
    }

    /// Each player's label next to their net result.
    pub fn nets(&self) -> Result<Vec<(&str, Net)>, InvalidInput> {
        Ok(Ledger::nets(self.session.start(), self.session.end())?
            .into_iter()
            .map(|net| (self.names[net.position()].as_str(), net))
            .collect())
    }

    fn label(&self, transaction: Transaction) -> Payment {
        Payment::new(
            self.names[transaction.debtor()].clone(),
            self.names[transaction.creditor()].clone(),
            transaction.amount(),
            self.unit.map(|u| u * transaction.amount()),
        )
    }

    fn blinds(field: &str, text: &str) -> anyhow::Result<Vec<Blinds>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        text.split(',')
            .map(str::trim)
            .map(|token| {
                token
                    .parse::<Blinds>()
                    .map_err(|_| anyhow::anyhow!("invalid number {:?} in {}", token, field))
            })
            .collect()
    }
}

impl TryFrom<SettleForm> for Table {
    type Error = anyhow::Error;
    fn try_from(form: SettleForm) -> Result<Self, Self::Error> {
        Self::parse(
            &form.start_blinds,
            &form.end_blinds,
            &form.player_names,
            &form.big_blind,
        )
    }
}

impl TryFrom<SettleBody> for Table {
    type Error = anyhow::Error;
    fn try_from(body: SettleBody) -> Result<Self, Self::Error> {
        let priority = Priority::try_from(body.priority.as_deref().unwrap_or_default())?;
        Ok(Self::new(body.start, body.end, body.names, body.unit)?.with_priority(priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels() {
        let table = Table::parse("10,10,10", "5,15,10", "", "").unwrap();
        let payments = table.settle().unwrap();
        assert!(payments.len() == 1);
        assert!(payments[0].payer() == "Player0");
        assert!(payments[0].payee() == "Player1");
        assert!(payments[0].blinds() == 5.);
        assert!(payments[0].value().is_none());
    }

    #[test]
    fn custom_labels_and_unit() {
        let table = Table::parse("10, 0, 0", "0, 5, 5", "ann, bo, cy", "0.5").unwrap();
        let payments = table.settle().unwrap();
        assert!(payments.len() == 2);
        assert!(payments[0].payer() == "ann" && payments[0].payee() == "bo");
        assert!(payments[1].payer() == "ann" && payments[1].payee() == "cy");
        assert!(payments[0].value() == Some(2.5));
        assert!(payments[1].value() == Some(2.5));
    }

    #[test]
    fn zero_unit_disables_conversion() {
        let table = Table::parse("1,0", "0,1", "", "0").unwrap();
        assert!(table.unit().is_none());
        assert!(table.settle().unwrap()[0].value().is_none());
    }

    #[test]
    fn negative_unit_rejected() {
        assert!(Table::parse("1,0", "0,1", "", "-2").is_err());
    }

    #[test]
    fn garbage_number_rejected() {
        let error = Table::parse("10,ten", "5,15", "", "").unwrap_err();
        assert!(error.to_string().contains("\"ten\""));
    }

    #[test]
    fn name_count_mismatch_rejected() {
        let error = Table::parse("10,10", "5,15", "ann", "").unwrap_err();
        assert!(error.to_string().contains("player names"));
    }

    #[test]
    fn seat_count_mismatch_rejected() {
        let error = Table::parse("10,10", "20", "", "").unwrap_err();
        assert!(error.to_string().contains("start blinds and end blinds"));
    }

    #[test]
    fn blank_balances_mean_empty_table() {
        let table = Table::parse("", "  ", "", "").unwrap();
        assert!(table.settle().unwrap().is_empty());
    }

    #[test]
    fn unbalanced_totals_surface_engine_error() {
        let table = Table::parse("10,20", "15,10", "", "").unwrap();
        assert!(matches!(table.settle(), Err(InvalidInput::Total { .. })));
    }

    #[test]
    fn body_carries_priority() {
        let body = SettleBody {
            start: vec![10., 10., 10., 10.],
            end: vec![8., 3., 12., 17.],
            priority: Some("largest".into()),
            ..SettleBody::default()
        };
        let payments = Table::try_from(body).unwrap().settle().unwrap();
        assert!(payments[0].payer() == "Player1");
        assert!(payments[0].payee() == "Player3");
    }

    #[test]
    fn nets_are_labelled() {
        let table = Table::parse("10,10", "4,16", "ann,bo", "").unwrap();
        let nets = table.nets().unwrap();
        assert!(nets[0].0 == "ann" && nets[0].1.amount() == -6.);
        assert!(nets[1].0 == "bo" && nets[1].1.amount() == 6.);
    }
}
