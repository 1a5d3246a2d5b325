use chip_core::Blinds;
use chip_core::Value;
use chip_dto::ApiPayment;

/// A [`Transaction`](crate::Transaction) with labels attached and,
/// when a unit value is known, the amount converted out of blinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    payer: String,
    payee: String,
    blinds: Blinds,
    value: Option<Value>,
}

impl Payment {
    pub fn new(payer: String, payee: String, blinds: Blinds, value: Option<Value>) -> Self {
        Self {
            payer,
            payee,
            blinds,
            value,
        }
    }
    pub fn payer(&self) -> &str {
        &self.payer
    }
    pub fn payee(&self) -> &str {
        &self.payee
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn value(&self) -> Option<Value> {
        self.value
    }
}

impl From<Payment> for ApiPayment {
    fn from(payment: Payment) -> Self {
        Self {
            from: payment.payer,
            to: payment.payee,
            amount_in_blinds: payment.blinds,
            amount_in_euros: payment.value,
        }
    }
}

impl std::fmt::Display for Payment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<12} -> {:<12} {:>10.2} bb", self.payer, self.payee, self.blinds)?;
        match self.value {
            Some(value) => write!(f, " {:>10.2}", value),
            None => Ok(()),
        }
    }
}
