use serde::Deserialize;
use serde::Serialize;

/// One labelled payment. `amount_in_euros` is present only when the
/// request carried a big blind size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPayment {
    pub from: String,
    pub to: String,
    pub amount_in_blinds: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub amount_in_euros: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl From<String> for ApiError {
    fn from(error: String) -> Self {
        Self { error }
    }
}

// NOTE: impl From<Payment> for ApiPayment is in chip-settlement

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euros_omitted_without_unit() {
        let payment = ApiPayment {
            from: "alice".into(),
            to: "bob".into(),
            amount_in_blinds: 5.,
            amount_in_euros: None,
        };
        let json = serde_json::to_value(&payment).unwrap();
        assert!(json.get("amount_in_euros").is_none());
        assert!(json["amount_in_blinds"] == 5.);
    }

    #[test]
    fn euros_present_with_unit() {
        let payment = ApiPayment {
            from: "alice".into(),
            to: "bob".into(),
            amount_in_blinds: 5.,
            amount_in_euros: Some(2.5),
        };
        let json = serde_json::to_value(&payment).unwrap();
        assert!(json["amount_in_euros"] == 2.5);
    }
}
