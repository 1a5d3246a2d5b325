use super::*;

/// Ordering applied to creditors and debtors before matching.
///
/// `Seated` keeps input order and is what [`settle`] uses. `Largest` stably
/// sorts each side by descending magnitude, which tends to clear big
/// positions in a single transfer. Neither is guaranteed to reach the
/// theoretical minimum transaction count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    #[default]
    Seated,
    Largest,
}

impl Priority {
    /// Reorder one side of the ledger in place.
    pub fn arrange(&self, side: &mut [Net]) {
        match self {
            Self::Seated => side.sort_by_key(Net::position),
            Self::Largest => side.sort_by(|a, b| b.magnitude().total_cmp(&a.magnitude())),
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "" | "seated" => Ok(Self::Seated),
            "largest" => Ok(Self::Largest),
            other => Err(anyhow::anyhow!("unknown priority {:?}", other)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Seated => write!(f, "seated"),
            Self::Largest => write!(f, "largest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_is_stable_on_ties() {
        let mut side = vec![Net::new(0, 5.), Net::new(1, 9.), Net::new(2, 5.)];
        Priority::Largest.arrange(&mut side);
        let order = side.iter().map(Net::position).collect::<Vec<_>>();
        assert!(order == vec![1, 0, 2]);
    }

    #[test]
    fn seated_restores_input_order() {
        let mut side = vec![Net::new(2, 1.), Net::new(0, 3.), Net::new(1, 2.)];
        Priority::Seated.arrange(&mut side);
        let order = side.iter().map(Net::position).collect::<Vec<_>>();
        assert!(order == vec![0, 1, 2]);
    }

    #[test]
    fn parses_names() {
        assert!(Priority::try_from("Largest").unwrap() == Priority::Largest);
        assert!(Priority::try_from("").unwrap() == Priority::Seated);
        assert!(Priority::try_from("smallest").is_err());
    }
}
