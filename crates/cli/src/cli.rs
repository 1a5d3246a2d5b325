//! Interactive and one-shot settlement from the terminal.
use crate::*;
use chip_settlement::*;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

pub struct CLI;

impl CLI {
    /// One-shot when arguments were given, otherwise an interactive prompt.
    pub fn run() -> anyhow::Result<()> {
        if std::env::args().len() > 1 {
            return Self::handle(Query::parse()).map(|output| println!("{}", output));
        }
        log::info!("entering settlement prompt");
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break Ok(());
            }
            match input.trim() {
                "" => continue,
                "quit" => break Ok(()),
                "exit" => break Ok(()),
                _ => match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))
                    .map_err(anyhow::Error::from)
                    .and_then(Self::handle)
                {
                    Err(e) => eprintln!("{}", e),
                    Ok(output) => println!("{}", output),
                },
            }
        }
    }

    /// Renders a query's answer as printable text.
    pub fn handle(query: Query) -> anyhow::Result<String> {
        match query {
            Query::Settle {
                start,
                end,
                names,
                unit,
                largest,
            } => {
                let priority = if largest {
                    Priority::Largest
                } else {
                    Priority::Seated
                };
                let table = Table::parse(&start, &end, &names, &unit)?.with_priority(priority);
                let payments = table.settle()?;
                if payments.is_empty() {
                    return Ok("nobody owes anything".to_string());
                }
                Ok(payments
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<String>>()
                    .join("\n"))
            }
            Query::Net { start, end, names } => {
                let table = Table::parse(&start, &end, &names, "")?;
                Ok(table
                    .nets()?
                    .into_iter()
                    .map(|(name, net)| match net {
                        n if n.is_creditor() => format!("{:<12} {}", name, n.to_string().green()),
                        n if n.is_debtor() => format!("{:<12} {}", name, n.to_string().red()),
                        n => format!("{:<12} {}", name, n),
                    })
                    .collect::<Vec<String>>()
                    .join("\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(start: &str, end: &str, names: &str, unit: &str) -> anyhow::Result<String> {
        CLI::handle(Query::Settle {
            start: start.into(),
            end: end.into(),
            names: names.into(),
            unit: unit.into(),
            largest: false,
        })
    }

    #[test]
    fn prints_one_line_per_payment() {
        let output = settle("10,0,0", "0,5,5", "ann,bo,cy", "").unwrap();
        let lines = output.lines().collect::<Vec<_>>();
        assert!(lines.len() == 2);
        assert!(lines[0].starts_with("ann") && lines[0].contains("bo"));
        assert!(lines[1].starts_with("ann") && lines[1].contains("cy"));
    }

    #[test]
    fn prints_converted_value() {
        let output = settle("10,0", "0,10", "", "0.25").unwrap();
        assert!(output.contains("10.00 bb"));
        assert!(output.contains("2.50"));
    }

    #[test]
    fn reports_even_session() {
        assert!(settle("5,5", "5,5", "", "").unwrap() == "nobody owes anything");
    }

    #[test]
    fn propagates_invalid_input() {
        let error = settle("10,20", "15,10", "", "").unwrap_err();
        assert!(error.downcast_ref::<InvalidInput>().is_some());
    }

    #[test]
    fn lists_nets() {
        let output = CLI::handle(Query::Net {
            start: "10,10,10".into(),
            end: "5,15,10".into(),
            names: "".into(),
        })
        .unwrap();
        assert!(output.lines().count() == 3);
        assert!(output.contains("Player2"));
    }
}
