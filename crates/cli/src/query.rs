use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(
        about = "Settle a session into payments from losers to winners",
        alias = "pay"
    )]
    Settle {
        #[arg(required = true, help = "Comma-separated starting blinds")]
        start: String,
        #[arg(required = true, help = "Comma-separated ending blinds")]
        end: String,
        #[arg(long, short, default_value = "", help = "Comma-separated player names")]
        names: String,
        #[arg(long, short, default_value = "", help = "Value of one big blind")]
        unit: String,
        #[arg(long, short, help = "Match the largest positions first")]
        largest: bool,
    },
    #[command(about = "Show each player's net result", alias = "pnl")]
    Net {
        #[arg(required = true)]
        start: String,
        #[arg(required = true)]
        end: String,
        #[arg(long, short, default_value = "")]
        names: String,
    },
}
