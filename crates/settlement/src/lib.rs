//! Settlement of poker-session balances into pairwise payments.
//!
//! Given each player's starting and ending chip count, this crate produces a
//! short list of debtor to creditor transfers that zeroes every player's net
//! position.
//!
//! ## Engine
//!
//! - [`settle`] — Validate two balance vectors and match debtors to creditors
//! - [`Settlement`] — Two-cursor greedy matching over a [`Ledger`]
//! - [`Priority`] — Ordering of each side before matching
//!
//! ## Accounting
//!
//! - [`Net`] — A player's signed result over the session
//! - [`Ledger`] — Validated partition of players into creditors and debtors
//! - [`Transaction`] — A single positive payment from debtor to creditor
//! - [`InvalidInput`] — Precondition violations
//!
//! ## Presentation
//!
//! - [`Table`] — Parses raw text, carries labels and a unit value
//! - [`Payment`] — A labelled transaction, optionally converted
//!
//! ## Testing
//!
//! - [`Session`] — Random balanced start/end vectors
mod error;
mod ledger;
mod net;
mod payment;
mod priority;
mod session;
mod settlement;
mod table;
mod transaction;

pub use error::*;
pub use ledger::*;
pub use net::*;
pub use payment::*;
pub use priority::*;
pub use session::*;
pub use settlement::*;
pub use table::*;
pub use transaction::*;
