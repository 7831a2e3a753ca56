//! Number command - next invoice number from a pattern

use crate::numbering::NumberPattern;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Args, Debug)]
pub struct NumberCommand {
    /// Number pattern, e.g. "INV-{YYYY}-{SEQ:4}"
    pattern: String,

    /// Sequence number of the last issued invoice
    #[arg(short, long, default_value_t = 0)]
    last: u32,

    /// Invoice date for date tokens (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

impl NumberCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let pattern = NumberPattern::parse(&self.pattern)?;
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        println!("{}", pattern.next(self.last, date));
        Ok(())
    }
}
