pub mod number;
pub mod schema;
pub mod totals;
pub mod validate;

use crate::invoice::{self, Invoice};
use crate::tax::CisStatus;
use clap::ValueEnum;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// CIS status as a CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CisStatusArg {
    NotApplicable,
    GrossPayment,
    Standard,
    Unverified,
}

impl From<CisStatusArg> for CisStatus {
    fn from(arg: CisStatusArg) -> Self {
        match arg {
            CisStatusArg::NotApplicable => CisStatus::NotApplicable,
            CisStatusArg::GrossPayment => CisStatus::GrossPayment,
            CisStatusArg::Standard => CisStatus::Standard,
            CisStatusArg::Unverified => CisStatus::Unverified,
        }
    }
}

/// Read an invoice from a JSON file, a CSV line-item file, or stdin with "-"
/// (stdin is always JSON). CSV carries line items only, so `cis_status`
/// supplies the missing status there; it also overrides whatever a JSON
/// invoice declares.
pub fn read_invoice(path: &Path, cis_status: Option<CisStatus>) -> anyhow::Result<Invoice> {
    let mut invoice = if path.as_os_str() == "-" {
        read_from_stdin()?
    } else if path.extension() == Some(OsStr::new("csv")) {
        let file = File::open(path)?;
        let items = invoice::read_items_csv(BufReader::new(file))?;
        Invoice {
            invoice_number: None,
            date: None,
            customer: None,
            cis_status: CisStatus::NotApplicable,
            items,
        }
    } else {
        let file = File::open(path)?;
        invoice::read_json(BufReader::new(file))?
    };

    if let Some(status) = cis_status {
        invoice.cis_status = status;
    }
    log::debug!(
        "read {} line item(s), CIS status {:?}",
        invoice.items.len(),
        invoice.cis_status
    );
    Ok(invoice)
}

fn read_from_stdin() -> anyhow::Result<Invoice> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    invoice::read_json(io::Cursor::new(buffer))
}
