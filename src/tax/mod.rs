pub mod cis;
pub mod totals;
pub mod vat;

pub use cis::{CisCategory, CisStatus};
pub use totals::{compute_totals, InvoiceTotals};
pub use vat::VatRate;
