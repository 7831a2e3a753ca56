//! Invoice data model and input formats (JSON and CSV)

use crate::tax::{CisCategory, CisStatus, VatRate};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

/// A single invoice line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: Option<String>,
    pub description: String,
    pub quantity: Decimal,
    pub net_amount: Decimal,
    pub vat_rate: VatRate,
    pub cis_category: CisCategory,
}

impl LineItem {
    /// Net contribution of this line to the invoice subtotal
    pub fn line_total(&self) -> Decimal {
        self.net_amount * self.quantity
    }
}

/// A parsed invoice ready for totals calculation
#[derive(Debug, Clone)]
pub struct Invoice {
    pub invoice_number: Option<String>,
    pub date: Option<NaiveDate>,
    pub customer: Option<String>,
    pub cis_status: CisStatus,
    pub items: Vec<LineItem>,
}

/// Errors converting raw input records into the typed model.
///
/// Unknown enum tags are rejected here rather than silently dropped from
/// the VAT breakdown, so a malformed invoice fails loudly at the boundary
/// and the totals calculation stays total over well-typed input.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown VAT rate tag '{0}' (expected 0, 5, 20 or reverse_charge)")]
    UnknownVatRate(String),
    #[error("unknown CIS category '{0}' (expected labour, materials or not_applicable)")]
    UnknownCisCategory(String),
    #[error(
        "unknown CIS status '{0}' (expected not_applicable, gross_payment, standard or unverified)"
    )]
    UnknownCisStatus(String),
    #[error("invalid invoice date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Unified JSON input format
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceInput {
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Invoice date, YYYY-MM-DD
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
    /// CIS status: not_applicable, gross_payment, standard or unverified
    #[serde(default)]
    pub cis_status: Option<String>,
    pub items: Vec<LineItemRecord>,
}

/// Input record for a line item (JSON object or CSV row)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LineItemRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub description: String,
    pub quantity: Decimal,
    /// Per-unit net price in pounds and pence
    pub net_amount: Decimal,
    /// VAT rate tag: 0, 5, 20 or reverse_charge
    pub vat_rate: String,
    /// CIS category: labour, materials or not_applicable (default)
    #[serde(default)]
    pub cis_category: Option<String>,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = ModelError;

    fn try_from(record: LineItemRecord) -> Result<Self, ModelError> {
        let vat_rate = VatRate::from_str(&record.vat_rate)
            .ok_or_else(|| ModelError::UnknownVatRate(record.vat_rate.clone()))?;
        let cis_category = match record.cis_category.as_deref() {
            None | Some("") => CisCategory::NotApplicable,
            Some(s) => CisCategory::from_str(s)
                .ok_or_else(|| ModelError::UnknownCisCategory(s.to_string()))?,
        };
        Ok(LineItem {
            id: record.id,
            description: record.description,
            quantity: record.quantity,
            net_amount: record.net_amount,
            vat_rate,
            cis_category,
        })
    }
}

impl TryFrom<InvoiceInput> for Invoice {
    type Error = ModelError;

    fn try_from(input: InvoiceInput) -> Result<Self, ModelError> {
        let date = input
            .date
            .map(|s| {
                NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| ModelError::InvalidDate(s))
            })
            .transpose()?;
        let cis_status = match input.cis_status.as_deref() {
            None | Some("") => CisStatus::NotApplicable,
            Some(s) => {
                CisStatus::from_str(s).ok_or_else(|| ModelError::UnknownCisStatus(s.to_string()))?
            }
        };
        let items = input
            .items
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<LineItem>, _>>()?;
        Ok(Invoice {
            invoice_number: input.invoice_number,
            date,
            customer: input.customer,
            cis_status,
            items,
        })
    }
}

/// Read an invoice from JSON
pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Invoice> {
    let input: InvoiceInput = serde_json::from_reader(reader)?;
    Ok(input.try_into()?)
}

/// Read line items from CSV. The CIS status is not part of the CSV format
/// and must be supplied separately.
pub fn read_items_csv<R: Read>(reader: R) -> anyhow::Result<Vec<LineItem>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let records: Result<Vec<LineItemRecord>, _> = rdr.deserialize::<LineItemRecord>().collect();
    let items = records?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<LineItem>, _>>()?;
    Ok(items)
}
