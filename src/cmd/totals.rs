//! Totals command - subtotal, VAT breakdown and CIS deduction for an invoice

use crate::cmd::{read_invoice, CisStatusArg};
use crate::invoice::Invoice;
use crate::tax::totals::{compute_totals, InvoiceTotals};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct TotalsCommand {
    /// Invoice file (JSON, or CSV line items). Reads JSON from stdin with "-".
    #[arg(default_value = "-")]
    file: PathBuf,

    /// CIS status (supplies the status for CSV input, overrides JSON)
    #[arg(short, long, value_enum)]
    cis_status: Option<CisStatusArg>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Totals data for JSON output
#[derive(Debug, Serialize)]
struct TotalsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer: Option<String>,
    cis_status: String,
    subtotal: String,
    vat_breakdown: Vec<VatLineData>,
    total_vat: String,
    total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cis: Option<CisData>,
}

#[derive(Debug, Serialize)]
struct VatLineData {
    rate: String,
    amount: String,
}

#[derive(Debug, Serialize)]
struct CisData {
    labour_total: String,
    materials_total: String,
    deduction_rate_pct: String,
    deduction_amount: String,
    net_payable: String,
}

#[derive(Debug, Clone, Tabled)]
struct ItemRow {
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Net")]
    net_amount: String,
    #[tabled(rename = "VAT")]
    vat_rate: String,
    #[tabled(rename = "CIS")]
    cis: String,
    #[tabled(rename = "Line Total")]
    line_total: String,
}

impl TotalsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let invoice = read_invoice(&self.file, self.cis_status.map(Into::into))?;
        let totals = compute_totals(&invoice.items, invoice.cis_status);

        if self.json {
            self.print_json(&invoice, &totals)
        } else {
            self.print_text(&invoice, &totals);
            Ok(())
        }
    }

    fn print_text(&self, invoice: &Invoice, totals: &InvoiceTotals) {
        println!();
        match &invoice.invoice_number {
            Some(number) => println!("INVOICE {}", number),
            None => println!("INVOICE"),
        }
        if let Some(ref customer) = invoice.customer {
            println!("Customer: {}", customer);
        }
        if let Some(date) = invoice.date {
            println!("Date: {}", date.format("%Y-%m-%d"));
        }
        println!();

        let rows: Vec<ItemRow> = invoice
            .items
            .iter()
            .map(|item| ItemRow {
                description: item.description.clone(),
                quantity: format_quantity(item.quantity),
                net_amount: format_gbp(item.net_amount),
                vat_rate: item.vat_rate.to_string(),
                cis: item.cis_category.display().to_string(),
                line_total: format_gbp_signed(item.line_total()),
            })
            .collect();

        if rows.is_empty() {
            println!("(no line items)");
        } else {
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
        }
        println!();

        println!("Subtotal: {}", format_gbp_signed(totals.subtotal));
        for line in &totals.vat_breakdown {
            println!("VAT ({}): {}", line.rate, format_gbp(line.amount));
        }
        println!("Total VAT: {}", format_gbp(totals.total_vat));
        println!("TOTAL: {}", format_gbp_signed(totals.total));

        if let Some(ref cis) = totals.cis {
            println!();
            println!("CIS DEDUCTION - {}", invoice.cis_status);
            println!(
                "  Labour: {} | Materials: {}",
                format_gbp(cis.labour_total),
                format_gbp(cis.materials_total)
            );
            println!(
                "  Deduction @ {:.0}%: {}",
                cis.deduction_rate * dec!(100),
                format_gbp(cis.deduction_amount)
            );
            println!("  NET PAYABLE: {}", format_gbp_signed(cis.net_payable));
        }
        println!();
    }

    fn print_json(&self, invoice: &Invoice, totals: &InvoiceTotals) -> anyhow::Result<()> {
        let data = TotalsData {
            invoice_number: invoice.invoice_number.clone(),
            customer: invoice.customer.clone(),
            cis_status: invoice.cis_status.tag().to_string(),
            subtotal: format!("{:.2}", totals.subtotal),
            vat_breakdown: totals
                .vat_breakdown
                .iter()
                .map(|line| VatLineData {
                    rate: line.rate.tag().to_string(),
                    amount: format!("{:.2}", line.amount),
                })
                .collect(),
            total_vat: format!("{:.2}", totals.total_vat),
            total: format!("{:.2}", totals.total),
            cis: totals.cis.as_ref().map(|cis| CisData {
                labour_total: format!("{:.2}", cis.labour_total),
                materials_total: format!("{:.2}", cis.materials_total),
                deduction_rate_pct: format!("{:.0}", cis.deduction_rate * dec!(100)),
                deduction_amount: format!("{:.2}", cis.deduction_amount),
                net_payable: format!("{:.2}", cis.net_payable),
            }),
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

fn format_gbp(amount: Decimal) -> String {
    format!("£{:.2}", amount)
}

fn format_gbp_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-£{:.2}", amount.abs())
    } else {
        format!("£{:.2}", amount)
    }
}

fn format_quantity(qty: Decimal) -> String {
    let s = format!("{:.4}", qty);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
