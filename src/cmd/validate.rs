//! Validate command - surface invoice data quality issues without computing totals

use crate::cmd::{read_invoice, CisStatusArg};
use crate::invoice::Invoice;
use crate::tax::{CisCategory, CisStatus};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateCommand {
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

/// A validation issue for output
#[derive(Debug, Clone, Serialize)]
struct ValidationIssue {
    #[serde(rename = "type")]
    issue_type: String,
    /// Line item id or 1-based position, absent for invoice-level issues
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<String>,
    message: String,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ValidationOutput {
    issue_count: usize,
    issues: Vec<ValidationIssue>,
}

impl ValidateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let invoice = read_invoice(&self.file, self.cis_status.map(Into::into))?;
        let issues = collect_issues(&invoice);

        if self.json {
            self.print_json(&issues)?;
        } else {
            self.print_text(&issues);
        }

        // Exit with code 1 if issues found
        if !issues.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn print_text(&self, issues: &[ValidationIssue]) {
        println!();
        println!("VALIDATION RESULTS");
        println!();

        if issues.is_empty() {
            println!("\u{2713} No issues found.");
        } else {
            println!("\u{26A0} {} issue(s) found:", issues.len());
            println!();

            for (i, issue) in issues.iter().enumerate() {
                match &issue.line {
                    Some(line) => println!(
                        "  {}. [{}] line {}: {}",
                        i + 1,
                        issue.issue_type,
                        line,
                        issue.message
                    ),
                    None => println!("  {}. [{}] {}", i + 1, issue.issue_type, issue.message),
                }
            }
            println!();
        }
    }

    fn print_json(&self, issues: &[ValidationIssue]) -> anyhow::Result<()> {
        let output = ValidationOutput {
            issue_count: issues.len(),
            issues: issues.to_vec(),
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

fn collect_issues(invoice: &Invoice) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (index, item) in invoice.items.iter().enumerate() {
        let line = item
            .id
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1));

        if item.quantity <= Decimal::ZERO {
            issues.push(ValidationIssue {
                issue_type: "NonPositiveQuantity".to_string(),
                line: Some(line.clone()),
                message: format!(
                    "quantity {} zeroes out or negates the line's contribution",
                    item.quantity
                ),
            });
        }
        if item.net_amount < Decimal::ZERO {
            issues.push(ValidationIssue {
                issue_type: "NegativeNetAmount".to_string(),
                line: Some(line.clone()),
                message: format!("net amount {} is negative", item.net_amount),
            });
        }
        if item.description.trim().is_empty() {
            issues.push(ValidationIssue {
                issue_type: "MissingDescription".to_string(),
                line: Some(line),
                message: "line has no description".to_string(),
            });
        }
    }

    let labour_lines = invoice
        .items
        .iter()
        .filter(|item| item.cis_category == CisCategory::Labour)
        .count();

    if invoice.cis_status == CisStatus::NotApplicable && labour_lines > 0 {
        issues.push(ValidationIssue {
            issue_type: "LabourWithoutCisStatus".to_string(),
            line: None,
            message: format!(
                "{} labour-tagged line(s) but no CIS status - no deduction will be applied",
                labour_lines
            ),
        });
    }
    if invoice.cis_status != CisStatus::NotApplicable && labour_lines == 0 {
        issues.push(ValidationIssue {
            issue_type: "CisWithoutLabour".to_string(),
            line: None,
            message: "CIS status set but no labour-tagged lines - deduction will be zero"
                .to_string(),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::LineItem;
    use crate::tax::VatRate;
    use rust_decimal_macros::dec;

    fn item(qty: Decimal, net: Decimal, category: CisCategory) -> LineItem {
        LineItem {
            id: None,
            description: "work".to_string(),
            quantity: qty,
            net_amount: net,
            vat_rate: VatRate::Standard,
            cis_category: category,
        }
    }

    fn invoice(cis_status: CisStatus, items: Vec<LineItem>) -> Invoice {
        Invoice {
            invoice_number: None,
            date: None,
            customer: None,
            cis_status,
            items,
        }
    }

    #[test]
    fn clean_invoice_has_no_issues() {
        let inv = invoice(
            CisStatus::Standard,
            vec![item(dec!(1), dec!(500), CisCategory::Labour)],
        );
        assert!(collect_issues(&inv).is_empty());
    }

    #[test]
    fn zero_quantity_flagged() {
        let inv = invoice(
            CisStatus::NotApplicable,
            vec![item(dec!(0), dec!(100), CisCategory::NotApplicable)],
        );
        let issues = collect_issues(&inv);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, "NonPositiveQuantity");
        assert_eq!(issues[0].line, Some("#1".to_string()));
    }

    #[test]
    fn negative_net_amount_flagged() {
        let inv = invoice(
            CisStatus::NotApplicable,
            vec![item(dec!(1), dec!(-50), CisCategory::NotApplicable)],
        );
        let issues = collect_issues(&inv);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, "NegativeNetAmount");
    }

    #[test]
    fn missing_description_flagged() {
        let mut line = item(dec!(1), dec!(100), CisCategory::NotApplicable);
        line.description = "  ".to_string();
        let inv = invoice(CisStatus::NotApplicable, vec![line]);
        let issues = collect_issues(&inv);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, "MissingDescription");
    }

    #[test]
    fn labour_without_cis_status_flagged() {
        let inv = invoice(
            CisStatus::NotApplicable,
            vec![item(dec!(1), dec!(500), CisCategory::Labour)],
        );
        let issues = collect_issues(&inv);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, "LabourWithoutCisStatus");
        assert_eq!(issues[0].line, None);
    }

    #[test]
    fn cis_status_without_labour_flagged() {
        let inv = invoice(
            CisStatus::Unverified,
            vec![item(dec!(1), dec!(500), CisCategory::Materials)],
        );
        let issues = collect_issues(&inv);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, "CisWithoutLabour");
    }

    #[test]
    fn line_identified_by_id_when_present() {
        let mut line = item(dec!(-1), dec!(100), CisCategory::NotApplicable);
        line.id = Some("L7".to_string());
        let inv = invoice(CisStatus::NotApplicable, vec![line]);
        let issues = collect_issues(&inv);
        assert_eq!(issues[0].line, Some("L7".to_string()));
    }
}
