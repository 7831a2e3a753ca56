//! Invoice totals: subtotal, per-rate VAT breakdown and CIS deduction

use crate::invoice::LineItem;
use crate::tax::cis::{CisCategory, CisStatus};
use crate::tax::vat::VatRate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One entry in the per-rate VAT breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatLine {
    pub rate: VatRate,
    pub amount: Decimal,
}

/// CIS deduction breakdown, present for subcontractor invoices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CisBreakdown {
    pub labour_total: Decimal,
    pub materials_total: Decimal,
    pub deduction_rate: Decimal,
    pub deduction_amount: Decimal,
    pub net_payable: Decimal,
}

/// Computed invoice totals. Derived fresh from the line items on demand;
/// never persisted independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub vat_breakdown: Vec<VatLine>,
    pub total_vat: Decimal,
    pub total: Decimal,
    pub cis: Option<CisBreakdown>,
}

/// Calculate invoice totals from line items and CIS status.
///
/// VAT is summed per rate in a fixed order. Zero-amount rates are omitted,
/// except reverse charge which appears whenever a line carries it: UK
/// invoicing requires reverse-charge supplies to be itemized even though
/// they contribute no VAT.
///
/// The CIS deduction applies only to labour-tagged lines and is subtracted
/// from the VAT-inclusive total to give the net payable amount.
///
/// This is a total function: no field values are rejected here. Negative
/// or zero quantities simply flow through the arithmetic; input validation
/// is the caller's concern.
pub fn compute_totals(items: &[LineItem], cis_status: CisStatus) -> InvoiceTotals {
    let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();

    let mut vat_breakdown = Vec::new();
    for rate in VatRate::BREAKDOWN_ORDER {
        if !items.iter().any(|item| item.vat_rate == rate) {
            continue;
        }
        let rated: Decimal = items
            .iter()
            .filter(|item| item.vat_rate == rate)
            .map(LineItem::line_total)
            .sum();
        let amount = (rated * rate.percent() / dec!(100)).round_dp(2);
        if amount > Decimal::ZERO || rate == VatRate::ReverseCharge {
            vat_breakdown.push(VatLine { rate, amount });
        }
    }

    let total_vat: Decimal = vat_breakdown.iter().map(|line| line.amount).sum();
    let total = subtotal + total_vat;

    let cis = if cis_status == CisStatus::NotApplicable {
        None
    } else {
        let labour_total = category_total(items, CisCategory::Labour);
        let materials_total = category_total(items, CisCategory::Materials);
        let deduction_rate = cis_status.deduction_rate();
        let deduction_amount = (labour_total * deduction_rate).round_dp(2);
        log::debug!(
            "CIS {:?}: labour={}, materials={}, deduction={}",
            cis_status,
            labour_total,
            materials_total,
            deduction_amount
        );
        Some(CisBreakdown {
            labour_total,
            materials_total,
            deduction_rate,
            deduction_amount,
            net_payable: total - deduction_amount,
        })
    };

    InvoiceTotals {
        subtotal,
        vat_breakdown,
        total_vat,
        total,
        cis,
    }
}

fn category_total(items: &[LineItem], category: CisCategory) -> Decimal {
    items
        .iter()
        .filter(|item| item.cis_category == category)
        .map(LineItem::line_total)
        .sum()
}
