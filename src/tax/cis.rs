//! Construction Industry Scheme (CIS) enumerations and deduction rates

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// CIS treatment of an invoice line. Only meaningful when the invoicing
/// party is a CIS subcontractor; materials are excluded from the deduction
/// under HMRC rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CisCategory {
    Labour,
    Materials,
    #[default]
    NotApplicable,
}

impl CisCategory {
    pub fn from_str(s: &str) -> Option<CisCategory> {
        match s {
            "labour" => Some(CisCategory::Labour),
            "materials" => Some(CisCategory::Materials),
            "not_applicable" => Some(CisCategory::NotApplicable),
            _ => None,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            CisCategory::Labour => "Labour",
            CisCategory::Materials => "Materials",
            CisCategory::NotApplicable => "-",
        }
    }
}

/// Subcontractor verification status under CIS, each carrying a fixed
/// statutory deduction rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CisStatus {
    #[default]
    NotApplicable,
    GrossPayment,
    Standard,
    Unverified,
}

impl CisStatus {
    pub fn from_str(s: &str) -> Option<CisStatus> {
        match s {
            "not_applicable" => Some(CisStatus::NotApplicable),
            "gross_payment" => Some(CisStatus::GrossPayment),
            "standard" => Some(CisStatus::Standard),
            "unverified" => Some(CisStatus::Unverified),
            _ => None,
        }
    }

    /// Deduction rate applied to the labour portion of the invoice.
    /// Rates are a small fixed legal enumeration, so a closed table
    /// rather than configuration.
    pub fn deduction_rate(&self) -> Decimal {
        match self {
            CisStatus::NotApplicable | CisStatus::GrossPayment => Decimal::ZERO,
            CisStatus::Standard => dec!(0.20),
            CisStatus::Unverified => dec!(0.30),
        }
    }

    /// Input tag as it appears in JSON
    pub fn tag(&self) -> &'static str {
        match self {
            CisStatus::NotApplicable => "not_applicable",
            CisStatus::GrossPayment => "gross_payment",
            CisStatus::Standard => "standard",
            CisStatus::Unverified => "unverified",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            CisStatus::NotApplicable => "Not applicable",
            CisStatus::GrossPayment => "Gross payment",
            CisStatus::Standard => "Standard (20%)",
            CisStatus::Unverified => "Unverified (30%)",
        }
    }
}

impl std::fmt::Display for CisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduction_rates() {
        assert_eq!(CisStatus::NotApplicable.deduction_rate(), Decimal::ZERO);
        assert_eq!(CisStatus::GrossPayment.deduction_rate(), Decimal::ZERO);
        assert_eq!(CisStatus::Standard.deduction_rate(), dec!(0.20));
        assert_eq!(CisStatus::Unverified.deduction_rate(), dec!(0.30));
    }

    #[test]
    fn status_from_str() {
        assert_eq!(
            CisStatus::from_str("gross_payment"),
            Some(CisStatus::GrossPayment)
        );
        assert_eq!(CisStatus::from_str("standard"), Some(CisStatus::Standard));
        assert_eq!(CisStatus::from_str("verified"), None);
    }

    #[test]
    fn category_from_str() {
        assert_eq!(CisCategory::from_str("labour"), Some(CisCategory::Labour));
        assert_eq!(
            CisCategory::from_str("materials"),
            Some(CisCategory::Materials)
        );
        assert_eq!(CisCategory::from_str("labor"), None);
    }

    #[test]
    fn category_defaults_to_not_applicable() {
        assert_eq!(CisCategory::default(), CisCategory::NotApplicable);
    }
}
