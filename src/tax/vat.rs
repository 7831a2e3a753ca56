use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// UK VAT rate applicable to an invoice line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VatRate {
    /// Zero-rated supply
    Zero,
    /// Reduced rate (5%), e.g. domestic energy
    Reduced,
    /// Standard rate (20%)
    Standard,
    /// Domestic reverse charge: the customer accounts for the VAT, but the
    /// line must still be itemized on the invoice
    ReverseCharge,
}

impl VatRate {
    /// Fixed order in which rates appear in a VAT breakdown
    pub const BREAKDOWN_ORDER: [VatRate; 4] = [
        VatRate::Zero,
        VatRate::Reduced,
        VatRate::Standard,
        VatRate::ReverseCharge,
    ];

    pub fn from_str(s: &str) -> Option<VatRate> {
        match s {
            "0" => Some(VatRate::Zero),
            "5" => Some(VatRate::Reduced),
            "20" => Some(VatRate::Standard),
            "reverse_charge" => Some(VatRate::ReverseCharge),
            _ => None,
        }
    }

    /// Percentage of VAT charged on the invoice itself. Reverse charge
    /// lines carry no VAT.
    pub fn percent(&self) -> Decimal {
        match self {
            VatRate::Zero | VatRate::ReverseCharge => Decimal::ZERO,
            VatRate::Reduced => dec!(5),
            VatRate::Standard => dec!(20),
        }
    }

    /// Input tag as it appears in JSON and CSV
    pub fn tag(&self) -> &'static str {
        match self {
            VatRate::Zero => "0",
            VatRate::Reduced => "5",
            VatRate::Standard => "20",
            VatRate::ReverseCharge => "reverse_charge",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            VatRate::Zero => "0%",
            VatRate::Reduced => "5%",
            VatRate::Standard => "20%",
            VatRate::ReverseCharge => "Reverse charge",
        }
    }
}

impl std::fmt::Display for VatRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages() {
        assert_eq!(VatRate::Zero.percent(), Decimal::ZERO);
        assert_eq!(VatRate::Reduced.percent(), dec!(5));
        assert_eq!(VatRate::Standard.percent(), dec!(20));
        assert_eq!(VatRate::ReverseCharge.percent(), Decimal::ZERO);
    }

    #[test]
    fn from_str_known_tags() {
        assert_eq!(VatRate::from_str("0"), Some(VatRate::Zero));
        assert_eq!(VatRate::from_str("5"), Some(VatRate::Reduced));
        assert_eq!(VatRate::from_str("20"), Some(VatRate::Standard));
        assert_eq!(
            VatRate::from_str("reverse_charge"),
            Some(VatRate::ReverseCharge)
        );
    }

    #[test]
    fn from_str_unknown_tag() {
        assert_eq!(VatRate::from_str("17.5"), None);
        assert_eq!(VatRate::from_str(""), None);
        assert_eq!(VatRate::from_str("standard"), None);
    }

    #[test]
    fn breakdown_order_is_stable() {
        assert_eq!(
            VatRate::BREAKDOWN_ORDER,
            [
                VatRate::Zero,
                VatRate::Reduced,
                VatRate::Standard,
                VatRate::ReverseCharge
            ]
        );
    }
}
