use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two income-tax rule sets a taxpayer may elect between for a
/// financial year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegimeKind {
    Old,
    New,
}

impl RegimeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "OLD",
            Self::New => "NEW",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OLD" => Some(Self::Old),
            "NEW" => Some(Self::New),
            _ => None,
        }
    }
}

impl std::fmt::Display for RegimeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One marginal-rate income bracket. `upper_bound: None` marks the
/// open-ended top bracket; `rate` is a percentage, 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// Slab table, standard deduction, and cess for one (financial year,
/// regime) pair. Treated as an immutable snapshot for the duration of a
/// calculation; the slab-table invariants (contiguous, ascending,
/// non-decreasing rates) are expected from the configuration source but
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    pub financial_year: String,
    pub regime: RegimeKind,
    pub standard_deduction: Decimal,
    pub slabs: Vec<TaxSlab>,
    #[serde(default = "default_cess_rate")]
    pub cess_rate: Decimal,
}

fn default_cess_rate() -> Decimal {
    Decimal::from(4)
}
