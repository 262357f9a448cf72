use std::collections::HashMap;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use payroll_core::{InMemoryConfigStore, RegimeConfig, RegimeKind, TaxSlab};

/// Errors that can occur when loading slab-table data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlabTableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid regime: {0}")]
    InvalidRegime(String),

    #[error(
        "Conflicting standard deductions for {financial_year} ({regime}): {first} vs {second}"
    )]
    ConflictingStandardDeduction {
        financial_year: String,
        regime: RegimeKind,
        first: Decimal,
        second: Decimal,
    },

    #[error("Conflicting cess rates for {financial_year} ({regime}): {first} vs {second}")]
    ConflictingCessRate {
        financial_year: String,
        regime: RegimeKind,
        first: Decimal,
        second: Decimal,
    },
}

impl From<csv::Error> for SlabTableLoaderError {
    fn from(err: csv::Error) -> Self {
        SlabTableLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the slab tables CSV file.
///
/// One row per slab:
/// - `financial_year`: The financial year label (e.g., 2025-26)
/// - `regime`: The regime code (OLD, NEW)
/// - `standard_deduction`: Standard deduction for the (year, regime) pair
/// - `cess_rate`: Cess percentage for the (year, regime) pair
/// - `lower_bound`: The lower income bound of this slab
/// - `upper_bound`: The upper income bound (empty for the open-ended top slab)
/// - `rate`: The marginal rate as a percentage (e.g., 5 for 5%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlabRecord {
    pub financial_year: String,
    pub regime: String,
    pub standard_deduction: Decimal,
    pub cess_rate: Decimal,
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for regime slab-table data from CSV files.
///
/// Reads CSV rows, groups them by `(financial_year, regime)`, and registers
/// one [`RegimeConfig`] per group in a config store. Rows of one group that
/// disagree on `standard_deduction` or `cess_rate` fail the load: a config
/// source carrying two deduction constants for the same (year, regime) pair
/// is rejected instead of one value winning silently.
pub struct SlabTableLoader;

impl SlabTableLoader {
    /// Parse slab records from a CSV reader.
    ///
    /// Returns a vector of parsed records. The reader can be any type that
    /// implements `Read`, such as a file or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SlabRecord>, SlabTableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: SlabRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Load slab records into a config store.
    ///
    /// Slabs within each group are sorted by `lower_bound` before
    /// registration, so row order in the CSV does not matter. An existing
    /// config for the same (year, regime) pair is replaced, making repeated
    /// loads idempotent. Returns the number of regime configurations
    /// registered.
    pub fn load(
        store: &mut InMemoryConfigStore,
        records: &[SlabRecord],
    ) -> Result<usize, SlabTableLoaderError> {
        let mut groups: HashMap<(String, RegimeKind), Vec<&SlabRecord>> = HashMap::new();

        for record in records {
            let regime = RegimeKind::parse(&record.regime)
                .ok_or_else(|| SlabTableLoaderError::InvalidRegime(record.regime.clone()))?;
            groups
                .entry((record.financial_year.clone(), regime))
                .or_default()
                .push(record);
        }

        let mut loaded = 0;
        for ((financial_year, regime), group) in groups {
            // A group always holds the record that created it.
            let first = group[0];
            for record in &group[1..] {
                if record.standard_deduction != first.standard_deduction {
                    return Err(SlabTableLoaderError::ConflictingStandardDeduction {
                        financial_year,
                        regime,
                        first: first.standard_deduction,
                        second: record.standard_deduction,
                    });
                }
                if record.cess_rate != first.cess_rate {
                    return Err(SlabTableLoaderError::ConflictingCessRate {
                        financial_year,
                        regime,
                        first: first.cess_rate,
                        second: record.cess_rate,
                    });
                }
            }

            let mut slabs: Vec<TaxSlab> = group
                .iter()
                .map(|record| TaxSlab {
                    lower_bound: record.lower_bound,
                    upper_bound: record.upper_bound,
                    rate: record.rate,
                })
                .collect();
            slabs.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));

            debug!(
                %financial_year,
                %regime,
                slabs = slabs.len(),
                "registering regime configuration"
            );

            store.insert_regime(RegimeConfig {
                financial_year,
                regime,
                standard_deduction: first.standard_deduction,
                slabs,
                cess_rate: first.cess_rate,
            });
            loaded += 1;
        }

        Ok(loaded)
    }
}
