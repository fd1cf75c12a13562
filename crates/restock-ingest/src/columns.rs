//! Report header matching.
//!
//! Headers are compared with every whitespace character removed, so
//! `Mağaza Adı` and `Mağaza\nAdı` both match `MağazaAdı`.

use crate::error::{IngestError, Result};

/// A column the allocation engine needs from the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Store,
    ProductCode,
    ProductName,
    ColorCode,
    ColorName,
    Size,
    NetSales,
    Stock,
}

impl ReportField {
    pub const ALL: [Self; 8] = [
        Self::Store,
        Self::ProductCode,
        Self::ProductName,
        Self::ColorCode,
        Self::ColorName,
        Self::Size,
        Self::NetSales,
        Self::Stock,
    ];

    /// Header as it appears in the store report export.
    pub fn canonical(self) -> &'static str {
        match self {
            Self::Store => "MağazaAdı",
            Self::ProductCode => "ÜrünKodu",
            Self::ProductName => "ÜrünAdı",
            Self::ColorCode => "RenkKodu",
            Self::ColorName => "RenkAçıklaması",
            Self::Size => "Beden",
            Self::NetSales => "NetMiktar",
            Self::Stock => "Envanter",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Store => &["Store", "StoreName"],
            Self::ProductCode => &["ProductCode", "SKU"],
            Self::ProductName => &["ProductName"],
            Self::ColorCode => &["ColorCode"],
            Self::ColorName => &["ColorName"],
            Self::Size => &["Size"],
            Self::NetSales => &["NetSales", "Sales"],
            Self::Stock => &["Stock", "Inventory"],
        }
    }

    pub fn is_quantity(self) -> bool {
        matches!(self, Self::NetSales | Self::Stock)
    }

    fn matches(self, normalized: &str) -> bool {
        let lowered = normalized.to_lowercase();
        std::iter::once(self.canonical())
            .chain(self.aliases().iter().copied())
            .any(|name| name.to_lowercase() == lowered)
    }
}

/// Strip a byte-order mark and every whitespace character.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// Source header for each [`ReportField`], in [`ReportField::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    sources: Vec<String>,
}

impl ColumnMap {
    /// Source header the field is read from.
    pub fn source(&self, field: ReportField) -> &str {
        &self.sources[field as usize]
    }
}

/// Match raw headers to report fields.
///
/// The first header that matches a field wins.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumns`] naming every absent field and the
/// normalized headers that were present.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    let mut sources = Vec::with_capacity(ReportField::ALL.len());
    let mut missing = Vec::new();
    for field in ReportField::ALL {
        match normalized.iter().position(|name| field.matches(name)) {
            Some(index) => sources.push(headers[index].clone()),
            None => missing.push(field.canonical().to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            missing,
            found: normalized,
        });
    }
    Ok(ColumnMap { sources })
}
