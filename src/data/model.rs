use std::fmt;
use std::path::{Path, PathBuf};

use super::index::digitalization_index;
use super::industry::classify;

// ---------------------------------------------------------------------------
// TechTerm – the five tracked technology-frequency columns
// ---------------------------------------------------------------------------

/// A technology term whose annual-report frequency feeds the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TechTerm {
    ArtificialIntelligence,
    Blockchain,
    BigData,
    CloudComputing,
    DigitalApplication,
}

impl TechTerm {
    /// All terms, in column order.
    pub const ALL: [TechTerm; 5] = [
        TechTerm::ArtificialIntelligence,
        TechTerm::Blockchain,
        TechTerm::BigData,
        TechTerm::CloudComputing,
        TechTerm::DigitalApplication,
    ];

    /// Header used by the word-frequency workbooks.
    pub fn header(self) -> &'static str {
        match self {
            TechTerm::ArtificialIntelligence => "人工智能技术",
            TechTerm::Blockchain => "区块链技术",
            TechTerm::BigData => "大数据技术",
            TechTerm::CloudComputing => "云计算技术",
            TechTerm::DigitalApplication => "数字技术应用",
        }
    }

    /// English header accepted in place of [`TechTerm::header`].
    pub fn alias(self) -> &'static str {
        match self {
            TechTerm::ArtificialIntelligence => "AI-technology",
            TechTerm::Blockchain => "blockchain-technology",
            TechTerm::BigData => "big-data-technology",
            TechTerm::CloudComputing => "cloud-technology",
            TechTerm::DigitalApplication => "digital-application",
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

/// Per-term frequency counts for one company.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TechFrequencies([f64; 5]);

impl TechFrequencies {
    pub fn new(values: [f64; 5]) -> Self {
        TechFrequencies(values)
    }

    pub fn get(&self, term: TechTerm) -> f64 {
        self.0[term.position()]
    }

    pub fn set(&mut self, term: TechTerm, value: f64) {
        self.0[term.position()] = value;
    }
}

// ---------------------------------------------------------------------------
// Industry – closed set of labels
// ---------------------------------------------------------------------------

/// Industry guessed from a company name. `Other` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Industry {
    Finance,
    RealEstate,
    Manufacturing,
    Transportation,
    Energy,
    InformationTechnology,
    Healthcare,
    Consumer,
    Education,
    Media,
    Other,
}

impl Industry {
    /// Every label, named industries first.
    pub const ALL: [Industry; 11] = [
        Industry::Finance,
        Industry::RealEstate,
        Industry::Manufacturing,
        Industry::Transportation,
        Industry::Energy,
        Industry::InformationTechnology,
        Industry::Healthcare,
        Industry::Consumer,
        Industry::Education,
        Industry::Media,
        Industry::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Industry::Finance => "Finance",
            Industry::RealEstate => "Real-Estate",
            Industry::Manufacturing => "Manufacturing",
            Industry::Transportation => "Transportation",
            Industry::Energy => "Energy",
            Industry::InformationTechnology => "Information-Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Consumer => "Consumer",
            Industry::Education => "Education",
            Industry::Media => "Media",
            Industry::Other => "Other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Company records
// ---------------------------------------------------------------------------

/// One row as read from the source file, before enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCompany {
    pub stock_code: String,
    pub company_name: String,
    pub frequencies: TechFrequencies,
    pub total_word_count: u64,
}

/// A fully enriched row. Only built through [`CompanyRecord::enrich`], so the
/// derived fields are always populated.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRecord {
    pub stock_code: String,
    pub company_name: String,
    pub frequencies: TechFrequencies,
    pub total_word_count: u64,
    digitalization_index: f64,
    industry: Industry,
}

impl CompanyRecord {
    pub fn enrich(raw: RawCompany) -> Self {
        let digitalization_index = digitalization_index(&raw.frequencies);
        let industry = classify(&raw.company_name);
        CompanyRecord {
            stock_code: raw.stock_code,
            company_name: raw.company_name,
            frequencies: raw.frequencies,
            total_word_count: raw.total_word_count,
            digitalization_index,
            industry,
        }
    }

    pub fn digitalization_index(&self) -> f64 {
        self.digitalization_index
    }

    pub fn industry(&self) -> Industry {
        self.industry
    }
}

// ---------------------------------------------------------------------------
// CompanyDataset – the enriched, immutable session dataset
// ---------------------------------------------------------------------------

/// The loaded and enriched dataset. Immutable once built.
#[derive(Debug, Clone)]
pub struct CompanyDataset {
    records: Vec<CompanyRecord>,
    source: PathBuf,
}

impl CompanyDataset {
    /// Enrich raw rows, keeping their order.
    pub fn from_raw(raw: Vec<RawCompany>, source: &Path) -> Self {
        CompanyDataset {
            records: raw.into_iter().map(CompanyRecord::enrich).collect(),
            source: source.to_path_buf(),
        }
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    /// File the dataset was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest index, or `None` for an empty dataset.
    pub fn index_bounds(&self) -> Option<(f64, f64)> {
        self.records
            .iter()
            .map(CompanyRecord::digitalization_index)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Distinct industries in order of first appearance.
    pub fn industries_present(&self) -> Vec<Industry> {
        let mut seen = Vec::new();
        for rec in &self.records {
            if !seen.contains(&rec.industry) {
                seen.push(rec.industry);
            }
        }
        seen
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn raw(code: &str, name: &str, freqs: [f64; 5]) -> RawCompany {
        RawCompany {
            stock_code: code.to_string(),
            company_name: name.to_string(),
            frequencies: TechFrequencies::new(freqs),
            total_word_count: 1000,
        }
    }

    #[test]
    fn enrich_populates_derived_fields() {
        let rec = CompanyRecord::enrich(raw("600000", "Pudong Bank", [10.0, 5.0, 8.0, 4.0, 6.0]));
        assert!((rec.digitalization_index() - 7.3).abs() < 1e-9);
        assert_eq!(rec.industry(), Industry::Finance);
    }

    #[test]
    fn bounds_and_industries_follow_source_order() {
        let ds = CompanyDataset::from_raw(
            vec![
                raw("1", "Acme Software", [0.0, 0.0, 1.0, 0.0, 0.0]),
                raw("2", "Plain Holdings", [0.0, 0.0, 0.0, 0.0, 0.0]),
                raw("3", "Beta Software", [0.0, 0.0, 4.0, 0.0, 0.0]),
            ],
            Path::new("mem.csv"),
        );
        assert_eq!(ds.index_bounds(), Some((0.0, 1.0)));
        assert_eq!(
            ds.industries_present(),
            vec![Industry::InformationTechnology, Industry::Other]
        );
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = CompanyDataset::from_raw(Vec::new(), Path::new("mem.csv"));
        assert!(ds.is_empty());
        assert_eq!(ds.index_bounds(), None);
    }
}
