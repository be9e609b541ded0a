use std::fmt;
use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};

use super::error::LoadError;
use super::model::{CompanyDataset, RawCompany, TechFrequencies, TechTerm};

pub const STOCK_CODE_HEADER: (&str, &str) = ("股票代码", "stock_code");
pub const COMPANY_NAME_HEADER: (&str, &str) = ("企业名称", "company_name");
pub const TOTAL_WORDS_HEADER: (&str, &str) = ("总词频数", "total_word_count");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and enrich the company dataset at `path`.
///
/// This is the only place the source file is read. A missing file and any
/// read or parse failure are returned as [`LoadError`]; nothing panics.
pub fn load_dataset(path: &Path) -> Result<CompanyDataset, LoadError> {
    if !path.is_file() {
        log::error!("Data file not found: {}", path.display());
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let raw = load_table(path)
        .and_then(|table| parse_companies(&table))
        .map_err(|e| {
            log::error!("Failed to load {}: {e:#}", path.display());
            LoadError::LoadFailure(e)
        })?;

    let dataset = CompanyDataset::from_raw(raw, path);
    log::info!(
        "Loaded {} companies from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Raw table: header row + untyped cells
// ---------------------------------------------------------------------------

/// A single untyped cell from the source sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<empty>"),
        }
    }
}

/// First worksheet (or CSV file) as read, before any typing.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Read the raw table, dispatching by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` – first worksheet
/// * `.csv` – header row followed by records
pub fn load_table(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Workbook loader
// ---------------------------------------------------------------------------

fn load_workbook(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheets")?
        .context("reading first worksheet")?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .context("first worksheet is empty (no header row)")?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let rows = rows
        .map(|row| row.iter().map(cell_from_workbook).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

fn cell_from_workbook(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) if s.trim().is_empty() => CellValue::Null,
        Data::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV cells are kept as text so codes such as `000001` keep their leading
/// zeros; numeric columns are parsed later.
fn load_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        rows.push(
            record
                .iter()
                .map(|value| {
                    if value.trim().is_empty() {
                        CellValue::Null
                    } else {
                        CellValue::Text(value.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(RawTable { headers, rows })
}

// ---------------------------------------------------------------------------
// Typing: raw table → company rows
// ---------------------------------------------------------------------------

static NULL_CELL: CellValue = CellValue::Null;

fn column_index(headers: &[String], (header, alias): (&str, &str)) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == header || h == alias)
        .with_context(|| format!("missing required column '{header}' (or '{alias}')"))
}

/// Convert the raw table into company rows. Blank rows are skipped.
pub fn parse_companies(table: &RawTable) -> Result<Vec<RawCompany>> {
    let code_idx = column_index(&table.headers, STOCK_CODE_HEADER)?;
    let name_idx = column_index(&table.headers, COMPANY_NAME_HEADER)?;
    let words_idx = column_index(&table.headers, TOTAL_WORDS_HEADER)?;
    let term_idx = TechTerm::ALL
        .iter()
        .map(|&term| Ok((term, column_index(&table.headers, (term.header(), term.alias()))?)))
        .collect::<Result<Vec<_>>>()?;

    let mut companies = Vec::with_capacity(table.rows.len());

    for (row_no, row) in table.rows.iter().enumerate() {
        if row.iter().all(|c| *c == CellValue::Null) {
            continue;
        }
        let cell = move |idx: usize| row.get(idx).unwrap_or(&NULL_CELL);
        let row_no = row_no + 1;

        let mut frequencies = TechFrequencies::default();
        for &(term, idx) in &term_idx {
            let value = frequency(cell(idx))
                .with_context(|| format!("row {row_no}, column '{}'", table.headers[idx]))?;
            frequencies.set(term, value);
        }

        let total_word_count = word_count(cell(words_idx))
            .with_context(|| format!("row {row_no}, column '{}'", table.headers[words_idx]))?;

        companies.push(RawCompany {
            stock_code: code_text(cell(code_idx)),
            company_name: name_text(cell(name_idx)),
            frequencies,
            total_word_count,
        });
    }

    Ok(companies)
}

fn code_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        CellValue::Null => String::new(),
        CellValue::Text(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

fn name_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => String::new(),
        CellValue::Text(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

/// Empty cells count as zero occurrences.
fn frequency(cell: &CellValue) -> Result<f64> {
    let value = match cell {
        CellValue::Null => 0.0,
        CellValue::Integer(i) => *i as f64,
        CellValue::Float(f) => *f,
        CellValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .with_context(|| format!("'{s}' is not a number"))?,
        CellValue::Bool(b) => bail!("expected a number, found boolean {b}"),
    };
    if !value.is_finite() || value < 0.0 {
        bail!("frequency must be a non-negative number, found {value}");
    }
    Ok(value)
}

fn word_count(cell: &CellValue) -> Result<u64> {
    match cell {
        CellValue::Null => Ok(0),
        CellValue::Integer(i) => {
            u64::try_from(*i).with_context(|| format!("word count must be non-negative, found {i}"))
        }
        CellValue::Float(f) if f.fract() == 0.0 && *f >= 0.0 => Ok(*f as u64),
        CellValue::Text(s) => s
            .trim()
            .parse::<u64>()
            .with_context(|| format!("'{s}' is not a non-negative integer")),
        other => bail!("expected a non-negative integer, found {other}"),
    }
}
