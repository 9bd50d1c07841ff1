//! Bulk import of tab-delimited expense lines.
//!
//! The format is one expense per line:
//!
//! ```text
//! Category<TAB>Name<TAB>Amount
//! ```
//!
//! - the category is matched case-insensitively (`needs`/`need`,
//!   `wants`/`want`, `savings`/`saving`);
//! - the name is trimmed and may be empty;
//! - every character of the amount that is not a digit, `.` or `-` is
//!   dropped before parsing, so `$1,200.50` reads as `1200.50`;
//! - fields after the third are ignored.
//!
//! Lines that do not fit are skipped without error. [`parse_with_report`]
//! additionally tells which lines were skipped and why.

use serde::Serialize;

use crate::{Buckets, Category, EngineError, ExpenseRecord, Money, ResultEngine};

/// Example shown to users before they paste their data.
pub const TEMPLATE: &str = "needs\tRent\t1200\nwants\tDining Out\t150\nsavings\tEmergency Fund\t400";

/// Why a line was left out of an import.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    TooFewFields,
    UnknownCategory,
    InvalidAmount,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::TooFewFields => "fewer than 3 tab-separated fields",
            SkipReason::UnknownCategory => "unknown category",
            SkipReason::InvalidAmount => "amount is not a number",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number within the trimmed input.
    pub line: usize,
    pub content: String,
    pub reason: SkipReason,
}

/// Outcome of an import besides the records themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ImportReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Parses pasted text into categorized records, silently dropping bad lines.
pub fn parse(text: &str) -> Buckets {
    parse_with_report(text).0
}

/// Same as [`parse`], also reporting every skipped line.
pub fn parse_with_report(text: &str) -> (Buckets, ImportReport) {
    let mut batch = Buckets::default();
    let mut report = ImportReport::default();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (batch, report);
    }

    for (idx, line) in trimmed.split('\n').enumerate() {
        match parse_line(line) {
            Ok((category, record)) => {
                batch.push(category, record);
                report.imported += 1;
            }
            Err(reason) => {
                tracing::debug!(line = idx + 1, reason = reason.describe(), "skipping import line");
                report.skipped.push(SkippedLine {
                    line: idx + 1,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }

    (batch, report)
}

fn parse_line(line: &str) -> Result<(Category, ExpenseRecord), SkipReason> {
    let mut fields = line.split('\t');
    let (Some(label), Some(name), Some(amount)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(SkipReason::TooFewFields);
    };

    let category = Category::from_label(label).ok_or(SkipReason::UnknownCategory)?;
    let amount = parse_amount(amount).ok_or(SkipReason::InvalidAmount)?;

    Ok((category, ExpenseRecord::new(name.trim(), amount)))
}

/// Keeps only digits, `.` and `-`, then reads the leading number.
pub fn parse_amount(raw: &str) -> Option<Money> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    Money::parse_lenient(&cleaned)
}

/// Writes every record back out in the import format, category by category.
///
/// Amounts are written without currency symbol. Names are written with tabs
/// and line breaks replaced by spaces, and the parser trims them, so the
/// output imports back to the same records only for names that carry neither
/// surrounding whitespace nor those characters.
pub fn export_tsv(buckets: &Buckets) -> ResultEngine<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(vec![]);

    for (category, record) in buckets.iter() {
        let name = record.name.replace(['\t', '\n', '\r'], " ");
        let amount = record.amount.amount().to_string();
        writer.write_record([category.code(), name.as_str(), amount.as_str()])?;
    }

    let data = writer
        .into_inner()
        .map_err(|err| EngineError::Export(err.to_string()))?;
    String::from_utf8(data).map_err(|err| EngineError::Export(err.to_string()))
}
