//! Tabular input loading: TSV/CSV parsing and column resolution.
//!
//! This is the collaborator that sits in front of the core pipeline. It
//! owns everything the core deliberately does not: file parsing, header
//! heuristics, and the malformed-row policy. The core receives only
//! already-typed `(label, label, Option<f64>)` records plus the resolved
//! [`ColumnSchema`].
//!
//! # Column resolution
//!
//! Explicit flags (`--col-a`, `--col-b`, `--score`) always win. Without
//! them, headers are sniffed the way the original tool did: the first
//! two headers containing `protein` or `node` (case-insensitive) become
//! the endpoints, and the first header containing `score` becomes the
//! weight. Fewer than two endpoint candidates is fatal
//! ([`CoreError::UnsupportedInputShape`]).
//!
//! # Malformed rows
//!
//! A row with a missing endpoint or a non-numeric score is handled per
//! [`RecordPolicy`]: `Skip` drops and counts it, `Fail` aborts with the
//! 1-based data-row number. An *empty* score cell is not malformed — it
//! becomes `None`, and rows without a score never pass an active
//! threshold.

use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use interactome_core::{ColumnSchema, CoreError, Interaction, RecordPolicy};

/// Explicit column overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct ColumnOverrides {
    pub col_a: Option<String>,
    pub col_b: Option<String>,
    pub score: Option<String>,
    /// Ignore any score column even if one exists.
    pub no_score: bool,
}

/// A fully loaded and typed input table.
#[derive(Debug)]
pub struct LoadedTable {
    /// Typed interaction records in file order.
    pub interactions: Vec<Interaction>,
    /// The resolved column mapping.
    pub schema: ColumnSchema,
    /// Rows dropped under [`RecordPolicy::Skip`].
    pub skipped_rows: usize,
}

/// Load a `.tsv` or `.csv` interaction table.
///
/// # Errors
///
/// - [`CoreError::InputRead`] if the file cannot be opened or has an
///   unsupported extension.
/// - [`CoreError::UnsupportedInputShape`] if two endpoint columns cannot
///   be resolved.
/// - [`CoreError::MalformedRecord`] for the first bad row under
///   [`RecordPolicy::Fail`].
pub fn load_table(
    path: &Path,
    overrides: &ColumnOverrides,
    policy: RecordPolicy,
) -> Result<LoadedTable, CoreError> {
    let delimiter = delimiter_for(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(|e| into_read_error(e, path))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| into_read_error(e, path))?
        .iter()
        .map(str::to_string)
        .collect();

    let schema = resolve_schema(&headers, overrides)?;
    debug!(?schema, "resolved input columns");

    let a_pos = column_position(&headers, &schema.endpoint_a)?;
    let b_pos = column_position(&headers, &schema.endpoint_b)?;
    let score_pos = match &schema.score {
        Some(name) => Some(column_position(&headers, name)?),
        None => None,
    };

    let mut interactions = Vec::new();
    let mut skipped_rows = 0_usize;

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1; // 1-based data-row number, header excluded
        let record = result.map_err(|e| into_read_error(e, path))?;

        match parse_row(&record, a_pos, b_pos, score_pos) {
            Ok(interaction) => interactions.push(interaction),
            Err(reason) => match policy {
                RecordPolicy::Skip => {
                    warn!(row, %reason, "skipping malformed row");
                    skipped_rows += 1;
                }
                RecordPolicy::Fail => {
                    return Err(CoreError::MalformedRecord { row, reason });
                }
            },
        }
    }

    info!(
        rows = interactions.len(),
        skipped = skipped_rows,
        file = %path.display(),
        "loaded interaction table"
    );

    Ok(LoadedTable {
        interactions,
        schema,
        skipped_rows,
    })
}

/// Pick the delimiter from the file extension.
fn delimiter_for(path: &Path) -> Result<u8, CoreError> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("tsv") => Ok(b'\t'),
        Some("csv") => Ok(b','),
        other => Err(CoreError::InputRead(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "unsupported file type {:?} for {} (use .tsv or .csv)",
                other.unwrap_or("<none>"),
                path.display()
            ),
        ))),
    }
}

/// Resolve the column schema from explicit overrides or header sniffing.
fn resolve_schema(
    headers: &[String],
    overrides: &ColumnOverrides,
) -> Result<ColumnSchema, CoreError> {
    let endpoint_candidates: Vec<&String> = headers
        .iter()
        .filter(|h| {
            let lower = h.to_lowercase();
            lower.contains("protein") || lower.contains("node")
        })
        .collect();

    let endpoint_a = match &overrides.col_a {
        Some(name) => name.clone(),
        None => match endpoint_candidates.first() {
            Some(h) => (*h).clone(),
            None => {
                return Err(CoreError::UnsupportedInputShape {
                    found: headers.to_vec(),
                });
            }
        },
    };

    let endpoint_b = match &overrides.col_b {
        Some(name) => name.clone(),
        None => match endpoint_candidates.get(1) {
            Some(h) => (*h).clone(),
            None => {
                return Err(CoreError::UnsupportedInputShape {
                    found: headers.to_vec(),
                });
            }
        },
    };

    let score = if overrides.no_score {
        None
    } else {
        overrides.score.clone().or_else(|| {
            headers
                .iter()
                .find(|h| h.to_lowercase().contains("score"))
                .cloned()
        })
    };

    Ok(ColumnSchema {
        endpoint_a,
        endpoint_b,
        score,
    })
}

/// Find a header's position, treating a named-but-absent column as a
/// shape problem.
fn column_position(headers: &[String], name: &str) -> Result<usize, CoreError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CoreError::UnsupportedInputShape {
            found: headers.to_vec(),
        })
}

/// Parse one data row into an [`Interaction`], or a reason it is malformed.
fn parse_row(
    record: &csv::StringRecord,
    a_pos: usize,
    b_pos: usize,
    score_pos: Option<usize>,
) -> Result<Interaction, String> {
    let a = record
        .get(a_pos)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("missing endpoint in column {a_pos}"))?;
    let b = record
        .get(b_pos)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("missing endpoint in column {b_pos}"))?;

    let score = match score_pos {
        None => None,
        Some(pos) => match record.get(pos).map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<f64>()
                    .map_err(|_| format!("non-numeric score {raw:?}"))?,
            ),
        },
    };

    Ok(Interaction::new(a, b, score))
}

fn into_read_error(err: csv::Error, path: &Path) -> CoreError {
    CoreError::InputRead(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{}: {err}", path.display()),
    ))
}
