use std::io::Write;

use serde::Serialize;

use crate::batch::PairResult;
use crate::config::Config;
use crate::distance::DistanceMatrix;
use crate::suggest::Suggestion;

pub const SCHEMA_VERSION: u32 = 1;

/// JSON output wrapper with schema version.
#[derive(Serialize)]
struct JsonOutput<'a, T: Serialize> {
    schema_version: u32,
    #[serde(flatten)]
    body: &'a T,
}

#[derive(Debug, Serialize)]
pub struct DistanceReport<'a> {
    pub a: &'a str,
    pub b: &'a str,
    pub distance: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<&'a [usize]>>,
}

#[derive(Debug, Serialize)]
pub struct SimilarityReport<'a> {
    pub a: &'a str,
    pub b: &'a str,
    pub distance: usize,
    pub normalized_distance: f64,
    pub similarity: f64,
}

#[derive(Debug, Serialize)]
pub struct SuggestReport<'a> {
    pub query: &'a str,
    pub max_distance: usize,
    pub suggestions: &'a [Suggestion],
}

#[derive(Debug, Serialize)]
pub struct BatchReport<'a> {
    pub results: &'a [PairResult],
}

#[derive(Debug, Serialize)]
pub struct ConfigReport<'a> {
    pub source: Option<&'a str>,
    pub config: &'a Config,
}

/// Write a report as a single line of JSON.
pub fn write_json<T: Serialize>(body: &T, mut w: impl Write) -> std::io::Result<()> {
    let output = JsonOutput {
        schema_version: SCHEMA_VERSION,
        body,
    };
    serde_json::to_writer(&mut w, &output)?;
    writeln!(w)?;
    Ok(())
}

/// Render the matrix as a text grid: `b` across the top, `a` down the side,
/// `ε` for the empty prefix.
pub fn write_matrix(
    a: &str,
    b: &str,
    matrix: &DistanceMatrix,
    mut w: impl Write,
) -> std::io::Result<()> {
    let width = matrix.max_cell().to_string().len();

    let header: String = std::iter::once('ε')
        .chain(b.chars())
        .map(|c| format!(" {:>width$}", label(c)))
        .collect();
    writeln!(w, "{:>width$}{header}", "")?;

    let row_labels = std::iter::once('ε').chain(a.chars());
    for (c, row) in row_labels.zip(matrix.iter_rows()) {
        let cells: String = row.iter().map(|v| format!(" {v:>width$}")).collect();
        writeln!(w, "{:>width$}{cells}", label(c))?;
    }
    Ok(())
}

/// Whitespace and control characters would break the grid.
fn label(c: char) -> String {
    if c.is_whitespace() || c.is_control() {
        '·'.to_string()
    } else {
        c.to_string()
    }
}
