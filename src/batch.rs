//! Batch evaluation of primer pairs listed in a CSV/TSV sheet.
//!
//! The sheet has a header row and the columns `name, forward, reverse`,
//! optionally followed by `target`. Rows are evaluated one after another;
//! a row that fails validation keeps its error message instead of a report,
//! so one bad line never hides the rest of the sheet.
//!
//! [`summary_frame`] turns the outcomes into a polars `DataFrame` for
//! printing or CSV export.
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, warn};

use crate::model::{PrimerPair, Thresholds, UsabilityReport};
use crate::usability::evaluate;

/// One line of the input sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairRow {
    pub name: String,
    pub forward: String,
    pub reverse: String,
    /// Per-row target; overrides the batch-wide target when non-empty.
    pub target: Option<String>,
}

/// Result of evaluating one [`PairRow`].
#[derive(Clone, Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub result: Result<UsabilityReport, String>,
}

/// Load primer pairs from a CSV (or TSV, by `.tsv` extension) file.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<PairRow>> {
    let p = path.as_ref();
    let delim = if p.extension().map(|e| e == "tsv").unwrap_or(false) { b'\t' } else { b',' };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delim)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(p)?;
    let mut rows = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let r = rec?;
        if r.len() < 3 {
            warn!(line = i + 2, fields = r.len(), "skipping row with fewer than 3 fields");
            continue;
        }
        let target = r.get(3).filter(|t| !t.is_empty()).map(str::to_string);
        rows.push(PairRow { name: r[0].to_string(), forward: r[1].to_string(), reverse: r[2].to_string(), target });
    }
    debug!(file = %p.display(), rows = rows.len(), "loaded primer pairs");
    Ok(rows)
}

/// Evaluate every row; `default_target` applies to rows without their own target.
pub fn evaluate_rows(rows: &[PairRow], default_target: Option<&str>, thresholds: &Thresholds) -> Vec<BatchOutcome> {
    rows.iter()
        .map(|row| {
            let target = row.target.as_deref().or(default_target);
            let result = PrimerPair::new(&row.forward, &row.reverse)
                .map(|pair| evaluate(&pair, target, thresholds))
                .map_err(|e| e.to_string());
            if let Err(e) = &result {
                warn!(name = %row.name, error = %e, "primer pair rejected");
            }
            BatchOutcome { name: row.name.clone(), result }
        })
        .collect()
}

/// Tabulate outcomes, one row each. Failed rows carry nulls and the error text.
pub fn summary_frame(outcomes: &[BatchOutcome]) -> PolarsResult<DataFrame> {
    let mut name = Vec::with_capacity(outcomes.len());
    let mut forward_tm: Vec<Option<i32>> = Vec::new();
    let mut reverse_tm: Vec<Option<i32>> = Vec::new();
    let mut ta: Vec<Option<i32>> = Vec::new();
    let mut heterodimer: Vec<Option<bool>> = Vec::new();
    let mut forward_score: Vec<Option<f64>> = Vec::new();
    let mut reverse_score: Vec<Option<f64>> = Vec::new();
    let mut usable = Vec::with_capacity(outcomes.len());
    let mut explanation = Vec::with_capacity(outcomes.len());

    for o in outcomes {
        name.push(o.name.clone());
        match &o.result {
            Ok(r) => {
                forward_tm.push(Some(r.forward.tm));
                reverse_tm.push(Some(r.reverse.tm));
                ta.push(Some(r.pair.annealing_temperature));
                heterodimer.push(Some(r.pair.heterodimer));
                forward_score.push(Some(r.forward.functionality));
                reverse_score.push(Some(r.reverse.functionality));
                usable.push(r.is_usable());
                explanation.push(r.explanation());
            }
            Err(e) => {
                forward_tm.push(None);
                reverse_tm.push(None);
                ta.push(None);
                heterodimer.push(None);
                forward_score.push(None);
                reverse_score.push(None);
                usable.push(false);
                explanation.push(e.clone());
            }
        }
    }

    df!(
        "name"          => name,
        "forward_tm"    => forward_tm,
        "reverse_tm"    => reverse_tm,
        "ta"            => ta,
        "heterodimer"   => heterodimer,
        "forward_score" => forward_score,
        "reverse_score" => reverse_score,
        "usable"        => usable,
        "explanation"   => explanation,
    )
}
