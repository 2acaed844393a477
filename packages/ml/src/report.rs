//! Human-readable rendering of evaluation results

use crate::config::default_report_decimals;
use crate::metrics::confusion_matrix::ConfusionMatrix;
use crate::{ClassificationReport, PredictionRecord, RegressionScore};
use std::fmt;

impl fmt::Display for RegressionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or_else(default_report_decimals);
        writeln!(f, "Score (R²): {:.p$}", self.r2)?;
        writeln!(f, "MSE:  {:.p$}", self.mse)?;
        writeln!(f, "RMSE: {:.p$}", self.rmse)?;
        writeln!(f, "MAE:  {:.p$}", self.mae)?;
        write!(f, "Samples: {}", self.n_samples)
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or_else(default_report_decimals);
        writeln!(f, "Absolute amount of errors: {}", self.error_count)?;
        writeln!(f, "Accuracy:  {:.p$}", self.accuracy)?;
        if let Some(precision) = self.precision {
            writeln!(f, "Precision: {:.p$}", precision)?;
        }
        if let Some(recall) = self.recall {
            writeln!(f, "Recall:    {:.p$}", recall)?;
        }
        write!(f, "Confusion matrix: {}", self.confusion_matrix)
    }
}

/// Nested-list form, e.g. `[[1, 0], [1, 2]]`
impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, count) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{count}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Two column table of raw prediction against ground truth, one row per example
pub fn render_prediction_table(records: &[PredictionRecord], decimals: usize) -> String {
    let width = "Ground Truth".len();
    let mut out = String::new();
    let rule = format!("+-{}-+-{}-+\n", "-".repeat(width), "-".repeat(width));

    out.push_str(&rule);
    out.push_str(&format!(
        "| {:>width$} | {:>width$} |\n",
        "Prediction", "Ground Truth"
    ));
    out.push_str(&rule);
    for record in records {
        out.push_str(&format!(
            "| {:>width$.decimals$} | {:>width$} |\n",
            record.raw, record.truth
        ));
    }
    out.push_str(&rule);
    out
}

impl ConfusionMatrix {
    /// Grid with class names on both axes: rows are predictions, columns truth
    ///
    /// For two classes every cell is annotated relative to class 0 being
    /// positive. Missing names fall back to the class index.
    pub fn render_labeled(&self, class_names: &[&str]) -> String {
        let n = self.num_classes();
        let names: Vec<String> = (0..n)
            .map(|i| {
                class_names
                    .get(i)
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| i.to_string())
            })
            .collect();

        let cell_text = |predicted: usize, truth: usize| -> String {
            let count = self.get(predicted, truth).unwrap_or(0);
            match (n, predicted, truth) {
                (2, 0, 0) => format!("{count} (true positives)"),
                (2, 0, 1) => format!("{count} (false positives)"),
                (2, 1, 0) => format!("{count} (false negatives)"),
                (2, 1, 1) => format!("{count} (true negatives)"),
                _ => count.to_string(),
            }
        };

        let label_width = names
            .iter()
            .map(String::len)
            .chain(std::iter::once("predicted \\ truth".len()))
            .max()
            .unwrap_or(0);
        let cell_width = (0..n)
            .flat_map(|p| (0..n).map(move |t| (p, t)))
            .map(|(p, t)| cell_text(p, t).len())
            .chain(names.iter().map(String::len))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("{:>label_width$} |", "predicted \\ truth"));
        for name in &names {
            out.push_str(&format!(" {:>cell_width$} |", name));
        }
        out.push('\n');
        for (predicted, name) in names.iter().enumerate() {
            out.push_str(&format!("{:>label_width$} |", name));
            for truth in 0..n {
                out.push_str(&format!(" {:>cell_width$} |", cell_text(predicted, truth)));
            }
            out.push('\n');
        }
        out
    }
}
