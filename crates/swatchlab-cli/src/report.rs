//! Table and JSON rendering of evaluation results

use anyhow::{Context, Result};
use serde::Serialize;
use swatchlab_core::{IntentResult, RenderIntent};

/// Results for one input, filtered to the requested intents
#[derive(Debug, Serialize)]
pub struct InputReport {
    pub input: String,
    pub results: Vec<IntentResult>,
}

impl InputReport {
    /// An empty filter keeps every intent
    pub fn new(input: &str, results: Vec<IntentResult>, intents: &[RenderIntent]) -> Self {
        let results = results
            .into_iter()
            .filter(|r| intents.is_empty() || intents.contains(&r.intent))
            .collect();
        Self {
            input: input.to_string(),
            results,
        }
    }
}

const HEADER: [&str; 10] = ["intent", "hex", "L", "a", "b", "C", "M", "Y", "K", "dE00"];

fn format_row(r: &IntentResult) -> String {
    let [c, m, y, k] = r.cmyk.to_array();
    format!(
        "{:<22} {} {:>7.2} {:>7.2} {:>7.2} {:>5.1}% {:>5.1}% {:>5.1}% {:>5.1}% {:>6.2}",
        r.name,
        r.display,
        r.lab.l,
        r.lab.a,
        r.lab.b,
        c * 100.0,
        m * 100.0,
        y * 100.0,
        k * 100.0,
        r.delta_e
    )
}

fn format_header() -> String {
    let [intent, hex, l, a, b, c, m, y, k, de] = HEADER;
    format!(
        "{intent:<22} {hex:<7} {l:>7} {a:>7} {b:>7} {c:>6} {m:>6} {y:>6} {k:>6} {de:>6}"
    )
}

pub fn print_table(reports: &[InputReport]) {
    for (idx, report) in reports.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{}", report.input);
        println!("{}", format_header());
        for r in &report.results {
            println!("{}", format_row(r));
        }
    }
}

pub fn print_json(reports: &[InputReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports).context("Failed to serialize results")?;
    println!("{json}");
    Ok(())
}
