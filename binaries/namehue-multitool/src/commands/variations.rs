use clap::Parser;
use namehue_core::{Report, explore_with_rng};
use serde::Serialize;

use crate::shared::GlobalArgs;

#[derive(Parser)]
pub struct Args {
    name: String,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    name: &'a str,
    rows: Vec<Row<'a>>,
    missing: usize,
    advisory: Option<String>,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    ordinal: usize,
    color: &'a str,
    found: bool,
    text: &'a str,
}

pub fn run(args: Args, global: &GlobalArgs) -> anyhow::Result<()> {
    let config = global.load_config()?;
    let name = global.accept_name(&args.name)?;
    let report = explore_with_rng(name, &config, global.rng());
    let output = build_output(name, &report);
    tracing::info!(missing = output.missing, "searched for case variations");
    global.print(&output)
}

fn build_output<'a>(name: &'a str, report: &'a Report) -> Output<'a> {
    Output {
        name,
        rows: report
            .rows
            .iter()
            .map(|row| Row {
                ordinal: row.ordinal,
                color: &row.color,
                found: row.example.is_some(),
                text: row.text(),
            })
            .collect(),
        missing: report.missing(),
        advisory: report.advisory(),
    }
}

#[cfg(test)]
mod tests {
    use namehue_core::{HueConfig, NOT_FOUND_PLACEHOLDER};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn seeded_rows_for_two_letters() {
        let config = HueConfig::default();
        let report = explore_with_rng("AB", &config, StdRng::seed_from_u64(8));
        let output = build_output("AB", &report);

        assert_eq!(output.rows.len(), 10);
        let ordinals: Vec<_> = output.rows.iter().map(|row| row.ordinal).collect();
        assert_eq!(ordinals, (1..=10).collect::<Vec<_>>());
        assert_eq!(output.rows[0].color, "#aaaaaa");
        // AB -> index 1, ab -> index 5, Ab/aB -> index 3
        assert_eq!(output.rows[1].text, "AB");
        assert_eq!(output.rows[5].text, "ab");
        assert!(output.rows[3].found);
        assert!(!output.rows[0].found);
        assert_eq!(output.rows[0].text, NOT_FOUND_PLACEHOLDER);
        assert_eq!(output.missing, 7);
        assert_eq!(
            output.advisory.as_deref(),
            Some("Could not find variations for 7 colors. Try a different username.")
        );
    }

    #[test]
    fn blank_name_has_no_rows() {
        let config = HueConfig::default();
        let report = explore_with_rng("", &config, StdRng::seed_from_u64(0));
        let output = build_output("", &report);
        assert!(output.rows.is_empty());
        assert_eq!(output.missing, 0);
        assert_eq!(output.advisory, None);
    }

    #[test]
    fn serializes_rows_as_json() {
        let config = HueConfig::default();
        let report = explore_with_rng("12345", &config, StdRng::seed_from_u64(1));
        let json = serde_json::to_value(build_output("12345", &report)).expect("json");
        assert_eq!(json["missing"], 9);
        assert_eq!(json["rows"][5]["text"], "12345");
        assert_eq!(json["rows"][5]["ordinal"], 6);
        assert_eq!(json["rows"][0]["found"], false);
    }
}
