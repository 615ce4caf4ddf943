use std::io::{BufWriter, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::{
    AtriumError,
    design_assistant::{
        RecommendationBundle, RecommendationEngine, Selection, swatch::swatch_hex,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    selection: &'a Selection,
    recommendations: &'a RecommendationBundle,
}

/// Generate recommendations for `selection` and write them to `out`.
///
/// An incomplete selection fails before anything is written.
pub fn recommend<W: Write>(
    out: W,
    engine: &RecommendationEngine,
    selection: &Selection,
    format: OutputFormat,
) -> Result<(), AtriumError> {
    let bundle = engine.generate(selection)?;
    write_recommendations(out, selection, &bundle, format)
}

/// Write a generated recommendation to `out` as plain text or JSON.
pub fn write_recommendations<W: Write>(
    out: W,
    selection: &Selection,
    bundle: &RecommendationBundle,
    format: OutputFormat,
) -> Result<(), AtriumError> {
    let mut writer = BufWriter::new(out);
    match format {
        OutputFormat::Json => {
            let report = JsonReport {
                selection,
                recommendations: bundle,
            };
            serde_json::to_writer_pretty(&mut writer, &report)
                .map_err(|e| AtriumError::OutputSerializeError { source: e })?;
            writeln!(writer).map_err(|e| AtriumError::WriterError { source: e })?;
        }
        OutputFormat::Text => write_text(&mut writer, selection, bundle)
            .map_err(|e| AtriumError::WriterError { source: e })?,
    }
    writer
        .flush()
        .map_err(|e| AtriumError::WriterError { source: e })
}

fn write_text<W: Write>(
    writer: &mut W,
    selection: &Selection,
    bundle: &RecommendationBundle,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "Your selections: {} | {} | {} | {}",
        selection.room_type, selection.style, selection.color_scheme, selection.budget
    )?;

    writeln!(writer, "\nRecommended Colors")?;
    for color in &bundle.colors {
        writeln!(writer, "  {} {}", swatch_hex(color), color)?;
    }

    let sections = [
        ("Furniture Essentials", &bundle.furniture),
        ("Lighting Suggestions", &bundle.lighting),
        ("Decor & Styling", &bundle.decor),
        ("Layout Tips", &bundle.layout),
    ];
    for (title, items) in sections {
        writeln!(writer, "\n{}", title)?;
        for item in items {
            writeln!(writer, "  - {}", item)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kitchen() -> (Selection, RecommendationBundle) {
        let selection = Selection::new("Kitchen", "Industrial", "Black & White", "$15,000+");
        let bundle = RecommendationEngine::new().generate(&selection).unwrap();
        (selection, bundle)
    }

    #[test]
    fn test_text_report_lists_every_section() {
        let (selection, bundle) = kitchen();
        let mut out = Vec::new();
        write_recommendations(&mut out, &selection, &bundle, OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Your selections: Kitchen | Industrial | Black & White | $15,000+"));
        assert!(text.contains("  #000000 Charcoal black"));
        for title in [
            "Recommended Colors",
            "Furniture Essentials",
            "Lighting Suggestions",
            "Decor & Styling",
            "Layout Tips",
        ] {
            assert!(text.contains(title), "missing section {title}");
        }
        assert!(text.contains("  - Follow the work triangle principle (sink, stove, fridge)"));
    }

    #[test]
    fn test_json_report_contains_selection_and_bundle() {
        let (selection, bundle) = kitchen();
        let mut out = Vec::new();
        write_recommendations(&mut out, &selection, &bundle, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["selection"]["room_type"], "Kitchen");
        assert_eq!(value["recommendations"]["colors"][1], "Charcoal black");

        let parsed: RecommendationBundle =
            serde_json::from_value(value["recommendations"].clone()).unwrap();
        assert_eq!(parsed, bundle);
    }

    #[test]
    fn test_recommend_writes_generated_bundle() {
        let engine = RecommendationEngine::new();
        let selection = Selection::new("Bathroom", "Art Deco", "Blue & White", "$5,000-$15,000");
        let mut out = Vec::new();
        recommend(&mut out, &engine, &selection, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["recommendations"]["furniture"][0], "Vanity cabinet");
        assert_eq!(
            value["recommendations"]["layout"][0],
            "Consider functionality and flow in your layout"
        );
    }

    #[test]
    fn test_recommend_incomplete_selection_writes_nothing() {
        let engine = RecommendationEngine::new();
        let selection = Selection::new("", "Modern", "Earthy Tones", "Under $1,000");

        for format in [OutputFormat::Text, OutputFormat::Json] {
            let mut out = Vec::new();
            match recommend(&mut out, &engine, &selection, format) {
                Err(AtriumError::IncompleteSelection { missing }) => {
                    assert_eq!(missing, vec!["room type"]);
                }
                other => panic!("Expected IncompleteSelection, got {other:?}"),
            }
            assert!(out.is_empty(), "nothing should be written for {format:?}");
        }
    }
}
