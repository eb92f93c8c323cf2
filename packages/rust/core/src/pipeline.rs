//! End-to-end export pipeline: Markdown + theme JSON → merged JSON file.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, instrument};

use vstheme_markdown::extract_key_docs;
use vstheme_shared::{ColorMap, ExportConfig, MergedMap, Result, VsthemeError};

use crate::merge::{MergeReport, merge_colors_with_docs};

/// Field holding the color table in a full theme definition.
const COLORS_FIELD: &str = "colors";

/// Run the full export pipeline.
///
/// 1. Read the Markdown documentation
/// 2. Read and parse the theme JSON
/// 3. Resolve the color map (top level or nested under `colors`)
/// 4. Extract bullet-key docs and merge them with the colors
/// 5. Write the merged map as pretty-printed JSON
///
/// Any failure aborts before the output file is touched.
pub fn export_colors_with_meaning(config: &ExportConfig) -> Result<MergedMap> {
    run_export(config).map(|outcome| outcome.merged)
}

/// Result of an export run.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// The merged map, as written to the output file.
    pub merged: MergedMap,
    /// Documentation coverage of the theme.
    pub report: MergeReport,
}

/// Run the export pipeline and also return its coverage report.
#[instrument(skip_all, fields(
    markdown = %config.markdown_path.display(),
    colors = %config.colors_path.display(),
))]
pub fn run_export(config: &ExportConfig) -> Result<ExportOutcome> {
    let markdown = read_text(&config.markdown_path)?;
    let colors_json = read_text(&config.colors_path)?;

    let theme: Value = serde_json::from_str(&colors_json)
        .map_err(|e| VsthemeError::parse(&config.colors_path, e))?;
    let colors = resolve_color_map(theme)?;
    let ExportOutcome { merged, report } = merge_markdown(&markdown, &colors);

    // Encode fully before opening the destination.
    let encoded = serde_json::to_string_pretty(&merged)?;
    std::fs::write(&config.output_path, encoded)
        .map_err(|e| VsthemeError::io(&config.output_path, e))?;

    info!(
        output = %config.output_path.display(),
        keys = merged.len(),
        "wrote merged color documentation"
    );

    Ok(ExportOutcome { merged, report })
}

/// In-memory pipeline: merge Markdown text with theme JSON text.
///
/// Malformed JSON surfaces as [`VsthemeError::InvalidJson`].
pub fn merge_sources(markdown: &str, colors_json: &str) -> Result<MergedMap> {
    let theme: Value = serde_json::from_str(colors_json)
        .map_err(|source| VsthemeError::InvalidJson { source })?;
    let colors = resolve_color_map(theme)?;
    Ok(merge_markdown(markdown, &colors).merged)
}

/// Pick the color map out of a parsed theme.
///
/// A `colors` field holding an object wins; otherwise the top-level object is
/// the color map. Any non-object top level is rejected.
pub fn resolve_color_map(theme: Value) -> Result<ColorMap> {
    let mut top = match theme {
        Value::Object(map) => map,
        other => {
            return Err(VsthemeError::invalid_shape(format!(
                "expected a JSON object at the top level, found {}",
                json_type_name(&other)
            )));
        }
    };

    match top.get_mut(COLORS_FIELD) {
        Some(Value::Object(nested)) => {
            debug!(keys = nested.len(), "using nested `colors` object");
            Ok(std::mem::take(nested))
        }
        // A non-object `colors` value is an ordinary color key.
        _ => {
            debug!(keys = top.len(), "using top-level object as color map");
            Ok(top)
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn merge_markdown(markdown: &str, colors: &ColorMap) -> ExportOutcome {
    let docs = extract_key_docs(markdown);
    let report = MergeReport::from_maps(colors, &docs);
    info!(
        colors = colors.len(),
        documented = report.documented,
        undocumented = report.undocumented.len(),
        orphaned = report.orphaned.len(),
        "merging colors with docs"
    );
    ExportOutcome {
        merged: merge_colors_with_docs(colors, &docs),
        report,
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| VsthemeError::io(path, e))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
