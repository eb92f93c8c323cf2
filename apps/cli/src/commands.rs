//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;
use vstheme_core::pipeline::run_export;
use vstheme_core::table::to_table;
use vstheme_markdown::extract_key_docs;
use vstheme_shared::{
    AppConfig, ExportConfig, VsthemeError, init_config, load_config, load_config_from,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// vstheme: reconcile theme colors with their documentation.
#[derive(Parser)]
#[command(
    name = "vstheme",
    version,
    about = "Merge theme color values with bullet-key documentation from Markdown.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.vstheme/vstheme.toml.
    #[arg(long, global = true, env = "VSTHEME_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Output format for extracted docs.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum DocsFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Merge colors with docs, write the JSON output, and preview the table.
    Export {
        /// Markdown file with bullet-key documentation.
        #[arg(short, long)]
        markdown: Option<PathBuf>,

        /// JSON theme file with color values.
        #[arg(short, long)]
        colors: Option<PathBuf>,

        /// Destination for the merged JSON.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Number of table rows to preview (0 disables the preview).
        #[arg(long)]
        preview_rows: Option<usize>,

        /// Also write the full table as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Fail if any color key is undocumented.
        #[arg(long)]
        strict: bool,
    },

    /// Print the documentation extracted from a Markdown file.
    Docs {
        /// Markdown file with bullet-key documentation.
        #[arg(short, long)]
        markdown: Option<PathBuf>,

        /// Output format: text or json.
        #[arg(long, default_value = "text")]
        format: DocsFormat,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "vstheme=info",
        1 => "vstheme=debug",
        _ => "vstheme=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export {
            markdown,
            colors,
            out,
            preview_rows,
            csv,
            strict,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            let mut export = ExportConfig::from(&config);
            if let Some(path) = markdown {
                export.markdown_path = path;
            }
            if let Some(path) = colors {
                export.colors_path = path;
            }
            if let Some(path) = out {
                export.output_path = path;
            }
            let rows = preview_rows.unwrap_or(config.preview.rows);
            cmd_export(&export, rows, csv.as_deref(), strict)
        }
        Command::Docs { markdown, format } => {
            let config = resolve_config(cli.config.as_deref())?;
            let path = markdown.unwrap_or_else(|| PathBuf::from(&config.paths.markdown));
            cmd_docs(&path, &format)
        }
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(cli.config.as_deref()),
        },
    }
}

fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(p) => load_config_from(p)?,
        None => load_config()?,
    };
    Ok(config)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_export(
    export: &ExportConfig,
    preview_rows: usize,
    csv: Option<&Path>,
    strict: bool,
) -> Result<()> {
    info!(
        markdown = %export.markdown_path.display(),
        colors = %export.colors_path.display(),
        out = %export.output_path.display(),
        "exporting colors with meaning"
    );

    let outcome = run_export(export)?;
    let table = to_table(&outcome.merged);

    if let Some(path) = csv {
        std::fs::write(path, table.to_csv()?)
            .wrap_err_with(|| format!("failed to write CSV to {}", path.display()))?;
        info!(path = %path.display(), rows = table.rows.len(), "wrote CSV table");
    }

    if preview_rows > 0 {
        println!("{}", table.head(preview_rows).render());
    }

    println!("  Output:   {}", export.output_path.display());
    println!("  Coverage: {}", outcome.report);
    if !outcome.report.orphaned.is_empty() {
        println!("  Orphaned: {}", outcome.report.orphaned.join(", "));
    }

    if strict && !outcome.report.is_complete() {
        return Err(eyre!(
            "{} color keys have no documentation: {}",
            outcome.report.undocumented.len(),
            outcome.report.undocumented.join(", ")
        ));
    }

    Ok(())
}

fn cmd_docs(path: &Path, format: &DocsFormat) -> Result<()> {
    println!("{}", render_docs(path, format)?);
    Ok(())
}

/// Extract the docs of a Markdown file and format them for printing.
fn render_docs(path: &Path, format: &DocsFormat) -> Result<String> {
    let markdown = std::fs::read_to_string(path).map_err(|e| VsthemeError::io(path, e))?;
    let docs = extract_key_docs(&markdown);
    info!(path = %path.display(), keys = docs.len(), "extracted docs");

    let rendered = match format {
        DocsFormat::Text => docs
            .iter()
            .map(|(key, doc)| format!("{key}: {doc}"))
            .collect::<Vec<_>>()
            .join("\n"),
        DocsFormat::Json => serde_json::to_string_pretty(&docs)?,
    };

    Ok(rendered)
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(path: Option<&Path>) -> Result<()> {
    let config = resolve_config(path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_flags_parse() {
        let cli = Cli::try_parse_from([
            "vstheme",
            "-vv",
            "export",
            "--markdown",
            "docs/colors.md",
            "--out",
            "merged.json",
            "--preview-rows",
            "3",
            "--strict",
        ])
        .expect("parse");

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Export {
                markdown,
                colors,
                out,
                preview_rows,
                csv,
                strict,
            } => {
                assert_eq!(markdown, Some(PathBuf::from("docs/colors.md")));
                assert_eq!(colors, None);
                assert_eq!(out, Some(PathBuf::from("merged.json")));
                assert_eq!(preview_rows, Some(3));
                assert_eq!(csv, None);
                assert!(strict);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn export_writes_output_and_csv() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let export = ExportConfig {
            markdown_path: dir.path().join("doc.md"),
            colors_path: dir.path().join("theme.json"),
            output_path: dir.path().join("out.json"),
        };
        std::fs::write(&export.markdown_path, "- `bg`: Background.\n").expect("write md");
        std::fs::write(&export.colors_path, r##"{"colors": {"bg": "#000"}}"##)
            .expect("write json");
        let csv_path = dir.path().join("table.csv");

        cmd_export(&export, 5, Some(&csv_path), true).expect("export");

        assert!(export.output_path.exists());
        let csv = std::fs::read_to_string(&csv_path).expect("read csv");
        assert_eq!(csv, "key,color,meaning\nbg,#000,Background.\n");
    }

    #[test]
    fn docs_renders_text_and_json() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("doc.md");
        std::fs::write(
            &path,
            "# Colors\n\n- `bg`: Main\n  background.\n- `fg`: Text.\n- `bg`: Canvas.\n",
        )
        .expect("write md");

        let text = render_docs(&path, &DocsFormat::Text).expect("text");
        assert_eq!(text, "bg: Canvas.\nfg: Text.");

        let json = render_docs(&path, &DocsFormat::Json).expect("json");
        assert_eq!(json, "{\n  \"bg\": \"Canvas.\",\n  \"fg\": \"Text.\"\n}");
    }

    #[test]
    fn docs_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("missing.md");

        let err = render_docs(&path, &DocsFormat::Text).unwrap_err();
        match err.downcast_ref::<VsthemeError>() {
            Some(VsthemeError::Io { path: failed, .. }) => assert_eq!(failed, &path),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn strict_export_fails_on_undocumented_keys() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let export = ExportConfig {
            markdown_path: dir.path().join("doc.md"),
            colors_path: dir.path().join("theme.json"),
            output_path: dir.path().join("out.json"),
        };
        std::fs::write(&export.markdown_path, "").expect("write md");
        std::fs::write(&export.colors_path, r##"{"bg": "#000", "fg": "#fff"}"##)
            .expect("write json");

        let err = cmd_export(&export, 0, None, true).unwrap_err();
        assert!(err.to_string().contains("bg, fg"));
        // The merged file is still written; strictness only affects the exit status.
        assert!(export.output_path.exists());
    }
}
