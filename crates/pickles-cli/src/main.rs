//! Pickles command-line entry point.
//!
//! Parses the command line, merges it with an optional settings file, builds
//! the run configuration and reports it.  Rendering is done downstream from
//! the resulting configuration.
//!
//! # Usage
//!
//! ```text
//! pickles [OPTIONS]
//!
//! Options:
//!   -f, --feature-directory <DIR>          Directory containing .feature files
//!   -o, --output-directory <DIR>           Directory for the generated documentation
//!       --documentation-format <FORMAT>    Html, Word, Json, Excel, Dhtml, Cucumber, Markdown
//!       --link-results-file <FILE[;FILE]>  Test-result file(s) to link
//!       --test-results-format <FORMAT>     NUnit, NUnit3, xUnit, xUnit2, MsTest, ...
//!       --system-under-test-name <NAME>
//!       --system-under-test-version <VER>
//!       --language <CODE>                  Gherkin language of the feature files
//!       --exclude-tags <EXPR>
//!       --hide-tags <EXPR>
//!       --enable-experimental-features
//!       --disable-experimental-features
//!       --enable-comments <BOOL>
//!       --settings <FILE>                  TOML settings file
//!       --print-config <toml|json>         Print the resulting configuration
//! ```
//!
//! Each option can also be supplied through the `PICKLES_*` environment
//! variable shown in `--help`; the flag wins when both are present.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pickles_cli::bootstrap::{build_configuration, Invocation};
use pickles_cli::report::{ConfigurationReport, ReportFormat};
use pickles_cli::settings::load_invocation;
use pickles_core::{
    Arguments, DefaultLanguageRegistry, DocumentationFormat, DocumentationSettings,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Living documentation generator for Gherkin feature files.
#[derive(Debug, Parser)]
#[command(name = "pickles", version)]
struct Cli {
    /// Directory containing the `.feature` files.
    #[arg(short = 'f', long, visible_alias = "feature-dir", env = "PICKLES_FEATURE_DIRECTORY")]
    feature_directory: Option<PathBuf>,

    /// Directory the documentation is written to.
    #[arg(short = 'o', long, visible_alias = "output-dir", env = "PICKLES_OUTPUT_DIRECTORY")]
    output_directory: Option<PathBuf>,

    /// Output rendering format (case-insensitive).
    #[arg(long, visible_alias = "df", env = "PICKLES_DOCUMENTATION_FORMAT")]
    documentation_format: Option<DocumentationFormat>,

    /// Test-result file to link; repeat the flag or separate paths with `;`.
    ///
    /// Files that do not exist are reported and skipped.
    #[arg(long, visible_alias = "lr", value_delimiter = ';')]
    link_results_file: Vec<PathBuf>,

    /// Format of the linked test-result files (case-insensitive).
    #[arg(long, visible_alias = "trfmt", env = "PICKLES_TEST_RESULTS_FORMAT")]
    test_results_format: Option<String>,

    /// Name of the system under test.
    #[arg(long, visible_alias = "sn", env = "PICKLES_SYSTEM_UNDER_TEST_NAME")]
    system_under_test_name: Option<String>,

    /// Version of the system under test.
    #[arg(long, visible_alias = "sv", env = "PICKLES_SYSTEM_UNDER_TEST_VERSION")]
    system_under_test_version: Option<String>,

    /// Gherkin language code of the feature files, e.g. `fr`.
    #[arg(long, visible_alias = "lang", env = "PICKLES_LANGUAGE")]
    language: Option<String>,

    /// Tag expression for scenarios to exclude.
    #[arg(long, visible_alias = "et")]
    exclude_tags: Option<String>,

    /// Tag expression for tags to hide in the output.
    #[arg(long, visible_alias = "ht")]
    hide_tags: Option<String>,

    /// Turn on experimental rendering and parsing features.
    #[arg(long, visible_alias = "exp")]
    enable_experimental_features: bool,

    /// Turn experimental features off, overriding the settings file.
    #[arg(long, conflicts_with = "enable_experimental_features")]
    disable_experimental_features: bool,

    /// Include Gherkin comments in the output (`true` or `false`).
    #[arg(long, visible_alias = "cmt")]
    enable_comments: Option<bool>,

    /// TOML settings file; flags override its values.
    #[arg(long, env = "PICKLES_SETTINGS")]
    settings: Option<PathBuf>,

    /// Print the resulting configuration to stdout.
    #[arg(long, value_enum)]
    print_config: Option<ReportFormat>,
}

impl Cli {
    /// Converts the parsed flags into an [`Invocation`].
    ///
    /// Leaving out both experimental flags defers to the settings file.
    fn into_invocation(self) -> Invocation {
        Invocation {
            feature_directory: self.feature_directory,
            output_directory: self.output_directory,
            documentation_format: self.documentation_format,
            system_under_test_version: self.system_under_test_version,
            test_results_files: self.link_results_file,
            experimental_features: match (
                self.enable_experimental_features,
                self.disable_experimental_features,
            ) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            comments: self.enable_comments,
            arguments: Arguments {
                exclude_tags: self.exclude_tags,
                hide_tags: self.hide_tags,
                system_under_test_name: self.system_under_test_name,
                test_results_format: self.test_results_format,
                language: self.language,
            },
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Level is overridden by `RUST_LOG`.  Logs go to stderr so that
    // `--print-config` output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings_path = cli.settings.clone();
    let print_config = cli.print_config;

    let from_file = match &settings_path {
        Some(path) => load_invocation(path)
            .with_context(|| format!("failed to load settings file {}", path.display()))?,
        None => Invocation::default(),
    };
    let invocation = cli.into_invocation().or(from_file);

    let registry = DefaultLanguageRegistry::new();
    let config =
        build_configuration(&invocation, &registry).context("invalid configuration arguments")?;

    if !config.has_test_results() {
        info!("no test results linked; documentation will not show pass/fail status");
    }

    if let Some(format) = print_config {
        let rendered = ConfigurationReport::from_settings(&config)
            .render(format)
            .context("failed to render configuration")?;
        println!("{rendered}");
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
