use clap::{Args, ValueEnum};
use claimdiff_core::{
    compare_claims, load_claim, render_report, ClaimDiff, ClaimDiffError, ClaimSide,
    CompareConfig, CompareOptions, ExError, LoadedClaim, PluginComparison,
};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First claim file to compare
    #[arg(short = '1', long = "claim1")]
    pub claim1: PathBuf,

    /// Second claim file to compare
    #[arg(short = '2', long = "claim2")]
    pub claim2: PathBuf,

    /// How same-named CNI entries are compared
    #[arg(long, value_enum, default_value_t = PluginComparisonArg::LengthOnly)]
    pub plugin_comparison: PluginComparisonArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PluginComparisonArg {
    LengthOnly,
    Structural,
}

impl From<PluginComparisonArg> for PluginComparison {
    fn from(arg: PluginComparisonArg) -> Self {
        match arg {
            PluginComparisonArg::LengthOnly => PluginComparison::LengthOnly,
            PluginComparisonArg::Structural => PluginComparison::Structural,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&CompareArgs> for CompareConfig {
    fn from(args: &CompareArgs) -> Self {
        CompareConfig::new(&args.claim1, &args.claim2).with_options(CompareOptions {
            plugin_comparison: args.plugin_comparison.into(),
        })
    }
}

/// Identity of one input file in JSON output
#[derive(Debug, Serialize)]
struct ClaimSource<'a> {
    path: String,
    sha256: &'a str,
}

impl<'a> From<&'a LoadedClaim> for ClaimSource<'a> {
    fn from(claim: &'a LoadedClaim) -> Self {
        Self {
            path: claim.path.display().to_string(),
            sha256: &claim.source_digest,
        }
    }
}

#[derive(Debug, Serialize)]
struct ComparisonOutput<'a> {
    claim1: ClaimSource<'a>,
    claim2: ClaimSource<'a>,
    diff: &'a ClaimDiff,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = CompareConfig::from(&args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, args.format, &mut out)
}

/// Load both claims, diff them and write the result to `out`.
///
/// Differences are not an error; only unreadable or malformed input is.
pub fn run(
    config: &CompareConfig,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let claim1 = load_side(&config.claim1_path, ClaimSide::Claim1)?;
    let claim2 = load_side(&config.claim2_path, ClaimSide::Claim2)?;

    let diff = compare_claims(&claim1.document, &claim2.document, config.options);

    match format {
        OutputFormat::Text => {
            for line in render_report(&diff) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            let output = ComparisonOutput {
                claim1: ClaimSource::from(&claim1),
                claim2: ClaimSource::from(&claim2),
                diff: &diff,
            };
            serde_json::to_writer_pretty(&mut *out, &output)
                .map_err(|e| ExError::from(ClaimDiffError::from(e)).with_op("compare"))?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn load_side(path: &Path, side: ClaimSide) -> Result<LoadedClaim, ExError> {
    load_claim(path).map_err(|e| ExError::from(e).with_side(side))
}
