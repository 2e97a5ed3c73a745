use political_space::{
    calculate_position, sample_positions, AxisAffinities, PoliticalAxis, SceneDescription,
    SpaceConfig, SpaceParams,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::io::{self, BufWriter, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "political-space", version, about = "Describe the political-space cube as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the scene for a URL query string.
    Scene {
        /// e.g. `title=Me&location=60,200,30&vectors[0]=0,0,0`
        #[arg(long, default_value = "")]
        query: String,
        /// JSON file overriding the cube and marker dimensions.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Print the position for a fundamental axis and four affinities.
    Position {
        #[arg(long)]
        axis: usize,
        #[arg(long, value_delimiter = ',')]
        affinities: Vec<f32>,
        /// Reject affinities outside [0, 1].
        #[arg(long)]
        strict: bool,
    },
    /// Print one JSON line per position on an affinity grid.
    Sample {
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
        step: u32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "political_space=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut out = BufWriter::new(io::stdout().lock());

    match cli.command {
        Command::Scene {
            query,
            config,
            pretty,
        } => {
            let config = match config {
                Some(path) => {
                    let json = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    SpaceConfig::from_json(&json)?
                }
                None => SpaceConfig::default(),
            };
            let params = SpaceParams::parse(&query)?;
            let scene = SceneDescription::build(&config, &params)?;
            writeln!(out, "{}", scene.to_json(pretty)?)?;
        }
        Command::Position {
            axis,
            affinities,
            strict,
        } => {
            let axis = PoliticalAxis::try_from(axis)?;
            let affinities: [f32; 4] = affinities
                .try_into()
                .map_err(|v: Vec<f32>| anyhow::anyhow!("expected 4 affinities, found {}", v.len()))?;
            let affinities = AxisAffinities::new(affinities);
            if strict {
                affinities.validate()?;
            }
            let position = calculate_position(axis, &affinities);
            writeln!(out, "{}", json!(position.to_array()))?;
        }
        Command::Sample { step } => {
            let step = NonZeroU32::new(step).context("sample step must be positive")?;
            for sample in sample_positions(step) {
                let line = json!({
                    "axis": sample.axis.index(),
                    "affinities": sample.affinities.to_array(),
                    "position": sample.position.to_array(),
                });
                writeln!(out, "{line}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
