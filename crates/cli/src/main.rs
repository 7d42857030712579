use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glyphstroke::{analyze_batch, StrokeCfg};
use serde_json::json;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod glyphs;
mod provenance;

use glyphs::{GlyphFile, Report};
use provenance::{current_git_rev, Params, RunRecord};

#[derive(Parser)]
#[command(name = "glyphstroke")]
#[command(about = "Reconstruct stroke cuts from glyph outlines")]
struct Cmd {
    /// More logging: -v per glyph, -vv per evaluated crossing
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

/// Extraction thresholds (font units / multiples of π).
#[derive(Args, Clone, Copy, Debug)]
struct Tunables {
    /// Cusps farther apart than this are never joined
    #[arg(long, default_value_t = 64.0)]
    max_crossing_distance: f64,
    /// Max straight and along-outline distance of cusps that get merged
    #[arg(long, default_value_t = 15.0)]
    max_cusp_merge_distance: f64,
    /// Min |turning angle| of a cusp, in multiples of π
    #[arg(long, default_value_t = 0.1)]
    min_cusp_angle_pi: f64,
}

impl Tunables {
    fn to_cfg(self) -> StrokeCfg {
        StrokeCfg {
            max_crossing_distance: self.max_crossing_distance,
            max_cusp_merge_distance: self.max_cusp_merge_distance,
            min_cusp_angle: self.min_cusp_angle_pi * PI,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Analyze every glyph of a JSON glyph file and write a JSON report
    Analyze {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Worker threads (glyphs are independent)
        #[arg(long, default_value_t = 1)]
        jobs: usize,
        #[command(flatten)]
        tunables: Tunables,
    },
    /// Print a small provenance JSON block with the effective configuration
    Report {
        #[command(flatten)]
        tunables: Tunables,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Analyze {
            input,
            out,
            jobs,
            tunables,
        } => analyze(&input, &out, jobs, tunables.to_cfg()),
        Action::Report { tunables } => report(tunables.to_cfg()),
    }
}

fn analyze(input: &Path, out: &Path, jobs: usize, cfg: StrokeCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), jobs, "analyze");
    let inputs = GlyphFile::read(input)?.into_inputs();
    let results = analyze_batch(&inputs, &cfg, jobs).context("analyzing glyphs")?;
    let report = Report::from_results(&inputs, results);
    tracing::info!(
        glyphs = report.glyphs.len(),
        failed = report.failed(),
        "analyze_done"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let sidecar = RunRecord::new(Params::new(&cfg, Some(jobs)), input, out, &report)?.write()?;
    tracing::debug!(sidecar = %sidecar.display(), "provenance");
    Ok(())
}

fn report(cfg: StrokeCfg) -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "version": glyphstroke::VERSION,
        "params": Params::new(&cfg, None),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
