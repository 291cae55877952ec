//! CLI logic for the stencil figure generator.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, CliCommand};
pub use config::ConfigError;

use std::path::{Path, PathBuf};

use thiserror::Error;

use stencil::{
    StencilError,
    batch::{Job, run_batch},
    config::AppConfig,
    logos::{DEFAULT_MANIFEST, LogoFetcher},
    model::DiagramSpec,
    render::{Background, MermaidRenderer, RenderTarget, Renderer, SvgRenderer},
};
use stencil_figures::{FIGURES, Figure, Strategy, by_id};

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Stencil(#[from] StencilError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown figure id `{id}`")]
    UnknownFigure { id: String },

    #[error("only {succeeded} of {total} figures succeeded")]
    Batch { succeeded: usize, total: usize },
}

/// Run the stencil CLI application.
///
/// # Errors
///
/// Returns `CliError` for configuration errors, unknown figure ids,
/// and partially or fully failed batch runs.
pub fn run(args: &Args) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        CliCommand::Render { figures, out_dir } => {
            render_figures(figures, out_dir.as_deref(), &app_config)
        }
        CliCommand::List => {
            list_figures();
            Ok(())
        }
        CliCommand::Logos { dest } => fetch_logos(dest),
    }
}

fn list_figures() {
    for figure in FIGURES {
        println!("{:<20} {}", figure.id(), figure.title());
    }
}

fn render_figures(
    ids: &[String],
    out_dir_override: Option<&Path>,
    app_config: &AppConfig,
) -> Result<(), CliError> {
    let selection: Vec<&'static Figure> = if ids.is_empty() {
        FIGURES.iter().collect()
    } else {
        ids.iter()
            .map(|id| {
                by_id(id).ok_or_else(|| CliError::UnknownFigure { id: id.clone() })
            })
            .collect::<Result<_, _>>()?
    };

    let out_dir: PathBuf = out_dir_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| app_config.render().out_dir().clone());

    let background = app_config
        .style()
        .background_color()
        .map_err(StencilError::Config)?;

    let mermaid_renderer = MermaidRenderer::new(app_config.render().command());
    let svg_renderer = SvgRenderer::new();

    // Specs are built once and owned for the duration of the batch
    let specs: Vec<(&Figure, DiagramSpec)> = selection
        .iter()
        .map(|figure| (*figure, figure.spec()))
        .collect();

    let jobs = specs.iter().map(|(figure, spec)| {
        let mut target = RenderTarget::new(
            out_dir.join(format!("{}.png", figure.output())),
            figure.width(),
            figure.height(),
        )
        .with_scale(figure.scale());

        if let Some(color) = &background {
            target = target.with_background(Background::Opaque(color.clone()));
        }

        let renderer: &dyn Renderer = match figure.strategy() {
            Strategy::Mermaid => &mermaid_renderer,
            Strategy::Svg => &svg_renderer,
        };

        Job::new(figure.id(), spec, renderer, target)
    });

    let summary = run_batch(jobs);
    println!("{}", summary.report());
    for (name, err) in summary.failures() {
        println!("  {name}: {err}");
    }

    if summary.is_all_ok() {
        Ok(())
    } else {
        Err(CliError::Batch {
            succeeded: summary.succeeded(),
            total: summary.total(),
        })
    }
}

fn fetch_logos(dest: &Path) -> Result<(), CliError> {
    let fetcher = LogoFetcher::default();
    let summary = fetcher.fetch_all(dest, DEFAULT_MANIFEST)?;

    println!("{}", summary.report());
    for (name, err) in summary.failed() {
        println!("  {name}: {err}");
    }

    Ok(())
}
