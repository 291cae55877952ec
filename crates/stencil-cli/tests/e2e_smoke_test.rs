use std::{fs, io::Write, path::Path};

use tempfile::tempdir;

use stencil_cli::{Args, CliCommand, CliError, run};

fn render_args(figures: &[&str], out_dir: &Path, config: Option<&Path>) -> Args {
    Args {
        command: CliCommand::Render {
            figures: figures.iter().map(|s| (*s).to_string()).collect(),
            out_dir: Some(out_dir.to_path_buf()),
        },
        config: config.map(|p| p.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_svg_figures_render_end_to_end() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("images");

    let args = render_args(
        &["customer-usecase", "agency-usecase", "admin-usecase"],
        &out_dir,
        None,
    );

    run(&args).expect("direct-drawing figures should render without external tools");

    for stem in [
        "customer-usecase-diagram",
        "agency-usecase-diagram",
        "admin-usecase-diagram",
    ] {
        let png = out_dir.join(format!("{stem}.png"));
        let svg = out_dir.join(format!("{stem}.svg"));
        assert!(png.exists(), "missing {}", png.display());
        assert!(svg.exists(), "missing {}", svg.display());

        let bytes = fs::read(&png).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "{stem} is not a PNG");
    }
}

#[test]
fn e2e_unknown_figure_id_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = render_args(&["figure-x"], temp_dir.path(), None);

    let err = run(&args).unwrap_err();
    assert!(matches!(err, CliError::UnknownFigure { id } if id == "figure-x"));
}

#[test]
fn e2e_missing_external_renderer_fails_only_the_mermaid_figure() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("images");

    // Point the external renderer at a binary that cannot exist so the
    // architecture figure fails deterministically.
    let config_path = temp_dir.path().join("config.toml");
    let mut config_file = fs::File::create(&config_path).unwrap();
    writeln!(config_file, "[render]\ncommand = \"stencil-test-no-such-binary\"").unwrap();

    let args = render_args(&[], &out_dir, Some(&config_path));

    let err = run(&args).unwrap_err();
    assert!(
        matches!(err, CliError::Batch { succeeded: 3, total: 4 }),
        "expected a partial batch failure, got: {err}"
    );

    // The remaining figures were still attempted and produced output
    assert!(out_dir.join("customer-usecase-diagram.png").exists());
    assert!(out_dir.join("agency-usecase-diagram.png").exists());
    assert!(out_dir.join("admin-usecase-diagram.png").exists());

    // The mermaid source survives for the manual fallback workflow
    let source = fs::read_to_string(out_dir.join("system-architecture-overview.mmd")).unwrap();
    assert!(source.starts_with("graph TD"));
}

#[test]
fn e2e_list_runs_without_config() {
    let args = Args {
        command: CliCommand::List,
        config: None,
        log_level: "off".to_string(),
    };
    run(&args).expect("list should always succeed");
}
