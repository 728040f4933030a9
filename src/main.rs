//! CLI entry point for color-wallpaper.

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail};
use tracing::info;

use color_wallpaper::cli::{Cli, OutputFormat};
use color_wallpaper::config::WallpaperConfig;
use color_wallpaper::logging::init_logging;
use color_wallpaper::names::ColorNames;
use color_wallpaper::random::PaletteSource;
use color_wallpaper::render::WallpaperLayout;
use color_wallpaper::report::SelectionReport;
use color_wallpaper::selection::{ColorSelectionPolicy, SelectionRequest};
use color_wallpaper::wallpaper;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "color-wallpaper", &mut std::io::stdout());
        return Ok(());
    }

    let _guard = init_logging(cli.log_file.as_deref(), &cli.log_level);

    let config = WallpaperConfig::layered(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to save config to {}", path.display()))?;
        eprintln!("Saved configuration to {}", path.display());
    }

    let names = ColorNames::builtin();
    let request = config.selection_request(names)?;
    let layout = config.layout();

    // --dry-run without --print still reports the colors
    let print = cli
        .print
        .or_else(|| cli.dry_run.then_some(OutputFormat::default()));

    if config.multiple.count != 1 {
        return generate_multiple(&cli, &config, &request, &layout, names, print);
    }

    let mut source = match config.colors.seed {
        Some(seed) => PaletteSource::seeded(names, seed),
        None => PaletteSource::from_entropy(names),
    };
    let selection = ColorSelectionPolicy::new(names)
        .resolve(&request, &mut source)
        .wrap_err("Failed to select colors")?;

    if let Some(format) = print {
        print!("{}", SelectionReport::from(&selection).render(format)?);
    }
    if cli.dry_run {
        return Ok(());
    }

    let path = &config.output.path;
    wallpaper::generate(&selection, &layout, path, config.output.overwrite)?;
    eprintln!("Wrote wallpaper to {}", path.display());

    Ok(())
}

/// Generate one wallpaper per palette color that satisfies the constraints.
fn generate_multiple(
    cli: &Cli,
    config: &WallpaperConfig,
    request: &SelectionRequest,
    layout: &WallpaperLayout,
    names: &ColorNames,
    print: Option<OutputFormat>,
) -> Result<()> {
    let selections = wallpaper::palette_selections(request, names, config.multiple.count)?;
    if selections.is_empty() {
        bail!("No palette color satisfies the contrast constraints");
    }
    info!(count = selections.len(), "Selected palette colors");

    if let Some(format) = print {
        let reports: Vec<SelectionReport> = selections.iter().map(Into::into).collect();
        print!("{}", SelectionReport::render_all(&reports, format)?);
    }
    if cli.dry_run {
        return Ok(());
    }

    let dir = wallpaper::multiple_output_dir(&config.output.path);
    let written = wallpaper::generate_all(
        &selections,
        layout,
        &dir,
        &config.multiple.extension,
        config.output.overwrite,
    )?;
    eprintln!("Wrote {} wallpapers to {}", written.len(), dir.display());

    Ok(())
}
