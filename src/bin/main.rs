extern crate scanline_tracer as root;

use root::parsing::config::{Config, RendererType};
use root::parsing::get_settings;
use root::prelude::*;
use root::renderer::output_film;

#[macro_use]
extern crate tracing;

use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use structopt::StructOpt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    /// overrides rays_per_pixel for every render in the config
    #[structopt(long)]
    pub rays_per_pixel: Option<u16>,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        _ => default,
    }
}

fn init_logging(opts: &Opt) -> anyhow::Result<()> {
    let term_log_level = parse_log_level(&opts.print_log_level, LevelFilter::WARN);
    let write_log_level = parse_log_level(&opts.write_log_level, LevelFilter::INFO);
    let log_file = File::create("main.log")?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(term_log_level),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file))
                .with_filter(write_log_level),
        )
        .init();
    Ok(())
}

fn render_to_files(config: &Config, world: &World, rng: &mut ByteRng) -> anyhow::Result<Profile> {
    let mut total = Profile::default();
    for settings in &config.render_settings {
        let frame = FrameSettings::from(settings);
        let mut film = Film::new(frame.width, frame.height);
        let clock = SystemClock::new();
        let profile = do_raytrace(world, rng, &frame, &mut film, &clock);
        println!("{}", film.status);
        output_film(settings.filename.as_deref(), &film)?;
        total = total.combine(profile);
    }
    Ok(total)
}

#[cfg(feature = "preview")]
fn render_to_window(config: &Config, world: &World, rng: &mut ByteRng) -> anyhow::Result<Profile> {
    use root::renderer::PreviewWindow;

    let mut total = Profile::default();
    for settings in &config.render_settings {
        let frame = FrameSettings::from(settings);
        let mut window = PreviewWindow::new(frame.width, frame.height)?;
        let clock = SystemClock::new();
        total = total.combine(do_raytrace(world, rng, &frame, &mut window, &clock));
        window.wait_for_close();
    }
    Ok(total)
}

#[cfg(not(feature = "preview"))]
fn render_to_window(_: &Config, _: &World, _: &mut ByteRng) -> anyhow::Result<Profile> {
    anyhow::bail!("the Preview renderer needs the `preview` feature")
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config = get_settings(&opts.config_file)?;
    if let Some(rays_per_pixel) = opts.rays_per_pixel {
        for settings in config.render_settings.iter_mut() {
            settings.rays_per_pixel = rays_per_pixel;
        }
        config.validate()?;
    }

    let world = World::default();
    if opts.dry_run {
        info!(
            "dry run, skipping {} render(s)",
            config.render_settings.len()
        );
        return Ok(());
    }

    // one stream for the whole process, shared by every frame
    let mut rng = ByteRng::new();
    let now = Instant::now();
    let profile = match config.renderer {
        RendererType::Scanline => render_to_files(&config, &world, &mut rng)?,
        RendererType::Preview => render_to_window(&config, &world, &mut rng)?,
    };
    let elapsed = now.elapsed().as_secs_f32();
    println!("took {}s", elapsed);
    profile.pretty_print(elapsed);
    Ok(())
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    if let Err(e) = init_logging(&opts) {
        eprintln!("couldn't set up logging: {:?}", e);
        return ExitCode::FAILURE;
    }
    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG", LevelFilter::WARN), LevelFilter::DEBUG);
        assert_eq!(parse_log_level("nonsense", LevelFilter::WARN), LevelFilter::WARN);
        assert_eq!(parse_log_level("off", LevelFilter::INFO), LevelFilter::OFF);
    }
}
