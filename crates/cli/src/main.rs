use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use motionblur_core::config::BlurConfig;
use motionblur_core::engine::blur_engine::BlurEngine;
use motionblur_core::host::create_engine;
use motionblur_core::shared::constants::IMAGE_EXTENSIONS;
use motionblur_core::shared::frame::Frame;

/// Temporal motion blur over an on-disk image sequence.
///
/// Frames are processed in file-name order, each averaged with the
/// preceding `history_size` frames, and written under the same names.
#[derive(Parser)]
#[command(name = "motionblur")]
struct Cli {
    /// Directory of input frames.
    input: PathBuf,

    /// Directory for the blurred output frames.
    output: PathBuf,

    /// Number of prior frames averaged with each frame.
    #[arg(long, default_value = "1")]
    history_size: usize,

    /// Reset the history on any frame-size change, not only while it is
    /// still filling.
    #[arg(long)]
    reset_always: bool,

    /// JSON configuration file; takes precedence over the flags above.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BlurConfig::new(cli.history_size)?.with_reset_always(cli.reset_always),
    };

    let engine = create_engine(config)?;
    process_sequence(&cli.input, &cli.output, engine)
}

fn load_config(path: &Path) -> Result<BlurConfig, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let config: BlurConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn collect_frame_paths(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_frame_file(path))
        .collect();
    paths.sort();
    if paths.is_empty() {
        return Err(format!("no image frames found in {}", dir.display()).into());
    }
    Ok(paths)
}

fn process_sequence(
    input: &Path,
    output: &Path,
    mut engine: BlurEngine,
) -> Result<(), Box<dyn Error>> {
    let paths = collect_frame_paths(input)?;
    fs::create_dir_all(output)?;

    let total = paths.len();
    for (i, path) in paths.iter().enumerate() {
        let rgb = image::open(path)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        let frame = Frame::new(rgb.into_raw(), width, height, 3);
        let blurred = engine.process_frame(frame);

        let file_name = path.file_name().ok_or("input path has no file name")?;
        let img: image::RgbImage = image::ImageBuffer::from_raw(width, height, blurred.into_data())
            .ok_or("blurred frame has unexpected length")?;
        img.save(output.join(file_name))?;

        if (i + 1) % 25 == 0 || i + 1 == total {
            log::info!("blurred {}/{total} frames", i + 1);
        }
    }

    Ok(())
}
