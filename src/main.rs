use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand, ValueEnum};
use spreadcut::config::{BackendKind, DEFAULT_MAGICK_PROGRAM, RunConfig};
use spreadcut::imaging::Quality;
use spreadcut::output;
use spreadcut::process::{self, ProcessError};
use spreadcut::types::Direction;
use std::path::PathBuf;

/// Image backend for crop and append.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendArg {
    /// ImageMagick subprocess
    Magick,
    /// In-process decode/encode
    Native,
}

impl From<BackendArg> for BackendKind {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::Magick => BackendKind::Magick,
            BackendArg::Native => BackendKind::Native,
        }
    }
}

/// Which image of each sorted pair goes on the left.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    Left,
    Right,
}

impl From<DirectionArg> for Direction {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Left => Direction::Left,
            DirectionArg::Right => Direction::Right,
        }
    }
}

#[derive(Parser)]
#[command(name = "spreadcut")]
#[command(about = "Split images into edge strips and recombine pairs side by side")]
#[command(long_about = "\
Split images into edge strips and recombine pairs side by side

All results go to <folder>/output/, which is created if needed and never
read back as input.

crop: every .jpg/.jpeg/.png under <folder> (recursively) yields two strips
of <split_width> pixels at full height. The strip from the LEFT edge is saved
as <name>_right.<ext> and the strip from the RIGHT edge as <name>_left.<ext>.
Images narrower than 2 * split_width + 2 are skipped.

combine: images directly in <folder> are sorted by name and taken in pairs.
'left' puts the first of each pair on the left, 'right' swaps them. The
result is named after the first image. Heights are not checked; a shorter
image leaves padding below it. With an odd count the last image is skipped.")]
#[command(version)]
struct Cli {
    /// Image backend
    #[arg(long, value_enum, default_value_t = BackendArg::Magick, global = true)]
    backend: BackendArg,

    /// ImageMagick executable (magick backend)
    #[arg(long, env = "SPREADCUT_MAGICK", default_value = DEFAULT_MAGICK_PROGRAM, global = true)]
    magick: PathBuf,

    /// JPEG output quality
    #[arg(
        long,
        default_value_t = Quality::default().value(),
        value_parser = clap::value_parser!(u32).range(1..=100),
        global = true
    )]
    quality: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split every image into left and right edge strips
    Crop {
        /// Folder to scan recursively
        folder: PathBuf,
        /// Width in pixels of each strip
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        split_width: u64,
    },
    /// Combine consecutive pairs of images side by side
    Combine {
        /// Folder whose images are paired in name order
        folder: PathBuf,
        /// Side the first image of each pair goes on
        #[arg(value_enum, ignore_case = true)]
        direction: DirectionArg,
    },
}

/// Parse arguments, exiting with status 1 on anything unusable.
///
/// Unknown commands get a one-line message; every other usage problem gets
/// clap's usage text. Help and version exit normally.
fn parse_cli() -> Cli {
    let err = match Cli::try_parse() {
        Ok(cli) => return cli,
        Err(err) => err,
    };

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::InvalidSubcommand => {
            let name = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.as_str(),
                _ => "?",
            };
            eprintln!("Unknown command: {name}");
        }
        _ => {
            err.print().ok();
        }
    }
    std::process::exit(1);
}

fn run(cli: Cli) -> Result<(), ProcessError> {
    let config = RunConfig {
        backend: cli.backend.into(),
        magick_program: cli.magick,
        quality: Quality::new(cli.quality),
    };

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_process_event(&event) {
                println!("{}", line);
            }
        }
    });

    let result = match cli.command {
        Command::Crop {
            folder,
            split_width,
        } => {
            // No image is wider than u32::MAX, so clamping still skips every file
            let split_width = u32::try_from(split_width).unwrap_or(u32::MAX);
            process::crop(&folder, split_width, &config, Some(tx))
                .map(|summary| output::format_crop_summary(&summary))
        }
        Command::Combine { folder, direction } => {
            process::combine(&folder, direction.into(), &config, Some(tx))
                .map(|summary| output::format_combine_summary(&summary))
        }
    };
    // The sender is gone once the pipeline returns, so this ends after the last event
    printer.join().ok();

    println!("{}", result?);
    Ok(())
}

fn main() {
    let cli = parse_cli();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
