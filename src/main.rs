#[macro_use]
extern crate log;

use std::env::current_dir;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;
use std::result;

use clap::{Parser, Subcommand};
use printpdf::Pt;

use boxes::config::{find_config_file, Config, CONFIG_FILE};
use boxes::parser::parse_geometry;
use boxes::{Error, Result};

/// Lays out text into justified, hyphenated rows spread over pages.
#[derive(Parser, Debug)]
#[command(name = "boxes", version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Creates a new default project
    Init {
        /// The title of the project, a directory is created for it if given
        title: Option<String>,
    },

    /// Builds the project found in the current directory or one of its ancestors
    Build,

    /// Lays out a text file into a PDF file
    Convert {
        /// The text file to lay out
        input: PathBuf,

        /// The PDF file to write
        output: PathBuf,

        /// The size of every page, for example 300x500 or 210mm x 297mm
        #[arg(long, default_value = "300x500")]
        page_size: String,

        /// The space between two boxes and between two rows, in points
        #[arg(long, default_value_t = 0.5, value_parser = parse_separation)]
        separation: f64,

        /// The font to measure and draw the glyphs with
        #[arg(long)]
        font: Option<PathBuf>,

        /// The font size, in points
        #[arg(long, default_value_t = 10.0)]
        font_size: f64,

        /// The language of the hyphenation dictionary
        #[arg(long, default_value = "en-us")]
        language: String,

        /// Never split words
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_hyphenate: bool,

        /// Draws the rectangles of the boxes
        #[arg(long, action = clap::ArgAction::SetTrue)]
        show_boxes: bool,
    },
}

fn parse_separation(s: &str) -> result::Result<f64, String> {
    let separation = s.parse::<f64>().map_err(|e| format!("{e}"))?;

    if separation.is_finite() && separation >= 0.0 {
        Ok(separation)
    } else {
        Err(String::from("the separation can't be negative"))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Arguments::parse()) {
        error!("{}", e);
        exit(1);
    }
}

fn run(arguments: Arguments) -> Result<()> {
    match arguments.command {
        Command::Init { title } => init(title),
        Command::Build => build(),
        Command::Convert {
            input,
            output,
            page_size,
            separation,
            font,
            font_size,
            language,
            no_hyphenate,
            show_boxes,
        } => {
            let geometry = parse_geometry("--page-size", &page_size)?;

            let title = input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("boxes")
                .to_owned();

            let config = Config {
                page_width: geometry.width,
                page_height: geometry.height,
                separation: Pt(separation),
                font,
                font_size: Pt(font_size),
                language,
                hyphenate: !no_hyphenate,
                hide_boxes: !show_boxes,
                input,
                output,
                ..Config::with_title(&title)
            };

            config.build(PathBuf::new())?;
            Ok(())
        }
    }
}

fn init(title: Option<String>) -> Result<()> {
    let mut directory = current_dir().map_err(|_| Error::CannotReadCurrentDir)?;

    let title = match title {
        // If a title was given, we will create a directory for the project
        Some(title) => {
            directory.push(&title);
            title
        }

        // If no title was given, use the name of the current directory
        None => directory
            .file_name()
            .and_then(|name| name.to_str())
            .map(String::from)
            .ok_or(Error::CannotReadCurrentDir)?,
    };

    create_dir_all(&directory)?;

    let config = Config::with_title(&title);
    config.save(directory.join(CONFIG_FILE))?;

    let mut file = File::create(directory.join(&config.input))?;
    file.write_all(b"Hello world")?;

    info!("created project {} in {}", title, directory.display());
    Ok(())
}

fn build() -> Result<()> {
    let directory = current_dir().map_err(|_| Error::CannotReadCurrentDir)?;
    let config_path = find_config_file(&directory)?;
    let config = Config::load(&config_path)?;

    match config_path.parent() {
        Some(root) => config.build(root)?,
        None => config.build(&directory)?,
    };

    Ok(())
}
