use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

use dimsniff::application::{describe, inspect_image, probe_file};
use dimsniff::cli::{Cli, WriteMode};
use dimsniff::report::{ReportTarget, write_report};
use dimsniff::{Dimensions, Probe};

const WRITE_OPTIONS: [&str; 3] = [
    "Write the dimensions to a given file or folder",
    "Write the dimensions automatically to a file next to the image",
    "Do not write to a file",
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match &cli.image {
        Some(image) => run_once(image, cli.write_mode()),
        None => run_interactive_wizard(),
    }
}

fn run_once(image: &Path, mode: WriteMode) -> Result<()> {
    let outcome = inspect_image(image, &mode, Local::now().naive_local())?;
    print_probe(&outcome.probe);

    if let Some(written) = outcome.report {
        print_written(&written);
    }
    Ok(())
}

fn run_interactive_wizard() -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        print_banner();

        let input: String = Input::with_theme(&theme)
            .with_prompt("Enter full path of the image file")
            .interact_text()
            .context("Failed to read image path")?;
        let image = PathBuf::from(input.trim());

        match probe_file(&image) {
            Ok(probe) => {
                print_probe(&probe);
                if let Some(dimensions) = probe.dimensions() {
                    offer_write(&theme, dimensions, &image)?;
                }
            }
            Err(e) => println!("{}", style(format!("{e:#}")).red()),
        }

        println!();
        let again = Confirm::with_theme(&theme)
            .with_prompt("Process another image?")
            .default(false)
            .interact()
            .context("Failed to confirm")?;

        if !again {
            return Ok(());
        }
    }
}

fn offer_write(theme: &ColorfulTheme, dimensions: Dimensions, image: &Path) -> Result<()> {
    println!();
    let selection = Select::with_theme(theme)
        .with_prompt("Save the dimensions?")
        .items(&WRITE_OPTIONS)
        .default(0)
        .interact()
        .context("Failed to select output option")?;

    let target = match selection {
        0 => prompt_target(theme)?,
        1 => ReportTarget::beside(image)?,
        _ => return Ok(()),
    };

    persist(dimensions, &target, image)
}

fn prompt_target(theme: &ColorfulTheme) -> Result<ReportTarget> {
    println!(
        "{}",
        style("Note: for a folder, the file name is generated automatically.").yellow()
    );
    println!(
        "{}",
        style("Note: for a file, the dimensions are appended without further validation.").yellow()
    );

    loop {
        let input: String = Input::with_theme(theme)
            .with_prompt("Enter full path of the file or folder to write to")
            .interact_text()
            .context("Failed to read output path")?;

        match ReportTarget::resolve(Path::new(input.trim())) {
            Ok(target) => return Ok(target),
            Err(e) => println!("{}", style(format!("{e}. Enter a valid path!")).red()),
        }
    }
}

fn persist(dimensions: Dimensions, target: &ReportTarget, image: &Path) -> Result<()> {
    let written = write_report(dimensions, target, image, Local::now().naive_local())
        .context("Failed to write dimensions")?;

    print_written(&written);
    Ok(())
}

fn print_written(path: &Path) {
    println!(
        "{}",
        style(format!("Data written to file - {}!", path.display())).green()
    );
}

fn print_probe(probe: &Probe) {
    let line = describe(probe);
    match probe {
        Probe::Recognized { .. } => println!("{}", style(line).yellow()),
        Probe::Unrecognized => println!("{}", style(line).red()),
    }
}

fn print_banner() {
    println!();
    println!("{}", style("=".repeat(60)).blue());
    println!("{}", style("dimsniff - Image Dimension Reader").cyan().bold());
    println!("{}", style("=".repeat(60)).blue());
}
