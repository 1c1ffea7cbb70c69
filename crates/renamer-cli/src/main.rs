use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "media-renamer",
    version,
    about = "Rename images and videos into <date>_<size>[_<tags>] names based on metadata"
)]
struct Cli {
    /// Directory to scan for images and videos; renamed files go to <directory>/renamed_files
    directory: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = renamer_core::ProcessOptions::new(cli.directory);

    renamer_core::process(&options, &report)?;

    Ok(())
}

/// Skip notices go to stdout, walk warnings to stderr; everything else stays quiet.
fn report(stage: &str, _current: u64, _total: u64, message: &str) {
    match stage {
        "skip" => println!("{}", message),
        "warn" => eprintln!("Warning: {}", message),
        _ => {}
    }
}
