use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};

use rbtzip::RbtzipError;

/// rbtzip – run-length container compressor
#[derive(Parser)]
#[command(name = "rbtzip", version, about = "RBT container compression tool", author)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file to .rbtz
    Compress {
        /// Input file path
        input: PathBuf,
        /// Output .rbtz path (optional)
        output: Option<PathBuf>,
    },
    /// Extract .rbtz archive
    Extract {
        /// Input .rbtz file
        input: PathBuf,
        /// Output path (optional)
        output: Option<PathBuf>,
    },
}

const ARCHIVE_EXTENSION: &str = "rbtz";

fn default_compress_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(ARCHIVE_EXTENSION);
    PathBuf::from(name)
}

fn default_extract_output(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == ARCHIVE_EXTENSION) {
        input.with_extension("")
    } else {
        let mut name = input.as_os_str().to_owned();
        name.push(".out");
        PathBuf::from(name)
    }
}

fn compress(input: &Path, output: &Path) -> Result<(), RbtzipError> {
    let raw = rbtzip::io::read_all(input)?;
    let container = rbtzip::encode(&raw)?;
    rbtzip::io::write_all(output, &container)?;
    log::info!(
        "compressed {} ({} bytes) -> {} ({} bytes)",
        input.display(),
        raw.len(),
        output.display(),
        container.len()
    );
    Ok(())
}

fn extract(input: &Path, output: &Path) -> Result<(), RbtzipError> {
    let container = rbtzip::io::read_all(input)?;
    let raw = rbtzip::decode(&container)?;
    rbtzip::io::write_all(output, &raw)?;
    log::info!(
        "extracted {} ({} bytes) -> {} ({} bytes)",
        input.display(),
        container.len(),
        output.display(),
        raw.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Compress { input, output }) => {
            let output = output.unwrap_or_else(|| default_compress_output(&input));
            compress(&input, &output)
        }
        Some(Commands::Extract { input, output }) => {
            let output = output.unwrap_or_else(|| default_extract_output(&input));
            extract(&input, &output)
        }
        None => {
            // If no subcommand, print help
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_paths() {
        assert_eq!(
            default_compress_output(Path::new("photo.png")),
            PathBuf::from("photo.png.rbtz")
        );
        assert_eq!(
            default_extract_output(Path::new("photo.png.rbtz")),
            PathBuf::from("photo.png")
        );
        assert_eq!(
            default_extract_output(Path::new("archive.bin")),
            PathBuf::from("archive.bin.out")
        );
    }
}
