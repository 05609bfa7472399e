use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use pathpack::extract_svg;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pathpack")]
#[command(about = "Packs an SVG icon into a compact path string", long_about = None)]
struct Cli {
    /// Input file (use - for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Symbol name for the generated constant (defaults to the input file stem)
    #[arg(short, long)]
    name: Option<String>,

    /// Also emit the type declaration
    #[arg(long)]
    types: bool,

    /// Log decoding details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let is_stdin = cli.input.as_os_str() == "-";

    let name = match (&cli.name, is_stdin) {
        (Some(name), _) => name.clone(),
        (None, false) => cli
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or("cannot derive a symbol name from the input path, pass --name")?,
        (None, true) => return Err("--name is required when reading from stdin".into()),
    };

    // Read input
    let input = if is_stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.input)?
    };

    let entry = extract_svg(&name, &input)?;

    let mut output = entry.svg_def;
    output.push('\n');
    if cli.types {
        output.push_str(&entry.type_def);
        output.push('\n');
    }

    // Write output
    if cli.output.as_os_str() == "-" {
        io::stdout().write_all(output.as_bytes())?;
    } else {
        fs::write(&cli.output, &output)?;
    }

    Ok(())
}
