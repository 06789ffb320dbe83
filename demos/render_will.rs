//! render_will - write a last will and testament as a .docx file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use testament_docx::{GenerateOptions, WillInput, generate};

#[derive(Parser, Debug)]
#[command(name = "render_will")]
#[command(version, about = "Render a will description (YAML) to a .docx document", long_about = None)]
#[command(after_help = "EXAMPLES:
    render_will jane.yaml                 Write Jane_A_Doe_Last_Will_and_Testament.docx
    render_will jane.yaml --sample -o out Write a watermarked sample into out/")]
struct Cli {
    /// Will description in YAML
    #[arg(value_name = "WILL")]
    input: PathBuf,

    /// Produce a watermarked sample document
    #[arg(short, long)]
    sample: bool,

    /// Directory to write the document into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out: PathBuf,

    /// Log each generated part and archive member
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("warning: logger unavailable: {e}");
    }

    match render(&cli) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn render(cli: &Cli) -> testament_docx::Result<PathBuf> {
    let yaml = std::fs::read_to_string(&cli.input)?;
    let will = WillInput::from_yaml(&yaml)?;

    let options = GenerateOptions {
        sample: cli.sample,
        ..GenerateOptions::default()
    };
    let doc = generate(&will, &options)?;

    std::fs::create_dir_all(&cli.out)?;
    let path = cli.out.join(&doc.filename);
    std::fs::write(&path, &doc.bytes)?;
    Ok(path)
}
