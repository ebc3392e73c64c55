use dimsweep_core::{FigureConfig, MetricTable};
use dimsweep_render::DEFAULT_OUTPUT_PATH;
use dimsweep_render::text::DeterministicTextMeasurer;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Render(dimsweep_render::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Render(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<dimsweep_render::Error> for CliError {
    fn from(value: dimsweep_render::Error) -> Self {
        Self::Render(value)
    }
}

fn usage() -> &'static str {
    "dimsweep\n\
\n\
USAGE:\n\
  dimsweep\n\
\n\
Writes the MNIST/FMNIST clustering summary figure to ./mnist_fmnist_summary.pdf.\n\
Set RUST_LOG=debug for per-subplot layout details.\n\
"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Render,
    Help,
}

fn parse_args(argv: &[String]) -> Result<Command, CliError> {
    match argv.get(1).map(String::as_str) {
        None => Ok(Command::Render),
        Some("--help" | "-h") if argv.len() == 2 => Ok(Command::Help),
        Some(_) => Err(CliError::Usage(usage())),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), CliError> {
    let bytes = dimsweep_render::render_figure_pdf(
        MetricTable::builtin(),
        &FigureConfig::default(),
        &DeterministicTextMeasurer::default(),
    )?;
    std::fs::write(DEFAULT_OUTPUT_PATH, &bytes)?;
    tracing::info!(path = DEFAULT_OUTPUT_PATH, bytes = bytes.len(), "wrote figure");
    Ok(())
}

fn main() {
    match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(Command::Render) => {}
        Ok(Command::Help) => {
            print!("{}", usage());
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }

    init_tracing();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("dimsweep")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn no_arguments_renders() {
        assert_eq!(parse_args(&argv(&[])).unwrap(), Command::Render);
    }

    #[test]
    fn help_flag_prints_usage() {
        assert_eq!(parse_args(&argv(&["--help"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&argv(&["-h"])).unwrap(), Command::Help);
    }

    #[test]
    fn any_other_argument_is_a_usage_error() {
        let cases: [&[&str]; 3] = [&["--out"], &["figure.pdf"], &["-h", "extra"]];
        for args in cases {
            assert!(matches!(
                parse_args(&argv(args)),
                Err(CliError::Usage(_))
            ));
        }
    }
}
