use futures::executor::block_on;
use manta::{Engine, LoadOptions, ScatterConfig};
use manta_render::layout_scatter;
use manta_render::svg::{SvgRenderOptions, render_scatter_svg};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Load(manta::Error),
    Render(manta_render::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Load(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<manta::Error> for CliError {
    fn from(value: manta::Error) -> Self {
        Self::Load(value)
    }
}

impl From<manta_render::Error> for CliError {
    fn from(value: manta_render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Parse,
    Layout,
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    lenient: bool,
    config: Option<String>,
    diagram_id: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "manta-cli\n\
\n\
USAGE:\n\
  manta-cli [parse] [--pretty] [--lenient] [<csv-path>|-]\n\
  manta-cli layout [--pretty] [--config <json-path>] [--lenient] [<csv-path>|-]\n\
  manta-cli render [--config <json-path>] [--id <svg-id>] [--out <path>] [--lenient] [<csv-path>|-]\n\
\n\
NOTES:\n\
  - If <csv-path> is omitted or '-', input is read from stdin.\n\
  - parse prints the sorted dataset as JSON; layout prints marker/axis/legend geometry.\n\
  - render prints one self-contained interactive SVG to stdout; use --out to write a file.\n\
  - --config deep-merges a JSON file over the defaults (scatter.*, themeVariables.*).\n\
  - --lenient skips malformed CSV records instead of failing the load.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--lenient" => args.lenient = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.diagram_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn build_engine(config_path: Option<&str>) -> Result<Engine, CliError> {
    let mut engine = Engine::new();
    if let Some(path) = config_path {
        let text = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        engine = engine.with_site_config(ScatterConfig::from_value(value));
    }
    Ok(engine)
}

fn write_json(value: &impl serde::Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let engine = build_engine(args.config.as_deref())?;
    let load_options = if args.lenient {
        LoadOptions::lenient()
    } else {
        LoadOptions::strict()
    };

    let dataset = block_on(engine.load_dataset(&text, load_options))?;

    match args.command {
        Command::Parse => {
            write_json(&dataset.points(), args.pretty)?;
            Ok(())
        }
        Command::Layout => {
            let layout = layout_scatter(&dataset, &engine.view_config(), &engine.theme())?;
            write_json(&layout, args.pretty)?;
            Ok(())
        }
        Command::Render => {
            let config = engine.view_config();
            let layout = layout_scatter(&dataset, &config, &engine.theme())?;
            let svg_options = SvgRenderOptions {
                diagram_id: args.diagram_id.clone(),
                ..Default::default()
            };
            let svg = render_scatter_svg(&layout, &config, &svg_options)?;
            write_text(&svg, args.out.as_deref())?;
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
