mod debug_report;

use copyintent::{
    DataPaths, EMOTION_FILE, Media, Options, ReferenceData, ResolutionResult, SAMPLE_INPUTS, STYLE_FILE,
    TAXONOMY_FILE, resolve_verbose_with, run_pipeline,
};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATA_DIR: &str = "data";
const DATA_DIR_ENV: &str = "COPYINTENT_DATA_DIR";
const LOG_ENV: &str = "COPYINTENT_LOG";

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let data = match ReferenceData::load(&config.paths) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let inputs: Vec<String> = match config.input {
        Some(input) => vec![input],
        None => SAMPLE_INPUTS.iter().map(|s| s.to_string()).collect(),
    };

    let results: Vec<ResolutionResult> = if config.explain {
        inputs
            .iter()
            .map(|input| {
                let res = resolve_verbose_with(&data, input, config.media, &Options::default());
                debug_report::print_run(&res, config.color);
                res.result
            })
            .collect()
    } else {
        run_pipeline(&data, &inputs, config.media)
    };

    let rendered = match results.as_slice() {
        [single] => render(single, config.compact),
        all => render(all, config.compact),
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: failed to serialize result: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    input: Option<String>,
    media: Media,
    paths: DataPaths,
    explain: bool,
    compact: bool,
    color: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn render<T: serde::Serialize + ?Sized>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact { serde_json::to_string(value) } else { serde_json::to_string_pretty(value) }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut positionals: Vec<String> = Vec::new();
    let mut data_dir: Option<PathBuf> = None;
    let mut taxonomy: Option<PathBuf> = None;
    let mut emotions: Option<PathBuf> = None;
    let mut styles: Option<PathBuf> = None;
    let mut explain = false;
    let mut compact = false;
    let mut color = io::stderr().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("copyintent {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--explain" => explain = true,
            "--compact" => compact = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--data-dir" => data_dir = Some(expect_value(&mut args, "--data-dir")?.into()),
            "--taxonomy" => taxonomy = Some(expect_value(&mut args, "--taxonomy")?.into()),
            "--emotions" => emotions = Some(expect_value(&mut args, "--emotions")?.into()),
            "--styles" => styles = Some(expect_value(&mut args, "--styles")?.into()),
            "--" => {
                positionals.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--data-dir=") => data_dir = Some(arg.trim_start_matches("--data-dir=").into()),
            _ if arg.starts_with("--taxonomy=") => taxonomy = Some(arg.trim_start_matches("--taxonomy=").into()),
            _ if arg.starts_with("--emotions=") => emotions = Some(arg.trim_start_matches("--emotions=").into()),
            _ if arg.starts_with("--styles=") => styles = Some(arg.trim_start_matches("--styles=").into()),
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => positionals.push(arg),
        }
    }

    if positionals.len() > 2 {
        return Err(format!("error: expected at most 2 arguments, got {}\n\n{}", positionals.len(), help_text()));
    }
    let mut positionals = positionals.into_iter();

    let input = match positionals.next() {
        Some(text) if text == "-" => Some(read_stdin_input()?),
        other => other,
    };
    let media = match positionals.next() {
        Some(value) => value.parse::<Media>().map_err(|err| format!("error: {err}"))?,
        None => Media::default(),
    };

    let dir = data_dir
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let mut paths = DataPaths::in_dir(dir);
    if let Some(path) = taxonomy {
        paths.taxonomy = path;
    }
    if let Some(path) = emotions {
        paths.emotions = path;
    }
    if let Some(path) = styles {
        paths.styles = path;
    }

    Ok(CliConfig { input, media, paths, explain, compact, color })
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("error: {flag} expects a value"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "copyintent {version}

Resolve a product description to a category, emotion and style.

Usage:
  copyintent [OPTIONS] [<text>] [<media>]

Arguments:
  <text>                     Product description. Use '-' to read stdin.
                             If omitted, {samples} built-in samples are resolved.
  <media>                    Target channel: ad, social or lp. Default: lp

Options:
  --data-dir <dir>           Directory holding {taxonomy}, {emotions} and
                             {styles}. Default: ${data_env} or '{data_dir}'
  --taxonomy <path>          Taxonomy CSV (overrides --data-dir).
  --emotions <path>          Emotion document (overrides --data-dir).
  --styles <path>            Style document (overrides --data-dir).
  --explain                  Print how each input was resolved to stderr.
  --compact                  Print single-line JSON.
  --color                    Force ANSI color in --explain output.
  --no-color                 Disable ANSI color in --explain output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}             Log filter (e.g. debug, copyintent=trace). Default: warn

Exit codes:
  0  Success.
  1  Reference data could not be loaded.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        samples = SAMPLE_INPUTS.len(),
        taxonomy = TAXONOMY_FILE,
        emotions = EMOTION_FILE,
        styles = STYLE_FILE,
        data_env = DATA_DIR_ENV,
        data_dir = DEFAULT_DATA_DIR,
        log_env = LOG_ENV,
    )
}
