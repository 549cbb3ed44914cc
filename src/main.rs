mod debug_report;

use std::io::{self, IsTerminal, Read};

use uascope::{ClientHints, Detector};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let detector = Detector::new();
    let detection = detector.parse_verbose(&config.input, config.hints.as_ref());
    debug_report::print_run(&detection, config.color);
}

struct CliConfig {
    input: String,
    hints: Option<ClientHints>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut brands: Vec<(String, String)> = Vec::new();
    let mut app_id: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("uascope {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--brand" => {
                let value = args.next().ok_or_else(|| "error: --brand expects a value".to_string())?;
                brands.push(parse_brand(&value));
            }
            "--app-id" => {
                let value = args.next().ok_or_else(|| "error: --app-id expects a value".to_string())?;
                app_id = Some(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--brand=") => {
                brands.push(parse_brand(arg.trim_start_matches("--brand=")));
            }
            _ if arg.starts_with("--app-id=") => {
                app_id = Some(arg.trim_start_matches("--app-id=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };
    let input = input.trim().to_string();

    if input.is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    let mut hints = ClientHints::new();
    for (name, version) in &brands {
        hints = hints.with_brand(name, version);
    }
    if let Some(id) = &app_id {
        hints = hints.with_app_id(id);
    }
    let hints = if hints.is_empty() { None } else { Some(hints) };

    Ok(CliConfig { input, hints, color })
}

// `Name:version`; a bare name is a brand with no version.
fn parse_brand(value: &str) -> (String, String) {
    match value.rsplit_once(':') {
        Some((name, version)) => (name.trim().to_string(), version.trim().to_string()),
        None => (value.trim().to_string(), String::new()),
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "uascope {version}

User agent and client hint identity detector CLI.

Usage:
  uascope [OPTIONS] [--] <user agent...>
  uascope [OPTIONS] --input <text>

Options:
  -i, --input <text>         User agent text to parse. If omitted, reads remaining
                             args or stdin when no args are provided.
  --brand <name:version>     Sec-CH-UA brand list entry. Repeatable, in header
                             order, e.g. --brand 'Chromium:119' --brand 'Google Chrome:119'.
  --app-id <id>              X-Requested-With application identifier,
                             e.g. com.duckduckgo.mobile.android.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
