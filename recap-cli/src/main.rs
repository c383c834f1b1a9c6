// Command-line interface for recap
//
// Renders AI-generated video summaries into sanitized display markup and exports
// rendered markup back to structured plain text. All of the work happens in the
// recap-render crate; this binary only reads input, applies configuration and
// writes output.
//
// Usage:
//  recap render <input|-> [--json] [-o <file>]    - Summary text to sanitized HTML
//  recap export <input|-> [-o <file>]             - Rendered HTML to plain text
//  recap convert <input|-> --to <format> [-o <file>]
//  recap list-formats
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<name> [value]:
//  --extra-hard-breaks, --extra-autolink, --extra-highlight, --extra-indent-width,
//  --extra-log-level
// Boolean overrides can omit the value (defaults to "true").

mod logging;

use clap::{Arg, ArgAction, Command, ValueHint};
use recap_config::{Loader, RecapConfig};
use recap_render::{
    export::export_markup_with_options, summary_text, ExportOptions, FormatRegistry,
    RenderOptions, Renderer,
};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::Read;

/// Positional input that reads from stdin.
const STDIN_MARKER: &str = "-";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following token is a value unless it looks like another flag
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("recap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render AI video summaries to safe HTML and export them as text")
        .long_about(
            "recap turns model-written summaries into sanitized HTML and back into text.\n\n\
            Commands:\n  \
            - render:  Summary text to sanitized HTML\n  \
            - export:  Rendered HTML to structured plain text\n  \
            - convert: Summary text to any registered format\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration keys.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            recap render summary.md                       # HTML to stdout\n  \
            recap render response.json --json -o out.html # Summary field of a payload\n  \
            recap export out.html                         # Back to text\n  \
            recap convert summary.md -o notes.txt         # Format from extension\n  \
            recap render - --extra-highlight false        # stdin, no highlighting",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a recap.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render summary text to sanitized HTML")
                .long_about(
                    "Render a summary to the allow-listed HTML vocabulary.\n\n\
                    The input may be plain markdown-flavored text or a JSON string literal\n\
                    (enclosing quotes and escapes are undone). With --json the input is\n\
                    parsed as JSON: either a string, or an object whose 'summary' field\n\
                    is the string.",
                )
                .arg(input_arg())
                .arg(output_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Treat the input as a JSON value")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export rendered HTML as structured plain text")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert summary text to a registered format")
                .long_about(
                    "Convert a summary to one of the registered formats.\n\n\
                    If --to is omitted, the format is detected from the -o file extension.\n\
                    Use 'recap list-formats' to see the available formats.",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (detected from --output if omitted)")
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli().get_matches_from(&cleaned_args);

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if let Some(unknown) = extra_params.keys().next() {
        eprintln!("Unknown parameter --extra-{unknown}");
        std::process::exit(1);
    }

    logging::init_logging(&config.logging);

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, sub_matches.get_flag("json"), output, &config);
        }
        Some(("export", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_export_command(input, output, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let registry = registry_from_config(&config);

            // Auto-detect --to from the output file if not provided
            let to = match sub_matches.get_one::<String>("to") {
                Some(to) => to.to_string(),
                None => match output.and_then(|o| registry.detect_format_from_filename(o)) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect the target format");
                        eprintln!("Please specify --to explicitly");
                        std::process::exit(1);
                    }
                },
            };
            handle_convert_command(input, &to, output, &registry);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command(&registry_from_config(&config));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(input: &str, json: bool, output: Option<&str>, config: &RecapConfig) {
    let source = read_input(input);

    let summary = if json {
        let value: Value = serde_json::from_str(&source).unwrap_or_else(|e| {
            eprintln!("Invalid JSON input: {e}");
            std::process::exit(1);
        });
        let value = match value {
            Value::Object(mut fields) => fields.remove("summary").unwrap_or(Value::Null),
            other => other,
        };
        match summary_text(&value) {
            Ok(text) => text.to_string(),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        source
    };

    let renderer = Renderer::new(RenderOptions::from(&config.render));
    let html = renderer.render(&summary);
    tracing::info!(bytes = html.len(), "rendered summary");
    write_output(output, &html);
}

/// Handle the export command
fn handle_export_command(input: &str, output: Option<&str>, config: &RecapConfig) {
    let markup = read_input(input);
    let text = export_markup_with_options(&markup, &ExportOptions::from(&config.export));
    write_output(output, &text);
}

/// Handle the convert command
fn handle_convert_command(input: &str, to: &str, output: Option<&str>, registry: &FormatRegistry) {
    let format = registry.get(to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let source = read_input(input);
    let converted = format.convert(&source).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });
    write_output(output, &converted);
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        match registry.get(&name) {
            Ok(format) => {
                let extensions = format.file_extensions().join(", ");
                println!("  {name:<6} {}  [{extensions}]", format.description());
            }
            Err(_) => println!("  {name}"),
        }
    }
}

fn registry_from_config(config: &RecapConfig) -> FormatRegistry {
    FormatRegistry::with_options(
        RenderOptions::from(&config.render),
        ExportOptions::from(&config.export),
    )
}

fn read_input(input: &str) -> String {
    if input == STDIN_MARKER {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
        return source;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, data: &str) {
    match output {
        Some(path) => {
            fs::write(path, data).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{data}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> RecapConfig {
    let loader = Loader::new().with_optional_file("recap.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut RecapConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["hard-breaks", "hardbreaks"]) {
        config.render.hard_breaks = parse_bool_arg("hard-breaks", &raw);
    }
    if let Some(raw) = extra_params.remove("autolink") {
        config.render.autolink = parse_bool_arg("autolink", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["highlight", "highlight-code"]) {
        config.render.highlight.enabled = parse_bool_arg("highlight", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["indent-width", "indent"]) {
        config.export.indent_width = parse_usize_arg("indent-width", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["log-level"]) {
        config.logging.level = raw;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_usize_arg(flag: &str, raw: &str) -> usize {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid number '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
