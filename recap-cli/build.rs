use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered in recap-render
// Build scripts can't depend on the crate they build, so the list is duplicated here
const AVAILABLE_FORMATS: &[&str] = &["html", "text"];

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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("recap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render AI video summaries to safe HTML and export them as text")
        .arg_required_else_help(true)
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
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (detected from --output if omitted)")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "recap", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "recap", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "recap", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
