//! rsfec - Reed-Solomon encode/decode from the command line
//!
//! Exit status is 0 on success, 1 on usage or I/O errors, and 2 when a
//! received word cannot be corrected.

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use rsfec::args::parse_hex;
use rsfec::reporters::{spaced_hex, ConsoleTraceReporter, SilentTraceReporter, TraceReporter};
use rsfec::{CodecConfig, ReedSolomon, RsError};
use std::fs;
use std::path::{Path, PathBuf};

const EXIT_UNCORRECTABLE: i32 = 2;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = rsfec::parse_args();

    match matches.subcommand() {
        Some(("encode", sub_matches)) => handle_encode(sub_matches),
        Some(("decode", sub_matches)) => handle_decode(sub_matches),
        Some(("inspect", sub_matches)) => handle_inspect(sub_matches),
        Some((cmd, _)) => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
        None => {
            eprintln!("Error: No command specified");
            eprintln!("\nUse 'rsfec --help' for usage information");
            std::process::exit(1);
        }
    }
}

fn codec(matches: &ArgMatches) -> Result<ReedSolomon> {
    let config = CodecConfig::from_args(matches);
    ReedSolomon::from_config(&config).context("Invalid codec configuration")
}

/// Bytes from `--input FILE`, `--hex`, or the positional argument
fn read_input(matches: &ArgMatches, positional: &str, positional_is_hex: bool) -> Result<Vec<u8>> {
    if let Some(path) = matches.get_one::<PathBuf>("input") {
        return fs::read(path).with_context(|| format!("Failed to read {}", path.display()));
    }
    if let Some(hex) = matches.get_one::<String>("hex") {
        return parse_hex(hex).context("Invalid --hex input");
    }
    match matches.get_one::<String>(positional) {
        Some(value) if positional_is_hex => parse_hex(value).context("Invalid hex input"),
        Some(value) => Ok(value.clone().into_bytes()),
        None => bail!("No input given (pass {}, --hex or --input)", positional),
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

fn handle_encode(matches: &ArgMatches) -> Result<()> {
    let rs = codec(matches)?;
    let message = read_input(matches, "message", false)?;
    let codeword = rs.encode(&message).context("Failed to encode message")?;

    match matches.get_one::<PathBuf>("output") {
        Some(path) => write_output(path, &codeword),
        None => {
            println!("{}", spaced_hex(&codeword));
            Ok(())
        }
    }
}

fn handle_decode(matches: &ArgMatches) -> Result<()> {
    let rs = codec(matches)?;
    let received = read_input(matches, "received", true)?;

    let message = match rs.decode(&received) {
        Ok(message) => message,
        Err(RsError::Uncorrectable) => {
            eprintln!("Could not decode message: too many errors");
            std::process::exit(EXIT_UNCORRECTABLE);
        }
        Err(err) => return Err(err).context("Failed to decode"),
    };

    match matches.get_one::<PathBuf>("output") {
        Some(path) => write_output(path, &message),
        None => {
            println!("{}", spaced_hex(&message));
            if let Ok(text) = std::str::from_utf8(&message) {
                println!("{}", text);
            }
            Ok(())
        }
    }
}

fn handle_inspect(matches: &ArgMatches) -> Result<()> {
    let rs = codec(matches)?;
    let quiet = matches.get_flag("quiet");
    let reporter: Box<dyn TraceReporter> = if quiet {
        Box::new(SilentTraceReporter::new())
    } else {
        Box::new(ConsoleTraceReporter::new())
    };

    let message = read_input(matches, "message", false)?;
    let codeword = rs.encode(&message).context("Failed to encode message")?;
    reporter.report_encoded(&message, &codeword);

    let mut received = codeword.clone();
    for &(pos, value) in matches
        .get_many::<(usize, u8)>("corrupt")
        .into_iter()
        .flatten()
    {
        match received.get_mut(pos) {
            Some(byte) => *byte = value,
            None => bail!(
                "Corruption position {} is outside the {}-byte codeword",
                pos,
                codeword.len()
            ),
        }
    }

    let trace = rs.trace(&received);
    trace.report(reporter.as_ref());

    if trace.is_failure() {
        std::process::exit(EXIT_UNCORRECTABLE);
    }
    if trace.message() == Some(&message[..]) {
        reporter.report_complete("Decoded message matches the input.");
    } else {
        reporter.report_error("decoded message differs from the input");
    }
    Ok(())
}
