use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Parse a `POS=HEX` corruption override, e.g. `5=00` or `14=0x33`
pub fn parse_corruption(input: &str) -> Result<(usize, u8), String> {
    let (pos, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected POS=HEX, got {:?}", input))?;
    let pos = pos
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid position {:?}", pos))?;
    let value = value.trim();
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    let value = u8::from_str_radix(digits, 16).map_err(|_| format!("invalid byte {:?}", value))?;
    Ok((pos, value))
}

/// Parse hex bytes, ignoring whitespace between them
pub fn parse_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits)
}

fn input_args() -> [Arg; 2] {
    [
        Arg::new("hex")
            .long("hex")
            .help("Input as hex bytes (whitespace allowed)")
            .value_name("HEX")
            .conflicts_with("input"),
        Arg::new("input")
            .short('i')
            .long("input")
            .help("Read raw input bytes from a file")
            .value_name("FILE")
            .value_parser(clap::value_parser!(PathBuf)),
    ]
}

pub fn build_command() -> Command {
    Command::new("rsfec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon error correction over GF(2^8)")
        .arg_required_else_help(true)
        .arg(
            Arg::new("check-symbols")
                .short('t')
                .long("check-symbols")
                .help("Number of check symbols t (corrects up to t/2 errors)")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("5")
                .global(true),
        )
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Append check symbols to a message")
                .arg(
                    Arg::new("message")
                        .help("Message text")
                        .index(1)
                        .conflicts_with_all(["hex", "input"]),
                )
                .args(input_args())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the raw codeword to a file instead of printing hex")
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Correct errors in a received codeword and strip the check symbols")
                .arg(
                    Arg::new("received")
                        .help("Received codeword as hex bytes")
                        .index(1)
                        .conflicts_with_all(["hex", "input"]),
                )
                .args(input_args())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the raw decoded message to a file instead of printing it")
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .visible_alias("i")
                .about("Encode a message, corrupt it, and show every decoding step")
                .arg(
                    Arg::new("message")
                        .help("Message text")
                        .index(1)
                        .conflicts_with_all(["hex", "input"]),
                )
                .args(input_args())
                .arg(
                    Arg::new("corrupt")
                        .short('c')
                        .long("corrupt")
                        .help("Overwrite codeword byte POS (from the start) with HEX")
                        .value_name("POS=HEX")
                        .action(ArgAction::Append)
                        .value_parser(parse_corruption),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Quiet mode - only set the exit status")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_command().get_matches()
}
