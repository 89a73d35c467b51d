//! Console reporter for codec operations
//!
//! Prints each decode stage with symbols as hex and polynomials with the
//! highest-order coefficient first.

use super::{Reporter, TraceReporter};
use crate::reed_solomon::{Galois8, Polynomial, TraceFailure, TraceOutcome};

/// Bytes as space separated hex pairs, e.g. `68 65 6c`
pub fn spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

fn spaced_elements(elements: &[Galois8]) -> String {
    spaced_hex(crate::reed_solomon::galois::as_bytes(elements))
}

/// Printable text for a message, or `None` if it is not valid UTF-8
fn printable(message: &[u8]) -> Option<&str> {
    std::str::from_utf8(message)
        .ok()
        .filter(|s| !s.chars().any(char::is_control))
}

fn describe_failure(failure: &TraceFailure) -> String {
    match failure {
        TraceFailure::Configuration(err) => format!("invalid input: {}", err),
        TraceFailure::InvalidPositions => {
            "error locator roots do not match its degree or fall outside the word".to_string()
        }
        TraceFailure::Locator(err) => format!("error locator could not be built: {}", err),
        TraceFailure::Magnitude(err) => format!("error magnitudes could not be solved: {}", err),
        TraceFailure::VerificationFailed => "corrected word is still not a codeword".to_string(),
    }
}

/// Console implementation for codec traces
#[derive(Default)]
pub struct ConsoleTraceReporter;

impl ConsoleTraceReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleTraceReporter {
    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

impl TraceReporter for ConsoleTraceReporter {
    fn report_encoded(&self, message: &[u8], codeword: &[u8]) {
        println!("Message ({} bytes): {}", message.len(), spaced_hex(message));
        println!(
            "Codeword ({} bytes): {}",
            codeword.len(),
            spaced_hex(codeword)
        );
    }

    fn report_received(&self, received: &[u8], check_symbols: usize) {
        println!(
            "Received ({} bytes, t = {}): {}",
            received.len(),
            check_symbols,
            spaced_hex(received)
        );
    }

    fn report_syndromes(&self, syndromes: &[Galois8]) {
        println!("Syndromes S_1..S_{}: {}", syndromes.len(), spaced_elements(syndromes));
    }

    fn report_locator(&self, locator: &Polynomial) {
        println!(
            "Error locator (degree {}): {}",
            locator.degree().unwrap_or(0),
            locator
        );
    }

    fn report_positions(&self, positions: &[usize]) {
        println!("Error positions: {:?}", positions);
    }

    fn report_error_polynomial(&self, errors: &Polynomial) {
        println!("Error polynomial: {}", spaced_elements(errors.coefficients()));
    }

    fn report_corrected(&self, corrected: &[u8], verify_syndromes: &[Galois8]) {
        println!("Corrected: {}", spaced_hex(corrected));
        println!("Corrected syndromes: {}", spaced_elements(verify_syndromes));
    }

    fn report_outcome(&self, outcome: &TraceOutcome, message: Option<&[u8]>) {
        match outcome {
            TraceOutcome::Valid => println!("Valid codeword, no errors detected."),
            TraceOutcome::Corrected { errors } => println!("Corrected {} error(s).", errors),
            TraceOutcome::Failed(failure) => {
                println!("Could not decode message: {}", describe_failure(failure))
            }
        }

        if let Some(message) = message {
            println!("Decoded ({} bytes): {}", message.len(), spaced_hex(message));
            if let Some(text) = printable(message) {
                println!("Decoded text: {:?}", text);
            }
        }
    }
}
