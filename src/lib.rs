pub mod args;
pub mod config;
pub mod reed_solomon;
pub mod reporters;

pub use args::parse_args;
pub use config::CodecConfig;
pub use reed_solomon::{
    ConfigError, DecodeTrace, Galois8, Polynomial, ReedSolomon, RsError, RsResult, TraceFailure,
    TraceOutcome,
};
