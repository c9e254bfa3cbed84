use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use dynval_cbor::{decode, encode, Value};

/// Convert JSON on standard input to CBOR on standard output.
#[derive(Parser)]
#[command(group(ArgGroup::new("mode").required(true).args(["encode", "decode"])))]
pub struct Arguments {
    /// Encode JSON stdin to CBOR stdout
    #[arg(short = 'e', long)]
    encode: bool,
    /// Decode CBOR stdin to JSON stdout
    #[arg(short = 'd', long)]
    decode: bool,
}

fn read_stdin() -> io::Result<Vec<u8>> {
    let mut input = Vec::with_capacity(256);
    io::stdin().lock().read_to_end(&mut input)?;
    Ok(input)
}

fn run(args: &Arguments) -> Result<(), String> {
    let input = read_stdin().map_err(|e| format!("failed to read input: {e}"))?;

    if args.decode {
        let value = decode(&input).map_err(|e| e.to_string())?;
        let json = serde_json::to_string(&value).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let value: Value = serde_json::from_slice(&input).map_err(|e| format!("invalid JSON: {e}"))?;
    let bytes = encode(&value).map_err(|e| e.to_string())?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&bytes)
        .and_then(|()| stdout.flush())
        .map_err(|e| format!("failed to write output: {e}"))
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
