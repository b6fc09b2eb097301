//! Small tool that parses SVG path data and prints its segments
#![deny(warnings)]

use pathdata::*;
use std::{env, fs::File, io::Read};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

#[derive(Debug)]
struct Args {
    input_file: String,
    absolutize: bool,
    normalize: bool,
}

impl Args {
    fn parse() -> Result<Args, Error> {
        let mut result = Args {
            input_file: String::new(),
            absolutize: false,
            normalize: false,
        };
        let mut positional = 0;
        let mut args = env::args();
        let cmd = args.next().unwrap();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" => {
                    positional = 0;
                    break;
                }
                "-a" => {
                    result.absolutize = true;
                }
                "-n" => {
                    result.normalize = true;
                }
                _ => {
                    positional += 1;
                    match positional {
                        1 => result.input_file = arg,
                        _ => return Err("unexpected positional argment".into()),
                    }
                }
            }
        }
        if positional < 1 {
            eprintln!("Small tool that parses SVG path data and prints its segments");
            eprintln!("\nUSAGE:");
            eprintln!("    {} [-a] [-n] <file.path>", cmd);
            eprintln!("\nARGS:");
            eprintln!("    -a           rewrite relative segments as absolute");
            eprintln!("    -n           reduce the path to absolute M/L/C/Z segments");
            eprintln!("    <file.path>  file containing SVG path data ('-' means stdin)");
            std::process::exit(1);
        }
        Ok(result)
    }
}

/// Load path data from the file
fn path_load(path: String) -> Result<PathData, Error> {
    let mut contents = String::new();
    if path != "-" {
        let mut file = File::open(path)?;
        file.read_to_string(&mut contents)?;
    } else {
        std::io::stdin().read_to_string(&mut contents)?;
    }
    Ok(tracing::debug_span!("[parse]").in_scope(|| PathData::parse(&contents)))
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse()?;
    let path = path_load(args.input_file)?;
    tracing::debug!("[path:segments_count] {}", path.len());

    let path = if args.normalize {
        tracing::debug_span!("[normalize]").in_scope(|| path.normalize())
    } else if args.absolutize {
        tracing::debug_span!("[absolutize]").in_scope(|| path.absolutize())
    } else {
        path
    };
    print!("{:?}", path);

    Ok(())
}
