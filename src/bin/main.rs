use itertools::Itertools;
use log::{info, warn};
use std::process::exit;

use clap::{Parser, Subcommand};
use pmacct_bindings::layout::{self, LayoutMismatch, DECLARED};
use pmacct_bindings::surface::{self, HeaderSet};

/// pmacct-bindings inspects the declared pmacct C surface and checks its ABI layout.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the wrapper header bindgen consumes
    Header {
        /// Render the extended include list instead of the core one
        #[clap(long)]
        extended: bool,
    },
    /// List the declared types, functions and constant patterns
    Surface,
    /// Print size, alignment and field offsets of every declared type
    Layout {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
    /// Compare the declared layout against the recorded snapshot, and with `verify-layout` the
    /// declared layout and constants against the generated bindings
    Verify,
}

fn print_mismatches(source: &str, mismatches: &[LayoutMismatch]) {
    eprintln!("{} layout mismatches against {}:", mismatches.len(), source);
    for mismatch in mismatches {
        eprintln!("  {}", mismatch);
    }
}

/// Returns whether the comparison against `source` came out clean.
fn check(source: &str, checked: usize, result: Result<(), Vec<LayoutMismatch>>) -> bool {
    match result {
        Ok(()) => {
            info!("{} entries match {}", checked, source);
            true
        }
        Err(mismatches) => {
            print_mismatches(source, &mismatches);
            false
        }
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    match opts.command {
        Command::Header { extended } => {
            let set = match extended {
                true => HeaderSet::Extended,
                false => HeaderSet::Core,
            };
            print!("{}", surface::render_wrapper(set));
        }
        Command::Surface => {
            println!("types: {}", surface::TYPES.iter().join(" "));
            println!("opaque types: {}", surface::OPAQUE_TYPES.iter().join(" "));
            println!("functions: {}", surface::FUNCTIONS.iter().join(" "));
            println!("constants: {}", surface::CONSTANTS.iter().join(" "));
        }
        Command::Layout { json } => {
            if json {
                match serde_json::to_string_pretty(DECLARED) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("{}", e);
                        exit(1);
                    }
                }
            } else {
                for ty in DECLARED {
                    println!("{}", ty);
                }
            }
        }
        Command::Verify => {
            let mut ok = true;

            match layout::snapshot() {
                Some(snapshot) => {
                    ok &= check(
                        "recorded snapshot",
                        snapshot.len(),
                        layout::verify(snapshot, DECLARED),
                    )
                }
                None => warn!("no recorded layout for this target, skipping snapshot check"),
            }

            #[cfg(feature = "verify-layout")]
            {
                ok &= check(
                    "generated bindings",
                    layout::GENERATED.len(),
                    layout::verify(layout::GENERATED, DECLARED),
                );
                ok &= check(
                    "generated constants",
                    layout::GENERATED_CONSTANTS.len(),
                    layout::verify_constants(
                        layout::GENERATED_CONSTANTS,
                        layout::DECLARED_CONSTANTS,
                    ),
                );
            }

            if !ok {
                exit(1);
            }
            println!("layout ok");
        }
    }
}
