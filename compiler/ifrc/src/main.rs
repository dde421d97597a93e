//! IFR CLI
//!
//! Builds a read-only Interface Repository from a class catalog.

use ifrc::commands::{parse_build_options, run_build};

fn main() {
    ifrc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "build" => {
            if args.len() < 4 {
                eprintln!("Usage: ifrc build <catalog.json> <class>... [options]");
                eprintln!();
                print_build_options();
                std::process::exit(1);
            }

            let options = match parse_build_options(&args[3..]) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };

            let mut stdout = std::io::stdout().lock();
            if let Err(err) = run_build(&args[2], &options, &mut stdout) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("IFR - read-only CORBA Interface Repository for Java classes");
    println!();
    println!("Usage: ifrc <command> [options]");
    println!();
    println!("Commands:");
    println!("  build <catalog.json> <class>...   Map classes and print the requested views");
    println!("  help                              Show this message");
    println!();
    print_build_options();
    println!();
    println!("Logging:");
    println!("  IFR_LOG=<filter>     tracing filter, e.g. ifr_repository=debug (falls back to RUST_LOG)");
    println!("  IFR_LOG_TREE=1       render spans as an indented tree");
}

fn print_build_options() {
    println!("Build options:");
    println!("  --tree                 Print the definition tree");
    println!("  --lookup=<id>          Resolve a repository ID to a scoped name (repeatable)");
    println!("  --describe=<name>      Describe the definition at a scoped name (repeatable)");
    println!("  --orb-name=<name>      ORB name (default: ifr)");
    println!("  --host=<host>          Host in object references (default: 127.0.0.1)");
    println!("  --port=<port>          Port in object references (default: 3528)");
    println!("  --poa=<name>           Object adapter name (default: IR)");
    println!("  --prefix=<prefix>      Object key prefix (default: IR:)");
}
