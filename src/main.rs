use std::{
    env,
    io::{self, BufRead},
    process,
    time::Instant,
};

use tdop::{display_error, parser::parser::parse_str};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let ok = if args.is_empty() {
        log::info!("reading expressions from stdin");
        let mut ok = true;
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(error) => {
                    eprintln!("Error: failed to read stdin: {}", error);
                    process::exit(1);
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            ok &= run(&line);
        }
        ok
    } else {
        run(&args.join(" "))
    };

    if !ok {
        process::exit(1);
    }
}

/// Parses `source` and prints its tree, or reports the error.
fn run(source: &str) -> bool {
    let start = Instant::now();
    let result = parse_str(source);
    log::debug!("parsed {:?} in {:?}", source, start.elapsed());

    match result {
        Ok(node) => {
            println!("{}", node);
            true
        }
        Err(error) => {
            display_error(&error, source);
            false
        }
    }
}
