extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate fzpick;
extern crate shlex;

use std::env;
use std::io::{self, BufRead, Write};

use clap::Parser;
use color_eyre::Result;
use fzpick::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("fzp: {err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> PickOptions {
    let mut args: Vec<String> = env::args().take(1).collect();
    args.extend(
        env::var("FZPICK_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    PickOptions::parse_from(args).build()
}

fn read_items(input: impl BufRead) -> io::Result<Vec<String>> {
    input
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
        .collect()
}

fn real_main() -> Result<i32> {
    color_eyre::install()?;
    let opts = parse_args();

    //------------------------------------------------------------------------------
    // read from pipe
    let items = read_items(io::stdin().lock())?;
    debug!("read {} items", items.len());

    //------------------------------------------------------------------------------
    // filter mode
    if let Some(query) = &opts.filter {
        return filter(&opts, query, items);
    }

    //------------------------------------------------------------------------------
    let picker = Picker::new(opts.clone());
    let picked = if opts.multi {
        picker.multi_select(items)
    } else {
        picker.select(items).map(|item| vec![item])
    };

    //------------------------------------------------------------------------------
    // output
    match picked {
        Ok(items) => {
            let mut stdout = io::stdout().lock();
            for item in items {
                writeln!(stdout, "{item}")?;
            }
            stdout.flush()?;
            Ok(0)
        }
        Err(PickError::AbortedByUser) => Ok(130),
        Err(err @ (PickError::EmptyInput | PickError::EmptyResult)) => {
            debug!("{err}");
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}

/// Prints the ranked matches of `query` without drawing anything
fn filter(opts: &PickOptions, query: &str, items: Vec<String>) -> Result<i32> {
    let matcher = Matcher::from_options(opts);
    let candidates = matcher.candidates(items);
    let results = matcher.run(&candidates, query);

    let mut stdout = io::stdout().lock();
    for result in &results {
        writeln!(stdout, "{}", result.text)?;
    }
    stdout.flush()?;

    Ok(if results.is_empty() { 1 } else { 0 })
}
