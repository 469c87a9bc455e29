use std::env;
use std::io::{self, BufRead};
use std::process;

use serde::Serialize;

use stemcache::Stemmer;

#[derive(Serialize)]
struct Stemmed<'a> {
    word: &'a str,
    stem: String,
}

/// Stems whitespace-separated words from stdin, one JSON record per word.
///
///     stem [ALGORITHM]      default algorithm is "english"
///     stem --list           print the available algorithm names
fn main() {
    env_logger::init();

    let algorithm = env::args().nth(1).unwrap_or_else(|| "english".to_string());
    if algorithm == "--list" {
        for name in stemcache::algorithms() {
            println!("{}", name);
        }
        return;
    }

    let mut stemmer = match Stemmer::new(&algorithm) {
        Ok(stemmer) => stemmer,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.unwrap();
        for word in line.split_whitespace() {
            let record = Stemmed {
                word,
                stem: stemmer.stem(word),
            };
            println!("{}", serde_json::to_string(&record).unwrap());
        }
    }
}
