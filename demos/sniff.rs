use binsniff::{Metadata, ParseMode, ParseOptions, error};
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn sniff(path: &Path, opts: &ParseOptions) -> error::Result<()> {
    let file = BufReader::new(File::open(path)?);
    let mut metadata = Metadata::new();
    let result = binsniff::parse_with_opts(file, &mut metadata, opts);
    println!("{}:", path.display());
    for name in metadata.names() {
        for value in metadata.get_all(name) {
            println!("  {}: {}", name, value);
        }
    }
    let format = result?;
    println!("  ({})", format);
    Ok(())
}

fn run() -> error::Result<()> {
    let (flags, paths): (Vec<String>, Vec<String>) =
        env::args().skip(1).partition(|arg| arg.starts_with('-'));
    let verbosity: usize = flags
        .iter()
        .filter(|flag| flag.chars().skip(1).all(|c| c == 'v'))
        .map(|flag| flag.len() - 1)
        .sum();
    stderrlog::new().verbosity(verbosity).init().unwrap();
    let parse_mode = if flags.iter().any(|flag| flag == "--permissive") {
        ParseMode::Permissive
    } else {
        ParseMode::Strict
    };
    let opts = ParseOptions::new().with_parse_mode(parse_mode);
    for path in paths {
        sniff(Path::new(path.as_str()), &opts)?;
    }
    Ok(())
}

pub fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => println!("{:#}", err),
    }
}
