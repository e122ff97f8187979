use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use arpabet_ipa::{parse_table_toml, Converter, PhonemeTable};

#[derive(Parser)]
#[command(name = "ipatool", about = "Arpabet-to-IPA conversion tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single Arpabet phrase given as arguments
    Convert {
        /// Arpabet tokens, e.g. HH AW1
        tokens: Vec<String>,
        /// Path to a replacement phoneme table TOML (optional)
        #[arg(long)]
        table: Option<String>,
        /// Output as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Convert a file with one Arpabet phrase per line
    Batch {
        /// Path to the input file
        input_file: String,
        /// Path to the output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Path to a replacement phoneme table TOML (optional)
        #[arg(long)]
        table: Option<String>,
    },
}

#[derive(Serialize)]
struct ConvertRecord<'a> {
    arpabet: &'a str,
    ipa: String,
}

fn load_converter(table: Option<&str>) -> Converter {
    let Some(path) = table else {
        return Converter::new();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("failed to read table {path}: {e}");
        process::exit(1)
    });
    let entries = parse_table_toml(&text).unwrap_or_else(|e| {
        eprintln!("invalid table {path}: {e}");
        process::exit(1)
    });
    let table = PhonemeTable::from_entries(entries).unwrap_or_else(|e| {
        eprintln!("invalid table {path}: {e}");
        process::exit(1)
    });
    Converter::with_table(table)
}

fn main() {
    arpabet_ipa::trace_init::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            tokens,
            table,
            json,
        } => {
            let converter = load_converter(table.as_deref());
            let phrase = tokens.join(" ");
            let ipa = converter.convert(&phrase).unwrap_or_else(|e| {
                eprintln!("{e}");
                process::exit(1)
            });
            if json {
                let record = ConvertRecord {
                    arpabet: &phrase,
                    ipa,
                };
                println!(
                    "{}",
                    serde_json::to_string(&record).expect("record serializes")
                );
            } else {
                println!("{ipa}");
            }
        }

        Command::Batch {
            input_file,
            output,
            table,
        } => {
            let converter = load_converter(table.as_deref());
            let input = fs::File::open(&input_file).unwrap_or_else(|e| {
                eprintln!("failed to open {input_file}: {e}");
                process::exit(1)
            });
            let mut out: Box<dyn Write> = match output {
                Some(path) => {
                    let file = fs::File::create(&path).unwrap_or_else(|e| {
                        eprintln!("failed to create {path}: {e}");
                        process::exit(1)
                    });
                    Box::new(BufWriter::new(file))
                }
                None => Box::new(std::io::stdout().lock()),
            };

            for (line_no, line) in BufReader::new(input).lines().enumerate() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("read error at line {}: {e}", line_no + 1);
                    process::exit(1)
                });
                // Blank lines are allowed in batch input, skipped silently.
                if line.trim().is_empty() {
                    continue;
                }
                match converter.convert(&line) {
                    Ok(ipa) => writeln!(out, "{ipa}").expect("write output"),
                    Err(e) => {
                        eprintln!("line {}: {e}", line_no + 1);
                        process::exit(1);
                    }
                }
            }
        }
    }
}
