use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde_json::Value;

use json_record_helpers as jrh;

/// Simple runner: record helpers over a JSON array file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Records whose `name` field equals NAME
    ByName { file: PathBuf, name: String },
    /// Records whose `type` field equals TYPE
    ByType { file: PathBuf, r#type: String },
    /// First record whose `name` field equals NAME
    FirstByName { file: PathBuf, name: String },
    /// First record whose `type` field equals TYPE
    FirstByType { file: PathBuf, r#type: String },
    /// Comma-joined `name` fields
    Names { file: PathBuf },
    /// One uniformly random record
    Random { file: PathBuf },
    /// Sort ascending by a property value
    Sort {
        file: PathBuf,
        prop: String,
        /// Treat PROP as a dot-separated path into nested records
        #[arg(long)]
        deep: bool,
    },
    /// Uppercase the first character of TEXT
    Capitalize { text: String },
    /// Shorten URL via the default provider
    Shorten { url: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match args.cmd {
        Cmd::ByName { file, name } => {
            let records = load_records(&file);
            print_json(&Value::Array(jrh::get_by_name(&records, &name)));
        }
        Cmd::ByType { file, r#type } => {
            let records = load_records(&file);
            print_json(&Value::Array(jrh::get_by_type(&records, &r#type)));
        }
        Cmd::FirstByName { file, name } => {
            let records = load_records(&file);
            match jrh::get_first_by_name(&records, &name) {
                Some(rec) => print_json(rec),
                None => print_json(&Value::Null),
            }
        }
        Cmd::FirstByType { file, r#type } => {
            let records = load_records(&file);
            match jrh::get_first_by_type(&records, &r#type) {
                Some(rec) => print_json(rec),
                None => print_json(&Value::Null),
            }
        }
        Cmd::Names { file } => {
            let records = load_records(&file);
            println!("{}", jrh::get_name_list(&records));
        }
        Cmd::Random { file } => {
            let records = load_records(&file);
            match jrh::get_random_entry(&records) {
                Some(rec) => print_json(rec),
                None => {
                    eprintln!("no records in {}", file.display());
                    process::exit(1);
                }
            }
        }
        Cmd::Sort { file, prop, deep } => {
            let records = load_records(&file);
            let sorted = if deep {
                jrh::sort_by_deep_prop(&records, &prop)
            } else {
                jrh::sort_by_prop(&records, &prop)
            };
            print_json(&Value::Array(sorted));
        }
        Cmd::Capitalize { text } => {
            println!("{}", jrh::capitalize(&text));
        }
        Cmd::Shorten { url } => match jrh::shorten_url(&url).await {
            Ok(short) => println!("{short}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
    }
}

/// Load FILE as a JSON array of records, exiting on anything else.
fn load_records(file: &Path) -> Vec<Value> {
    let dir = file.parent().unwrap_or_else(|| Path::new("."));
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let doc = match jrh::load_config(&name, dir) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    match doc {
        Value::Array(records) => records,
        _ => {
            eprintln!("expected a JSON array in {}", file.display());
            process::exit(1);
        }
    }
}

fn print_json(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}
