//! Command-line interface for typetable
//! This binary scans a project's model sources for type-table declarations and
//! turns them into fixture files or SQL installation statements.
//!
//! Usage:
//!   typetable fixtures `<root>` --settings `<file>` [--format `<format>`] [--strict]
//!   typetable install `<root>` --settings `<file>`
//!   typetable check `<root>` --settings `<file>`

use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::process;

use typetable::docstring;
use typetable::fixture::{self, FixtureFormatRegistry, FixtureRecord};
use typetable::install::{install_all, SqlWriter};
use typetable::registry::TypeTableRegistry;
use typetable::scan::{self, ScannedTable};
use typetable::settings::{Loader, Settings};
use typetable::table::TypeTable;

fn main() {
    let matches = Command::new("typetable")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Database-backed enumerations: fixtures and installation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fixtures")
                .about("Generate fixture records from model doc comments")
                .arg(root_arg())
                .arg(settings_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default: json)")
                        .default_value("json"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail on malformed type-table doc comments")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("install")
                .about("Render INSERT statements for every declared value")
                .arg(root_arg())
                .arg(settings_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Validate type-table doc comments")
                .arg(root_arg())
                .arg(settings_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("fixtures", sub)) => {
            let root = sub.get_one::<String>("root").expect("root is required");
            let settings_path = sub
                .get_one::<String>("settings")
                .expect("settings is required");
            let format = sub.get_one::<String>("format").expect("format has a default");
            let strict = sub.get_flag("strict");
            handle_fixtures_command(root, settings_path, format, strict);
        }
        Some(("install", sub)) => {
            let root = sub.get_one::<String>("root").expect("root is required");
            let settings_path = sub
                .get_one::<String>("settings")
                .expect("settings is required");
            handle_install_command(root, settings_path);
        }
        Some(("check", sub)) => {
            let root = sub.get_one::<String>("root").expect("root is required");
            let settings_path = sub
                .get_one::<String>("settings")
                .expect("settings is required");
            handle_check_command(root, settings_path);
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn root_arg() -> Arg {
    Arg::new("root")
        .help("Project root directory")
        .required(true)
        .index(1)
}

fn settings_arg() -> Arg {
    Arg::new("settings")
        .long("settings")
        .short('s')
        .help("Project settings file (TOML)")
        .required(true)
}

fn load_settings(path: &str) -> Settings {
    Loader::new().with_file(path).load().unwrap_or_else(|e| {
        eprintln!("Settings error: {}", e);
        process::exit(1);
    })
}

fn scan_tables(root: &str, settings: &Settings) -> Vec<ScannedTable> {
    scan::scan_project(Path::new(root), settings).unwrap_or_else(|e| {
        eprintln!("Scan error: {}", e);
        process::exit(1);
    })
}

/// Handle the fixtures command
fn handle_fixtures_command(root: &str, settings_path: &str, format: &str, strict: bool) {
    let settings = load_settings(settings_path);
    let scanned = scan_tables(root, &settings);

    if strict {
        for table in &scanned {
            if let Err(e) = docstring::extract_values_checked(&table.doc) {
                eprintln!("{}.{}: {}", table.app, table.type_name, e);
                process::exit(1);
            }
        }
    }

    let records: Vec<FixtureRecord> = scanned
        .iter()
        .flat_map(|table| fixture::records_from_doc(&table.app, &table.type_name, &table.doc))
        .collect();

    let registry = FixtureFormatRegistry::with_defaults();
    let output = registry.serialize(&records, format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("\nAvailable formats:");
        for name in registry.list_formats() {
            eprintln!("  {}", name);
        }
        process::exit(1);
    });

    println!("{}", output);
}

/// Handle the install command
fn handle_install_command(root: &str, settings_path: &str) {
    let settings = load_settings(settings_path);
    let scanned = scan_tables(root, &settings);

    let mut registry = TypeTableRegistry::new();
    for table in &scanned {
        let mut builder = TypeTable::builder(&table.type_name);
        for value in docstring::extract_values(&table.doc) {
            builder = builder.value([value]);
        }
        let built = builder.build().unwrap_or_else(|e| {
            eprintln!("{}.{}: {}", table.app, table.type_name, e);
            process::exit(1);
        });
        if let Err(e) = registry.register(built) {
            eprintln!("{}.{}: {}", table.app, table.type_name, e);
            process::exit(1);
        }
    }

    let mut writer = SqlWriter::new();
    install_all(&registry, &mut writer).unwrap_or_else(|e| {
        eprintln!("Install error: {}", e);
        process::exit(1);
    });

    for statement in writer.statements() {
        println!("{}", statement);
    }
}

/// Handle the check command
fn handle_check_command(root: &str, settings_path: &str) {
    let settings = load_settings(settings_path);
    let scanned = scan_tables(root, &settings);

    let mut problems = 0;
    for table in &scanned {
        match docstring::extract_values_checked(&table.doc) {
            Ok(values) => {
                println!("{}.{}: {} values", table.app, table.type_name, values.len());
            }
            Err(e) => {
                eprintln!("{}.{}: {}", table.app, table.type_name, e);
                problems += 1;
            }
        }
    }

    if problems > 0 {
        eprintln!("\n{} type table(s) with problems", problems);
        process::exit(1);
    }
    println!("checked {} type table(s)", scanned.len());
}
