use crate::options::Options;
use crate::{collect_json_files, sweep, verify};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [PATHS...]\n\
         \n\
         PATHS: files or directories to process. Directories are walked\n\
         recursively for *.json. Defaults to public/locales.\n\
         \n\
         Options:\n\
               --verify              Verification pass only (no repairs, no writes)\n\
               --dry-run             Repair and report, but do not write files\n\
               --no-salvage          Disable the destructive salvage stage\n\
               --no-rewrite-valid    Leave already-valid files byte-untouched\n\
               --ensure-ascii        Escape non-ASCII as \\uXXXX when writing\n\
               --list-failures N     Cap of individually listed failures (default 10)\n\
           -h, --help                Show this help\n",
        prog = program
    );
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "localemend".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut paths: Vec<PathBuf> = Vec::new();
    let mut verify_only = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "--verify" => {
                verify_only = true;
            }
            "--dry-run" => {
                opts.dry_run = true;
            }
            "--no-salvage" => {
                opts.salvage = false;
            }
            "--no-rewrite-valid" => {
                opts.rewrite_valid = false;
            }
            "--ensure-ascii" => {
                opts.ensure_ascii = true;
            }
            "--list-failures" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --list-failures");
                    std::process::exit(2);
                }
                match args[i].parse() {
                    Ok(n) => opts.max_listed_failures = n,
                    Err(_) => {
                        eprintln!("Invalid N for --list-failures: {}", args[i]);
                        std::process::exit(2);
                    }
                }
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                paths.push(PathBuf::from(path));
            }
        }
        i += 1;
    }

    if paths.is_empty() {
        paths.push(PathBuf::from("public/locales"));
    }

    let mode = CliMode { paths, verify_only };
    (opts, mode)
}

struct CliMode {
    paths: Vec<PathBuf>,
    verify_only: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();
    let files = collect_json_files(&mode.paths)?;

    let stdout = io::stdout();
    let mut report = stdout.lock();

    if mode.verify_only {
        let summary = verify(&files, &mut report)?;
        report.flush()?;
        if summary.invalid > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Best-effort batch: unrecoverable files are reported, never fatal.
    sweep(&files, &opts, &mut report)?;
    report.flush()?;
    Ok(())
}
