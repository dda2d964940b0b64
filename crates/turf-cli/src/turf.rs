//! TURF reach analysis CLI
//!
//! Usage: turf <FILE> --size <K> [options]
//!
//! Options:
//!   --size, -k <K>            Subset size (number of items per combination)
//!   --columns, -c <A,B,...>   Columns to analyse, in reveal order (default: all)
//!   --column <NAME>           Add one column verbatim (repeatable, for names with commas)
//!   --delimiter, -d <CHAR>    Field delimiter (default: ',')
//!   --top <N>                 Number of ranked combinations to show (default: 10)
//!   --parallel                Evaluate combinations on all cores
//!   --max-combinations <N>    Refuse runs with more than N combinations
//!   --verbose, -v             Debug logging
//!   --help, -h                Show help
//!
//! Example: turf survey.csv --size 3 --columns "Brand A,Brand B,Brand C,Brand D"

use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;
use turf_reach::infra::report::{format_results_table, format_waterfall};
use turf_reach::{
    CsvOptions, LoadError, ReachError, ReachOptions, compute_reach_str_with_options,
    load_dataset, rank_by_total_reach,
};

const DEFAULT_TOP: usize = 10;

struct Args {
    file: PathBuf,
    size: String,
    columns: Option<Vec<String>>,
    delimiter: char,
    top: usize,
    parallel: bool,
    max_combinations: Option<u64>,
    verbose: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <FILE> --size <K> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <FILE>                    Delimited text file, one header row, one row per respondent");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size, -k <K>            Subset size (number of items per combination)");
    eprintln!("  --columns, -c <A,B,...>   Columns to analyse, in reveal order (default: all)");
    eprintln!("  --column <NAME>           Add one column verbatim (repeatable, for names with commas)");
    eprintln!("  --delimiter, -d <CHAR>    Field delimiter (default: ',')");
    eprintln!("  --top <N>                 Number of ranked combinations to show (default: {})", DEFAULT_TOP);
    eprintln!("  --parallel                Evaluate combinations on all cores");
    eprintln!("  --max-combinations <N>    Refuse runs with more than N combinations");
    eprintln!("  --verbose, -v             Debug logging");
    eprintln!("  --help, -h                Show this help message");
    eprintln!();
    eprintln!("Cells: blank/NA/NaN/null, 0 and FALSE count as not reached; anything else as reached.");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();
    parse_args_from(&args)
}

fn parse_args_from(args: &[String]) -> Result<Args, String> {
    let mut file: Option<PathBuf> = None;
    let mut size: Option<String> = None;
    let mut columns: Option<Vec<String>> = None;
    let mut delimiter = ',';
    let mut top = DEFAULT_TOP;
    let mut parallel = false;
    let mut max_combinations: Option<u64> = None;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" | "-k" => size = Some(take_value(args, &mut i)?.to_string()),
            "--columns" | "-c" => {
                let list = take_value(args, &mut i)?;
                columns.get_or_insert_with(Vec::new).extend(
                    list.split(',')
                        .map(|name| name.trim().to_string())
                        .filter(|name| !name.is_empty()),
                );
            }
            "--column" => {
                let name = take_value(args, &mut i)?;
                columns.get_or_insert_with(Vec::new).push(name.to_string());
            }
            "--delimiter" | "-d" => {
                let value = take_value(args, &mut i)?;
                delimiter = match value {
                    "\\t" | "tab" => '\t',
                    _ => {
                        let mut chars = value.chars();
                        match (chars.next(), chars.next()) {
                            (Some(c), None) => c,
                            _ => return Err(format!("Delimiter must be one character: {}", value)),
                        }
                    }
                };
            }
            "--top" => {
                let value = take_value(args, &mut i)?;
                top = value
                    .parse()
                    .map_err(|_| format!("Invalid --top value: {}", value))?;
            }
            "--max-combinations" => {
                let value = take_value(args, &mut i)?;
                max_combinations = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid --max-combinations value: {}", value))?,
                );
            }
            "--parallel" => parallel = true,
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if file.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                file = Some(PathBuf::from(arg));
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Args {
        file: file.ok_or("Missing input file")?,
        size: size.ok_or("Missing --size")?,
        columns,
        delimiter,
        top,
        parallel,
        max_combinations,
        verbose,
    })
}

fn take_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn format_load_error(file: &Path, err: LoadError) -> String {
    match err {
        LoadError::Io(msg) => format!("Cannot read '{}': {}", file.display(), msg),
        LoadError::InvalidDelimiter(c) => format!(
            "Delimiter {:?} cannot be used: it clashes with quoting or line breaks.",
            c
        ),
        LoadError::MissingHeader => format!(
            "'{}' is empty.\nThe first row must hold the column names.",
            file.display()
        ),
        other => format!("Invalid input file '{}': {}", file.display(), other),
    }
}

fn format_reach_error(err: ReachError, available: &[String]) -> String {
    match err {
        ReachError::NoColumnsSelected => {
            "No columns selected. Pass --columns or omit it to use every column.".to_string()
        }
        ReachError::InvalidSubsetSize(text) => {
            format!("Subset size must be an integer, got '{}'.", text)
        }
        ReachError::SubsetSizeOutOfRange { size, max } => format!(
            "Subset size {} is out of range.\nIt must be between 1 and the number of selected columns ({}).",
            size, max
        ),
        ReachError::UnknownColumn(name) => format!(
            "Unknown column '{}'.\nAvailable columns: {}",
            name,
            available.join(", ")
        ),
        ReachError::DuplicateColumn(name) => {
            format!("Column '{}' is selected more than once.", name)
        }
        ReachError::EmptyDataset => {
            "The dataset has no rows; reach is undefined.".to_string()
        }
        ReachError::TooManyCombinations { count, limit } => format!(
            "{} combinations exceed the limit of {}.\nLower --size, select fewer columns or raise --max-combinations.",
            count, limit
        ),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Warning: logger already initialised");
    }
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    init_logging(args.verbose);

    let start = Instant::now();
    let csv_options = CsvOptions::default().with_delimiter(args.delimiter);
    let dataset = match load_dataset(&args.file, &csv_options) {
        Ok(d) => d,
        Err(e) => {
            error!("{}", format_load_error(&args.file, e));
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} rows x {} columns from {}",
        dataset.row_count(),
        dataset.column_count(),
        args.file.display()
    );

    let selected = args
        .columns
        .unwrap_or_else(|| dataset.column_names().to_vec());

    let mut options = ReachOptions::default().with_parallel(args.parallel);
    if let Some(limit) = args.max_combinations {
        options = options.with_max_combinations(limit);
    }

    let results = match compute_reach_str_with_options(&dataset, &selected, &args.size, &options) {
        Ok(r) => r,
        Err(e) => {
            error!("{}", format_reach_error(e, dataset.column_names()));
            std::process::exit(1);
        }
    };
    info!(
        "Evaluated {} combinations in {:.3} seconds",
        results.len(),
        start.elapsed().as_secs_f64()
    );

    println!("{}", format_results_table(&results));

    let ranked = rank_by_total_reach(&results);
    println!("Top {} combinations by total reach:", args.top.min(ranked.len()));
    for (rank, result) in ranked.iter().take(args.top).enumerate() {
        println!("  {:>3}. {:>6.2}%  {}", rank + 1, result.total_reach, result.label());
    }

    if let Some(best) = ranked.first() {
        println!();
        println!("Waterfall for {}:", best.label());
        print!("{}", format_waterfall(best));
    }
}
