use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use colaccel::{ParsedFile, SectionMap, Table, report};

/// Dump a collision accelerator file as a text report
#[derive(Parser)]
#[command(name = "colaccel-dump")]
#[command(version)]
struct Cli {
    /// Collision accelerator file to decode
    input: PathBuf,

    /// Report path (defaults to <input stem>_dump.txt next to the input)
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write the report to stdout
    #[arg(long)]
    stdout: bool,

    /// Print the section layout instead of the report
    #[arg(long)]
    layout: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("\nERROR: Failed to dump {}", cli.input.display());
        eprintln!("  {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> colaccel::Result<()> {
    if cli.layout {
        let map = colaccel::scan_file(&cli.input)?;
        print_layout(&map);
        return Ok(());
    }

    let parsed = colaccel::read_file(&cli.input)?;

    if cli.stdout {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        report::write_report(&parsed, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    let mut out = BufWriter::new(File::create(&output)?);
    report::write_report(&parsed, &mut out)?;
    out.flush()?;

    print_summary(&parsed, &output);
    Ok(())
}

/// `dir/name.bin` -> `dir/name_dump.txt`
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "colaccel".to_string());
    input.with_file_name(format!("{}_dump.txt", stem))
}

fn print_summary(parsed: &ParsedFile, output: &Path) {
    println!("{}", "=".repeat(60));
    println!("  File size: {} bytes", parsed.file_size);
    println!("  Collision items: {}", parsed.collision_item_count);
    println!("  Sections: {}", parsed.section_count);
    println!("  Collision bounds: {}", parsed.bounds_count);
    println!("  IPL items: {}", parsed.placement_item_count);
    if parsed.trailing_bytes > 0 {
        println!("  Trailing bytes: {}", parsed.trailing_bytes);
    }
    println!("{}", "=".repeat(60));
    println!("Report written to {}", output.display());
}

fn print_layout(map: &SectionMap) {
    println!("File size: {} bytes", map.file_size);
    println!("{}", "=".repeat(60));
    for table in Table::ALL {
        let span = map.span(table);
        println!(
            "  {:<16} {:>8} x {:>2} bytes  {:#010x}..{:#010x}",
            table.to_string(),
            map.count(table),
            table.record_size(),
            span.start,
            span.end
        );
        if table == Table::SectionSizes {
            println!(
                "  {:<16} {:>22}  {:#010x}..{:#010x}",
                "reserved", "", map.reserved.start, map.reserved.end
            );
        }
    }
    println!("{}", "=".repeat(60));
    println!("Trailing bytes: {}", map.trailing_bytes);
}
