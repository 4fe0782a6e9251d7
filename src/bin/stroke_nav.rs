// Stroke Navigator CLI Tool
// Command-line and interactive interface for stroke-based character search

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use stroke_nav::{
    format_pattern, parse_pattern, Config, DataLoader, PatternError, SearchResult, Stats,
    StrokeNavigator,
};
use tracing_subscriber::EnvFilter;

/// Stroke Navigator - Find Chinese characters by their strokes
#[derive(Parser, Debug)]
#[command(name = "stroke-nav")]
#[command(about = "Find Chinese characters by the first strokes of their drawing order", long_about = None)]
#[command(version)]
struct Args {
    /// Directory holding the dictionary (default: $STROKE_NAV_DATA_DIR or "data")
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Dictionary file inside the data directory (default: characters.json)
    #[arg(short, long, global = true, value_name = "NAME")]
    file: Option<String>,

    /// Use the bundled sample dictionary instead of the data directory
    #[arg(long, global = true)]
    embedded: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search characters by stroke codes (e.g. `search h s p`)
    Search {
        /// Stroke codes: h, s, p, n, z
        #[arg(value_name = "STROKES", required = true, num_args = 1..)]
        strokes: Vec<String>,

        /// Maximum number of results to display
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show the stroke types guide
    Guide,
    /// Show dictionary statistics
    Stats,
    /// Check the dictionary for incomplete entries
    Validate,
    /// Write the loaded dictionary to a file
    Export {
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
    /// Interactive menu (default)
    Menu {
        /// Do not clear the screen between pages
        #[arg(long)]
        no_clear: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::new();
    if let Some(dir) = &args.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(file) = &args.file {
        config = config.with_characters_file(file);
    }
    if args.verbose {
        config = config.with_log_filter("stroke_nav=debug");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let navigator = if args.embedded {
        StrokeNavigator::embedded()
    } else {
        if let Err(e) = DataLoader::ensure_dir(&config.data_dir) {
            tracing::warn!("Could not create {}: {e}", config.data_dir.display());
        }
        StrokeNavigator::from_config(&config)
    };

    match args.command.unwrap_or(Command::Menu { no_clear: false }) {
        Command::Search { strokes, limit } => {
            let codes = parse_pattern(&strokes.join(" "))?;
            let mut results = navigator.find_codes(&codes);
            if let Some(limit) = limit {
                results.truncate(limit);
            }
            println!("Pattern: {}", format_pattern(&codes));
            print_results(&results);
        }
        Command::Guide => print!("{}", navigator.stroke_help()),
        Command::Stats => print_stats(&navigator.stats()),
        Command::Validate => {
            let issues = navigator.validate();
            if issues.is_empty() {
                println!("✅ {} characters, no problems found", navigator.store().len());
            } else {
                for issue in &issues {
                    println!("⚠️  {issue}");
                }
                println!("\n{} problem(s) found", issues.len());
            }
        }
        Command::Export { output } => {
            navigator
                .store()
                .save(&output)
                .with_context(|| format!("exporting dictionary to {}", output.display()))?;
            println!("✅ Saved {} characters to {}", navigator.store().len(), output.display());
        }
        Command::Menu { no_clear } => {
            let stdin = io::stdin();
            let mut menu = Menu {
                navigator: &navigator,
                input: stdin.lock(),
                clear: !no_clear,
                data_path: config.characters_path(),
            };
            menu.run()?;
        }
    }

    Ok(())
}

/// Interactive main menu loop over stdin
struct Menu<'a, R> {
    navigator: &'a StrokeNavigator,
    input: R,
    clear: bool,
    data_path: PathBuf,
}

impl<R: BufRead> Menu<'_, R> {
    fn run(&mut self) -> io::Result<()> {
        loop {
            self.clear_screen();
            print_banner();

            println!("\n{}", "=".repeat(50));
            println!("MAIN MENU");
            println!("{}", "=".repeat(50));
            println!("1. 🔍 Search characters by strokes");
            println!("2. 📚 View stroke types guide");
            println!("3. ℹ️  About this project");
            println!("4. 🚪 Exit");
            println!("{}", "=".repeat(50));

            let Some(choice) = self.prompt("\nEnter your choice (1-4): ")? else {
                println!("\n谢谢! Thank you for using Stroke Navigator! 👋");
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.search()?,
                "2" => self.guide()?,
                "3" => self.about()?,
                "4" => {
                    println!("\n谢谢! Thank you for using Stroke Navigator! 👋");
                    return Ok(());
                }
                _ => self.pause("\nInvalid choice! Press Enter to continue...")?,
            }
        }
    }

    fn search(&mut self) -> io::Result<()> {
        self.clear_screen();
        println!("🔍 STROKE SEARCH");
        println!("{}", "=".repeat(30));
        println!("\nEnter stroke types (one by one):");
        println!("h: 横(héng)  s: 竖(shù)  p: 撇(piě)");
        println!("n: 捺(nà)    z: 折(zhé)");
        println!("\nExample: 'h s p' for 横竖撇");

        let input = self
            .prompt("\nEnter strokes (space separated): ")?
            .unwrap_or_default();

        let codes = match parse_pattern(&input) {
            Ok(codes) => codes,
            Err(PatternError::EmptyPattern) => {
                return self.pause("\nNo strokes entered! Press Enter to continue...");
            }
            Err(PatternError::InvalidCodes { codes }) => {
                println!("\n❌ Invalid stroke codes: {codes:?}");
                println!("Please use only: h, s, p, n, z");
                return self.pause("\nPress Enter to continue...");
            }
        };

        let pattern = format_pattern(&codes);
        println!("\n🔎 Searching for pattern: {pattern}...");
        let results = self.navigator.find_codes(&codes);

        self.clear_screen();
        println!("📊 SEARCH RESULTS");
        println!("{}", "=".repeat(40));
        println!("Pattern: {pattern}");
        print_results(&results);

        self.pause("\nPress Enter to return to menu...")
    }

    fn guide(&mut self) -> io::Result<()> {
        self.clear_screen();
        println!("📚 STROKE TYPES GUIDE");
        println!("{}", "=".repeat(35));
        println!("{}", self.navigator.stroke_help());
        println!("\n💡 Tip: Characters are built from these basic strokes!");
        self.pause("\nPress Enter to return to menu...")
    }

    fn about(&mut self) -> io::Result<()> {
        self.clear_screen();
        println!("ℹ️  ABOUT STROKE NAVIGATOR");
        println!("{}", "=".repeat(45));
        println!("\nA Chinese character learning tool");
        println!("that helps you find characters by their strokes!");
        println!("\n🌟 Features:");
        println!("  • Stroke-based character search");
        println!("  • Radical statistics");
        println!("  • Dictionary validation");
        println!("\n🎯 Perfect for:");
        println!("  • Chinese language learners");
        println!("  • Character recognition practice");
        println!("  • Stroke order learning");
        println!("\n📁 Dictionary: {}", self.data_path.display());
        println!("📖 Characters loaded: {}", self.navigator.store().len());
        self.pause("\nPress Enter to return to menu...")
    }

    /// Print `message` and read one trimmed line; `None` on end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn pause(&mut self, message: &str) -> io::Result<()> {
        self.prompt(message).map(|_| ())
    }

    fn clear_screen(&self) {
        if self.clear {
            print!("\x1b[2J\x1b[H");
        }
    }
}

fn print_banner() {
    println!(
        r#"
    ╔═══════════════════════════════════════════════╗
    ║        笔画导航 - Chinese Stroke Navigator        ║
    ║       Find Chinese characters by strokes!       ║
    ╚═══════════════════════════════════════════════╝
"#
    );
}

fn print_results(results: &[SearchResult]) {
    println!("Found {} matching characters", results.len());
    println!("{}", "=".repeat(40));

    if results.is_empty() {
        println!("\n❌ No characters found matching that stroke pattern.");
        println!("Try a different pattern or check the stroke guide!");
        return;
    }

    for (idx, result) in results.iter().enumerate() {
        println!("{}", render_result(idx + 1, result));
        println!();
    }
}

/// Three-line display block for one match
fn render_result(position: usize, result: &SearchResult) -> String {
    format!(
        "{}. {} - {}\n   Meaning: {}\n   Strokes: {} total ({})",
        position,
        result.character,
        result.pinyin,
        result.meaning,
        result.stroke_count,
        result.strokes.join(" ")
    )
}

fn print_stats(stats: &Stats) {
    if stats.is_empty() {
        println!("📭 Dictionary is empty");
        return;
    }

    println!("📊 Dictionary Statistics");
    println!("─────────────────────────");
    println!("  Total characters: {}", stats.total_characters);

    println!("\n  By stroke count:");
    for (strokes, count) in stats.strokes_sorted() {
        println!("    {:>2} strokes: {}", strokes, count);
    }

    println!("\n  By radical:");
    for (radical, count) in stats.radicals_sorted() {
        println!("    {:<8} {}", radical, count);
    }
}
