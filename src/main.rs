/*!
 * Asylum - advanced password list generator
 *
 * Enumerates candidate passwords from a character set, explicit patterns or
 * a word list, optionally expands them with smart mutations, and streams
 * them to an output file across parallel workers.
 */

mod cli;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;

use asylum::charset::{self, CharsetOptions};
use asylum::generator::PasswordGenerator;
use asylum::runner::{self, CancelToken, RunOptions};
use asylum::spec::GenerationSpec;

const BANNER: &str = r#"
    _     ____  __   __ _      _   _  __  __
   / \   / ___| \ \ / /| |    | | | ||  \/  |
  / _ \  \___ \  \ V / | |    | | | || |\/| |
 / ___ \  ___) |  | |  | |___ | |_| || |  | |
/_/   \_\|____/   |_|  |_____| \___/ |_|  |_|
"#;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    println!("{}", BANNER.red());
    println!("{}\n", "        Password List Generator".green());
    println!("{}", "Advanced Password List Generator".bold());
    println!("================================");

    let charset = charset::build(&CharsetOptions {
        lowercase: args.lowercase,
        uppercase: args.uppercase,
        digits: args.digits,
        punctuation: args.special,
        custom: args.custom.clone(),
    });

    if !charset.is_empty() {
        println!(
            "Character set: {}",
            charset.iter().collect::<String>().cyan()
        );
    }

    let words = match &args.words {
        Some(path) if path.exists() => {
            let words = load_words(path)?;
            println!(
                "Number of loaded common words: {}",
                words.len().to_string().cyan()
            );
            words
        }
        Some(path) => {
            println!(
                "{}",
                format!("⚠️  Common words file '{}' not found.", path.display()).yellow()
            );
            Vec::new()
        }
        None => Vec::new(),
    };

    let patterns = args
        .patterns
        .as_ref()
        .map(|p| p.split(',').map(|s| s.to_string()).collect::<Vec<_>>());
    if let Some(patterns) = &patterns {
        println!("Password patterns: {}", patterns.join(", ").cyan());
    }

    let spec = GenerationSpec {
        charset,
        min_length: args.min,
        max_length: args.max,
        patterns,
        words,
    };
    let generator =
        PasswordGenerator::from_spec(&spec).context("invalid generation settings")?;

    let total = generator.total();
    println!("Estimated total passwords: {}", format_count(total).green());
    if total == 0 {
        bail!("no passwords will be generated with current settings");
    }

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || {
            eprintln!("\n{}", "Stopping password generation...".yellow());
            cancel.cancel();
        })
        .context("failed to install the shutdown handler")?;
    }

    let options = RunOptions {
        smart: args.smart,
        chunk_size: args.chunk_size,
        threads: args.threads.unwrap_or_else(num_cpus::get),
        progress: true,
    };

    let summary = runner::run(&generator, &args.output, &options, &cancel)?;

    println!();
    println!(
        "Execution time: {:.2} seconds",
        summary.elapsed.as_secs_f64()
    );
    println!(
        "Total passwords generated: {}",
        format_count(summary.written as u128).green()
    );
    println!(
        "Password list saved to {}",
        args.output.display().to_string().cyan()
    );

    Ok(())
}

/// Load the word list backing the 'w' pattern token, one word per line.
fn load_words(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open word list {}", path.display()))?;
    let words = BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    Ok(words)
}

/// Thousands-separated rendering for large candidate counts.
fn format_count(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
