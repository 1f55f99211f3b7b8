use clap::{Parser, Subcommand};
use grouper_core::demos::{
    group_anagrams, group_by_first_letter, group_by_remainder, nested_anagrams, small_categories,
    SMALL_CATEGORY_LIMIT,
};
use grouper_core::{GroupingEngine, GroupingSettings, SampleData};
use serde::Serialize;
use std::fmt::Display;

#[derive(Parser)]
#[command(name = "grouper")]
#[command(about = "Runs the grouping demo queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print engine log messages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Words grouped by first letter, sorted by letter
    FirstLetter,
    /// Numbers grouped by remainder modulo 5
    Remainder,
    /// Product categories with few products
    Categories {
        #[arg(short, long, default_value_t = SMALL_CATEGORY_LIMIT)]
        max: usize,
    },
    /// Words grouped by anagram equality
    Anagrams,
    /// Anagram groups split again by spelling
    Nested,
}

fn main() {
    let cli = Cli::parse();

    let mut settings = GroupingSettings::new();
    if cli.verbose {
        settings = settings.with_log_callback(|message| eprintln!("[grouper] {}", message));
    }
    let engine = GroupingEngine::new(settings);
    let data = SampleData::new();

    let outcome = match cli.command {
        Commands::FirstLetter => group_by_first_letter(&engine, &data).map(|groups| {
            let pairs = groups.into_pairs();
            emit(cli.json, &pairs);
        }),
        Commands::Remainder => {
            emit(cli.json, &group_by_remainder(&engine, &data));
            Ok(())
        }
        Commands::Categories { max } => {
            emit(cli.json, &small_categories(&engine, &data, max));
            Ok(())
        }
        Commands::Anagrams => {
            emit(cli.json, &group_anagrams(&engine, &data).into_pairs());
            Ok(())
        }
        Commands::Nested => nested_anagrams(&engine, &data).map(|groups| {
            let pairs: Vec<(String, Vec<(String, Vec<String>)>)> = groups
                .into_pairs()
                .into_iter()
                .map(|(key, inner)| (key, inner.into_iter().flat_map(|g| g.into_pairs()).collect()))
                .collect();
            if cli.json {
                print_json(&pairs);
            } else {
                for (key, inner) in &pairs {
                    println!("{}:", key);
                    for (inner_key, members) in inner {
                        println!("  {}: {}", inner_key, members.join(", "));
                    }
                }
            }
        }),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn emit<K, T>(json: bool, pairs: &[(K, Vec<T>)])
where
    K: Display + Serialize,
    T: Display + Serialize,
{
    if json {
        print_json(pairs);
        return;
    }

    for (key, members) in pairs {
        let joined: Vec<String> = members.iter().map(|m| m.to_string()).collect();
        println!("{}: {}", key, joined.join(", "));
    }
}

fn print_json<V: Serialize + ?Sized>(value: &V) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: failed to serialize result: {}", e);
            std::process::exit(1);
        }
    }
}
