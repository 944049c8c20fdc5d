/// Preview — render every story artifact from a RON preset.
///
/// Usage: preview --story <path.ron> [--lang pt|en] [--seed <n>] [--takes]
///
/// Prints the bible, the season outline and the episode-1 script; with
/// --takes it also prints the finished prompt for every derived take.

use rand::rngs::StdRng;
use rand::SeedableRng;
use roteiro_engine::core::lang::Lang;
use roteiro_engine::core::prompt::take_prompt;
use roteiro_engine::core::story::compose_story;
use roteiro_engine::schema::story::StoryInputs;
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut story_path = None;
    let mut lang = Lang::Pt;
    let mut seed: u64 = 42;
    let mut with_takes = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--story" if i + 1 < args.len() => {
                i += 1;
                story_path = Some(args[i].clone());
            }
            "--lang" if i + 1 < args.len() => {
                i += 1;
                lang = match args[i].as_str() {
                    "en" => Lang::En,
                    _ => Lang::Pt,
                };
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--takes" => {
                with_takes = true;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let inputs = match story_path {
        Some(ref path) => match StoryInputs::load_from_ron(Path::new(path)) {
            Ok(inputs) => inputs,
            Err(e) => {
                eprintln!("Failed to load story preset {path}: {e}");
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("--story is required");
            print_usage();
            std::process::exit(1);
        }
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let output = compose_story(&inputs, lang, &mut rng);

    println!("{}", output.bible);
    println!("\n========\n");
    println!("{}", output.outline);
    println!("\n========\n");
    println!("{}", output.script);

    if with_takes {
        for take in &output.takes {
            println!("\n========\n");
            println!("{}", take_prompt(take, lang));
        }
    } else {
        println!(
            "\n({} takes derived; rerun with --takes to print their prompts)",
            output.takes.len()
        );
    }
}

fn print_usage() {
    println!("Usage: preview --story <path.ron> [--lang pt|en] [--seed <n>] [--takes]");
    println!();
    println!("  --story <path>   RON preset with the StoryInputs record");
    println!("  --lang pt|en     output language (default pt)");
    println!("  --seed <n>       RNG seed for take ids (default 42)");
    println!("  --takes          also print one prompt per derived take");
}
