/// SEO pack — render the full copy-paste package from a RON preset.
///
/// Usage: seo_pack --answers <path.ron> [--section pack|titles|tags|description]

use roteiro_engine::core::seo::compose_seo;
use roteiro_engine::schema::seo::SeoAnswers;
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut answers_path = None;
    let mut section = "pack".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--answers" if i + 1 < args.len() => {
                i += 1;
                answers_path = Some(args[i].clone());
            }
            "--section" if i + 1 < args.len() => {
                i += 1;
                section = args[i].clone();
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let answers = match answers_path {
        Some(ref path) => match SeoAnswers::load_from_ron(Path::new(path)) {
            Ok(answers) => answers,
            Err(e) => {
                eprintln!("Failed to load answers preset {path}: {e}");
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("--answers is required");
            print_usage();
            std::process::exit(1);
        }
    };

    let pack = compose_seo(&answers);
    match section.as_str() {
        "pack" => println!("{}", pack.pack),
        "titles" => {
            for title in &pack.titles {
                println!("- {title}");
            }
        }
        "tags" => println!("{}", pack.tags.join(", ")),
        "description" => println!("{}", pack.description),
        other => {
            eprintln!("Unknown section: {other}");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: seo_pack --answers <path.ron> [--section pack|titles|tags|description]");
}
