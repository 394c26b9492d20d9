use std::path::PathBuf;

use clap::Parser;
use discipline_quiz::Quiz;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with a discipline and answers to check (built-in sample if omitted)
    #[arg(short, long)]
    quiz: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let quiz = match args.quiz {
        Some(path) => Quiz::from_json(path),
        None => Ok(Quiz::sample()),
    };

    if let Err(e) = quiz.and_then(|quiz| quiz.run()) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
