use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use quiz_prep::{DEFAULT_QUESTIONS_PATH, Quiz, load_quiz_data_from_json};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question bank from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Course to start straight away (requires --module)
    #[arg(short, long, requires = "module")]
    course: Option<String>,

    /// Module of --course to start straight away
    #[arg(short, long, requires = "course")]
    module: Option<String>,

    /// Write logs to this file; logs are discarded otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref());

    let mut quiz = match load_quiz_data_from_json(&args.questions) {
        Ok(data) => Quiz::new(data),
        Err(e) => {
            error!(path = %args.questions.display(), "{}", e);
            Quiz::unavailable(e.to_string())
        }
    };

    if let (Some(course), Some(module)) = (&args.course, &args.module) {
        if let Err(e) = quiz.start(course, module) {
            warn!("{}", e);
        }
    }

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

// The TUI owns stdout, so logs only go to a file.
fn init_tracing(log_file: Option<&PathBuf>) {
    let writer = match log_file.map(File::create) {
        Some(Ok(file)) => BoxMakeWriter::new(Mutex::new(file)),
        Some(Err(e)) => {
            eprintln!("Could not open log file: {}", e);
            BoxMakeWriter::new(std::io::sink)
        }
        None => BoxMakeWriter::new(std::io::sink),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_line_number(true)
        .init();
}
