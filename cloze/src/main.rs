//! English grammar practice CLI.
//!
//! An interactive quiz over the builtin word bank:
//!
//! ```bash
//! cargo run -p cloze -- --type conjunction --level 2 --count 5
//! ```
//!
//! With `--json` each question is printed as one JSON line instead, for
//! scripted consumers:
//!
//! ```bash
//! cargo run -p cloze -- --json --count 20 > questions.jsonl
//! ```

use cloze_core::{builtin_bank, QuestionEngine, QuestionRecord, QuestionType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};

const USAGE: &str = "\
Usage: cloze [options]

Options:
  --type <passive|conjunction>   question type (default: passive)
  --level <N>                    difficulty level >= 1 (default: 1)
  --count <N>                    number of questions (default: 5)
  --seed <N>                     pin the random source for a reproducible run
  --json                         print questions as JSON lines and exit
  --help                         show this help
";

#[derive(Debug, Clone)]
struct Options {
    kind: QuestionType,
    level: u32,
    count: usize,
    seed: Option<u64>,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            kind: QuestionType::Passive,
            level: 1,
            count: 5,
            seed: None,
            json: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--type" => {
                let value = iter.next().ok_or("--type needs a value")?;
                options.kind = QuestionType::from_name(value)
                    .ok_or_else(|| format!("unknown question type: {value}"))?;
            }
            "--level" => {
                let value = iter.next().ok_or("--level needs a value")?;
                options.level = value
                    .parse()
                    .map_err(|_| format!("invalid level: {value}"))?;
                if options.level == 0 {
                    return Err("level must be at least 1".to_string());
                }
            }
            "--count" => {
                let value = iter.next().ok_or("--count needs a value")?;
                options.count = value
                    .parse()
                    .map_err(|_| format!("invalid count: {value}"))?;
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value.parse().map_err(|_| format!("invalid seed: {value}"))?;
                options.seed = Some(seed);
            }
            "--json" => options.json = true,
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print!("{USAGE}");
        return Ok(());
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let engine = QuestionEngine::new(builtin_bank());
    match options.seed {
        Some(seed) => run(&engine, &options, &mut StdRng::seed_from_u64(seed)),
        None => run(&engine, &options, &mut rand::thread_rng()),
    }
}

fn run<R: Rng>(
    engine: &QuestionEngine<'_>,
    options: &Options,
    rng: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    if options.json {
        for _ in 0..options.count {
            let record = engine.generate_with_rng(options.kind, options.level, rng);
            println!("{}", serde_json::to_string(&record)?);
        }
        return Ok(());
    }
    quiz(engine, options, rng)
}

fn quiz<R: Rng>(
    engine: &QuestionEngine<'_>,
    options: &Options,
    rng: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut correct = 0;
    let mut answered = 0;

    println!(
        "{} practice, level {} ({} questions). Answer with a letter or the word; q quits.",
        options.kind, options.level, options.count
    );

    for index in 1..=options.count {
        let record = engine.generate_with_rng(options.kind, options.level, rng);
        println!();
        println!("Q{index}. {}", record.question);
        for (letter, option) in ["a", "b", "c", "d"].iter().zip(&record.options) {
            println!("  {letter}) {option}");
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF ends the session early.
            println!();
            break;
        }
        let guess = line.trim();
        if guess.eq_ignore_ascii_case("q") || guess.eq_ignore_ascii_case("quit") {
            break;
        }

        answered += 1;
        match resolve_guess(guess, &record) {
            Some(choice) if choice == record.answer => {
                correct += 1;
                println!("Correct!");
            }
            _ => println!("Not quite. The answer is \"{}\".", record.answer),
        }
    }

    if answered > 0 {
        println!();
        println!("Score: {correct}/{answered}");
    }
    Ok(())
}

/// Accept either an option letter (a-d) or the option text itself.
fn resolve_guess(guess: &str, record: &QuestionRecord) -> Option<String> {
    if guess.chars().count() == 1 {
        let letter = guess.chars().next()?.to_ascii_lowercase();
        let index = (letter as usize).checked_sub('a' as usize)?;
        return record.options.get(index).cloned();
    }
    record
        .options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(guess))
        .cloned()
}
