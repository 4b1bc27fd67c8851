//! The `wellcheck run` command.
//!
//! Drives one full session through the engine: scripted via `--answers`, or
//! interactively question by question on a terminal.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use wellcheck_core::engine::{AdvanceOutcome, Engine};
use wellcheck_core::model::Question;
use wellcheck_core::parser;
use wellcheck_core::scorer::SessionResult;
use wellcheck_store::JsonFileStore;

pub fn execute(
    catalog_path: PathBuf,
    category_id: String,
    entry_id: String,
    answers: Option<String>,
    data_dir: PathBuf,
) -> Result<()> {
    let catalog = parser::load_catalog(&catalog_path)?;
    let store = JsonFileStore::for_kind(&data_dir, catalog.kind);
    let engine = Engine::new(catalog, Box::new(store));

    let mut session = engine
        .start_session(&category_id, &entry_id)
        .map_err(anyhow::Error::new)?;

    let (category, entry) = engine
        .catalog()
        .find_entry(&category_id, &entry_id)
        .expect("entry exists, session just started");
    println!(
        "{}: {} ({} questions)\n",
        category.title,
        entry.title,
        entry.questions.len()
    );

    let mut scripted = parse_answers(answers.as_deref(), entry.questions.len())?
        .map(Vec::into_iter);

    let result = loop {
        let Some(question_id) = session.current_question_id().map(str::to_string) else {
            anyhow::bail!("session ended without a result");
        };
        let question = entry
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .expect("session question comes from the catalog");

        let choice = match scripted.as_mut().map(Iterator::next) {
            Some(Some(choice)) => choice,
            Some(None) => anyhow::bail!(
                "ran out of scripted answers at question {question_id}"
            ),
            None => prompt_choice(question)?,
        };

        engine
            .answer_current(&mut session, choice)
            .map_err(anyhow::Error::new)?;

        match engine.advance(&mut session)? {
            AdvanceOutcome::Finished(result) => break *result,
            AdvanceOutcome::Moved(_) => {}
            AdvanceOutcome::Blocked => anyhow::bail!("advance blocked after answering"),
        }
    };

    print_result(&result);
    Ok(())
}

/// Parse "2,3,2,4,3"-style 1-based option numbers into 0-based choices.
fn parse_answers(answers: Option<&str>, question_count: usize) -> Result<Option<Vec<usize>>> {
    let Some(answers) = answers else {
        return Ok(None);
    };

    let choices = answers
        .split(',')
        .map(|s| {
            let number: usize = s
                .trim()
                .parse()
                .with_context(|| format!("invalid answer '{}'", s.trim()))?;
            anyhow::ensure!(number >= 1, "answers are 1-based option numbers");
            Ok(number - 1)
        })
        .collect::<Result<Vec<_>>>()?;

    anyhow::ensure!(
        choices.len() == question_count,
        "expected {question_count} answers, got {}",
        choices.len()
    );

    Ok(Some(choices))
}

fn prompt_choice(question: &Question) -> Result<usize> {
    println!("{}", question.prompt);
    for (idx, option) in question.options.iter().enumerate() {
        println!("  {}. {}", idx + 1, option.label);
    }

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = std::io::stdin().read_line(&mut line)?;
        anyhow::ensure!(read > 0, "no answer provided (stdin closed)");

        match line.trim().parse::<usize>() {
            Ok(number) if (1..=question.options.len()).contains(&number) => {
                return Ok(number - 1);
            }
            _ => println!("Please enter a number between 1 and {}.", question.options.len()),
        }
    }
}

fn print_result(result: &SessionResult) {
    let outcome = &result.outcome;
    println!("Score: {}/{}", outcome.total_score, outcome.max_score);

    if let Some(band) = &outcome.band {
        println!("Level: {}", band.level);
        println!("{}", band.description);
        for recommendation in &band.recommendations {
            println!("  * {recommendation}");
        }
    }

    if !outcome.suggestions.is_empty() {
        println!("\nSuggested for you:");
        for suggestion in &outcome.suggestions {
            println!("  * {} ({})", suggestion.title, suggestion.link);
        }
    }

    if let Some(tip) = &outcome.reflective_tip {
        println!("\n{tip}");
    }

    for badge in &result.newly_unlocked {
        println!("\nBadge unlocked: {} ({})", badge.title, badge.description);
    }
}
