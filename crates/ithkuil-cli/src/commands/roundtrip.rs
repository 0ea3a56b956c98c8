use crate::support::{print_json, yes_no};
use ithkuil_kernel::{PartialWord, parse_word, word_to_ithkuil_with};
use ithkuil_lexicon::LexiconStore;
use serde::Serialize;

#[derive(Serialize)]
struct Trip {
    word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    regenerated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    ok: bool,
}

fn trip(word: &str, lexicon: &LexiconStore) -> Trip {
    let regenerated = parse_word(word).and_then(|parsed| match parsed {
        Some(value) => word_to_ithkuil_with(&PartialWord::from(&value), lexicon).map(Some),
        None => Ok(None),
    });
    match regenerated {
        Ok(Some(regenerated)) => Trip {
            ok: regenerated == word,
            word: word.to_string(),
            regenerated: Some(regenerated),
            error: None,
        },
        Ok(None) => Trip {
            word: word.to_string(),
            regenerated: None,
            error: Some("not a recognized word".to_string()),
            ok: false,
        },
        Err(e) => Trip {
            word: word.to_string(),
            regenerated: None,
            error: Some(e.to_string()),
            ok: false,
        },
    }
}

/// Exits with status 1 when any word fails to come back unchanged.
pub fn run(words: &[String], lexicon: &LexiconStore, json_output: bool) {
    let trips: Vec<Trip> = words.iter().map(|word| trip(word, lexicon)).collect();

    if json_output {
        print_json(&trips);
    } else {
        for trip in &trips {
            match (&trip.regenerated, &trip.error) {
                (Some(regenerated), _) => println!(
                    "{} -> {regenerated} (unchanged: {})",
                    trip.word,
                    yes_no(trip.ok)
                ),
                (None, error) => {
                    println!("{}: FAILED ({})", trip.word, error.as_deref().unwrap_or("unknown"))
                }
            }
        }
    }

    if trips.iter().any(|trip| !trip.ok) {
        std::process::exit(1);
    }
}
