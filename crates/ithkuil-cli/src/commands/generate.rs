use crate::support::{fail, print_json, read_input_or_exit};
use ithkuil_kernel::{PartialWord, word_to_ithkuil_with};
use ithkuil_lexicon::LexiconStore;
use serde_json::json;

pub fn run(input: &str, lexicon: &LexiconStore, json_output: bool) {
    let text = read_input_or_exit(input);
    let partial: PartialWord = serde_json::from_str(&text)
        .unwrap_or_else(|e| fail(format!("invalid word description: {e}")));
    let word = word_to_ithkuil_with(&partial, lexicon).unwrap_or_else(|e| fail(e));

    if json_output {
        print_json(&json!({ "word": word }));
    } else {
        println!("{word}");
    }
}
