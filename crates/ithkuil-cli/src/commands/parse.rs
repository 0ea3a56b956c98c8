use crate::support::{compact_json, fail, print_json};
use ithkuil_kernel::parse_word;
use serde_json::json;

pub fn run(words: &[String], json_output: bool) {
    let parsed: Vec<_> = words
        .iter()
        .map(|word| match parse_word(word) {
            Ok(Some(value)) => (word, value),
            Ok(None) => fail(format!("`{word}` is not a recognized word")),
            Err(e) => fail(format!("`{word}`: {e}")),
        })
        .collect();

    if json_output {
        let payload: Vec<_> = parsed
            .iter()
            .map(|(word, value)| json!({ "word": word, "value": value }))
            .collect();
        print_json(&payload);
    } else {
        for (word, value) in &parsed {
            println!("{word}: {}", compact_json(value));
        }
    }
}
