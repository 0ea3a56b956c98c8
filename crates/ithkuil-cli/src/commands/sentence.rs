use crate::support::{compact_json, print_json, read_input_or_exit};
use ithkuil_kernel::parse_sentence;

pub fn run(text: &str, json_output: bool) {
    let text = read_input_or_exit(text);
    let outcomes = parse_sentence(&text);

    if json_output {
        print_json(&outcomes);
        return;
    }

    let failed = outcomes.iter().filter(|outcome| !outcome.ok).count();
    println!("ithkuil sentence: {} words, {failed} failed", outcomes.len());
    for outcome in &outcomes {
        match (&outcome.value, &outcome.reason) {
            (Some(value), _) => println!("  {}: {}", outcome.word, compact_json(value)),
            (None, reason) => println!(
                "  {}: FAILED ({})",
                outcome.word,
                reason.as_deref().unwrap_or("unknown")
            ),
        }
    }
}
