use ithkuil_lexicon::LexiconStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Settings read from an `ithkuil.toml` file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Relative paths are taken from the config file's directory.
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
    /// Default tracing filter, e.g. `"info"` or `"ithkuil::formative=debug"`.
    #[serde(default)]
    pub log: Option<String>,
}

pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn load_config_or_exit(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("failed to read {}: {e}", path.display())));
    let mut config: Config = toml::from_str(&text)
        .unwrap_or_else(|e| fail(format!("failed to parse {}: {e}", path.display())));
    if let (Some(lexicon), Some(dir)) = (&config.lexicon, path.parent()) {
        if lexicon.is_relative() {
            config.lexicon = Some(dir.join(lexicon));
        }
    }
    config
}

/// An empty store when no lexicon is named.
pub fn load_lexicon_or_exit(path: Option<&Path>) -> LexiconStore {
    match path {
        Some(path) => LexiconStore::load(path).unwrap_or_else(|e| fail(e)),
        None => LexiconStore::new(),
    }
}

/// The argument itself, or all of stdin for `-`.
pub fn read_input_or_exit(input: &str) -> String {
    if input != "-" {
        return input.to_string();
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .unwrap_or_else(|e| fail(format!("failed to read stdin: {e}")));
    text
}

pub fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(format!("failed to serialize output: {e}")),
    }
}

pub fn compact_json(value: &impl Serialize) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| fail(format!("failed to serialize output: {e}")))
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
