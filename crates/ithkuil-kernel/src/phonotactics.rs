//! Consonant-cluster legality.
//!
//! Three predicates decide whether a consonant-only string may open a word,
//! close a word, or sit between two vowels. Each is a hand-curated regular
//! expression per cluster length. Medial clusters are legal when they split
//! into a legal coda followed by a legal onset.
//!
//! Clusters of five or more consonants are accepted without inspection.
//! The approximation is known and logged once per process; widening or
//! narrowing it changes which words the generator considers pronounceable.

use regex::Regex;
use std::sync::{Once, OnceLock};

/// Every consonant letter of the romanization, glottal stop excluded.
pub const CONSONANTS: &str = "pbtdkgfvţḑszšžçxhļcẓčjmnňrlwyř";

static LONG_CLUSTER_WARNING: Once = Once::new();

fn warn_long_cluster(cluster: &str) {
    LONG_CLUSTER_WARNING.call_once(|| {
        tracing::warn!(
            target: "ithkuil::phonotactics",
            cluster,
            "clusters of five or more consonants are accepted without a phonotactic check"
        );
    });
}

struct ClusterRules {
    one: Regex,
    two: Regex,
    three: Regex,
    four: Regex,
}

impl ClusterRules {
    fn new(one: &str, two: &str, three: &str, four: &str) -> Self {
        Self {
            one: Regex::new(one).expect("one-consonant regex must compile"),
            two: Regex::new(two).expect("two-consonant regex must compile"),
            three: Regex::new(three).expect("three-consonant regex must compile"),
            four: Regex::new(four).expect("four-consonant regex must compile"),
        }
    }

    fn check(&self, cluster: &str) -> bool {
        match cluster.chars().count() {
            0 => true,
            1 => self.one.is_match(cluster),
            2 => self.two.is_match(cluster),
            3 => self.three.is_match(cluster),
            4 => self.four.is_match(cluster),
            _ => {
                warn_long_cluster(cluster);
                true
            }
        }
    }
}

fn initial_rules() -> &'static ClusterRules {
    static RULES: OnceLock<ClusterRules> = OnceLock::new();
    RULES.get_or_init(|| {
        ClusterRules::new(
            r"^[pbtdkgfvţḑszšžçxhļcẓčjmnňrlwyř]$",
            concat!(
                r"^(?:[ptkbdg][lrřwy]|[ptk][sšfţçxh]|[bdg][zžvḑ]",
                r"|[sšzž][ptkbdgfvţḑxmnňlrřwy]|[fţçxvḑ][ptkbdgmnňlrřwy]",
                r"|[cčẓj][ptkbdmnňlrřwy]|[mnň][lrřwy]|h[lrřmnňwy]|[lrřļ][wy])$",
            ),
            concat!(
                r"^(?:[sšzž][ptkbdg][lrřwy]|[sšzž][mnň][wy]|[sšzž][fţxv][lrřwy]",
                r"|[ptkbdg][lrř][wy]|[ptk][sš][lrřwy]|h[lrřmnň][wy]|[cč][lrř][wy])$",
            ),
            r"^[sšzž][ptkbdg][lrř][wy]$",
        )
    })
}

fn final_rules() -> &'static ClusterRules {
    static RULES: OnceLock<ClusterRules> = OnceLock::new();
    RULES.get_or_init(|| {
        ClusterRules::new(
            r"^[pbtdkgfvţḑszšžçxļcẓčjmnňrlř]$",
            concat!(
                r"^(?:[lrřmnňļ][ptkbdgfvţḑszšžçxcẓčjmnňlrř]|[sšzžfţxç][ptk]",
                r"|[ptk][sšţfçx]|[fţ][sš]|[bdg][zžvḑ]|[pk]t)$",
            ),
            concat!(
                r"^(?:[lrřmnň][ptk][sšţfçx]|[lrřmnň][sšzžfţxç][ptk]",
                r"|[sšfxç][ptk][sšţ]|[lrř][mnň][ptk])$",
            ),
            r"^[lrřmnň][sšzž][ptk][sšţ]$",
        )
    })
}

fn is_consonant_only(text: &str) -> bool {
    text.chars().all(|c| CONSONANTS.contains(c))
}

/// Whether `cluster` may begin a word.
pub fn is_legal_word_initial_consonant_form(cluster: &str) -> bool {
    is_consonant_only(cluster) && initial_rules().check(cluster)
}

/// Whether `cluster` may end a word.
pub fn is_legal_word_final_consonant_form(cluster: &str) -> bool {
    is_consonant_only(cluster) && final_rules().check(cluster)
}

/// Whether `cluster` may stand between two vowels.
pub fn is_legal_consonant_form(cluster: &str) -> bool {
    if !is_consonant_only(cluster) {
        return false;
    }
    let chars: Vec<char> = cluster.chars().collect();
    if chars.len() >= 5 {
        warn_long_cluster(cluster);
        return true;
    }
    (0..=chars.len()).any(|split| {
        let coda: String = chars[..split].iter().collect();
        let onset: String = chars[split..].iter().collect();
        final_rules().check(&coda) && initial_rules().check(&onset)
    })
}
