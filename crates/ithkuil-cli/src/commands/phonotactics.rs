use crate::support::{print_json, yes_no};
use ithkuil_kernel::phonotactics::{
    is_legal_consonant_form, is_legal_word_final_consonant_form,
    is_legal_word_initial_consonant_form,
};
use serde::Serialize;

#[derive(Serialize)]
struct ClusterReport<'a> {
    cluster: &'a str,
    initial: bool,
    medial: bool,
    #[serde(rename = "final")]
    word_final: bool,
}

pub fn run(clusters: &[String], json_output: bool) {
    let reports: Vec<ClusterReport<'_>> = clusters
        .iter()
        .map(|cluster| ClusterReport {
            cluster,
            initial: is_legal_word_initial_consonant_form(cluster),
            medial: is_legal_consonant_form(cluster),
            word_final: is_legal_word_final_consonant_form(cluster),
        })
        .collect();

    if json_output {
        print_json(&reports);
        return;
    }
    for report in &reports {
        println!(
            "{}: initial {}, medial {}, final {}",
            report.cluster,
            yes_no(report.initial),
            yes_no(report.medial),
            yes_no(report.word_final)
        );
    }
}
