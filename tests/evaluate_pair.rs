use std::io::Write;

use primerqc::batch::{evaluate_rows, load_pairs, summary_frame};
use primerqc::binding::find_binding_position;
use primerqc::score::functionality_score;
use primerqc::seq::reverse_complement;
use primerqc::structure::{has_dimer, has_hairpin};
use primerqc::thermo::{common_annealing_temperature, melting_temperature};
use primerqc::{evaluate_primer_pair, BindingPosition, EvalError, Issue, Thresholds, Verdict};

#[test]
fn primitive_properties() {
    for s in ["ACGT", "GGGCCCAATT", "TTTTGCA"] {
        assert_eq!(reverse_complement(&reverse_complement(s)), s);
    }
    assert_eq!(melting_temperature("GC"), 8);
    assert_eq!(melting_temperature("AT"), 4);
    assert_eq!(melting_temperature(""), 0);
    assert_eq!(common_annealing_temperature(60, 55), 52);
    assert!(has_dimer("AAAA", "TTTT"));
    assert!(has_hairpin("GGATCC"));
    assert_eq!(functionality_score(50.0, 55, 19, false, false), 100.0);
    assert_eq!(
        functionality_score(50.0, 55, 19, false, true),
        functionality_score(50.0, 55, 19, false, false) - 20.0
    );
    assert_eq!(find_binding_position("ATG", "CCATGCC"), BindingPosition::Found(2));
    assert_eq!(find_binding_position("GGG", "CCATGCC"), BindingPosition::NotFound);
}

#[test]
fn end_to_end_without_target() {
    let r = evaluate_primer_pair("ATGCATGCAT,ACGTACGTAC", None).unwrap();
    assert_eq!((r.forward.tm, r.reverse.tm), (28, 30));
    assert_eq!(r.pair.annealing_temperature, 25);
    let expect_gap = (r.forward.tm - r.reverse.tm).abs() > 5;
    assert_eq!(r.issues.contains(&Issue::TmDifference { limit: 5 }), expect_gap);
    assert_eq!(r.issues.contains(&Issue::Heterodimer), r.pair.heterodimer);
    let text = r.explanation();
    if r.issues.is_empty() {
        assert!(text.contains("usable"));
    } else {
        assert!(text.contains("cannot be used"));
    }
}

#[test]
fn validation_errors() {
    assert_eq!(evaluate_primer_pair("", None).unwrap_err(), EvalError::MissingInput);
    assert!(matches!(
        evaluate_primer_pair("A,B,C", None).unwrap_err(),
        EvalError::MalformedPrimerPair { components: 3 }
    ));
}

#[test]
fn lowercase_input_matches_uppercase() {
    let lower = evaluate_primer_pair("atgcatgcat,acgtacgtac", Some("ccatgcatgcatttttacgtacgtacgg")).unwrap();
    let upper = evaluate_primer_pair("ATGCATGCAT,ACGTACGTAC", Some("CCATGCATGCATTTTTACGTACGTACGG")).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn target_from_fasta_file() {
    let mut fa = tempfile::Builder::new().suffix(".fasta").tempfile().unwrap();
    writeln!(fa, ">amplicon\nccatgcatgcat\ntttt\nacgtacgtacgg").unwrap();
    fa.flush().unwrap();

    let target = primerqc::seqio::read_target(fa.path()).unwrap();
    let r = evaluate_primer_pair("ATGCATGCAT,ACGTACGTAC", Some(&target)).unwrap();
    assert_eq!(r.verdict, Verdict::Usable);
    let t = r.target.unwrap();
    assert_eq!(t.forward, BindingPosition::Found(2));
    assert_eq!(t.reverse, BindingPosition::Found(16));
}

#[test]
fn batch_sheet_end_to_end() {
    let mut sheet = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        sheet,
        "name,forward,reverse\n\
         good,ATGCATGCAT,ACGTACGTAC\n\
         gap,GGGGGGGGGG,AAAAAAAAAA\n\
         broken,ACGT,\n"
    )
    .unwrap();
    sheet.flush().unwrap();

    let rows = load_pairs(sheet.path()).unwrap();
    assert_eq!(rows.len(), 3);
    let out = evaluate_rows(&rows, None, &Thresholds::default());
    assert!(out[0].result.as_ref().unwrap().is_usable());
    assert_eq!(out[1].result.as_ref().unwrap().issues, vec![Issue::TmDifference { limit: 5 }]);
    assert!(out[2].result.is_err());

    let df = summary_frame(&out).unwrap();
    assert_eq!(df.height(), 3);
    assert!(df.column("name").is_ok());
    assert!(df.column("explanation").is_ok());
}
