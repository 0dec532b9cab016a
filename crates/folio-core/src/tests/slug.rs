use crate::derive_slug;

#[test]
fn given_title_with_punctuation_when_derived_then_punctuation_stripped() {
    assert_eq!(derive_slug("My Awesome, Project!"), "my-awesome-project");
}

#[test]
fn given_uppercase_title_when_derived_then_lowercased() {
    assert_eq!(derive_slug("SHOUTING TITLE"), "shouting-title");
}

#[test]
fn given_whitespace_runs_when_derived_then_single_hyphens() {
    assert_eq!(derive_slug("a  \t b"), "a-b");
}

#[test]
fn given_existing_hyphens_when_derived_then_runs_collapsed() {
    assert_eq!(derive_slug("a - b"), "a-b");
    assert_eq!(derive_slug("pre--release"), "pre-release");
}

#[test]
fn given_same_title_twice_when_derived_then_deterministic() {
    let title = "Portfolio Site v2";
    assert_eq!(derive_slug(title), derive_slug(title));
    assert_eq!(derive_slug(title), "portfolio-site-v2");
}

#[test]
fn given_accented_title_when_derived_then_non_ascii_stripped() {
    // Accented letters are dropped, and the result stays within the
    // slug charset so a blank slug field never fails validation on
    // characters the derivation itself produced.
    assert_eq!(derive_slug("Café Site"), "caf-site");
    assert_eq!(derive_slug("Über Portfolio"), "ber-portfolio");
}

#[test]
fn given_only_punctuation_when_derived_then_empty() {
    assert_eq!(derive_slug("!!!"), "");
}
