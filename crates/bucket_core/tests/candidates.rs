use bucket_core::{
    default_modifiers, generate_candidates, Candidate, TargetTemplate, TemplateError,
    DEFAULT_MODIFIERS,
};
use pretty_assertions::assert_eq;

fn urls(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(Candidate::url).collect()
}

#[test]
fn word_without_modifiers_yields_base_target_only() {
    let template = TargetTemplate::default();
    let candidates = generate_candidates(&["alpha", "beta"], &[] as &[&str], &template);

    assert_eq!(
        urls(&candidates),
        vec![
            "https://alpha.s3.amazonaws.com/?uploads=",
            "https://beta.s3.amazonaws.com/?uploads=",
        ]
    );
}

#[test]
fn modifier_variants_follow_positional_order() {
    let template = TargetTemplate::new("https://{bucket}.example.test/").unwrap();
    let candidates = generate_candidates(&["acme"], &["dev"], &template);

    assert_eq!(
        urls(&candidates),
        vec![
            "https://acme.example.test/",
            "https://dev-acme.example.test/",
            "https://devacme.example.test/",
            "https://acme-dev.example.test/",
            "https://acmedev.example.test/",
        ]
    );
}

#[test]
fn candidate_count_is_words_times_one_plus_four_modifiers() {
    let template = TargetTemplate::default();
    for (n, m) in [(0, 0), (1, 0), (0, 3), (2, 1), (3, 5), (7, 2)] {
        let words: Vec<String> = (0..n).map(|i| format!("word{i}")).collect();
        let modifiers: Vec<String> = (0..m).map(|i| format!("mod{i}")).collect();
        let candidates = generate_candidates(&words, &modifiers, &template);
        assert_eq!(candidates.len(), n * (1 + 4 * m), "n={n} m={m}");
    }
}

#[test]
fn default_modifiers_expand_two_words() {
    let template = TargetTemplate::default();
    let modifiers = default_modifiers();
    let candidates = generate_candidates(&["alpha", "beta"], &modifiers, &template);

    assert_eq!(modifiers.len(), DEFAULT_MODIFIERS.len());
    assert_eq!(candidates.len(), 2 * (1 + 4 * DEFAULT_MODIFIERS.len()));
    assert_eq!(candidates[0].url(), "https://alpha.s3.amazonaws.com/?uploads=");
    assert_eq!(
        candidates[1 + 4 * DEFAULT_MODIFIERS.len()].url(),
        "https://beta.s3.amazonaws.com/?uploads="
    );
}

#[test]
fn repeated_inputs_are_not_deduplicated() {
    let template = TargetTemplate::default();
    let candidates = generate_candidates(&["same", "same"], &["x", "x"], &template);

    assert_eq!(candidates.len(), 2 * (1 + 4 * 2));
    let base = "https://same.s3.amazonaws.com/?uploads=";
    assert_eq!(candidates.iter().filter(|c| c.url() == base).count(), 2);
    let prefixed = "https://x-same.s3.amazonaws.com/?uploads=";
    assert_eq!(candidates.iter().filter(|c| c.url() == prefixed).count(), 4);
}

#[test]
fn bucket_name_comes_from_first_host_label() {
    let candidate = Candidate::new("https://backup-acme.s3.amazonaws.com/?uploads=");
    assert_eq!(candidate.bucket_name().as_deref(), Some("backup-acme"));

    let custom = Candidate::new("http://media.storage.internal:9000/probe");
    assert_eq!(custom.bucket_name().as_deref(), Some("media"));
}

#[test]
fn unparsable_candidate_reports_raw_url() {
    let candidate = Candidate::new("https://has space.s3.amazonaws.com/");
    assert_eq!(candidate.bucket_name(), None);
    assert_eq!(candidate.reported_name(), "https://has space.s3.amazonaws.com/");
}

#[test]
fn template_requires_placeholder_in_first_host_label() {
    assert!(matches!(
        TargetTemplate::new("https://s3.amazonaws.com/"),
        Err(TemplateError::MissingPlaceholder(_))
    ));
    assert!(matches!(
        TargetTemplate::new("https://s3.amazonaws.com/{bucket}"),
        Err(TemplateError::NotHostLabel(_))
    ));
    assert!(matches!(
        TargetTemplate::new("not a url {bucket}"),
        Err(TemplateError::InvalidUrl(_))
    ));
    assert!(TargetTemplate::new("http://{bucket}.localhost:8080/").is_ok());
}
