//! End-to-end merge scenarios against a client's registry.

use paymail_brfc::known::{self, KNOWN_SPEC_COUNT};
use paymail_brfc::{BrfcError, BrfcErrorCode, Client, ClientOptions, DuplicatePolicy, SpecField};

const BRFC_SPEC_JSON: &str = r#"[{"author": "andy (nChain)","id": "57dd1f54fc67","title": "BRFC Specifications","url": "http://bsvalias.org/01-02-brfc-id-assignment.html","version": "1"}]"#;

#[test]
fn test_load_brfcs() {
    let client = Client::with_defaults();
    let base = client.registry().len();

    // (json, expected length afterwards, expected error)
    let cases = [
        (BRFC_SPEC_JSON, base + 1, false),
        (r#"[{"invalid:1}]"#, base + 1, true),
        (
            r#"[{"author": "andy (nChain), Ryan X. Charles (Money Button)","title":"invalid-spec","id": "17dd1f54fc66"}]"#,
            base + 1,
            true,
        ),
        (
            r#"[{"author": "andy (nChain), Ryan X. Charles (Money Button)","title":""}]"#,
            base + 1,
            true,
        ),
    ];

    for (json, expected_len, expected_error) in cases {
        let result = client.load_brfcs(json);
        assert_eq!(result.is_err(), expected_error, "{json}: {result:?}");
        assert_eq!(client.registry().len(), expected_len, "{json}");
    }
}

#[test]
fn test_seeded_client_grows_to_nineteen() {
    let client = Client::with_defaults();
    assert_eq!(client.registry().len(), KNOWN_SPEC_COUNT);

    client.load_brfcs(BRFC_SPEC_JSON).unwrap();
    assert_eq!(client.brfc_specs().len(), 19);

    let added = client.registry().get(known::BRFC_SPECIFICATIONS).unwrap();
    assert!(added.valid);
    assert_eq!(
        added.url.as_deref(),
        Some("http://bsvalias.org/01-02-brfc-id-assignment.html")
    );
}

#[test]
fn test_prior_entries_untouched() {
    let client = Client::with_defaults();
    let before = client.brfc_specs();

    client.load_brfcs(BRFC_SPEC_JSON).unwrap();
    let after = client.brfc_specs();

    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap().id, known::BRFC_SPECIFICATIONS);
}

#[test]
fn test_missing_version_is_required_field_error() {
    let client = Client::with_defaults();
    let err = client
        .load_brfcs(r#"[{"author":"andy (nChain)","title":"invalid-spec","id":"17dd1f54fc66"}]"#)
        .unwrap_err();
    assert_eq!(err, BrfcError::missing(SpecField::Version).at_index(0));
    assert_eq!(client.registry().len(), KNOWN_SPEC_COUNT);
}

#[test]
fn test_null_id_generates() {
    let client = Client::with_defaults();
    let report = client
        .load_brfcs(r#"[{"author":"MrZ","title":"New BRFC","version":"1","id":null,"url":null}]"#)
        .unwrap();
    assert_eq!(report.added, vec!["e898079d7d1a"]);
    assert_eq!(client.registry().len(), KNOWN_SPEC_COUNT + 1);
}

#[test]
fn test_null_version_is_required_field_error() {
    let client = Client::with_defaults();
    let err = client
        .load_brfcs(r#"[{"author":"MrZ","title":"New BRFC","version":null}]"#)
        .unwrap_err();
    assert_eq!(err.code(), BrfcErrorCode::MissingField);
    assert_eq!(err, BrfcError::missing(SpecField::Version).at_index(0));
    assert_eq!(client.registry().len(), KNOWN_SPEC_COUNT);
}

#[test]
fn test_missing_field_names_batch_position() {
    let client = Client::with_defaults();
    let err = client
        .load_brfcs(
            r#"[{"author":"MrZ","title":"New BRFC","version":"1"},{"author":"MrZ","title":"Second","version":"1"},{"author":" ","title":"Third","version":"1"}]"#,
        )
        .unwrap_err();
    assert_eq!(err, BrfcError::missing(SpecField::Author).at_index(2));
    assert_eq!(err.index(), Some(2));
    assert!(err.to_string().contains("index 2"));
    assert!(!client.registry().contains_id("e898079d7d1a"));
}

#[test]
fn test_invalid_candidate_aborts_whole_batch() {
    let client = Client::with_defaults();
    let before = client.brfc_specs();

    let batches = [
        // Valid first, empty title last.
        r#"[{"author":"MrZ","title":"New BRFC","version":"1"},{"author":"MrZ","title":" ","version":"1"}]"#,
        // Valid first, missing author last.
        r#"[{"author":"MrZ","title":"New BRFC","version":"1"},{"title":"Orphan","version":"1"}]"#,
        // Valid first, stale id last.
        r#"[{"author":"MrZ","title":"New BRFC","version":"1"},{"author":"MrZ","title":"Other","version":"1","id":"e898079d7d1a"}]"#,
    ];

    for json in batches {
        assert!(client.load_brfcs(json).is_err(), "{json}");
        assert_eq!(client.brfc_specs(), before, "{json} leaked a partial merge");
        assert!(!client.registry().contains_id("e898079d7d1a"));
    }
}

#[test]
fn test_stale_id_reports_index_and_correct_id() {
    let client = Client::with_defaults();
    let err = client
        .load_brfcs(
            r#"[{"author":"MrZ","title":"New BRFC","version":"1"},{"author":"MrZ","title":"New BRFC","version":"2","id":"e898079d7d1a"}]"#,
        )
        .unwrap_err();
    assert_eq!(err.code(), BrfcErrorCode::Validation);
    match err {
        BrfcError::Validation { index, title, reason } => {
            assert_eq!(index, 1);
            assert_eq!(title, "New BRFC");
            assert!(reason.contains("e898079d7d1a"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_known_specs_reload_is_noop() {
    let client = Client::with_defaults();
    let json = client.registry().to_json().unwrap();

    let report = client.load_brfcs(&json).unwrap();
    assert!(report.is_noop());
    assert_eq!(report.skipped.len(), KNOWN_SPEC_COUNT);
    assert_eq!(client.registry().len(), KNOWN_SPEC_COUNT);
}

#[test]
fn test_unknown_fields_ignored() {
    let client = Client::with_defaults();
    let report = client
        .load_brfcs(r#"[{"author":"MrZ","title":"New BRFC","version":"1","supersedes":[],"notes":{"a":1}}]"#)
        .unwrap();
    assert_eq!(report.added, vec!["e898079d7d1a"]);
}

#[test]
fn test_retitled_known_spec_blocked_by_title() {
    // Same title as a seeded entry, new version: a different id.
    let json = r#"[{"author":"andy (nChain)","title":"bsvalias service discovery","version":"2"}]"#;

    let client = Client::with_defaults();
    assert!(client.load_brfcs(json).unwrap().is_noop());

    let client =
        Client::new(ClientOptions::default().with_duplicate_policy(DuplicatePolicy::IdOnly))
            .unwrap();
    assert_eq!(client.load_brfcs(json).unwrap().added.len(), 1);
    assert_eq!(client.registry().len(), KNOWN_SPEC_COUNT + 1);
}
