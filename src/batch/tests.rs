use serde_json::json;

use super::{Tally, collect_addresses, run_batch};
use crate::classify::{Source, Status};
use crate::config::Credential;
use crate::remote::tests::StubTransport;
use crate::remote::{RemoteClient, RemoteError};
use crate::selector::{Selector, VerifyConfig};

fn remote_selector() -> Selector<StubTransport> {
    let stub = StubTransport::new(|_, query| {
        let email = query
            .iter()
            .find(|(k, _)| *k == "email")
            .map(|(_, v)| *v)
            .unwrap_or_default();
        match email {
            "down@example.com" => Err(RemoteError::Status { status: 502 }),
            "nobody@example.com" => Ok(json!({"result": "invalid"})),
            "info@mailinator.com" => {
                Ok(json!({"result": "risky", "disposable": true, "role": true}))
            }
            _ => Ok(json!({"result": "valid"})),
        }
    });
    let config = VerifyConfig::new(Some(Credential::new("vf_test")), false);
    Selector::with_client(config, RemoteClient::with_transport(stub))
}

#[test]
fn offline_batch_after_filtering() {
    let addresses = collect_addresses("a@b.com\nbad\nc@mailinator.com\n");
    let (outcome, tally) = run_batch(&addresses, &Selector::offline(), |_, _| {});

    let emails: Vec<&str> = outcome.iter().map(|c| c.email.as_str()).collect();
    assert_eq!(emails, vec!["a@b.com", "c@mailinator.com"]);
    assert!(outcome.entries[1].disposable);
    assert!(outcome.iter().all(|c| c.source == Source::Offline));
    assert_eq!(
        tally,
        Tally {
            valid: 2,
            invalid: 0,
            risky: 0
        }
    );
}

#[test]
fn transport_failure_does_not_abort() {
    let addresses = [
        "a@example.com",
        "down@example.com",
        "nobody@example.com",
        "info@mailinator.com",
    ];
    let (outcome, tally) = run_batch(&addresses, &remote_selector(), |_, _| {});

    assert_eq!(outcome.len(), 4);
    let statuses: Vec<Status> = outcome.iter().map(|c| c.status).collect();
    assert_eq!(
        statuses,
        vec![Status::Valid, Status::Error, Status::Invalid, Status::Risky]
    );
    assert_eq!(outcome.entries[1].source, Source::Remote);
    assert!(outcome.entries[3].disposable);
    assert_eq!(
        tally,
        Tally {
            valid: 1,
            invalid: 1,
            risky: 2
        }
    );
    assert_eq!(outcome.tally(), tally);
}

#[test]
fn duplicates_are_processed_independently() {
    let addresses = ["a@example.com", "a@example.com", "down@example.com", "down@example.com"];
    let selector = remote_selector();
    let (outcome, tally) = run_batch(&addresses, &selector, |_, _| {});

    assert_eq!(outcome.len(), 4);
    assert_eq!(tally.valid, 2);
    assert_eq!(tally.risky, 2);
    assert_eq!(selector.remote_calls(), 4);
}

#[test]
fn same_input_same_result() {
    let addresses = ["a@example.com", "down@example.com", "bad@", "nobody@example.com"];
    let first = run_batch(&addresses, &remote_selector(), |_, _| {});
    let second = run_batch(&addresses, &remote_selector(), |_, _| {});
    assert_eq!(first, second);
}

#[test]
fn progress_reports_each_address() {
    let addresses = ["a@b.com", "c@d.org", "e@f.net"];
    let mut seen = Vec::new();
    let (outcome, _) = run_batch(&addresses, &Selector::offline(), |done, total| {
        seen.push((done, total))
    });
    assert_eq!(outcome.len(), 3);
    assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
}

#[test]
fn empty_batch() {
    let addresses: Vec<String> = collect_addresses("\n\nno address here\n");
    let (outcome, tally) = run_batch(&addresses, &Selector::offline(), |_, _| {
        panic!("no progress expected")
    });
    assert!(outcome.is_empty());
    assert_eq!(tally, Tally::default());
}
