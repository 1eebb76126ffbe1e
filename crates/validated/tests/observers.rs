//! Observer notification contract.

use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use validated::prelude::*;

type Log = Arc<Mutex<Vec<(String, bool, Vec<String>, Change)>>>;

fn record(container: &mut Validated<String>) -> Log {
    let log: Log = Arc::default();
    let sink = Arc::clone(&log);
    container.subscribe(move |snapshot| {
        sink.lock().push((
            snapshot.value.clone(),
            snapshot.is_valid,
            snapshot.failed.iter().map(|r| r.name().to_owned()).collect(),
            snapshot.change,
        ));
    });
    log
}

#[test]
fn one_notification_per_write_with_final_state() {
    let mut mail = Validated::new(String::new(), [not_empty(), is_email()]);
    let log = record(&mut mail);

    mail.set("user".to_string());
    mail.update(|s| s.push_str("@example.com"));

    assert_eq!(
        *log.lock(),
        vec![
            ("user".to_string(), false, vec!["is_email".to_string()], Change::Value),
            ("user@example.com".to_string(), true, vec![], Change::Value),
        ]
    );
}

#[test]
fn rule_changes_and_explicit_validation_are_tagged() {
    let mut name = Validated::with_rule("ab".to_string(), length::<String, _>(2..));
    let log = record(&mut name);

    name.replace_rules(|_| vec![length(3..)], false);
    assert!(log.lock().is_empty());

    name.validate();
    name.replace_rules(|mut rules| {
        rules.clear();
        rules
    }, true);

    let changes: Vec<_> = log.lock().iter().map(|entry| (entry.1, entry.3)).collect();
    assert_eq!(changes, [(false, Change::Revalidated), (true, Change::Rules)]);
}

#[test]
fn observers_run_in_registration_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut counter = Validated::new(0, [greater(0)]);

    for id in 0..3 {
        let order = Arc::clone(&order);
        counter.subscribe(move |_| order.lock().push(id));
    }
    counter.set(1);

    assert_eq!(*order.lock(), [0, 1, 2]);
}

#[test]
fn shared_handle_notifies_under_lock() {
    let shared = SharedValidated::new(0_u32, [is_multiple_of(2)]);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    shared.subscribe(move |snapshot| sink.lock().push((*snapshot.value, snapshot.is_valid)));

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let shared = shared.clone();
            std::thread::spawn(move || shared.set(n))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let seen = seen.lock();
    assert_eq!(seen.len(), 4);
    assert!(seen.iter().all(|(value, valid)| *valid == (value % 2 == 0)));
}
