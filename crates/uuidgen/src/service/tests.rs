use crate::{
    AdminSettings, AuditSink, CounterState, Error, GenerateParams, GenerationEvent, RandSource,
    Result, ThreadRandom, UuidService,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::scope;

/// Yields 0, 1, 2, ... so random identifiers are predictable.
#[derive(Default)]
struct CountingRand {
    next: AtomicU64,
}

impl RandSource<u128> for CountingRand {
    fn rand(&self) -> u128 {
        self.next.fetch_add(1, Ordering::Relaxed) as u128
    }
}

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<(String, usize, Option<String>, bool)>>,
}

impl AuditSink for RecordingSink {
    fn record(&self, event: &GenerationEvent<'_>) -> Result<()> {
        self.events.lock().unwrap().push((
            event.origin.to_string(),
            event.count,
            event.first.map(str::to_string),
            event.debug,
        ));
        Ok(())
    }
}

struct FailingSink;

impl AuditSink for FailingSink {
    fn record(&self, _event: &GenerationEvent<'_>) -> Result<()> {
        Err(Error::LoggingFailure {
            reason: "sink unavailable".to_string(),
        })
    }
}

fn service_with_sink(sink: Arc<dyn AuditSink>) -> UuidService<CountingRand> {
    UuidService::from_components(
        Arc::new(CounterState::default()),
        CountingRand::default(),
        sink,
        "test-origin",
    )
}

fn service() -> UuidService<CountingRand> {
    service_with_sink(Arc::new(RecordingSink::default()))
}

fn raw(count: &str, debug: Option<&str>, prefix: Option<&str>) -> GenerateParams {
    GenerateParams {
        count: Some(count.to_string()),
        debug: debug.map(str::to_string),
        prefix: prefix.map(str::to_string),
    }
}

#[test]
fn returns_exactly_the_requested_count() {
    let service = service();
    let mut total = 0;
    for count in 0..=255 {
        let ids = service.generate_identifiers(Some(count), None).unwrap();
        assert_eq!(ids.len(), count as usize);
        total += count as u64;
    }

    let stats = service.stats();
    assert_eq!(stats.num_requests, 256);
    assert_eq!(stats.num_identifiers_issued, total);
}

#[test]
fn count_defaults_to_one() {
    let service = service();
    assert_eq!(service.generate_identifiers(None, None).unwrap().len(), 1);
    assert_eq!(service.generate(&GenerateParams::default()).unwrap().len(), 1);
}

#[test]
fn zero_count_still_counts_as_a_request() {
    let service = service();
    let ids = service.generate_identifiers(Some(0), None).unwrap();
    assert!(ids.is_empty());

    let stats = service.stats();
    assert_eq!(stats.num_requests, 1);
    assert_eq!(stats.num_identifiers_issued, 0);
}

#[test]
fn random_identifiers_come_from_the_injected_source() {
    let service = service();
    let ids = service.generate_identifiers(Some(2), None).unwrap();
    assert_eq!(
        ids,
        [
            "00000000-0000-4000-8000-000000000000",
            "00000000-0000-4000-8000-000000000001",
        ]
    );
}

#[test]
fn out_of_range_counts_are_rejected_without_mutation() {
    let service = service();
    service.generate_identifiers(Some(5), None).unwrap();
    let before = service.stats();

    for count in [-1, -255, 256, 1000, i64::MAX] {
        let err = service.generate_identifiers(Some(count), None).unwrap_err();
        assert_eq!(err, Error::OutOfRange { count });
    }
    let err = service.generate(&raw("256", None, None)).unwrap_err();
    assert_eq!(err, Error::OutOfRange { count: 256 });

    assert_eq!(service.stats(), before);
}

#[test]
fn non_numeric_count_is_invalid() {
    let service = service();
    let err = service.generate(&raw("ten", None, None)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(err.to_string().contains("count is not a valid integer"));
    assert_eq!(service.stats().num_requests, 0);
}

#[test]
fn invalid_debug_flag_is_rejected() {
    let service = service();
    let err = service.generate(&raw("1", Some("maybe"), None)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(service.stats().num_requests, 0);
}

#[test]
fn prefix_requires_debug_mode() {
    let service = service();
    let err = service.generate_identifiers(Some(1), Some("X")).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidArgument {
            reason: "prefix only valid in debug mode".to_string()
        }
    );
    let err = service.generate(&raw("1", Some("false"), Some("X"))).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let stats = service.stats();
    assert_eq!(stats.num_requests, 0);
    assert_eq!(stats.num_identifiers_issued, 0);
}

#[test]
fn empty_prefix_is_always_accepted() {
    let service = service();
    assert_eq!(service.generate_identifiers(Some(1), Some("")).unwrap().len(), 1);
    assert_eq!(service.generate(&raw("1", None, Some(""))).unwrap().len(), 1);
}

#[test]
fn debug_mode_numbers_identifiers_sequentially() {
    let service = service();
    service.update_settings(AdminSettings { debug: true });

    assert_eq!(
        service.generate_identifiers(Some(3), Some("X")).unwrap(),
        ["X0", "X1", "X2"]
    );
    assert_eq!(
        service.generate_identifiers(Some(2), None).unwrap(),
        ["3", "4"]
    );
    assert!(service.generate_identifiers(Some(0), Some("X")).unwrap().is_empty());
    assert_eq!(
        service.generate_identifiers(Some(1), Some("Y-")).unwrap(),
        ["Y-5"]
    );

    let stats = service.stats();
    assert_eq!(stats.debug_sequence_cursor, 6);
    assert_eq!(stats.num_identifiers_issued, 6);
    assert_eq!(stats.num_requests, 4);
}

#[test]
fn debug_query_flag_overrides_setting_for_one_call() {
    let service = service();
    assert_eq!(
        service.generate(&raw("2", Some("true"), Some("Q"))).unwrap(),
        ["Q0", "Q1"]
    );
    assert!(!service.settings().debug);

    let ids = service.generate(&raw("1", None, None)).unwrap();
    assert_eq!(ids[0].len(), 36);
    assert_eq!(service.stats().debug_sequence_cursor, 2);
}

#[test]
fn random_mode_does_not_advance_the_cursor() {
    let service = service();
    service.generate_identifiers(Some(10), None).unwrap();
    service.update_settings(AdminSettings { debug: true });
    assert_eq!(service.generate_identifiers(Some(1), None).unwrap(), ["0"]);
}

#[test]
fn updating_settings_leaves_counters_alone() {
    let service = service();
    service.generate_identifiers(Some(4), None).unwrap();
    let before = service.stats();

    service.update_settings(AdminSettings { debug: true });
    assert!(service.settings().debug);
    service.update_settings(AdminSettings { debug: false });
    assert!(!service.settings().debug);

    assert_eq!(service.stats(), before);
}

#[test]
fn one_audit_record_per_successful_call() {
    let sink = Arc::new(RecordingSink::default());
    let service = service_with_sink(sink.clone());

    service.generate_identifiers(Some(2), None).unwrap();
    service.generate_identifiers(Some(0), None).unwrap();
    service.generate_identifiers(Some(300), None).unwrap_err();
    service.update_settings(AdminSettings { debug: true });
    service.generate_identifiers(Some(1), Some("D")).unwrap();

    let events = sink.events.lock().unwrap();
    assert_eq!(
        *events,
        [
            (
                "test-origin".to_string(),
                2,
                Some("00000000-0000-4000-8000-000000000000".to_string()),
                false
            ),
            ("test-origin".to_string(), 0, None, false),
            ("test-origin".to_string(), 1, Some("D0".to_string()), true),
        ]
    );
}

#[test]
fn audit_failure_does_not_fail_the_request() {
    let service = service_with_sink(Arc::new(FailingSink));
    let ids = service.generate_identifiers(Some(3), None).unwrap();
    assert_eq!(ids.len(), 3);
    assert_eq!(service.stats().num_requests, 1);
}

#[test]
fn concurrent_random_identifiers_are_unique() {
    const THREADS: usize = 12;
    const CALLS_PER_THREAD: usize = 20;
    const COUNT: i64 = 10;

    let service = Arc::new(UuidService::new("concurrent"));
    let seen = Arc::new(Mutex::new(HashSet::new()));

    scope(|s| {
        for _ in 0..THREADS {
            let service = Arc::clone(&service);
            let seen = Arc::clone(&seen);
            s.spawn(move || {
                for _ in 0..CALLS_PER_THREAD {
                    let ids = service.generate_identifiers(Some(COUNT), None).unwrap();
                    let mut set = seen.lock().unwrap();
                    for id in ids {
                        assert!(set.insert(id));
                    }
                }
            });
        }
    });

    let total = THREADS * CALLS_PER_THREAD * COUNT as usize;
    assert!(total >= 1000);
    assert_eq!(seen.lock().unwrap().len(), total);

    let stats = service.stats();
    assert_eq!(stats.num_requests, (THREADS * CALLS_PER_THREAD) as u64);
    assert_eq!(stats.num_identifiers_issued, total as u64);
}

#[test]
fn concurrent_debug_identifiers_are_contiguous() {
    const THREADS: usize = 10;
    const CALLS_PER_THREAD: usize = 50;

    let state = Arc::new(CounterState::new(AdminSettings { debug: true }));
    let service = Arc::new(UuidService::from_components(
        state,
        ThreadRandom,
        Arc::new(RecordingSink::default()),
        "concurrent",
    ));

    let calls = scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let service = Arc::clone(&service);
                s.spawn(move || {
                    (0..CALLS_PER_THREAD)
                        .map(|i| {
                            let count = ((t * 3 + i) % 9) as i64;
                            service.generate_identifiers(Some(count), Some("P")).unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });

    let mut numbers = Vec::new();
    for ids in &calls {
        // each call gets an unbroken run
        let run: Vec<u64> = ids
            .iter()
            .map(|id| id.strip_prefix('P').unwrap().parse().unwrap())
            .collect();
        for pair in run.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
        numbers.extend(run);
    }

    numbers.sort_unstable();
    let expected: Vec<u64> = (0..numbers.len() as u64).collect();
    assert_eq!(numbers, expected);

    let stats = service.stats();
    assert_eq!(stats.debug_sequence_cursor, numbers.len() as u64);
    assert_eq!(stats.num_requests, (THREADS * CALLS_PER_THREAD) as u64);
}

#[test]
fn end_to_end_scenario() {
    let service = service();

    assert_eq!(service.generate(&GenerateParams::with_count(1)).unwrap().len(), 1);
    let stats = service.stats();
    assert_eq!((stats.num_requests, stats.num_identifiers_issued), (1, 1));

    assert_eq!(service.generate(&raw("10", None, None)).unwrap().len(), 10);
    let stats = service.stats();
    assert_eq!((stats.num_requests, stats.num_identifiers_issued), (2, 11));

    assert!(service.generate(&raw("256", None, None)).is_err());
    let stats = service.stats();
    assert_eq!((stats.num_requests, stats.num_identifiers_issued), (2, 11));

    service.update_settings(AdminSettings { debug: true });
    assert_eq!(
        service.generate(&raw("3", None, Some("X"))).unwrap(),
        ["X0", "X1", "X2"]
    );
    assert_eq!(
        service.generate(&raw("2", None, Some("X"))).unwrap(),
        ["X3", "X4"]
    );
}
