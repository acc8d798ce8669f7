use chrono::NaiveDate;
use daylog_core::{
    search_entries, DayLogRepository, FixedClock, Identity, LogDraft, MemoryKeyedStore,
    SubjectCatalog,
};

#[test]
fn blank_queries_return_no_hits() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let identity = identity();

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        repo.add(
            &identity,
            date(2025, 1, 10),
            &LogDraft::new(1, "AB", "Joyal Jose", "anything"),
        )
        .unwrap();
    }

    assert!(search_entries(&store, &identity, "").unwrap().is_empty());
    assert!(search_entries(&store, &identity, "   ").unwrap().is_empty());
}

#[test]
fn matching_is_case_insensitive_on_note_and_subject() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let identity = identity();

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        repo.add(
            &identity,
            date(2025, 1, 10),
            &LogDraft::new(2, "OB", "Dj", "Midterm review"),
        )
        .unwrap();
    }

    let by_note = search_entries(&store, &identity, "MIDTERM").unwrap();
    assert_eq!(by_note.len(), 1);
    assert_eq!(by_note[0].entry.note, "Midterm review");

    let by_subject = search_entries(&store, &identity, "ob").unwrap();
    assert_eq!(by_subject.len(), 1);
    assert_eq!(by_subject[0].entry.subject, "OB");
}

#[test]
fn results_come_newest_bucket_first() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let identity = identity();

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        for day in [date(2025, 1, 8), date(2025, 1, 10), date(2025, 1, 9)] {
            repo.add(&identity, day, &LogDraft::new(1, "AB", "Joyal Jose", "homework"))
                .unwrap();
        }
    }

    let hits = search_entries(&store, &identity, "homework").unwrap();
    let dates: Vec<NaiveDate> = hits.iter().map(|hit| hit.date).collect();
    assert_eq!(
        dates,
        [date(2025, 1, 10), date(2025, 1, 9), date(2025, 1, 8)]
    );
}

#[test]
fn hits_carry_their_source_date() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let identity = identity();

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        repo.add(
            &identity,
            date(2024, 12, 31),
            &LogDraft::new(4, "CD", "Maya Pillai", "year-end recap"),
        )
        .unwrap();
    }

    let hits = search_entries(&store, &identity, "recap").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].date, date(2024, 12, 31));
    assert_eq!(hits[0].entry.period, 4);
}

#[test]
fn query_metacharacters_match_literally() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let identity = identity();

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        repo.add(
            &identity,
            date(2025, 1, 10),
            &LogDraft::new(1, "AB", "Joyal Jose", "fees (approx) due"),
        )
        .unwrap();
    }

    let hits = search_entries(&store, &identity, "(approx)").unwrap();
    assert_eq!(hits.len(), 1);
    assert!(search_entries(&store, &identity, ".*").unwrap().is_empty());
}

#[test]
fn other_identities_are_not_searched() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let joyal = identity();
    let aibal = Identity::new("654", "Aibal Jose");

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        repo.add(
            &aibal,
            date(2025, 1, 10),
            &LogDraft::new(1, "AB", "Joyal Jose", "private note"),
        )
        .unwrap();
    }

    assert!(search_entries(&store, &joyal, "private").unwrap().is_empty());
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn catalog() -> SubjectCatalog {
    SubjectCatalog::new(vec![
        ("AB", vec!["Joyal Jose", "Aibal Jose"]),
        ("CD", vec!["Maya Pillai"]),
        ("OB", vec!["Dj", "Anu Thomas"]),
    ])
    .unwrap()
}

fn identity() -> Identity {
    Identity::new("321", "Joyal Jose")
}

fn clock() -> FixedClock {
    FixedClock::new(date(2025, 1, 10), 1_736_470_000_000, "09:15")
}
