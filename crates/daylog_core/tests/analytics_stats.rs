use chrono::NaiveDate;
use daylog_core::{
    subject_frequency, top_teachers, DayLogRepository, FixedClock, Identity, LogDraft,
    MemoryKeyedStore, SubjectCatalog,
};

#[test]
fn subject_frequency_follows_catalog_order_and_rounds_percentages() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let identity = identity();

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        repo.add(&identity, date(2025, 1, 9), &LogDraft::new(1, "AB", "Joyal Jose", ""))
            .unwrap();
        repo.add(&identity, date(2025, 1, 9), &LogDraft::new(2, "AB", "Aibal Jose", ""))
            .unwrap();
        repo.add(&identity, date(2025, 1, 10), &LogDraft::new(1, "OB", "Dj", ""))
            .unwrap();
    }

    let frequencies = subject_frequency(&store, &catalog, &identity).unwrap();
    let rows: Vec<(&str, u32, u32)> = frequencies
        .iter()
        .map(|row| (row.subject.as_str(), row.occurrences, row.percent))
        .collect();

    // Two recorded dates, 14 possible slots: 2/14 -> 14%, 1/14 -> 7%.
    assert_eq!(rows, [("AB", 2, 14), ("CD", 0, 0), ("OB", 1, 7)]);
}

#[test]
fn no_recorded_days_yields_zeros_not_an_error() {
    let store = MemoryKeyedStore::new();
    let catalog = catalog();
    let identity = identity();

    let frequencies = subject_frequency(&store, &catalog, &identity).unwrap();
    assert_eq!(frequencies.len(), catalog.len());
    assert!(frequencies
        .iter()
        .all(|row| row.occurrences == 0 && row.percent == 0));
}

#[test]
fn a_single_fully_logged_day_reaches_one_hundred_percent() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let identity = identity();

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        for period in 1..=7 {
            repo.add(
                &identity,
                date(2025, 1, 10),
                &LogDraft::new(period, "AB", "Joyal Jose", ""),
            )
            .unwrap();
        }
    }

    let frequencies = subject_frequency(&store, &catalog, &identity).unwrap();
    let ab = frequencies.iter().find(|row| row.subject == "AB").unwrap();
    assert_eq!(ab.occurrences, 7);
    assert_eq!(ab.percent, 100);
    assert!(frequencies.iter().all(|row| row.percent <= 100));
}

#[test]
fn top_teachers_rank_by_class_count_and_truncate() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let identity = identity();

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        for (day, drafts) in [
            (
                date(2025, 1, 8),
                vec![(1, "AB", "Joyal Jose"), (2, "AB", "Joyal Jose"), (3, "OB", "Dj")],
            ),
            (
                date(2025, 1, 9),
                vec![(1, "AB", "Joyal Jose"), (2, "OB", "Dj"), (3, "CD", "Maya Pillai")],
            ),
        ] {
            for (period, subject, teacher) in drafts {
                repo.add(&identity, day, &LogDraft::new(period, subject, teacher, ""))
                    .unwrap();
            }
        }
    }

    let top_two = top_teachers(&store, &identity, 2).unwrap();
    let names: Vec<(&str, u32)> = top_two
        .iter()
        .map(|rank| (rank.teacher.as_str(), rank.class_count))
        .collect();
    assert_eq!(names, [("Joyal Jose", 3), ("Dj", 2)]);

    let all = top_teachers(&store, &identity, 10).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn tied_teachers_keep_first_encountered_scan_order() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let identity = identity();

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        repo.add(&identity, date(2025, 1, 9), &LogDraft::new(1, "CD", "Maya Pillai", ""))
            .unwrap();
        repo.add(&identity, date(2025, 1, 10), &LogDraft::new(1, "OB", "Dj", ""))
            .unwrap();
    }

    let ranks = top_teachers(&store, &identity, 5).unwrap();
    let names: Vec<&str> = ranks.iter().map(|rank| rank.teacher.as_str()).collect();
    // Equal counts: the teacher seen in the earlier bucket stays first.
    assert_eq!(names, ["Maya Pillai", "Dj"]);
}

#[test]
fn other_identities_are_not_counted() {
    let mut store = MemoryKeyedStore::new();
    let catalog = catalog();
    let clock = clock();
    let joyal = identity();
    let aibal = Identity::new("654", "Aibal Jose");

    {
        let mut repo = DayLogRepository::new(&mut store, &catalog, &clock);
        repo.add(&aibal, date(2025, 1, 10), &LogDraft::new(1, "AB", "Joyal Jose", ""))
            .unwrap();
    }

    let frequencies = subject_frequency(&store, &catalog, &joyal).unwrap();
    assert!(frequencies.iter().all(|row| row.occurrences == 0));
    assert!(top_teachers(&store, &joyal, 5).unwrap().is_empty());
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
