use std::time::Duration;

use cubetime::clock::ManualClock;
use cubetime::display::{Board, DisplaySurface, Slot};
use cubetime::scheduler::ManualScheduler;
use cubetime::scramble::PlaceholderScramble;
use cubetime::session::{Session, SessionStats, SolveRecord};
use cubetime::timer::Timer;
use cubetime::Time;

/// Surface that remembers every write, to check what the core pushes
#[derive(Default)]
struct Recorder {
    texts: Vec<(Slot, String)>,
    rows: Vec<Vec<String>>,
}

impl DisplaySurface for Recorder {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.texts.push((slot, text.to_string()));
    }

    fn append_row(&mut self, columns: &[String]) {
        self.rows.push(columns.to_vec());
    }
}

#[test]
fn time_formatting_examples() {
    assert_eq!(Time::from_millis(0).format(), "0.000");
    assert_eq!(Time::from_millis(12345).format(), "12.345");
    assert_eq!(Time::from_millis(62345).format(), "01:02.345");
    assert_eq!(Time::from_millis(605000).format(), "10:05.000");
}

#[test]
fn record_pushes_row_then_four_stats() {
    let mut stats = SessionStats::new();
    let mut recorder = Recorder::default();

    stats.record(SolveRecord::new(Time::from_millis(8_500), "R U R' U'"), &mut recorder);

    assert_eq!(
        recorder.rows,
        vec![vec!["1".to_string(), "8.500".to_string(), "R U R' U'".to_string()]]
    );
    let slots: Vec<Slot> = recorder.texts.iter().map(|(s, _)| *s).collect();
    assert_eq!(slots, Slot::STATS.to_vec());
    assert!(recorder.texts.iter().all(|(_, t)| t == "8.500"));
}

#[test]
fn session_of_three_timed_solves() {
    let clock = ManualClock::new();
    let scheduler = ManualScheduler::new();
    let mut board = Board::new();
    let timer = Timer::new(clock.clone(), scheduler.clone(), Duration::from_millis(10));
    let mut session = Session::new(timer, PlaceholderScramble::new("F R U"), &mut board);

    for ms in [3_000, 1_000, 2_000] {
        session.toggle(&mut board);
        clock.advance_ms(ms);
        session.toggle(&mut board);
    }

    assert_eq!(scheduler.started(), 3);
    assert_eq!(scheduler.active(), 0);

    let times: Vec<u64> = session
        .stats()
        .records()
        .iter()
        .map(|r| r.time().milliseconds())
        .collect();
    assert_eq!(times, vec![3_000, 1_000, 2_000]);

    let summary = session.stats().summary().unwrap();
    assert_eq!(summary.best, Time::from_millis(1_000));
    assert_eq!(summary.worst, Time::from_millis(3_000));
    assert_eq!(summary.mean_ms, 2_000.0);
    assert_eq!(summary.median_ms, 2_000.0);

    assert_eq!(board.text(Slot::Best), Some("1.000"));
    assert_eq!(board.text(Slot::Worst), Some("3.000"));
    assert_eq!(board.text(Slot::Mean), Some("2.000"));
    assert_eq!(board.text(Slot::Median), Some("2.000"));
    assert_eq!(board.rows().len(), 3);
    assert!(board.rows().iter().all(|r| r[2] == "F R U"));
}

#[test]
fn dropping_a_running_session_releases_the_refresh_task() {
    let scheduler = ManualScheduler::new();
    let mut board = Board::new();
    let timer = Timer::new(ManualClock::new(), scheduler.clone(), Duration::from_millis(10));
    let mut session = Session::new(timer, PlaceholderScramble::default(), &mut board);

    session.toggle(&mut board);
    assert_eq!(scheduler.active(), 1);

    drop(session);
    assert_eq!(scheduler.active(), 0);
}
