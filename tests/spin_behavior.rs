use reelslots::report::SpinTally;
use reelslots::slots::{
    defaults, LookupTable, PayoutSchedule, RngSource, ScriptedSource, SlotError, SlotMachine,
    Symbol,
};
use std::sync::Arc;
use std::thread;

fn labels(line: &[Symbol; 3]) -> [&str; 3] {
    line.each_ref().map(Symbol::as_str)
}

#[test]
fn display_rows_never_repeat_the_payline() {
    let machine = SlotMachine::new();
    let mut source = RngSource::seeded(2024);
    for _ in 0..500 {
        let result = machine.spin_with(1, &mut source).unwrap();
        for reel in 0..3 {
            assert_ne!(result.top_line[reel], result.payline[reel]);
            assert_ne!(result.bottom_line[reel], result.payline[reel]);
            // default strips have more than two symbols, so the top row also avoids the bottom row
            assert_ne!(result.top_line[reel], result.bottom_line[reel]);
        }
    }
}

#[test]
fn payout_depends_only_on_the_payline() {
    let machine = SlotMachine::new();
    let schedule = defaults::payout_schedule();
    let mut source = RngSource::seeded(99);
    for _ in 0..500 {
        let result = machine.spin_with(3, &mut source).unwrap();
        let expected = schedule.resolve(3, &result.payline);
        assert_eq!(result.payout, expected.amount);
        assert_eq!(result.message, expected.message);
    }
}

#[test]
fn seeded_spins_replay() {
    let machine = SlotMachine::new();
    let run = |seed| {
        let mut source = RngSource::seeded(seed);
        (0..50)
            .map(|_| machine.spin_with(1, &mut source).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn scripted_spin_shows_neighbours() {
    let machine = SlotMachine::new();
    // reel 1 stop 10 is the first white 7 of a run of six, preceded by blanks
    let result = machine
        .spin_with(2, &mut ScriptedSource::new([10, 9, 9]))
        .unwrap();
    assert_eq!(labels(&result.payline), ["white 7"; 3]);
    assert_eq!(result.payout, 400);
    assert_eq!(result.message, "Three white 7s!");
    assert_eq!(labels(&result.bottom_line), ["blank"; 3]);
    // after the run of white 7s comes blank (the bottom row symbol), then 1 bar
    assert_eq!(labels(&result.top_line), ["1 bar"; 3]);
}

#[test]
fn machines_share_default_tables_across_threads() {
    let table: Arc<LookupTable> = defaults::lookup_table();
    let schedule: Arc<PayoutSchedule> = defaults::payout_schedule();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let machine = SlotMachine::builder()
                .lookup_table(table.clone())
                .payout_schedule(schedule.clone())
                .build();
            thread::spawn(move || {
                let mut tally = SpinTally::default();
                for _ in 0..200 {
                    tally.record(&machine.spin(1).unwrap());
                }
                tally
            })
        })
        .collect();
    for handle in handles {
        let tally = handle.join().unwrap();
        assert_eq!(tally.spins, 200);
        assert_eq!(tally.wagered, 200);
    }
}

#[test]
fn zero_bet_is_an_error() {
    let machine = SlotMachine::new();
    assert!(matches!(
        machine.spin_with(0, &mut ScriptedSource::default()),
        Err(SlotError::InvalidBet)
    ));
}
