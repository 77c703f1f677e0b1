//! Amplifier chains: several machines running copies of one program, each
//! feeding the next machine's input queue.

use itertools::Itertools;

use machine::{Machine, State};
use program::Program;
use {Fault, Word};

/// Run one copy of `program` per phase setting, wired in a ring: machine k's
/// output feeds machine k+1, and the last machine feeds machine 0. Every
/// machine receives its phase setting first; machine 0 also receives the
/// seed signal 0.
///
/// Machines are scheduled round-robin, each running until it halts or parks
/// for input, with outputs forwarded in order after each turn. The result is
/// the last value the final machine emits before the whole ring has halted.
/// A fault in any machine abandons the run. Chains whose programs halt after
/// a single output work too; the ring just never carries the tail's output
/// anywhere useful.
pub fn run_ring(program: &Program, phases: &[Word]) -> Result<Word, Fault> {
    assert!(!phases.is_empty());

    let mut machines = phases
        .iter()
        .map(|&phase| {
            let mut machine = Machine::new(program);
            machine.push_input(phase);
            machine
        })
        .collect::<Vec<_>>();
    machines[0].push_input(0);

    let mut signal = None;
    loop {
        let mut forwarded = false;
        for k in 0..machines.len() {
            machines[k].run()?;
            let emitted = machines[k].drain_output();
            if k == machines.len() - 1 {
                if let Some(&last) = emitted.last() {
                    signal = Some(last);
                }
            }
            let next = (k + 1) % machines.len();
            for value in emitted {
                forwarded = true;
                machines[next].push_input(value);
            }
        }
        if machines.iter().all(|m| m.state() == State::Halted) {
            break;
        }
        // A whole round without a single forwarded value cannot make
        // progress on the next round either: the ring is wedged.
        if !forwarded {
            return Err(Fault::InputStarvation);
        }
    }

    Ok(signal.expect("ring halted without emitting a signal"))
}

/// The best final signal over every ordering of `phase_settings`. Ties keep
/// the first ordering tried, so the result is deterministic.
pub fn best_signal(program: &Program, phase_settings: &[Word]) -> Result<Word, Fault> {
    let mut best = None;
    for phases in phase_settings
        .iter()
        .cloned()
        .permutations(phase_settings.len())
    {
        let signal = run_ring(program, &phases)?;
        if best.map_or(true, |prev| signal > prev) {
            best = Some(signal);
        }
    }
    Ok(best.expect("no phase settings to try"))
}
