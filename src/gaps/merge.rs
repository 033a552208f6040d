/// Intervalle en minutes depuis minuit, borne haute exclue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Interval {
    pub start: u32,
    pub end: u32,
}

/// Fusionne les intervalles qui se chevauchent ou se touchent
/// (`next.start <= current.end`) en plages maximales.
pub(super) fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(|iv| iv.start);
    intervals.into_iter().fold(Vec::new(), |mut acc, next| {
        match acc.last_mut() {
            Some(current) if next.start <= current.end => {
                current.end = current.end.max(next.end);
            }
            _ => acc.push(next),
        }
        acc
    })
}

/// Portions de [window_start, window_end) non couvertes par `merged`
/// (intervalles fusionnés, triés par début).
pub(super) fn uncovered(window_start: u32, window_end: u32, merged: &[Interval]) -> Vec<Interval> {
    let mut gaps = Vec::new();
    let mut pointer = window_start;
    for interval in merged {
        if interval.start > pointer {
            gaps.push(Interval {
                start: pointer,
                end: interval.start,
            });
        }
        pointer = pointer.max(interval.end);
    }
    if pointer < window_end {
        gaps.push(Interval {
            start: pointer,
            end: window_end,
        });
    }
    gaps
}
