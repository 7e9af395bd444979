use gun_trajectory::output::{MarkerTrace, SurfacePoint};

/// Replays recorded marker traces a few moves at a time.
pub(crate) struct ReplayState {
    pub(crate) traces: Vec<MarkerTrace>,
    pub(crate) summary: Vec<String>,
    trace_idx: usize,
    move_idx: usize,
}

impl ReplayState {
    pub(crate) fn new(traces: Vec<MarkerTrace>, summary: Vec<String>) -> Self {
        Self {
            traces,
            summary,
            trace_idx: 0,
            move_idx: 0,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.trace_idx >= self.traces.len()
    }

    pub(crate) fn advance(&mut self, moves: usize) {
        for _ in 0..moves {
            let Some(trace) = self.traces.get(self.trace_idx) else {
                return;
            };
            if self.move_idx < trace.moves.len() {
                self.move_idx += 1;
            } else {
                self.trace_idx += 1;
                self.move_idx = 0;
            }
        }
    }

    /// Jump straight to the end of the last trace.
    pub(crate) fn finish(&mut self) {
        self.trace_idx = self.traces.len();
        self.move_idx = 0;
    }

    /// Traces drawn in full, followed by the visible part of the current one.
    pub(crate) fn visible(&self) -> impl Iterator<Item = (SurfacePoint, &[SurfacePoint])> {
        self.traces.iter().enumerate().filter_map(|(idx, trace)| {
            if idx < self.trace_idx {
                Some((trace.start, trace.moves.as_slice()))
            } else if idx == self.trace_idx {
                Some((trace.start, &trace.moves[..self.move_idx]))
            } else {
                None
            }
        })
    }

    /// Where the marker currently sits.
    pub(crate) fn marker(&self) -> Option<SurfacePoint> {
        match self.traces.get(self.trace_idx) {
            Some(trace) => Some(
                self.move_idx
                    .checked_sub(1)
                    .map_or(trace.start, |idx| trace.moves[idx]),
            ),
            None => self.traces.last().map(MarkerTrace::position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gun_trajectory::output::{AnimatedPlotter, Plotter};

    fn traces() -> Vec<MarkerTrace> {
        let mut plotter = AnimatedPlotter::default();
        for run in 0..2 {
            plotter.init().expect("init should succeed");
            for i in 1..=3 {
                plotter
                    .plot((i * 10 * (run + 1)) as f64, 50.0)
                    .expect("plot should succeed");
            }
            plotter.finalise().expect("finalise should succeed");
        }
        plotter.into_traces()
    }

    #[test]
    fn marker_walks_each_trace_in_turn() {
        let mut state = ReplayState::new(traces(), Vec::new());
        assert_eq!(state.marker(), Some(SurfacePoint::new(0, 10)));

        state.advance(2);
        assert_eq!(state.marker(), Some(SurfacePoint::new(2, 15)));
        assert_eq!(state.visible().count(), 1);

        state.advance(2);
        assert_eq!(state.marker(), Some(SurfacePoint::new(0, 10)));
        assert_eq!(state.visible().count(), 2);
        assert!(!state.is_done());
    }

    #[test]
    fn finished_replay_keeps_the_last_marker_position() {
        let mut state = ReplayState::new(traces(), Vec::new());
        state.advance(100);

        assert!(state.is_done());
        assert_eq!(state.marker(), Some(SurfacePoint::new(6, 15)));
        assert_eq!(state.visible().count(), 2);
    }
}
