//! Process that owns states and drives stepping.

use super::config::{ConfigError, ProcessConfig};
use super::error::ProcessError;
use crate::core::{State, StepHistory, StepRecord};
use crate::random::{DefaultRandom, RandomSource};
use chrono::Utc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of [`Process::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps taken during this run
    pub steps: usize,
    /// Accumulated cost of the process when the run stopped
    pub total_cost: f64,
    /// Current state id when the run stopped
    pub final_state: u32,
    /// Whether the run stopped on a terminal state
    pub terminated: bool,
}

/// A cost-weighted Markov chain instance.
///
/// The process exclusively owns its states, which exclusively own their
/// transitions. States are addressed by id (their `id` field) or by storage
/// position; the current state is always resolved by id.
///
/// # Example
///
/// ```rust
/// use costchain::core::Transition;
/// use costchain::process::{Process, ProcessConfig};
/// use costchain::random::FixedRandom;
///
/// let mut process =
///     Process::with_random(2, FixedRandom::new(0.5), ProcessConfig::default()).unwrap();
/// {
///     let start = process.state_mut(0).unwrap();
///     start.add_transition(Transition::new(0, 1, 0.6, 10.0));
///     start.add_transition(Transition::new(0, 0, 0.4, 1.0));
/// }
///
/// assert!(!process.is_terminal().unwrap());
/// process.step().unwrap();
///
/// assert_eq!(process.current_state_id(), 1);
/// assert_eq!(process.total_cost(), 10.0);
/// assert!(process.is_terminal().unwrap());
/// ```
#[derive(Debug)]
pub struct Process<R: RandomSource = DefaultRandom> {
    states: Vec<State>,
    current: u32,
    total_cost: f64,
    random: R,
    config: ProcessConfig,
    history: StepHistory,
}

impl Process<DefaultRandom> {
    /// Create `n` states with ids `0..n` and no transitions, using an
    /// entropy-seeded random source.
    pub fn new(n: u32) -> Self {
        Self::assemble(n, DefaultRandom::from_entropy(), ProcessConfig::default())
    }

    /// Like [`Process::new`], seeding the random source from
    /// `config.seed` when present.
    pub fn with_config(n: u32, config: ProcessConfig) -> Result<Self, ConfigError> {
        let random = match config.seed {
            Some(seed) => DefaultRandom::seeded(seed),
            None => DefaultRandom::from_entropy(),
        };
        Self::with_random(n, random, config)
    }
}

impl<R: RandomSource> Process<R> {
    /// Create `n` states with ids `0..n` and no transitions.
    ///
    /// Fails when `config` does not pass [`ProcessConfig::check`].
    pub fn with_random(n: u32, random: R, config: ProcessConfig) -> Result<Self, ConfigError> {
        config.check()?;
        Ok(Self::assemble(n, random, config))
    }

    fn assemble(n: u32, random: R, config: ProcessConfig) -> Self {
        Self {
            states: (0..n).map(State::new).collect(),
            current: 0,
            total_cost: 0.0,
            random,
            config,
            history: StepHistory::new(),
        }
    }

    fn fail<T>(&self, error: ProcessError) -> Result<T, ProcessError> {
        Err(self.config.fail_policy.escalate(error))
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.states.iter().position(|s| s.id() == id)
    }

    /// Append a state. Its id must not already be in use.
    pub fn add_state(&mut self, state: State) -> Result<(), ProcessError> {
        if self.position(state.id()).is_some() {
            return self.fail(ProcessError::DuplicateState { id: state.id() });
        }
        self.states.push(state);
        Ok(())
    }

    /// State whose id is `id`.
    pub fn state(&self, id: u32) -> Result<&State, ProcessError> {
        match self.position(id) {
            Some(index) => Ok(&self.states[index]),
            None => self.fail(ProcessError::StateNotFound { id }),
        }
    }

    pub fn state_mut(&mut self, id: u32) -> Result<&mut State, ProcessError> {
        match self.position(id) {
            Some(index) => Ok(&mut self.states[index]),
            None => self.fail(ProcessError::StateNotFound { id }),
        }
    }

    /// State at storage position `index`, regardless of its id.
    pub fn state_at(&self, index: usize) -> Result<&State, ProcessError> {
        match self.states.get(index) {
            Some(state) => Ok(state),
            None => self.fail(ProcessError::StateIndexOutOfRange {
                index,
                len: self.states.len(),
            }),
        }
    }

    pub fn state_at_mut(&mut self, index: usize) -> Result<&mut State, ProcessError> {
        let len = self.states.len();
        if index >= len {
            return self.fail(ProcessError::StateIndexOutOfRange { index, len });
        }
        Ok(&mut self.states[index])
    }

    pub fn current_state(&self) -> Result<&State, ProcessError> {
        self.state(self.current)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub(crate) fn states_mut(&mut self) -> &mut [State] {
        &mut self.states
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Id of the current state.
    pub fn current_state_id(&self) -> u32 {
        self.current
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    /// Steps recorded since the last reset. Empty unless
    /// `record_history` is enabled.
    pub fn history(&self) -> &StepHistory {
        &self.history
    }

    pub fn is_terminal(&self) -> Result<bool, ProcessError> {
        Ok(self.current_state()?.is_terminal())
    }

    /// Advance one step from the current state.
    ///
    /// Returns `Ok(None)` without drawing when the process has no states.
    /// On failure the current state and total cost are left unchanged.
    pub fn step(&mut self) -> Result<Option<StepRecord>, ProcessError> {
        if self.states.is_empty() {
            return Ok(None);
        }

        let from = self.current;
        let sampling = self.config.sampling;
        let tolerance = self.config.tolerance;

        let selected = match self.states.iter().find(|s| s.id() == from) {
            Some(state) => state
                .step(&mut self.random, sampling, tolerance)
                .map(|selection| (*selection.transition, selection.draw)),
            None => Err(ProcessError::StateNotFound { id: from }),
        };

        let (transition, draw) = match selected {
            Ok(selected) => selected,
            Err(error) => return self.fail(error),
        };

        self.total_cost += transition.cost();
        self.current = transition.target();

        tracing::debug!(
            from,
            to = transition.target(),
            cost = transition.cost(),
            total_cost = self.total_cost,
            "process step"
        );

        let record = StepRecord {
            from,
            to: transition.target(),
            transition_id: transition.id(),
            cost: transition.cost(),
            draw,
            timestamp: Utc::now(),
        };
        if self.config.record_history {
            self.history.push(record.clone());
        }

        Ok(Some(record))
    }

    /// Step until the current state is terminal or `max_steps` steps
    /// have been taken.
    pub fn run(&mut self, max_steps: usize) -> Result<RunSummary, ProcessError> {
        let mut steps = 0;
        let mut terminated = false;

        if !self.states.is_empty() {
            loop {
                if self.is_terminal()? {
                    terminated = true;
                    break;
                }
                if steps >= max_steps {
                    break;
                }
                self.step()?;
                steps += 1;
            }
        }

        Ok(RunSummary {
            steps,
            total_cost: self.total_cost,
            final_state: self.current,
            terminated,
        })
    }

    /// Return to state 0 with zero cost. Topology is untouched.
    pub fn reset(&mut self) {
        self.current = 0;
        self.total_cost = 0.0;
        self.history.clear();
    }

    /// Check the distribution of every state that has transitions,
    /// reporting all invalid states at once.
    ///
    /// States without transitions are absorbing end points and never
    /// stepped by [`Process::run`], so they are skipped.
    pub fn validate_all(&self) -> Validation<(), NonEmptyVec<ProcessError>> {
        let tolerance = self.config.tolerance;
        let checks: Vec<Validation<(), NonEmptyVec<ProcessError>>> = self
            .states
            .iter()
            .filter(|state| state.num_transitions() > 0)
            .map(|state| {
                if state.validate(tolerance) {
                    Validation::success(())
                } else {
                    Validation::fail(ProcessError::InvalidDistribution {
                        state: state.id(),
                        sum: state.probability_sum(),
                    })
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;
    use crate::process::{FailPolicy, SamplingMode};
    use crate::random::{FixedRandom, SequenceRandom};

    fn two_state(draw: f64) -> Process<FixedRandom> {
        let mut process = Process::with_random(
            2,
            FixedRandom::new(draw),
            ProcessConfig::default().with_history(true),
        )
        .unwrap();
        let start = process.state_mut(0).unwrap();
        start.add_transition(Transition::new(0, 1, 0.6, 10.0));
        start.add_transition(Transition::new(0, 0, 0.4, 1.0));
        process
    }

    #[test]
    fn new_creates_sequential_empty_states() {
        let process = Process::new(3);

        assert_eq!(process.num_states(), 3);
        for (index, state) in process.states().iter().enumerate() {
            assert_eq!(state.id() as usize, index);
            assert_eq!(state.num_transitions(), 0);
        }
        assert_eq!(process.current_state_id(), 0);
        assert_eq!(process.total_cost(), 0.0);
    }

    #[test]
    fn step_moves_to_terminal_state() {
        let mut process = two_state(0.5);

        assert!(!process.is_terminal().unwrap());

        let record = process.step().unwrap().unwrap();

        assert_eq!(record.from, 0);
        assert_eq!(record.to, 1);
        assert_eq!(process.current_state_id(), 1);
        assert_eq!(process.total_cost(), 10.0);
        assert!(process.is_terminal().unwrap());
    }

    #[test]
    fn self_loop_accumulates_cost() {
        let mut process = two_state(0.7);

        process.step().unwrap();
        process.step().unwrap();

        assert_eq!(process.current_state_id(), 0);
        assert_eq!(process.total_cost(), 2.0);
        assert_eq!(process.history().path(), vec![0, 0, 0]);
    }

    #[test]
    fn step_on_empty_process_is_noop() {
        let mut process =
            Process::with_random(0, FixedRandom::new(0.5), ProcessConfig::default()).unwrap();

        assert_eq!(process.step().unwrap(), None);
        assert_eq!(process.total_cost(), 0.0);
    }

    #[test]
    fn failed_step_leaves_process_unchanged() {
        let mut process = two_state(0.5);
        process.step().unwrap();

        let result = process.step();

        assert!(matches!(
            result,
            Err(ProcessError::InvalidDistribution { state: 1, .. })
        ));
        assert_eq!(process.current_state_id(), 1);
        assert_eq!(process.total_cost(), 10.0);
    }

    #[test]
    fn states_without_transitions_fail_to_step() {
        let mut process =
            Process::with_random(3, FixedRandom::new(0.5), ProcessConfig::default()).unwrap();

        for id in 0..3 {
            assert!(process.state(id).unwrap().is_terminal());
        }
        assert!(process.is_terminal().unwrap());
        assert!(matches!(
            process.step(),
            Err(ProcessError::InvalidDistribution { state: 0, .. })
        ));
    }

    #[test]
    fn reset_restores_start() {
        let mut process = two_state(0.5);
        process.step().unwrap();

        process.reset();

        assert_eq!(process.current_state_id(), 0);
        assert_eq!(process.total_cost(), 0.0);
        assert!(process.history().is_empty());
        assert_eq!(process.state(0).unwrap().num_transitions(), 2);
    }

    #[test]
    fn add_state_rejects_duplicate_id() {
        let mut process = Process::new(2);

        assert!(process.add_state(State::new(5)).is_ok());
        assert!(matches!(
            process.add_state(State::new(1)),
            Err(ProcessError::DuplicateState { id: 1 })
        ));
        assert_eq!(process.num_states(), 3);
    }

    #[test]
    fn id_and_position_addressing_diverge() {
        let mut process =
            Process::with_random(0, FixedRandom::new(0.5), ProcessConfig::default()).unwrap();
        process.add_state(State::new(7)).unwrap();
        process.add_state(State::new(0)).unwrap();

        assert_eq!(process.state_at(0).unwrap().id(), 7);
        assert_eq!(process.state(0).unwrap().id(), 0);
        assert_eq!(process.current_state().unwrap().id(), 0);
    }

    #[test]
    fn lookups_report_missing_states() {
        let process = Process::new(2);

        assert!(matches!(
            process.state(9),
            Err(ProcessError::StateNotFound { id: 9 })
        ));
        assert!(matches!(
            process.state_at(2),
            Err(ProcessError::StateIndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn dangling_target_surfaces_on_next_lookup() {
        let mut process =
            Process::with_random(1, FixedRandom::new(0.5), ProcessConfig::default()).unwrap();
        process
            .state_mut(0)
            .unwrap()
            .add_transition(Transition::new(0, 4, 1.0, 2.0));

        process.step().unwrap();

        assert_eq!(process.current_state_id(), 4);
        assert!(matches!(
            process.is_terminal(),
            Err(ProcessError::StateNotFound { id: 4 })
        ));
    }

    #[test]
    fn loose_tolerance_is_rejected_at_construction() {
        let config = ProcessConfig::default().with_tolerance(0.5);
        let result = Process::with_random(2, FixedRandom::new(0.9), config);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidTolerance { tolerance }) if tolerance == 0.5
        ));
    }

    #[test]
    fn nan_tolerance_is_rejected_at_construction() {
        let config = ProcessConfig::default().with_tolerance(f64::NAN);

        assert!(matches!(
            Process::with_random(2, FixedRandom::new(0.5), config.clone()),
            Err(ConfigError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            Process::with_config(2, config.with_tolerance(-1e-12)),
            Err(ConfigError::InvalidTolerance { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "process aborted")]
    fn abort_policy_panics_on_lookup_failure() {
        let process = Process::with_random(
            1,
            FixedRandom::new(0.5),
            ProcessConfig::default().with_fail_policy(FailPolicy::Abort),
        )
        .unwrap();
        let _ = process.state(3);
    }

    #[test]
    fn strict_sampling_surfaces_failure() {
        let mut process = Process::with_random(
            2,
            FixedRandom::new(0.999_999_999_999_99),
            ProcessConfig::default().with_sampling(SamplingMode::Strict),
        )
        .unwrap();
        {
            let start = process.state_mut(0).unwrap();
            start.add_transition(Transition::new(0, 1, 0.5, 1.0));
            start.add_transition(Transition::new(0, 0, 0.5 - 1e-13, 1.0));
        }

        assert!(matches!(
            process.step(),
            Err(ProcessError::SamplingFailure { state: 0, .. })
        ));
        assert_eq!(process.total_cost(), 0.0);
    }

    #[test]
    fn run_stops_on_terminal_state() {
        let mut process = Process::with_random(
            3,
            SequenceRandom::new(vec![0.9, 0.9, 0.1, 0.1]),
            ProcessConfig::default().with_history(true),
        )
        .unwrap();
        {
            let start = process.state_mut(0).unwrap();
            start.add_transition(Transition::new(0, 1, 0.5, 1.0));
            start.add_transition(Transition::new(0, 0, 0.5, 2.0));
        }
        process
            .state_mut(1)
            .unwrap()
            .add_transition(Transition::new(1, 2, 1.0, 3.0));

        let summary = process.run(100).unwrap();

        assert!(summary.terminated);
        assert_eq!(summary.steps, 4);
        assert_eq!(summary.final_state, 2);
        assert_eq!(summary.total_cost, 2.0 + 2.0 + 1.0 + 3.0);
        assert_eq!(process.history().path(), vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn run_respects_step_limit() {
        let mut process = two_state(0.7);

        let summary = process.run(5).unwrap();

        assert!(!summary.terminated);
        assert_eq!(summary.steps, 5);
        assert_eq!(summary.final_state, 0);
        assert_eq!(summary.total_cost, 5.0);
    }

    #[test]
    fn validate_all_reports_every_invalid_state() {
        let mut process =
            Process::with_random(4, FixedRandom::new(0.5), ProcessConfig::default()).unwrap();
        process
            .state_mut(0)
            .unwrap()
            .add_transition(Transition::new(0, 1, 0.3, 0.0));
        process
            .state_mut(1)
            .unwrap()
            .add_transition(Transition::new(1, 2, 1.0, 0.0));
        process
            .state_mut(2)
            .unwrap()
            .add_transition(Transition::new(2, 3, 1.5, 0.0));

        match process.validate_all() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ProcessError::InvalidDistribution { state: 0, .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ProcessError::InvalidDistribution { state: 2, .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validate_all_passes_well_formed_chain() {
        let process = two_state(0.5);
        assert!(process.validate_all().is_success());
    }
}
