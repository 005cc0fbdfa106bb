//! Tabular Q-learning over historical career transitions.
//!
//! The environment is a single-step bandit: every episode starts from a random
//! historical row, the agent picks a next-role code, and is rewarded with the
//! salary increase only when it picks the row's recorded next role. `step`
//! immediately resets to a fresh random row, and the TD target bootstraps
//! against that unrelated row's role. This coupling is kept as-is so the
//! learned values match the reference trainer.

use rand::Rng;

/// A historical row reduced to what training needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedTransition {
    pub current_role: usize,
    pub next_role: usize,
    pub salary_gain: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingParams {
    pub episodes: usize,
    pub alpha: f64,
    pub gamma: f64,
    pub epsilon: f64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            alpha: 0.1,
            gamma: 0.6,
            epsilon: 0.1,
        }
    }
}

/// Dense `[current_role][next_role]` table of expected values.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl QTable {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, state: usize) -> &[f64] {
        &self.values[state * self.cols..(state + 1) * self.cols]
    }

    pub fn get(&self, state: usize, action: usize) -> f64 {
        self.values[state * self.cols + action]
    }

    fn set(&mut self, state: usize, action: usize, value: f64) {
        self.values[state * self.cols + action] = value;
    }

    /// Largest value in a row; 0 for an empty row.
    pub fn max_in_row(&self, state: usize) -> f64 {
        self.row(state).iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Index of the first maximum in a row.
    pub fn argmax(&self, state: usize) -> usize {
        let row = self.row(state);
        let mut best = 0;
        for (action, &value) in row.iter().enumerate().skip(1) {
            if value > row[best] {
                best = action;
            }
        }
        best
    }
}

struct CareerEnv<'a> {
    data: &'a [EncodedTransition],
    current: usize,
}

impl<'a> CareerEnv<'a> {
    fn new(data: &'a [EncodedTransition]) -> Self {
        Self { data, current: 0 }
    }

    /// Samples a uniformly random row and returns its role code.
    fn reset<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.current = rng.gen_range(0..self.data.len());
        self.data[self.current].current_role
    }

    /// Scores `action` against the current row, then resets.
    /// Returns `(next_state, reward)`; every episode is done after one step.
    fn step<R: Rng>(&mut self, action: usize, rng: &mut R) -> (usize, f64) {
        let row = self.data[self.current];
        let reward = if action == row.next_role {
            row.salary_gain.max(0.0)
        } else {
            0.0
        };
        (self.reset(rng), reward)
    }
}

/// Trains `table` in place with an ε-greedy policy.
pub fn train<R: Rng>(
    table: &mut QTable,
    data: &[EncodedTransition],
    params: &TrainingParams,
    rng: &mut R,
) {
    if data.is_empty() || table.cols() == 0 {
        return;
    }

    let mut env = CareerEnv::new(data);
    for _ in 0..params.episodes {
        let state = env.reset(rng);
        let action = if rng.gen::<f64>() < params.epsilon {
            rng.gen_range(0..table.cols())
        } else {
            table.argmax(state)
        };

        let (next_state, reward) = env.step(action, rng);
        update(table, state, action, reward, next_state, params);
    }
}

/// `Q[s,a] <- (1 - alpha) * Q[s,a] + alpha * (reward + gamma * max Q[s'])`
fn update(
    table: &mut QTable,
    state: usize,
    action: usize,
    reward: f64,
    next_state: usize,
    params: &TrainingParams,
) {
    let updated = (1.0 - params.alpha) * table.get(state, action)
        + params.alpha * (reward + params.gamma * table.max_in_row(next_state));
    table.set(state, action, updated);
}
