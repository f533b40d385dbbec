//! Budgeted random search: independent draws per parameter.

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::rng_util;
use crate::spec::{validate_parameters, ParameterSpec, Scale};
use crate::strategy::{Sample, Strategy};
use crate::types::Goal;
use crate::value::ParamValue;

/// Mutable draw state, guarded as one unit so a budget slot and the RNG
/// values drawn for it cannot interleave across threads.
#[derive(Debug)]
struct DrawState {
    rng: fastrand::Rng,
    drawn: usize,
}

/// Draws `num_samples` independent random assignments from the raw specs.
///
/// No search space is materialized: each `sample()` call draws fresh
/// values — uniform (or log-uniform) floats, uniform inclusive integers,
/// uniform category choices. `steps` shapes grids only and has no effect
/// here. After `num_samples` draws the strategy is exhausted.
///
/// # Examples
///
/// ```
/// use hypertune::{Goal, ParameterSpec, RandomStrategy};
///
/// let random = RandomStrategy::with_seed(
///     Goal::Maximize,
///     vec![(
///         "learning_rate".to_string(),
///         ParameterSpec::float(1e-4, 1e-1).log_scale(),
///     )],
///     10,
///     42,
/// )?;
/// for _ in 0..10 {
///     let sample = random.sample()?;
///     let lr = sample["learning_rate"].as_f64().unwrap();
///     assert!((1e-4..=1e-1).contains(&lr));
/// }
/// assert!(random.is_exhausted());
/// # Ok::<(), hypertune::Error>(())
/// ```
#[derive(Debug)]
pub struct RandomStrategy {
    goal: Goal,
    parameters: Vec<(String, ParameterSpec)>,
    num_samples: usize,
    state: Mutex<DrawState>,
}

impl RandomStrategy {
    /// Validates the specs and stores them with the sample budget.
    ///
    /// # Errors
    ///
    /// Returns a spec-validation error for any malformed spec or duplicate
    /// parameter name; nothing is deferred to `sample()`.
    pub fn new(
        goal: Goal,
        parameters: Vec<(String, ParameterSpec)>,
        num_samples: usize,
    ) -> Result<Self> {
        Self::with_rng(goal, parameters, num_samples, fastrand::Rng::new())
    }

    /// Like [`new`](Self::new) but with a fixed seed for reproducible runs.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_seed(
        goal: Goal,
        parameters: Vec<(String, ParameterSpec)>,
        num_samples: usize,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(goal, parameters, num_samples, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(
        goal: Goal,
        parameters: Vec<(String, ParameterSpec)>,
        num_samples: usize,
        rng: fastrand::Rng,
    ) -> Result<Self> {
        validate_parameters(&parameters)?;
        trace_debug!(
            num_samples,
            parameters = parameters.len(),
            "random strategy ready"
        );
        Ok(Self {
            goal,
            parameters,
            num_samples,
            state: Mutex::new(DrawState { rng, drawn: 0 }),
        })
    }

    /// The optimization direction this search was configured with.
    #[must_use]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// The configured sample budget.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Samples not yet drawn from the budget.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.num_samples.saturating_sub(self.state.lock().drawn)
    }

    /// Returns `true` once the budget is spent.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Draws one fresh assignment covering every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] once `num_samples` draws have been
    /// dispensed.
    pub fn sample(&self) -> Result<Sample> {
        let mut state = self.state.lock();
        if state.drawn >= self.num_samples {
            return Err(Error::Exhausted {
                dispensed: self.num_samples,
            });
        }
        state.drawn += 1;

        let mut sample = Sample::with_capacity(self.parameters.len());
        for (name, spec) in &self.parameters {
            sample.insert(name.clone(), draw(&mut state.rng, spec));
        }
        Ok(sample)
    }
}

impl Strategy for RandomStrategy {
    fn goal(&self) -> Goal {
        RandomStrategy::goal(self)
    }

    fn sample(&self) -> Result<Sample> {
        RandomStrategy::sample(self)
    }

    fn remaining(&self) -> usize {
        RandomStrategy::remaining(self)
    }
}

/// One random value for one validated spec.
fn draw(rng: &mut fastrand::Rng, spec: &ParameterSpec) -> ParamValue {
    match spec {
        ParameterSpec::Float {
            low, high, scale, ..
        } => {
            let value = match scale {
                Scale::Linear => rng_util::f64_range(rng, *low, *high),
                Scale::Log => rng_util::log_f64_range(rng, *low, *high),
            };
            ParamValue::Float(value)
        }
        ParameterSpec::Int { low, high, .. } => ParamValue::Int(rng.i64(*low..=*high)),
        ParameterSpec::Category { values } => {
            let index = rng.usize(0..values.len());
            ParamValue::Category(values[index].clone())
        }
    }
}
