use crate::ant::{Ant, StepError};
use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    InvalidStepCount,
    TooManySteps { max: usize, actual: usize },
    Step(StepError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::InvalidStepCount => write!(f, "step count must be positive"),
            RunError::TooManySteps { max, actual } => {
                write!(f, "steps ({actual}) exceed supported maximum ({max})")
            }
            RunError::Step(e) => write!(f, "{}", e),
        }
    }
}

impl From<StepError> for RunError {
    fn from(err: StepError) -> Self {
        RunError::Step(err)
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunError::Step(e) => Some(e),
            _ => None,
        }
    }
}

fn default_schema_version() -> u32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub steps: usize,
    pub width: usize,
    pub height: usize,
    pub final_live_count: usize,
    /// Live-cell count after every step, in visitation order.
    pub live_history: Vec<usize>,
}

/// A field and the one ant acting on it, with the live-cell count recorded
/// after every step. Fully synchronous; the caller decides how many steps to
/// batch between observations.
#[derive(Debug)]
pub struct Simulation {
    field: Field,
    ant: Ant,
    step_index: usize,
    live: usize,
    live_history: Vec<usize>,
}

impl Simulation {
    pub const MAX_RUN_STEPS: usize = 1_000_000;

    pub fn new(field: Field, ant: Ant) -> Self {
        Self::try_new(field, ant).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(field: Field, ant: Ant) -> Result<Self, StepError> {
        if !field.contains(ant.row, ant.col) {
            return Err(StepError::InvalidState {
                row: ant.row,
                col: ant.col,
                width: field.width(),
                height: field.height(),
            });
        }
        let live = field.live_count();
        Ok(Self {
            field,
            ant,
            step_index: 0,
            live,
            live_history: Vec::new(),
        })
    }

    /// One rule application plus one recorded sample. The live count is
    /// maintained incrementally: each step flips exactly one cell, the one
    /// the ant stood on.
    pub fn step(&mut self) -> Result<(), StepError> {
        let (row, col) = (self.ant.row, self.ant.col);
        self.ant.step(&mut self.field)?;
        if self.field.get(row, col) == 1 {
            self.live -= 1;
        } else {
            self.live += 1;
        }
        self.step_index += 1;
        self.live_history.push(self.live);
        Ok(())
    }

    pub fn run(&mut self, steps: usize) {
        self.try_run(steps).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Execute `steps` rule applications, recording after each one. The cap
    /// guards against accidentally unbounded runs; batches accumulate, so
    /// repeated calls extend the same history.
    pub fn try_run(&mut self, steps: usize) -> Result<(), RunError> {
        if steps == 0 {
            return Err(RunError::InvalidStepCount);
        }
        if steps > Self::MAX_RUN_STEPS {
            return Err(RunError::TooManySteps {
                max: Self::MAX_RUN_STEPS,
                actual: steps,
            });
        }
        self.live_history.reserve(steps);
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn live_history(&self) -> &[usize] {
        &self.live_history
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            schema_version: 1,
            steps: self.step_index,
            width: self.field.width(),
            height: self.field.height(),
            final_live_count: self.field.live_count(),
            live_history: self.live_history.clone(),
        }
    }
}
