//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError, InputError};
use crate::inputs::InputStore;
use aoc_solver::{ParseError, SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, debug_span, warn};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Averaged parse time, attached to the first part solved from each parse
    pub parse_duration: Option<TimeDelta>,
    /// Averaged solve time
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: SolverError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    repetitions: u32,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                repetitions: config.repetitions.max(1),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.sync_executor_config.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.sync_executor_config.parallelize_by {
            // Solvers using rayon internally must still stay within --threads
            ParallelizeBy::Sequential => self.thread_pool.install(|| {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part additionally splits each day in run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_work_item(&work, tx, sync_executor_config).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(a), b) => Some(ArcExecutorError::combine_opt(b, a)),
                    (None, b) => b,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(a), b) => Some(ArcExecutorError::combine_opt(b, a)),
                    (None, b) => b,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result).map_err(|_| ExecutorError::ChannelSend.into())
}

/// Load the input for one day and solve its parts
///
/// A missing input is reported as a failed result for each part rather
/// than an executor error, so the rest of the run carries on.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let input = match sync_executor_config.inputs.read(year, day) {
        Ok(input) => input,
        Err(InputError::Missing(path)) => {
            warn!(year, day, path = %path.display(), "input missing");
            let message = format!("input file {} not found", path.display());
            for part in work.parts.clone() {
                let error = SolverError::ParseError(ParseError::MissingData(message.clone()));
                send(tx, SolverResult::failed(year, day, part, error))?;
            }
            return Ok(());
        }
        Err(source) => {
            return Err(ExecutorError::InputRead { year, day, source }.into());
        }
    };

    let registry = &sync_executor_config.registry;
    let repetitions = sync_executor_config.repetitions;
    let results = if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        // Each part gets its own parsed instance; collect keeps part order
        work.parts
            .clone()
            .into_par_iter()
            .flat_map_iter(|part| {
                solve_parts(registry, year, day, &input, part..=part, repetitions)
            })
            .collect::<Vec<_>>()
    } else {
        solve_parts(registry, year, day, &input, work.parts.clone(), repetitions)
    };

    for result in results {
        send(tx, result)?;
    }
    Ok(())
}

/// Same error, for reporting against another part
fn replicate(error: &SolverError) -> SolverError {
    match error {
        SolverError::NotFound(y, d) => SolverError::NotFound(*y, *d),
        SolverError::InvalidYearDay(y, d) => SolverError::InvalidYearDay(*y, *d),
        SolverError::ParseError(e) => SolverError::ParseError(e.clone()),
        SolverError::SolveError(e) => SolverError::SolveError(SolveError::failed(e.to_string())),
    }
}

/// Parse and solve `parts` from fresh instances `repetitions` times
///
/// Answers come from the first run; timings are averaged over all runs.
fn solve_parts(
    registry: &SolverRegistry,
    year: u16,
    day: u8,
    input: &str,
    parts: RangeInclusive<u8>,
    repetitions: u32,
) -> Vec<SolverResult> {
    let _span = debug_span!("day", year, day).entered();
    let runs = repetitions.max(1);
    let mut answers: Vec<Result<String, SolverError>> =
        parts.clone().map(|_| Ok(String::new())).collect();
    let mut solve_totals = vec![TimeDelta::zero(); answers.len()];
    let mut parse_total = TimeDelta::zero();

    for run in 0..runs {
        let mut solver = match registry.create_solver(year, day, input) {
            Ok(solver) => solver,
            Err(e) => {
                return parts
                    .map(|part| SolverResult::failed(year, day, part, replicate(&e)))
                    .collect();
            }
        };
        parse_total += solver.parse_duration();

        for (i, part) in parts.clone().enumerate() {
            if answers[i].is_err() {
                continue;
            }
            match solver.solve(part) {
                Ok(solved) => {
                    solve_totals[i] += solved.duration();
                    if run == 0 {
                        answers[i] = Ok(solved.answer);
                    }
                }
                Err(e) => answers[i] = Err(e.into()),
            }
        }
    }

    let divisor = i32::try_from(runs).unwrap_or(i32::MAX);
    let parse = parse_total / divisor;
    debug!(?parse, runs, "parsed");

    parts
        .zip(answers)
        .zip(solve_totals)
        .enumerate()
        .map(|(i, ((part, answer), solve))| SolverResult {
            year,
            day,
            part,
            answer,
            parse_duration: (i == 0).then_some(parse),
            solve_duration: solve / divisor,
        })
        .collect()
}
