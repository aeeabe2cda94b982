//! The interactive menu loop
//!
//! City → filter mode → filters → row viewer → reports → restart, with every
//! prompt repeating itself until it gets a usable answer.

use crate::{
    config::Config,
    core::{
        city::City,
        filter::{
            FilterCriteria, FilterMode, available_months, available_weekdays_matching,
            resolve_month, resolve_weekday,
        },
        loader::RecordLoader,
        record::{RecordSet, month_name, weekday_name},
        stats::run_all_reports,
    },
    error::{BikeshareError, Result},
    session::{
        prompt::{INVALID_ANSWER, Prompter},
        viewer::RowViewer,
    },
};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

const CITY_QUESTION: &str = "Which city do you like to know about, Chicago or New york or Washington?";
const FILTER_QUESTION: &str =
    "Would you like to filter the data by month, day or both? Type \"none\" for no filter.";
const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.";

/// Where the menu loop currently is
#[derive(Debug)]
enum Stage {
    SelectCity,
    SelectFilterMode(RecordSet),
    ApplyFilter(RecordSet, FilterMode),
    ViewRows(RecordSet),
    ReportStats(RecordSet),
    AskRestart,
    Terminate,
}

/// Drives one interactive session
pub struct Explorer<R, W> {
    loader: RecordLoader,
    separator_width: usize,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self {
            loader: RecordLoader::new(&config.data_dir),
            separator_width: config.display.separator_width,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user declines to restart or input runs out
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        debug!("Starting interactive session");
        let mut stage = Stage::SelectCity;

        loop {
            stage = match self.step(stage) {
                Ok(Stage::Terminate) => break,
                Ok(next) => next,
                Err(BikeshareError::InputClosed) => {
                    debug!("Input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            };
        }

        debug!("Session finished");
        Ok(())
    }

    fn step(&mut self, stage: Stage) -> Result<Stage> {
        match stage {
            Stage::SelectCity => self.select_city(),
            Stage::SelectFilterMode(set) => {
                let mode = self.prompter.choose(FILTER_QUESTION, INVALID_ANSWER, FilterMode::lookup)?;
                debug!("Filter mode: {:?}", mode);
                Ok(Stage::ApplyFilter(set, mode))
            }
            Stage::ApplyFilter(set, mode) => {
                let criteria = self.select_criteria(&set, mode)?;
                let (city, total) = (set.city(), set.len());
                let filtered = criteria.into_filtered(set);
                debug!(
                    "Filter '{}' kept {} of {} {} records",
                    criteria.describe(),
                    filtered.len(),
                    total,
                    city
                );
                Ok(Stage::ViewRows(filtered))
            }
            Stage::ViewRows(set) => {
                RowViewer::new().browse(&mut self.prompter, &set)?;
                Ok(Stage::ReportStats(set))
            }
            Stage::ReportStats(set) => {
                run_all_reports(&set, self.prompter.output(), self.separator_width)?;
                Ok(Stage::AskRestart)
            }
            Stage::AskRestart => {
                if self.prompter.confirm(RESTART_QUESTION)? {
                    Ok(Stage::SelectCity)
                } else {
                    Ok(Stage::Terminate)
                }
            }
            Stage::Terminate => Ok(Stage::Terminate),
        }
    }

    fn select_city(&mut self) -> Result<Stage> {
        let city = self.prompter.choose(
            CITY_QUESTION,
            "please choose one from the provided cities\n",
            City::lookup,
        )?;

        match self.loader.load(city) {
            Ok(set) => Ok(Stage::SelectFilterMode(set)),
            Err(e) if e.is_load_failure() => {
                warn!("{}", e);
                self.prompter.say(&format!("Sorry! {e}"))?;
                Ok(Stage::SelectCity)
            }
            Err(e) => Err(e),
        }
    }

    fn select_criteria(&mut self, set: &RecordSet, mode: FilterMode) -> Result<FilterCriteria> {
        let mut criteria = FilterCriteria::default();

        if mode.filters_month() {
            let months = available_months(set);
            if months.is_empty() {
                self.prompter.say("No months available to filter on.")?;
            } else {
                let names: Vec<_> = months.iter().map(|m| month_name(*m)).collect();
                let question = format!(
                    "Available data is about the following months! Please choose one: \n{}",
                    names.join(", ")
                );
                criteria.month = Some(self.prompter.choose(&question, INVALID_ANSWER, |answer| {
                    resolve_month(answer, &months)
                })?);
            }
        }

        if mode.filters_day() {
            // Only the days left after the month filter are offered.
            let weekdays = available_weekdays_matching(set, &criteria);
            if weekdays.is_empty() {
                self.prompter.say("No days available to filter on.")?;
            } else {
                let names: Vec<_> = weekdays.iter().map(|d| weekday_name(*d)).collect();
                let question = format!(
                    "Available data is about the following days! Please choose one: \n{}",
                    names.join(", ")
                );
                criteria.weekday = Some(self.prompter.choose(&question, INVALID_ANSWER, |answer| {
                    resolve_weekday(answer, &weekdays)
                })?);
            }
        }

        Ok(criteria)
    }
}
