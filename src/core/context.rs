use crate::config::Config;
use crate::core::cli::CliPaths;
use crate::core::edit::{Decision, EditSession, PendingEdit, Proposal};
use crate::core::persist::{Store, open_store};
use crate::core::timetable::Timetable;
use crate::core::transaction::Transaction;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub timetable: Timetable,
    pub edits: EditSession,
    pub store: Box<dyn Store>,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
    pub reports_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(paths: CliPaths) -> Result<Self> {
        Self::with_logger(paths, Logger::new())
    }

    /// Loads config, opens the configured store and reads the timetable.
    pub fn with_logger(paths: CliPaths, logger: Logger) -> Result<Self> {
        let config = Config::load_or_init(&paths.config_path)?;
        let store = open_store(config.storage_backend(), &paths.data_path);
        Self::with_store(paths, logger, config, store)
    }

    pub fn with_store(
        paths: CliPaths,
        logger: Logger,
        config: Config,
        store: Box<dyn Store>,
    ) -> Result<Self> {
        logger.set_log_dir(&paths.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let mut ctx = Self {
            config,
            timetable: Timetable::new(),
            edits: EditSession::new(),
            store,
            logger,
            startup_displayed: false,
            config_path: paths.config_path,
            logs_dir: paths.logs_dir,
            reports_dir: paths.reports_dir,
        };
        ctx.reload()?;
        Ok(ctx)
    }

    /// Replaces the timetable with the store's copy and drops any pending edit.
    /// Returns the number of skipped rows.
    pub fn reload(&mut self) -> Result<usize> {
        let outcome = self.store.load_all()?;
        for issue in &outcome.issues {
            self.logger.warn(issue, LogTarget::ConsoleAndFile);
        }
        self.timetable = outcome.timetable;
        self.edits = EditSession::new();
        self.logger.info(
            format!(
                "Loaded {} teacher(s), {} room(s), {} slot entries from {}.",
                self.timetable.teachers.len(),
                self.timetable.rooms.len(),
                self.timetable.entry_count(),
                self.store.describe()
            ),
            LogTarget::FileOnly,
        );
        Ok(outcome.issues.len())
    }

    /// Runs `f` on a staged copy and publishes it once the store saved it.
    pub fn commit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Timetable) -> Result<()>,
    {
        Transaction::new().run(&mut self.timetable, self.store.as_mut(), f)
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save_all(&self.timetable)
    }

    /// Safe proposals are committed before returning.
    pub fn propose(&mut self, proposal: Proposal) -> Result<Decision> {
        let rules = self.config.edit_rules();
        let decision = self.edits.propose(&self.timetable, proposal, &rules)?;
        if let Decision::Safe(proposal) = &decision {
            let capacity = rules.capacity;
            self.commit(|tt| proposal.apply(tt, capacity))?;
        }
        Ok(decision)
    }

    /// Commits the pending proposal. It stays pending when the commit fails.
    pub fn confirm(&mut self) -> Result<Proposal> {
        let rules = self.config.edit_rules();
        let proposal = self.edits.to_confirm(&self.timetable, &rules)?.clone();
        self.commit(|tt| proposal.apply(tt, rules.capacity))?;
        self.edits.settle();
        Ok(proposal)
    }

    pub fn reject(&mut self) -> Result<PendingEdit> {
        self.edits.reject()
    }
}
