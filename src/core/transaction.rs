use crate::core::persist::Store;
use crate::core::timetable::Timetable;
use crate::errors::{Error, Result};

/// Stages a mutation on a copy of the timetable, persists the copy,
/// and swaps it in only once the store accepted the write.
#[derive(Debug, Default)]
pub struct Transaction {
    staged: Option<Timetable>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<F>(&mut self, live: &mut Timetable, store: &mut dyn Store, f: F) -> Result<()>
    where
        F: FnOnce(&mut Timetable) -> Result<()>,
    {
        self.begin_stage(live)?;
        let outcome = match self.staged.as_mut() {
            Some(staged) => f(staged),
            None => Err(Error::persist("No staged state to mutate.")),
        };
        match outcome.and_then(|()| self.prepare_commit(store)) {
            Ok(()) => self.apply_prepared(live),
            Err(e) => {
                self.discard_stage();
                Err(e)
            }
        }
    }

    fn begin_stage(&mut self, live: &Timetable) -> Result<()> {
        if self.staged.is_some() {
            return Err(Error::persist("Transaction already in progress."));
        }
        self.staged = Some(live.clone());
        Ok(())
    }

    fn prepare_commit(&mut self, store: &mut dyn Store) -> Result<()> {
        let staged = self
            .staged
            .as_ref()
            .ok_or_else(|| Error::persist("No active transaction to commit."))?;
        store.save_all(staged)
    }

    fn apply_prepared(&mut self, live: &mut Timetable) -> Result<()> {
        let staged = self
            .staged
            .take()
            .ok_or_else(|| Error::persist("No prepared state to apply."))?;
        *live = staged;
        Ok(())
    }

    fn discard_stage(&mut self) {
        self.staged = None;
    }
}
