use crate::core::applier::{DayBatch, add_assignment, apply_day_batch};
use crate::core::availability::available_teachers;
use crate::core::fatigue::{FatigueReport, check_batch, check_single, unsafe_reports};
use crate::core::models::is_teacher_selected;
use crate::core::timetable::Timetable;
use crate::core::types::{AvailabilityPolicy, Day, Period, ProgramTag};
use crate::errors::{Error, Result};
use std::fmt;

/// Limits a proposal is judged against. Built from config per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRules {
    pub capacity: usize,
    pub threshold: usize,
    pub policy: AvailabilityPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    Single {
        room: String,
        day: Day,
        period: Period,
        teacher: String,
        program: ProgramTag,
    },
    Day {
        room: String,
        day: Day,
        batch: DayBatch,
        scope: ProgramTag,
    },
}

impl Proposal {
    pub fn room(&self) -> &str {
        match self {
            Proposal::Single { room, .. } | Proposal::Day { room, .. } => room,
        }
    }

    pub fn day(&self) -> Day {
        match self {
            Proposal::Single { day, .. } | Proposal::Day { day, .. } => *day,
        }
    }

    /// Writes the proposal into `timetable`.
    pub fn apply(&self, timetable: &mut Timetable, capacity: usize) -> Result<()> {
        match self {
            Proposal::Single {
                room,
                day,
                period,
                teacher,
                program,
            } => add_assignment(timetable, room, *day, *period, teacher, *program, capacity),
            Proposal::Day {
                room,
                day,
                batch,
                scope,
            } => apply_day_batch(timetable, room, *day, batch, *scope),
        }
    }

    fn validate(&self, timetable: &Timetable, rules: &EditRules) -> Result<()> {
        let room = timetable.room(self.room())?;
        let tag = match self {
            Proposal::Single { program, .. } => *program,
            Proposal::Day { scope, .. } => *scope,
        };
        if let ProgramTag::Only(p) = tag {
            if !room.offers(p) {
                return Err(Error::ProgramNotOffered {
                    room: room.name.clone(),
                    program: p.to_string(),
                });
            }
        }

        match self {
            Proposal::Single {
                room,
                day,
                period,
                teacher,
                ..
            } => {
                if !is_teacher_selected(teacher) {
                    return Err(Error::NoTeacherSelected);
                }
                timetable.teacher(teacher)?;
                let cell_len = timetable
                    .schedule
                    .cell(room, *day, *period)
                    .map(|c| c.len())
                    .unwrap_or(0);
                if cell_len >= rules.capacity {
                    return Err(Error::CellAtCapacity {
                        room: room.clone(),
                        day: day.to_string(),
                        period: period.number(),
                        capacity: rules.capacity,
                    });
                }
                let availability = available_teachers(timetable, room, *day, *period, rules.policy);
                if availability.is_busy(teacher) {
                    let rooms = timetable
                        .schedule
                        .rooms_teaching(teacher, *day, *period, Some(room))
                        .join(", ");
                    return Err(Error::TeacherBusy {
                        teacher: teacher.clone(),
                        rooms,
                    });
                }
                if !availability.is_free(teacher) {
                    return Err(Error::TeacherNotPermitted {
                        teacher: teacher.clone(),
                        room: room.clone(),
                    });
                }
                Ok(())
            }
            Proposal::Day { batch, .. } => {
                for name in batch.teachers() {
                    timetable.teacher(name)?;
                }
                Ok(())
            }
        }
    }

    fn evaluate(&self, timetable: &Timetable) -> Vec<FatigueReport> {
        match self {
            Proposal::Single {
                day,
                period,
                teacher,
                ..
            } => vec![check_single(timetable, *day, *period, teacher)],
            Proposal::Day {
                room,
                day,
                batch,
                scope,
            } => check_batch(timetable, room, *day, batch, *scope),
        }
    }
}

impl fmt::Display for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proposal::Single {
                room,
                day,
                period,
                teacher,
                program,
            } => write!(
                f,
                "assign '{}' to {} {} period {} [{}]",
                teacher, room, day, period, program
            ),
            Proposal::Day {
                room,
                day,
                batch,
                scope,
            } => {
                let slots = batch
                    .assigned()
                    .map(|(p, t)| format!("{p}:{t}"))
                    .collect::<Vec<_>>();
                let slots = if slots.is_empty() {
                    "(empty)".to_string()
                } else {
                    slots.join(", ")
                };
                write!(f, "set {} {} [{}] to {}", room, day, scope, slots)
            }
        }
    }
}

/// A proposal held back by a marathon warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub proposal: Proposal,
    pub warnings: Vec<FatigueReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Passed the fatigue check and may be committed right away.
    Safe(Proposal),
    /// Parked until `confirm` or `reject`.
    PendingConfirmation(Vec<FatigueReport>),
}

/// Proposed -> Safe | PendingConfirmation -> Applied | Discarded.
/// The pending edit lives only in memory.
#[derive(Debug, Default)]
pub struct EditSession {
    pending: Option<PendingEdit>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&PendingEdit> {
        self.pending.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates and fatigue-checks a proposal. Unsafe ones are parked.
    pub fn propose(
        &mut self,
        timetable: &Timetable,
        proposal: Proposal,
        rules: &EditRules,
    ) -> Result<Decision> {
        if self.pending.is_some() {
            return Err(Error::EditPending);
        }
        proposal.validate(timetable, rules)?;

        let warnings = unsafe_reports(proposal.evaluate(timetable), rules.threshold);
        if warnings.is_empty() {
            return Ok(Decision::Safe(proposal));
        }
        self.pending = Some(PendingEdit {
            proposal,
            warnings: warnings.clone(),
        });
        Ok(Decision::PendingConfirmation(warnings))
    }

    /// The parked proposal, checked again against the current timetable
    /// since directory edits may have run meanwhile. Left in place until
    /// `settle` is called.
    pub fn to_confirm(&self, timetable: &Timetable, rules: &EditRules) -> Result<&Proposal> {
        let pending = self.pending.as_ref().ok_or(Error::NothingPending)?;
        pending.proposal.validate(timetable, rules)?;
        Ok(&pending.proposal)
    }

    /// Drops the parked proposal after it was committed.
    pub fn settle(&mut self) {
        self.pending = None;
    }

    pub fn reject(&mut self) -> Result<PendingEdit> {
        self.pending.take().ok_or(Error::NothingPending)
    }
}
