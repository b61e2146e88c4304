use crate::arg::args::Arg;
use crate::core::types::Flag;
use crate::errors::Error;

#[derive(Debug)]
pub enum FlagDecision {
    /// Stop execution and just print usage()
    ShortCircuitUsage,
    /// Continue command execution
    Continue,
    /// Turn into an error
    Error(Error),
}

pub trait FlagRule {
    fn check(&self, args: &[Arg]) -> FlagDecision;
}

/// `-h` at a fixed position prints usage.
pub struct HelpAtIdx(pub usize);
impl FlagRule for HelpAtIdx {
    fn check(&self, args: &[Arg]) -> FlagDecision {
        match args.get(self.0) {
            Some(Arg::Flag(Flag::Help)) => FlagDecision::ShortCircuitUsage,
            _ => FlagDecision::Continue,
        }
    }
}

/// `-h` anywhere prints usage. For commands whose arity varies.
pub struct HelpAnywhere;
impl FlagRule for HelpAnywhere {
    fn check(&self, args: &[Arg]) -> FlagDecision {
        if args.iter().any(|a| matches!(a, Arg::Flag(Flag::Help))) {
            FlagDecision::ShortCircuitUsage
        } else {
            FlagDecision::Continue
        }
    }
}

/// Refuses more than the given number of arguments.
pub struct MaxArgs(pub usize);
impl FlagRule for MaxArgs {
    fn check(&self, args: &[Arg]) -> FlagDecision {
        if args.len() <= self.0 {
            return FlagDecision::Continue;
        }
        let extra = args[self.0..]
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        FlagDecision::Error(Error::Parse(format!(
            "Unexpected argument(s): {extra}. Expected at most {}.",
            self.0
        )))
    }
}

pub struct FlagPolicy {
    rules: Vec<Box<dyn FlagRule>>,
}
impl FlagPolicy {
    pub fn new(rules: Vec<Box<dyn FlagRule>>) -> Self {
        Self { rules }
    }

    /// Help at the first position and no further arguments.
    pub fn bare() -> Self {
        Self::new(vec![Box::new(HelpAtIdx(0)), Box::new(MaxArgs(0))])
    }

    pub fn evaluate(&self, args: &[Arg]) -> FlagDecision {
        // First matching short-circuit wins; otherwise Continue.
        for r in &self.rules {
            match r.check(args) {
                FlagDecision::Continue => continue,
                other => return other,
            }
        }
        FlagDecision::Continue
    }
}
