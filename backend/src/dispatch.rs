//! Signal delivery to the resolved pids.

use crate::types::{ProcError, SelectionPlan};
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;

/// External signal-delivery service: send one numeric signal to one pid.
pub trait SignalSender {
    fn send(&self, signal: &str, pid: i32) -> Result<(), ProcError>;
}

/// kill(2) backed delivery via `nix`.
#[derive(Debug, Default)]
pub struct SystemSignalSender;

impl SignalSender for SystemSignalSender {
    fn send(&self, signal: &str, pid: i32) -> Result<(), ProcError> {
        let signo: i32 = signal
            .parse()
            .map_err(|_| ProcError::Signal(pid, format!("invalid signal '{signal}'")))?;
        let sig = Signal::try_from(signo)
            .map_err(|e| ProcError::Signal(pid, e.to_string()))?;
        signal::kill(Pid::from_raw(pid), sig)
            .map_err(|e| ProcError::Signal(pid, e.to_string()))
    }
}

/// Result of one delivery attempt.
#[derive(Debug)]
pub struct KillOutcome {
    pub pid: i32,
    pub result: Result<(), ProcError>,
}

/// Send the plan's signal to every pid, in plan order.
///
/// Each delivery is independent: a failure is recorded and the batch
/// continues. No rollback, no retry.
pub fn dispatch(sender: &dyn SignalSender, plan: &SelectionPlan) -> Vec<KillOutcome> {
    plan.pids
        .iter()
        .map(|&pid| KillOutcome {
            pid,
            result: sender.send(&plan.signal, pid),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FlakySender {
        attempted: RefCell<Vec<(String, i32)>>,
        fail_pid: Option<i32>,
    }

    impl FlakySender {
        fn new(fail_pid: Option<i32>) -> Self {
            Self {
                attempted: RefCell::new(Vec::new()),
                fail_pid,
            }
        }
    }

    impl SignalSender for FlakySender {
        fn send(&self, signal: &str, pid: i32) -> Result<(), ProcError> {
            self.attempted.borrow_mut().push((signal.to_string(), pid));
            if self.fail_pid == Some(pid) {
                return Err(ProcError::Signal(pid, "Operation not permitted".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn delivers_to_every_pid_in_plan_order() {
        let sender = FlakySender::new(None);
        let plan = SelectionPlan {
            signal: "15".to_string(),
            pids: vec![100, 200, 300],
        };
        let outcomes = dispatch(&sender, &plan);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        assert_eq!(
            *sender.attempted.borrow(),
            vec![
                ("15".to_string(), 100),
                ("15".to_string(), 200),
                ("15".to_string(), 300)
            ]
        );
    }

    #[test]
    fn one_failure_never_aborts_the_batch() {
        let sender = FlakySender::new(Some(200));
        let plan = SelectionPlan {
            signal: "9".to_string(),
            pids: vec![100, 200, 300],
        };
        let outcomes = dispatch(&sender, &plan);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert!(outcomes[2].result.is_ok());
        // The failing pid did not stop pid 300 from being attempted.
        assert_eq!(sender.attempted.borrow().len(), 3);
    }

    #[test]
    fn failure_message_names_the_pid_and_cause() {
        let sender = FlakySender::new(Some(77));
        let plan = SelectionPlan {
            signal: "15".to_string(),
            pids: vec![77],
        };
        let outcomes = dispatch(&sender, &plan);
        let err = outcomes[0].result.as_ref().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to kill process 77: Operation not permitted"
        );
    }

    #[test]
    fn unparseable_signal_fails_per_pid() {
        let plan = SelectionPlan {
            signal: "notasignal".to_string(),
            pids: vec![1],
        };
        let outcomes = dispatch(&SystemSignalSender, &plan);
        assert!(outcomes[0].result.is_err());
    }
}
