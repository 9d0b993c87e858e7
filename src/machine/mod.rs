//! The finite-state machine that drives both orchestrators.
//!
//! A machine owns a closed set of boxed states, keeps at most one of them
//! current, and forwards each frame step to it. Hooks request transitions by
//! returning `Step::Goto`; the machine applies them synchronously.

mod error;
mod fsm;

pub use error::MachineError;
pub use fsm::FiniteStateMachine;
