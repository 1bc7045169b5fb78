use bigdecimal::BigDecimal;
use log::debug;
use std::mem;

use crate::error::CalculationError;
use crate::operation::Operation;

/// Where the session is in the request-operand, request-operator, request-operand, compute, show-answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitOperand1,
    AwaitOperation,
    AwaitOperand2,
    Compute,
    ShowAnswer,
}

// Each phase carries exactly the values that must be present in it.
#[derive(Debug, Clone, PartialEq)]
enum State {
    AwaitOperand1,
    AwaitOperation { a: BigDecimal },
    AwaitOperand2 { a: BigDecimal, op: Operation },
    Compute { a: BigDecimal, op: Operation, b: BigDecimal },
    ShowAnswer { a: BigDecimal },
}

impl State {
    fn phase(&self) -> Phase {
        match self {
            State::AwaitOperand1 => Phase::AwaitOperand1,
            State::AwaitOperation { .. } => Phase::AwaitOperation,
            State::AwaitOperand2 { .. } => Phase::AwaitOperand2,
            State::Compute { .. } => Phase::Compute,
            State::ShowAnswer { .. } => Phase::ShowAnswer,
        }
    }
}

/// The calculation in progress. Holds no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    state: State,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session { state: State::AwaitOperand1 }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn operand_a(&self) -> Option<&BigDecimal> {
        match &self.state {
            State::AwaitOperand1 => None,
            State::AwaitOperation { a }
            | State::AwaitOperand2 { a, .. }
            | State::Compute { a, .. }
            | State::ShowAnswer { a } => Some(a),
        }
    }

    pub fn operand_b(&self) -> Option<&BigDecimal> {
        match &self.state {
            State::Compute { b, .. } => Some(b),
            _ => None,
        }
    }

    pub fn operation(&self) -> Option<&Operation> {
        match &self.state {
            State::AwaitOperand2 { op, .. } | State::Compute { op, .. } => Some(op),
            _ => None,
        }
    }

    fn take(&mut self) -> State {
        mem::replace(&mut self.state, State::AwaitOperand1)
    }

    // The old state has usually been taken out by now, so its phase is passed in for the log
    fn set_from(&mut self, from: Phase, state: State) {
        debug!("phase {:?} -> {:?}", from, state.phase());
        self.state = state;
    }

    pub fn reset(&mut self) {
        let from = self.phase();
        self.set_from(from, State::AwaitOperand1);
    }

    // False, with nothing changed, outside the operand phases
    pub fn accept_operand(&mut self, value: BigDecimal) -> bool {
        let from = self.phase();
        let next = match self.take() {
            State::AwaitOperand1 => State::AwaitOperation { a: value },
            State::AwaitOperand2 { a, op } => State::Compute { a, op, b: value },
            other => {
                self.state = other;
                return false;
            }
        };
        self.set_from(from, next);
        true
    }

    pub fn accept_operation(&mut self, op: Operation) -> bool {
        let from = self.phase();
        match self.take() {
            State::AwaitOperation { a } => {
                self.set_from(from, State::AwaitOperand2 { a, op });
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    // On failure the first operand and the operation are kept and the second operand is asked for again
    pub fn calculate(&mut self, precision: u64) -> Result<(), CalculationError> {
        let from = self.phase();
        let (a, op, b) = match self.take() {
            State::Compute { a, op, b } => (a, op, b),
            other => {
                self.state = other;
                return Ok(());
            }
        };
        match op.apply(&a, &b, precision) {
            Ok(answer) => {
                self.set_from(from, State::ShowAnswer { a: answer });
                Ok(())
            }
            Err(e) => {
                debug!("{} rejected {} and {}: {}", op.name, a, b, e);
                self.set_from(from, State::AwaitOperand2 { a, op });
                Err(e)
            }
        }
    }

    // The shown answer stays on as the first operand of the next calculation
    pub fn release_answer(&mut self) -> Option<&BigDecimal> {
        let from = self.phase();
        match self.take() {
            State::ShowAnswer { a } => {
                self.set_from(from, State::AwaitOperation { a });
                self.operand_a()
            }
            other => {
                self.state = other;
                None
            }
        }
    }
}
