use rust_fsm::*;

/// Where a typing-test session is between paragraphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Selecting,
    Typing,
    Reviewing,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEvent {
    /// A paragraph was picked and shown.
    Prompted,
    /// The user entered a non-empty line.
    Submitted,
    /// The user entered an empty line instead of typing.
    Abandoned,
    Next,
    Quit,
    /// No paragraph is left for the current selector.
    Exhausted,
}

/// What the session should tell the user after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundCue {
    ShowScore,
    Goodbye,
    NoMoreParagraphs,
}

pub struct RoundMachine;

impl StateMachineImpl for RoundMachine {
    type Input = RoundEvent;
    type State = RoundState;
    type Output = RoundCue;
    const INITIAL_STATE: Self::State = RoundState::Selecting;

    fn transition(state: &Self::State, input: &Self::Input) -> Option<Self::State> {
        match (state, input) {
            (RoundState::Selecting, RoundEvent::Prompted) => Some(RoundState::Typing),
            (RoundState::Selecting, RoundEvent::Exhausted) => Some(RoundState::Done),
            (RoundState::Typing, RoundEvent::Submitted) => Some(RoundState::Reviewing),
            (RoundState::Typing, RoundEvent::Abandoned) => Some(RoundState::Done),
            (RoundState::Reviewing, RoundEvent::Next) => Some(RoundState::Selecting),
            (RoundState::Reviewing, RoundEvent::Quit) => Some(RoundState::Done),
            _ => None,
        }
    }

    fn output(state: &Self::State, input: &Self::Input) -> Option<Self::Output> {
        match (state, input) {
            (RoundState::Typing, RoundEvent::Submitted) => Some(RoundCue::ShowScore),
            (RoundState::Typing, RoundEvent::Abandoned) => Some(RoundCue::Goodbye),
            (RoundState::Selecting, RoundEvent::Exhausted) => Some(RoundCue::NoMoreParagraphs),
            _ => None,
        }
    }
}

pub type Round = StateMachine<RoundMachine>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_round_then_quit() {
        let mut round = Round::new();
        assert_eq!(*round.state(), RoundState::Selecting);
        assert_eq!(round.consume(&RoundEvent::Prompted).unwrap(), None);
        assert_eq!(
            round.consume(&RoundEvent::Submitted).unwrap(),
            Some(RoundCue::ShowScore)
        );
        assert_eq!(round.consume(&RoundEvent::Next).unwrap(), None);
        assert_eq!(*round.state(), RoundState::Selecting);
        round.consume(&RoundEvent::Prompted).unwrap();
        round.consume(&RoundEvent::Submitted).unwrap();
        round.consume(&RoundEvent::Quit).unwrap();
        assert_eq!(*round.state(), RoundState::Done);
    }

    #[test]
    fn abandon_and_exhaust_finish_the_session() {
        let mut round = Round::new();
        round.consume(&RoundEvent::Prompted).unwrap();
        assert_eq!(
            round.consume(&RoundEvent::Abandoned).unwrap(),
            Some(RoundCue::Goodbye)
        );
        assert_eq!(*round.state(), RoundState::Done);

        let mut round = Round::new();
        assert_eq!(
            round.consume(&RoundEvent::Exhausted).unwrap(),
            Some(RoundCue::NoMoreParagraphs)
        );
        assert_eq!(*round.state(), RoundState::Done);
    }

    #[test]
    fn impossible_transitions_are_rejected() {
        let mut round = Round::new();
        assert!(round.consume(&RoundEvent::Submitted).is_err());
        assert!(round.consume(&RoundEvent::Next).is_err());
        assert_eq!(*round.state(), RoundState::Selecting);
        assert!(RoundMachine::transition(&RoundState::Done, &RoundEvent::Prompted).is_none());
    }
}
