//! Applying decoded key input to a running game.

use std::ops::ControlFlow;

use blockfall_core::{GameState, PieceSource};
use blockfall_input::{Control, Input};

/// Apply one input. Breaks when the host should quit.
pub fn apply_input<S: PieceSource>(game: &mut GameState<S>, input: Input) -> ControlFlow<()> {
    match input {
        Input::Control(Control::Quit) => return ControlFlow::Break(()),
        Input::Control(Control::Start) => {
            game.start();
        }
        Input::Control(Control::Reset) => game.reset(),
        Input::Command(command) => {
            game.apply_command(command);
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::Sequence;
    use blockfall_types::{GameCommand, Phase, PieceKind};

    fn game() -> GameState<Sequence> {
        GameState::with_source(Sequence::new([PieceKind::T, PieceKind::O]))
    }

    #[test]
    fn test_burst_applied_before_gravity() {
        let mut game = game();
        let burst = [
            Input::Control(Control::Start),
            Input::Command(GameCommand::MoveLeft),
            Input::Command(GameCommand::MoveLeft),
            Input::Command(GameCommand::MoveLeft),
            Input::Command(GameCommand::SoftDrop),
        ];

        assert!(burst
            .into_iter()
            .try_for_each(|input| apply_input(&mut game, input))
            .is_continue());
        let piece = game.active().unwrap();
        assert_eq!((piece.row, piece.col), (1, 1));
        assert_eq!(game.drop_counter_ms(), 0);
    }

    #[test]
    fn test_quit_stops_the_burst() {
        let mut game = game();
        let burst = [
            Input::Control(Control::Start),
            Input::Control(Control::Quit),
            Input::Command(GameCommand::HardDrop),
        ];

        assert!(burst
            .into_iter()
            .try_for_each(|input| apply_input(&mut game, input))
            .is_break());
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.active().unwrap().kind, PieceKind::T);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut game = game();
        let _ = apply_input(&mut game, Input::Control(Control::Start));
        let _ = apply_input(&mut game, Input::Command(GameCommand::HardDrop));
        let _ = apply_input(&mut game, Input::Control(Control::Reset));
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.board().occupied_count(), 0);
    }
}
