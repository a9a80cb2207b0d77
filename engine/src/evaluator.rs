/// Static evaluation of a position from a fixed player's point of view.
///
/// Larger is better for `perspective`. `f32::INFINITY` and `f32::NEG_INFINITY` denote decided games.
pub trait Evaluator {
    type State;

    fn evaluate(&self, game_state: &Self::State, perspective: usize) -> f32;
}
