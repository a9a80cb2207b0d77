/// Rules of a turn based game as seen by a search.
///
/// States are mutated in place. Every successful `apply` must be paired with an `undo` of the
/// returned record, in reverse order of application, before control returns to the caller
/// that owns the state.
pub trait GameEngine {
    type Action;
    type State;
    type Undo;
    type Rejection;

    /// Legal actions for the player to move, most promising first.
    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action>;

    /// Applies the action, or rejects it leaving the state untouched.
    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<Self::Undo, Self::Rejection>;

    fn undo(&self, game_state: &mut Self::State, undo: Self::Undo);

    fn player_to_move(&self, game_state: &Self::State) -> usize;

    fn is_terminal(&self, game_state: &Self::State) -> bool;
}
