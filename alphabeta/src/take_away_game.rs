use engine::{Evaluator, GameEngine, TranspositionHash};

/// Players alternately take one or two stones. Whoever takes the last stone wins.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct TakeAwayState {
    pub p1_turn: bool,
    pub pile: usize,
}

impl TakeAwayState {
    pub fn new(pile: usize) -> Self {
        Self { p1_turn: true, pile }
    }

    pub fn player_to_move(&self) -> usize {
        if self.p1_turn {
            1
        } else {
            2
        }
    }

    /// The player who took the last stone, once the pile is empty.
    pub fn winner(&self) -> Option<usize> {
        if self.pile == 0 {
            Some(if self.p1_turn { 2 } else { 1 })
        } else {
            None
        }
    }
}

impl TranspositionHash for TakeAwayState {
    fn transposition_hash(&self) -> u64 {
        (self.pile as u64) << 1 | self.p1_turn as u64
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Take(pub usize);

#[derive(Debug, PartialEq, Eq)]
pub struct TooFewStones;

#[derive(Default)]
pub struct TakeAwayEngine {
    /// Also offers taking three stones, which `apply` always refuses.
    pub offer_illegal: bool,
}

impl TakeAwayEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameEngine for TakeAwayEngine {
    type Action = Take;
    type State = TakeAwayState;
    type Undo = Take;
    type Rejection = TooFewStones;

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        if game_state.pile == 0 {
            return vec![];
        }

        let mut actions: Vec<Take> = (1..=2)
            .filter(|n| *n <= game_state.pile)
            .map(Take)
            .collect();

        if self.offer_illegal {
            actions.insert(0, Take(3));
        }

        actions
    }

    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<Self::Undo, Self::Rejection> {
        if action.0 > 2 || action.0 > game_state.pile {
            return Err(TooFewStones);
        }

        game_state.pile -= action.0;
        game_state.p1_turn = !game_state.p1_turn;

        Ok(*action)
    }

    fn undo(&self, game_state: &mut Self::State, undo: Self::Undo) {
        game_state.pile += undo.0;
        game_state.p1_turn = !game_state.p1_turn;
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move()
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.pile == 0
    }
}

/// Scores decided games as won or lost. Undecided piles get an arbitrary but deterministic
/// score so that pruning and the transposition table have something to disagree about.
pub struct TakeAwayEvaluator;

impl Evaluator for TakeAwayEvaluator {
    type State = TakeAwayState;

    fn evaluate(&self, game_state: &Self::State, perspective: usize) -> f32 {
        if let Some(winner) = game_state.winner() {
            return if winner == perspective {
                f32::INFINITY
            } else {
                f32::NEG_INFINITY
            };
        }

        let p1_score = ((game_state.pile * 7 + if game_state.p1_turn { 3 } else { 0 }) % 5)
            as f32
            - 2.0;

        if perspective == 1 {
            p1_score
        } else {
            -p1_score
        }
    }
}
