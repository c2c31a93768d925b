//! The game model facade.

use log::debug;

use crate::cards::{Card, DECK_SIZE};
use crate::core::{GameConfig, GameRng, GameRngState};
use crate::moves::{CardMove, Move, MoveHistory, RevealTopMove};
use crate::rules::GameModelView;
use crate::zones::{CardStack, Deck, FoundationPile, Location, TableauPile};

use super::board::Board;
use super::listener::{GameModelListener, ListenerId, ListenerRegistry};

/// The state of one game of Klondike, and the only way to change it.
///
/// Queries come from [`GameModelView`]. Changes happen by performing a
/// [`Move`] obtained from the view's factories, by [`GameModel::undo_last`],
/// [`GameModel::reset_deck`], or [`GameModel::reset`]. Each committed change
/// notifies every listener exactly once.
///
/// ```
/// use klondike_engine::{GameConfig, GameModel, GameModelView};
///
/// let mut model = GameModel::new(GameConfig::new(42));
/// let mv = model.discard_move();
/// model.perform(mv);
///
/// assert!(!model.is_discard_pile_empty());
/// assert!(model.can_undo());
///
/// model.undo_last();
/// assert!(model.is_discard_pile_empty());
/// ```
#[derive(Debug)]
pub struct GameModel {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    history: MoveHistory,
    listeners: ListenerRegistry,
    deals: u64,
}

impl GameModel {
    /// Create a model and deal the first game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut model = Self {
            rng: GameRng::new(config.seed),
            board: Board::new(config.foundation_suits),
            history: MoveHistory::new(),
            listeners: ListenerRegistry::new(),
            deals: 0,
            config,
        };
        model.reset();
        model
    }

    /// Create a model with default rules and the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::new(seed))
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle and deal a new game, forgetting all history.
    pub fn reset(&mut self) {
        self.history.clear();
        self.board.deal(&mut self.rng);
        self.deals += 1;
        debug!("dealt game {} from seed {}", self.deals, self.config.seed);
        self.notify();
    }

    /// Games dealt by this model, including the current one.
    #[must_use]
    pub fn deals(&self) -> u64 {
        self.deals
    }

    /// Position of the shuffle stream, for replaying future deals.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Cards on the foundations.
    #[must_use]
    pub fn score(&self) -> usize {
        self.board.foundation().total_size()
    }

    /// Whether every card is on the foundations.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.score() == DECK_SIZE
    }

    /// Register an observer. See [`GameModelListener`].
    pub fn add_listener(&mut self, listener: impl GameModelListener + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Commit a move: apply it, record it for undo, notify listeners.
    ///
    /// The null move does nothing at all.
    ///
    /// # Panics
    ///
    /// Panics if the move is not legal in the current state: a discard move
    /// with an empty deck, or a card move whose card has left its captured
    /// origin or whose destination does not accept it, or a plain card move
    /// that would leave a face-down card on top of its pile.
    pub fn perform(&mut self, mv: Move) {
        match &mv {
            Move::Null => return,
            Move::Discard => assert!(!self.board.deck().is_empty(), "discard move with an empty deck"),
            Move::Card(card_move) => {
                self.check_card_move(card_move);
                assert!(
                    !self.board.tableau().reveals_top(card_move.card()),
                    "{} uncovers a face-down card and needs a composite move",
                    card_move.card()
                );
            }
            Move::Composite { card_move, reveal } => {
                self.check_card_move(card_move);
                assert_eq!(
                    Location::Tableau(reveal.pile()),
                    card_move.origin(),
                    "reveal must follow its card move's origin"
                );
                assert!(
                    self.board.tableau().reveals_top(card_move.card()),
                    "{} does not uncover a face-down card",
                    card_move.card()
                );
            }
            Move::ResetDeck { count } => {
                assert_eq!(*count, self.board.discard().len(), "stale deck reset");
            }
        }

        mv.apply(&mut self.board);
        debug!("performed {}", mv);
        self.history.push(mv);
        self.notify();
    }

    fn check_card_move(&self, card_move: &CardMove) {
        let card = card_move.card();
        assert_eq!(
            self.board.find(card),
            Some(card_move.origin()),
            "{} is no longer at {}",
            card,
            card_move.origin()
        );
        assert!(
            self.is_legal_move(card, card_move.destination()),
            "illegal move: {}",
            card_move
        );
    }

    /// Undo the most recent move. Does nothing if there is none.
    pub fn undo_last(&mut self) {
        if let Some(mv) = self.history.pop() {
            mv.revert(&mut self.board);
            debug!("undid {}", mv);
            self.notify();
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Moves that `undo_last` can still revert, oldest first.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Put the whole discard pile back into the deck, in reverse order, so it
    /// can be drawn again. Listeners are notified even if nothing moved.
    ///
    /// Recorded for undo only when the configuration asks for it. Otherwise
    /// undo cannot reach back past a reset that moved cards, so the history
    /// is cleared.
    pub fn reset_deck(&mut self) {
        let count = self.board.discard().len();
        if self.config.undoable_deck_reset && count > 0 {
            self.perform(Move::ResetDeck { count });
            return;
        }

        if count > 0 {
            self.history.clear();
        }
        self.board.recycle_discard();
        debug!("recycled {} cards into the deck", count);
        self.notify();
    }

    /// The deck, bottom to top.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.board.deck()
    }

    /// The discard pile, bottom to top.
    #[must_use]
    pub fn discard_pile(&self) -> &CardStack {
        self.board.discard()
    }

    /// A foundation pile, bottom to top.
    #[must_use]
    pub fn foundation_pile(&self, pile: FoundationPile) -> &CardStack {
        self.board.foundation().pile(pile)
    }

    /// Every card in the game, wherever it is.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.board.all_cards()
    }

    /// Where `card` can be moved from.
    ///
    /// # Panics
    ///
    /// Panics if the card is in the deck or buried in the discard pile or a
    /// foundation pile.
    fn find(&self, card: Card) -> Location {
        match self.board.find(card) {
            Some(location) => location,
            None => panic!("{} is not at a movable position", card),
        }
    }

    fn notify(&mut self) {
        self.listeners.notify_all();
    }
}

impl GameModelView for GameModel {
    fn is_deck_empty(&self) -> bool {
        self.board.deck().is_empty()
    }

    fn is_discard_pile_empty(&self) -> bool {
        self.board.discard().is_empty()
    }

    fn is_foundation_pile_empty(&self, pile: FoundationPile) -> bool {
        self.board.foundation().is_empty(pile)
    }

    fn peek_suit_stack(&self, pile: FoundationPile) -> Card {
        self.board.foundation().peek(pile)
    }

    fn peek_discard_pile(&self) -> Card {
        match self.board.discard().peek() {
            Some(card) => card,
            None => panic!("peek on an empty discard pile"),
        }
    }

    fn tableau_pile(&self, pile: TableauPile) -> &CardStack {
        self.board.tableau().pile(pile)
    }

    fn is_visible_in_tableau(&self, card: Card) -> bool {
        self.board.tableau().is_visible(card)
    }

    fn is_lowest_visible_in_tableau(&self, card: Card) -> bool {
        self.board.tableau().is_lowest_visible(card)
    }

    fn sub_stack(&self, card: Card, pile: TableauPile) -> CardStack {
        assert_eq!(
            self.board.find(card),
            Some(Location::Tableau(pile)),
            "{} is not in tableau {}",
            card,
            pile.index()
        );
        self.board.tableau().sequence(card, pile)
    }

    fn is_bottom_king(&self, card: Card) -> bool {
        let tableau = self.board.tableau();
        assert!(tableau.contains(card), "{} is not in the tableau", card);
        tableau.is_bottom_king(card)
    }

    fn is_legal_move(&self, card: Card, destination: Location) -> bool {
        let Some(origin) = self.board.find(card) else {
            return false;
        };

        match destination {
            Location::DiscardPile => false,
            Location::Foundation(pile) => {
                // Only single cards go to a foundation.
                if let Location::Tableau(source) = origin {
                    let tableau = self.board.tableau();
                    if tableau.pile(source).peek() != Some(card) || !tableau.is_visible(card) {
                        return false;
                    }
                }
                self.board.foundation().can_move_to(card, pile)
            }
            Location::Tableau(pile) => self.board.tableau().can_move_to(card, pile),
        }
    }

    fn null_move(&self) -> Move {
        Move::Null
    }

    fn discard_move(&self) -> Move {
        Move::Discard
    }

    fn card_move(&self, card: Card, destination: Location) -> Move {
        let origin = self.find(card);
        let card_move = CardMove::new(card, origin, destination);

        match origin {
            Location::Tableau(pile) if self.board.tableau().reveals_top(card) => Move::Composite {
                card_move,
                reveal: RevealTopMove::new(pile),
            },
            _ => Move::Card(card_move),
        }
    }
}
