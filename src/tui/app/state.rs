use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{evaluate, Category, Evaluation, CLASSIFIERS};
use crate::hand::MAX_JOKERS;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Deal,
    SelectNext,
    SelectPrev,
}

/// One classifier's verdict on the current pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierRow {
    pub category: Category,
    pub eval: Evaluation,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Applied settings
    pub jokers: usize,
    pub board_size: usize,
    pub seed: u64,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_jokers: usize,
    pub cfg_board_size: usize,
    pub cfg_seed: u64,
    pub hands_dealt: u64,
    pub selected: usize,
    hole: Vec<Card>,
    board: Vec<Card>,
    rows: Vec<ClassifierRow>,
    best: Evaluation,
    help_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scene: Scene::Menu,
            jokers: MAX_JOKERS,
            board_size: 5,
            seed: 0,
            menu_index: 0,
            cfg_jokers: MAX_JOKERS,
            cfg_board_size: 5,
            cfg_seed: 0,
            hands_dealt: 0,
            selected: 0,
            hole: Vec::new(),
            board: Vec::new(),
            rows: Vec::new(),
            best: Evaluation::no_match(),
            help_open: false,
        }
    }
}

impl AppState {
    pub const MIN_BOARD: usize = 3;
    pub const MAX_BOARD: usize = 5;

    /// Default settings with the deal sequence starting at `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, cfg_seed: seed, ..Self::default() }
    }

    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Results of every classifier, highest category first. Empty before the first deal.
    pub fn rows(&self) -> &[ClassifierRow] {
        &self.rows
    }

    /// What the orchestrator picked for the current pool.
    pub fn best(&self) -> Evaluation {
        self.best
    }

    pub fn selected_row(&self) -> Option<&ClassifierRow> {
        self.rows.get(self.selected)
    }

    pub fn has_dealt(&self) -> bool {
        self.hands_dealt > 0
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    /// Seed of the hand currently on the table.
    pub fn hand_seed(&self) -> u64 {
        self.seed.wrapping_add(self.hands_dealt.saturating_sub(1))
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Deal => {
                if self.scene == Scene::Table {
                    self.deal();
                    return true;
                }
                false
            }
            InputAction::SelectNext => {
                if self.scene == Scene::Table && !self.rows.is_empty() {
                    self.selected = (self.selected + 1) % self.rows.len();
                }
                false
            }
            InputAction::SelectPrev => {
                if self.scene == Scene::Table && !self.rows.is_empty() {
                    let n = self.rows.len();
                    self.selected = (self.selected + n - 1) % n;
                }
                false
            }
        }
    }

    /// Deal the next seeded pool and run every classifier over it.
    ///
    /// Hand `n` shuffles with `seed + n`, so a seed replays the same sequence.
    pub fn deal(&mut self) {
        let hand_seed = self.seed.wrapping_add(self.hands_dealt);
        let mut deck = Deck::with_jokers(self.jokers);
        deck.shuffle_seeded(hand_seed);
        self.hole = deck.draw_n(2);
        self.board = deck.draw_n(self.board_size);
        self.hands_dealt += 1;

        self.rows = CLASSIFIERS
            .iter()
            .map(|c| ClassifierRow { category: c.category(), eval: c.check(&self.hole, &self.board) })
            .collect();
        self.best = evaluate(&self.hole, &self.board);
        self.selected = self.rows.iter().position(|r| r.category == self.best.category).unwrap_or(0);
        debug!("hand {} (seed {hand_seed}): {} value {}", self.hands_dealt, self.best.category, self.best.value);
    }

    pub(crate) fn clear_table(&mut self) {
        self.hole.clear();
        self.board.clear();
        self.rows.clear();
        self.best = Evaluation::no_match();
        self.hands_dealt = 0;
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AppState {
        let mut app = AppState::default();
        app.apply_menu();
        app
    }

    #[test]
    fn deal_fills_every_row() {
        let mut app = table();
        assert!(app.handle_input(InputAction::Deal));
        assert_eq!(app.hole().len(), 2);
        assert_eq!(app.board().len(), 5);
        assert_eq!(app.rows().len(), 11);
        assert_eq!(app.rows()[0].category, Category::FiveOfAKind);
        assert_eq!(app.rows()[10].category, Category::HighCard);
        assert!(app.best().is_winning_hand());
    }

    #[test]
    fn selection_starts_on_best_row() {
        let mut app = table();
        app.deal();
        let row = app.selected_row().unwrap();
        assert_eq!(row.category, app.best().category);
        assert_eq!(row.eval, app.best());
    }

    #[test]
    fn same_seed_replays_hands() {
        let mut a = table();
        let mut b = table();
        for _ in 0..3 {
            a.deal();
            b.deal();
            assert_eq!(a.hole(), b.hole());
            assert_eq!(a.board(), b.board());
        }
        assert_eq!(a.hand_seed(), 2);
    }

    #[test]
    fn deal_is_ignored_in_menu() {
        let mut app = AppState::default();
        assert!(!app.handle_input(InputAction::Deal));
        assert!(!app.has_dealt());
    }

    #[test]
    fn selection_wraps() {
        let mut app = table();
        app.deal();
        app.selected = 0;
        app.handle_input(InputAction::SelectPrev);
        assert_eq!(app.selected, 10);
        app.handle_input(InputAction::SelectNext);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn start_seed_survives_cancelled_menu() {
        let mut app = AppState::with_seed(42);
        app.cancel_menu();
        app.deal();
        assert_eq!(app.hand_seed(), 42);

        let mut fresh = AppState::default();
        fresh.cfg_seed = 42;
        fresh.apply_menu();
        fresh.deal();
        assert_eq!(app.hole(), fresh.hole());
        assert_eq!(app.board(), fresh.board());
    }
}
