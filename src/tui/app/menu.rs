use crate::hand::MAX_JOKERS;

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Jokers,
    BoardSize,
    Seed,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Jokers, MenuItem::BoardSize, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Jokers => format!("Jokers in deck: {}", app.cfg_jokers),
            MenuItem::BoardSize => format!("Board cards: {}", app.cfg_board_size),
            MenuItem::Seed => format!("Seed: {}", app.cfg_seed),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Jokers => {
                if app.cfg_jokers < MAX_JOKERS {
                    app.cfg_jokers += 1;
                }
            }
            MenuItem::BoardSize => {
                if app.cfg_board_size < AppState::MAX_BOARD {
                    app.cfg_board_size += 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.wrapping_add(1);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Jokers => {
                app.cfg_jokers = app.cfg_jokers.saturating_sub(1);
            }
            MenuItem::BoardSize => {
                if app.cfg_board_size > AppState::MIN_BOARD {
                    app.cfg_board_size -= 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.wrapping_sub(1);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_jokers = self.jokers;
        self.cfg_board_size = self.board_size;
        self.cfg_seed = self.seed;
        self.scene = Scene::Menu;
    }

    /// Apply the edited settings and start a fresh sequence of hands.
    pub fn apply_menu(&mut self) {
        self.cfg_jokers = self.cfg_jokers.min(MAX_JOKERS);
        self.cfg_board_size = self.cfg_board_size.clamp(Self::MIN_BOARD, Self::MAX_BOARD);

        self.jokers = self.cfg_jokers;
        self.board_size = self.cfg_board_size;
        self.seed = self.cfg_seed;
        self.clear_table();
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
