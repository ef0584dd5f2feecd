mod menu;
mod state;

pub use state::{AppState, ClassifierRow, InputAction, Scene};
