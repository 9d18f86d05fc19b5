use serde::{Deserialize, Serialize};

use super::period::Period;
use super::touch::TouchState;

/// Interactive state of one graph instance: what the user has picked and
/// where their finger is. Owned by `NavGraph`, never global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphState {
    pub selected_period: Period,
    pub touch: TouchState,
}

impl GraphState {
    pub fn new(selected_period: Period) -> Self {
        Self {
            selected_period,
            touch: TouchState::default(),
        }
    }
}
