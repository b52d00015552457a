use payloads::responses;
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Settings (managed by use_settings) ===
    pub settings: FetchState<responses::Settings>,
}

impl State {
    pub fn set_settings(&mut self, settings: responses::Settings) {
        self.settings = FetchState::Fetched(settings);
    }
}
