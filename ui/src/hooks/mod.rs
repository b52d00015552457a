pub mod use_outside_click;
pub mod use_settings;

pub use use_outside_click::use_outside_click;
pub use use_settings::{
    SettingsGate, SettingsHookReturn, settings_gate, use_settings,
};

/// Distinguishes "not fetched yet" from a fetched value, so an empty
/// response is not mistaken for a pending one.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotFetched
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
