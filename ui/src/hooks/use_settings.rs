use payloads::StayPolicy;
use payloads::responses::Settings;
use yew::prelude::*;
use yewdux::prelude::*;

use super::FetchState;
use crate::{State, get_api_client};

/// Whether the booking form may accept input yet, and under which policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsGate {
    Loading,
    Ready(StayPolicy),
}

/// Decide what the booking form shows for the current settings fetch.
///
/// The form waits while a request is in flight, and before the first
/// request has either returned settings or failed. A failed load still
/// opens the form, without a minimum stay.
pub fn settings_gate(
    settings: &FetchState<Settings>,
    in_flight: bool,
    error: Option<&str>,
) -> SettingsGate {
    if in_flight || (!settings.is_fetched() && error.is_none()) {
        return SettingsGate::Loading;
    }
    SettingsGate::Ready(StayPolicy::from_settings(settings.as_ref()))
}

/// Hook return type for property settings
pub struct SettingsHookReturn {
    pub settings: FetchState<Settings>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl SettingsHookReturn {
    pub fn gate(&self) -> SettingsGate {
        settings_gate(&self.settings, self.is_loading, self.error.as_deref())
    }
}

/// Hook to load property settings, cached in global state for the session.
#[hook]
pub fn use_settings() -> SettingsHookReturn {
    let (state, dispatch) = use_store::<State>();
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let refetch = {
        let is_loading = is_loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let dispatch = dispatch.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let api_client = get_api_client();
                match api_client.get_settings().await {
                    Ok(settings) => {
                        tracing::debug!("Loaded settings: {:?}", settings);
                        dispatch.reduce_mut(|state| {
                            state.set_settings(settings);
                        });
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load settings: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Fetch once per session; later forms reuse the store.
    {
        let refetch = refetch.clone();
        let needs_fetch = !state.settings.is_fetched();
        let in_flight = *is_loading;

        use_effect_with((), move |_| {
            if needs_fetch && !in_flight {
                refetch.emit(());
            }
        });
    }

    SettingsHookReturn {
        settings: state.settings.clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
