use payloads::{ClientError, IdempotencyKey};
use yew::prelude::*;

use crate::booking_form::{BookingField, BookingFormAction, BookingFormState};
use crate::components::FormRow;
use crate::get_api_client;
use crate::hooks::{SettingsGate, use_settings};
use crate::utils::time::{date_input_value, parse_date_input, today};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                           rounded-md shadow-sm bg-white dark:bg-neutral-700
                           text-neutral-900 dark:text-neutral-100
                           focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
                           dark:focus:ring-neutral-400 dark:focus:border-neutral-400";

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Called after the backend accepted the booking
    #[prop_or_default]
    pub on_created: Callback<()>,
}

#[function_component]
pub fn CreateBookingForm(props: &Props) -> Html {
    let settings = use_settings();
    let form = use_reducer(BookingFormState::default);

    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    // No field may be touched before the minimum stay is known.
    let policy = match settings.gate() {
        SettingsGate::Loading => {
            return html! {
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading settings..."}
                </p>
            };
        }
        SettingsGate::Ready(policy) => policy,
    };

    let on_start_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            form.dispatch(BookingFormAction::SetStartDate(parse_date_input(
                &input.value(),
            )));
        })
    };

    let on_end_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            form.dispatch(BookingFormAction::SetEndDate(parse_date_input(
                &input.value(),
            )));
        })
    };

    let on_nights_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            form.dispatch(BookingFormAction::SetNumNights(input.value()));
        })
    };

    let on_blur = |field: BookingField| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            form.dispatch(BookingFormAction::Blur(field, policy));
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = form.submission(policy, IdempotencyKey::new());
            form.dispatch(BookingFormAction::Submit(policy));

            let booking = match submission {
                Ok(booking) => booking,
                Err(errors) => {
                    tracing::debug!("Booking not submitted: {:?}", errors);
                    return;
                }
            };

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_created = on_created.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                match api_client.create_booking(&booking).await {
                    Ok(()) => {
                        tracing::info!(
                            "Created booking {} to {} ({} nights)",
                            booking.start_date,
                            booking.end_date,
                            booking.num_nights
                        );
                        is_submitting.set(false);
                        form.dispatch(BookingFormAction::Reset);
                        on_created.emit(());
                        return;
                    }
                    Err(ClientError::APIError(status, msg)) => {
                        tracing::error!(
                            "Booking rejected ({}): {}",
                            status,
                            msg
                        );
                        error_message.set(Some(msg));
                    }
                    Err(e @ ClientError::Network(_)) => {
                        tracing::error!("Booking request failed: {:?}", e);
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    let error_text = |field: BookingField| {
        form.error(field).map(|e| AttrValue::from(e.to_string()))
    };

    let start_min = today().to_string();
    let end_min = form.draft.start_date.map(|start| start.date().to_string());

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            <h2 class="text-xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Create new booking"}
            </h2>

            if let Some(error) = &settings.error {
                <div class="p-4 rounded-md bg-yellow-50 dark:bg-yellow-900/20 border border-yellow-200 dark:border-yellow-800">
                    <p class="text-sm text-yellow-800 dark:text-yellow-300">
                        {format!(
                            "Could not load settings ({}). Minimum stay is not enforced.",
                            error
                        )}
                    </p>
                    <button
                        type="button"
                        onclick={settings.refetch.reform(|_: MouseEvent| ())}
                        class="mt-2 text-sm font-medium underline text-yellow-800 dark:text-yellow-300"
                    >
                        {"Retry"}
                    </button>
                </div>
            }

            if let Some(error) = &*error_message {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                </div>
            }

            <FormRow
                label="Start date"
                input_id="start-date"
                error={error_text(BookingField::StartDate)}
            >
                <input
                    type="date"
                    id="start-date"
                    min={start_min}
                    value={date_input_value(form.draft.start_date)}
                    onchange={on_start_change}
                    onblur={on_blur(BookingField::StartDate)}
                    disabled={*is_submitting}
                    class={INPUT_CLASS}
                />
            </FormRow>

            <FormRow
                label="End date"
                input_id="end-date"
                error={error_text(BookingField::EndDate)}
            >
                <input
                    type="date"
                    id="end-date"
                    min={end_min}
                    value={date_input_value(form.draft.end_date)}
                    onchange={on_end_change}
                    onblur={on_blur(BookingField::EndDate)}
                    disabled={*is_submitting}
                    class={INPUT_CLASS}
                />
            </FormRow>

            <FormRow
                label="Number of nights"
                input_id="num-nights"
                error={error_text(BookingField::NumNights)}
            >
                <input
                    type="number"
                    id="num-nights"
                    min="0"
                    value={form.draft.num_nights.clone()}
                    oninput={on_nights_input}
                    onblur={on_blur(BookingField::NumNights)}
                    disabled={*is_submitting}
                    class={INPUT_CLASS}
                />
            </FormRow>

            if policy.minimum_nights > 0 {
                <p class="text-xs text-neutral-500 dark:text-neutral-400">
                    {format!("Bookings must be at least {} nights.", policy.minimum_nights)}
                </p>
            }

            <button
                type="submit"
                disabled={*is_submitting}
                class="w-full flex justify-center py-2 px-4 border border-transparent
                       rounded-md shadow-sm text-sm font-medium text-white
                       bg-neutral-900 hover:bg-neutral-800
                       dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                       focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors duration-200"
            >
                if *is_submitting {
                    {"Creating Booking..."}
                } else {
                    {"Create new Booking"}
                }
            </button>
        </form>
    }
}
