use yew::prelude::*;

use crate::components::{CreateBookingForm, Modal};

#[function_component]
pub fn BookingsPage() -> Html {
    let show_form = use_state(|| false);
    let created_count = use_state(|| 0_u32);

    let open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };

    let close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };

    let on_created = {
        let show_form = show_form.clone();
        let created_count = created_count.clone();
        Callback::from(move |_| {
            created_count.set(*created_count + 1);
            show_form.set(false);
        })
    };

    html! {
        <div class="max-w-2xl mx-auto py-8 px-4 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Bookings"}
                </h1>
                <button
                    onclick={open_form}
                    class="py-2 px-4 rounded-md shadow-sm text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200"
                >
                    {"Create new booking"}
                </button>
            </div>

            if *created_count > 0 {
                <p class="text-sm text-green-800 dark:text-green-200">
                    {format!("{} booking(s) created this session.", *created_count)}
                </p>
            }

            if *show_form {
                <Modal on_close={close_form} max_width="max-w-lg">
                    <CreateBookingForm on_created={on_created} />
                </Modal>
            }
        </div>
    }
}
