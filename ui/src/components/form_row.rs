use yew::prelude::*;

/// A labelled form field with room for a validation message underneath.
#[derive(Properties, PartialEq)]
pub struct FormRowProps {
    pub children: Html,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// `id` of the input the label describes
    #[prop_or_default]
    pub input_id: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component]
pub fn FormRow(props: &FormRowProps) -> Html {
    html! {
        <div>
            if let Some(label) = &props.label {
                <label
                    for={props.input_id.clone()}
                    class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
                >
                    {label}
                </label>
            }
            {props.children.clone()}
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-700 dark:text-red-400">{error}</p>
            }
        </div>
    }
}
