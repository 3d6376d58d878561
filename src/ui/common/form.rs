use leptos::prelude::*;

/// Labelled single-line input
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Whether field is required (browser-side `required` attribute)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Form control name
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    let id = format!("contact-{name}");
    view! {
        <div class="space-y-2">
            <label for=id.clone() class="block text-sm font-medium text-gray-300">
                {label}
            </label>
            <input
                id=id
                name=name
                type=input_type
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Whether field is required (browser-side `required` attribute)
    #[prop(default = false)]
    required: bool,
    /// Form control name
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
) -> impl IntoView {
    let id = format!("contact-{name}");
    view! {
        <div class="space-y-2">
            <label for=id.clone() class="block text-sm font-medium text-gray-300">
                {label}
            </label>
            <textarea
                id=id
                name=name
                class="form-input resize-none"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
