use crate::config::AppConfig;
use crate::contact::{ContactField, ContactForm, SubmitStatus, deliver};
use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    let delay = use_context::<AppConfig>().contact_delay;
    let mut form = use_signal(ContactForm::default);

    let onsubmit = move |ev: FormEvent| {
        ev.prevent_default();
        if !form.write().begin_submit() {
            return;
        }
        let submission = form();
        spawn(async move {
            let result = deliver(submission, delay).await;
            form.write().finish_submit(result);
        });
    };

    let current = form();

    rsx! {
        div { class: "contact",
            h1 { class: "page-title", "Contact Us" }
            div { class: "card",
                form { onsubmit: onsubmit,
                    FormField { form, field: ContactField::Name, label: "Name", input_type: "text" }
                    FormField { form, field: ContactField::Email, label: "Email", input_type: "email" }
                    div { class: "form-group",
                        label { r#for: "message", "Message" }
                        textarea {
                            id: "message",
                            name: "message",
                            rows: "5",
                            required: true,
                            value: "{current.message}",
                            oninput: move |ev| form.write().update(ContactField::Message, ev.value()),
                        }
                    }
                    button {
                        class: "btn-primary",
                        r#type: "submit",
                        disabled: current.submitting,
                        if current.submitting { "Sending..." } else { "Send Message" }
                    }
                    {status_line(current.status)}
                }
            }
        }
    }
}

fn status_line(status: SubmitStatus) -> Element {
    match status {
        SubmitStatus::Success => rsx! {
            p { class: "status-success", "Message sent successfully!" }
        },
        SubmitStatus::Error => rsx! {
            p { class: "status-error", "Failed to send message. Please try again." }
        },
        SubmitStatus::Idle => rsx! {},
    }
}

#[component]
fn FormField(
    mut form: Signal<ContactForm>,
    field: ContactField,
    label: &'static str,
    input_type: &'static str,
) -> Element {
    let id = label.to_lowercase();
    let value = form.with(|f| match field {
        ContactField::Name => f.name.clone(),
        ContactField::Email => f.email.clone(),
        ContactField::Message => f.message.clone(),
    });

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{label}" }
            input {
                r#type: input_type,
                id: "{id}",
                name: "{id}",
                required: true,
                value: "{value}",
                oninput: move |ev| form.write().update(field, ev.value()),
            }
        }
    }
}
