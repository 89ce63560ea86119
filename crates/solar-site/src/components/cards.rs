//! Card components for the landing sections

use leptos::*;

#[component]
pub fn ServiceCard(
    title: &'static str,
    description: &'static str,
    bullets: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm">
            <h3 class="text-xl font-semibold">{title}</h3>
            <p class="mt-2 text-slate-600">{description}</p>
            <ul class="mt-4 space-y-1 text-sm text-slate-700 list-disc list-inside">
                {bullets.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn BenefitCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm text-center">
            <div class="text-3xl">{icon}</div>
            <h3 class="mt-2 font-semibold">{title}</h3>
            <p class="text-slate-600 mt-1 text-sm">{description}</p>
        </div>
    }
}

#[component]
pub fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <li class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm">
            <div class="text-3xl font-extrabold text-emerald-600">{number}</div>
            <h3 class="mt-2 font-semibold">{title}</h3>
            <p class="text-slate-600 text-sm">{description}</p>
        </li>
    }
}

#[component]
pub fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm">
            <p class="text-slate-700">"“"{quote}"”"</p>
            <div class="mt-4 text-sm text-slate-500">{author}" • "{role}</div>
        </div>
    }
}

/// Collapsible question, closed until the visitor opens it
#[component]
pub fn FaqItem(
    question: &'static str,
    #[prop(into)] answer: String,
) -> impl IntoView {
    view! {
        <details class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm">
            <summary class="cursor-pointer font-semibold">{question}</summary>
            <p class="mt-2 text-slate-600 text-sm">{answer}</p>
        </details>
    }
}

/// One figure of the calculator, recomputed whenever the spend changes
#[component]
pub fn ResultCard(
    label: &'static str,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-slate-200 p-4">
            <p class="text-slate-500">{label}</p>
            <p class="text-xl font-bold">{move || value.get()}</p>
        </div>
    }
}
