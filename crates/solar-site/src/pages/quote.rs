//! Savings calculator and lead form
//!
//! Both halves share one spend signal: moving the slider updates the
//! form's spend field and vice versa. The estimate is a memo over that
//! signal, so every figure on screen and the submitted lead always agree.

use leptos::*;
use solar_core::{
    parse_spend, quick_quote_message, CannedMessage, EstimatorOutput, FormPhase, LeadContact,
    LeadSubmission, PropertyType, ACKNOWLEDGMENT, DEFAULT_MONTHLY_SPEND, FIELD_MIN_SPEND, SLIDER_RANGE,
};

use crate::components::ResultCard;
use crate::site::Site;

const INPUT_CLASS: &str =
    "mt-1 w-full rounded-xl border border-slate-300 px-3 py-2 outline-none focus:ring-2 focus:ring-emerald-500";

#[component]
pub fn QuoteSection() -> impl IntoView {
    let site = expect_context::<Site>();
    let constants = site.constants;

    let spend = create_rw_signal(DEFAULT_MONTHLY_SPEND);
    let estimate = create_memo(move |_| constants.estimate(f64::from(spend.get())));

    view! {
        <section id="calculadora" class="mx-auto max-w-6xl px-4 py-16">
            <div class="grid lg:grid-cols-2 gap-10 items-start">
                <SavingsCalculator spend=spend estimate=estimate/>
                <LeadForm spend=spend estimate=estimate/>
            </div>
        </section>
    }
}

#[component]
fn SavingsCalculator(spend: RwSignal<u32>, estimate: Memo<EstimatorOutput>) -> impl IntoView {
    let site = expect_context::<Site>();
    let handoff = site.handoff.clone();
    let quote_link = move || handoff.whatsapp_link(&quick_quote_message(spend.get(), &estimate.get()));

    let size = Signal::derive(move || format!("{} kWp", estimate.get().system_size_kwp));
    let savings = Signal::derive(move || format!("${}", estimate.get().monthly_savings));
    let cost = Signal::derive(move || format!("${}", estimate.get().estimated_cost));
    let payback = Signal::derive(move || format!("{} meses", estimate.get().payback_months));

    view! {
        <div>
            <h2 class="text-2xl md:text-3xl font-bold">"Calcula tu ahorro"</h2>
            <p class="mt-2 text-slate-600">
                "Ingresa tu gasto mensual de luz para estimar tamaño de sistema y tiempo de recuperación."
            </p>
            <div class="mt-6 rounded-2xl border border-slate-200 bg-white p-6 shadow-sm">
                <label class="text-sm text-slate-600">"Gasto mensual (MXN)"</label>
                <input
                    type="range"
                    min=SLIDER_RANGE.min
                    max=SLIDER_RANGE.max
                    step=SLIDER_RANGE.step
                    class="w-full"
                    prop:value=move || spend.get().to_string()
                    on:input=move |ev| spend.set(SLIDER_RANGE.snap(parse_spend(&event_target_value(&ev))))
                />
                <div class="mt-2 text-lg font-semibold">{move || format!("${} MXN/mes", spend.get())}</div>

                <div class="mt-6 grid grid-cols-2 gap-4 text-sm">
                    <ResultCard label="Tamaño estimado" value=size/>
                    <ResultCard label="Ahorro mensual" value=savings/>
                    <ResultCard label="Costo estimado" value=cost/>
                    <ResultCard label="Payback" value=payback/>
                </div>

                <a
                    href=quote_link
                    class="mt-6 inline-flex rounded-xl px-5 py-3 bg-emerald-600 text-white font-semibold shadow hover:bg-emerald-700"
                >
                    "Quiero una cotización por WhatsApp"
                </a>
            </div>
        </div>
    }
}

#[component]
fn LeadForm(spend: RwSignal<u32>, estimate: Memo<EstimatorOutput>) -> impl IntoView {
    let site = expect_context::<Site>();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (neighborhood, set_neighborhood) = create_signal(String::new());
    let (property_type, set_property_type) = create_signal(PropertyType::default());
    let (phase, set_phase) = create_signal(FormPhase::default());

    let handoff = site.handoff.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut next = phase.get_untracked();
        if !next.submit() {
            return;
        }
        set_phase.set(next);

        let contact = LeadContact {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            neighborhood: neighborhood.get_untracked(),
            property_type: property_type.get_untracked(),
        };
        let submission = LeadSubmission::capture(contact, spend.get_untracked(), estimate.get_untracked(), &handoff);

        // Fire and forget: whatever WhatsApp does next is out of our hands.
        if let Err(err) = window().location().set_href(&submission.whatsapp_link) {
            tracing::warn!("WhatsApp hand-off failed: {:?}", err);
        }
    };

    let privacy_url = site.config.privacy_policy_url.clone();
    let mailto = site.handoff.mailto_link().to_string();
    let whatsapp = site.whatsapp(CannedMessage::ServicesInfo.text());

    view! {
        <div id="contacto" class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm">
            <h3 class="text-xl font-bold">"Recibe tu propuesta hoy"</h3>
            <p class="text-slate-600 text-sm mt-1">"Completa tus datos y te contactamos en menos de 24h."</p>

            <Show
                when=move || !phase.get().is_submitted()
                fallback=move || view! {
                    <div class="text-center py-12">
                        <div class="text-5xl mb-4">"✓"</div>
                        <p class="text-slate-700">{ACKNOWLEDGMENT}</p>
                    </div>
                }
            >
                <form on:submit=on_submit.clone() class="mt-4 space-y-4">
                    <div class="grid md:grid-cols-2 gap-4">
                        <div>
                            <label class="text-sm text-slate-600">"Nombre"</label>
                            <input
                                required
                                class=INPUT_CLASS
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                            />
                        </div>
                        <div>
                            <label class="text-sm text-slate-600">"Email"</label>
                            <input
                                type="email"
                                required
                                class=INPUT_CLASS
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                            />
                        </div>
                        <div>
                            <label class="text-sm text-slate-600">"Teléfono"</label>
                            <input
                                type="tel"
                                required
                                class=INPUT_CLASS
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                prop:value=phone
                            />
                        </div>
                        <div>
                            <label class="text-sm text-slate-600">"Colonia"</label>
                            <input
                                class=INPUT_CLASS
                                on:input=move |ev| set_neighborhood.set(event_target_value(&ev))
                                prop:value=neighborhood
                            />
                        </div>
                    </div>

                    <div class="grid md:grid-cols-2 gap-4 items-end">
                        <div>
                            <label class="text-sm text-slate-600">"Tipo de inmueble"</label>
                            <select
                                class=INPUT_CLASS
                                on:change=move |ev| set_property_type.set(PropertyType::from_label(&event_target_value(&ev)))
                            >
                                {PropertyType::ALL.into_iter().map(|kind| view! {
                                    <option value=kind.as_str() selected=move || property_type.get() == kind>
                                        {kind.as_str()}
                                    </option>
                                }).collect::<Vec<_>>()}
                            </select>
                        </div>
                        <div>
                            <label class="text-sm text-slate-600">"Gasto de luz (MXN/mes)"</label>
                            <input
                                type="number"
                                min=FIELD_MIN_SPEND
                                step=SLIDER_RANGE.step
                                class=INPUT_CLASS
                                on:input=move |ev| spend.set(parse_spend(&event_target_value(&ev)))
                                prop:value=move || spend.get().to_string()
                            />
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="w-full rounded-xl px-5 py-3 bg-emerald-600 text-white font-semibold shadow hover:bg-emerald-700"
                    >
                        "Solicitar cotización"
                    </button>

                    <div class="text-xs text-slate-500">
                        "Al enviar aceptas nuestro "
                        <a class="underline" href=privacy_url.clone() target="_blank" rel="noreferrer">
                            "Aviso de Privacidad"
                        </a>
                        "."
                    </div>
                </form>
            </Show>

            <div class="mt-6 grid md:grid-cols-2 gap-3">
                <a href=mailto class="text-sm underline">{site.config.email.clone()}</a>
                <a href=whatsapp class="text-sm underline">"WhatsApp "{site.config.phone_display.clone()}</a>
            </div>
        </div>
    }
}
