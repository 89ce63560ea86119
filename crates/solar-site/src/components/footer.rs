//! Site footer component

use chrono::{Datelike, Utc};
use leptos::*;
use solar_core::CannedMessage;

use crate::site::Site;

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<Site>();
    let config = site.config.clone();
    let year = Utc::now().year();

    view! {
        <footer class="border-t border-slate-200">
            <div class="mx-auto max-w-6xl px-4 py-10 grid md:grid-cols-3 gap-6 text-sm text-slate-600">
                <div>
                    <div class="font-semibold">{config.business_name.clone()}</div>
                    <div class="mt-2">{config.coverage.clone()}</div>
                </div>
                <div>
                    <div class="font-semibold">"Contacto"</div>
                    <div class="mt-2 space-y-1">
                        <a href=site.handoff.mailto_link().to_string() class="underline">{config.email.clone()}</a>
                        <div>"Tel: "{config.phone_display.clone()}</div>
                        <a class="underline" href=site.whatsapp(CannedMessage::GeneralInfo.text())>"WhatsApp"</a>
                    </div>
                </div>
                <div>
                    <div class="font-semibold">"Legal"</div>
                    <div class="mt-2 space-y-1">
                        <a class="underline" href=config.privacy_policy_url.clone() target="_blank" rel="noreferrer">
                            "Aviso de Privacidad"
                        </a>
                        <div class="text-xs">"© "{year}" "{config.business_name.clone()}</div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
