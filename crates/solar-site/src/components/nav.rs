//! Site navigation component

use leptos::*;
use solar_core::CannedMessage;

use crate::site::Site;

const SECTIONS: [(&str, &str); 5] = [
    ("#servicios", "Servicios"),
    ("#beneficios", "Beneficios"),
    ("#calculadora", "Calculadora"),
    ("#testimonios", "Testimonios"),
    ("#contacto", "Contacto"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    let site = expect_context::<Site>();
    let whatsapp = site.whatsapp(CannedMessage::Quote.text());
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-white/70 border-b border-slate-200">
            <div class="mx-auto max-w-6xl px-4">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <a href="#" class="flex items-center gap-2">
                        <span class="text-2xl">"☀️"</span>
                        <span class="font-semibold">{site.config.business_name.clone()}</span>
                    </a>

                    // Desktop Nav
                    <nav class="hidden md:flex gap-6 text-sm">
                        {SECTIONS.into_iter().map(|(href, label)| view! {
                            <a href=href class="hover:text-slate-900">{label}</a>
                        }).collect::<Vec<_>>()}
                    </nav>

                    <div class="flex items-center gap-2">
                        <a
                            href=whatsapp
                            class="rounded-xl px-4 py-2 bg-emerald-600 text-white text-sm font-medium shadow hover:bg-emerald-700"
                        >
                            "WhatsApp"
                        </a>
                        // Mobile menu button
                        <button
                            class="md:hidden p-2 rounded-md text-slate-600 hover:text-slate-900 hover:bg-slate-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <nav class="md:hidden border-t border-slate-200 px-4 py-4 space-y-3 text-sm">
                    {SECTIONS.into_iter().map(|(href, label)| view! {
                        <a
                            href=href
                            class="block text-slate-600 hover:text-slate-900"
                            on:click=move |_| set_mobile_open.set(false)
                        >
                            {label}
                        </a>
                    }).collect::<Vec<_>>()}
                </nav>
            </Show>
        </header>
    }
}
