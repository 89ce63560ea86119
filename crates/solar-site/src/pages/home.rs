//! Home page

use leptos::*;
use solar_core::CannedMessage;

use crate::components::*;
use crate::pages::QuoteSection;
use crate::site::Site;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <HeroSection/>
            <ServicesSection/>
            <BenefitsSection/>
            <QuoteSection/>
            <TestimonialsSection/>
            <ProcessSection/>
            <FaqSection/>
            <FinalCtaSection/>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let site = expect_context::<Site>();

    view! {
        <section class="relative overflow-hidden">
            <div class="mx-auto max-w-6xl px-4 py-16 md:py-24 grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <h1 class="text-3xl md:text-5xl font-extrabold leading-tight">
                        "Ahorra hasta "<span class="text-emerald-600">"95%"</span>" en tu recibo de luz"
                    </h1>
                    <p class="mt-4 text-lg text-slate-600">
                        "Instalamos "<strong>"paneles solares"</strong>" y "<strong>"calentadores solares"</strong>
                        " en "{site.config.coverage.clone()}". Cotización gratuita y profesional."
                    </p>
                    <div class="mt-6 flex flex-wrap gap-3">
                        <a href="#contacto" class="rounded-xl px-5 py-3 bg-emerald-600 text-white font-semibold shadow hover:bg-emerald-700">
                            "Solicitar cotización"
                        </a>
                        <a href="#calculadora" class="rounded-xl px-5 py-3 bg-white border border-slate-300 font-semibold hover:bg-slate-50">
                            "Estimar ahorro"
                        </a>
                    </div>
                    <div class="mt-6 flex flex-wrap items-center gap-6 text-sm text-slate-600">
                        <span>"✅ Garantía hasta 25 años"</span>
                        <span>"✅ Instalación certificada"</span>
                        <span>"✅ Financiamiento"</span>
                    </div>
                </div>
                <div class="relative">
                    <div class="aspect-[4/3] w-full rounded-2xl bg-[url('https://images.unsplash.com/photo-1509395176047-4a66953fd231?q=80&w=1200&auto=format&fit=crop')] bg-cover bg-center shadow-xl ring-1 ring-slate-200"></div>
                    <div class="absolute -bottom-6 -right-6 bg-white rounded-xl shadow-lg p-4 border border-slate-200">
                        <p class="text-sm text-slate-500">"Clientes satisfechos"</p>
                        <p class="text-2xl font-bold">"+350"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id="servicios" class="mx-auto max-w-6xl px-4 py-16">
            <h2 class="text-2xl md:text-3xl font-bold">"Servicios"</h2>
            <div class="mt-8 grid md:grid-cols-3 gap-6">
                <ServiceCard
                    title="Paneles Solares (FV)"
                    description="Sistemas fotovoltaicos residenciales y comerciales a la medida."
                    bullets=vec!["Levantamiento y diseño", "Instalación en 1–3 días", "Monitoreo y garantía"]
                />
                <ServiceCard
                    title="Calentadores Solares"
                    description="Ahorra gas con termosifón o presurizado según tus hábitos."
                    bullets=vec!["Cálculo de capacidad", "Instalación segura", "Mantenimiento y refacciones"]
                />
                <ServiceCard
                    title="Mantenimiento"
                    description="Limpieza, revisión eléctrica/hidráulica, cambio de componentes."
                    bullets=vec!["Limpieza profesional", "Pruebas eléctricas", "Garantía de servicio"]
                />
            </div>
        </section>
    }
}

#[component]
fn BenefitsSection() -> impl IntoView {
    view! {
        <section id="beneficios" class="bg-slate-50 border-y border-slate-200">
            <div class="mx-auto max-w-6xl px-4 py-16">
                <h2 class="text-2xl md:text-3xl font-bold">"Beneficios"</h2>
                <div class="mt-8 grid md:grid-cols-4 gap-6">
                    <BenefitCard
                        icon="💸"
                        title="Ahorro en tu recibo"
                        description="Reduce hasta 95% tu pago de luz dependiendo de tu consumo y techo disponible."
                    />
                    <BenefitCard
                        icon="🛡️"
                        title="Garantía larga"
                        description="Paneles con garantía de potencia hasta 25 años y equipos certificados."
                    />
                    <BenefitCard
                        icon="🛠️"
                        title="Instalación profesional"
                        description="Equipo técnico con experiencia residencial y comercial."
                    />
                    <BenefitCard
                        icon="🏦"
                        title="Financiamiento"
                        description="Opciones para pagar a plazos y deducibilidad para empresas."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonios" class="bg-slate-50 border-t border-slate-200">
            <div class="mx-auto max-w-6xl px-4 py-16">
                <h2 class="text-2xl md:text-3xl font-bold">"Testimonios"</h2>
                <div class="mt-8 grid md:grid-cols-3 gap-6">
                    <TestimonialCard
                        quote="Bajó nuestro recibo de $2,400 a menos de $200. Instalación impecable."
                        author="María G."
                        role="Casa en Zapopan"
                    />
                    <TestimonialCard
                        quote="La inversión se paga sola. Excelente seguimiento y monitoreo."
                        author="Taller López"
                        role="Comercio en GDL"
                    />
                    <TestimonialCard
                        quote="Agua caliente constante y ahorro importante en gas."
                        author="Hotel Centro"
                        role="Calentadores"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProcessSection() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-6xl px-4 py-16">
            <h2 class="text-2xl md:text-3xl font-bold">"¿Cómo trabajamos?"</h2>
            <ol class="mt-8 grid md:grid-cols-4 gap-6">
                <StepCard number="1" title="Diagnóstico" description="Levantamiento y consumo actual."/>
                <StepCard number="2" title="Diseño" description="Propuesta técnica/económica a medida."/>
                <StepCard number="3" title="Instalación" description="1–3 días con pruebas y puesta en marcha."/>
                <StepCard number="4" title="Monitoreo" description="Seguimiento y garantía de desempeño."/>
            </ol>
        </section>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    let site = expect_context::<Site>();

    view! {
        <section class="bg-slate-50 border-y border-slate-200">
            <div class="mx-auto max-w-6xl px-4 py-16">
                <h2 class="text-2xl md:text-3xl font-bold">"Preguntas frecuentes"</h2>
                <div class="mt-8 grid md:grid-cols-2 gap-6">
                    <FaqItem
                        question="¿En cuánto tiempo recupero la inversión?"
                        answer="Usualmente entre 2 y 5 años según tu consumo y tarifa. La calculadora te da una referencia rápida."
                    />
                    <FaqItem
                        question="¿Trabajan en toda el área metropolitana?"
                        answer=format!("Sí, cubrimos {}.", site.config.coverage)
                    />
                    <FaqItem
                        question="¿Puedo deducir impuestos?"
                        answer="Personas morales pueden deducir y mejorar flujo; te orientamos con tu contador."
                    />
                    <FaqItem
                        question="¿Ofrecen garantía?"
                        answer="Sí: garantía de instalación y fabricantes (módulos hasta 25 años de potencia)."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FinalCtaSection() -> impl IntoView {
    let site = expect_context::<Site>();

    view! {
        <section class="mx-auto max-w-6xl px-4 py-16">
            <div class="rounded-2xl bg-emerald-600 text-white p-8 md:p-12 flex flex-col md:flex-row items-start md:items-center justify-between gap-6">
                <div>
                    <h2 class="text-2xl md:text-3xl font-bold">"¿Listo para empezar a ahorrar?"</h2>
                    <p class="text-emerald-50 mt-2">"Agenda tu diagnóstico sin costo hoy mismo."</p>
                </div>
                <div class="flex gap-3">
                    <a href="#contacto" class="rounded-xl px-5 py-3 bg-white text-emerald-700 font-semibold shadow">
                        "Solicitar cotización"
                    </a>
                    <a
                        href=site.whatsapp(CannedMessage::Diagnosis.text())
                        class="rounded-xl px-5 py-3 bg-emerald-700 text-white font-semibold shadow hover:bg-emerald-800"
                    >
                        "WhatsApp"
                    </a>
                </div>
            </div>
        </section>
    }
}
