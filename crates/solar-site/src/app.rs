//! Main application component

use leptos::*;
use leptos_meta::{provide_meta_context, Html, Meta, Script, Title};
use leptos_router::*;

use crate::components::*;
use crate::pages::*;
use crate::site::Site;

/// Expects a [`Site`] in context; the server and the hydrate entry both
/// provide it before rendering.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let site = expect_context::<Site>();
    let description = format!(
        "Paneles solares y calentadores solares en {}. Cotización gratuita.",
        site.config.coverage
    );

    view! {
        <Html lang="es"/>
        <Title text=site.config.business_name.clone()/>
        <Meta name="description" content=description/>
        <Script src="https://cdn.tailwindcss.com"/>
        <Router>
            <div class="min-h-screen bg-gradient-to-b from-slate-50 to-white text-slate-800">
                <SiteNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
