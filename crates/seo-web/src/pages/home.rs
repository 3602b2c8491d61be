//! Home Page

use leptos::prelude::*;

use crate::components::{FeatureHighlights, HeroSection, TrustedCompanies};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <HeroSection />
            <TrustedCompanies />
            <FeatureHighlights />
        </div>
    }
}
