//! Landing Page Sections

use leptos::prelude::*;

use crate::api::{self, Suggestion};

/// Hero section with the SEO analyze form.
///
/// Exactly one of loading / error / result renders at a time, driven by the
/// generator call's outcome.
#[component]
pub fn HeroSection() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (result, set_result) = signal(None::<Suggestion>);

    let analyze = move || {
        let content = query.get();
        if content.trim().is_empty() || loading.get() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        set_result.set(None);

        leptos::task::spawn_local(async move {
            match api::request_suggestions(content.trim()).await {
                Ok(suggestion) => set_result.set(Some(suggestion)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    view! {
        <header class="hero">
            <h1>
                "The " <span class="accent">"AI"</span> " platform for enterprise use cases"
            </h1>
            <p class="tagline">
                "TrueViral's AI platform provides powerful models for natural language \
                 processing, image recognition, and predictive analytics. Over 200,000+ \
                 developers use TrueViral to build innovative AI applications."
            </p>
            <div class="cta">
                <a href="#try-free" class="btn btn-primary">"Try It Free"</a>
                <a href="#features" class="btn">"Learn More"</a>
            </div>

            <div class="seo-form" id="try-free">
                <input
                    type="text"
                    placeholder="Paste your content to get SEO suggestions..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            analyze();
                        }
                    }
                />
                <button
                    class="btn btn-primary"
                    on:click=move |_| analyze()
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Analyzing..." } else { "Analyze" }}
                </button>
            </div>

            <Show when=move || loading.get()>
                <p class="seo-loading">"Generating SEO suggestions..."</p>
            </Show>

            {move || {
                error.get().map(|message| view! { <p class="seo-error">{message}</p> })
            }}

            {move || {
                result.get().map(|suggestion| view! { <SuggestionCard suggestion=suggestion /> })
            }}
        </header>
    }
}

/// Rendered SEO suggestion
#[component]
pub fn SuggestionCard(suggestion: Suggestion) -> impl IntoView {
    view! {
        <div class="seo-result">
            <h3>{suggestion.title.clone()}</h3>
            <p>{suggestion.description.clone()}</p>
            <ul class="keywords">
                {suggestion
                    .keywords
                    .iter()
                    .map(|k| view! { <li class="keyword">{k.clone()}</li> })
                    .collect_view()}
            </ul>
            <ul class="improvements">
                {suggestion
                    .improvements
                    .iter()
                    .map(|i| view! { <li>{i.clone()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Static six-item feature grid
#[component]
pub fn FeatureHighlights() -> impl IntoView {
    let features = vec![
        (
            "Conversational AI",
            "Advanced natural language processing for human-like conversations with \
             context awareness and personalization capabilities.",
        ),
        (
            "Predictive Analytics",
            "Powerful algorithms that analyze patterns in your data to forecast trends \
             and provide actionable insights.",
        ),
        (
            "Secure Deployment",
            "Enterprise-grade security with end-to-end encryption and compliance with \
             industry standards for safe AI implementation.",
        ),
        (
            "Real-time Processing",
            "Ultra-fast response times for immediate insights and actions, even with \
             large data volumes or complex requests.",
        ),
        (
            "Advanced Analytics",
            "Deep learning models that uncover hidden patterns and correlations in your \
             data for competitive advantage.",
        ),
        (
            "Simple Integration",
            "Comprehensive APIs and SDKs for easy integration with your existing systems \
             and workflows in minutes.",
        ),
    ];

    view! {
        <section class="features" id="features">
            <h2>"AI Foundations"</h2>
            <p class="subtitle">
                "Powerful AI building blocks designed for seamless integration and \
                 exceptional performance"
            </p>
            <div class="feature-grid">
                {features
                    .into_iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="feature">
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Static trusted-logos strip
#[component]
pub fn TrustedCompanies() -> impl IntoView {
    let companies = vec![
        ("Revenue", "https://revenue.com"),
        ("NASA", "https://www.nasa.gov"),
        ("Twilio", "https://www.twilio.com"),
        ("Citi", "https://www.citi.com"),
        ("Vonage", "https://www.vonage.com"),
        ("Khoros", "https://www.khoros.com"),
    ];

    view! {
        <section class="trusted">
            <p class="trusted-label">"TRUSTED BY THE WORLD'S TOP ENTERPRISES AND STARTUPS"</p>
            <div class="trusted-logos">
                {companies
                    .into_iter()
                    .map(|(name, url)| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="logo">
                                {name}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
