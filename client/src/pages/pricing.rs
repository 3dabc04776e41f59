//! Public pricing page.

use leptos::prelude::*;
use leptos_meta::Title;

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Single Session",
        price: "5,000",
        period: "One-time payment",
        description: "Perfect for trying out our platform",
        features: &[
            "1 therapy session (60 minutes)",
            "Choose your therapist",
            "Text, voice, or video",
            "Session notes & resources",
            "Basic support",
        ],
        popular: false,
    },
    Plan {
        name: "Starter Pack",
        price: "13,500",
        period: "Save ₦1,500",
        description: "Most popular choice for new users",
        features: &[
            "3 therapy sessions (60 minutes each)",
            "Choose your therapist",
            "Text, voice, or video",
            "Session notes & resources",
            "Progress tracking",
            "Priority support",
            "Mood tracking tools",
        ],
        popular: true,
    },
    Plan {
        name: "Monthly Plan",
        price: "32,000",
        period: "per month",
        description: "Unlimited access for ongoing support",
        features: &[
            "Unlimited therapy sessions",
            "Choose your therapist",
            "Text, voice, or video",
            "Session notes & resources",
            "Progress tracking",
            "Priority support",
            "Mood tracking & insights",
            "24/7 crisis support",
            "Group therapy sessions",
        ],
        popular: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <Title text="Pricing - MentWel"/>
        <section class="pricing">
            <h1>"Simple, Transparent Pricing"</h1>
            <p class="pricing__lead">"Choose the plan that fits your journey. No hidden fees."</p>
            <div class="pricing__grid">
                {PLANS
                    .iter()
                    .map(|plan| {
                        view! {
                            <article class="plan" class:plan--popular=plan.popular>
                                {plan.popular.then(|| view! { <span class="plan__badge">"Most Popular"</span> })}
                                <h3>{plan.name}</h3>
                                <p class="plan__description">{plan.description}</p>
                                <p class="plan__price">"₦" {plan.price}</p>
                                <p class="plan__period">{plan.period}</p>
                                <ul class="plan__features">
                                    {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect::<Vec<_>>()}
                                </ul>
                                <a href="/register" class="btn btn--primary">"Get Started"</a>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
