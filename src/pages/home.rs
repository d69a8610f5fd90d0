use leptos::prelude::*;

use crate::core::agent::{PanelbeatingAgent, ResponseGenerator};
use crate::core::config::SiteConfig;
use crate::core::services::ScriptAgent;
use crate::features::chat::ChatPanel;

#[component]
pub fn Home() -> impl IntoView {
    let site = use_context::<SiteConfig>().unwrap_or_default();

    let builtin = PanelbeatingAgent::new(site.clone());
    let primary: Box<dyn ResponseGenerator> = match ScriptAgent::detect(builtin.clone()) {
        Some(script) => Box::new(script),
        None => Box::new(builtin.clone()),
    };

    let trust_points = site
        .trust_points
        .iter()
        .map(|point| view! { <li>{point.clone()}</li> })
        .collect::<Vec<_>>();

    view! {
        <div class="home">
            <header class="site-header">
                <div class="site-intro">
                    <div class="badge">{format!("Trusted Since {}", site.established)}</div>
                    <h1>{format!("{} Digital Concierge", site.business_name)}</h1>
                    <p class="lead">
                        {format!(
                            "Professional collision repair, spray painting, dent removal, chassis straightening, rust treatment, and insurance support in the {}. Chat with our assistant for quotes, updates, or advice.",
                            site.region
                        )}
                    </p>
                    <div class="contact-strip">
                        <div><span class="contact-label">"Workshop"</span>{site.address.clone()}</div>
                        <div><span class="contact-label">"Phone"</span>{site.phone.clone()}</div>
                        <div><span class="contact-label">"Email"</span>{site.email.clone()}</div>
                    </div>
                </div>
                <div class="site-hours">
                    <div class="hours-card">
                        <p class="hours-title">"Operating hours"</p>
                        <p>{format!("Mon - Fri: {}", site.weekday_hours)}</p>
                        <p>"Sat: By appointment"</p>
                        <p>"Sun & Public Holidays: Closed"</p>
                    </div>
                    <div class="badge">"English & Afrikaans"</div>
                </div>
            </header>

            <section class="site-body">
                <ChatPanel primary=primary fallback=builtin />

                <aside class="site-aside">
                    <div class="aside-card">
                        <h2>{format!("Why drivers trust {}", site.business_name.split_whitespace().take(2).collect::<Vec<_>>().join(" "))}</h2>
                        <ul>{trust_points}</ul>
                    </div>
                    <div class="aside-card accent">
                        <h3>"Need help fast?"</h3>
                        <p>
                            {format!(
                                "Call {} for emergency towing or after-hours assistance. Leave a voicemail and we will return your call first thing in the morning.",
                                site.phone
                            )}
                        </p>
                        <div class="claims-note">
                            <p class="claims-title">"Insurance claims"</p>
                            <p>
                                "Send your claim number to "
                                <span class="claims-email">{site.claims_email.clone()}</span>
                                " and our admin team will coordinate directly with assessors."
                            </p>
                        </div>
                    </div>
                </aside>
            </section>
        </div>
    }
}
