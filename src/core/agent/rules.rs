use crate::core::config::SiteConfig;
use crate::core::models::{AgentContext, EstimateDetails, Flow, Locale};

use super::{copy, AgentError, AgentResponse, ResponseGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    SwitchLocale(Locale),
    Estimate,
    Status,
    Insurance,
    Towing,
    Maintenance,
    Hours,
    Contact,
    Thanks,
    Greeting,
    Unknown,
}

struct Keywords {
    intent: Intent,
    en: &'static [&'static str],
    af: &'static [&'static str],
}

// Checked in order; the first table with a hit wins.
const KEYWORDS: &[Keywords] = &[
    Keywords {
        intent: Intent::SwitchLocale(Locale::Af),
        en: &["in afrikaans", "speak afrikaans"],
        af: &["afrikaans", "praat afrikaans"],
    },
    Keywords {
        intent: Intent::SwitchLocale(Locale::En),
        en: &["english", "speak english", "in english"],
        af: &["engels"],
    },
    Keywords {
        intent: Intent::Estimate,
        en: &["estimate", "quote", "quotation", "price", "cost", "how much"],
        af: &["kwotasie", "skatting", "prys", "koste", "hoeveel"],
    },
    Keywords {
        intent: Intent::Status,
        en: &["status", "update", "progress", "job card", "ready", "done yet"],
        af: &["werkkaart", "vordering", "gereed", "klaar"],
    },
    Keywords {
        intent: Intent::Insurance,
        en: &["insurance", "insurer", "claim", "claims", "assessor"],
        af: &["versekering", "versekeraar", "eis", "eise"],
    },
    Keywords {
        intent: Intent::Towing,
        en: &["tow", "towing", "emergency", "breakdown", "after hours"],
        af: &["insleep", "sleepwa", "nood", "na ure"],
    },
    Keywords {
        intent: Intent::Maintenance,
        en: &["maintenance", "tips", "tip", "advice", "rust", "polish", "wax"],
        af: &["onderhoud", "wenke", "raad", "roes", "waks"],
    },
    Keywords {
        intent: Intent::Hours,
        en: &["hours", "open", "opening", "closed", "saturday", "sunday", "weekend"],
        af: &["ure", "oop", "gesluit", "saterdag", "sondag", "naweek"],
    },
    Keywords {
        intent: Intent::Contact,
        en: &["contact", "phone", "call", "email", "address", "where", "location", "directions"],
        af: &["kontak", "bel", "foon", "e pos", "adres", "waar"],
    },
    Keywords {
        intent: Intent::Thanks,
        en: &["thanks", "thank you", "cheers"],
        af: &["dankie", "baie dankie"],
    },
    Keywords {
        intent: Intent::Greeting,
        en: &["hi", "hello", "hey", "good morning", "good afternoon", "good day"],
        af: &["hallo", "haai", "goeie more", "goeiemore", "goeie middag"],
    },
];

/// Lower-cases and strips punctuation, padding with spaces so phrases can be
/// matched on word boundaries.
fn normalize(input: &str) -> String {
    let cleaned: String = input
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    format!(" {} ", cleaned.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn mentions(normalized: &str, phrase: &str) -> bool {
    normalized.contains(&format!(" {} ", phrase))
}

/// Detects the intent and, when only Afrikaans vocabulary matched, the
/// locale the user is writing in.
fn detect(input: &str) -> (Intent, Option<Locale>) {
    let normalized = normalize(input);
    for table in KEYWORDS {
        let en_hit = table.en.iter().any(|phrase| mentions(&normalized, phrase));
        let af_hit = table.af.iter().any(|phrase| mentions(&normalized, phrase));
        if en_hit || af_hit {
            let hint = (af_hit && !en_hit).then_some(Locale::Af);
            return (table.intent, hint);
        }
    }
    (Intent::Unknown, None)
}

fn has_identifier(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_digit())
}

/// Keyword-driven assistant for the workshop's chat widget.
#[derive(Debug, Clone, Default)]
pub struct PanelbeatingAgent {
    site: SiteConfig,
}

impl PanelbeatingAgent {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    fn answer(&self, intent: Intent, context: AgentContext) -> AgentResponse {
        let locale = context.locale;
        let menu = copy::menu(locale);

        match intent {
            Intent::SwitchLocale(_) => AgentResponse::new(context)
                .reply(copy::locale_switched(locale))
                .quick_replies(menu),
            Intent::Estimate => {
                let mut response = AgentResponse::new(context.with_flow(Flow::Estimate)).estimate_form();
                response.replies = copy::estimate_intro(locale);
                response
            }
            Intent::Status => AgentResponse::new(context.with_flow(Flow::Update))
                .reply(copy::update_intro(locale))
                .update_form(),
            Intent::Insurance => {
                let mut response = AgentResponse::new(context.with_flow(Flow::Idle));
                response.replies = copy::insurance(&self.site, locale);
                response.quick_replies(vec![menu[0].clone(), menu[1].clone()])
            }
            Intent::Towing => AgentResponse::new(context.with_flow(Flow::Idle))
                .reply(copy::towing(&self.site, locale))
                .quick_replies(menu),
            Intent::Maintenance => {
                let mut response = AgentResponse::new(context.with_flow(Flow::Idle));
                response.replies = copy::maintenance_tips(locale);
                response.quick_replies(menu)
            }
            Intent::Hours => AgentResponse::new(context)
                .reply(copy::hours(&self.site, locale))
                .quick_replies(menu),
            Intent::Contact => AgentResponse::new(context)
                .reply(copy::contact(&self.site, locale))
                .quick_replies(menu),
            Intent::Thanks => AgentResponse::new(context.with_flow(Flow::Idle))
                .reply(copy::thanks(locale))
                .quick_replies(menu),
            Intent::Greeting => AgentResponse::new(context)
                .reply(copy::greeting(locale))
                .quick_replies(menu),
            Intent::Unknown => AgentResponse::new(context)
                .reply(copy::fallback(locale))
                .quick_replies(menu),
        }
    }
}

impl ResponseGenerator for PanelbeatingAgent {
    fn welcome_messages(&self, locale: Locale) -> Vec<String> {
        copy::welcome(&self.site, locale)
    }

    fn starter_quick_replies(&self, locale: Locale) -> Vec<String> {
        copy::menu(locale)
    }

    fn respond(&self, input: &str, context: &AgentContext) -> Result<AgentResponse, AgentError> {
        let (intent, hint) = detect(input);
        let mut next = context.clone();
        match intent {
            Intent::SwitchLocale(locale) => next.locale = locale,
            _ => {
                if let Some(locale) = hint {
                    next.locale = locale;
                }
            }
        }
        let locale = next.locale;

        // An open flow absorbs input that matches no other intent.
        let response = match (context.flow, intent) {
            (Flow::Update, Intent::Unknown) if has_identifier(input) => {
                AgentResponse::new(next.with_flow(Flow::Idle))
                    .reply(self.summarize_update_request(input, locale))
                    .quick_replies(copy::menu(locale))
            }
            (Flow::Update, Intent::Unknown) => AgentResponse::new(next)
                .reply(copy::update_reminder(locale))
                .update_form(),
            (Flow::Estimate, Intent::Unknown) => AgentResponse::new(next)
                .reply(copy::estimate_reminder(locale))
                .estimate_form(),
            _ => self.answer(intent, next),
        };

        Ok(response)
    }

    fn summarize_estimate(&self, details: &EstimateDetails, locale: Locale) -> String {
        copy::estimate_summary(&self.site, details, locale)
    }

    fn summarize_update_request(&self, identifier: &str, locale: Locale) -> String {
        copy::update_summary(&self.site, identifier, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> PanelbeatingAgent {
        PanelbeatingAgent::default()
    }

    fn respond(input: &str, context: &AgentContext) -> AgentResponse {
        agent().respond(input, context).unwrap()
    }

    #[test]
    fn quick_reply_labels_route_to_their_flows() {
        let idle = AgentContext::default();

        let estimate = respond("Request an estimate", &idle);
        assert_eq!(estimate.context.flow, Flow::Estimate);
        assert!(estimate.trigger_estimate_form);
        assert!(!estimate.trigger_update_form);

        let status = respond("Check repair status", &idle);
        assert_eq!(status.context.flow, Flow::Update);
        assert!(status.trigger_update_form);

        let tips = respond("Maintenance tips", &idle);
        assert_eq!(tips.context.flow, Flow::Idle);
        assert_eq!(tips.replies.len(), 2);

        let claims = respond("Insurance claims support", &idle);
        assert!(claims.replies[1].contains("claims@dejonghs-panel.co.za"));
    }

    #[test]
    fn afrikaans_menu_labels_route_the_same_way() {
        let af = AgentContext::default().with_locale(Locale::Af);
        for (label, flow) in copy::menu(Locale::Af)
            .into_iter()
            .zip([Flow::Estimate, Flow::Update, Flow::Idle, Flow::Idle])
        {
            let response = respond(&label, &af);
            assert_eq!(response.context.flow, flow, "label {label}");
            assert_eq!(response.context.locale, Locale::Af);
        }
    }

    #[test]
    fn afrikaans_vocabulary_switches_locale() {
        let response = respond("Goeie more, ek soek 'n kwotasie", &AgentContext::default());
        assert_eq!(response.context.locale, Locale::Af);
        assert_eq!(response.context.flow, Flow::Estimate);
        assert!(response.replies[0].starts_with("Ek help graag"));
    }

    #[test]
    fn explicit_locale_requests_are_honoured() {
        let af = respond("Praat Afrikaans asseblief", &AgentContext::default());
        assert_eq!(af.context.locale, Locale::Af);

        let en = respond("English please", &af.context);
        assert_eq!(en.context.locale, Locale::En);
        assert_eq!(en.replies, vec![copy::locale_switched(Locale::En)]);
    }

    #[test]
    fn job_card_number_closes_the_update_flow() {
        let context = AgentContext::default().with_flow(Flow::Update);
        let response = respond("JC 48213", &context);
        assert_eq!(response.context.flow, Flow::Idle);
        assert!(response.replies[0].contains("JC 48213"));
        assert!(!response.trigger_update_form);
    }

    #[test]
    fn open_flows_re_trigger_their_form_on_unrelated_text() {
        let updating = AgentContext::default().with_flow(Flow::Update);
        let response = respond("not sure", &updating);
        assert_eq!(response.context.flow, Flow::Update);
        assert!(response.trigger_update_form);

        let estimating = AgentContext::default().with_flow(Flow::Estimate);
        let response = respond("it's a bakkie", &estimating);
        assert_eq!(response.context.flow, Flow::Estimate);
        assert!(response.trigger_estimate_form);
    }

    #[test]
    fn unrecognised_input_gets_the_fallback() {
        let response = respond("qwerty", &AgentContext::default());
        assert_eq!(response.replies, vec![copy::fallback(Locale::En)]);
        assert_eq!(response.quick_replies, Some(copy::menu(Locale::En)));
    }

    #[test]
    fn punctuation_does_not_hide_keywords() {
        let (intent, _) = detect("Hours???");
        assert_eq!(intent, Intent::Hours);
        let (intent, _) = detect("what's your e-pos");
        assert_eq!(intent, Intent::Contact);
    }

    #[test]
    fn summaries_mention_what_was_submitted() {
        let details = EstimateDetails {
            car_model: Some("Toyota Hilux".into()),
            year: Some("2020".into()),
            damage_type: Some("Front panel dent".into()),
            damage_description: Some("Reversed into a pole".into()),
            photo_urls: vec!["a.jpg".into(), "b.jpg".into()],
        };
        let summary = agent().summarize_estimate(&details, Locale::En);
        assert!(summary.contains("2020 Toyota Hilux (front panel dent)"));
        assert!(summary.contains("2 photo links"));

        let update = agent().summarize_update_request("12345", Locale::Af);
        assert!(update.contains("12345"));
        assert!(update.starts_with("Dankie"));

        let missing = agent().summarize_update_request("  ", Locale::En);
        assert!(missing.starts_with("I couldn't find"));
    }
}
