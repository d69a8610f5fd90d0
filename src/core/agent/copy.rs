//! Everything the built-in assistant says, in English and Afrikaans.

use crate::core::config::SiteConfig;
use crate::core::models::{EstimateDetails, Locale};

pub fn welcome(site: &SiteConfig, locale: Locale) -> Vec<String> {
    match locale {
        Locale::En => vec![
            format!(
                "Hi there! I'm {}, the digital assistant at {}.",
                site.assistant_name, site.business_name
            ),
            "I can help you request a repair estimate, check on a vehicle in the workshop, \
             share maintenance tips or guide you through an insurance claim. \
             Praat gerus Afrikaans as jy verkies."
                .to_string(),
        ],
        Locale::Af => vec![
            format!(
                "Hallo! Ek is {}, die digitale assistent by {}.",
                site.assistant_name, site.business_name
            ),
            "Ek kan help met 'n herstelkwotasie, die status van jou voertuig, \
             onderhoudswenke of 'n versekeringseis. Feel free to chat in English."
                .to_string(),
        ],
    }
}

pub fn menu(locale: Locale) -> Vec<String> {
    let labels: [&str; 4] = locale.pick(
        [
            "Request an estimate",
            "Check repair status",
            "Maintenance tips",
            "Insurance claims support",
        ],
        [
            "Vra 'n kwotasie",
            "Herstel status",
            "Onderhoud wenke",
            "Versekering eise",
        ],
    );
    labels.iter().map(|label| label.to_string()).collect()
}

pub fn locale_switched(locale: Locale) -> String {
    locale
        .pick(
            "No problem, let's continue in English. How can I help?",
            "Reg so, ons gaan voort in Afrikaans. Hoe kan ek help?",
        )
        .to_string()
}

pub fn estimate_intro(locale: Locale) -> Vec<String> {
    vec![
        locale
            .pick(
                "Happy to help with an estimate. Please fill in the details below.",
                "Ek help graag met 'n kwotasie. Vul asseblief die besonderhede hieronder in.",
            )
            .to_string(),
        locale
            .pick(
                "Photos of the damage from a few angles help our estimators give you an accurate figure.",
                "Foto's van die skade uit 'n paar hoeke help ons beramers om 'n akkurate syfer te gee.",
            )
            .to_string(),
    ]
}

pub fn estimate_reminder(locale: Locale) -> String {
    locale
        .pick(
            "Once you've completed the estimate form above, I'll pass it straight to our estimators.",
            "Sodra jy die kwotasievorm hierbo voltooi het, stuur ek dit direk na ons beramers.",
        )
        .to_string()
}

pub fn update_intro(locale: Locale) -> String {
    locale
        .pick(
            "Sure, let's check on your vehicle. Share your job card number, or your registration number if you don't have it.",
            "Seker, kom ons kyk hoe dit met jou voertuig gaan. Gee asseblief jou werkkaart nommer, of jou registrasie nommer as jy dit nie het nie.",
        )
        .to_string()
}

pub fn update_reminder(locale: Locale) -> String {
    locale
        .pick(
            "I still need a job card or registration number to look up your repair.",
            "Ek het steeds 'n werkkaart of registrasie nommer nodig om jou herstelwerk op te soek.",
        )
        .to_string()
}

pub fn maintenance_tips(locale: Locale) -> Vec<String> {
    vec![
        locale
            .pick(
                "A few tips to keep your paintwork and panels in top shape:",
                "'n Paar wenke om jou verf en panele in topvorm te hou:",
            )
            .to_string(),
        locale
            .pick(
                "- Wash off salt spray and bird droppings promptly, especially near the coast.\n\
                 - Touch up stone chips early so rust can't take hold.\n\
                 - Wax every three months to protect the clear coat.\n\
                 - Have underbody rust treatment checked once a year.",
                "- Was soutsproei en voëlmis so gou moontlik af, veral naby die kus.\n\
                 - Herstel klipskerwe vroeg sodat roes nie kan begin nie.\n\
                 - Waks elke drie maande om die blinklaag te beskerm.\n\
                 - Laat die roesbehandeling onder die voertuig jaarliks nagaan.",
            )
            .to_string(),
    ]
}

pub fn insurance(site: &SiteConfig, locale: Locale) -> Vec<String> {
    match locale {
        Locale::En => vec![
            "We work with all major insurers and can liaise directly with your assessor.".to_string(),
            format!(
                "Send your claim number to {} and our admin team will coordinate the rest. \
                 If you still need a quote for the insurer, I can start an estimate for you.",
                site.claims_email
            ),
        ],
        Locale::Af => vec![
            "Ons werk saam met alle groot versekeraars en kan direk met jou assessor skakel.".to_string(),
            format!(
                "Stuur jou eisnommer na {} en ons admin span sal die res reël. \
                 As jy nog 'n kwotasie vir die versekeraar nodig het, kan ek 'n skatting begin.",
                site.claims_email
            ),
        ],
    }
}

pub fn towing(site: &SiteConfig, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "For emergency towing or after-hours help, call {}. Leave a voicemail and we'll return your call first thing in the morning.",
            site.phone
        ),
        Locale::Af => format!(
            "Vir nood-insleep of hulp na ure, bel {}. Los 'n stemboodskap en ons skakel jou eerste ding in die oggend terug.",
            site.phone
        ),
    }
}

pub fn hours(site: &SiteConfig, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "Our workshop hours:\nMon - Fri: {}\nSat: By appointment\nSun & Public Holidays: Closed",
            site.weekday_hours
        ),
        Locale::Af => format!(
            "Ons werkswinkel ure:\nMa - Vr: {}\nSa: Op afspraak\nSo & Openbare vakansiedae: Gesluit",
            site.weekday_hours
        ),
    }
}

pub fn contact(site: &SiteConfig, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "You'll find us at {}.\nPhone: {}\nEmail: {}",
            site.address, site.phone, site.email
        ),
        Locale::Af => format!(
            "Ons is geleë by {}.\nFoon: {}\nE-pos: {}",
            site.address, site.phone, site.email
        ),
    }
}

pub fn greeting(locale: Locale) -> String {
    locale
        .pick(
            "Hello! What can I help you with today?",
            "Hallo! Waarmee kan ek jou vandag help?",
        )
        .to_string()
}

pub fn thanks(locale: Locale) -> String {
    locale
        .pick(
            "You're welcome! Anything else I can help with?",
            "Plesier! Kan ek met enigiets anders help?",
        )
        .to_string()
}

pub fn fallback(locale: Locale) -> String {
    locale
        .pick(
            "I'm not sure I followed. I can help with estimates, repair status, maintenance tips, insurance claims, our hours or contact details.",
            "Ek is nie seker ek verstaan nie. Ek kan help met kwotasies, herstel status, onderhoudswenke, versekeringseise, ons ure of kontakbesonderhede.",
        )
        .to_string()
}

pub fn estimate_summary(site: &SiteConfig, details: &EstimateDetails, locale: Locale) -> String {
    let vehicle = [details.year.as_deref(), details.car_model.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let damage = details
        .damage_type
        .as_deref()
        .map(str::trim)
        .filter(|damage| !damage.is_empty());
    let photos = details.photo_urls.len();

    match locale {
        Locale::En => {
            let mut summary = format!(
                "Thanks! I've logged an estimate request for your {}",
                if vehicle.is_empty() { "vehicle" } else { vehicle.as_str() }
            );
            if let Some(damage) = damage {
                summary.push_str(&format!(" ({})", damage.to_lowercase()));
            }
            summary.push('.');
            if photos > 0 {
                summary.push_str(&format!(
                    " We received {} photo link{}.",
                    photos,
                    if photos == 1 { "" } else { "s" }
                ));
            }
            summary.push_str(&format!(
                " An estimator will contact you within one working day. For urgent queries call {}.",
                site.phone
            ));
            summary
        }
        Locale::Af => {
            let mut summary = format!(
                "Dankie! Ek het 'n kwotasieversoek vir jou {} aangeteken",
                if vehicle.is_empty() { "voertuig" } else { vehicle.as_str() }
            );
            if let Some(damage) = damage {
                summary.push_str(&format!(" ({})", damage.to_lowercase()));
            }
            summary.push('.');
            if photos > 0 {
                summary.push_str(&format!(" Ons het {} foto skakel(s) ontvang.", photos));
            }
            summary.push_str(&format!(
                " 'n Beramer sal jou binne een werksdag kontak. Vir dringende navrae bel {}.",
                site.phone
            ));
            summary
        }
    }
}

pub fn update_summary(site: &SiteConfig, identifier: &str, locale: Locale) -> String {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return match locale {
            Locale::En => format!(
                "I couldn't find a job card or registration number. Please try again or call us on {}.",
                site.phone
            ),
            Locale::Af => format!(
                "Ek kon nie 'n werkkaart of registrasie nommer vind nie. Probeer asseblief weer of bel ons by {}.",
                site.phone
            ),
        };
    }

    match locale {
        Locale::En => format!(
            "Thanks, I've asked the workshop for an update on {}. Our service advisor will send you the latest status shortly.",
            identifier
        ),
        Locale::Af => format!(
            "Dankie, ek het die werkswinkel gevra vir 'n opdatering oor {}. Ons diensadviseur sal jou binnekort die nuutste status stuur.",
            identifier
        ),
    }
}
