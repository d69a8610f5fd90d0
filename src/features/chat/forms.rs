use crate::core::models::{EstimateDetails, Locale};

/// Splits the free-text photo field on newlines and commas, dropping blanks.
pub fn split_photo_urls(field: &str) -> Vec<String> {
    field
        .split(['\n', ','])
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateField {
    CarModel,
    Year,
    DamageType,
    DamageDescription,
}

/// In-progress values of the estimate form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EstimateDraft {
    car_model: Option<String>,
    year: Option<String>,
    damage_type: Option<String>,
    damage_description: Option<String>,
    photo_field: String,
}

impl EstimateDraft {
    pub fn field(&self, field: EstimateField) -> &str {
        let value = match field {
            EstimateField::CarModel => &self.car_model,
            EstimateField::Year => &self.year,
            EstimateField::DamageType => &self.damage_type,
            EstimateField::DamageDescription => &self.damage_description,
        };
        value.as_deref().unwrap_or("")
    }

    pub fn photo_field(&self) -> &str {
        &self.photo_field
    }

    pub fn set(&mut self, field: EstimateField, value: String) {
        let slot = match field {
            EstimateField::CarModel => &mut self.car_model,
            EstimateField::Year => &mut self.year,
            EstimateField::DamageType => &mut self.damage_type,
            EstimateField::DamageDescription => &mut self.damage_description,
        };
        *slot = Some(value);
    }

    pub fn set_photo_field(&mut self, value: String) {
        self.photo_field = value;
    }

    /// Whether every required field has a non-blank value. Drives the submit
    /// button; `take` itself accepts whatever was typed.
    pub fn is_complete(&self) -> bool {
        [
            EstimateField::CarModel,
            EstimateField::Year,
            EstimateField::DamageType,
            EstimateField::DamageDescription,
        ]
        .into_iter()
        .all(|field| !self.field(field).trim().is_empty())
    }

    /// Builds the submitted payload and resets the draft.
    pub fn take(&mut self) -> EstimateDetails {
        let draft = std::mem::take(self);
        EstimateDetails {
            photo_urls: split_photo_urls(&draft.photo_field),
            car_model: draft.car_model,
            year: draft.year,
            damage_type: draft.damage_type,
            damage_description: draft.damage_description,
        }
    }
}

pub struct EstimateLabels {
    pub car_model: &'static str,
    pub year: &'static str,
    pub damage_type: &'static str,
    pub damage_description: &'static str,
    pub photo_urls: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub car_model_placeholder: &'static str,
    pub year_placeholder: &'static str,
    pub damage_type_placeholder: &'static str,
    pub damage_description_placeholder: &'static str,
    pub photo_urls_placeholder: &'static str,
}

impl EstimateLabels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                car_model: "Vehicle make & model",
                year: "Year",
                damage_type: "Damage type",
                damage_description: "Describe the damage",
                photo_urls: "Photo links (optional)",
                submit: "Send details",
                cancel: "Cancel",
                car_model_placeholder: "e.g. Toyota Hilux, VW Polo",
                year_placeholder: "2020",
                damage_type_placeholder: "Front panel dent",
                damage_description_placeholder: "Describe what happened and which panels were affected.",
                photo_urls_placeholder: "https://yourphoto1.jpg\nhttps://yourphoto2.jpg",
            },
            Locale::Af => Self {
                car_model: "Voertuig make & model",
                year: "Jaar",
                damage_type: "Tipe skade",
                damage_description: "Beskryf die skade",
                photo_urls: "Foto skakels (opsioneel)",
                submit: "Stuur besonderhede",
                cancel: "Kanselleer",
                car_model_placeholder: "Toyota Hilux, VW Polo, ens.",
                year_placeholder: "2020",
                damage_type_placeholder: "Voorpaneel duik",
                damage_description_placeholder: "Kort beskrywing van wat gebeur het en watter panele geraak is.",
                photo_urls_placeholder: "https://joufoto1.jpg\nhttps://joufoto2.jpg",
            },
        }
    }
}

pub struct UpdateLabels {
    pub job_card: &'static str,
    pub registration: &'static str,
    pub optional: &'static str,
    pub submit: &'static str,
    pub job_card_placeholder: &'static str,
    pub registration_placeholder: &'static str,
}

impl UpdateLabels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                job_card: "Job card number",
                registration: "Registration number",
                optional: "Optional",
                submit: "Check status",
                job_card_placeholder: "12345",
                registration_placeholder: "CA 123-456",
            },
            Locale::Af => Self {
                job_card: "Werkkaart nommer",
                registration: "Registrasie nommer",
                optional: "Opsioneel",
                submit: "Kontroleer status",
                job_card_placeholder: "12345",
                registration_placeholder: "CY 123-456",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_field_is_split_trimmed_and_compacted() {
        assert_eq!(
            split_photo_urls("a.jpg, b.jpg\n\n c.jpg "),
            vec!["a.jpg", "b.jpg", "c.jpg"]
        );
        assert!(split_photo_urls(" ,\n, ").is_empty());
        assert!(split_photo_urls("").is_empty());
    }

    #[test]
    fn take_builds_details_and_resets_the_draft() {
        let mut draft = EstimateDraft::default();
        draft.set(EstimateField::CarModel, "VW Polo".into());
        draft.set(EstimateField::Year, "2018".into());
        draft.set(EstimateField::DamageType, "Scratch".into());
        draft.set(EstimateField::DamageDescription, "Keyed along the left side".into());
        draft.set_photo_field("https://x/1.jpg,https://x/2.jpg".into());
        assert!(draft.is_complete());

        let details = draft.take();
        assert_eq!(details.car_model.as_deref(), Some("VW Polo"));
        assert_eq!(details.damage_description.as_deref(), Some("Keyed along the left side"));
        assert_eq!(details.photo_urls, vec!["https://x/1.jpg", "https://x/2.jpg"]);

        assert_eq!(draft, EstimateDraft::default());
        assert_eq!(draft.field(EstimateField::CarModel), "");
        assert_eq!(draft.photo_field(), "");
    }

    #[test]
    fn blank_required_field_disables_submit_but_still_builds_a_payload() {
        let mut draft = EstimateDraft::default();
        draft.set(EstimateField::CarModel, "VW Polo".into());
        draft.set(EstimateField::Year, "2018".into());
        draft.set(EstimateField::DamageType, " ".into());
        draft.set(EstimateField::DamageDescription, "Dent".into());
        assert!(!draft.is_complete());

        draft.set(EstimateField::DamageType, "Dent".into());
        assert!(draft.is_complete());

        draft.set(EstimateField::DamageType, " ".into());
        let details = draft.take();
        assert_eq!(details.damage_type.as_deref(), Some(" "));
        assert_eq!(details.car_model.as_deref(), Some("VW Polo"));
        assert_eq!(draft, EstimateDraft::default());
    }

    #[test]
    fn untouched_fields_are_absent_from_the_payload() {
        let mut draft = EstimateDraft::default();
        draft.set(EstimateField::CarModel, "Ford Ranger".into());
        let details = draft.take();
        assert_eq!(details.car_model.as_deref(), Some("Ford Ranger"));
        assert!(details.year.is_none());
        assert!(details.photo_urls.is_empty());
    }

    #[test]
    fn labels_follow_the_locale() {
        let en = EstimateLabels::for_locale(Locale::En);
        let af = EstimateLabels::for_locale(Locale::Af);
        assert_eq!(en.car_model, "Vehicle make & model");
        assert_eq!(af.car_model, "Voertuig make & model");
        assert_eq!(af.submit, "Stuur besonderhede");
        assert_eq!(af.cancel, "Kanselleer");

        let en = UpdateLabels::for_locale(Locale::En);
        let af = UpdateLabels::for_locale(Locale::Af);
        assert_eq!(en.submit, "Check status");
        assert_eq!(af.job_card, "Werkkaart nommer");
        assert_eq!(af.registration_placeholder, "CY 123-456");
    }
}
