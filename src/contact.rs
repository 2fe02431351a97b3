use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Budget {
    #[serde(rename = "under-10k")]
    Under10k,
    #[serde(rename = "10k-25k")]
    From10kTo25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "50k-plus")]
    Over50k,
}

impl Budget {
    pub const ALL: [Budget; 4] = [
        Budget::Under10k,
        Budget::From10kTo25k,
        Budget::From25kTo50k,
        Budget::Over50k,
    ];

    /// Value used for the `<option>` and on the wire.
    pub fn value(self) -> &'static str {
        match self {
            Budget::Under10k => "under-10k",
            Budget::From10kTo25k => "10k-25k",
            Budget::From25kTo50k => "25k-50k",
            Budget::Over50k => "50k-plus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Budget::Under10k => "Under €10k",
            Budget::From10kTo25k => "€10k – €25k",
            Budget::From25kTo50k => "€25k – €50k",
            Budget::Over50k => "€50k+",
        }
    }

    pub fn from_value(value: &str) -> Option<Budget> {
        Budget::ALL.into_iter().find(|budget| budget.value() == value)
    }
}

/// Everything the contact form collects.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: Option<Budget>,
    pub message: String,
    /// Ids from `content::SERVICES`, in the order they were picked.
    pub services: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please add an email address.")]
    MissingEmail,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Please add a short message.")]
    MissingMessage,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error("Could not reach the studio: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("The studio could not accept the request (status {0}).")]
    Rejected(u16),
}

impl ContactRequest {
    pub fn toggle_service(&mut self, id: &str) {
        if let Some(index) = self.services.iter().position(|picked| picked == id) {
            self.services.remove(index);
        } else {
            self.services.push(id.to_string());
        }
    }

    pub fn has_service(&self, id: &str) -> bool {
        self.services.iter().any(|picked| picked == id)
    }

    /// Same checks the browser applies to the required fields.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Sends the request to the intake endpoint, or waits out a simulated round
/// trip when none is configured.
pub async fn submit(request: ContactRequest) -> Result<(), SubmitError> {
    request.validate()?;

    match config::intake_endpoint() {
        Some(endpoint) => {
            let response = Request::post(endpoint).json(&request)?.send().await?;
            if !response.ok() {
                log::error!("intake endpoint answered {}", response.status());
                return Err(SubmitError::Rejected(response.status()));
            }
        }
        None => {
            log::debug!("no intake endpoint configured, simulating submission");
            TimeoutFuture::new(config::SIMULATED_SUBMIT_DELAY).await;
        }
    }

    log::info!(
        "contact request sent ({} services, budget {:?})",
        request.services.len(),
        request.budget.map(Budget::value)
    );
    Ok(())
}

pub fn mailto_link(subject: &str) -> String {
    format!(
        "mailto:{}?subject={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(subject)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: String::new(),
            budget: None,
            message: "We need a new brand.".to_string(),
            services: Vec::new(),
        }
    }

    #[test]
    fn filled_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut request = filled();
        request.name = "   ".to_string();
        request.message.clear();
        assert_eq!(request.validate(), Err(FormError::MissingName));

        let mut request = filled();
        request.email.clear();
        assert_eq!(request.validate(), Err(FormError::MissingEmail));

        let mut request = filled();
        request.message = "\n\t".to_string();
        assert_eq!(request.validate(), Err(FormError::MissingMessage));
    }

    #[test]
    fn company_and_budget_are_optional() {
        let mut request = filled();
        request.company.clear();
        request.budget = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["ada", "ada@", "@example.com", "ada@@example.com", "a da@example.com", "ada@example."] {
            let mut request = filled();
            request.email = bad.to_string();
            assert_eq!(request.validate(), Err(FormError::InvalidEmail), "{}", bad);
        }
        let mut request = filled();
        request.email = "  ada@studio.io ".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn services_toggle_on_and_off() {
        let mut request = filled();
        request.toggle_service("brand");
        request.toggle_service("motion");
        assert!(request.has_service("brand"));
        assert_eq!(request.services, vec!["brand", "motion"]);

        request.toggle_service("brand");
        assert!(!request.has_service("brand"));
        assert_eq!(request.services, vec!["motion"]);
    }

    #[test]
    fn budget_values_map_back() {
        for budget in Budget::ALL {
            assert_eq!(Budget::from_value(budget.value()), Some(budget));
        }
        assert_eq!(Budget::from_value(""), None);
    }

    #[test]
    fn payload_uses_wire_names() {
        let mut request = filled();
        request.budget = Some(Budget::From25kTo50k);
        request.toggle_service("digital");

        let payload = serde_json::to_value(&request).expect("serializes");
        assert_eq!(payload["budget"], "25k-50k");
        assert_eq!(payload["services"], serde_json::json!(["digital"]));
        assert_eq!(payload["company"], "");

        let payload = serde_json::to_value(filled()).expect("serializes");
        assert!(payload["budget"].is_null());
    }

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_link("New project & budget"),
            "mailto:hello@halcyon.studio?subject=New%20project%20%26%20budget"
        );
    }
}
