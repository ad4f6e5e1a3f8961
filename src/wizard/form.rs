// ABOUTME: Registration and verification form data for the wizard
// Holds raw field values only; nothing here validates what the user typed

use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// Maximum characters accepted in the verification code field
pub const VERIFICATION_CODE_LEN: usize = 6;

/// Every editable value in the wizard forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    CompanyName,
    IndustryType,
    RepresentativeName,
    RepresentativePhone,
    CompanyEmail,
    Password,
    VerificationCode,
    AgreeToTerms,
}

impl FormField {
    /// Fields shown on the registration step, in focus order
    pub fn registration() -> &'static [FormField] {
        &[
            Self::CompanyName,
            Self::IndustryType,
            Self::RepresentativeName,
            Self::RepresentativePhone,
            Self::CompanyEmail,
            Self::Password,
            Self::AgreeToTerms,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CompanyName => "Company Name",
            Self::IndustryType => "Industry Type",
            Self::RepresentativeName => "Representative Name",
            Self::RepresentativePhone => "Representative Phone Number",
            Self::CompanyEmail => "Company Email",
            Self::Password => "Set Password",
            Self::VerificationCode => "Verification Code",
            Self::AgreeToTerms => "I agree to the terms and conditions",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::CompanyName => "Enter your company name",
            Self::IndustryType => "Select your industry",
            Self::RepresentativeName => "Enter your full name",
            Self::RepresentativePhone => "Enter your phone number (e.g., 0123456789)",
            Self::CompanyEmail => "tech@odela.com.my",
            Self::Password => "••••••••••••••",
            Self::VerificationCode => "000000",
            Self::AgreeToTerms => "",
        }
    }

    /// Whether typed characters go into this field
    pub fn accepts_text(&self) -> bool {
        !matches!(self, Self::IndustryType | Self::AgreeToTerms)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Fixed industry options offered on the registration step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Retail,
    Manufacturing,
    Education,
    Consulting,
    RealEstate,
    FoodBeverage,
    Transportation,
    Entertainment,
    Other,
}

impl Industry {
    pub fn all() -> &'static [Industry] {
        &[
            Self::Technology,
            Self::Healthcare,
            Self::Finance,
            Self::Retail,
            Self::Manufacturing,
            Self::Education,
            Self::Consulting,
            Self::RealEstate,
            Self::FoodBeverage,
            Self::Transportation,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Stored value for this option
    pub fn value(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Retail => "retail",
            Self::Manufacturing => "manufacturing",
            Self::Education => "education",
            Self::Consulting => "consulting",
            Self::RealEstate => "real-estate",
            Self::FoodBeverage => "food-beverage",
            Self::Transportation => "transportation",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Retail => "Retail",
            Self::Manufacturing => "Manufacturing",
            Self::Education => "Education",
            Self::Consulting => "Consulting",
            Self::RealEstate => "Real Estate",
            Self::FoodBeverage => "Food & Beverage",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Industry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|industry| industry.value() == s)
            .ok_or_else(|| ParseError::UnknownIndustry(s.to_string()))
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values entered across the registration and verification steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub company_name: String,
    pub industry_type: String,
    pub representative_name: String,
    pub representative_phone: String,
    pub company_email: String,
    pub password: String,
    pub verification_code: String,
    pub agree_to_terms: bool,
}

impl FormState {
    /// Fresh form with the company email pre-filled
    pub fn new(company_email: impl Into<String>) -> Self {
        Self {
            company_email: company_email.into(),
            ..Self::default()
        }
    }

    /// Current text of a field; `None` for the terms checkbox
    pub fn text(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::CompanyName => &self.company_name,
            FormField::IndustryType => &self.industry_type,
            FormField::RepresentativeName => &self.representative_name,
            FormField::RepresentativePhone => &self.representative_phone,
            FormField::CompanyEmail => &self.company_email,
            FormField::Password => &self.password,
            FormField::VerificationCode => &self.verification_code,
            FormField::AgreeToTerms => return None,
        };
        Some(value.as_str())
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::CompanyName => Some(&mut self.company_name),
            FormField::IndustryType => Some(&mut self.industry_type),
            FormField::RepresentativeName => Some(&mut self.representative_name),
            FormField::RepresentativePhone => Some(&mut self.representative_phone),
            FormField::CompanyEmail => Some(&mut self.company_email),
            FormField::Password => Some(&mut self.password),
            FormField::VerificationCode => Some(&mut self.verification_code),
            FormField::AgreeToTerms => None,
        }
    }

    /// Replace a field's value. The checkbox is set from the literal `"true"`.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::AgreeToTerms => self.agree_to_terms = value == "true",
            FormField::VerificationCode => {
                self.verification_code = value.chars().take(VERIFICATION_CODE_LEN).collect();
            }
            other => {
                if let Some(slot) = self.text_mut(other) {
                    *slot = value.to_string();
                }
            }
        }
    }

    /// Append a typed character to a text field
    pub fn push_char(&mut self, field: FormField, c: char) {
        if !field.accepts_text() {
            return;
        }
        if field == FormField::VerificationCode
            && self.verification_code.chars().count() >= VERIFICATION_CODE_LEN
        {
            return;
        }
        if let Some(slot) = self.text_mut(field) {
            slot.push(c);
        }
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, field: FormField) {
        if !field.accepts_text() {
            return;
        }
        if let Some(slot) = self.text_mut(field) {
            slot.pop();
        }
    }

    pub fn toggle_terms(&mut self) {
        self.agree_to_terms = !self.agree_to_terms;
    }

    /// Selected industry, if the stored value names one
    pub fn industry(&self) -> Option<Industry> {
        self.industry_type.parse().ok()
    }

    /// Step through the industry options, wrapping at either end
    pub fn cycle_industry(&mut self, forward: bool) {
        let options = Industry::all();
        let current = self
            .industry()
            .and_then(|i| options.iter().position(|o| *o == i));

        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(idx), true) => (idx + 1) % options.len(),
            (Some(idx), false) => (idx + options.len() - 1) % options.len(),
        };

        self.industry_type = options[next].value().to_string();
    }
}
