//! Client-side form checks for login and registration.
//!
//! These only catch obvious mistakes before a round-trip; the backend stays
//! authoritative and its messages are shown verbatim.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{Credentials, Gender, RegistrationRequest};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Field-keyed validation messages in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<(&'static str, &'static str)>);

impl FormErrors {
    fn add(&mut self, field: &'static str, message: &'static str) {
        if self.get(field).is_none() {
            self.0.push((field, message));
        }
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    pub fn first(&self) -> Option<&'static str> {
        self.0.first().map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns every missing field.
    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::default();
        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", "Email is required");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        if errors.is_empty() {
            Ok(Credentials { email: email.to_owned(), password: self.password.clone() })
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub gender: String,
    pub country: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns one message per invalid field.
    pub fn validate(&self) -> Result<RegistrationRequest, FormErrors> {
        let mut errors = FormErrors::default();

        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        let date_of_birth = self.date_of_birth.trim();
        let country = self.country.trim();
        let phone_number = self.phone_number.trim();

        if first_name.is_empty() {
            errors.add("first_name", "First name is required");
        }
        if last_name.is_empty() {
            errors.add("last_name", "Last name is required");
        }
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.add("email", "Please enter a valid email address");
        }
        if date_of_birth.is_empty() {
            errors.add("date_of_birth", "Date of birth is required");
        }
        let gender = Gender::parse(self.gender.trim());
        if gender.is_none() {
            errors.add("gender", "Please select your gender");
        }
        if country.is_empty() {
            errors.add("country", "Country is required");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", "Password must be at least 8 characters");
        }
        if self.confirm_password.is_empty() {
            errors.add("confirm_password", "Please confirm your password");
        } else if self.confirm_password != self.password {
            errors.add("confirm_password", "Passwords do not match");
        }
        if !self.accept_terms {
            errors.add("accept_terms", "You must accept the terms");
        }

        match gender {
            Some(gender) if errors.is_empty() => Ok(RegistrationRequest {
                email: email.to_owned(),
                password: self.password.clone(),
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
                date_of_birth: date_of_birth.to_owned(),
                gender,
                country: country.to_owned(),
                phone_number: (!phone_number.is_empty()).then(|| phone_number.to_owned()),
                accept_terms: true,
            }),
            _ => Err(errors),
        }
    }
}

/// Password strength meter: one point each for length, mixed case, a digit,
/// and a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        if password.is_empty() {
            return Self { score: 0 };
        }
        let checks = [
            password.chars().count() >= MIN_PASSWORD_LEN,
            password.chars().any(|c| c.is_ascii_lowercase())
                && password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        let score = checks.iter().filter(|passed| **passed).count();
        Self { score: u8::try_from(score).unwrap_or(4) }
    }

    pub fn label(self) -> &'static str {
        match self.score {
            0 => "",
            1 => "Weak",
            2 => "Fair",
            3 => "Good",
            _ => "Strong",
        }
    }

    /// Modifier class for the meter bar.
    pub fn class(self) -> &'static str {
        match self.score {
            0 => "strength strength--none",
            1 => "strength strength--weak",
            2 => "strength strength--fair",
            3 => "strength strength--good",
            _ => "strength strength--strong",
        }
    }
}
