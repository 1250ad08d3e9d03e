//! Inline form validation, run before any request is issued.

use std::collections::BTreeMap;

use store::RegisterRequest;

pub const REQUIRED: &str = "Required";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "Must be at least 8 characters";
pub const PASSWORD_NO_UPPERCASE: &str = "Must contain at least one uppercase letter";
pub const PASSWORD_NO_DIGIT: &str = "Must contain at least one number";
pub const INVALID_DATE: &str = "Invalid date";

const MIN_PASSWORD_LEN: usize = 8;

/// Field name to the first problem found with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    fn check(&mut self, field: &'static str, problem: Option<&str>) {
        if let Some(problem) = problem {
            self.0.entry(field).or_insert_with(|| problem.to_string());
        }
    }
}

fn required(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some(REQUIRED)
}

/// `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || email.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

fn email_problem(email: &str) -> Option<&'static str> {
    required(email).or_else(|| (!is_valid_email(email.trim())).then_some(INVALID_EMAIL))
}

fn password_problem(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(REQUIRED)
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some(PASSWORD_TOO_SHORT)
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some(PASSWORD_NO_UPPERCASE)
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some(PASSWORD_NO_DIGIT)
    } else {
        None
    }
}

pub fn validate_register(request: &RegisterRequest) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check("email", email_problem(&request.email));
    errors.check("password", password_problem(&request.password));
    errors.check("first_name", required(&request.first_name));
    errors.check("last_name", required(&request.last_name));
    errors
}

/// Login only checks presence and shape; the server judges the password.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check("email", email_problem(email));
    errors.check("password", password.is_empty().then_some(REQUIRED));
    errors
}

pub fn validate_project(title: &str, description: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check("title", required(title));
    errors.check("description", required(description));
    errors
}

pub fn validate_task(title: &str, description: &str, due_date: &str) -> FieldErrors {
    let mut errors = validate_project(title, description);
    errors.check(
        "due_date",
        store::due_date::to_wire(due_date).err().map(|_| INVALID_DATE),
    );
    errors
}
