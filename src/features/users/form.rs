//! Validation and field state for the user create/edit form. The view in
//! `components::users` only renders what [`UserFormState`] decides.
//!
//! Errors appear once a field has been blurred; from then on every change
//! re-validates it. Submitting validates all fields and marks them touched.

use crate::features::users::types::{User, UserInput};
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::OnceLock,
};

pub const DEFAULT_ROLES: [&str; 2] = ["user", "admin"];
/// Role preselected when editing a record that has none.
pub const FALLBACK_ROLE: &str = "user";

pub const NAME_TOO_SHORT: &str = "Username must be at least 2 characters";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const ROLE_REQUIRED: &str = "Role is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";

const MIN_NAME_CHARS: usize = 2;
const MIN_ROLE_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    /// Only new users choose a password.
    pub fn collects_password(self) -> bool {
        matches!(self, FormMode::Create)
    }

    pub fn default_submit_label(self) -> &'static str {
        match self {
            FormMode::Create => "Create User",
            FormMode::Edit => "Save Changes",
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            FormMode::Create => &[Field::Name, Field::Password, Field::Email, Field::Role],
            FormMode::Edit => &[Field::Name, Field::Email, Field::Role],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Role,
    Password,
}

impl Field {
    /// DOM id used to pair labels with inputs.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Role => "role",
            Field::Password => "password",
        }
    }
}

/// Raw, untrimmed input values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFormValues {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

impl UserFormValues {
    /// Prefills the edit form from a loaded record.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.username.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            role: user
                .role
                .clone()
                .unwrap_or_else(|| FALLBACK_ROLE.to_string()),
            password: String::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Role => &self.role,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Role => self.role = value,
            Field::Password => self.password = value,
        }
    }
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok())
        .as_ref()
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

/// Returns the error for one field, or `None` when it is valid or not part of
/// the form in this mode.
pub fn validate_field(
    mode: FormMode,
    field: Field,
    values: &UserFormValues,
) -> Option<&'static str> {
    match field {
        Field::Name => {
            (values.name.trim().chars().count() < MIN_NAME_CHARS).then_some(NAME_TOO_SHORT)
        }
        Field::Email => (!is_valid_email(values.email.trim())).then_some(INVALID_EMAIL),
        Field::Role => {
            (values.role.trim().chars().count() < MIN_ROLE_CHARS).then_some(ROLE_REQUIRED)
        }
        Field::Password if mode.collects_password() => {
            (values.password.chars().count() < MIN_PASSWORD_CHARS).then_some(PASSWORD_TOO_SHORT)
        }
        Field::Password => None,
    }
}

/// Validates every field of `mode`, yielding the trimmed submission or the
/// per-field errors.
pub fn validate(
    mode: FormMode,
    values: &UserFormValues,
) -> Result<UserInput, BTreeMap<Field, &'static str>> {
    let errors: BTreeMap<_, _> = mode
        .fields()
        .iter()
        .filter_map(|field| validate_field(mode, *field, values).map(|error| (*field, error)))
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UserInput {
        name: values.name.trim().to_string(),
        email: values.email.trim().to_string(),
        role: values.role.trim().to_string(),
        password: mode.collects_password().then(|| values.password.clone()),
    })
}

/// Values, touched fields and visible errors of one form instance.
#[derive(Clone, Debug)]
pub struct UserFormState {
    mode: FormMode,
    values: UserFormValues,
    touched: BTreeSet<Field>,
    errors: BTreeMap<Field, &'static str>,
}

impl UserFormState {
    pub fn new(mode: FormMode, mut values: UserFormValues) -> Self {
        if !mode.collects_password() {
            values.password.clear();
        }
        Self {
            mode,
            values,
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        if self.is_touched(field) {
            self.revalidate(field);
        }
    }

    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Validates everything. Returns the submission only when no field fails.
    pub fn submit(&mut self) -> Option<UserInput> {
        self.touched.extend(self.mode.fields().iter().copied());
        match validate(self.mode, &self.values) {
            Ok(input) => {
                self.errors.clear();
                Some(input)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    fn revalidate(&mut self, field: Field) {
        match validate_field(self.mode, field, &self.values) {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}
