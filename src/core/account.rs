use crate::domain::model::Account;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{require_field, validate_email, validate_matches, validate_min_length};

pub const ACCOUNT_KEY: &str = "user";
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Registration form input before validation.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Login form input before validation.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Per-field messages; a field appears at most once, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: Vec<(String, String)>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    fn record(&mut self, check: Result<()>) {
        if let Err(StorefrontError::ValidationError { field, message }) = check {
            self.fields.push((field, message));
        }
    }
}

impl RegistrationForm {
    /// Checks every field and collects all failures rather than stopping at the first.
    pub fn validate(&self) -> std::result::Result<Account, FormErrors> {
        let mut errors = FormErrors::default();

        errors.record(require_field("username", &self.username, "Please enter username"));

        errors.record(
            require_field("email", &self.email, "Please enter email")
                .and_then(|_| validate_email("email", &self.email)),
        );

        errors.record(
            require_field("password", &self.password, "Please enter password").and_then(|_| {
                validate_min_length(
                    "password",
                    &self.password,
                    MIN_PASSWORD_LENGTH,
                    "Password must be at least 6 characters",
                )
            }),
        );

        errors.record(
            require_field(
                "confirm_password",
                &self.confirm_password,
                "Please confirm your password",
            )
            .and_then(|_| {
                validate_matches(
                    "confirm_password",
                    &self.confirm_password,
                    &self.password,
                    "Passwords must match",
                )
            }),
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        // stored as typed; login compares the same raw values
        Ok(Account {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

impl LoginForm {
    pub fn validate(&self) -> std::result::Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.record(require_field(
            "username",
            &self.username,
            "Please enter your username or email.",
        ));
        errors.record(require_field(
            "password",
            &self.password,
            "Please enter your password.",
        ));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The single local account. Plain comparison, no hashing or sessions.
pub struct AccountStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AccountStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Overwrites any previous account.
    pub async fn register(&self, account: &Account) -> Result<()> {
        let raw = serde_json::to_string(account)?;
        self.store.set(ACCOUNT_KEY, &raw).await?;
        tracing::info!(username = %account.username, "Account registered");
        Ok(())
    }

    pub async fn current(&self) -> Result<Option<Account>> {
        match self.store.get(ACCOUNT_KEY).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Account> {
        match self.current().await? {
            Some(account) if account.username == username && account.password == password => {
                tracing::debug!(username, "Login accepted");
                Ok(account)
            }
            _ => Err(StorefrontError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStore;

    fn form(username: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_account() {
        let account = form("lerato", "lerato@example.com", "secret1", "secret1")
            .validate()
            .unwrap();
        assert_eq!(account.username, "lerato");
        assert_eq!(account.email, "lerato@example.com");
    }

    #[test]
    fn test_form_reports_each_field() {
        let errors = form("", "nope", "123", "456").validate().unwrap_err();
        assert_eq!(errors.fields.len(), 4);
        assert_eq!(errors.message_for("username"), Some("Please enter username"));
        assert_eq!(errors.message_for("email"), Some("Invalid email"));
        assert_eq!(
            errors.message_for("password"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.message_for("confirm_password"), Some("Passwords must match"));
    }

    #[test]
    fn test_missing_fields_use_required_messages() {
        let errors = RegistrationForm::default().validate().unwrap_err();
        assert_eq!(errors.message_for("email"), Some("Please enter email"));
        assert_eq!(errors.message_for("password"), Some("Please enter password"));
        assert_eq!(
            errors.message_for("confirm_password"),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(
            errors.message_for("username"),
            Some("Please enter your username or email.")
        );
        assert_eq!(errors.message_for("password"), Some("Please enter your password."));

        let filled = LoginForm {
            username: "lerato".to_string(),
            password: "secret1".to_string(),
        };
        assert!(filled.validate().is_ok());
    }

    #[tokio::test]
    async fn test_username_is_stored_as_typed() {
        let accounts = AccountStore::new(MemoryStore::new());
        let account = form(" lerato", "lerato@example.com", "secret1", "secret1")
            .validate()
            .unwrap();
        assert_eq!(account.username, " lerato");
        accounts.register(&account).await.unwrap();

        assert!(accounts.login(" lerato", "secret1").await.is_ok());
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let accounts = AccountStore::new(MemoryStore::new());
        let account = form("lerato", "lerato@example.com", "secret1", "secret1")
            .validate()
            .unwrap();
        accounts.register(&account).await.unwrap();

        assert_eq!(accounts.login("lerato", "secret1").await.unwrap(), account);
        assert!(matches!(
            accounts.login("lerato", "wrong").await,
            Err(StorefrontError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_without_account() {
        let accounts = AccountStore::new(MemoryStore::new());
        assert!(matches!(
            accounts.login("anyone", "secret1").await,
            Err(StorefrontError::InvalidCredentials)
        ));
    }
}
