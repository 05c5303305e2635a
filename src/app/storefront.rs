use crate::core::account::{AccountStore, FormErrors, LoginForm, RegistrationForm};
use crate::core::enrollment::{EmptyCheckout, EnrollmentEngine};
use crate::domain::model::{Account, CourseGroup, Money, Quote, Receipt, Screen};
use crate::domain::ports::{AlertSurface, KeyValueStore, Navigator};
use crate::utils::error::{Result, StorefrontError};
use serde::Serialize;

/// What a handler did with a user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Handled<T> {
    Done(T),
    /// Form input rejected per field; nothing was written.
    Invalid(FormErrors),
    /// The failure was shown as an alert and persisted state is unchanged.
    Alerted,
}

impl<T> Handled<T> {
    pub fn done(self) -> Option<T> {
        match self {
            Handled::Done(value) => Some(value),
            _ => None,
        }
    }

    pub fn map_done<U>(self, f: impl FnOnce(T) -> U) -> Handled<U> {
        match self {
            Handled::Done(value) => Handled::Done(f(value)),
            Handled::Invalid(errors) => Handled::Invalid(errors),
            Handled::Alerted => Handled::Alerted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseView {
    pub name: String,
    pub price: Money,
    pub group: CourseGroup,
    pub purpose: String,
    pub topics: Vec<String>,
    pub enrolled: bool,
}

impl CourseView {
    pub fn action_label(&self) -> &'static str {
        if self.enrolled {
            "Deselect"
        } else {
            "Select"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeLine {
    pub course: String,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeesView {
    pub lines: Vec<FeeLine>,
    pub quote: Quote,
}

/// Event handlers behind the storefront screens.
///
/// Storage failures are caught here and surfaced through the alert surface;
/// catalog misses propagate to the caller.
pub struct Storefront<S, N, A>
where
    S: KeyValueStore + Clone,
    N: Navigator,
    A: AlertSurface,
{
    enrollment: EnrollmentEngine<S>,
    accounts: AccountStore<S>,
    navigator: N,
    alerts: A,
}

impl<S, N, A> Storefront<S, N, A>
where
    S: KeyValueStore + Clone,
    N: Navigator,
    A: AlertSurface,
{
    pub fn new(store: S, empty_checkout: EmptyCheckout, navigator: N, alerts: A) -> Self {
        Self {
            enrollment: EnrollmentEngine::with_policy(store.clone(), empty_checkout),
            accounts: AccountStore::new(store),
            navigator,
            alerts,
        }
    }

    pub fn enrollment(&self) -> &EnrollmentEngine<S> {
        &self.enrollment
    }

    pub fn accounts(&self) -> &AccountStore<S> {
        &self.accounts
    }

    fn surface<T>(&self, result: Result<T>, message: &str) -> Result<Handled<T>> {
        match result {
            Ok(value) => Ok(Handled::Done(value)),
            Err(e) if e.is_storage_failure() => {
                tracing::error!("❌ {} ({})", message, e);
                self.alerts.alert("Error", message);
                Ok(Handled::Alerted)
            }
            Err(e) => Err(e),
        }
    }

    pub fn open(&self, screen: Screen) {
        self.navigator.navigate(screen);
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Handled<Account>> {
        let form = LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        };
        if let Err(errors) = form.validate() {
            tracing::debug!(fields = errors.fields.len(), "Login form rejected");
            return Ok(Handled::Invalid(errors));
        }

        match self.accounts.login(username, password).await {
            Ok(account) => {
                self.alerts.alert("Success", "Logged in successfully!");
                self.navigator.navigate(Screen::Home);
                Ok(Handled::Done(account))
            }
            Err(StorefrontError::InvalidCredentials) => {
                self.alerts.alert("Error", "Invalid username or password.");
                Ok(Handled::Alerted)
            }
            Err(e) => self.surface(Err(e), "An error occurred during login."),
        }
    }

    pub async fn register(&self, form: &RegistrationForm) -> Result<Handled<Account>> {
        let account = match form.validate() {
            Ok(account) => account,
            Err(errors) => {
                tracing::debug!(fields = errors.fields.len(), "Registration form rejected");
                return Ok(Handled::Invalid(errors));
            }
        };

        let stored = self.accounts.register(&account).await.map(|_| account);
        let handled = self.surface(stored, "An error occurred during registration.")?;
        if let Handled::Done(_) = &handled {
            self.alerts.alert("Success", "Account created successfully!");
            self.navigator.navigate(Screen::Login);
        }
        Ok(handled)
    }

    pub async fn open_course(&self, name: &str) -> Result<Handled<CourseView>> {
        let course = self.enrollment.catalog().find(name)?;
        let enrolled = self.enrollment.is_enrolled(name).await;

        Ok(self
            .surface(enrolled, "An error occurred while loading your courses.")?
            .map_done(|enrolled| CourseView {
                name: course.name.to_string(),
                price: course.price,
                group: course.group,
                purpose: course.details.purpose.to_string(),
                topics: course.details.topics.iter().map(|t| t.to_string()).collect(),
                enrolled,
            }))
    }

    /// Select/Deselect button. Returns whether the course is now selected.
    pub async fn enroll(&self, name: &str) -> Result<Handled<bool>> {
        let toggled = self.enrollment.toggle_enrollment(name).await;
        self.surface(toggled, "An error occurred while updating your courses.")
    }

    pub async fn open_fees(&self) -> Result<Handled<FeesView>> {
        let selection = self.enrollment.selection().await;
        match self.surface(selection, "An error occurred while loading your courses.")? {
            Handled::Done(selection) => self.fees_view(selection).map(Handled::Done),
            Handled::Invalid(errors) => Ok(Handled::Invalid(errors)),
            Handled::Alerted => Ok(Handled::Alerted),
        }
    }

    pub async fn remove_from_fees(&self, name: &str) -> Result<Handled<FeesView>> {
        let remaining = self.enrollment.remove_course(name).await;
        match self.surface(remaining, "An error occurred while updating your courses.")? {
            Handled::Done(selection) => self.fees_view(selection).map(Handled::Done),
            Handled::Invalid(errors) => Ok(Handled::Invalid(errors)),
            Handled::Alerted => Ok(Handled::Alerted),
        }
    }

    fn fees_view(&self, selection: Vec<String>) -> Result<FeesView> {
        let quote = self.enrollment.quote_for(&selection)?;
        let catalog = self.enrollment.catalog();
        let lines = selection
            .into_iter()
            .map(|course| {
                let price = catalog.price_of(&course)?;
                Ok::<_, StorefrontError>(FeeLine { course, price })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(FeesView { lines, quote })
    }

    pub async fn checkout(&self) -> Result<Handled<Receipt>> {
        match self.enrollment.checkout().await {
            Ok(receipt) => {
                self.alerts.alert("Success!", &receipt.confirmation_message());
                self.navigator.navigate(Screen::Home);
                Ok(Handled::Done(receipt))
            }
            Err(StorefrontError::EmptySelection) => {
                self.alerts
                    .alert("Error", &StorefrontError::EmptySelection.user_friendly_message());
                Ok(Handled::Alerted)
            }
            Err(e) => self.surface(Err(e), "An error occurred during checkout."),
        }
    }
}
