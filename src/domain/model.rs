use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Amount of Rand held as whole cents. Serializes as a Rand amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_rand(rand: i64) -> Self {
        Money(rand * 100)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn as_rand(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_rand())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        if abs % 100 == 0 {
            write!(f, "{}{}", sign, abs / 100)
        } else {
            write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseGroup {
    SixMonth,
    SixWeek,
}

impl CourseGroup {
    pub const ALL: [CourseGroup; 2] = [CourseGroup::SixMonth, CourseGroup::SixWeek];

    pub fn title(self) -> &'static str {
        match self {
            CourseGroup::SixMonth => "Six-Month Courses",
            CourseGroup::SixWeek => "Six-Week Courses",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CourseGroup::SixMonth => "six-month",
            CourseGroup::SixWeek => "six-week",
        }
    }
}

impl std::str::FromStr for CourseGroup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "six-month" => Ok(CourseGroup::SixMonth),
            "six-week" => Ok(CourseGroup::SixWeek),
            other => Err(format!(
                "unknown course group '{}' (expected six-month or six-week)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: &'static str,
    pub price: Money,
    pub group: CourseGroup,
    pub details: CourseDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetails {
    pub purpose: &'static str,
    pub topics: &'static [&'static str],
}

/// Discount expressed in basis points (1/100 of a percent). Serializes as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscountRate(u32);

impl DiscountRate {
    pub const NONE: DiscountRate = DiscountRate(0);

    pub const fn from_basis_points(bps: u32) -> Self {
        DiscountRate(bps)
    }

    pub fn basis_points(self) -> u32 {
        self.0
    }

    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 10_000.0
    }
}

impl Serialize for DiscountRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_fraction())
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub course_count: usize,
    pub subtotal: Money,
    pub discount_rate: DiscountRate,
    pub discount_amount: Money,
    pub total: Money,
}

impl Quote {
    pub fn empty() -> Self {
        Self {
            course_count: 0,
            subtotal: Money::ZERO,
            discount_rate: DiscountRate::NONE,
            discount_amount: Money::ZERO,
            total: Money::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub courses: Vec<String>,
    pub quote: Quote,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    pub fn total(&self) -> Money {
        self.quote.total
    }

    pub fn confirmation_message(&self) -> String {
        format!(
            "Your checkout has been processed for the following courses: {}.",
            self.courses.join(", ")
        )
    }
}

/// Every screen in the storefront. `CourseDetails` carries the course it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Home,
    Login,
    Register,
    SixMonthCourses,
    SixWeekCourses,
    CourseDetails { course: String },
    CalculateFees,
    AboutUs,
    ContactUs,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Splash => "Splash",
            Screen::Home => "Home",
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::SixMonthCourses => "SixMonthCourses",
            Screen::SixWeekCourses => "SixWeekCourses",
            Screen::CourseDetails { .. } => "CourseDetails",
            Screen::CalculateFees => "CalculateFees",
            Screen::AboutUs => "AboutUs",
            Screen::ContactUs => "ContactUs",
        }
    }

    pub fn course_list(group: CourseGroup) -> Self {
        match group {
            CourseGroup::SixMonth => Screen::SixMonthCourses,
            CourseGroup::SixWeek => Screen::SixWeekCourses,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::CourseDetails { course } => write!(f, "CourseDetails({})", course),
            other => f.write_str(other.name()),
        }
    }
}

/// The single local account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_rand(1500).to_string(), "1500");
        assert_eq!(Money::from_cents(213_750).to_string(), "2137.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(101).as_rand(), 1.01);
    }

    #[test]
    fn test_discount_rate_display() {
        assert_eq!(DiscountRate::from_basis_points(500).to_string(), "5%");
        assert_eq!(DiscountRate::from_basis_points(1250).to_string(), "12.50%");
        assert_eq!(DiscountRate::from_basis_points(1500).as_fraction(), 0.15);
    }

    #[test]
    fn test_money_serializes_as_rand() {
        assert_eq!(serde_json::to_string(&Money::from_rand(2850)).unwrap(), "2850");
        assert_eq!(serde_json::to_string(&Money::from_cents(78_750)).unwrap(), "787.5");
        assert_eq!(
            serde_json::to_string(&DiscountRate::from_basis_points(1000)).unwrap(),
            "0.1"
        );
    }

    #[test]
    fn test_course_list_screen_per_group() {
        assert_eq!(Screen::course_list(CourseGroup::SixMonth), Screen::SixMonthCourses);
        assert_eq!(Screen::course_list(CourseGroup::SixWeek), Screen::SixWeekCourses);
    }

    #[test]
    fn test_course_group_parse() {
        assert_eq!("six-week".parse::<CourseGroup>(), Ok(CourseGroup::SixWeek));
        assert!("six-year".parse::<CourseGroup>().is_err());
    }
}
