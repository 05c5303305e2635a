use crate::domain::model::{Course, CourseDetails, CourseGroup, Money};
use crate::utils::error::{Result, StorefrontError};

const SIX_MONTH_PRICE: Money = Money::from_rand(1500);
const SIX_WEEK_PRICE: Money = Money::from_rand(750);

static COURSES: [Course; 7] = [
    Course {
        name: "First Aid",
        price: SIX_MONTH_PRICE,
        group: CourseGroup::SixMonth,
        details: CourseDetails {
            purpose: "Essential skills for emergency situations.",
            topics: &[
                "Basic life support techniques",
                "Recognizing and responding to emergencies",
                "Managing wounds and injuries",
                "Understanding CPR and its application",
            ],
        },
    },
    Course {
        name: "Sewing",
        price: SIX_MONTH_PRICE,
        group: CourseGroup::SixMonth,
        details: CourseDetails {
            purpose: "Crafting garments with precision and creativity.",
            topics: &[
                "Mastering different sewing techniques",
                "Creating custom clothing",
                "Repairing and altering garments",
                "Exploring fabric types and uses",
            ],
        },
    },
    Course {
        name: "Life Skills",
        price: SIX_MONTH_PRICE,
        group: CourseGroup::SixMonth,
        details: CourseDetails {
            purpose: "Empowering you with practical life management skills.",
            topics: &[
                "Financial literacy essentials",
                "Navigating workplace rights and responsibilities",
                "Improving reading and writing skills",
                "Developing basic math skills",
            ],
        },
    },
    Course {
        name: "Landscaping",
        price: SIX_MONTH_PRICE,
        group: CourseGroup::SixMonth,
        details: CourseDetails {
            purpose: "Transforming outdoor spaces into beautiful landscapes.",
            topics: &[
                "Understanding plant care and maintenance",
                "Techniques for effective gardening",
                "Design principles for landscapes",
            ],
        },
    },
    Course {
        name: "Child Minding",
        price: SIX_WEEK_PRICE,
        group: CourseGroup::SixWeek,
        details: CourseDetails {
            purpose: "Comprehensive child care strategies.",
            topics: &[
                "Caring for infants and toddlers",
                "Engaging educational activities",
                "Safety and first aid for children",
                "Understanding child development stages",
            ],
        },
    },
    Course {
        name: "Cooking",
        price: SIX_WEEK_PRICE,
        group: CourseGroup::SixWeek,
        details: CourseDetails {
            purpose: "Building a foundation in culinary skills.",
            topics: &[
                "Meal prep and planning basics",
                "Healthy cooking practices",
                "Baking fundamentals",
                "Kitchen safety and hygiene",
            ],
        },
    },
    Course {
        name: "Garden Maintaining",
        price: SIX_WEEK_PRICE,
        group: CourseGroup::SixWeek,
        details: CourseDetails {
            purpose: "Sustaining healthy and vibrant gardens.",
            topics: &[
                "Effective watering and pruning techniques",
                "Understanding plant growth cycles",
                "Maintaining a diverse garden ecosystem",
            ],
        },
    },
];

/// Read-only course catalog. Names are exact, case-sensitive keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn all(&self) -> &'static [Course] {
        &COURSES
    }

    pub fn find(&self, name: &str) -> Result<&'static Course> {
        COURSES
            .iter()
            .find(|course| course.name == name)
            .ok_or_else(|| StorefrontError::unknown_course(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        COURSES.iter().any(|course| course.name == name)
    }

    pub fn price_of(&self, name: &str) -> Result<Money> {
        self.find(name).map(|course| course.price)
    }

    pub fn details_of(&self, name: &str) -> Result<&'static CourseDetails> {
        self.find(name).map(|course| &course.details)
    }

    /// Courses of a group in display order.
    pub fn courses_in(&self, group: CourseGroup) -> impl Iterator<Item = &'static Course> {
        COURSES.iter().filter(move |course| course.group == group)
    }
}
