use crate::core::catalog::Catalog;
use crate::domain::model::Screen;
use crate::utils::error::{Result, StorefrontError};

/// Resolves a screen name plus its optional course parameter.
pub fn route(catalog: &Catalog, name: &str, course: Option<&str>) -> Result<Screen> {
    let screen = match name {
        "Splash" => Screen::Splash,
        "Home" => Screen::Home,
        "Login" => Screen::Login,
        "Register" => Screen::Register,
        "SixMonthCourses" => Screen::SixMonthCourses,
        "SixWeekCourses" => Screen::SixWeekCourses,
        "CourseDetails" => {
            let course = course.ok_or_else(|| {
                StorefrontError::validation("course", "CourseDetails needs a course name")
            })?;
            Screen::CourseDetails {
                course: catalog.find(course)?.name.to_string(),
            }
        }
        "CalculateFees" => Screen::CalculateFees,
        "AboutUs" => Screen::AboutUs,
        "ContactUs" => Screen::ContactUs,
        other => {
            return Err(StorefrontError::UnknownScreen {
                name: other.to_string(),
            })
        }
    };
    Ok(screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trips_names() {
        let screens = [
            Screen::Splash,
            Screen::Home,
            Screen::Login,
            Screen::Register,
            Screen::SixMonthCourses,
            Screen::SixWeekCourses,
            Screen::CalculateFees,
            Screen::AboutUs,
            Screen::ContactUs,
        ];
        for screen in screens {
            assert_eq!(route(&Catalog, screen.name(), None).unwrap(), screen);
        }
    }

    #[test]
    fn test_course_details_needs_catalog_course() {
        let screen = route(&Catalog, "CourseDetails", Some("Cooking")).unwrap();
        assert_eq!(
            screen,
            Screen::CourseDetails {
                course: "Cooking".to_string()
            }
        );
        assert_eq!(screen.to_string(), "CourseDetails(Cooking)");

        assert!(matches!(
            route(&Catalog, "CourseDetails", Some("Pottery")),
            Err(StorefrontError::UnknownCourse { .. })
        ));
        assert!(route(&Catalog, "CourseDetails", None).is_err());
    }

    #[test]
    fn test_unknown_screen() {
        assert!(matches!(
            route(&Catalog, "Checkout", None),
            Err(StorefrontError::UnknownScreen { name }) if name == "Checkout"
        ));
    }
}
