use crate::core::catalog::Catalog;
use crate::domain::model::{DiscountRate, Money, Quote};
use crate::utils::error::Result;

const TWO_COURSES: DiscountRate = DiscountRate::from_basis_points(500);
const THREE_COURSES: DiscountRate = DiscountRate::from_basis_points(1_000);
const FOUR_OR_MORE: DiscountRate = DiscountRate::from_basis_points(1_500);

/// Step function over the number of selected courses; tiers do not stack.
pub fn discount_rate(course_count: usize) -> DiscountRate {
    match course_count {
        0 | 1 => DiscountRate::NONE,
        2 => TWO_COURSES,
        3 => THREE_COURSES,
        _ => FOUR_OR_MORE,
    }
}

/// `subtotal * rate`, rounded half-up to the cent. Whole-Rand subtotals never round.
pub fn discount_amount(subtotal: Money, rate: DiscountRate) -> Money {
    let scaled = i128::from(subtotal.cents()) * i128::from(rate.basis_points());
    let cents = (scaled + 5_000) / 10_000;
    Money::from_cents(cents as i64)
}

/// Prices a selection. Pure: the same names always give the same quote.
pub fn compute_quote<S: AsRef<str>>(catalog: &Catalog, selection: &[S]) -> Result<Quote> {
    let subtotal = selection
        .iter()
        .map(|name| catalog.price_of(name.as_ref()))
        .sum::<Result<Money>>()?;

    let rate = discount_rate(selection.len());
    let discount = discount_amount(subtotal, rate);

    Ok(Quote {
        course_count: selection.len(),
        subtotal,
        discount_rate: rate,
        discount_amount: discount,
        total: subtotal - discount,
    })
}
