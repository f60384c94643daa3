//! Cardinal rule bodies, one function per locale family.
//!
//! Conditions are transcribed from the CLDR rule syntax. `n` conditions
//! only hold for integer-valued quantities, since `n` is the full numeric
//! value and `n % 100 = 3..10` cannot match 3.5.

use std::ops::RangeInclusive;

use crate::category::Category;
use crate::operands::PluralOperands;

const TWO_TO_FOUR: RangeInclusive<u64> = 2..=4;
const TWELVE_TO_FOURTEEN: RangeInclusive<u64> = 12..=14;

fn in_range(range: RangeInclusive<u64>, value: u64) -> bool {
    range.contains(&value)
}

pub(super) fn default(_: &PluralOperands) -> Category {
    Category::OTHER
}

pub(super) fn english(n: &PluralOperands) -> Category {
    if n.integer_value() == Some(1) {
        Category::ONE
    } else {
        Category::OTHER
    }
}

pub(super) fn one_integer(n: &PluralOperands) -> Category {
    if n.i == 1 && n.v == 0 {
        Category::ONE
    } else {
        Category::OTHER
    }
}

pub(super) fn french(n: &PluralOperands) -> Category {
    if n.i <= 1 {
        Category::ONE
    } else if n.v == 0 && n.i % 1_000_000 == 0 {
        Category::MANY
    } else {
        Category::OTHER
    }
}

pub(super) fn romanian(n: &PluralOperands) -> Category {
    if n.i == 1 && n.v == 0 {
        Category::ONE
    } else if n.v != 0 || n.i == 0 || in_range(2..=19, n.i % 100) {
        Category::FEW
    } else {
        Category::OTHER
    }
}

pub(super) fn serbian(n: &PluralOperands) -> Category {
    let (i10, i100) = (n.i % 10, n.i % 100);
    let (f10, f100) = (n.f % 10, n.f % 100);

    if (n.v == 0 && i10 == 1 && i100 != 11) || (f10 == 1 && f100 != 11) {
        Category::ONE
    } else if (n.v == 0 && in_range(TWO_TO_FOUR, i10) && !in_range(TWELVE_TO_FOURTEEN, i100))
        || (in_range(TWO_TO_FOUR, f10) && !in_range(TWELVE_TO_FOURTEEN, f100))
    {
        Category::FEW
    } else {
        Category::OTHER
    }
}

pub(super) fn russian(n: &PluralOperands) -> Category {
    if n.v != 0 {
        return Category::OTHER;
    }
    let (i10, i100) = (n.i % 10, n.i % 100);

    if i10 == 1 && i100 != 11 {
        Category::ONE
    } else if in_range(TWO_TO_FOUR, i10) && !in_range(TWELVE_TO_FOURTEEN, i100) {
        Category::FEW
    } else if i10 == 0 || in_range(5..=9, i10) || in_range(11..=14, i100) {
        Category::MANY
    } else {
        Category::OTHER
    }
}

pub(super) fn polish(n: &PluralOperands) -> Category {
    if n.v != 0 {
        return Category::OTHER;
    }
    let (i10, i100) = (n.i % 10, n.i % 100);

    if n.i == 1 {
        Category::ONE
    } else if in_range(TWO_TO_FOUR, i10) && !in_range(TWELVE_TO_FOURTEEN, i100) {
        Category::FEW
    } else if i10 <= 1 || in_range(5..=9, i10) || in_range(TWELVE_TO_FOURTEEN, i100) {
        Category::MANY
    } else {
        Category::OTHER
    }
}

pub(super) fn czech(n: &PluralOperands) -> Category {
    if n.v != 0 {
        Category::MANY
    } else if n.i == 1 {
        Category::ONE
    } else if in_range(TWO_TO_FOUR, n.i) {
        Category::FEW
    } else {
        Category::OTHER
    }
}

pub(super) fn arabic(n: &PluralOperands) -> Category {
    let Some(value) = n.integer_value() else {
        return Category::OTHER;
    };

    match (value, value % 100) {
        (0, _) => Category::ZERO,
        (1, _) => Category::ONE,
        (2, _) => Category::TWO,
        (_, 3..=10) => Category::FEW,
        (_, 11..=99) => Category::MANY,
        _ => Category::OTHER,
    }
}
