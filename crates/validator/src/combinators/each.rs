//! EACH combinator - per-element verification of collections
//!
//! Both helpers visit every element and report failures under the element's
//! index; neither stops at the first failing element.

use crate::data::Data;
use crate::foundation::{ModelContext, ValidationError, ValidationErrors};
use crate::state::StateValidator;

/// Rejects null elements with a `NotNull` error at each null index.
///
/// Returns the unwrapped elements when none is null.
pub fn reject_null_items<T>(items: Vec<Option<T>>) -> Result<Vec<T>, ValidationErrors> {
    let mut errors: Option<ValidationErrors> = None;
    let mut present = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        match item {
            Some(item) => present.push(item),
            None => errors
                .get_or_insert_with(ValidationErrors::new)
                .add(ValidationError::not_null().under_index(index)),
        }
    }

    errors.map_or(Ok(present), Err)
}

/// Binds each element into a fresh copy of the `item` template and verifies
/// it against `ctx`, prefixing failures with the element index.
pub fn validate_each<'a, S>(
    item: &Data<S>,
    elements: impl IntoIterator<Item = (usize, &'a S::Raw)>,
    ctx: &ModelContext<'_>,
) -> Result<(), ValidationErrors>
where
    S: StateValidator,
{
    let mut errors: Option<ValidationErrors> = None;

    for (index, raw) in elements {
        let element = item.with_value(raw.clone());
        if let Err(failed) = element.verify(ctx) {
            errors
                .get_or_insert_with(ValidationErrors::new)
                .append(failed.clone().under_index(index));
        }
    }

    errors.map_or(Ok(()), Err)
}
