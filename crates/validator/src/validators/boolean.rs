//! Boolean validators

use crate::descriptor::ValueDescriptor;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a boolean value is `true`.
    pub IsTrue for bool;
    rule(input) { *input }
    error(input) { ValidationError::new("is_true", "Value must be true") }
    describe { ValueDescriptor::IsTrue }
    fn is_true();
}

crate::validator! {
    /// Validates that a boolean value is `false`.
    pub IsFalse for bool;
    rule(input) { !*input }
    error(input) { ValidationError::new("is_false", "Value must be false") }
    describe { ValueDescriptor::IsFalse }
    fn is_false();
}
