//! Macros for declaring validators and leaf models with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: struct + `Validate` impl (with descriptor) + factory fn
//! - [`leaf_models!`]: `Model` impls with an empty plan for value types
//!
//! # Examples
//!
//! ```rust,ignore
//! use keel_validator::validator;
//! use keel_validator::descriptor::ValueDescriptor;
//! use keel_validator::foundation::ValidationError;
//!
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for String;
//!     rule(self, input) { input.chars().count() >= self.min }
//!     error(self, input) { ValidationError::new("min_length", "too short") }
//!     describe(self) { ValueDescriptor::MinLength { min: self.min } }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation
/// with a static descriptor, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub IsTrue for bool;
///     rule(input) { *input }
///     error(input) { ValidationError::new("is_true", "Must be true") }
///     describe { ValueDescriptor::IsTrue }
///     fn is_true();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxLength { max: usize } for String;
///     rule(self, input) { input.chars().count() <= self.max }
///     error(self, input) { ValidationError::new("max_length", "too long") }
///     describe(self) { ValueDescriptor::MaxLength { max: self.max } }
///     fn max_length(max: usize);
/// }
/// ```
///
/// **Generic validator** (single type parameter, simple bounds):
/// ```rust,ignore
/// validator! {
///     pub Min<T: PartialOrd + Display + Send + Sync> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { ValidationError::new("min", "too small") }
///     describe(self) { ValueDescriptor::Range { min: Some(self.min.to_string()), max: None } }
///     fn min(min: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        describe $desc:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn descriptor(&self) -> $crate::descriptor::ValueDescriptor $desc
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + auto new + factory fn ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        describe($self3:ident) $desc:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn descriptor(&$self3) -> $crate::descriptor::ValueDescriptor $desc
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new + factory fn ──────────────────────────
    //
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        describe($self3:ident) $desc:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn descriptor(&$self3) -> $crate::descriptor::ValueDescriptor $desc
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// LEAF MODEL MACRO
// ============================================================================

/// Implements [`Model`](crate::model::Model) with an empty plan for value
/// types that carry no validated fields.
///
/// Leaf models always verify successfully.
///
/// ```rust,ignore
/// keel_validator::leaf_models!(Money, Currency);
/// ```
#[macro_export]
macro_rules! leaf_models {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::Model for $ty {
                fn describe(&self, _plan: &mut $crate::model::PlanBuilder<'_, Self>) {}
            }
        )+
    };
}
