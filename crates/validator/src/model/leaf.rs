//! Leaf models
//!
//! Primitive values have no validated fields; their plan is empty and they
//! always verify successfully. This lets `Option<u32>`, `Vec<String>` and
//! similar values appear behind a [`Nested`](crate::state::Nested) policy.

crate::leaf_models!(
    bool, char, String, (), u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32,
    f64,
);

#[cfg(test)]
mod tests {
    use crate::model::PlanRegistry;

    #[test]
    fn test_leaf_models_verify() {
        let registry = PlanRegistry::new();
        assert!(registry.verify(&5_u32).is_ok());
        assert!(registry.verify(&"text".to_string()).is_ok());
        assert!(registry.verify(&()).is_ok());
        assert!(registry.verify(&vec![1.5_f64]).is_ok());
    }

    #[test]
    fn test_leaf_plan_is_empty() {
        let registry = PlanRegistry::new();
        let descriptor = registry.describe(&true).unwrap();
        assert!(descriptor.properties.is_empty());
    }
}
