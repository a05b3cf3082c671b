//! Type-erased containers
//!
//! [`Member`] lets heterogeneous `Data<S>` fields live side by side in a
//! [`DynamicModel`](crate::model::DynamicModel) and be verified through one
//! plan step kind.

use std::any::Any;

use crate::data::{Data, DataState};
use crate::descriptor::DataDescriptor;
use crate::foundation::{ModelContext, ValidationErrors};
use crate::state::StateValidator;

/// Object-safe view of a `Data<S>`.
pub trait Member: Send + Sync + 'static {
    /// Verifies the container, discarding the value.
    fn verify_member(&self, ctx: &ModelContext<'_>) -> Result<(), &ValidationErrors>;

    /// Observable state of the container.
    fn member_state(&self) -> DataState;

    /// Static description of the container's template.
    fn member_descriptor(&self) -> &DataDescriptor;

    /// Name of the concrete container type.
    fn member_type(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn clone_member(&self) -> Box<dyn Member>;
}

impl<S: StateValidator> Member for Data<S> {
    fn verify_member(&self, ctx: &ModelContext<'_>) -> Result<(), &ValidationErrors> {
        self.verify(ctx).map(|_| ())
    }

    fn member_state(&self) -> DataState {
        self.state()
    }

    fn member_descriptor(&self) -> &DataDescriptor {
        self.descriptor()
    }

    fn member_type(&self) -> &'static str {
        std::any::type_name::<S>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_member(&self) -> Box<dyn Member> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Member> {
    fn clone(&self) -> Self {
        self.clone_member()
    }
}

impl std::fmt::Debug for dyn Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("type", &self.member_type())
            .field("state", &self.member_state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StateValidatorExt, required};

    #[test]
    fn test_erased_verification() {
        let member: Box<dyn Member> = Box::new(required::<u8>().into_data().with_value(1));
        assert_eq!(member.member_state(), DataState::NotVerified);
        assert!(member.verify_member(&ModelContext::detached()).is_ok());
        assert_eq!(member.member_state(), DataState::Valid);
    }

    #[test]
    fn test_downcast_and_clone() {
        let member: Box<dyn Member> = Box::new(required::<u8>().into_data().with_value(7));
        let copy = member.clone();
        let data = copy.as_any().downcast_ref::<Data<crate::state::Required<u8>>>();
        assert_eq!(data.and_then(|d| d.presence().value()), Some(&7));
    }
}
