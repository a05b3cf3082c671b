//! Shared request models.

use keel_validator::prelude::*;

#[derive(Clone)]
pub struct Line {
    pub name: Data<Required<String>>,
    pub quantity: Data<Defaulted<u32>>,
}

impl Model for Line {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        plan.data("name", |l: &Line| &l.name)
            .data("quantity", |l: &Line| &l.quantity);
    }
}

pub fn line_name() -> Data<Required<String>> {
    required::<String>().into_data().with_validator(not_empty())
}

pub fn line_quantity() -> Data<Defaulted<u32>> {
    defaulted(1u32).into_data().with_validator(in_range(1u32, 99u32))
}

pub fn line(name: Option<&str>, quantity: Option<u32>) -> Line {
    let name_template = line_name();
    let quantity_template = line_quantity();
    Line {
        name: match name {
            Some(name) => name_template.with_value(name.to_string()),
            None => name_template.unset(),
        },
        quantity: match quantity {
            Some(quantity) => quantity_template.with_value(quantity),
            None => quantity_template.unset(),
        },
    }
}

/// An order whose lines are a plain field.
pub struct Order {
    pub customer: Data<Required<String>>,
    pub note: Data<OptionalNullable<String>>,
    pub lines: Vec<Line>,
}

impl Model for Order {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        plan.data("customer", |o: &Order| &o.customer)
            .data("note", |o: &Order| &o.note)
            .nested_each("items", |o: &Order| o.lines.as_slice());
    }
}

pub fn order(customer: Option<&str>, lines: Vec<Line>) -> Order {
    let customer_template = required::<String>().into_data().with_validator(min_length(2));
    Order {
        customer: match customer {
            Some(customer) => customer_template.with_value(customer.to_string()),
            None => customer_template.unset(),
        },
        note: optional_nullable::<String>().into_data().with_null(),
        lines,
    }
}
